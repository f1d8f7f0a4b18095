mod field;
pub use field::{FileField, TextField};

mod submit;
pub use submit::SubmitButton;

mod product_card;
pub use product_card::ProductCardView;

mod stat_card;
pub use stat_card::StatCard;
