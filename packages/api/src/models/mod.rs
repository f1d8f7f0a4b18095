//! Wire models for the portal API.

mod product;
mod requests;
mod responses;
mod stats;

pub use product::Product;
pub use requests::{content_type_for, Credentials, ImageUpload, NewProduct, Registration};
pub use responses::{Ack, CategoryList, DbStatus, LoginResponse, ProductList};
pub use stats::DashboardStats;
