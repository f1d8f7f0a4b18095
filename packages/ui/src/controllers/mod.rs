//! Page controllers. Each owns a [`PortalContext`](crate::PortalContext) and
//! exposes the page's operations as plain async methods, so they run the same
//! under the router and under `#[tokio::test]`.

pub mod add_product;
pub mod dashboard;
pub mod login;
pub mod products;
pub mod register;

pub use add_product::{preview_data_url, AddProductController, AddProductForm, ProductFields};
pub use dashboard::{DashboardController, StatsView};
pub use login::{LoginController, LoginFields, LoginForm};
pub use products::{ListView, ProductCard, ProductListController};
pub use register::{RegisterController, RegisterFields, RegisterForm};
