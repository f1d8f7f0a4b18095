use dioxus::prelude::*;
use ui::{Notice, Redirect};

use crate::Route;

mod login;
pub use login::Login;

mod register;
pub use register::Register;

mod shell;
pub use shell::PortalShell;

mod overview;
pub use overview::Overview;

mod products;
pub use products::Products;

mod add_product;
pub use add_product::AddProduct;

/// Show the redirect's notice, wait out its delay, then navigate.
pub(crate) async fn follow(redirect: Redirect, mut notice: Signal<Option<Notice>>, nav: Navigator) {
    if let Some(message) = redirect.notice {
        notice.set(Some(message));
    }
    ui::timer::sleep_ms(redirect.delay_ms).await;
    nav.replace(Route::from(redirect.to));
}
