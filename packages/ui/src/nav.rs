//! Portal pages as plain values, independent of the router that renders them.

use crate::notice::Notice;

/// A page of the portal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Destination {
    Login,
    Register,
    Overview,
    Products,
    AddProduct,
}

/// Entries of the portal navigation, in display order.
pub const NAV_ITEMS: [Destination; 3] = [
    Destination::Overview,
    Destination::Products,
    Destination::AddProduct,
];

impl Destination {
    pub fn path(&self) -> &'static str {
        match self {
            Self::Login => "/seller_login",
            Self::Register => "/seller_register",
            Self::Overview => "/overview",
            Self::Products => "/products",
            Self::AddProduct => "/add_product",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Login => "Login",
            Self::Register => "Register",
            Self::Overview => "Overview",
            Self::Products => "Products",
            Self::AddProduct => "Add Product",
        }
    }

    /// Document title of the page.
    pub fn title(&self) -> String {
        format!("{} - Seller Portal", self.label())
    }

    pub fn from_path(path: &str) -> Option<Self> {
        let path = path.trim_end_matches(".html");
        [
            Self::Login,
            Self::Register,
            Self::Overview,
            Self::Products,
            Self::AddProduct,
        ]
        .into_iter()
        .find(|d| d.path() == path)
    }
}

/// One navigation entry with its active flag.
#[derive(Clone, Debug, PartialEq)]
pub struct NavItem {
    pub destination: Destination,
    pub active: bool,
}

/// Navigation entries for the page at `current_path`; exactly the entry whose
/// path matches is active.
pub fn nav_items(current_path: &str) -> Vec<NavItem> {
    let current = Destination::from_path(current_path);
    NAV_ITEMS
        .iter()
        .map(|&destination| NavItem {
            destination,
            active: current == Some(destination),
        })
        .collect()
}

/// Where a page goes after a successful action.
#[derive(Clone, Debug, PartialEq)]
pub struct Redirect {
    pub to: Destination,
    /// Time the notice stays visible before navigating.
    pub delay_ms: u32,
    pub notice: Option<Notice>,
}

impl Redirect {
    pub fn now(to: Destination) -> Self {
        Self {
            to,
            delay_ms: 0,
            notice: None,
        }
    }

    pub fn after(to: Destination, delay_ms: u32, notice: Notice) -> Self {
        Self {
            to,
            delay_ms,
            notice: Some(notice),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exactly_one_active_item() {
        let items = nav_items("/products");
        assert_eq!(items.len(), 3);
        assert_eq!(items.iter().filter(|i| i.active).count(), 1);
        assert!(items[1].active);
        assert_eq!(items[1].destination, Destination::Products);
    }

    #[test]
    fn test_unknown_path_has_no_active_item() {
        assert!(nav_items("/reports").iter().all(|i| !i.active));
        assert!(nav_items("/seller_login").iter().all(|i| !i.active));
    }

    #[test]
    fn test_legacy_html_paths() {
        assert_eq!(
            Destination::from_path("/seller_login.html"),
            Some(Destination::Login)
        );
        assert_eq!(Destination::from_path("/overview"), Some(Destination::Overview));
    }
}
