//! Product list controller: load, render state and delete-with-confirmation.

use api::{ApiError, PortalApi, Product, CONNECTION_ERROR};
use store::{KeyValueStore, PortalConfig};

use crate::context::PortalContext;

pub const EMPTY_TITLE: &str = "No products found";
pub const EMPTY_HINT: &str = "Start by adding your first product!";
pub const LOAD_ERROR: &str = "Error loading products";
pub const DELETE_CONFIRMATION: &str = "Are you sure you want to delete this product?";
pub const DELETE_ERROR: &str = "Error deleting product";

/// What the product area shows.
#[derive(Clone, Debug, PartialEq)]
pub enum ListView {
    Loading,
    Empty,
    Grid(Vec<ProductCard>),
    Error(String),
}

/// Display-ready product, with its image URL resolved.
#[derive(Clone, Debug, PartialEq)]
pub struct ProductCard {
    pub id: i64,
    pub name: String,
    pub price: String,
    pub quantity: i64,
    pub category: String,
    pub added_on: Option<String>,
    pub image_url: String,
}

impl ProductCard {
    pub fn from_product(product: &Product, config: &PortalConfig) -> Self {
        Self {
            id: product.id,
            name: product.name.clone(),
            price: product.price_label(),
            quantity: product.quantity,
            category: product.category_label().to_string(),
            added_on: product.added_on().map(str::to_string),
            image_url: config.image_url(product.image_path.as_deref()),
        }
    }
}

pub struct ProductListController<A, S> {
    ctx: PortalContext<A, S>,
}

impl<A: PortalApi, S: KeyValueStore> ProductListController<A, S> {
    pub fn new(ctx: PortalContext<A, S>) -> Self {
        Self { ctx }
    }

    /// Fetch the seller's products and turn the reply into a view.
    pub async fn load(&self) -> ListView {
        match self.ctx.api.get_products().await.and_then(|r| r.into_products()) {
            Ok(products) if products.is_empty() => ListView::Empty,
            Ok(products) => {
                tracing::debug!("Loaded {} products", products.len());
                ListView::Grid(
                    products
                        .iter()
                        .map(|p| ProductCard::from_product(p, &self.ctx.config))
                        .collect(),
                )
            }
            Err(ApiError::Network(e)) => {
                tracing::warn!("Could not reach the server: {}", e);
                ListView::Error(CONNECTION_ERROR.to_string())
            }
            Err(e) => {
                tracing::warn!("Failed to load products: {}", e);
                ListView::Error(LOAD_ERROR.to_string())
            }
        }
    }

    /// Delete product `id` once `confirm` accepts [`DELETE_CONFIRMATION`].
    ///
    /// Returns the view to show next: the refetched list on success, an error
    /// panel on failure, `None` when the user declined.
    pub async fn delete(&self, id: i64, confirm: impl FnOnce(&str) -> bool) -> Option<ListView> {
        if !confirm(DELETE_CONFIRMATION) {
            return None;
        }

        match self.ctx.api.delete_product(id).await.and_then(|ack| ack.into_result()) {
            Ok(_) => {
                tracing::info!("Deleted product {}", id);
                Some(self.load().await)
            }
            Err(e) => {
                tracing::warn!("Failed to delete product {}: {}", id, e);
                Some(ListView::Error(e.user_message(DELETE_ERROR)))
            }
        }
    }
}
