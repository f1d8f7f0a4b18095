//! # Product as served by `/api/get_products`
//!
//! The server speaks Portuguese column names (`nome`, `preco`, `quantidade`,
//! `categoria`, `data_cadastro`); [`Product`] maps them onto English field
//! names with `serde(rename)` so nothing past this module sees the wire names.
//! The client never mutates a product: each list render holds a fresh copy.

use serde::{Deserialize, Serialize};

/// A product owned by the logged-in seller.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: i64,
    #[serde(rename = "nome")]
    pub name: String,
    #[serde(rename = "preco")]
    pub price: f64,
    #[serde(rename = "quantidade")]
    pub quantity: i64,
    #[serde(rename = "categoria", default)]
    pub category: Option<String>,
    #[serde(default)]
    pub image_path: Option<String>,
    #[serde(rename = "data_cadastro", default)]
    pub created_at: Option<String>,
}

impl Product {
    /// Price in reais, e.g. `R$ 12.50`.
    pub fn price_label(&self) -> String {
        format!("R$ {:.2}", self.price)
    }

    pub fn category_label(&self) -> &str {
        match self.category.as_deref().map(str::trim) {
            Some(c) if !c.is_empty() => c,
            _ => "N/A",
        }
    }

    /// Calendar date the product was added (`YYYY-MM-DD`), dropping any time part.
    pub fn added_on(&self) -> Option<&str> {
        let raw = self.created_at.as_deref()?.trim();
        raw.split(['T', ' ']).next().filter(|d| !d.is_empty())
    }
}
