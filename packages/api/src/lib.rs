//! # API crate: typed client for the seller portal HTTP API
//!
//! Every page of the portal talks to the same small set of endpoints. This crate
//! owns the wire contract and nothing else: request/response models, the
//! [`PortalApi`] trait the UI controllers are written against, the
//! `reqwest`-based [`HttpClient`] that implements it, and the pure field
//! validation rules that run before anything is sent.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`client`] | [`PortalApi`] trait and the [`HttpClient`] implementation |
//! | [`error`] | [`ApiError`]: transport, rejection and decoding failures |
//! | [`models`] | Products, dashboard stats, request payloads and response envelopes |
//! | [`validation`] | Email/password/name/product rules and live input clamping |
//!
//! ## Endpoints
//!
//! | Method | Path | Trait method |
//! |--------|------|--------------|
//! | `POST` | `/api/validate_user` | [`PortalApi::validate_user`] |
//! | `POST` | `/seller_register` | [`PortalApi::register`] |
//! | `GET` | `/api/check_db` | [`PortalApi::check_db`] |
//! | `GET` | `/api/dashboard_stats` | [`PortalApi::dashboard_stats`] |
//! | `GET` | `/api/get_products` | [`PortalApi::get_products`] |
//! | `DELETE` | `/api/delete_product/:id` | [`PortalApi::delete_product`] |
//! | `POST` | `/api/add_product` (multipart) | [`PortalApi::add_product`] |
//! | `GET` | `/api/categories` | [`PortalApi::categories`] |

pub mod client;
pub mod error;
pub mod models;
pub mod validation;

pub use client::{HttpClient, PortalApi};
pub use error::{ApiError, CONNECTION_ERROR};
pub use models::{
    Ack, CategoryList, Credentials, DashboardStats, DbStatus, ImageUpload, LoginResponse,
    NewProduct, Product, ProductList, Registration,
};
pub use validation::{Field, FieldError, FieldState, ValidationError};

pub use store::UserSession;
