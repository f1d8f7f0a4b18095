//! # Portal API client
//!
//! [`PortalApi`] is the seam between the UI controllers and the network. The
//! controllers are generic over it, so the browser build plugs in [`HttpClient`]
//! while tests plug in a recording mock.
//!
//! ## Response handling
//!
//! Every call reads the full body as text and hands it to [`decode_body`]:
//!
//! - non-2xx → [`ApiError::Rejected`] carrying the body's `message` when the body is JSON;
//! - 2xx with a body that is not the expected JSON → [`ApiError::Malformed`];
//! - no response at all → [`ApiError::Network`].
//!
//! Application-level `success: false` flags are left to the caller
//! (see [`crate::Ack::into_result`]) because the envelopes differ per endpoint.

use std::future::Future;
use std::sync::Arc;

use reqwest::multipart::{Form, Part};
use reqwest::{Method, RequestBuilder};
use serde::de::DeserializeOwned;

use crate::error::ApiError;
use crate::models::{
    Ack, CategoryList, Credentials, DashboardStats, DbStatus, LoginResponse, NewProduct,
    ProductList, Registration,
};

/// Async interface to the portal HTTP API.
pub trait PortalApi {
    fn validate_user(
        &self,
        credentials: &Credentials,
    ) -> impl Future<Output = Result<LoginResponse, ApiError>>;
    fn register(
        &self,
        registration: &Registration,
    ) -> impl Future<Output = Result<Ack, ApiError>>;
    fn check_db(&self) -> impl Future<Output = Result<DbStatus, ApiError>>;
    fn dashboard_stats(&self) -> impl Future<Output = Result<DashboardStats, ApiError>>;
    fn get_products(&self) -> impl Future<Output = Result<ProductList, ApiError>>;
    fn delete_product(&self, id: i64) -> impl Future<Output = Result<Ack, ApiError>>;
    fn add_product(
        &self,
        product: &NewProduct,
    ) -> impl Future<Output = Result<Ack, ApiError>>;
    fn categories(&self) -> impl Future<Output = Result<CategoryList, ApiError>>;
}

/// `reqwest`-backed [`PortalApi`].
#[derive(Clone, Debug)]
pub struct HttpClient {
    client: reqwest::Client,
    base_url: Arc<str>,
}

impl HttpClient {
    /// `base_url` is the server origin, e.g. `http://localhost:5000`.
    pub fn new(base_url: &str) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: Arc::from(base_url.trim_end_matches('/')),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Every call goes through here so the session cookie is sent cross-origin.
    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let request = self.client.request(method, self.url(path));
        #[cfg(target_arch = "wasm32")]
        let request = request.fetch_credentials_include();
        request
    }

    async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, ApiError> {
        let status = response.status().as_u16();
        let body = response.text().await?;
        decode_body(status, &body)
    }
}

/// Turn a status code and raw body into a typed response.
pub fn decode_body<T: DeserializeOwned>(status: u16, body: &str) -> Result<T, ApiError> {
    if !(200..300).contains(&status) {
        return Err(ApiError::Rejected {
            status,
            message: extract_message(body),
        });
    }
    serde_json::from_str(body).map_err(|e| ApiError::Malformed(e.to_string()))
}

fn extract_message(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    value.get("message")?.as_str().map(str::to_string)
}

impl PortalApi for HttpClient {
    #[tracing::instrument(skip(self, credentials), fields(email = %credentials.email))]
    async fn validate_user(&self, credentials: &Credentials) -> Result<LoginResponse, ApiError> {
        let response = self
            .request(Method::POST, "/api/validate_user")
            .json(credentials)
            .send()
            .await?;
        Self::decode(response).await
    }

    #[tracing::instrument(skip(self, registration), fields(email = %registration.email))]
    async fn register(&self, registration: &Registration) -> Result<Ack, ApiError> {
        let response = self
            .request(Method::POST, "/seller_register")
            .json(registration)
            .send()
            .await?;
        Self::decode(response).await
    }

    #[tracing::instrument(skip(self))]
    async fn check_db(&self) -> Result<DbStatus, ApiError> {
        let response = self.request(Method::GET, "/api/check_db").send().await?;
        Self::decode(response).await
    }

    #[tracing::instrument(skip(self))]
    async fn dashboard_stats(&self) -> Result<DashboardStats, ApiError> {
        let response = self
            .request(Method::GET, "/api/dashboard_stats")
            .send()
            .await?;
        Self::decode(response).await
    }

    #[tracing::instrument(skip(self))]
    async fn get_products(&self) -> Result<ProductList, ApiError> {
        let response = self.request(Method::GET, "/api/get_products").send().await?;
        Self::decode(response).await
    }

    #[tracing::instrument(skip(self))]
    async fn delete_product(&self, id: i64) -> Result<Ack, ApiError> {
        let response = self
            .request(Method::DELETE, &format!("/api/delete_product/{id}"))
            .send()
            .await?;
        Self::decode(response).await
    }

    #[tracing::instrument(skip(self, product), fields(name = %product.name, image = %product.image.file_name))]
    async fn add_product(&self, product: &NewProduct) -> Result<Ack, ApiError> {
        let image = Part::bytes(product.image.bytes.clone())
            .file_name(product.image.file_name.clone())
            .mime_str(&product.image.content_type)
            .map_err(|e| ApiError::Malformed(e.to_string()))?;
        let form = Form::new()
            .text("name", product.name.clone())
            .text("price", product.price.to_string())
            .text("quantity", product.quantity.to_string())
            .text("category", product.category.clone())
            .part("image", image);

        let response = self
            .request(Method::POST, "/api/add_product")
            .multipart(form)
            .send()
            .await?;
        Self::decode(response).await
    }

    #[tracing::instrument(skip(self))]
    async fn categories(&self) -> Result<CategoryList, ApiError> {
        let response = self.request(Method::GET, "/api/categories").send().await?;
        Self::decode(response).await
    }
}
