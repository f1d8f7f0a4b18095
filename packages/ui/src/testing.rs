//! Recording [`PortalApi`] double for controller tests.

use std::sync::{Arc, Mutex};

use api::{
    Ack, ApiError, CategoryList, Credentials, DashboardStats, DbStatus, LoginResponse,
    NewProduct, PortalApi, Product, ProductList, Registration, UserSession,
};
use store::{MemoryStore, PortalConfig};

use crate::context::PortalContext;

/// One request as seen by the mock.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Call {
    ValidateUser(String),
    Register(String),
    CheckDb,
    DashboardStats,
    GetProducts,
    DeleteProduct(i64),
    AddProduct(String),
    Categories,
}

/// Canned responses, cloned on every call.
#[derive(Clone)]
pub struct MockApi {
    pub(crate) calls: Arc<Mutex<Vec<Call>>>,
    pub login: Result<LoginResponse, ApiError>,
    pub register: Result<Ack, ApiError>,
    pub db: Result<DbStatus, ApiError>,
    pub stats: Result<DashboardStats, ApiError>,
    pub products: Result<ProductList, ApiError>,
    pub delete: Result<Ack, ApiError>,
    pub add: Result<Ack, ApiError>,
    pub categories: Result<CategoryList, ApiError>,
}

impl Default for MockApi {
    fn default() -> Self {
        Self {
            calls: Arc::default(),
            login: Ok(LoginResponse {
                valid: true,
                user: Some(UserSession::new("Ana", "ana@shop.com")),
                message: None,
            }),
            register: Ok(Ack::ok()),
            db: Ok(DbStatus {
                success: true,
                message: Some("Database connected".to_string()),
                user_count: Some(1),
            }),
            stats: Ok(DashboardStats::default()),
            products: Ok(ProductList {
                success: true,
                products: Vec::new(),
                message: None,
            }),
            delete: Ok(Ack::ok()),
            add: Ok(Ack::ok()),
            categories: Ok(CategoryList::default()),
        }
    }
}

impl MockApi {
    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    pub fn count(&self, call: &Call) -> usize {
        self.calls().iter().filter(|c| *c == call).count()
    }

    fn record(&self, call: Call) {
        self.calls.lock().unwrap().push(call);
    }
}

impl PortalApi for MockApi {
    async fn validate_user(&self, credentials: &Credentials) -> Result<LoginResponse, ApiError> {
        self.record(Call::ValidateUser(credentials.email.clone()));
        self.login.clone()
    }

    async fn register(&self, registration: &Registration) -> Result<Ack, ApiError> {
        self.record(Call::Register(registration.email.clone()));
        self.register.clone()
    }

    async fn check_db(&self) -> Result<DbStatus, ApiError> {
        self.record(Call::CheckDb);
        self.db.clone()
    }

    async fn dashboard_stats(&self) -> Result<DashboardStats, ApiError> {
        self.record(Call::DashboardStats);
        self.stats.clone()
    }

    async fn get_products(&self) -> Result<ProductList, ApiError> {
        self.record(Call::GetProducts);
        self.products.clone()
    }

    async fn delete_product(&self, id: i64) -> Result<Ack, ApiError> {
        self.record(Call::DeleteProduct(id));
        self.delete.clone()
    }

    async fn add_product(&self, product: &NewProduct) -> Result<Ack, ApiError> {
        self.record(Call::AddProduct(product.name.clone()));
        self.add.clone()
    }

    async fn categories(&self) -> Result<CategoryList, ApiError> {
        self.record(Call::Categories);
        self.categories.clone()
    }
}

pub fn context(api: MockApi) -> PortalContext<MockApi, MemoryStore> {
    PortalContext::new(api, MemoryStore::new(), PortalConfig::default())
}

pub fn product(id: i64, name: &str) -> Product {
    Product {
        id,
        name: name.to_string(),
        price: 10.0,
        quantity: 1,
        category: Some("General".to_string()),
        image_path: None,
        created_at: Some("2024-05-01 10:00:00".to_string()),
    }
}
