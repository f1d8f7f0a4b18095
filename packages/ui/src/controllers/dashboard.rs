//! Overview page and portal shell controller.

use std::time::Duration;

use api::{DashboardStats, PortalApi, UserSession};
use store::KeyValueStore;

use crate::context::PortalContext;
use crate::nav::Destination;

/// The four overview counters, formatted for display.
#[derive(Clone, Debug, PartialEq)]
pub struct StatsView {
    pub total_products: String,
    pub total_customers: String,
    pub total_sales: String,
    pub total_revenue: String,
}

impl From<&DashboardStats> for StatsView {
    fn from(stats: &DashboardStats) -> Self {
        Self {
            total_products: stats.total_products.to_string(),
            total_customers: stats.total_customers.to_string(),
            total_sales: stats.total_sales.to_string(),
            total_revenue: stats.revenue_label(),
        }
    }
}

impl Default for StatsView {
    fn default() -> Self {
        Self::from(&DashboardStats::default())
    }
}

pub struct DashboardController<A, S> {
    ctx: PortalContext<A, S>,
}

impl<A: PortalApi, S: KeyValueStore> DashboardController<A, S> {
    pub fn new(ctx: PortalContext<A, S>) -> Self {
        Self { ctx }
    }

    /// Fetch the counters. Any failure renders as zeros.
    pub async fn load_stats(&self) -> StatsView {
        match self.ctx.api.dashboard_stats().await {
            Ok(stats) => StatsView::from(&stats),
            Err(e) => {
                tracing::warn!("Failed to load dashboard stats, showing zeros: {}", e);
                StatsView::default()
            }
        }
    }

    /// Period between stats reloads, `None` when disabled.
    pub fn refresh_interval(&self) -> Option<Duration> {
        match self.ctx.config.dashboard.refresh_interval_secs {
            0 => None,
            secs => Some(Duration::from_secs(u64::from(secs))),
        }
    }

    pub fn current_user(&self) -> Option<UserSession> {
        self.ctx.current_user()
    }

    /// Drop the stored profile and any per-tab state, then go to login.
    pub fn logout(&self) -> Destination {
        self.ctx.session.clear();
        tracing::info!("Logged out");
        Destination::Login
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{context, Call, MockApi};
    use api::ApiError;
    use store::{MemoryStore, PortalConfig};

    #[tokio::test]
    async fn test_stats_formatting() {
        let api = MockApi {
            stats: Ok(DashboardStats {
                total_products: 12,
                total_customers: 3,
                total_sales: 40,
                total_revenue: 1234.5,
            }),
            ..MockApi::default()
        };
        let controller = DashboardController::new(context(api.clone()));

        let view = controller.load_stats().await;

        assert_eq!(view.total_products, "12");
        assert_eq!(view.total_customers, "3");
        assert_eq!(view.total_sales, "40");
        assert_eq!(view.total_revenue, "$1234.50");
        assert_eq!(api.count(&Call::DashboardStats), 1);
    }

    #[tokio::test]
    async fn test_failure_shows_zeros() {
        let api = MockApi {
            stats: Err(ApiError::Network("refused".to_string())),
            ..MockApi::default()
        };
        let view = DashboardController::new(context(api)).load_stats().await;

        assert_eq!(
            view,
            StatsView {
                total_products: "0".to_string(),
                total_customers: "0".to_string(),
                total_sales: "0".to_string(),
                total_revenue: "$0.00".to_string(),
            }
        );
    }

    #[test]
    fn test_refresh_interval() {
        let controller = DashboardController::new(context(MockApi::default()));
        assert_eq!(controller.refresh_interval(), Some(Duration::from_secs(30)));

        let mut config = PortalConfig::default();
        config.dashboard.refresh_interval_secs = 0;
        let ctx = PortalContext::new(MockApi::default(), MemoryStore::new(), config);
        assert_eq!(DashboardController::new(ctx).refresh_interval(), None);
    }

    #[test]
    fn test_logout_clears_session() {
        let store = MemoryStore::new();
        let ctx = PortalContext::new(MockApi::default(), store.clone(), PortalConfig::default());
        ctx.session.save(&UserSession::new("Ana", "ana@shop.com")).unwrap();
        store.set_transient("draft", "1");

        let controller = DashboardController::new(ctx.clone());
        assert_eq!(
            controller.current_user().map(|u| u.greeting()),
            Some("Welcome, Ana".to_string())
        );

        assert_eq!(controller.logout(), Destination::Login);
        assert!(ctx.current_user().is_none());
        assert_eq!(store.transient_len(), 0);
    }
}
