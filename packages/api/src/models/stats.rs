use serde::{Deserialize, Deserializer, Serialize};

/// Decode a counter where both a missing key and `null` mean zero.
fn null_as_zero<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Aggregate counters shown on the overview page.
///
/// Missing or `null` fields decode as zero, and [`DashboardStats::default`] is what the
/// overview shows when the stats endpoint fails.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct DashboardStats {
    #[serde(default, deserialize_with = "null_as_zero")]
    pub total_products: u64,
    #[serde(default, deserialize_with = "null_as_zero")]
    pub total_customers: u64,
    #[serde(default, deserialize_with = "null_as_zero")]
    pub total_sales: u64,
    #[serde(default, deserialize_with = "null_as_zero")]
    pub total_revenue: f64,
}

impl DashboardStats {
    /// Revenue as `$X.XX`.
    pub fn revenue_label(&self) -> String {
        format!("${:.2}", self.total_revenue)
    }
}
