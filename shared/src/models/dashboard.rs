//! Dashboard payload
//!
//! Revenue and order statistics computed by the backend for the current
//! year; the wire uses camelCase keys.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct MonthlyRevenue {
    pub month: u32,
    pub revenue: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummary {
    pub total_revenue: f64,
    pub monthly_revenue: f64,
    pub total_orders: u64,
    pub monthly_orders: u64,
    #[serde(default)]
    pub monthly_revenue_data: Vec<MonthlyRevenue>,
    pub pending_orders: i64,
    pub new_orders: u64,
    pub ordered_orders: u64,
    pub received_orders: u64,
    pub delivering_orders: u64,
    pub done_orders: u64,
    pub cancelled_orders: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wire_keys_are_camel_case() {
        let parsed: DashboardSummary = serde_json::from_str(
            r#"{
                "totalRevenue": 1200000.0, "monthlyRevenue": 300000.0,
                "totalOrders": 42, "monthlyOrders": 7,
                "monthlyRevenueData": [{"month": 1, "revenue": 300000.0}],
                "pendingOrders": 12, "newOrders": 5, "orderedOrders": 4,
                "receivedOrders": 2, "deliveringOrders": 1,
                "doneOrders": 25, "cancelledOrders": 5
            }"#,
        )
        .unwrap();
        assert_eq!(parsed.total_orders, 42);
        assert_eq!(parsed.monthly_revenue_data.len(), 1);
        assert_eq!(parsed.pending_orders, 12);
    }
}
