//! Dashboard endpoint (admin only)

use crate::{ApiClient, ClientResult};
use shared::models::DashboardSummary;

impl ApiClient {
    /// Revenue and order statistics for the configured group.
    pub async fn dashboard(&self) -> ClientResult<DashboardSummary> {
        let group = self.group()?;
        self.get(&format!("dashboard/groups/{group}")).await
    }
}
