//! Status registry endpoints

use crate::{ApiClient, ClientResult};
use shared::models::{Ack, StatusDef, StatusPayload};

impl ApiClient {
    /// List status definitions, optionally only active ones. The backend
    /// sorts by `view_order` ascending.
    pub async fn list_statuses(&self, active: Option<bool>) -> ClientResult<Vec<StatusDef>> {
        match active {
            Some(active) => self.get_with("statuses/", &[("active", active)]).await,
            None => self.get("statuses/").await,
        }
    }

    /// Fetch a single status definition.
    pub async fn get_status(&self, status_code: &str) -> ClientResult<StatusDef> {
        self.get(&format!("statuses/{status_code}")).await
    }

    /// Create a status definition. Conflicts when the code already exists.
    pub async fn create_status(&self, body: &StatusPayload) -> ClientResult<StatusDef> {
        self.post("statuses/", body).await
    }

    /// Replace a status definition.
    pub async fn update_status(
        &self,
        status_code: &str,
        body: &StatusPayload,
    ) -> ClientResult<StatusDef> {
        self.patch(&format!("statuses/{status_code}"), body).await
    }

    /// Delete a status definition. Orders referencing the code keep it;
    /// there is no referential enforcement.
    pub async fn delete_status(&self, status_code: &str) -> ClientResult<Ack> {
        self.delete(&format!("statuses/{status_code}")).await
    }
}
