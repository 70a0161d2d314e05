//! Customer endpoints

use crate::{ApiClient, ClientResult};
use shared::models::{Customer, CustomerPatch};
use shared::query::{ListQuery, Paginated};

impl ApiClient {
    /// List customers, paginated; `q` matches uid, username, or name.
    pub async fn list_customers(&self, query: &ListQuery) -> ClientResult<Paginated<Customer>> {
        self.get_with("users/", query).await
    }

    /// Fetch a customer by uid.
    pub async fn get_customer(&self, uid: &str) -> ClientResult<Customer> {
        self.get(&format!("users/{uid}")).await
    }

    /// Partially update a customer profile.
    pub async fn update_customer(
        &self,
        uid: &str,
        patch: &CustomerPatch,
    ) -> ClientResult<Customer> {
        self.patch(&format!("users/{uid}"), patch).await
    }
}
