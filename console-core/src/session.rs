//! Console session
//!
//! Explicit application state: the API client and the logged-in account.
//! Owned by the console entry point and passed down to the screens that
//! need it; there is no ambient global.

use console_client::{ApiClient, ClientConfig, ClientResult};
use shared::models::Account;

#[derive(Debug, Clone)]
pub struct Session {
    client: ApiClient,
    account: Option<Account>,
}

impl Session {
    pub fn new(config: &ClientConfig) -> Self {
        Self {
            client: config.build(),
            account: None,
        }
    }

    pub fn client(&self) -> &ApiClient {
        &self.client
    }

    pub fn account(&self) -> Option<&Account> {
        self.account.as_ref()
    }

    pub fn is_logged_in(&self) -> bool {
        self.account.is_some()
    }

    /// Obtain a bearer token and cache the account it belongs to.
    pub async fn login(&mut self, username: &str, password: &str) -> ClientResult<&Account> {
        self.client.login(username, password).await?;
        let account = self.client.me().await?;
        tracing::info!(user = %account.username, role = ?account.role, "logged in");
        Ok(self.account.insert(account))
    }

    /// Drop the token and the cached account. Local only; the backend is
    /// stateless.
    pub fn logout(&mut self) {
        self.client.logout();
        self.account = None;
        tracing::info!("logged out");
    }
}
