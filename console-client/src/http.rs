//! HTTP transport for the backend API

use crate::{ClientConfig, ClientError, ClientResult};
use reqwest::{Client, RequestBuilder};
use serde::Serialize;
use serde::de::DeserializeOwned;
use shared::models::{Account, LoginRequest, RegisterRequest, TokenResponse};

/// Async client for the backend REST API.
///
/// Cheap to clone. A bearer token, once set, is attached to every request
/// until [`ApiClient::logout`] clears it. There is no retry policy: a
/// failed request is terminal for that action and the caller decides
/// whether to retry.
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
    group_id: Option<String>,
    token: Option<String>,
}

impl ApiClient {
    /// Create a new API client from configuration.
    pub fn new(config: &ClientConfig) -> Self {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout))
            .build()
            .expect("Failed to build HTTP client");

        Self {
            client,
            base_url: config.base_url.clone(),
            group_id: config.group_id.clone(),
            token: config.token.clone(),
        }
    }

    /// Set the authentication token
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Get the current token
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    /// Whether a bearer token is present.
    pub fn is_logged_in(&self) -> bool {
        self.token.is_some()
    }

    /// The configured group identifier, or an error for group-scoped calls.
    pub(crate) fn group(&self) -> ClientResult<&str> {
        self.group_id.as_deref().ok_or(ClientError::MissingGroup)
    }

    fn url(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    /// Build authorization header value
    fn auth_header(&self) -> Option<String> {
        self.token.as_ref().map(|t| format!("Bearer {}", t))
    }

    async fn send<T: DeserializeOwned>(&self, mut request: RequestBuilder) -> ClientResult<T> {
        if let Some(auth) = self.auth_header() {
            request = request.header(reqwest::header::AUTHORIZATION, auth);
        }
        let response = request.send().await?;
        Self::handle_response(response).await
    }

    /// Make a GET request
    pub(crate) async fn get<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        self.send(self.client.get(self.url(path))).await
    }

    /// Make a GET request with query parameters
    pub(crate) async fn get_with<T, Q>(&self, path: &str, query: &Q) -> ClientResult<T>
    where
        T: DeserializeOwned,
        Q: Serialize + ?Sized,
    {
        self.send(self.client.get(self.url(path)).query(query)).await
    }

    /// Make a POST request with JSON body
    pub(crate) async fn post<T, B>(&self, path: &str, body: &B) -> ClientResult<T>
    where
        T: DeserializeOwned,
        B: Serialize,
    {
        self.send(self.client.post(self.url(path)).json(body)).await
    }

    /// Make a PATCH request with JSON body
    pub(crate) async fn patch<T, B>(&self, path: &str, body: &B) -> ClientResult<T>
    where
        T: DeserializeOwned,
        B: Serialize,
    {
        self.send(self.client.patch(self.url(path)).json(body)).await
    }

    /// Make a DELETE request
    pub(crate) async fn delete<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        self.send(self.client.delete(self.url(path))).await
    }

    /// Handle the HTTP response
    async fn handle_response<T: DeserializeOwned>(response: reqwest::Response) -> ClientResult<T> {
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await?;
            tracing::debug!(%status, "backend rejected request");
            return Err(ClientError::from_status(status, &body));
        }

        response.json().await.map_err(Into::into)
    }

    // ========== Auth API ==========

    /// Login with username and password. On success the bearer token is
    /// kept and attached to subsequent requests.
    pub async fn login(&mut self, username: &str, password: &str) -> ClientResult<TokenResponse> {
        let request = LoginRequest {
            username: username.to_string(),
            password: password.to_string(),
        };

        let token: TokenResponse = self.post("auth/login", &request).await?;
        self.token = Some(token.access_token.clone());
        tracing::debug!(username, "logged in");
        Ok(token)
    }

    /// Get the current account
    pub async fn me(&self) -> ClientResult<Account> {
        self.get("auth/me").await
    }

    /// Register a new console account (admin screens)
    pub async fn register(&self, request: &RegisterRequest) -> ClientResult<Account> {
        self.post("auth/register", request).await
    }

    /// List console accounts (admin only)
    pub async fn accounts(&self) -> ClientResult<Vec<Account>> {
        self.get("auth/users").await
    }

    /// Drop the bearer token. The backend is stateless, so logout is a
    /// purely local operation.
    pub fn logout(&mut self) {
        self.token = None;
    }

    /// Backend health probe
    pub async fn health(&self) -> ClientResult<serde_json::Value> {
        self.get("health").await
    }
}
