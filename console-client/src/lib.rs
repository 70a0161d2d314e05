//! Console Client - HTTP client for the order console backend
//!
//! Typed async wrappers over the backend REST API: auth, posts, orders,
//! statuses, customers, and the dashboard.

pub mod api;
pub mod config;
pub mod error;
pub mod http;

pub use config::ClientConfig;
pub use error::{ClientError, ClientResult};
pub use http::ApiClient;

// Re-export shared types for convenience
pub use shared::models::{Account, LoginRequest, TokenResponse};
