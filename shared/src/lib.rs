//! Shared types for the order console
//!
//! Domain models and wire DTOs used by both the API client and the
//! console core.

pub mod models;
pub mod query;

// Re-exports
pub use serde::{Deserialize, Serialize};
