//! Sale post model

use serde::{Deserialize, Serialize};

use super::pricing::Item;

/// A sale post: description, extracted product options, and order
/// bookkeeping metadata.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Post {
    pub id: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub items: Vec<Item>,
    #[serde(default)]
    pub tags: Vec<String>,
    /// Admin-only purchase cost; absent for non-admin accounts.
    #[serde(default)]
    pub import_price: Option<f64>,
    #[serde(default)]
    pub orders_last_update_at: Option<String>,
    #[serde(default)]
    pub local_images: Vec<String>,
    #[serde(default)]
    pub created_time: Option<String>,
    #[serde(default)]
    pub updated_time: Option<String>,
}

/// Partial post update.
#[derive(Debug, Clone, Default, Serialize)]
pub struct PostPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub items: Option<Vec<Item>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub import_price: Option<f64>,
}
