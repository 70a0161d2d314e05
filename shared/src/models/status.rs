//! Order status registry types

use serde::{Deserialize, Serialize};

/// Initial status code assigned to new orders.
pub const STATUS_NEW: &str = "NEW";

/// Terminal status codes. Orders in these states are finished and are
/// excluded from the default board filter.
pub const TERMINAL_STATUS_CODES: [&str; 2] = ["DONE", "CANCELLED"];

/// A status definition from the registry.
///
/// `status_code` is the unique key; orders reference it with no
/// client-side referential enforcement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatusDef {
    pub id: String,
    pub status_code: String,
    pub display_name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default = "default_true")]
    pub is_active: bool,
    #[serde(default)]
    pub view_order: Option<i32>,
}

impl StatusDef {
    /// Whether this status ends an order's lifecycle.
    pub fn is_terminal(&self) -> bool {
        TERMINAL_STATUS_CODES.contains(&self.status_code.as_str())
    }
}

/// Create/update payload for a status definition.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusPayload {
    pub status_code: String,
    pub display_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub is_active: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub view_order: Option<i32>,
}

pub(crate) fn default_true() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    fn status(code: &str) -> StatusDef {
        StatusDef {
            id: "1".to_string(),
            status_code: code.to_string(),
            display_name: code.to_string(),
            description: None,
            is_active: true,
            view_order: None,
        }
    }

    #[test]
    fn terminal_codes() {
        assert!(status("DONE").is_terminal());
        assert!(status("CANCELLED").is_terminal());
        assert!(!status("NEW").is_terminal());
        assert!(!status("DELIVERING").is_terminal());
    }

    #[test]
    fn is_active_defaults_to_true() {
        let parsed: StatusDef = serde_json::from_str(
            r#"{"id": "1", "status_code": "NEW", "display_name": "New"}"#,
        )
        .unwrap();
        assert!(parsed.is_active);
    }
}
