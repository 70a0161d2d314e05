//! Order record and its request DTOs
//!
//! The backend has carried two order shapes over time: a legacy flat
//! shape (`url`/`qty`/`type`/`user` at top level) and a newer nested
//! shape (`customer` and `item` objects). Deserialization accepts either
//! and resolves it into the canonical [`Order`] immediately; nothing
//! downstream ever sees the dual shape. Serialization emits the canonical
//! nested shape only.

use serde::{Deserialize, Serialize};

use super::pricing::{Item, PriceCalc};
use super::status::STATUS_NEW;

/// Default currency for orders.
pub const DEFAULT_CURRENCY: &str = "VND";

/// Customer link embedded in an order (single shipping address).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OrderCustomer {
    #[serde(default)]
    pub uid: Option<String>,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    /// Canonical profile link; the uid is its last path segment.
    #[serde(default)]
    pub profile_url: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub phone_number: Option<String>,
    #[serde(default)]
    pub avatar_url: Option<String>,
}

/// The purchased line of an order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OrderLine {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
    #[serde(default)]
    pub unit_price: f64,
    #[serde(default)]
    pub qty: f64,
    #[serde(default)]
    pub total_price: f64,
}

/// Where the order came from: the comment it was parsed out of.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CommentRef {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub created_time: Option<String>,
}

/// One entry in an order's status history.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StatusHistoryEntry {
    pub status_code: String,
    #[serde(default)]
    pub note: Option<String>,
    #[serde(default)]
    pub actor: Option<String>,
    #[serde(default)]
    pub at: Option<String>,
}

/// Canonical order record.
///
/// Invariant: `item.total_price == round(item.unit_price * item.qty)`
/// whenever both sides are known; one of the two is always derived from
/// the other at edit time.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "RawOrder")]
pub struct Order {
    pub order_id: String,
    pub post_id: Option<String>,
    pub post_description: Option<String>,
    pub comment: CommentRef,
    pub customer: OrderCustomer,
    pub item: OrderLine,
    pub matched_item: Option<Item>,
    pub price_calc: Option<PriceCalc>,
    pub status_code: String,
    pub status_history: Vec<StatusHistoryEntry>,
    pub note: Option<String>,
    pub currency: String,
    pub parsed_at: Option<String>,
}

impl Order {
    /// Flat total derived from unit price and quantity.
    pub fn flat_total(&self) -> f64 {
        (self.item.unit_price * self.item.qty).round()
    }

    /// Total used for display: a pack-based calculation takes precedence
    /// over the locally derived flat total.
    pub fn display_total(&self) -> f64 {
        match &self.price_calc {
            Some(calc) => calc.total,
            None => self.flat_total(),
        }
    }
}

/// Legacy embedded user object (flat order shape).
#[derive(Debug, Default, Deserialize)]
struct LegacyUser {
    #[serde(default)]
    fb_uid: Option<String>,
    #[serde(default)]
    fb_username: Option<String>,
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    fb_url: Option<String>,
    #[serde(default)]
    address: Option<String>,
    #[serde(default)]
    phone_number: Option<String>,
    #[serde(default)]
    avatar_url: Option<String>,
}

impl From<LegacyUser> for OrderCustomer {
    fn from(user: LegacyUser) -> Self {
        OrderCustomer {
            uid: user.fb_uid,
            username: user.fb_username,
            name: user.name,
            profile_url: user.fb_url,
            address: user.address,
            phone_number: user.phone_number,
            avatar_url: user.avatar_url,
        }
    }
}

/// Permissive wire shape: every field either shape has ever carried, all
/// optional. Converted into the canonical [`Order`] right after
/// deserialization.
#[derive(Debug, Default, Deserialize)]
struct RawOrder {
    #[serde(default)]
    order_id: Option<String>,
    #[serde(default)]
    post_id: Option<String>,
    #[serde(default)]
    post_description: Option<String>,

    // nested shape
    #[serde(default)]
    comment: Option<CommentRef>,
    #[serde(default)]
    customer: Option<OrderCustomer>,
    #[serde(default)]
    item: Option<OrderLine>,

    // legacy flat shape
    #[serde(default)]
    comment_id: Option<String>,
    #[serde(default)]
    comment_url: Option<String>,
    #[serde(default)]
    comment_text: Option<String>,
    #[serde(default)]
    comment_created_time: Option<String>,
    #[serde(default)]
    url: Option<String>,
    #[serde(default)]
    qty: Option<f64>,
    #[serde(rename = "type", default)]
    kind: Option<String>,
    #[serde(default)]
    unit_price: Option<f64>,
    #[serde(default)]
    total_price: Option<f64>,
    #[serde(default)]
    user: Option<LegacyUser>,

    // common tail
    #[serde(default)]
    matched_item: Option<Item>,
    #[serde(default)]
    price_calc: Option<PriceCalc>,
    #[serde(default)]
    status_code: Option<String>,
    #[serde(default)]
    status_history: Vec<StatusHistoryEntry>,
    #[serde(default)]
    note: Option<String>,
    #[serde(default)]
    currency: Option<String>,
    #[serde(default)]
    parsed_at: Option<String>,
}

impl From<RawOrder> for Order {
    fn from(raw: RawOrder) -> Self {
        let mut customer = raw
            .customer
            .or_else(|| raw.user.map(OrderCustomer::from))
            .unwrap_or_default();
        if customer.profile_url.is_none() {
            customer.profile_url = raw.url.clone();
        }
        if customer.uid.is_none() {
            // The uid is the last path segment of the canonical link.
            customer.uid = customer
                .profile_url
                .as_deref()
                .and_then(|url| url.rsplit('/').next())
                .filter(|uid| !uid.is_empty())
                .map(str::to_string);
        }

        let mut item = raw.item.unwrap_or_else(|| OrderLine {
            name: raw.matched_item.as_ref().and_then(|i| i.name.clone()),
            kind: raw.kind,
            unit_price: raw.unit_price.unwrap_or(0.0),
            qty: raw.qty.unwrap_or(0.0),
            total_price: raw.total_price.unwrap_or(0.0),
        });
        // Fill whichever side of the price invariant the wire left out.
        if item.total_price == 0.0 && item.unit_price > 0.0 {
            item.total_price = (item.unit_price * item.qty).round();
        } else if item.unit_price == 0.0 && item.total_price > 0.0 && item.qty > 0.0 {
            item.unit_price = (item.total_price / item.qty).round();
        }

        let comment = raw.comment.unwrap_or(CommentRef {
            id: raw.comment_id,
            url: raw.comment_url,
            text: raw.comment_text,
            created_time: raw.comment_created_time,
        });

        Order {
            order_id: raw.order_id.unwrap_or_default(),
            post_id: raw.post_id,
            post_description: raw.post_description,
            comment,
            customer,
            item,
            matched_item: raw.matched_item,
            price_calc: raw.price_calc,
            status_code: raw.status_code.unwrap_or_else(|| STATUS_NEW.to_string()),
            status_history: raw.status_history,
            note: raw.note,
            currency: raw.currency.unwrap_or_else(|| DEFAULT_CURRENCY.to_string()),
            parsed_at: raw.parsed_at,
        }
    }
}

// ============================================================================
// Request DTOs
// ============================================================================

/// Create a new order inside a post.
///
/// The backend trusts the client-supplied `price_calc`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderCreate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment_text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment_created_time: Option<String>,

    /// Canonical customer link.
    pub url: String,
    pub qty: f64,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    pub currency: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub matched_item: Option<Item>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price_calc: Option<PriceCalc>,

    pub status_code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl OrderCreate {
    pub fn new(url: impl Into<String>, qty: f64) -> Self {
        Self {
            comment_id: None,
            comment_url: None,
            comment_text: None,
            comment_created_time: None,
            url: url.into(),
            qty,
            kind: None,
            currency: DEFAULT_CURRENCY.to_string(),
            matched_item: None,
            price_calc: None,
            status_code: STATUS_NEW.to_string(),
            note: None,
        }
    }
}

/// Partial order edit.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct OrderUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub qty: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit_price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_price: Option<f64>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price_calc: Option<PriceCalc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

/// Status-only transition.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderStatusChange {
    pub new_status_code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub actor: Option<String>,
}

impl OrderStatusChange {
    pub fn new(new_status_code: impl Into<String>) -> Self {
        Self {
            new_status_code: new_status_code.into(),
            note: None,
            actor: None,
        }
    }
}

/// Quantity split request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SplitOrder {
    pub split_qty: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub new_status_code: Option<String>,
}

/// Both orders resulting from a split.
#[derive(Debug, Clone, Deserialize)]
pub struct SplitResult {
    pub original: Order,
    pub new_order: Order,
}
