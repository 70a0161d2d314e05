//! Domain models
//!
//! Wire shapes for posts, orders, statuses, customers, console accounts,
//! and the dashboard payload.

pub mod account;
pub mod customer;
pub mod dashboard;
pub mod order;
pub mod post;
pub mod pricing;
pub mod status;

pub use account::{Account, LoginRequest, RegisterRequest, Role, TokenResponse};
pub use customer::{Customer, CustomerPatch};
pub use dashboard::{DashboardSummary, MonthlyRevenue};
pub use order::{
    CommentRef, Order, OrderCreate, OrderCustomer, OrderLine, OrderStatusChange, OrderUpdate,
    SplitOrder, SplitResult, StatusHistoryEntry,
};
pub use post::{Post, PostPatch};
pub use pricing::{Item, PriceCalc, PriceCalcPack, PriceMethod, PricePack};
pub use status::{STATUS_NEW, StatusDef, StatusPayload, TERMINAL_STATUS_CODES};

use serde::{Deserialize, Serialize};

/// Bare acknowledgement body (`{"ok": true}`) returned by delete endpoints.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Ack {
    pub ok: bool,
}
