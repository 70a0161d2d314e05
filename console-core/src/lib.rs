//! Console core
//!
//! Business logic of the order console: money arithmetic and formatting,
//! price reconciliation, pack pricing, order splitting, and the aggregate
//! board state. Everything is pure and synchronous except the flows,
//! which drive the API client one round-trip at a time.

pub mod flows;
pub mod money;
pub mod notify;
pub mod orders;
pub mod pricing;
pub mod session;

pub use flows::SplitFlowError;
pub use notify::{Notice, NoticeLevel};
pub use orders::{OrdersBoard, SplitError, SplitPlan, plan_split};
pub use pricing::{PriceForm, compute_min_cost};
pub use session::Session;
