//! Price computation for the order edit forms
//!
//! Two pricing models coexist: a flat per-unit price reconciled against
//! quantity and total, and quantity-tiered price packs computed into a
//! [`shared::models::PriceCalc`].

pub mod packs;
pub mod reconciler;

pub use packs::compute_min_cost;
pub use reconciler::PriceForm;
