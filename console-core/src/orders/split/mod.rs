//! Quantity split planning
//!
//! Splitting divides one order's quantity between the original order and
//! a new order with an independently chosen status. Planning is pure:
//! validation happens here, before any backend traffic. Money on both
//! sides is recomputed from each side's own quantity, never divided
//! proportionally, because pack breakpoints make per-unit price
//! non-linear in quantity.

use crate::money::round_money;
use crate::pricing::compute_min_cost;
use shared::models::{
    Order, OrderCreate, OrderUpdate, PriceCalc, STATUS_NEW, SplitOrder,
};
use thiserror::Error;

/// Rejected split requests. Raised before any network call is made.
#[derive(Debug, Error, PartialEq)]
pub enum SplitError {
    #[error("Split quantity must be positive, got {0}")]
    NonPositive(f64),

    #[error("Split quantity must be a whole number, got {0}")]
    Fractional(f64),

    #[error("Split quantity {split_qty} must be less than the order quantity {order_qty}")]
    ExceedsOriginal { split_qty: f64, order_qty: f64 },
}

/// A validated split: what the original becomes and what the new order
/// starts as.
#[derive(Debug, Clone, PartialEq)]
pub struct SplitPlan {
    /// PATCH body bringing the original down to the remaining quantity.
    pub original_update: OrderUpdate,
    /// The order carrying the split-off quantity.
    pub new_order: OrderCreate,
    /// Wire request for the split endpoint.
    pub request: SplitOrder,
}

/// Validate a split and plan both resulting orders.
///
/// `split_qty` must be a positive whole number strictly below the order's
/// quantity; splitting the full quantity would leave a zero-quantity
/// original and is rejected. The new order gets `new_status_code`, or the
/// initial status when unspecified.
pub fn plan_split(
    order: &Order,
    split_qty: f64,
    new_status_code: Option<&str>,
) -> Result<SplitPlan, SplitError> {
    if !split_qty.is_finite() || split_qty <= 0.0 {
        return Err(SplitError::NonPositive(split_qty));
    }
    if split_qty.fract() != 0.0 {
        return Err(SplitError::Fractional(split_qty));
    }
    let order_qty = order.item.qty;
    if split_qty >= order_qty {
        return Err(SplitError::ExceedsOriginal {
            split_qty,
            order_qty,
        });
    }

    let status_code = new_status_code.unwrap_or(STATUS_NEW).to_string();
    let remaining = order_qty - split_qty;
    debug_assert_eq!(remaining + split_qty, order_qty);

    Ok(SplitPlan {
        original_update: reprice(order, remaining),
        new_order: new_side(order, split_qty, &status_code),
        request: SplitOrder {
            split_qty,
            new_status_code: Some(status_code),
        },
    })
}

/// Recompute one side's money from its own quantity.
fn reprice(order: &Order, qty: f64) -> OrderUpdate {
    let unit_price = order.item.unit_price;
    OrderUpdate {
        qty: Some(qty),
        unit_price: Some(unit_price),
        total_price: Some(round_money(unit_price * qty)),
        price_calc: repack(order, qty),
        ..Default::default()
    }
}

/// A pack-priced order gets a fresh calculation for its new quantity;
/// flat-priced orders carry none.
fn repack(order: &Order, qty: f64) -> Option<PriceCalc> {
    let packs = &order.matched_item.as_ref()?.prices;
    if packs.is_empty() {
        return None;
    }
    Some(compute_min_cost(packs, qty))
}

/// Build the new order: same customer, same item, same unit price, its
/// own quantity and status.
fn new_side(order: &Order, qty: f64, status_code: &str) -> OrderCreate {
    let repriced = reprice(order, qty);
    OrderCreate {
        comment_id: None,
        comment_url: order.comment.url.clone(),
        comment_text: order.comment.text.clone(),
        comment_created_time: order.comment.created_time.clone(),
        url: order.customer.profile_url.clone().unwrap_or_default(),
        qty,
        kind: order.item.kind.clone(),
        currency: order.currency.clone(),
        matched_item: order.matched_item.clone(),
        price_calc: repriced.price_calc,
        status_code: status_code.to_string(),
        note: order.note.clone(),
    }
}

#[cfg(test)]
mod tests;
