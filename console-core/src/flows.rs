//! Operator actions
//!
//! Each action validates locally, makes a single backend round-trip, and
//! leaves local state untouched on failure so the operator can retry.
//! There is no retry policy and no client-side cancellation; the request
//! timeout is the only bound.

use crate::notify::Notice;
use crate::orders::{OrdersBoard, SplitError, plan_split};
use crate::pricing::compute_min_cost;
use crate::session::Session;
use console_client::{ClientError, ClientResult};
use shared::models::{Ack, Order, OrderCreate, OrderStatusChange, OrderUpdate, SplitResult};
use shared::query::Paginated;
use thiserror::Error;

/// Split failures: local validation or a backend rejection.
#[derive(Debug, Error)]
pub enum SplitFlowError {
    #[error(transparent)]
    Invalid(#[from] SplitError),

    #[error(transparent)]
    Client(#[from] ClientError),
}

impl SplitFlowError {
    /// The notification to show for this failure.
    pub fn notice(&self) -> Notice {
        match self {
            SplitFlowError::Invalid(err) => Notice::error(err.to_string()),
            SplitFlowError::Client(err) => Notice::from(err),
        }
    }
}

impl Session {
    /// Create an order, attaching a fresh pack calculation when the
    /// matched item is pack-priced and none was supplied.
    pub async fn submit_order(&self, post_id: &str, mut draft: OrderCreate) -> ClientResult<Order> {
        if draft.price_calc.is_none()
            && let Some(item) = &draft.matched_item
            && !item.prices.is_empty()
        {
            draft.price_calc = Some(compute_min_cost(&item.prices, draft.qty));
        }
        let order = self.client().create_order(post_id, &draft).await?;
        tracing::info!(order = %order.order_id, qty = draft.qty, "order created");
        Ok(order)
    }

    /// Save a reconciled order edit.
    pub async fn save_order_edit(
        &self,
        post_id: &str,
        order_id: &str,
        update: &OrderUpdate,
    ) -> ClientResult<Order> {
        let order = self.client().update_order(post_id, order_id, update).await?;
        tracing::info!(order = %order_id, "order updated");
        Ok(order)
    }

    /// Move an order to a new status.
    pub async fn change_status(
        &self,
        post_id: &str,
        order_id: &str,
        change: &OrderStatusChange,
    ) -> ClientResult<Order> {
        let order = self
            .client()
            .change_order_status(post_id, order_id, change)
            .await?;
        tracing::info!(order = %order_id, status = %change.new_status_code, "status changed");
        Ok(order)
    }

    /// Delete an order.
    pub async fn remove_order(&self, post_id: &str, order_id: &str) -> ClientResult<Ack> {
        let ack = self.client().delete_order(post_id, order_id).await?;
        tracing::info!(order = %order_id, "order deleted");
        Ok(ack)
    }

    /// Validate and execute a quantity split. Validation failures never
    /// reach the network.
    pub async fn split_order(
        &self,
        post_id: &str,
        order: &Order,
        split_qty: f64,
        new_status_code: Option<&str>,
    ) -> Result<SplitResult, SplitFlowError> {
        let plan = plan_split(order, split_qty, new_status_code)?;
        let result = self
            .client()
            .split_order(post_id, &order.order_id, &plan.request)
            .await?;
        tracing::info!(order = %order.order_id, split_qty, "order split");
        Ok(result)
    }

    /// Fetch the status registry, seed the board's default filter (first
    /// call only), then fetch the requested page of orders.
    pub async fn load_board(&self, board: &mut OrdersBoard) -> ClientResult<Paginated<Order>> {
        let statuses = self.client().list_statuses(Some(true)).await?;
        board.ensure_default_filter(&statuses);
        self.client().list_all_orders(&board.query()).await
    }
}
