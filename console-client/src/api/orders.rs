//! Order endpoints
//!
//! Orders live inside posts; the aggregate listing flattens them across
//! the whole group. All mutations go to the backend and the caller
//! re-fetches to reconcile local state.

use crate::{ApiClient, ClientResult};
use shared::models::{
    Ack, Order, OrderCreate, OrderStatusChange, OrderUpdate, SplitOrder, SplitResult,
};
use shared::query::{ListQuery, Paginated};

impl ApiClient {
    /// List the orders of one post.
    pub async fn list_post_orders(&self, post_id: &str) -> ClientResult<Vec<Order>> {
        let group = self.group()?;
        self.get(&format!("groups/{group}/posts/{post_id}/orders"))
            .await
    }

    /// List all orders across the group, paginated and sorted.
    pub async fn list_all_orders(&self, query: &ListQuery) -> ClientResult<Paginated<Order>> {
        let group = self.group()?;
        self.get_with(&format!("groups/{group}/posts/all-orders"), query)
            .await
    }

    /// All orders placed by one customer, across every post.
    pub async fn list_customer_orders(&self, uid: &str) -> ClientResult<Vec<Order>> {
        let group = self.group()?;
        self.get(&format!("groups/{group}/posts/orders/by-user/{uid}"))
            .await
    }

    /// Create an order inside a post.
    pub async fn create_order(&self, post_id: &str, body: &OrderCreate) -> ClientResult<Order> {
        let group = self.group()?;
        self.post(&format!("groups/{group}/posts/{post_id}/orders"), body)
            .await
    }

    /// Partially edit an order.
    pub async fn update_order(
        &self,
        post_id: &str,
        order_id: &str,
        body: &OrderUpdate,
    ) -> ClientResult<Order> {
        let group = self.group()?;
        self.patch(
            &format!("groups/{group}/posts/{post_id}/orders/{order_id}"),
            body,
        )
        .await
    }

    /// Move an order to a new status (appends to its status history).
    pub async fn change_order_status(
        &self,
        post_id: &str,
        order_id: &str,
        body: &OrderStatusChange,
    ) -> ClientResult<Order> {
        let group = self.group()?;
        self.patch(
            &format!("groups/{group}/posts/{post_id}/orders/{order_id}/status"),
            body,
        )
        .await
    }

    /// Split a quantity off into a new order. Validation belongs to the
    /// caller; the backend enforces the same bounds again.
    pub async fn split_order(
        &self,
        post_id: &str,
        order_id: &str,
        body: &SplitOrder,
    ) -> ClientResult<SplitResult> {
        let group = self.group()?;
        self.post(
            &format!("groups/{group}/posts/{post_id}/orders/{order_id}/split"),
            body,
        )
        .await
    }

    /// Delete an order.
    pub async fn delete_order(&self, post_id: &str, order_id: &str) -> ClientResult<Ack> {
        let group = self.group()?;
        self.delete(&format!("groups/{group}/posts/{post_id}/orders/{order_id}"))
            .await
    }
}
