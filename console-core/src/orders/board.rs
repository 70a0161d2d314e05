//! Aggregate orders view state
//!
//! Explicit state for the all-orders screen: status filter, search text,
//! pagination and sorting. An instance is owned by whatever renders the
//! screen and passed down; nothing here is global, so the logic stays
//! testable on its own.

use shared::models::StatusDef;
use shared::query::{ListQuery, SortDirection};
use std::collections::BTreeSet;

#[derive(Debug, Clone, PartialEq)]
pub struct OrdersBoard {
    status_filter: BTreeSet<String>,
    filter_initialized: bool,
    search: String,
    page: u32,
    page_size: u32,
    sort_by: Option<String>,
    sort_direction: SortDirection,
}

impl OrdersBoard {
    pub fn new() -> Self {
        Self {
            status_filter: BTreeSet::new(),
            filter_initialized: false,
            search: String::new(),
            page: 1,
            page_size: 20,
            sort_by: Some("parsed_at".to_string()),
            sort_direction: SortDirection::Desc,
        }
    }

    /// Seed the status filter from the registry: every known code except
    /// the terminal ones. Runs once; later refetches of the status list
    /// leave an operator-modified filter alone.
    pub fn ensure_default_filter(&mut self, statuses: &[StatusDef]) {
        if self.filter_initialized {
            return;
        }
        self.status_filter = statuses
            .iter()
            .filter(|s| !s.is_terminal())
            .map(|s| s.status_code.clone())
            .collect();
        self.filter_initialized = true;
        tracing::debug!(filter = ?self.status_filter, "default status filter initialized");
    }

    pub fn status_filter(&self) -> &BTreeSet<String> {
        &self.status_filter
    }

    /// Add or remove a status code from the filter. Goes back to page 1.
    pub fn toggle_status(&mut self, status_code: &str) {
        if !self.status_filter.remove(status_code) {
            self.status_filter.insert(status_code.to_string());
        }
        self.page = 1;
    }

    /// Whether an order with this status passes the filter. An empty
    /// filter shows everything.
    pub fn shows(&self, status_code: &str) -> bool {
        self.status_filter.is_empty() || self.status_filter.contains(status_code)
    }

    /// Keep only the orders the current filter shows. The aggregate
    /// endpoint has no status parameter, so filtering happens here.
    pub fn filter_orders<'a, O>(&self, orders: &'a [O]) -> Vec<&'a O>
    where
        O: StatusCoded,
    {
        orders.iter().filter(|o| self.shows(o.status_code())).collect()
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn set_search(&mut self, text: impl Into<String>) {
        self.search = text.into();
        self.page = 1;
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn set_page(&mut self, page: u32) {
        self.page = page.max(1);
    }

    pub fn set_page_size(&mut self, page_size: u32) {
        self.page_size = page_size.clamp(1, 100);
        self.page = 1;
    }

    pub fn set_sort(&mut self, field: impl Into<String>, direction: SortDirection) {
        self.sort_by = Some(field.into());
        self.sort_direction = direction;
        self.page = 1;
    }

    /// Wire query for the current board state.
    pub fn query(&self) -> ListQuery {
        let mut query = ListQuery::new().paginate(self.page, self.page_size);
        if !self.search.is_empty() {
            query = query.search(self.search.clone());
        }
        if let Some(field) = &self.sort_by {
            query = query.order_by(field.clone(), self.sort_direction);
        }
        query
    }
}

impl Default for OrdersBoard {
    fn default() -> Self {
        Self::new()
    }
}

/// Anything carrying an order status code.
pub trait StatusCoded {
    fn status_code(&self) -> &str;
}

impl StatusCoded for shared::models::Order {
    fn status_code(&self) -> &str {
        &self.status_code
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn status(code: &str) -> StatusDef {
        StatusDef {
            id: code.to_string(),
            status_code: code.to_string(),
            display_name: code.to_string(),
            description: None,
            is_active: true,
            view_order: None,
        }
    }

    fn registry() -> Vec<StatusDef> {
        ["NEW", "ORDERED", "DONE", "CANCELLED"]
            .iter()
            .map(|&code| status(code))
            .collect()
    }

    #[test]
    fn default_filter_excludes_terminal_codes() {
        let mut board = OrdersBoard::new();
        board.ensure_default_filter(&registry());

        let filter: Vec<&str> = board.status_filter().iter().map(String::as_str).collect();
        assert_eq!(filter, ["NEW", "ORDERED"]);
        assert!(board.shows("NEW"));
        assert!(!board.shows("DONE"));
        assert!(!board.shows("CANCELLED"));
    }

    #[test]
    fn initialization_runs_exactly_once() {
        let mut board = OrdersBoard::new();
        board.ensure_default_filter(&registry());
        board.toggle_status("NEW");
        assert!(!board.shows("NEW"));

        // a refetch of the status list must not reset the operator's choice
        board.ensure_default_filter(&registry());
        assert!(!board.shows("NEW"));

        let mut extended = registry();
        extended.push(status("DELIVERING"));
        board.ensure_default_filter(&extended);
        assert!(!board.shows("DELIVERING"));
    }

    #[test]
    fn empty_filter_shows_everything() {
        let board = OrdersBoard::new();
        assert!(board.shows("ANYTHING"));
    }

    #[test]
    fn filter_orders_applies_the_status_filter() {
        use shared::models::Order;

        let mut board = OrdersBoard::new();
        board.ensure_default_filter(&registry());

        let orders: Vec<Order> = ["NEW", "DONE", "ORDERED", "CANCELLED"]
            .iter()
            .map(|code| Order {
                status_code: code.to_string(),
                ..Default::default()
            })
            .collect();

        let visible = board.filter_orders(&orders);
        let codes: Vec<&str> = visible.iter().map(|o| o.status_code.as_str()).collect();
        assert_eq!(codes, ["NEW", "ORDERED"]);
    }

    #[test]
    fn filter_edits_reset_the_page() {
        let mut board = OrdersBoard::new();
        board.set_page(5);
        board.toggle_status("DONE");
        assert_eq!(board.page(), 1);

        board.set_page(3);
        board.set_search("blanket");
        assert_eq!(board.page(), 1);

        board.set_page(2);
        board.set_sort("qty", SortDirection::Asc);
        assert_eq!(board.page(), 1);
    }

    #[test]
    fn query_reflects_board_state() {
        let mut board = OrdersBoard::new();
        board.set_search("lan");
        board.set_sort("qty", SortDirection::Asc);
        board.set_page(2);

        let query = board.query();
        assert_eq!(query.q.as_deref(), Some("lan"));
        assert_eq!(query.page, 2);
        assert_eq!(query.page_size, 20);
        assert_eq!(query.sort_by.as_deref(), Some("qty"));
        assert_eq!(query.sort_direction, SortDirection::Asc);
    }

    #[test]
    fn page_size_is_clamped() {
        let mut board = OrdersBoard::new();
        board.set_page_size(500);
        assert_eq!(board.query().page_size, 100);
        board.set_page_size(0);
        assert_eq!(board.query().page_size, 1);
    }
}
