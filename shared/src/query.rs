//! List query plumbing
//!
//! Pagination, sorting, and text search parameters shared by the list
//! endpoints, plus the paginated response wrapper they all return.

use serde::{Deserialize, Serialize};

/// Sort direction for list endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Asc,
    #[default]
    Desc,
}

impl SortDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortDirection::Asc => "asc",
            SortDirection::Desc => "desc",
        }
    }
}

/// Query parameters for a paginated list request.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ListQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub q: Option<String>,
    pub page: u32,
    pub page_size: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_by: Option<String>,
    pub sort_direction: SortDirection,
}

impl ListQuery {
    pub fn new() -> Self {
        Self::default()
    }

    /// Filter by free text.
    pub fn search(mut self, q: impl Into<String>) -> Self {
        self.q = Some(q.into());
        self
    }

    /// Select a page (1-based).
    pub fn paginate(mut self, page: u32, page_size: u32) -> Self {
        self.page = page.max(1);
        self.page_size = page_size;
        self
    }

    /// Sort by a backend field.
    pub fn order_by(mut self, field: impl Into<String>, direction: SortDirection) -> Self {
        self.sort_by = Some(field.into());
        self.sort_direction = direction;
        self
    }
}

impl Default for ListQuery {
    fn default() -> Self {
        Self {
            q: None,
            page: 1,
            page_size: 20,
            sort_by: None,
            sort_direction: SortDirection::Desc,
        }
    }
}

/// Paginated response wrapper.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Paginated<T> {
    pub data: Vec<T>,
    pub total: u64,
    pub page: u32,
    pub page_size: u32,
    pub total_pages: u32,
}

impl<T> Paginated<T> {
    pub fn new(data: Vec<T>, total: u64, page: u32, page_size: u32) -> Self {
        let total_pages = if page_size > 0 {
            ((total as f64) / (page_size as f64)).ceil() as u32
        } else {
            1
        };
        Self {
            data,
            total,
            page,
            page_size,
            total_pages,
        }
    }

    pub fn is_last_page(&self) -> bool {
        self.page >= self.total_pages
    }
}
