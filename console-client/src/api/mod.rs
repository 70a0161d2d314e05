//! Typed endpoint wrappers, grouped by backend router.

mod customers;
mod dashboard;
mod orders;
mod posts;
mod statuses;
