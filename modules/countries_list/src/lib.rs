//! Example 3: filtered listing, with and without pagination.
//!
//! The handlers build the base query (joins and caps belong to the endpoint,
//! not to a repository), a typed filter contributes predicate and ordering,
//! and the page-number paginator turns the result into a page envelope with
//! sibling links.

pub mod api;
pub mod contract;
pub mod domain;
pub mod infra;
