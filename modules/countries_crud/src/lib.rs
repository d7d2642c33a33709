//! Example 1: country CRUD without a list endpoint.
//!
//! Demonstrates the repository/use-case layering: a domain service owns
//! validation and not-found semantics, a repository port hides SeaORM, and
//! the REST layer only maps DTOs and errors.

pub mod api;
pub mod contract;
pub mod domain;
pub mod infra;
