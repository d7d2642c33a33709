//! Example 2: transactional multi-entity creation.
//!
//! One request creates a country plus its cities. All inserts share a single
//! database transaction; either everything is committed or nothing is. The
//! storage layer is written against `ConnectionTrait`, so the same functions
//! run on a pooled connection or inside a transaction.

pub mod api;
pub mod contract;
pub mod domain;
pub mod infra;
