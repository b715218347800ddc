//! In-memory to-do list store.
//!
//! The crate holds the data layer behind the GraphQL server:
//!
//! - **[`model`]**: lists, items and the read-only [`model::ListView`].
//! - **[`core`]**: pure rules (id allocation, name matching, invariants).
//! - **[`store`]**: the mutable [`store::Store`] with its selected-list state.
//! - **[`error`]**: validation errors kept apart from internal faults.
//!
//! [`config`] and [`logging`] carry the server's ambient setup.

pub mod config;
pub mod core;
pub mod error;
pub mod logging;
pub mod model;
pub mod store;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

pub use error::{StoreError, StoreResult, ValidationError};
pub use store::Store;
