//! Deterministic, pure logic shared by the store.
//!
//! Core modules are free of I/O. They operate on in-memory data and return
//! outputs suitable for tests.

pub mod ids;
pub mod invariants;
pub mod names;
