//! Integration test suite for activity-text
//!
//! These tests exercise the public API end to end: configuration parsing,
//! key resolution, rendering and the fallback text.
//!
//! # Running Integration Tests
//!
//! ```bash
//! cargo test --test integration
//! ```
//!
//! # Test Organization
//!
//! - **resolution**: dotted-key lookups against configured trees
//! - **rendering**: parameter merging and interpolation through activities
//! - **fallback**: every path that ends in "Template not defined"
//! - **concurrency**: one shared tree serving many threads

mod concurrency;
mod fallback;
mod rendering;
mod resolution;
