//! Core types for activity-text
//!
//! This module holds the crate-wide error type and its `Result` alias. Rendering
//! itself is infallible from the caller's point of view; see
//! [`crate::templating`] for the fallback model.

pub mod error;

pub use error::{ActivityError, Result};
