//! Error handling for activity-text
//!
//! The render path never surfaces errors to its caller: a missing template or a
//! failing render collapses to the fallback text (see
//! [`RenderOutcome`](crate::templating::RenderOutcome)). The errors in this module
//! cover the surrounding plumbing instead:
//!
//! - **Configuration**: [`ActivityError::ConfigParse`] when a template document
//!   cannot be parsed or does not have the shape of a template tree,
//!   [`ActivityError::InvalidTemplateTree`] when
//!   [`TemplateTree::from_json_value`](crate::templating::TemplateTree::from_json_value)
//!   is handed a value that is not a template tree.
//! - **Parameters**: [`ActivityError::InvalidParameters`] when a value cannot be
//!   stored as a parameter, [`ActivityError::ContextBinding`] when the merged
//!   parameters cannot be bound as template variables.
//!
//! # Examples
//!
//! ```rust
//! use activity_text::config::ActivityConfig;
//! use activity_text::core::ActivityError;
//!
//! let err = ActivityConfig::from_yaml_str("activity: [1, 2").unwrap_err();
//! assert!(matches!(err, ActivityError::ConfigParse { .. }));
//! ```

use thiserror::Error;

/// The main error type for activity-text operations
#[derive(Error, Debug)]
pub enum ActivityError {
    /// A configuration document could not be parsed
    #[error("Failed to parse template configuration: {reason}")]
    ConfigParse {
        /// Parser message
        reason: String,
    },

    /// A parsed document does not describe a template tree
    ///
    /// Raised when a node is neither a mapping nor a string, e.g. a number or a
    /// list sitting where a template is expected.
    #[error("Invalid template tree at '{path}': {reason}")]
    InvalidTemplateTree {
        /// Dotted path of the offending node (empty for the root)
        path: String,
        /// What was found instead
        reason: String,
    },

    /// A value could not be stored in a parameter mapping
    #[error("Invalid parameter '{name}': {reason}")]
    InvalidParameters {
        /// Parameter name, or `<root>` when the whole mapping was rejected
        name: String,
        /// Serializer message
        reason: String,
    },

    /// Merged parameters could not be bound as template variables
    #[error("Failed to bind template variables: {reason}")]
    ContextBinding {
        /// Engine message
        reason: String,
    },
}

impl From<serde_yaml::Error> for ActivityError {
    fn from(err: serde_yaml::Error) -> Self {
        Self::ConfigParse {
            reason: err.to_string(),
        }
    }
}

/// Result alias used throughout the crate
pub type Result<T, E = ActivityError> = std::result::Result<T, E>;
