//! Template configuration document.
//!
//! Activity templates are configured in a YAML document whose top-level
//! `activity` mapping is the [`TemplateTree`]:
//!
//! ```yaml
//! activity:
//!   article:
//!     create: "New {{ trackable.name }} article has been created"
//!     update: "Someone modified the article"
//!     destroy: "Someone deleted the article!"
//! ```
//!
//! Reading the document from disk is left to the caller; this module only
//! parses it and hands the tree to a
//! [`TemplateRenderer`](crate::templating::TemplateRenderer).
//!
//! # Examples
//!
//! ```rust
//! use activity_text::config::ActivityConfig;
//! use activity_text::templating::TemplateRenderer;
//!
//! let config = ActivityConfig::from_yaml_str(
//!     "activity:\n  article:\n    update: Someone modified the article\n",
//! )?;
//! let renderer = TemplateRenderer::from_config(config);
//! assert_eq!(renderer.resolve("article.update"), Some("Someone modified the article"));
//! # Ok::<(), activity_text::core::ActivityError>(())
//! ```

use serde::{Deserialize, Serialize};

use crate::core::Result;
use crate::templating::TemplateTree;

/// Parsed template configuration.
///
/// A document without an `activity` key configures no templates; unrelated
/// top-level keys are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityConfig {
    /// Templates addressed by activity key
    #[serde(default)]
    pub activity: TemplateTree,
}

impl ActivityConfig {
    /// Parse a YAML configuration document.
    ///
    /// # Errors
    ///
    /// Returns [`ActivityError::ConfigParse`](crate::core::ActivityError::ConfigParse)
    /// for malformed YAML, or when the `activity` mapping contains something other
    /// than nested mappings and template strings.
    pub fn from_yaml_str(content: &str) -> Result<Self> {
        if content.trim().is_empty() {
            tracing::debug!("Empty template configuration, no templates configured");
            return Ok(Self::default());
        }

        let config: Self = serde_yaml::from_str(content)?;
        tracing::debug!("Loaded {} activity template(s)", config.activity.len());
        Ok(config)
    }

    pub fn from_tree(activity: TemplateTree) -> Self {
        Self {
            activity,
        }
    }

    pub fn into_tree(self) -> TemplateTree {
        self.activity
    }
}
