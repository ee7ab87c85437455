//! activity-text - human-readable descriptions of recorded activities
//!
//! An activity feed records events as a dotted key (`article.create`) plus a
//! bag of parameters. This crate turns such a record into display text by
//! looking the key up in a nested tree of templates and rendering the template
//! with the parameters.
//!
//! # Architecture Overview
//!
//! - [`templating::tree`] - the [`TemplateTree`](templating::TemplateTree) and
//!   dotted-key resolution
//! - [`templating::params`] - [`Parameters`](templating::Parameters) and the
//!   call-scoped override merge
//! - [`templating::renderer`] - Tera rendering and the
//!   [`RenderOutcome`](templating::RenderOutcome) fallback model
//! - [`activity`] - the [`Activity`](activity::Activity) record and its
//!   `text()` entry point
//! - [`config`] - the YAML template configuration document
//! - [`core`] - error types for the configuration and parameter plumbing
//!
//! # Failure Model
//!
//! Rendering never fails from the caller's point of view. A key without a
//! template and a template that cannot be rendered both produce the text
//! `"Template not defined"`. The distinction is kept in
//! [`FallbackCause`](templating::FallbackCause) and logged at warn level.
//!
//! # Example
//!
//! ```rust
//! use activity_text::activity::Activity;
//! use activity_text::config::ActivityConfig;
//! use activity_text::templating::{Parameters, TemplateRenderer};
//!
//! let config = ActivityConfig::from_yaml_str(r#"
//! activity:
//!   article:
//!     create: "New article '{{ title }}' created"
//! "#)?;
//! let renderer = TemplateRenderer::from_config(config);
//!
//! let overrides = Parameters::new().with("title", "Launch Day");
//! assert_eq!(
//!     Activity::new("article.create").text(&renderer, &overrides),
//!     "New article 'Launch Day' created"
//! );
//! assert_eq!(
//!     Activity::new("article.update").text(&renderer, &overrides),
//!     "Template not defined"
//! );
//! # Ok::<(), activity_text::core::ActivityError>(())
//! ```

pub mod activity;
pub mod config;
pub mod constants;
pub mod core;
pub mod templating;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;
