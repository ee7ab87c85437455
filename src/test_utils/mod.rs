//! Test utilities for activity-text
//!
//! Only compiled for tests or with the `test-utils` feature.

use std::sync::Once;

use tracing::Level;
use tracing_subscriber::EnvFilter;

use crate::templating::TemplateTree;

/// Global flag to ensure logging is only initialized once in tests
static INIT_LOGGING: Once = Once::new();

/// Initialize logging for tests.
///
/// Uses `level` if given, otherwise `RUST_LOG` if set; with neither, logging
/// stays off. Safe to call from every test.
///
/// ```bash
/// RUST_LOG=activity_text=debug cargo test
/// ```
pub fn init_test_logging(level: Option<Level>) {
    INIT_LOGGING.call_once(|| {
        let filter = if let Some(level) = level {
            EnvFilter::new(level.to_string())
        } else if std::env::var("RUST_LOG").is_ok() {
            EnvFilter::from_default_env()
        } else {
            return;
        };

        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .with_target(true)
            .with_thread_ids(false)
            .try_init();
    });
}

/// A small article/comment template tree used across tests.
pub fn sample_tree() -> TemplateTree {
    TemplateTree::new()
        .with("article.create", "New article '{{title}}' created")
        .with("article.update", "Someone modified the article")
        .with("article.destroy", "Someone deleted the article!")
        .with("article.publish", "{{ trackable.name }} published by {{ owner.name }}")
        .with("comment.reply.create", "{{ author }} replied to {{ title }}")
}
