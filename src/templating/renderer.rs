//! Template rendering engine with Tera.
//!
//! Rendering is best-effort: every call ends in a [`RenderOutcome`], either the
//! rendered text or a fallback. The fallback collapses to
//! [`FALLBACK_TEXT`] at the string boundary, whether the key had no template or
//! the template failed to render. The cause is logged, never returned as an
//! error.

use std::fmt;
use std::sync::Arc;

use tera::{Context as TeraContext, Tera};

use crate::config::ActivityConfig;
use crate::constants::{FALLBACK_TEXT, MAX_RANGE_ITEMS};

use super::error::{TemplateError, find_similar};
use super::functions::create_range_function;
use super::params::Parameters;
use super::tree::{TemplateTree, resolve};

/// Why a render produced the fallback text
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FallbackCause {
    /// No template is configured for the activity key
    KeyNotFound,
    /// A template was found but could not be rendered
    RenderFailure(TemplateError),
}

impl fmt::Display for FallbackCause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FallbackCause::KeyNotFound => write!(f, "no template configured"),
            FallbackCause::RenderFailure(err) => write!(f, "{}", err),
        }
    }
}

/// Result of one render call.
///
/// Keep it as long as the cause matters; collapse it with
/// [`into_text`](Self::into_text) (or `Display`) once only the text does.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderOutcome {
    Rendered(String),
    Fallback(FallbackCause),
}

impl RenderOutcome {
    pub fn is_rendered(&self) -> bool {
        matches!(self, RenderOutcome::Rendered(_))
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, RenderOutcome::Fallback(_))
    }

    /// The text shown to users: the rendered text or [`FALLBACK_TEXT`].
    pub fn as_str(&self) -> &str {
        match self {
            RenderOutcome::Rendered(text) => text,
            RenderOutcome::Fallback(_) => FALLBACK_TEXT,
        }
    }

    pub fn into_text(self) -> String {
        match self {
            RenderOutcome::Rendered(text) => text,
            RenderOutcome::Fallback(_) => FALLBACK_TEXT.to_string(),
        }
    }

    /// The fallback cause, if this is a fallback.
    pub fn cause(&self) -> Option<&FallbackCause> {
        match self {
            RenderOutcome::Rendered(_) => None,
            RenderOutcome::Fallback(cause) => Some(cause),
        }
    }
}

impl fmt::Display for RenderOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<RenderOutcome> for String {
    fn from(outcome: RenderOutcome) -> Self {
        outcome.into_text()
    }
}

/// Render a resolved template with `overrides` merged over `base`.
///
/// `template` is the resolver's result: `None` short-circuits to the fallback
/// without looking at the parameters. Neither parameter mapping is modified.
///
/// ```rust
/// use activity_text::templating::{Parameters, render};
///
/// let base = Parameters::new().with("name", "A");
/// let overrides = Parameters::new().with("name", "B");
///
/// assert_eq!(render(Some("Hello {{ name }}"), &base, &overrides).into_text(), "Hello B");
/// assert_eq!(render(None, &base, &overrides).into_text(), "Template not defined");
/// ```
pub fn render(template: Option<&str>, base: &Parameters, overrides: &Parameters) -> RenderOutcome {
    let Some(template) = template else {
        return RenderOutcome::Fallback(FallbackCause::KeyNotFound);
    };

    let params = base.merged(overrides);
    match render_str(template, &params) {
        Ok(text) => RenderOutcome::Rendered(text),
        Err(err) => RenderOutcome::Fallback(FallbackCause::RenderFailure(err)),
    }
}

fn render_str(template: &str, params: &Parameters) -> Result<String, TemplateError> {
    let context = params.to_context().map_err(|e| TemplateError::ContextError {
        message: e.to_string(),
    })?;

    tracing::debug!("Rendering activity template with context");
    log_context_as_kv(&context);

    // Fresh engine per render; no named templates means no include/extends.
    let mut tera = Tera::default();
    tera.autoescape_on(Vec::new());
    tera.register_function("range", create_range_function(MAX_RANGE_ITEMS));

    tera.render_str(template, &context).map_err(|e| TemplateError::from_tera(&e, params))
}

fn log_context_as_kv(context: &TeraContext) {
    if let serde_json::Value::Object(map) = context.clone().into_json() {
        for (key, value) in map {
            tracing::debug!("  {}: {}", key, value);
        }
    }
}

/// Renders activity keys against a shared, read-only template tree.
///
/// The tree is handed in explicitly and never mutated, so one renderer (or
/// many clones of it) can serve concurrent callers without locking.
///
/// # Examples
///
/// ```rust
/// use std::sync::Arc;
/// use activity_text::templating::{Parameters, TemplateRenderer, TemplateTree};
///
/// let tree = TemplateTree::new().with("article.create", "New article '{{title}}' created");
/// let renderer = TemplateRenderer::new(Arc::new(tree));
///
/// let overrides = Parameters::new().with("title", "Launch Day");
/// assert_eq!(
///     renderer.text("article.create", &Parameters::new(), &overrides),
///     "New article 'Launch Day' created"
/// );
/// assert_eq!(
///     renderer.text("article.update", &Parameters::new(), &overrides),
///     "Template not defined"
/// );
/// ```
#[derive(Debug, Clone, Default)]
pub struct TemplateRenderer {
    templates: Option<Arc<TemplateTree>>,
}

impl TemplateRenderer {
    pub fn new(templates: Arc<TemplateTree>) -> Self {
        Self {
            templates: Some(templates),
        }
    }

    /// A renderer with no templates attached; every key falls back.
    pub fn detached() -> Self {
        Self::default()
    }

    pub fn from_config(config: ActivityConfig) -> Self {
        Self::new(Arc::new(config.into_tree()))
    }

    pub fn templates(&self) -> Option<&TemplateTree> {
        self.templates.as_deref()
    }

    /// Resolve `key` against the attached tree.
    pub fn resolve(&self, key: &str) -> Option<&str> {
        resolve(self.templates(), key)
    }

    /// Resolve `key`, then render it with `overrides` merged over `base`.
    ///
    /// A fallback is logged at warn level with its cause.
    pub fn render_key(&self, key: &str, base: &Parameters, overrides: &Parameters) -> RenderOutcome {
        let outcome = render(self.resolve(key), base, overrides);

        match outcome.cause() {
            None => {}
            Some(FallbackCause::KeyNotFound) => {
                let known = self.templates().map(TemplateTree::keys).unwrap_or_default();
                let suggestions = find_similar(key, &known);
                if suggestions.is_empty() {
                    tracing::warn!("No template defined for activity '{}'", key);
                } else {
                    tracing::warn!(
                        "No template defined for activity '{}' (did you mean: {})",
                        key,
                        suggestions.join(", ")
                    );
                }
            }
            Some(FallbackCause::RenderFailure(err)) => {
                tracing::warn!(
                    "Failed to render activity '{}':\n{}",
                    key,
                    err.format_with_context()
                );
            }
        }

        outcome
    }

    /// Like [`render_key`](Self::render_key), collapsed to the display text.
    pub fn text(&self, key: &str, base: &Parameters, overrides: &Parameters) -> String {
        self.render_key(key, base, overrides).into_text()
    }
}

impl From<ActivityConfig> for TemplateRenderer {
    fn from(config: ActivityConfig) -> Self {
        Self::from_config(config)
    }
}

impl From<Arc<TemplateTree>> for TemplateRenderer {
    fn from(templates: Arc<TemplateTree>) -> Self {
        Self::new(templates)
    }
}

impl From<TemplateTree> for TemplateRenderer {
    fn from(templates: TemplateTree) -> Self {
        Self::new(Arc::new(templates))
    }
}
