//! Recorded activities and their text descriptions.
//!
//! An [`Activity`] is the record of something that happened: an activity key
//! (`article.create`), the entity it happened to (`trackable`), the entity
//! responsible for it (`owner`) and the parameters captured at the time. Its
//! human-readable description comes from [`Activity::text`], which resolves
//! the key against the configured templates and renders it with the stored
//! parameters plus any call-time overrides.
//!
//! # Examples
//!
//! ```rust
//! use activity_text::activity::{Activity, EntityRef};
//! use activity_text::templating::{Parameters, TemplateRenderer, TemplateTree};
//!
//! let renderer = TemplateRenderer::from(
//!     TemplateTree::new().with("article.create", "Someone has created an article '{{ title }}'"),
//! );
//!
//! let activity = Activity::new("article.create")
//!     .with_trackable(EntityRef::new("Article", 1))
//!     .with_parameter("title", "Rails 3.0.5 released!");
//!
//! assert_eq!(
//!     activity.text(&renderer, &Parameters::new()),
//!     "Someone has created an article 'Rails 3.0.5 released!'"
//! );
//! ```

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::templating::{Parameters, RenderOutcome, TemplateRenderer};

/// Polymorphic reference to a related entity.
///
/// Serializes flat, so once placed in the parameters its attributes are
/// reachable from templates:
///
/// ```rust
/// use activity_text::activity::EntityRef;
/// use activity_text::templating::{Parameters, render};
///
/// let article = EntityRef::new("Article", 7).with_attribute("name", "Launch Day");
/// let mut params = Parameters::new();
/// params.insert("trackable", &article).unwrap();
///
/// let text = render(Some("{{ trackable.name }} ({{ trackable.type }} #{{ trackable.id }})"), &params, &Parameters::new());
/// assert_eq!(text.into_text(), "Launch Day (Article #7)");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntityRef {
    /// Kind of entity (`Article`, `User`, ...)
    #[serde(rename = "type")]
    pub entity_type: String,
    /// Identifier within its kind
    pub id: Value,
    /// Extra attributes exposed to templates
    #[serde(flatten)]
    pub attributes: Map<String, Value>,
}

impl EntityRef {
    pub fn new(entity_type: impl Into<String>, id: impl Into<Value>) -> Self {
        Self {
            entity_type: entity_type.into(),
            id: id.into(),
            attributes: Map::new(),
        }
    }

    pub fn with_attribute(mut self, name: &str, value: impl Into<Value>) -> Self {
        self.attributes.insert(name.to_string(), value.into());
        self
    }
}

/// A recorded activity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Activity {
    /// Dotted activity key, e.g. `article.create`
    pub key: String,
    /// Entity the activity happened to
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trackable: Option<EntityRef>,
    /// Entity responsible for the activity
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner: Option<EntityRef>,
    /// Parameters captured when the activity was recorded
    #[serde(default)]
    pub parameters: Parameters,
}

impl Activity {
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            trackable: None,
            owner: None,
            parameters: Parameters::new(),
        }
    }

    pub fn with_trackable(mut self, trackable: EntityRef) -> Self {
        self.trackable = Some(trackable);
        self
    }

    pub fn with_owner(mut self, owner: EntityRef) -> Self {
        self.owner = Some(owner);
        self
    }

    pub fn with_parameters(mut self, parameters: Parameters) -> Self {
        self.parameters = parameters;
        self
    }

    pub fn with_parameter(mut self, name: &str, value: impl Into<Value>) -> Self {
        self.parameters = self.parameters.with(name, value);
        self
    }

    /// Render this activity's template, keeping the fallback cause.
    ///
    /// `overrides` are merged over the stored parameters for this call only;
    /// the stored parameters are left as they were.
    pub fn render(&self, renderer: &TemplateRenderer, overrides: &Parameters) -> RenderOutcome {
        renderer.render_key(&self.key, &self.parameters, overrides)
    }

    /// Human-readable description, or `"Template not defined"`.
    pub fn text(&self, renderer: &TemplateRenderer, overrides: &Parameters) -> String {
        self.render(renderer, overrides).into_text()
    }
}
