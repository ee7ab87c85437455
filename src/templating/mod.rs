//! Activity templating engine.
//!
//! This module turns an activity key and its parameters into display text. It
//! has two stages:
//!
//! 1. **Resolution** ([`tree`]): the dotted key (`article.create`) is walked
//!    through the configured [`TemplateTree`]. A miss at any segment, an empty
//!    key, a key ending on a branch or an absent tree all resolve to nothing.
//! 2. **Rendering** ([`renderer`]): call-time overrides are merged over the
//!    activity's stored [`Parameters`], every merged name is bound as a
//!    template variable and the template is rendered with Tera.
//!
//! Both stages end in a [`RenderOutcome`]. Anything that keeps a real text
//! from being produced (no template, unknown variable, syntax error, failing
//! filter) becomes [`RenderOutcome::Fallback`], which reads
//! `"Template not defined"` once collapsed to a string. Nothing is raised to
//! the caller; the cause is logged through `tracing` instead.
//!
//! # Template Syntax
//!
//! Templates use Tera expressions:
//!
//! - Variable substitution: `{{ title }}` (or `{{title}}`)
//! - Related entity attributes: `{{ trackable.name }}`
//! - Filters: `{{ title | upper }}`
//! - Conditionals and loops: `{% if draft %}...{% endif %}`,
//!   `{% for tag in tags %}...{% endfor %}`
//!
//! Output is not HTML-escaped. `include`, `extends` and `import` have nothing
//! to reach since no named templates are ever registered. `range` is capped at
//! [`MAX_RANGE_ITEMS`](crate::constants::MAX_RANGE_ITEMS) items per render and
//! rejects `step_by=0`; exceeding the cap is a render failure like any other.
//!
//! # Examples
//!
//! ```rust
//! use activity_text::templating::{Parameters, TemplateTree, render};
//!
//! let tree = TemplateTree::new().with("article.create", "New article '{{title}}' created");
//! let overrides = Parameters::new().with("title", "Launch Day");
//!
//! let text = render(tree.resolve("article.create"), &Parameters::new(), &overrides);
//! assert_eq!(text.into_text(), "New article 'Launch Day' created");
//!
//! let text = render(tree.resolve("article.update"), &Parameters::new(), &overrides);
//! assert_eq!(text.into_text(), "Template not defined");
//! ```

pub mod error;
pub mod functions;
pub mod params;
pub mod renderer;
pub mod tree;


pub use error::TemplateError;
pub use params::Parameters;
pub use renderer::{FallbackCause, RenderOutcome, TemplateRenderer, render};
pub use tree::{TemplateNode, TemplateTree, resolve};
