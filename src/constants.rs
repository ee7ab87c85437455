//! Constants shared across the templating and activity modules.

/// Text returned whenever an activity cannot be described.
///
/// Both a key that resolves to no template and a template that fails to render
/// collapse to this exact string, so callers cannot tell the two apart.
pub const FALLBACK_TEXT: &str = "Template not defined";

/// Separator between segments of an activity key (`article.create`).
pub const KEY_SEPARATOR: char = '.';

/// Items the `range` template function may produce over one render.
///
/// Every `range` call in a template draws from the same budget, so nested
/// loops are capped as a whole.
pub const MAX_RANGE_ITEMS: usize = 10_000;

/// Maximum Levenshtein distance, as a percentage of the target length, for a
/// name to be offered as a suggestion in diagnostics.
pub const SIMILARITY_THRESHOLD_PERCENT: usize = 50;

/// Number of suggestions attached to a diagnostic.
pub const MAX_SUGGESTIONS: usize = 3;
