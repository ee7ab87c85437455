//! Template tree and dotted-key resolution.
//!
//! A [`TemplateTree`] is the nested mapping of configured activity templates:
//!
//! ```yaml
//! article:
//!   create: "New article '{{ title }}' created"
//!   update: "Someone modified the article"
//! ```
//!
//! An activity key such as `article.create` is split on `.` and walked segment
//! by segment. The first segment that misses ends the walk, and the key
//! resolves to nothing. Only a key that ends exactly on a leaf yields a
//! template; keys stopping on a branch or running past a leaf do not.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::constants::KEY_SEPARATOR;
use crate::core::{ActivityError, Result};

/// A node of the template tree: either a nested mapping or a template string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum TemplateNode {
    /// Nested mapping from key segment to child node
    Branch(BTreeMap<String, TemplateNode>),
    /// Template source
    Leaf(String),
}

impl TemplateNode {
    /// Returns the template source if this node is a leaf.
    pub fn as_template(&self) -> Option<&str> {
        match self {
            Self::Leaf(template) => Some(template),
            Self::Branch(_) => None,
        }
    }

    fn from_json(value: &Value, path: &str) -> Result<Self> {
        match value {
            Value::String(template) => Ok(Self::Leaf(template.clone())),
            Value::Object(map) => {
                let mut children = BTreeMap::new();
                for (segment, child) in map {
                    let child_path = if path.is_empty() {
                        segment.clone()
                    } else {
                        format!("{path}{KEY_SEPARATOR}{segment}")
                    };
                    children.insert(segment.clone(), Self::from_json(child, &child_path)?);
                }
                Ok(Self::Branch(children))
            }
            other => Err(ActivityError::InvalidTemplateTree {
                path: path.to_string(),
                reason: format!("expected a string or a mapping, found {}", json_kind(other)),
            }),
        }
    }

    fn leaf_count(&self) -> usize {
        match self {
            Self::Leaf(_) => 1,
            Self::Branch(children) => children.values().map(Self::leaf_count).sum(),
        }
    }

    fn has_leaf(&self) -> bool {
        match self {
            Self::Leaf(_) => true,
            Self::Branch(children) => children.values().any(Self::has_leaf),
        }
    }

    fn collect_keys(&self, prefix: &str, keys: &mut Vec<String>) {
        match self {
            Self::Leaf(_) => keys.push(prefix.to_string()),
            Self::Branch(children) => {
                for (segment, child) in children {
                    child.collect_keys(&format!("{prefix}{KEY_SEPARATOR}{segment}"), keys);
                }
            }
        }
    }
}

fn insert_path(children: &mut BTreeMap<String, TemplateNode>, segments: &[&str], template: String) {
    match segments {
        [] => {}
        [last] => {
            children.insert((*last).to_string(), TemplateNode::Leaf(template));
        }
        [first, rest @ ..] => {
            let node = children
                .entry((*first).to_string())
                .or_insert_with(|| TemplateNode::Branch(BTreeMap::new()));
            if let TemplateNode::Leaf(_) = node {
                tracing::debug!("Replacing template at '{}' with a branch", first);
                *node = TemplateNode::Branch(BTreeMap::new());
            }
            if let TemplateNode::Branch(grandchildren) = node {
                insert_path(grandchildren, rest, template);
            }
        }
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "a list",
        Value::Object(_) => "a mapping",
    }
}

/// The configured activity templates.
///
/// Built once, then only read. Cloning copies the whole tree; share a single
/// instance across threads with [`std::sync::Arc`] instead.
///
/// # Examples
///
/// ```rust
/// use activity_text::templating::TemplateTree;
///
/// let tree = TemplateTree::new()
///     .with("article.create", "New article '{{ title }}' created")
///     .with("article.destroy", "Someone deleted the article!");
///
/// assert_eq!(tree.resolve("article.destroy"), Some("Someone deleted the article!"));
/// assert_eq!(tree.resolve("article"), None);
/// assert_eq!(tree.resolve("article.update"), None);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "serde_json::Value", into = "BTreeMap<String, TemplateNode>")]
pub struct TemplateTree {
    root: BTreeMap<String, TemplateNode>,
}

impl TemplateTree {
    /// Creates an empty tree.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a tree from a JSON value, which must be a mapping (or null, for an
    /// empty tree).
    ///
    /// # Errors
    ///
    /// Returns [`ActivityError::InvalidTemplateTree`] if the root is not a
    /// mapping or any node is neither a mapping nor a string.
    pub fn from_json_value(value: &Value) -> Result<Self> {
        if value.is_null() {
            return Ok(Self::new());
        }
        match TemplateNode::from_json(value, "")? {
            TemplateNode::Branch(root) => Ok(Self {
                root,
            }),
            TemplateNode::Leaf(_) => Err(ActivityError::InvalidTemplateTree {
                path: String::new(),
                reason: "expected a mapping, found a string".to_string(),
            }),
        }
    }

    /// Stores `template` under the dotted `key`, creating intermediate branches.
    ///
    /// A leaf sitting where a branch is needed is replaced.
    pub fn insert(&mut self, key: &str, template: impl Into<String>) {
        let segments: Vec<&str> = key.split(KEY_SEPARATOR).collect();
        insert_path(&mut self.root, &segments, template.into());
    }

    /// Builder form of [`insert`](Self::insert).
    pub fn with(mut self, key: &str, template: impl Into<String>) -> Self {
        self.insert(key, template);
        self
    }

    /// Resolves a dotted activity key to its template source.
    ///
    /// Returns `None` for the empty key, for any missing segment, for a key
    /// ending on a branch and for a key that continues past a leaf.
    pub fn resolve(&self, key: &str) -> Option<&str> {
        if key.is_empty() {
            tracing::debug!("Empty activity key never resolves");
            return None;
        }

        let mut segments = key.split(KEY_SEPARATOR);
        let first = segments.next()?;
        let mut node = match self.root.get(first) {
            Some(node) => node,
            None => {
                tracing::debug!("Activity key '{}' missed at segment '{}'", key, first);
                return None;
            }
        };

        for segment in segments {
            let child = match node {
                TemplateNode::Branch(children) => children.get(segment),
                TemplateNode::Leaf(_) => None,
            };
            node = match child {
                Some(child) => child,
                None => {
                    tracing::debug!("Activity key '{}' missed at segment '{}'", key, segment);
                    return None;
                }
            };
        }

        let template = node.as_template();
        if template.is_none() {
            tracing::debug!("Activity key '{}' ends on a branch, not a template", key);
        }
        template
    }

    /// All dotted keys that resolve to a template, sorted.
    pub fn keys(&self) -> Vec<String> {
        let mut keys = Vec::new();
        for (segment, node) in &self.root {
            node.collect_keys(segment, &mut keys);
        }
        keys
    }

    /// Number of templates in the tree.
    pub fn len(&self) -> usize {
        self.root.values().map(TemplateNode::leaf_count).sum()
    }

    /// Returns `true` if the tree holds no templates.
    pub fn is_empty(&self) -> bool {
        !self.root.values().any(TemplateNode::has_leaf)
    }
}

impl TryFrom<Value> for TemplateTree {
    type Error = ActivityError;

    fn try_from(value: Value) -> Result<Self> {
        Self::from_json_value(&value)
    }
}

impl From<TemplateTree> for BTreeMap<String, TemplateNode> {
    fn from(tree: TemplateTree) -> Self {
        tree.root
    }
}

/// Resolves `key` against an optional tree.
///
/// An absent tree resolves nothing, whatever the key.
pub fn resolve<'a>(tree: Option<&'a TemplateTree>, key: &str) -> Option<&'a str> {
    match tree {
        Some(tree) => tree.resolve(key),
        None => {
            tracing::debug!("No templates configured, cannot resolve '{}'", key);
            None
        }
    }
}
