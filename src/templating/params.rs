//! Parameter mappings bound as template variables.
//!
//! An activity carries a [`Parameters`] mapping recorded with the event. At
//! render time a second, call-scoped mapping of overrides is merged over it;
//! the merged mapping is then bound into a [`tera::Context`] where every
//! parameter name becomes a top-level template variable.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tera::Context as TeraContext;

use crate::core::{ActivityError, Result};

/// Name-to-value mapping available to a template.
///
/// Values can be strings, numbers, booleans, lists or nested objects such as a
/// serialized [`EntityRef`](crate::activity::EntityRef), reachable in templates
/// through dotted access (`{{ trackable.name }}`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Parameters(Map<String, Value>);

impl Parameters {
    /// Creates an empty mapping.
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores a serializable value under `name`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns [`ActivityError::InvalidParameters`] if `value` cannot be
    /// represented as JSON (e.g. a map with non-string keys).
    pub fn insert<T: Serialize + ?Sized>(&mut self, name: &str, value: &T) -> Result<()> {
        let value = serde_json::to_value(value).map_err(|e| ActivityError::InvalidParameters {
            name: name.to_string(),
            reason: e.to_string(),
        })?;
        self.0.insert(name.to_string(), value);
        Ok(())
    }

    /// Builder form of [`insert`](Self::insert) for values already in JSON form.
    pub fn with(mut self, name: &str, value: impl Into<Value>) -> Self {
        self.0.insert(name.to_string(), value.into());
        self
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.0.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }

    /// Parameter names in sorted order.
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.0.keys().cloned().collect();
        names.sort();
        names
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.0.iter()
    }

    /// Returns a new mapping with `overrides` merged over `self`.
    ///
    /// Entries in `overrides` replace entries of the same name; entries only
    /// in `self` are kept. The merge is shallow: an override object replaces
    /// the base object wholesale. Neither input is modified.
    ///
    /// ```rust
    /// use activity_text::templating::Parameters;
    ///
    /// let base = Parameters::new().with("name", "A").with("title", "X");
    /// let overrides = Parameters::new().with("name", "B");
    ///
    /// let merged = base.merged(&overrides);
    /// assert_eq!(merged.get("name").unwrap(), "B");
    /// assert_eq!(merged.get("title").unwrap(), "X");
    /// assert_eq!(base.get("name").unwrap(), "A");
    /// ```
    pub fn merged(&self, overrides: &Parameters) -> Parameters {
        let mut merged = self.0.clone();
        for (name, value) in &overrides.0 {
            merged.insert(name.clone(), value.clone());
        }
        Parameters(merged)
    }

    /// Binds every parameter as a top-level template variable.
    ///
    /// # Errors
    ///
    /// Returns [`ActivityError::ContextBinding`] if the engine rejects the
    /// mapping.
    pub fn to_context(&self) -> Result<TeraContext> {
        TeraContext::from_value(Value::Object(self.0.clone())).map_err(|e| {
            ActivityError::ContextBinding {
                reason: e.to_string(),
            }
        })
    }
}

impl From<Map<String, Value>> for Parameters {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

impl TryFrom<Value> for Parameters {
    type Error = ActivityError;

    fn try_from(value: Value) -> Result<Self> {
        match value {
            Value::Object(map) => Ok(Self(map)),
            Value::Null => Ok(Self::new()),
            other => Err(ActivityError::InvalidParameters {
                name: "<root>".to_string(),
                reason: format!("expected an object, found {other}"),
            }),
        }
    }
}

impl<'a> IntoIterator for &'a Parameters {
    type Item = (&'a String, &'a Value);
    type IntoIter = serde_json::map::Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
