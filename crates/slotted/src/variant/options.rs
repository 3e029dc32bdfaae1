//! Caller-supplied and resolved option sets.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::value::VariantValue;

/// A partial mapping from axis name to selected value.
///
/// Axes left out fall back to the table's defaults at resolution time.
///
/// # Example
///
/// ```rust
/// use slotted::Options;
///
/// let options = Options::new()
///     .set("color", "danger")
///     .set("showShadow", true);
///
/// assert_eq!(options.get("showShadow").map(|v| v.as_str()), Some("true"));
/// assert!(options.get("size").is_none());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Options {
    values: IndexMap<String, VariantValue>,
}

impl Options {
    pub fn new() -> Self {
        Self::default()
    }

    /// Selects `value` on `axis`, replacing any earlier selection.
    pub fn set(mut self, axis: impl Into<String>, value: impl Into<VariantValue>) -> Self {
        self.insert(axis, value);
        self
    }

    /// In-place form of [`Options::set`].
    pub fn insert(&mut self, axis: impl Into<String>, value: impl Into<VariantValue>) {
        self.values.insert(axis.into(), value.into());
    }

    pub fn get(&self, axis: &str) -> Option<&VariantValue> {
        self.values.get(axis)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &VariantValue)> {
        self.values.iter().map(|(axis, value)| (axis.as_str(), value))
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for Options
where
    K: Into<String>,
    V: Into<VariantValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut options = Options::new();
        for (axis, value) in iter {
            options.insert(axis, value);
        }
        options
    }
}

/// A complete option set: caller options merged over table defaults.
///
/// Axes are listed in table declaration order. Optional axes (no default)
/// that the caller did not select are absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ResolvedOptions {
    values: IndexMap<String, VariantValue>,
}

impl ResolvedOptions {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            values: IndexMap::with_capacity(capacity),
        }
    }

    pub(crate) fn insert(&mut self, axis: &str, value: VariantValue) {
        self.values.insert(axis.to_string(), value);
    }

    pub fn get(&self, axis: &str) -> Option<&VariantValue> {
        self.values.get(axis)
    }

    /// Returns `true` if `axis` resolved to exactly `value`.
    pub fn matches(&self, axis: &str, value: &VariantValue) -> bool {
        self.values.get(axis) == Some(value)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &VariantValue)> {
        self.values.iter().map(|(axis, value)| (axis.as_str(), value))
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
