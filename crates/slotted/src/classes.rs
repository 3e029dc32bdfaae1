//! Ordered lists of utility class names.
//!
//! A [`ClassList`] is the unit of contribution everywhere in a variant table:
//! slot bases, axis values, compound rules. Lists can be written either as a
//! single whitespace-separated string (`"w-9 h-9 text-sm"`) or as a sequence
//! of fragments, and both forms normalize to the same individual classes.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Per-slot class contributions, in slot declaration order.
pub type SlotClasses = IndexMap<String, ClassList>;

/// An ordered list of class names.
///
/// Order is preserved exactly as written; no deduplication happens here.
/// Collisions are resolved later by a [`ClassMerger`](crate::ClassMerger).
///
/// # Example
///
/// ```rust
/// use slotted::ClassList;
///
/// let list = ClassList::from("flex  gap-1").with(["w-9", "h-9 text-sm"]);
/// assert_eq!(list.len(), 5);
/// assert_eq!(list.to_string(), "flex gap-1 w-9 h-9 text-sm");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "ClassSource", into = "Vec<String>")]
pub struct ClassList {
    classes: Vec<String>,
}

impl ClassList {
    /// Creates an empty list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends every class found in `fragment`, splitting on whitespace.
    pub fn push(&mut self, fragment: &str) {
        self.classes
            .extend(fragment.split_whitespace().map(str::to_string));
    }

    /// Appends all classes of another list.
    pub fn extend_from(&mut self, other: &ClassList) {
        self.classes.extend(other.classes.iter().cloned());
    }

    /// Returns the list with the given fragments appended, for chaining.
    pub fn with<I, S>(mut self, fragments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for fragment in fragments {
            self.push(fragment.as_ref());
        }
        self
    }

    /// Iterates over the individual class names.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.classes.iter().map(String::as_str)
    }

    /// Returns `true` if `class` appears in the list.
    pub fn contains(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    pub fn len(&self) -> usize {
        self.classes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }
}

impl fmt::Display for ClassList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.classes.join(" "))
    }
}

impl From<&str> for ClassList {
    fn from(fragment: &str) -> Self {
        let mut list = ClassList::new();
        list.push(fragment);
        list
    }
}

impl From<String> for ClassList {
    fn from(fragment: String) -> Self {
        ClassList::from(fragment.as_str())
    }
}

impl From<&[&str]> for ClassList {
    fn from(fragments: &[&str]) -> Self {
        ClassList::new().with(fragments)
    }
}

impl<const N: usize> From<[&str; N]> for ClassList {
    fn from(fragments: [&str; N]) -> Self {
        ClassList::new().with(fragments)
    }
}

impl From<Vec<String>> for ClassList {
    fn from(fragments: Vec<String>) -> Self {
        ClassList::new().with(fragments)
    }
}

impl From<ClassList> for Vec<String> {
    fn from(list: ClassList) -> Self {
        list.classes
    }
}

/// Accepted serialized shapes: a single string or a sequence of strings.
#[derive(Deserialize)]
#[serde(untagged)]
enum ClassSource {
    One(String),
    Many(Vec<String>),
}

impl From<ClassSource> for ClassList {
    fn from(source: ClassSource) -> Self {
        match source {
            ClassSource::One(fragment) => ClassList::from(fragment),
            ClassSource::Many(fragments) => ClassList::from(fragments),
        }
    }
}
