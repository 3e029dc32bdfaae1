//! Class merging strategies.
//!
//! Resolution accumulates class fragments per slot in a fixed order; a
//! [`ClassMerger`] turns that sequence into the final class string. Which
//! utilities collide is policy, so it lives behind this trait rather than in
//! the resolver:
//!
//! - [`UtilityMerger`]: last class wins per conflicting utility group (default)
//! - [`ConcatMerger`]: plain concatenation with exact-duplicate removal

mod utility;

pub use utility::UtilityMerger;

use std::collections::HashSet;
use std::fmt::Debug;

/// Combines an ordered sequence of class names into one class string.
///
/// Implementations must be deterministic: the same input always yields the
/// same output.
pub trait ClassMerger: Debug + Send + Sync {
    fn merge(&self, classes: &[&str]) -> String;
}

/// Joins classes with single spaces, dropping exact repeats.
///
/// The first occurrence of a class keeps its position.
///
/// # Example
///
/// ```rust
/// use slotted::{ClassMerger, ConcatMerger};
///
/// let merged = ConcatMerger.merge(&["flex", "gap-1", "flex", "gap-0"]);
/// assert_eq!(merged, "flex gap-1 gap-0");
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct ConcatMerger;

impl ClassMerger for ConcatMerger {
    fn merge(&self, classes: &[&str]) -> String {
        let mut seen = HashSet::with_capacity(classes.len());
        classes
            .iter()
            .filter(|class| !class.is_empty() && seen.insert(**class))
            .copied()
            .collect::<Vec<_>>()
            .join(" ")
    }
}
