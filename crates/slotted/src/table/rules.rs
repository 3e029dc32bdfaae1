//! Conjunction-gated class contributions.

use crate::classes::{ClassList, SlotClasses};
use crate::variant::{ResolvedOptions, VariantValue};

/// An `axis = value` requirement.
pub type Constraint = (String, VariantValue);

fn all_match(constraints: &[Constraint], resolved: &ResolvedOptions) -> bool {
    constraints
        .iter()
        .all(|(axis, value)| resolved.matches(axis, value))
}

/// Classes contributed per slot when several axes hold specific values at once.
///
/// # Example
///
/// ```rust
/// use slotted::CompoundRule;
///
/// let rule = CompoundRule::new()
///     .when("isEven", true)
///     .when("variant", "bordered")
///     .class("item", "[&:not(:first-of-type)]:border-l-0");
///
/// assert_eq!(rule.constraints().len(), 2);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CompoundRule {
    constraints: Vec<Constraint>,
    classes: SlotClasses,
}

impl CompoundRule {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a constraint. `true` is shorthand for "axis resolved to true".
    pub fn when(mut self, axis: impl Into<String>, value: impl Into<VariantValue>) -> Self {
        self.constraints.push((axis.into(), value.into()));
        self
    }

    /// Adds classes for `slot`, appending if the slot already has some.
    pub fn class(mut self, slot: impl Into<String>, classes: impl Into<ClassList>) -> Self {
        let classes: ClassList = classes.into();
        self.classes
            .entry(slot.into())
            .or_default()
            .extend_from(&classes);
        self
    }

    pub fn constraints(&self) -> &[Constraint] {
        &self.constraints
    }

    pub fn classes(&self) -> &SlotClasses {
        &self.classes
    }

    /// Returns `true` if every constraint holds in `resolved`.
    pub fn matches(&self, resolved: &ResolvedOptions) -> bool {
        all_match(&self.constraints, resolved)
    }
}

/// Classes shared identically by a group of slots, optionally gated on axes.
///
/// # Example
///
/// ```rust
/// use slotted::CompoundSlotRule;
///
/// let rule = CompoundSlotRule::new(["item", "cursor", "prev", "next"])
///     .when("size", "lg")
///     .class("w-10 h-10 text-base");
///
/// assert_eq!(rule.slots().len(), 4);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CompoundSlotRule {
    slots: Vec<String>,
    constraints: Vec<Constraint>,
    classes: ClassList,
}

impl CompoundSlotRule {
    pub fn new<I, S>(slots: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            slots: slots.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    pub fn when(mut self, axis: impl Into<String>, value: impl Into<VariantValue>) -> Self {
        self.constraints.push((axis.into(), value.into()));
        self
    }

    pub fn class(mut self, classes: impl Into<ClassList>) -> Self {
        let classes: ClassList = classes.into();
        self.classes.extend_from(&classes);
        self
    }

    pub fn slots(&self) -> &[String] {
        &self.slots
    }

    pub fn constraints(&self) -> &[Constraint] {
        &self.constraints
    }

    pub fn classes(&self) -> &ClassList {
        &self.classes
    }

    /// Returns `true` if every constraint holds. Unconstrained rules always match.
    pub fn matches(&self, resolved: &ResolvedOptions) -> bool {
        all_match(&self.constraints, resolved)
    }
}
