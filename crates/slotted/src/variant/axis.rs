//! Variant axis definitions.

use indexmap::IndexMap;

use super::value::VariantValue;
use crate::classes::{ClassList, SlotClasses};

/// The shape of an axis domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AxisKind {
    /// Domain is exactly the declared value names.
    Enumerated,
    /// Domain is always `{true, false}`; undeclared values contribute nothing.
    Boolean,
}

/// A named style dimension with a closed set of values.
///
/// Each value may contribute classes to any number of slots. Values are kept
/// in declaration order, which is also the order reported by [`Axis::domain`].
///
/// # Example
///
/// ```rust
/// use slotted::Axis;
///
/// let variant = Axis::enumerated("variant")
///     .value("bordered", [("item", "border-1.5 border-neutral")])
///     .value("light", [("item", "bg-transparent")])
///     .values(["flat"]);
///
/// let disabled = Axis::boolean("isDisabled")
///     .value(true, [("base", "opacity-50 pointer-events-none")]);
///
/// assert_eq!(variant.domain(), vec!["bordered", "light", "flat"]);
/// assert!(disabled.accepts(&false.into()));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Axis {
    name: String,
    kind: AxisKind,
    optional: bool,
    values: IndexMap<VariantValue, SlotClasses>,
}

impl Axis {
    /// Creates an axis whose domain is the set of declared values.
    pub fn enumerated(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: AxisKind::Enumerated,
            optional: false,
            values: IndexMap::new(),
        }
    }

    /// Creates a boolean axis.
    pub fn boolean(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: AxisKind::Boolean,
            optional: false,
            values: IndexMap::new(),
        }
    }

    /// Marks the axis optional: it may be left without a default, in which
    /// case an omitted selection contributes nothing and matches no rule.
    ///
    /// Non-optional axes must have a default for the table to validate.
    pub fn optional(mut self) -> Self {
        self.optional = true;
        self
    }

    /// Declares a value and the classes it contributes per slot.
    ///
    /// Declaring the same value twice appends to its contributions.
    pub fn value<V, I, S, C>(mut self, value: V, contributions: I) -> Self
    where
        V: Into<VariantValue>,
        I: IntoIterator<Item = (S, C)>,
        S: Into<String>,
        C: Into<ClassList>,
    {
        let slots = self.values.entry(value.into()).or_default();
        for (slot, classes) in contributions {
            let classes: ClassList = classes.into();
            slots
                .entry(slot.into())
                .or_default()
                .extend_from(&classes);
        }
        self
    }

    /// Declares values that contribute no classes of their own.
    ///
    /// Such values still matter: compound rules and compound slot rules
    /// match on them.
    pub fn values<I, V>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<VariantValue>,
    {
        for value in values {
            self.values.entry(value.into()).or_default();
        }
        self
    }

    /// Declares a value from an already-built slot map.
    pub(crate) fn value_map(mut self, value: VariantValue, slots: SlotClasses) -> Self {
        let entry = self.values.entry(value).or_default();
        for (slot, classes) in slots {
            entry.entry(slot).or_default().extend_from(&classes);
        }
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> AxisKind {
        self.kind
    }

    pub fn is_optional(&self) -> bool {
        self.optional
    }

    /// Returns `true` if `value` belongs to this axis's domain.
    pub fn accepts(&self, value: &VariantValue) -> bool {
        match self.kind {
            AxisKind::Boolean => value.as_bool().is_some(),
            AxisKind::Enumerated => self.values.contains_key(value),
        }
    }

    /// The allowed values, in declaration order.
    ///
    /// Boolean axes always report `["true", "false"]`.
    pub fn domain(&self) -> Vec<&str> {
        match self.kind {
            AxisKind::Boolean => vec![VariantValue::TRUE, VariantValue::FALSE],
            AxisKind::Enumerated => self.values.keys().map(VariantValue::as_str).collect(),
        }
    }

    /// The per-slot contributions of `value`, if it declares any.
    pub fn contributions(&self, value: &VariantValue) -> Option<&SlotClasses> {
        self.values.get(value)
    }

    /// The classes `value` contributes to `slot`, if any.
    pub fn contribution(&self, value: &VariantValue, slot: &str) -> Option<&ClassList> {
        self.values.get(value).and_then(|slots| slots.get(slot))
    }

    /// Iterates over declared values and their contributions.
    pub fn declared(&self) -> impl Iterator<Item = (&VariantValue, &SlotClasses)> {
        self.values.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn size_axis() -> Axis {
        Axis::enumerated("size").values(["xs", "sm", "md", "lg", "xl"])
    }

    #[test]
    fn test_enumerated_domain_in_declaration_order() {
        assert_eq!(size_axis().domain(), vec!["xs", "sm", "md", "lg", "xl"]);
    }

    #[test]
    fn test_enumerated_rejects_undeclared() {
        let axis = size_axis();
        assert!(axis.accepts(&"lg".into()));
        assert!(!axis.accepts(&"xxl".into()));
        assert!(!axis.accepts(&true.into()));
    }

    #[test]
    fn test_boolean_accepts_both_values_even_if_undeclared() {
        let axis = Axis::boolean("isEven").value(true, [("base", "gap-0")]);
        assert!(axis.accepts(&true.into()));
        assert!(axis.accepts(&false.into()));
        assert!(!axis.accepts(&"maybe".into()));
        assert_eq!(axis.domain(), vec!["true", "false"]);
    }

    #[test]
    fn test_axes_are_required_unless_marked() {
        assert!(!size_axis().is_optional());
        assert!(Axis::boolean("isFocusVisible").optional().is_optional());
    }

    #[test]
    fn test_contribution_lookup() {
        let axis = Axis::boolean("disableAnimation").value(
            false,
            [
                ("item", "transition-background"),
                ("cursor", "transition-transform !duration-300"),
            ],
        );

        let cursor = axis.contribution(&false.into(), "cursor").unwrap();
        assert_eq!(cursor.to_string(), "transition-transform !duration-300");
        assert!(axis.contribution(&true.into(), "cursor").is_none());
        assert!(axis.contribution(&false.into(), "base").is_none());
    }

    #[test]
    fn test_redeclaring_value_appends() {
        let axis = Axis::enumerated("variant")
            .value("faded", [("item", "border-1.5")])
            .value("faded", [("item", "bg-transparent")]);

        let item = axis.contribution(&"faded".into(), "item").unwrap();
        assert_eq!(item.to_string(), "border-1.5 bg-transparent");
        assert_eq!(axis.domain(), vec!["faded"]);
    }
}
