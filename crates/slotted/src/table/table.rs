//! The variant table: slots, axes, defaults and compound rules.

use indexmap::IndexMap;

use super::rules::{CompoundRule, CompoundSlotRule};
use crate::classes::ClassList;
use crate::error::{ConfigError, TableError};
use crate::resolve::{ResolvedSlots, Resolver};
use crate::variant::{Axis, Options, ResolvedOptions, VariantValue};

/// A named slot and its base classes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Slot {
    pub name: String,
    pub classes: ClassList,
}

/// A declarative style-variant table for one composite widget.
///
/// Tables are built once with the fluent API below (or loaded from YAML via
/// [`VariantTable::from_yaml`]) and then only read. Every method taking
/// `&self` is side-effect free, so a table can be shared across threads and
/// resolved concurrently.
///
/// # Example
///
/// ```rust
/// use slotted::{Axis, CompoundSlotRule, Options, VariantTable};
///
/// let table = VariantTable::new()
///     .slot("base", "flex gap-1")
///     .slot("item", "")
///     .axis(Axis::enumerated("size").values(["sm", "lg"]))
///     .axis(Axis::boolean("isEven").value(true, [("base", "gap-0")]))
///     .default_value("size", "sm")
///     .default_value("isEven", false)
///     .compound_slots(CompoundSlotRule::new(["item"]).when("size", "lg").class("w-10 h-10"));
///
/// table.validate().unwrap();
///
/// let slots = table.resolve(&Options::new().set("size", "lg").set("isEven", true)).unwrap();
/// assert_eq!(slots.get("base"), Some("flex gap-0"));
/// assert_eq!(slots.get("item"), Some("w-10 h-10"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VariantTable {
    pub(crate) slots: Vec<Slot>,
    pub(crate) axes: Vec<Axis>,
    pub(crate) defaults: IndexMap<String, VariantValue>,
    pub(crate) compound_rules: Vec<CompoundRule>,
    pub(crate) compound_slot_rules: Vec<CompoundSlotRule>,
}

impl VariantTable {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Declares a slot with its base classes.
    pub fn slot(mut self, name: impl Into<String>, classes: impl Into<ClassList>) -> Self {
        self.slots.push(Slot {
            name: name.into(),
            classes: classes.into(),
        });
        self
    }

    /// Declares an axis.
    pub fn axis(mut self, axis: Axis) -> Self {
        self.axes.push(axis);
        self
    }

    /// Sets the value used when a caller omits `axis`.
    ///
    /// Every axis needs a default unless it is marked [`Axis::optional`];
    /// [`VariantTable::validate`] rejects tables that miss one. An optional
    /// axis left without a default contributes nothing when omitted and
    /// matches no constraint.
    pub fn default_value(mut self, axis: impl Into<String>, value: impl Into<VariantValue>) -> Self {
        self.defaults.insert(axis.into(), value.into());
        self
    }

    /// Appends a compound rule. Rules apply in the order they are added.
    pub fn compound(mut self, rule: CompoundRule) -> Self {
        self.compound_rules.push(rule);
        self
    }

    /// Appends a compound slot rule. Rules apply in the order they are added.
    pub fn compound_slots(mut self, rule: CompoundSlotRule) -> Self {
        self.compound_slot_rules.push(rule);
        self
    }

    pub fn slots(&self) -> &[Slot] {
        &self.slots
    }

    /// Slot names in declaration order.
    pub fn slot_names(&self) -> impl Iterator<Item = &str> {
        self.slots.iter().map(|slot| slot.name.as_str())
    }

    pub fn has_slot(&self, name: &str) -> bool {
        self.slots.iter().any(|slot| slot.name == name)
    }

    pub fn axes(&self) -> &[Axis] {
        &self.axes
    }

    /// Looks up an axis by name.
    pub fn axis_named(&self, name: &str) -> Option<&Axis> {
        self.axes.iter().find(|axis| axis.name() == name)
    }

    pub fn defaults(&self) -> &IndexMap<String, VariantValue> {
        &self.defaults
    }

    pub fn compound_rules(&self) -> &[CompoundRule] {
        &self.compound_rules
    }

    pub fn compound_slot_rules(&self) -> &[CompoundSlotRule] {
        &self.compound_slot_rules
    }

    /// Merges `options` over the defaults, checking every value against its
    /// axis domain.
    ///
    /// Fails on the first caller option naming an undeclared axis or an
    /// out-of-domain value.
    pub fn resolve_options(&self, options: &Options) -> Result<ResolvedOptions, ConfigError> {
        for (axis, value) in options.iter() {
            let declared = self
                .axis_named(axis)
                .ok_or_else(|| ConfigError::UnknownAxis {
                    axis: axis.to_string(),
                })?;
            if !declared.accepts(value) {
                return Err(ConfigError::UnknownValue {
                    axis: axis.to_string(),
                    value: value.to_string(),
                    expected: declared.domain().into_iter().map(String::from).collect(),
                });
            }
        }

        let mut resolved = ResolvedOptions::with_capacity(self.axes.len());
        for axis in &self.axes {
            let selected = options
                .get(axis.name())
                .or_else(|| self.defaults.get(axis.name()));
            if let Some(value) = selected {
                resolved.insert(axis.name(), value.clone());
            }
        }
        Ok(resolved)
    }

    /// Resolves `options` to per-slot class strings with the default resolver.
    ///
    /// Equivalent to `Resolver::new(self).resolve(options)`.
    pub fn resolve(&self, options: &Options) -> Result<ResolvedSlots, ConfigError> {
        Resolver::new(self).resolve(options)
    }

    /// Checks the table's structural invariants.
    ///
    /// Tables built in code are not checked on construction; call this from
    /// a test (or once at startup) to catch mistakes early.
    pub fn validate(&self) -> Result<(), TableError> {
        super::validate::validate(self)
    }
}
