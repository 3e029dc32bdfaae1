//! Loading variant tables from YAML.
//!
//! The YAML shape mirrors the fluent builder:
//!
//! ```yaml
//! slots:
//!   base: flex flex-wrap relative gap-1
//!   item: ""
//! variants:
//!   size:
//!     sm: {}
//!     lg: {}
//!   isDisabled:
//!     true:
//!       base: [opacity-50, pointer-events-none]
//!   isFocusVisible:
//!     true:
//!       base: ring-2
//! defaultVariants:
//!   size: sm
//!   isDisabled: false
//! optionalVariants: [isFocusVisible]
//! compoundVariants:
//!   - isDisabled: true
//!     size: lg
//!     class:
//!       item: cursor-not-allowed
//! compoundSlots:
//!   - slots: [item]
//!     size: lg
//!     class: w-10 h-10 text-base
//! ```
//!
//! Every axis needs an entry in `defaultVariants` unless it is listed in
//! `optionalVariants`.
//!
//! An axis whose value keys are all `true`/`false` is a boolean axis. A value
//! (or compound rule) whose classes are a bare string or list targets the
//! `base` slot. `className` is accepted as an alias for `class`.

use indexmap::IndexMap;
use serde::Deserialize;

use super::rules::{CompoundRule, CompoundSlotRule};
use super::table::VariantTable;
use crate::classes::{ClassList, SlotClasses};
use crate::error::{TableError, TableParseError};
use crate::variant::{Axis, VariantValue};

/// Slot receiving classes written without a slot map.
const BASE_SLOT: &str = "base";

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
struct TableDef {
    #[serde(default)]
    slots: IndexMap<String, ClassList>,
    #[serde(default)]
    variants: IndexMap<String, IndexMap<VariantValue, Contribution>>,
    #[serde(default)]
    default_variants: IndexMap<String, VariantValue>,
    #[serde(default)]
    optional_variants: Vec<String>,
    #[serde(default)]
    compound_variants: Vec<CompoundDef>,
    #[serde(default)]
    compound_slots: Vec<CompoundSlotDef>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum Contribution {
    Slots(IndexMap<String, ClassList>),
    Base(ClassList),
    Nothing,
}

impl Contribution {
    fn into_slots(self) -> SlotClasses {
        match self {
            Contribution::Slots(slots) => slots,
            Contribution::Base(classes) => {
                let mut slots = SlotClasses::new();
                slots.insert(BASE_SLOT.to_string(), classes);
                slots
            }
            Contribution::Nothing => SlotClasses::new(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct CompoundDef {
    #[serde(alias = "className")]
    class: Contribution,
    #[serde(flatten)]
    constraints: IndexMap<String, VariantValue>,
}

#[derive(Debug, Deserialize)]
struct CompoundSlotDef {
    slots: Vec<String>,
    #[serde(alias = "className")]
    class: ClassList,
    #[serde(flatten)]
    constraints: IndexMap<String, VariantValue>,
}

impl TableDef {
    fn into_table(self) -> Result<VariantTable, TableError> {
        if let Some(axis) = self
            .optional_variants
            .iter()
            .find(|axis| !self.variants.contains_key(axis.as_str()))
        {
            return Err(TableError::UnknownAxis {
                context: "optionalVariants".to_string(),
                axis: axis.clone(),
            });
        }

        let mut table = VariantTable::new();

        for (name, classes) in self.slots {
            table = table.slot(name, classes);
        }

        for (name, values) in self.variants {
            let boolean = !values.is_empty() && values.keys().all(|v| v.as_bool().is_some());
            let optional = self.optional_variants.contains(&name);
            let mut axis = if boolean {
                Axis::boolean(name)
            } else {
                Axis::enumerated(name)
            };
            if optional {
                axis = axis.optional();
            }
            for (value, contribution) in values {
                axis = axis.value_map(value, contribution.into_slots());
            }
            table = table.axis(axis);
        }

        for (axis, value) in self.default_variants {
            table = table.default_value(axis, value);
        }

        for def in self.compound_variants {
            let mut rule = CompoundRule::new();
            for (axis, value) in def.constraints {
                rule = rule.when(axis, value);
            }
            for (slot, classes) in def.class.into_slots() {
                rule = rule.class(slot, classes);
            }
            table = table.compound(rule);
        }

        for def in self.compound_slots {
            let mut rule = CompoundSlotRule::new(def.slots).class(def.class);
            for (axis, value) in def.constraints {
                rule = rule.when(axis, value);
            }
            table = table.compound_slots(rule);
        }

        Ok(table)
    }
}

impl VariantTable {
    /// Parses and validates a table written in YAML.
    ///
    /// # Example
    ///
    /// ```rust
    /// use slotted::{Options, VariantTable};
    ///
    /// let table = VariantTable::from_yaml(r#"
    /// slots:
    ///   base: flex gap-1
    /// variants:
    ///   isEven:
    ///     true:
    ///       base: gap-0
    /// defaultVariants:
    ///   isEven: false
    /// "#).unwrap();
    ///
    /// let even = table.resolve(&Options::new().set("isEven", true)).unwrap();
    /// assert_eq!(even.get("base"), Some("flex gap-0"));
    /// ```
    pub fn from_yaml(source: &str) -> Result<Self, TableParseError> {
        let def: TableDef = serde_yaml::from_str(source)?;
        let table = def.into_table()?;
        table.validate()?;
        tracing::debug!(
            slots = table.slots().len(),
            axes = table.axes().len(),
            compound_rules = table.compound_rules().len(),
            compound_slot_rules = table.compound_slot_rules().len(),
            "loaded variant table"
        );
        Ok(table)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::variant::AxisKind;

    const SAMPLE: &str = r#"
slots:
  base: flex flex-wrap relative gap-1 max-w-fit
  item: ""
  cursor: [absolute, flex]
variants:
  variant:
    bordered:
      item: [border-1.5, border-neutral]
    flat: {}
  color:
    primary:
      cursor: bg-primary
    danger:
      cursor: bg-danger
  isDisabled:
    true: opacity-50 pointer-events-none
  showShadow:
    true:
defaultVariants:
  variant: flat
  color: primary
  isDisabled: false
  showShadow: false
compoundVariants:
  - showShadow: true
    color: danger
    class:
      cursor: [shadow-lg, shadow-danger/40]
compoundSlots:
  - slots: [item, cursor]
    className: w-9 h-9
"#;

    #[test]
    fn test_parses_structure() {
        let table = VariantTable::from_yaml(SAMPLE).unwrap();
        assert_eq!(
            table.slot_names().collect::<Vec<_>>(),
            vec!["base", "item", "cursor"]
        );
        assert_eq!(table.axes().len(), 4);
        assert_eq!(table.axis_named("variant").unwrap().kind(), AxisKind::Enumerated);
        assert_eq!(table.axis_named("isDisabled").unwrap().kind(), AxisKind::Boolean);
        assert_eq!(table.axis_named("showShadow").unwrap().kind(), AxisKind::Boolean);
        assert_eq!(table.compound_rules().len(), 1);
        assert_eq!(table.compound_slot_rules().len(), 1);
    }

    #[test]
    fn test_bare_classes_target_base() {
        let table = VariantTable::from_yaml(SAMPLE).unwrap();
        let axis = table.axis_named("isDisabled").unwrap();
        let base = axis.contribution(&true.into(), "base").unwrap();
        assert_eq!(base.to_string(), "opacity-50 pointer-events-none");
    }

    #[test]
    fn test_compound_constraints_use_flattened_keys() {
        let table = VariantTable::from_yaml(SAMPLE).unwrap();
        let rule = &table.compound_rules()[0];
        let axes: Vec<&str> = rule.constraints().iter().map(|(a, _)| a.as_str()).collect();
        assert_eq!(axes, vec!["showShadow", "color"]);
        assert_eq!(rule.constraints()[0].1, VariantValue::from(true));
    }

    #[test]
    fn test_resolves_loaded_table() {
        let table = VariantTable::from_yaml(SAMPLE).unwrap();
        let slots = table
            .resolve(
                &crate::Options::new()
                    .set("showShadow", true)
                    .set("color", "danger"),
            )
            .unwrap();
        assert_eq!(
            slots.get("cursor"),
            Some("absolute flex bg-danger shadow-lg shadow-danger/40 w-9 h-9")
        );
    }

    #[test]
    fn test_optional_variants() {
        let source = r#"
slots:
  base: flex
variants:
  isFocusVisible:
    true:
      base: ring-2
optionalVariants: [isFocusVisible]
"#;
        let table = VariantTable::from_yaml(source).unwrap();
        assert!(table.axis_named("isFocusVisible").unwrap().is_optional());
        let slots = table.resolve(&crate::Options::new()).unwrap();
        assert_eq!(slots.get("base"), Some("flex"));
    }

    #[test]
    fn test_rejects_missing_default() {
        let source = r#"
slots:
  cursor: absolute
variants:
  color:
    primary:
      cursor: bg-primary
"#;
        let err = VariantTable::from_yaml(source).unwrap_err();
        assert!(matches!(
            err,
            TableParseError::Invalid(TableError::MissingDefault { axis }) if axis == "color"
        ));
    }

    #[test]
    fn test_rejects_unknown_optional_axis() {
        let source = "slots:\n  base: flex\noptionalVariants: [shape]\n";
        let err = VariantTable::from_yaml(source).unwrap_err();
        assert!(matches!(
            err,
            TableParseError::Invalid(TableError::UnknownAxis { axis, .. }) if axis == "shape"
        ));
    }

    #[test]
    fn test_rejects_unknown_top_level_key() {
        let err = VariantTable::from_yaml("slotz:\n  base: flex\n").unwrap_err();
        assert!(matches!(err, TableParseError::Yaml(_)));
    }

    #[test]
    fn test_rejects_invalid_table() {
        let source = r#"
slots:
  base: flex
variants:
  isFocusVisible:
    true:
      wrapper: ring-2
"#;
        let err = VariantTable::from_yaml(source).unwrap_err();
        match err {
            TableParseError::Invalid(TableError::UnknownSlot { slot, .. }) => {
                assert_eq!(slot, "wrapper")
            }
            other => panic!("expected UnknownSlot, got {other:?}"),
        }
    }
}
