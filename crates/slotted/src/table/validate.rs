//! Structural validation for variant tables.

use std::collections::HashSet;

use super::rules::Constraint;
use super::table::VariantTable;
use crate::error::TableError;

/// Checks every invariant, returning the first violation found.
///
/// Order of checks: duplicate slots, duplicate axes, axis contributions,
/// defaults (including missing defaults on required axes), compound rules,
/// compound slot rules.
pub(crate) fn validate(table: &VariantTable) -> Result<(), TableError> {
    let mut seen = HashSet::new();
    for slot in &table.slots {
        if !seen.insert(slot.name.as_str()) {
            return Err(TableError::DuplicateSlot {
                slot: slot.name.clone(),
            });
        }
    }

    let mut seen = HashSet::new();
    for axis in &table.axes {
        if !seen.insert(axis.name()) {
            return Err(TableError::DuplicateAxis {
                axis: axis.name().to_string(),
            });
        }
    }

    for axis in &table.axes {
        for (value, slots) in axis.declared() {
            if !axis.accepts(value) {
                return Err(TableError::UnknownValue {
                    context: format!("boolean axis '{}'", axis.name()),
                    axis: axis.name().to_string(),
                    value: value.to_string(),
                });
            }
            for slot in slots.keys() {
                check_slot(table, slot, || {
                    format!("axis '{}' value '{}'", axis.name(), value)
                })?;
            }
        }
    }

    for (axis, value) in &table.defaults {
        check_constraint(table, &(axis.clone(), value.clone()), || {
            "default selection".to_string()
        })?;
    }

    if let Some(axis) = table
        .axes
        .iter()
        .find(|axis| !axis.is_optional() && !table.defaults.contains_key(axis.name()))
    {
        return Err(TableError::MissingDefault {
            axis: axis.name().to_string(),
        });
    }

    for (index, rule) in table.compound_rules.iter().enumerate() {
        if rule.constraints().len() < 2 {
            return Err(TableError::CompoundTooNarrow {
                index,
                found: rule.constraints().len(),
            });
        }
        for constraint in rule.constraints() {
            check_constraint(table, constraint, || format!("compound rule #{index}"))?;
        }
        for slot in rule.classes().keys() {
            check_slot(table, slot, || format!("compound rule #{index}"))?;
        }
    }

    for (index, rule) in table.compound_slot_rules.iter().enumerate() {
        if rule.slots().is_empty() {
            return Err(TableError::EmptyCompoundSlots { index });
        }
        for constraint in rule.constraints() {
            check_constraint(table, constraint, || format!("compound slot rule #{index}"))?;
        }
        for slot in rule.slots() {
            check_slot(table, slot, || format!("compound slot rule #{index}"))?;
        }
    }

    Ok(())
}

fn check_slot(
    table: &VariantTable,
    slot: &str,
    context: impl FnOnce() -> String,
) -> Result<(), TableError> {
    if table.has_slot(slot) {
        Ok(())
    } else {
        Err(TableError::UnknownSlot {
            context: context(),
            slot: slot.to_string(),
        })
    }
}

fn check_constraint(
    table: &VariantTable,
    (axis, value): &Constraint,
    context: impl FnOnce() -> String,
) -> Result<(), TableError> {
    let Some(declared) = table.axis_named(axis) else {
        return Err(TableError::UnknownAxis {
            context: context(),
            axis: axis.clone(),
        });
    };
    if !declared.accepts(value) {
        return Err(TableError::UnknownValue {
            context: context(),
            axis: axis.clone(),
            value: value.to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::{CompoundRule, CompoundSlotRule};
    use crate::variant::Axis;

    fn base() -> VariantTable {
        VariantTable::new()
            .slot("base", "flex")
            .slot("item", "")
            .axis(Axis::enumerated("color").values(["primary", "danger"]))
            .axis(Axis::boolean("showShadow"))
            .default_value("color", "primary")
            .default_value("showShadow", false)
    }

    #[test]
    fn test_valid_table() {
        let table = base()
            .compound(
                CompoundRule::new()
                    .when("showShadow", true)
                    .when("color", "danger")
                    .class("item", "shadow-lg"),
            )
            .compound_slots(CompoundSlotRule::new(["base", "item"]).class("truncate"));
        assert_eq!(table.validate(), Ok(()));
    }

    #[test]
    fn test_duplicate_slot() {
        let err = base().slot("item", "flex").validate().unwrap_err();
        assert_eq!(
            err,
            TableError::DuplicateSlot {
                slot: "item".to_string()
            }
        );
    }

    #[test]
    fn test_duplicate_axis() {
        let err = base()
            .axis(Axis::boolean("showShadow"))
            .validate()
            .unwrap_err();
        assert!(matches!(err, TableError::DuplicateAxis { axis } if axis == "showShadow"));
    }

    #[test]
    fn test_axis_value_targets_unknown_slot() {
        let err = base()
            .axis(Axis::boolean("isFocusVisible").value(true, [("wrapper", "ring-2")]))
            .validate()
            .unwrap_err();
        assert!(matches!(err, TableError::UnknownSlot { slot, .. } if slot == "wrapper"));
    }

    #[test]
    fn test_boolean_axis_with_non_boolean_value() {
        let err = base()
            .axis(Axis::boolean("isEven").value("sometimes", [("base", "gap-0")]))
            .validate()
            .unwrap_err();
        assert!(matches!(err, TableError::UnknownValue { value, .. } if value == "sometimes"));
    }

    #[test]
    fn test_default_for_unknown_axis() {
        let err = base().default_value("size", "md").validate().unwrap_err();
        assert!(matches!(err, TableError::UnknownAxis { axis, .. } if axis == "size"));
    }

    #[test]
    fn test_default_out_of_domain() {
        let err = base().default_value("color", "teal").validate().unwrap_err();
        assert!(matches!(err, TableError::UnknownValue { value, .. } if value == "teal"));
    }

    #[test]
    fn test_required_axis_without_default() {
        let err = base()
            .axis(Axis::enumerated("size").values(["sm", "lg"]))
            .validate()
            .unwrap_err();
        assert_eq!(
            err,
            TableError::MissingDefault {
                axis: "size".to_string()
            }
        );
    }

    #[test]
    fn test_forgotten_default_is_caught() {
        let table = VariantTable::new()
            .slot("cursor", "absolute")
            .axis(Axis::enumerated("color").value("primary", [("cursor", "bg-primary")]));
        assert!(matches!(
            table.validate(),
            Err(TableError::MissingDefault { axis }) if axis == "color"
        ));
    }

    #[test]
    fn test_optional_axis_without_default() {
        let table = base().axis(
            Axis::boolean("isFocusVisible")
                .optional()
                .value(true, [("base", "ring-2")]),
        );
        assert_eq!(table.validate(), Ok(()));
    }

    #[test]
    fn test_optional_axis_may_still_have_default() {
        let table = base()
            .axis(Axis::enumerated("size").optional().values(["sm", "lg"]))
            .default_value("size", "sm");
        assert_eq!(table.validate(), Ok(()));
    }

    #[test]
    fn test_compound_rule_needs_two_constraints() {
        let err = base()
            .compound(CompoundRule::new().when("showShadow", true).class("item", "shadow-lg"))
            .validate()
            .unwrap_err();
        assert_eq!(err, TableError::CompoundTooNarrow { index: 0, found: 1 });
    }

    #[test]
    fn test_compound_rule_unknown_value() {
        let err = base()
            .compound(
                CompoundRule::new()
                    .when("showShadow", true)
                    .when("color", "teal")
                    .class("item", "shadow-lg"),
            )
            .validate()
            .unwrap_err();
        assert!(matches!(err, TableError::UnknownValue { axis, .. } if axis == "color"));
    }

    #[test]
    fn test_compound_rule_unknown_slot() {
        let err = base()
            .compound(
                CompoundRule::new()
                    .when("showShadow", true)
                    .when("color", "danger")
                    .class("cursor", "shadow-lg"),
            )
            .validate()
            .unwrap_err();
        assert!(matches!(err, TableError::UnknownSlot { slot, .. } if slot == "cursor"));
    }

    #[test]
    fn test_compound_slots_empty() {
        let err = base()
            .compound_slots(CompoundSlotRule::new(Vec::<String>::new()).class("flex"))
            .validate()
            .unwrap_err();
        assert_eq!(err, TableError::EmptyCompoundSlots { index: 0 });
    }

    #[test]
    fn test_compound_slots_unknown_slot() {
        let err = base()
            .compound_slots(CompoundSlotRule::new(["item", "next"]).class("flex"))
            .validate()
            .unwrap_err();
        assert!(matches!(err, TableError::UnknownSlot { slot, .. } if slot == "next"));
    }
}
