//! Rendering of command results.
//!
//! Text output is styled with `console`, which drops ANSI codes when the
//! stream is not a terminal. JSON and YAML output carry the same data
//! unstyled.

use std::collections::BTreeMap;

use anyhow::Result;
use clap::ValueEnum;
use console::{pad_str, style, Alignment};
use serde::Serialize;
use slotted::{AxisKind, ResolvedSlots, VariantTable};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum Format {
    #[default]
    Text,
    Json,
    Yaml,
}

fn emit<T: Serialize>(value: &T, format: Format, text: impl FnOnce(&T) -> String) -> Result<String> {
    Ok(match format {
        Format::Text => text(value),
        Format::Json => serde_json::to_string_pretty(value)?,
        Format::Yaml => serde_yaml::to_string(value)?.trim_end().to_string(),
    })
}

fn classes_or_empty(classes: &str) -> String {
    if classes.is_empty() {
        style("(empty)").dim().to_string()
    } else {
        classes.to_string()
    }
}

fn rows<'a>(rows: impl IntoIterator<Item = (&'a str, String)>) -> Vec<String> {
    let rows: Vec<_> = rows.into_iter().collect();
    let width = rows.iter().map(|(name, _)| name.len()).max().unwrap_or(0);
    rows.into_iter()
        .map(|(name, value)| {
            let name = style(name).cyan().to_string();
            format!("  {}  {}", pad_str(&name, width, Alignment::Left, None), value)
        })
        .collect()
}

/// All slots, one per line.
pub fn slots(resolved: &ResolvedSlots, format: Format) -> Result<String> {
    emit(resolved, format, |resolved| {
        rows(resolved.iter().map(|(slot, classes)| (slot, classes_or_empty(classes)))).join("\n")
    })
}

/// A single slot. Text output is the bare class string.
pub fn slot(name: &str, classes: &str, format: Format) -> Result<String> {
    let single = BTreeMap::from([(name, classes)]);
    emit(&single, format, |_| classes.to_string())
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TableSummary<'a> {
    pub slots: Vec<SlotSummary<'a>>,
    pub axes: Vec<AxisSummary<'a>>,
    pub compound_rules: usize,
    pub compound_slot_rules: usize,
}

#[derive(Debug, Serialize)]
pub struct SlotSummary<'a> {
    pub name: &'a str,
    pub classes: String,
}

#[derive(Debug, Serialize)]
pub struct AxisSummary<'a> {
    pub name: &'a str,
    pub kind: &'static str,
    pub values: Vec<&'a str>,
    pub default: Option<&'a str>,
    pub optional: bool,
}

impl<'a> TableSummary<'a> {
    pub fn new(table: &'a VariantTable) -> Self {
        let slots = table
            .slots()
            .iter()
            .map(|slot| SlotSummary {
                name: &slot.name,
                classes: slot.classes.to_string(),
            })
            .collect();
        let axes = table
            .axes()
            .iter()
            .map(|axis| AxisSummary {
                name: axis.name(),
                kind: match axis.kind() {
                    AxisKind::Enumerated => "enumerated",
                    AxisKind::Boolean => "boolean",
                },
                values: axis.domain(),
                default: table.defaults().get(axis.name()).map(|value| value.as_str()),
                optional: axis.is_optional(),
            })
            .collect();
        Self {
            slots,
            axes,
            compound_rules: table.compound_rules().len(),
            compound_slot_rules: table.compound_slot_rules().len(),
        }
    }
}

fn heading(title: &str) -> String {
    style(title).bold().to_string()
}

/// Slots, axes with their domains and defaults, and rule counts.
pub fn summary(table: &VariantTable, format: Format) -> Result<String> {
    emit(&TableSummary::new(table), format, |summary| {
        let mut lines = vec![heading("Slots")];
        lines.extend(rows(
            summary
                .slots
                .iter()
                .map(|slot| (slot.name, classes_or_empty(&slot.classes))),
        ));

        lines.push(heading("Axes"));
        lines.extend(rows(summary.axes.iter().map(|axis| {
            let values = axis
                .values
                .iter()
                .map(|value| {
                    if Some(*value) == axis.default {
                        style(*value).green().underlined().to_string()
                    } else {
                        value.to_string()
                    }
                })
                .collect::<Vec<_>>()
                .join(" | ");
            let default = match axis.default {
                Some(value) => format!("default: {value}"),
                None if axis.optional => "optional".to_string(),
                None => "no default".to_string(),
            };
            (
                axis.name,
                format!("{values}  {}", style(format!("({}, {default})", axis.kind)).dim()),
            )
        })));

        lines.push(heading("Rules"));
        lines.push(format!(
            "  {} compound, {} compound slot",
            summary.compound_rules, summary.compound_slot_rules
        ));
        lines.join("\n")
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use slotted::components::pagination;
    use slotted::{Axis, Options};

    fn table() -> VariantTable {
        VariantTable::new()
            .slot("base", "flex gap-1")
            .slot("item", "")
            .axis(Axis::boolean("isEven").value(true, [("base", "gap-0")]))
            .axis(Axis::enumerated("size").optional().values(["sm", "lg"]))
            .default_value("isEven", false)
    }

    #[test]
    fn test_slots_json_preserves_order() {
        let resolved = table().resolve(&Options::new()).unwrap();
        let json = slots(&resolved, Format::Json).unwrap();
        let base = json.find("\"base\"").unwrap();
        let item = json.find("\"item\"").unwrap();
        assert!(base < item);
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["base"], "flex gap-1");
        assert_eq!(value["item"], "");
    }

    #[test]
    fn test_slots_text_lists_each_slot() {
        console::set_colors_enabled(false);
        let resolved = table().resolve(&Options::new().set("isEven", true)).unwrap();
        let text = slots(&resolved, Format::Text).unwrap();
        assert_eq!(text, "  base  flex gap-0\n  item  (empty)");
    }

    #[test]
    fn test_single_slot_text_is_bare() {
        assert_eq!(slot("item", "w-9 h-9", Format::Text).unwrap(), "w-9 h-9");
        assert_eq!(slot("item", "w-9 h-9", Format::Yaml).unwrap(), "item: w-9 h-9");
    }

    #[test]
    fn test_summary_structure() {
        let summary = TableSummary::new(pagination::table());
        assert_eq!(summary.slots.len(), 5);
        assert_eq!(summary.axes.len(), 10);
        assert_eq!(summary.compound_rules, 19);
        assert_eq!(summary.compound_slot_rules, 13);

        let focus = summary
            .axes
            .iter()
            .find(|axis| axis.name == "isFocusVisible")
            .unwrap();
        assert_eq!(focus.kind, "boolean");
        assert_eq!(focus.values, vec!["true", "false"]);
        assert_eq!(focus.default, None);
        assert!(focus.optional);
    }

    #[test]
    fn test_summary_text() {
        console::set_colors_enabled(false);
        let text = summary(&table(), Format::Text).unwrap();
        assert!(text.contains("Slots\n  base  flex gap-1\n  item  (empty)"));
        assert!(text.contains("  isEven  true | false  (boolean, default: false)"));
        assert!(text.contains("  size    sm | lg  (enumerated, optional)"));
        assert!(text.ends_with("Rules\n  0 compound, 0 compound slot"));
    }

    #[test]
    fn test_summary_json() {
        let json = summary(&table(), Format::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["axes"][0]["name"], "isEven");
        assert_eq!(value["axes"][0]["default"], "false");
        assert_eq!(value["axes"][1]["default"], serde_json::Value::Null);
        assert_eq!(value["compoundRules"], 0);
    }
}
