//! Variant resolution: options in, per-slot class strings out.
//!
//! Resolution is a single pass over a [`VariantTable`]:
//!
//! 1. Merge caller options over the table defaults, rejecting unknown axes
//!    and out-of-domain values before anything is built.
//! 2. Seed every slot with its base classes.
//! 3. Append each axis's contribution for its resolved value.
//! 4. Append the contributions of every matching compound rule, in order.
//! 5. Append the classes of every matching compound slot rule, in order.
//! 6. Hand each slot's accumulated classes to the [`ClassMerger`].
//!
//! With variants disabled, steps 3-5 are skipped and only base classes are
//! merged. Options are still validated.

use indexmap::IndexMap;
use serde::Serialize;
use std::sync::Arc;

use crate::error::ConfigError;
use crate::merge::{ClassMerger, UtilityMerger};
use crate::table::VariantTable;
use crate::variant::Options;

/// Final class strings per slot, in slot declaration order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ResolvedSlots {
    slots: IndexMap<String, String>,
}

impl ResolvedSlots {
    /// The class string for `slot`, or `None` if the table has no such slot.
    pub fn get(&self, slot: &str) -> Option<&str> {
        self.slots.get(slot).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.slots
            .iter()
            .map(|(slot, classes)| (slot.as_str(), classes.as_str()))
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn into_map(self) -> IndexMap<String, String> {
        self.slots
    }
}

/// Resolves options against a borrowed table.
///
/// The resolver holds no mutable state; one instance can serve any number of
/// threads.
///
/// # Example
///
/// ```rust
/// use slotted::{Axis, ConcatMerger, Options, Resolver, VariantTable};
///
/// let table = VariantTable::new()
///     .slot("base", "flex gap-1")
///     .axis(Axis::boolean("isEven").value(true, [("base", "gap-0")]))
///     .default_value("isEven", false);
///
/// let even = Options::new().set("isEven", true);
///
/// let merged = Resolver::new(&table).resolve(&even).unwrap();
/// assert_eq!(merged.get("base"), Some("flex gap-0"));
///
/// let concatenated = Resolver::new(&table).with_merger(ConcatMerger).resolve(&even).unwrap();
/// assert_eq!(concatenated.get("base"), Some("flex gap-1 gap-0"));
///
/// let unstyled = Resolver::new(&table).disable_variants(true).resolve(&even).unwrap();
/// assert_eq!(unstyled.get("base"), Some("flex gap-1"));
/// ```
#[derive(Debug, Clone)]
pub struct Resolver<'t> {
    table: &'t VariantTable,
    merger: Arc<dyn ClassMerger>,
    variants_disabled: bool,
}

impl<'t> Resolver<'t> {
    /// Creates a resolver using [`UtilityMerger`] with variants enabled.
    pub fn new(table: &'t VariantTable) -> Self {
        Self {
            table,
            merger: Arc::new(UtilityMerger::new()),
            variants_disabled: false,
        }
    }

    /// Replaces the class merging strategy.
    pub fn with_merger(mut self, merger: impl ClassMerger + 'static) -> Self {
        self.merger = Arc::new(merger);
        self
    }

    /// Uses an already shared merger.
    pub fn with_shared_merger(mut self, merger: Arc<dyn ClassMerger>) -> Self {
        self.merger = merger;
        self
    }

    /// When `true`, only base slot classes are emitted.
    pub fn disable_variants(mut self, disabled: bool) -> Self {
        self.variants_disabled = disabled;
        self
    }

    pub fn table(&self) -> &'t VariantTable {
        self.table
    }

    /// Resolves `options` into a class string per slot.
    ///
    /// Either every slot is resolved or an error is returned; there are no
    /// partial results.
    pub fn resolve(&self, options: &Options) -> Result<ResolvedSlots, ConfigError> {
        let table = self.table;
        let resolved = table.resolve_options(options)?;
        tracing::debug!(options = ?resolved, unstyled = self.variants_disabled, "resolving variants");

        let mut acc: IndexMap<&str, Vec<&str>> = table
            .slots()
            .iter()
            .map(|slot| (slot.name.as_str(), slot.classes.iter().collect()))
            .collect();

        if !self.variants_disabled {
            for axis in table.axes() {
                let Some(value) = resolved.get(axis.name()) else {
                    continue;
                };
                let Some(contributions) = axis.contributions(value) else {
                    continue;
                };
                for (slot, classes) in contributions {
                    if let Some(fragments) = acc.get_mut(slot.as_str()) {
                        fragments.extend(classes.iter());
                    }
                }
            }

            for (index, rule) in table.compound_rules().iter().enumerate() {
                if !rule.matches(&resolved) {
                    continue;
                }
                tracing::trace!(index, "compound rule matched");
                for (slot, classes) in rule.classes() {
                    if let Some(fragments) = acc.get_mut(slot.as_str()) {
                        fragments.extend(classes.iter());
                    }
                }
            }

            for (index, rule) in table.compound_slot_rules().iter().enumerate() {
                if !rule.matches(&resolved) {
                    continue;
                }
                tracing::trace!(index, "compound slot rule matched");
                for slot in rule.slots() {
                    if let Some(fragments) = acc.get_mut(slot.as_str()) {
                        fragments.extend(rule.classes().iter());
                    }
                }
            }
        }

        let slots = acc
            .into_iter()
            .map(|(slot, fragments)| (slot.to_string(), self.merger.merge(&fragments)))
            .collect();
        Ok(ResolvedSlots { slots })
    }
}
