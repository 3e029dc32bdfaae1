//! Variant tables and their rules.
//!
//! This module provides:
//!
//! - [`VariantTable`]: slots, axes, defaults and rules with a fluent builder
//! - [`CompoundRule`]: classes gated on several axes at once
//! - [`CompoundSlotRule`]: classes shared by a group of slots
//!
//! Tables are plain data. Validation ([`VariantTable::validate`]) and YAML
//! loading ([`VariantTable::from_yaml`]) live alongside.

mod rules;
#[allow(clippy::module_inception)]
mod table;
mod validate;
mod yaml;

pub use rules::{CompoundRule, CompoundSlotRule, Constraint};
pub use table::{Slot, VariantTable};
