//! # Slotted - slot-based style variant tables
//!
//! Slotted maps semantic widget options (color, size, boolean flags, ...) to
//! utility class strings for each named part ("slot") of a composite widget.
//!
//! A [`VariantTable`] declares:
//!
//! - **slots** with base classes
//! - **axes**, each with a closed set of values contributing classes per slot
//! - **defaults** used when a caller omits an axis
//! - **compound rules** adding classes when several axes match together
//! - **compound slot rules** adding the same classes to a group of slots
//!
//! A [`Resolver`] turns caller [`Options`] into a [`ResolvedSlots`] map,
//! merging each slot's classes through a pluggable [`ClassMerger`].
//!
//! ## Quick Start
//!
//! ```rust
//! use slotted::components::pagination::{self, PaginationProps, PaginationVariant};
//!
//! let classes = pagination::classes(&PaginationProps {
//!     variant: Some(PaginationVariant::Bordered),
//!     is_even: Some(true),
//!     ..Default::default()
//! })
//! .unwrap();
//!
//! assert!(classes.item.contains("[&:not(:first-of-type)]:border-l-0"));
//! assert!(classes.base.contains("gap-0"));
//! ```
//!
//! ## Untyped resolution
//!
//! ```rust
//! use slotted::{ConfigError, Options};
//! use slotted::components::pagination;
//!
//! let slots = pagination::table()
//!     .resolve(&Options::new().set("size", "lg"))
//!     .unwrap();
//! assert!(slots.get("next").unwrap().contains("w-10 h-10 text-base"));
//!
//! let err = pagination::table()
//!     .resolve(&Options::new().set("size", "huge"))
//!     .unwrap_err();
//! assert!(matches!(err, ConfigError::UnknownValue { .. }));
//! ```

pub mod classes;
pub mod components;
mod error;
pub mod merge;
mod resolve;
pub mod table;
pub mod theme;
pub mod variant;

pub use classes::{ClassList, SlotClasses};
pub use error::{ConfigError, TableError, TableParseError};
pub use merge::{ClassMerger, ConcatMerger, UtilityMerger};
pub use resolve::{ResolvedSlots, Resolver};
pub use table::{CompoundRule, CompoundSlotRule, VariantTable};
pub use variant::{Axis, AxisKind, Options, ResolvedOptions, VariantValue};
