//! Variant axes, values and caller options.
//!
//! - [`VariantValue`]: a single value on an axis (`"primary"`, `true`, ...)
//! - [`Axis`]: a named dimension with a closed domain of values
//! - [`Options`]: the partial axis → value mapping a caller supplies
//! - [`ResolvedOptions`]: options merged over a table's defaults

mod axis;
mod options;
mod value;

pub use axis::{Axis, AxisKind};
pub use options::{Options, ResolvedOptions};
pub use value::VariantValue;
