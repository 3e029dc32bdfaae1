//! Error types for table validation and variant resolution.

use thiserror::Error;

/// Error returned when caller options don't match a table's declared domain.
///
/// Both variants indicate a mismatch between the caller and the table
/// (a programming error), not a condition to recover from at runtime.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// The option names an axis the table doesn't declare.
    #[error("unknown variant axis '{axis}'")]
    UnknownAxis { axis: String },

    /// The option's value is outside the axis's domain.
    #[error(
        "unknown value '{value}' for axis '{axis}' (expected one of: {})",
        .expected.join(", ")
    )]
    UnknownValue {
        axis: String,
        value: String,
        expected: Vec<String>,
    },
}

impl ConfigError {
    /// The axis the error refers to.
    pub fn axis(&self) -> &str {
        match self {
            ConfigError::UnknownAxis { axis } => axis,
            ConfigError::UnknownValue { axis, .. } => axis,
        }
    }
}

/// Error returned when a variant table violates its structural invariants.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TableError {
    /// A slot name is declared more than once.
    #[error("slot '{slot}' is declared more than once")]
    DuplicateSlot { slot: String },

    /// An axis name is declared more than once.
    #[error("axis '{axis}' is declared more than once")]
    DuplicateAxis { axis: String },

    /// A contribution targets a slot that isn't declared.
    #[error("{context} references undeclared slot '{slot}'")]
    UnknownSlot { context: String, slot: String },

    /// A default or rule constraint names an undeclared axis.
    #[error("{context} references undeclared axis '{axis}'")]
    UnknownAxis { context: String, axis: String },

    /// A default or rule constraint uses a value outside the axis domain.
    #[error("{context} uses value '{value}' not declared on axis '{axis}'")]
    UnknownValue {
        context: String,
        axis: String,
        value: String,
    },

    /// A required axis has no default selection.
    #[error("axis '{axis}' has no default and is not marked optional")]
    MissingDefault { axis: String },

    /// A compound rule has fewer than two constraints.
    #[error("compound rule #{index} needs at least two constraints, found {found}")]
    CompoundTooNarrow { index: usize, found: usize },

    /// A compound slot rule lists no slots.
    #[error("compound slot rule #{index} lists no slots")]
    EmptyCompoundSlots { index: usize },
}

/// Error returned when loading a table from YAML fails.
#[derive(Debug, Error)]
pub enum TableParseError {
    #[error("invalid variant table YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("invalid variant table: {0}")]
    Invalid(#[from] TableError),
}
