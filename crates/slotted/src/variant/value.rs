//! Values selectable on a variant axis.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A value on a variant axis.
///
/// Values are compared by their string form, so the boolean `true` and the
/// string `"true"` are the same value. This is what lets a compound rule say
/// `showShadow: true` and match an axis resolved from either spelling.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "ValueSource", into = "String")]
pub struct VariantValue(String);

impl VariantValue {
    pub const TRUE: &'static str = "true";
    pub const FALSE: &'static str = "false";

    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the boolean this value spells, if any.
    pub fn as_bool(&self) -> Option<bool> {
        match self.0.as_str() {
            Self::TRUE => Some(true),
            Self::FALSE => Some(false),
            _ => None,
        }
    }
}

impl fmt::Display for VariantValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for VariantValue {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for VariantValue {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&String> for VariantValue {
    fn from(value: &String) -> Self {
        Self(value.clone())
    }
}

impl From<bool> for VariantValue {
    fn from(value: bool) -> Self {
        Self::from(if value { Self::TRUE } else { Self::FALSE })
    }
}

impl From<VariantValue> for String {
    fn from(value: VariantValue) -> Self {
        value.0
    }
}

impl PartialEq<str> for VariantValue {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for VariantValue {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

/// Scalar shapes a value may take in a serialized table or option set.
#[derive(Deserialize)]
#[serde(untagged)]
enum ValueSource {
    Bool(bool),
    Int(i64),
    Str(String),
}

impl From<ValueSource> for VariantValue {
    fn from(source: ValueSource) -> Self {
        match source {
            ValueSource::Bool(b) => VariantValue::from(b),
            ValueSource::Int(n) => VariantValue::new(n.to_string()),
            ValueSource::Str(s) => VariantValue::new(s),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bool_and_string_spellings_are_equal() {
        assert_eq!(VariantValue::from(true), VariantValue::from("true"));
        assert_eq!(VariantValue::from(false), VariantValue::from("false"));
    }

    #[test]
    fn test_as_bool() {
        assert_eq!(VariantValue::from(true).as_bool(), Some(true));
        assert_eq!(VariantValue::from("false").as_bool(), Some(false));
        assert_eq!(VariantValue::from("primary").as_bool(), None);
    }

    #[test]
    fn test_deserialize_scalars() {
        let values: Vec<VariantValue> = serde_json::from_str(r#"[true, "md", 2]"#).unwrap();
        let expected: Vec<VariantValue> = ["true", "md", "2"].into_iter().map(VariantValue::from).collect();
        assert_eq!(values, expected);
    }

    #[test]
    fn test_compares_with_str() {
        assert!(VariantValue::from("danger") == "danger");
    }
}
