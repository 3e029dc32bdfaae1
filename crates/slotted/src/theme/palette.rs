//! Semantic color palette classes.
//!
//! Each [`Color`] has two fixed class sets:
//!
//! - [`solid`]: background, border and text for a filled element
//! - [`shadow`]: a drop shadow tinted with the color

use std::fmt;
use std::str::FromStr;

use crate::variant::VariantValue;

/// Semantic color names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    Neutral,
    Primary,
    Secondary,
    Success,
    Warning,
    Danger,
}

impl Color {
    /// Every color, in palette order.
    pub const ALL: [Color; 6] = [
        Color::Neutral,
        Color::Primary,
        Color::Secondary,
        Color::Success,
        Color::Warning,
        Color::Danger,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Color::Neutral => "neutral",
            Color::Primary => "primary",
            Color::Secondary => "secondary",
            Color::Success => "success",
            Color::Warning => "warning",
            Color::Danger => "danger",
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Color {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Color::ALL
            .into_iter()
            .find(|color| color.as_str() == s)
            .ok_or_else(|| format!("unknown color '{}'", s))
    }
}

impl From<Color> for VariantValue {
    fn from(color: Color) -> Self {
        VariantValue::from(color.as_str())
    }
}

/// Filled-element classes for `color`.
///
/// Neutral uses the `-400` shade so it stays visible on neutral surfaces.
pub fn solid(color: Color) -> &'static [&'static str] {
    match color {
        Color::Neutral => &[
            "bg-neutral-400",
            "border-neutral-400",
            "text-neutral-contrastText",
        ],
        Color::Primary => &["bg-primary", "border-primary", "text-primary-contrastText"],
        Color::Secondary => &[
            "bg-secondary",
            "border-secondary",
            "text-secondary-contrastText",
        ],
        Color::Success => &["bg-success", "border-success", "text-success-contrastText"],
        Color::Warning => &["bg-warning", "border-warning", "text-warning-contrastText"],
        Color::Danger => &["bg-danger", "border-danger", "text-danger-contrastText"],
    }
}

/// Drop-shadow classes for `color`.
pub fn shadow(color: Color) -> &'static [&'static str] {
    match color {
        Color::Neutral => &["shadow-lg", "shadow-neutral/50"],
        Color::Primary => &["shadow-lg", "shadow-primary/40"],
        Color::Secondary => &["shadow-lg", "shadow-secondary/40"],
        Color::Success => &["shadow-lg", "shadow-success/40"],
        Color::Warning => &["shadow-lg", "shadow-warning/40"],
        Color::Danger => &["shadow-lg", "shadow-danger/40"],
    }
}
