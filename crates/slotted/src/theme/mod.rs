//! Shared theme data consumed by component tables.
//!
//! - [`Color`]: the semantic color names every colored component accepts
//! - [`palette`]: `solid` and `shadow` class sets per color
//! - [`RING_CLASSES`]: keyboard focus ring classes

pub mod palette;
mod ring;

pub use palette::Color;
pub use ring::RING_CLASSES;
