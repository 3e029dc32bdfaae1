//! Focus ring classes.

/// Classes that draw the keyboard focus ring, in application order.
pub const RING_CLASSES: &[&str] = &[
    "outline-none",
    "ring-2",
    "ring-focus",
    "ring-offset-2",
    "ring-offset-background",
];
