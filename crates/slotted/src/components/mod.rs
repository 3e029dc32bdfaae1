//! Variant tables for concrete widgets.

pub mod pagination;
