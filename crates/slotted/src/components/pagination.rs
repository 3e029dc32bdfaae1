//! Pagination variant table.
//!
//! Slots map onto the pagination markup like so:
//!
//! ```text
//! <ul class={base}>
//!   <li class={cursor} aria-hidden="true">{active page}</li>
//!   <li class={prev}>Prev</li>
//!   <li class={item} data-active="true">1</li>
//!   <li class={item}>2</li>
//!   <li class={next}>Next</li>
//! </ul>
//! ```
//!
//! The `cursor` slot is the floating marker over the active page. With
//! `disableCursor` the marker is hidden and the active `item` is colored
//! through `data-[active=true]:` classes instead.

use once_cell::sync::Lazy;
use serde::Serialize;

use crate::error::ConfigError;
use crate::resolve::ResolvedSlots;
use crate::table::{CompoundRule, CompoundSlotRule, VariantTable};
use crate::theme::palette::{self, Color};
use crate::theme::RING_CLASSES;
use crate::variant::{Axis, Options, VariantValue};

/// Slots sized and rounded together.
const SIZED_SLOTS: [&str; 4] = ["item", "cursor", "prev", "next"];

/// Classes shared by every clickable slot.
const CONTROL_CLASSES: &[&str] = &[
    "flex",
    "flex-wrap",
    "truncate",
    "box-border",
    "outline-none",
    "items-center",
    "justify-center",
    "bg-neutral-100",
    "hover:bg-neutral-200",
    "active:bg-neutral-300",
    "text-neutral-contrastText",
];

/// Visual treatment of the page items.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PaginationVariant {
    Bordered,
    Light,
    Flat,
    Faded,
}

impl PaginationVariant {
    pub const ALL: [PaginationVariant; 4] = [
        PaginationVariant::Bordered,
        PaginationVariant::Light,
        PaginationVariant::Flat,
        PaginationVariant::Faded,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            PaginationVariant::Bordered => "bordered",
            PaginationVariant::Light => "light",
            PaginationVariant::Flat => "flat",
            PaginationVariant::Faded => "faded",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Size {
    Xs,
    Sm,
    Md,
    Lg,
    Xl,
}

impl Size {
    pub const ALL: [Size; 5] = [Size::Xs, Size::Sm, Size::Md, Size::Lg, Size::Xl];

    pub fn as_str(self) -> &'static str {
        match self {
            Size::Xs => "xs",
            Size::Sm => "sm",
            Size::Md => "md",
            Size::Lg => "lg",
            Size::Xl => "xl",
        }
    }

    /// Dimension classes applied to every sized slot.
    pub fn classes(self) -> &'static str {
        match self {
            Size::Xs => "w-7 h-7 text-xs",
            Size::Sm => "w-8 h-8 text-sm",
            Size::Md => "w-9 h-9 text-sm",
            Size::Lg => "w-10 h-10 text-base",
            Size::Xl => "w-11 h-11 text-base",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Radius {
    None,
    Base,
    Sm,
    Md,
    Lg,
    Xl,
    Full,
}

impl Radius {
    pub const ALL: [Radius; 7] = [
        Radius::None,
        Radius::Base,
        Radius::Sm,
        Radius::Md,
        Radius::Lg,
        Radius::Xl,
        Radius::Full,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Radius::None => "none",
            Radius::Base => "base",
            Radius::Sm => "sm",
            Radius::Md => "md",
            Radius::Lg => "lg",
            Radius::Xl => "xl",
            Radius::Full => "full",
        }
    }

    /// Corner radius class applied to every sized slot.
    pub fn class(self) -> &'static str {
        match self {
            Radius::None => "rounded-none",
            Radius::Base => "rounded-base",
            Radius::Sm => "rounded-sm",
            Radius::Md => "rounded",
            Radius::Lg => "rounded-lg",
            Radius::Xl => "rounded-xl",
            Radius::Full => "rounded-full",
        }
    }
}

impl From<PaginationVariant> for VariantValue {
    fn from(variant: PaginationVariant) -> Self {
        VariantValue::from(variant.as_str())
    }
}

impl From<Size> for VariantValue {
    fn from(size: Size) -> Self {
        VariantValue::from(size.as_str())
    }
}

impl From<Radius> for VariantValue {
    fn from(radius: Radius) -> Self {
        VariantValue::from(radius.as_str())
    }
}

/// Typed pagination options. `None` fields fall back to the table defaults.
///
/// # Example
///
/// ```rust
/// use slotted::components::pagination::{self, PaginationProps, Size};
/// use slotted::theme::Color;
///
/// let classes = pagination::classes(&PaginationProps {
///     color: Some(Color::Success),
///     size: Some(Size::Lg),
///     disable_cursor: Some(true),
///     ..Default::default()
/// })
/// .unwrap();
///
/// assert!(classes.item.contains("data-[active=true]:bg-success"));
/// assert!(classes.cursor.contains("hidden"));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PaginationProps {
    pub variant: Option<PaginationVariant>,
    pub color: Option<Color>,
    pub size: Option<Size>,
    pub radius: Option<Radius>,
    pub is_even: Option<bool>,
    pub is_disabled: Option<bool>,
    pub is_focus_visible: Option<bool>,
    pub show_shadow: Option<bool>,
    pub disable_animation: Option<bool>,
    pub disable_cursor: Option<bool>,
}

impl From<&PaginationProps> for Options {
    fn from(props: &PaginationProps) -> Self {
        let mut options = Options::new();
        let mut set = |axis: &str, value: Option<VariantValue>| {
            if let Some(value) = value {
                options.insert(axis, value);
            }
        };
        set("variant", props.variant.map(Into::into));
        set("color", props.color.map(Into::into));
        set("size", props.size.map(Into::into));
        set("radius", props.radius.map(Into::into));
        set("isEven", props.is_even.map(Into::into));
        set("isDisabled", props.is_disabled.map(Into::into));
        set("isFocusVisible", props.is_focus_visible.map(Into::into));
        set("showShadow", props.show_shadow.map(Into::into));
        set("disableAnimation", props.disable_animation.map(Into::into));
        set("disableCursor", props.disable_cursor.map(Into::into));
        options
    }
}

/// Resolved class strings for each pagination slot.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PaginationClasses {
    pub base: String,
    pub item: String,
    pub prev: String,
    pub next: String,
    pub cursor: String,
}

impl From<ResolvedSlots> for PaginationClasses {
    fn from(slots: ResolvedSlots) -> Self {
        let get = |slot: &str| slots.get(slot).unwrap_or_default().to_string();
        Self {
            base: get("base"),
            item: get("item"),
            prev: get("prev"),
            next: get("next"),
            cursor: get("cursor"),
        }
    }
}

static PAGINATION: Lazy<VariantTable> = Lazy::new(build);

/// The shared pagination table, built on first use.
pub fn table() -> &'static VariantTable {
    &PAGINATION
}

/// Resolves typed props against the pagination table.
pub fn classes(props: &PaginationProps) -> Result<PaginationClasses, ConfigError> {
    let slots = table().resolve(&Options::from(props))?;
    Ok(PaginationClasses::from(slots))
}

fn active(classes: &[&str]) -> Vec<String> {
    classes
        .iter()
        .map(|class| format!("data-[active=true]:{}", class))
        .collect()
}

fn build() -> VariantTable {
    let mut color = Axis::enumerated("color");
    for c in Color::ALL {
        color = color.value(c, [("cursor", palette::solid(c))]);
    }

    let mut table = VariantTable::new()
        .slot("base", "flex flex-wrap relative gap-1 max-w-fit")
        .slot("item", "")
        .slot("prev", "")
        .slot("next", "")
        .slot(
            "cursor",
            [
                "absolute",
                "flex",
                "overflow-visible",
                "items-center",
                "justify-center",
                "origin-center",
                "left-0",
            ],
        )
        .axis(
            Axis::enumerated("variant")
                .value(
                    PaginationVariant::Bordered,
                    [(
                        "item",
                        ["border-1.5", "border-neutral", "bg-transparent", "hover:bg-neutral-100"],
                    )],
                )
                .value(PaginationVariant::Light, [("item", "bg-transparent")])
                .values([PaginationVariant::Flat])
                .value(PaginationVariant::Faded, [("item", "border-1.5")]),
        )
        .axis(color)
        .axis(Axis::enumerated("size").values(Size::ALL))
        .axis(Axis::enumerated("radius").values(Radius::ALL))
        .axis(
            Axis::boolean("isEven")
                .value(true, [("base", "gap-0")])
                .value(
                    true,
                    [(
                        "item",
                        [
                            "first-of-type:rounded-r-none",
                            "last-of-type:rounded-l-none",
                            "[&:not(:first-of-type):not(:last-of-type)]:rounded-none",
                        ],
                    )],
                ),
        )
        .axis(Axis::boolean("isDisabled").value(true, [("base", "opacity-50 pointer-events-none")]))
        // Ring classes attach to `base`; no wrapper slot is declared for them.
        .axis(
            Axis::boolean("isFocusVisible")
                .optional()
                .value(true, [("base", RING_CLASSES)]),
        )
        .axis(Axis::boolean("showShadow"))
        .axis(
            Axis::boolean("disableAnimation")
                .value(false, [("item", "transition-background")])
                .value(false, [("cursor", "transition-transform !duration-300")]),
        )
        .axis(Axis::boolean("disableCursor").value(true, [("cursor", "hidden")]))
        .default_value("variant", PaginationVariant::Flat)
        .default_value("color", Color::Primary)
        .default_value("size", Size::Md)
        .default_value("radius", Radius::Xl)
        .default_value("isEven", false)
        .default_value("isDisabled", false)
        .default_value("showShadow", false)
        .default_value("disableAnimation", false)
        .default_value("disableCursor", false);

    for c in Color::ALL {
        table = table.compound(
            CompoundRule::new()
                .when("showShadow", true)
                .when("color", c)
                .class("cursor", palette::shadow(c)),
        );
    }

    table = table.compound(
        CompoundRule::new()
            .when("isEven", true)
            .when("variant", PaginationVariant::Bordered)
            .class("item", "[&:not(:first-of-type)]:border-l-0"),
    );

    for c in Color::ALL {
        table = table.compound(
            CompoundRule::new()
                .when("disableCursor", true)
                .when("color", c)
                .class("item", active(palette::solid(c))),
        );
    }

    for c in Color::ALL {
        table = table.compound(
            CompoundRule::new()
                .when("disableCursor", true)
                .when("showShadow", true)
                .when("color", c)
                .class("item", active(palette::shadow(c))),
        );
    }

    table = table.compound_slots(CompoundSlotRule::new(["item", "prev", "next"]).class(CONTROL_CLASSES));

    for size in Size::ALL {
        table = table.compound_slots(
            CompoundSlotRule::new(SIZED_SLOTS)
                .when("size", size)
                .class(size.classes()),
        );
    }

    for radius in Radius::ALL {
        table = table.compound_slots(
            CompoundSlotRule::new(SIZED_SLOTS)
                .when("radius", radius)
                .class(radius.class()),
        );
    }

    table
}
