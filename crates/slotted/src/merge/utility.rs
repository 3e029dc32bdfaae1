//! Last-wins merging for conflicting utility classes.
//!
//! Every class is split into `modifiers:` (variants such as `hover:` or
//! `data-[active=true]:`), an optional `!` important marker, and the utility
//! itself. The utility is then classified into a conflict group: the CSS
//! property (and edge, for borders, radii, insets and spacing) it sets.
//!
//! Two classes conflict when modifiers, importance and group all match; the
//! later one survives in its own position. Modifier order is not significant
//! (`hover:focus:` equals `focus:hover:`), except that arbitrary variants
//! such as `[&>*]:` keep their place relative to the modifiers around them. A class that sets a whole shape
//! (`rounded-xl`, `border-2`, `gap-0`) also removes earlier classes for the
//! edges it covers (`rounded-r-none`, `border-l-0`, `gap-x-2`), but not the
//! other way around.
//!
//! Classes that fit no group are kept, with exact repeats collapsed to the
//! last occurrence.

use std::borrow::Cow;
use std::collections::HashSet;

use super::ClassMerger;

/// Merges classes so only the last class per conflict group survives.
///
/// # Example
///
/// ```rust
/// use slotted::{ClassMerger, UtilityMerger};
///
/// let merger = UtilityMerger::new();
/// assert_eq!(merger.merge(&["flex", "gap-1", "hidden", "gap-0"]), "hidden gap-0");
/// // Size and color utilities sharing a prefix don't collide.
/// assert_eq!(merger.merge(&["text-sm", "text-primary"]), "text-sm text-primary");
/// // Modifiers scope the conflict.
/// assert_eq!(merger.merge(&["bg-primary", "hover:bg-danger"]), "bg-primary hover:bg-danger");
/// ```
#[derive(Debug, Clone, Default)]
pub struct UtilityMerger {
    custom_prefixes: Vec<String>,
}

impl UtilityMerger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Treats every class starting with `prefix-` (or equal to `prefix`) as one
    /// conflict group.
    ///
    /// Custom groups take precedence over the built-in classification.
    pub fn group_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.custom_prefixes.push(prefix.into());
        self
    }

    fn classify(&self, utility: &str) -> Option<Group> {
        for prefix in &self.custom_prefixes {
            if utility == prefix || value_after(utility, prefix).is_some() {
                return Some(Group::Custom(prefix.clone()));
            }
        }
        classify(utility)
    }
}

impl ClassMerger for UtilityMerger {
    fn merge(&self, classes: &[&str]) -> String {
        let mut seen = HashSet::with_capacity(classes.len());
        let mut claimed: HashSet<ConflictKey<'_>> = HashSet::new();
        let mut kept = Vec::with_capacity(classes.len());

        for &class in classes.iter().rev() {
            if class.is_empty() || !seen.insert(class) {
                continue;
            }
            let parsed = ParsedClass::parse(class);
            let Some(group) = self.classify(parsed.utility) else {
                kept.push(class);
                continue;
            };

            let key = ConflictKey {
                modifiers: parsed.modifiers,
                important: parsed.important,
                group,
            };
            if claimed.contains(&key) {
                continue;
            }
            for covered in key.group.covers() {
                claimed.insert(ConflictKey {
                    group: covered,
                    ..key.clone()
                });
            }
            claimed.insert(key);
            kept.push(class);
        }

        kept.reverse();
        kept.join(" ")
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct ConflictKey<'a> {
    modifiers: Cow<'a, str>,
    important: bool,
    group: Group,
}

/// A class split into its parts.
#[derive(Debug, Clone, PartialEq, Eq)]
struct ParsedClass<'a> {
    /// Everything up to and including the last top-level `:`, in canonical
    /// order.
    modifiers: Cow<'a, str>,
    important: bool,
    /// The utility with `!` and a leading `-` removed.
    utility: &'a str,
}

impl<'a> ParsedClass<'a> {
    fn parse(class: &'a str) -> Self {
        let mut depth = 0usize;
        let mut split = 0;
        for (i, c) in class.char_indices() {
            match c {
                '[' | '(' => depth += 1,
                ']' | ')' => depth = depth.saturating_sub(1),
                ':' if depth == 0 => split = i + 1,
                _ => {}
            }
        }

        let (modifiers, mut utility) = class.split_at(split);
        let mut important = false;
        if let Some(rest) = utility.strip_prefix('!') {
            important = true;
            utility = rest;
        } else if let Some(rest) = utility.strip_suffix('!') {
            important = true;
            utility = rest;
        }
        let utility = utility.strip_prefix('-').unwrap_or(utility);

        Self {
            modifiers: canonical_modifiers(modifiers),
            important,
            utility,
        }
    }
}

/// Sorts each run of ordinary modifiers; arbitrary `[...]` variants stay
/// where they are and split the runs.
fn canonical_modifiers(modifiers: &str) -> Cow<'_, str> {
    let mut parts = Vec::new();
    let mut depth = 0usize;
    let mut start = 0;
    for (i, c) in modifiers.char_indices() {
        match c {
            '[' | '(' => depth += 1,
            ']' | ')' => depth = depth.saturating_sub(1),
            ':' if depth == 0 => {
                parts.push(&modifiers[start..i]);
                start = i + 1;
            }
            _ => {}
        }
    }
    if parts.len() < 2 {
        return Cow::Borrowed(modifiers);
    }

    let mut ordered = Vec::with_capacity(parts.len());
    let mut run: Vec<&str> = Vec::new();
    for part in parts {
        if part.starts_with('[') {
            run.sort_unstable();
            ordered.append(&mut run);
            ordered.push(part);
        } else {
            run.push(part);
        }
    }
    run.sort_unstable();
    ordered.append(&mut run);

    let mut canonical = String::with_capacity(modifiers.len());
    for part in ordered {
        canonical.push_str(part);
        canonical.push(':');
    }
    Cow::Owned(canonical)
}

/// Which side or corner of a box a utility targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum Edge {
    All,
    X,
    Y,
    Top,
    Right,
    Bottom,
    Left,
    Start,
    End,
    TopLeft,
    TopRight,
    BottomRight,
    BottomLeft,
    StartStart,
    StartEnd,
    EndEnd,
    EndStart,
}

impl Edge {
    const SIDES: &'static [Edge] = &[
        Edge::X,
        Edge::Y,
        Edge::Top,
        Edge::Right,
        Edge::Bottom,
        Edge::Left,
        Edge::Start,
        Edge::End,
    ];

    const CORNERS: &'static [Edge] = &[
        Edge::TopLeft,
        Edge::TopRight,
        Edge::BottomRight,
        Edge::BottomLeft,
        Edge::StartStart,
        Edge::StartEnd,
        Edge::EndEnd,
        Edge::EndStart,
    ];

    fn side(s: &str) -> Option<Edge> {
        Some(match s {
            "x" => Edge::X,
            "y" => Edge::Y,
            "t" => Edge::Top,
            "r" => Edge::Right,
            "b" => Edge::Bottom,
            "l" => Edge::Left,
            "s" => Edge::Start,
            "e" => Edge::End,
            _ => return None,
        })
    }

    fn corner(s: &str) -> Option<Edge> {
        Some(match s {
            "tl" => Edge::TopLeft,
            "tr" => Edge::TopRight,
            "br" => Edge::BottomRight,
            "bl" => Edge::BottomLeft,
            "ss" => Edge::StartStart,
            "se" => Edge::StartEnd,
            "ee" => Edge::EndEnd,
            "es" => Edge::EndStart,
            _ => return None,
        })
    }

    /// Narrower edges overridden when this edge is set.
    fn covers(self) -> Vec<Edge> {
        match self {
            Edge::All => Edge::SIDES.iter().chain(Edge::CORNERS).copied().collect(),
            Edge::X => vec![Edge::Left, Edge::Right, Edge::Start, Edge::End],
            Edge::Y => vec![Edge::Top, Edge::Bottom],
            Edge::Top => vec![Edge::TopLeft, Edge::TopRight],
            Edge::Right => vec![Edge::TopRight, Edge::BottomRight],
            Edge::Bottom => vec![Edge::BottomRight, Edge::BottomLeft],
            Edge::Left => vec![Edge::TopLeft, Edge::BottomLeft],
            Edge::Start => vec![Edge::StartStart, Edge::EndStart],
            Edge::End => vec![Edge::StartEnd, Edge::EndEnd],
            _ => Vec::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
enum Group {
    Display,
    Position,
    Visibility,
    FlexWrap,
    FlexDirection,
    AlignItems,
    JustifyContent,
    TransformOrigin,
    Overflow(Edge),
    Inset(Edge),
    Gap(Edge),
    Padding(Edge),
    Margin(Edge),
    Width,
    Height,
    MinWidth,
    MaxWidth,
    MinHeight,
    MaxHeight,
    ZIndex,
    FontSize,
    FontWeight,
    FontFamily,
    TextAlign,
    TextColor,
    TextOverflow,
    BgColor,
    BorderWidth(Edge),
    BorderColor(Edge),
    BorderStyle,
    Radius(Edge),
    Opacity,
    PointerEvents,
    Cursor,
    ShadowSize,
    ShadowColor,
    OutlineStyle,
    OutlineWidth,
    OutlineColor,
    OutlineOffset,
    RingWidth,
    RingColor,
    RingOffsetWidth,
    RingOffsetColor,
    Transition,
    Duration,
    Ease,
    Delay,
    BoxSizing,
    /// `[property:value]` arbitrary properties, keyed by property.
    Arbitrary(String),
    Custom(String),
}

impl Group {
    fn covers(&self) -> Vec<Group> {
        fn map(edge: Edge, wrap: fn(Edge) -> Group) -> Vec<Group> {
            edge.covers().into_iter().map(wrap).collect()
        }

        match self {
            Group::Overflow(edge) => map(*edge, Group::Overflow),
            Group::Inset(edge) => map(*edge, Group::Inset),
            Group::Gap(edge) => map(*edge, Group::Gap),
            Group::Padding(edge) => map(*edge, Group::Padding),
            Group::Margin(edge) => map(*edge, Group::Margin),
            Group::BorderWidth(edge) => map(*edge, Group::BorderWidth),
            Group::BorderColor(edge) => map(*edge, Group::BorderColor),
            Group::Radius(edge) => map(*edge, Group::Radius),
            _ => Vec::new(),
        }
    }
}

const FONT_SIZES: &[&str] = &[
    "xs", "sm", "base", "lg", "xl", "2xl", "3xl", "4xl", "5xl", "6xl", "7xl", "8xl", "9xl",
];

const FONT_WEIGHTS: &[&str] = &[
    "thin",
    "extralight",
    "light",
    "normal",
    "medium",
    "semibold",
    "bold",
    "extrabold",
    "black",
];

const TEXT_ALIGNS: &[&str] = &["left", "center", "right", "justify", "start", "end"];

const SHADOW_SIZES: &[&str] = &["2xs", "xs", "sm", "md", "lg", "xl", "2xl", "inner", "none"];

/// `bg-*` utilities that set something other than the background color.
const BG_NON_COLOR: &[&str] = &[
    "fixed",
    "local",
    "scroll",
    "auto",
    "cover",
    "contain",
    "none",
    "repeat",
    "no-repeat",
    "repeat-x",
    "repeat-y",
    "repeat-round",
    "repeat-space",
    "center",
    "top",
    "bottom",
    "left",
    "right",
    "left-top",
    "left-bottom",
    "right-top",
    "right-bottom",
    "clip-border",
    "clip-padding",
    "clip-content",
    "clip-text",
];

const SPACING: &[(&str, fn(Edge) -> Group)] = &[("p", Group::Padding), ("m", Group::Margin)];

/// Returns the part of `utility` after `prefix-`.
fn value_after<'a>(utility: &'a str, prefix: &str) -> Option<&'a str> {
    utility
        .strip_prefix(prefix)
        .and_then(|rest| rest.strip_prefix('-'))
}

/// Returns `true` for numeric values, `px`, and arbitrary values starting
/// with a digit (`[3px]`).
fn is_length(value: &str) -> bool {
    if value == "px" || value.parse::<f64>().is_ok() {
        return true;
    }
    value
        .strip_prefix('[')
        .and_then(|inner| inner.strip_suffix(']'))
        .and_then(|inner| inner.chars().next())
        .is_some_and(|c| c.is_ascii_digit() || c == '.')
}

fn is_arbitrary(value: &str) -> bool {
    value.starts_with('[') && value.ends_with(']')
}

/// Splits `value` into an edge and the rest, e.g. `r-none` → (`Right`, `none`).
fn split_edge(value: &str, corners: bool) -> Option<(Edge, &str)> {
    let (head, tail) = value.split_once('-').unwrap_or((value, ""));
    let edge = Edge::side(head).or_else(|| corners.then(|| Edge::corner(head)).flatten())?;
    Some((edge, tail))
}

fn classify(utility: &str) -> Option<Group> {
    if let Some(inner) = utility
        .strip_prefix('[')
        .and_then(|inner| inner.strip_suffix(']'))
    {
        let (property, _) = inner.split_once(':')?;
        return Some(Group::Arbitrary(property.to_string()));
    }

    let exact = match utility {
        "block" | "inline-block" | "inline" | "flex" | "inline-flex" | "grid" | "inline-grid"
        | "contents" | "flow-root" | "table" | "list-item" | "hidden" => Some(Group::Display),
        "static" | "fixed" | "absolute" | "relative" | "sticky" => Some(Group::Position),
        "visible" | "invisible" | "collapse" => Some(Group::Visibility),
        "flex-wrap" | "flex-wrap-reverse" | "flex-nowrap" => Some(Group::FlexWrap),
        "flex-row" | "flex-row-reverse" | "flex-col" | "flex-col-reverse" => {
            Some(Group::FlexDirection)
        }
        "truncate" | "text-ellipsis" | "text-clip" => Some(Group::TextOverflow),
        "box-border" | "box-content" => Some(Group::BoxSizing),
        "border-solid" | "border-dashed" | "border-dotted" | "border-double"
        | "border-hidden" | "border-none" => Some(Group::BorderStyle),
        "border" => Some(Group::BorderWidth(Edge::All)),
        "rounded" => Some(Group::Radius(Edge::All)),
        "shadow" => Some(Group::ShadowSize),
        "ring" => Some(Group::RingWidth),
        "transition" => Some(Group::Transition),
        "outline" | "outline-none" | "outline-solid" | "outline-dashed" | "outline-dotted"
        | "outline-double" | "outline-hidden" => Some(Group::OutlineStyle),
        _ => None,
    };
    if exact.is_some() {
        return exact;
    }

    if let Some(value) = value_after(utility, "text") {
        let size = value.split('/').next().unwrap_or(value);
        return Some(if FONT_SIZES.contains(&size) || is_length(size) {
            Group::FontSize
        } else if TEXT_ALIGNS.contains(&value) {
            Group::TextAlign
        } else {
            Group::TextColor
        });
    }
    if let Some(value) = value_after(utility, "font") {
        return Some(if FONT_WEIGHTS.contains(&value) {
            Group::FontWeight
        } else {
            Group::FontFamily
        });
    }
    if let Some(value) = value_after(utility, "bg") {
        if BG_NON_COLOR.contains(&value)
            || value.starts_with("gradient-")
            || value.starts_with("origin-")
        {
            return None;
        }
        return Some(Group::BgColor);
    }
    if let Some(value) = value_after(utility, "border") {
        if is_length(value) {
            return Some(Group::BorderWidth(Edge::All));
        }
        if let Some((edge, rest)) = split_edge(value, false) {
            return Some(if rest.is_empty() || is_length(rest) {
                Group::BorderWidth(edge)
            } else {
                Group::BorderColor(edge)
            });
        }
        if value == "collapse" || value == "separate" || value.starts_with("spacing") {
            return None;
        }
        return Some(Group::BorderColor(Edge::All));
    }
    if let Some(value) = value_after(utility, "rounded") {
        return Some(match split_edge(value, true) {
            Some((edge, _)) => Group::Radius(edge),
            None => Group::Radius(Edge::All),
        });
    }
    if let Some(value) = value_after(utility, "shadow") {
        return Some(if SHADOW_SIZES.contains(&value) || is_arbitrary(value) {
            Group::ShadowSize
        } else {
            Group::ShadowColor
        });
    }
    if let Some(value) = value_after(utility, "ring-offset") {
        return Some(if is_length(value) {
            Group::RingOffsetWidth
        } else {
            Group::RingOffsetColor
        });
    }
    if let Some(value) = value_after(utility, "ring") {
        if value == "inset" {
            return None;
        }
        return Some(if is_length(value) {
            Group::RingWidth
        } else {
            Group::RingColor
        });
    }
    if value_after(utility, "outline-offset").is_some() {
        return Some(Group::OutlineOffset);
    }
    if let Some(value) = value_after(utility, "outline") {
        return Some(if is_length(value) {
            Group::OutlineWidth
        } else {
            Group::OutlineColor
        });
    }
    if value_after(utility, "justify-items").is_some()
        || value_after(utility, "justify-self").is_some()
    {
        return None;
    }

    let prefixed: &[(&str, Group)] = &[
        ("items", Group::AlignItems),
        ("justify", Group::JustifyContent),
        ("origin", Group::TransformOrigin),
        ("overflow-x", Group::Overflow(Edge::X)),
        ("overflow-y", Group::Overflow(Edge::Y)),
        ("overflow", Group::Overflow(Edge::All)),
        ("inset-x", Group::Inset(Edge::X)),
        ("inset-y", Group::Inset(Edge::Y)),
        ("inset", Group::Inset(Edge::All)),
        ("top", Group::Inset(Edge::Top)),
        ("right", Group::Inset(Edge::Right)),
        ("bottom", Group::Inset(Edge::Bottom)),
        ("left", Group::Inset(Edge::Left)),
        ("start", Group::Inset(Edge::Start)),
        ("end", Group::Inset(Edge::End)),
        ("gap-x", Group::Gap(Edge::X)),
        ("gap-y", Group::Gap(Edge::Y)),
        ("gap", Group::Gap(Edge::All)),
        ("min-w", Group::MinWidth),
        ("max-w", Group::MaxWidth),
        ("min-h", Group::MinHeight),
        ("max-h", Group::MaxHeight),
        ("w", Group::Width),
        ("h", Group::Height),
        ("z", Group::ZIndex),
        ("opacity", Group::Opacity),
        ("pointer-events", Group::PointerEvents),
        ("cursor", Group::Cursor),
        ("transition", Group::Transition),
        ("duration", Group::Duration),
        ("ease", Group::Ease),
        ("delay", Group::Delay),
    ];
    for (prefix, group) in prefixed {
        if value_after(utility, prefix).is_some() {
            return Some(group.clone());
        }
    }

    for (prefix, wrap) in SPACING {
        if let Some(rest) = utility.strip_prefix(prefix) {
            if let Some(value) = rest.strip_prefix('-') {
                if !value.is_empty() {
                    return Some(wrap(Edge::All));
                }
            } else if let Some((side, value)) = rest.split_once('-') {
                if let (Some(edge), false) = (Edge::side(side), value.is_empty()) {
                    return Some(wrap(edge));
                }
            }
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn merge(classes: &[&str]) -> String {
        UtilityMerger::new().merge(classes)
    }

    #[test]
    fn test_parse_modifiers_and_important() {
        let parsed = ParsedClass::parse("data-[active=true]:!bg-primary");
        assert_eq!(parsed.modifiers, "data-[active=true]:");
        assert!(parsed.important);
        assert_eq!(parsed.utility, "bg-primary");
    }

    #[test]
    fn test_parse_ignores_colons_inside_brackets() {
        let parsed = ParsedClass::parse("[&:not(:first-of-type):not(:last-of-type)]:rounded-none");
        assert_eq!(parsed.modifiers, "[&:not(:first-of-type):not(:last-of-type)]:");
        assert_eq!(parsed.utility, "rounded-none");
    }

    #[test]
    fn test_parse_sorts_ordinary_modifiers() {
        let parsed = ParsedClass::parse("hover:focus:bg-red-500");
        assert_eq!(parsed.modifiers, "focus:hover:");
        let parsed = ParsedClass::parse("focus:hover:bg-blue-500");
        assert_eq!(parsed.modifiers, "focus:hover:");
    }

    #[test]
    fn test_parse_keeps_arbitrary_variant_position() {
        let parsed = ParsedClass::parse("md:[&>*]:hover:focus:underline");
        assert_eq!(parsed.modifiers, "md:[&>*]:focus:hover:");
        let parsed = ParsedClass::parse("hover:[&>*]:md:underline");
        assert_eq!(parsed.modifiers, "hover:[&>*]:md:");
    }

    #[test]
    fn test_modifier_order_does_not_scope_conflicts() {
        assert_eq!(
            merge(&["hover:focus:bg-red-500", "focus:hover:bg-blue-500"]),
            "focus:hover:bg-blue-500"
        );
        assert_eq!(
            merge(&["[&>*]:hover:p-2", "hover:[&>*]:p-4"]),
            "[&>*]:hover:p-2 hover:[&>*]:p-4"
        );
    }

    #[test]
    fn test_parse_plain_class() {
        let parsed = ParsedClass::parse("-left-1");
        assert_eq!(parsed.modifiers, "");
        assert!(!parsed.important);
        assert_eq!(parsed.utility, "left-1");
    }

    #[test]
    fn test_classify_text() {
        assert_eq!(classify("text-sm"), Some(Group::FontSize));
        assert_eq!(classify("text-base"), Some(Group::FontSize));
        assert_eq!(classify("text-sm/6"), Some(Group::FontSize));
        assert_eq!(classify("text-center"), Some(Group::TextAlign));
        assert_eq!(classify("text-primary-contrastText"), Some(Group::TextColor));
        assert_eq!(classify("text-ellipsis"), Some(Group::TextOverflow));
    }

    #[test]
    fn test_classify_border() {
        assert_eq!(classify("border"), Some(Group::BorderWidth(Edge::All)));
        assert_eq!(classify("border-1.5"), Some(Group::BorderWidth(Edge::All)));
        assert_eq!(classify("border-[3px]"), Some(Group::BorderWidth(Edge::All)));
        assert_eq!(classify("border-l-0"), Some(Group::BorderWidth(Edge::Left)));
        assert_eq!(classify("border-t"), Some(Group::BorderWidth(Edge::Top)));
        assert_eq!(classify("border-neutral"), Some(Group::BorderColor(Edge::All)));
        assert_eq!(classify("border-x-primary"), Some(Group::BorderColor(Edge::X)));
        assert_eq!(classify("border-dashed"), Some(Group::BorderStyle));
    }

    #[test]
    fn test_classify_radius() {
        assert_eq!(classify("rounded"), Some(Group::Radius(Edge::All)));
        assert_eq!(classify("rounded-lg"), Some(Group::Radius(Edge::All)));
        assert_eq!(classify("rounded-none"), Some(Group::Radius(Edge::All)));
        assert_eq!(classify("rounded-r-none"), Some(Group::Radius(Edge::Right)));
        assert_eq!(classify("rounded-tl-md"), Some(Group::Radius(Edge::TopLeft)));
    }

    #[test]
    fn test_classify_shadow_and_ring() {
        assert_eq!(classify("shadow-lg"), Some(Group::ShadowSize));
        assert_eq!(classify("shadow-primary/40"), Some(Group::ShadowColor));
        assert_eq!(classify("ring-2"), Some(Group::RingWidth));
        assert_eq!(classify("ring-focus"), Some(Group::RingColor));
        assert_eq!(classify("ring-offset-2"), Some(Group::RingOffsetWidth));
        assert_eq!(classify("ring-offset-background"), Some(Group::RingOffsetColor));
        assert_eq!(classify("ring-inset"), None);
    }

    #[test]
    fn test_classify_misc() {
        assert_eq!(classify("max-w-fit"), Some(Group::MaxWidth));
        assert_eq!(classify("w-9"), Some(Group::Width));
        assert_eq!(classify("bg-transparent"), Some(Group::BgColor));
        assert_eq!(classify("bg-cover"), None);
        assert_eq!(classify("transition-background"), Some(Group::Transition));
        assert_eq!(classify("duration-300"), Some(Group::Duration));
        assert_eq!(classify("px-2"), Some(Group::Padding(Edge::X)));
        assert_eq!(classify("m-0"), Some(Group::Margin(Edge::All)));
        assert_eq!(classify("[mask-type:luminance]"), Some(Group::Arbitrary("mask-type".into())));
        assert_eq!(classify("select-none"), None);
    }

    #[test]
    fn test_later_display_wins() {
        assert_eq!(merge(&["absolute", "flex", "left-0", "hidden"]), "absolute left-0 hidden");
    }

    #[test]
    fn test_later_gap_wins() {
        assert_eq!(merge(&["flex", "gap-1", "max-w-fit", "gap-0"]), "flex max-w-fit gap-0");
    }

    #[test]
    fn test_size_and_color_coexist() {
        assert_eq!(
            merge(&["text-primary-contrastText", "text-sm"]),
            "text-primary-contrastText text-sm"
        );
        assert_eq!(merge(&["shadow-lg", "shadow-danger/40"]), "shadow-lg shadow-danger/40");
        assert_eq!(merge(&["border-1.5", "border-neutral"]), "border-1.5 border-neutral");
    }

    #[test]
    fn test_modifier_scopes_conflict() {
        assert_eq!(
            merge(&["bg-neutral-100", "hover:bg-neutral-200", "bg-primary"]),
            "hover:bg-neutral-200 bg-primary"
        );
        assert_eq!(
            merge(&["data-[active=true]:bg-primary", "data-[active=true]:bg-danger"]),
            "data-[active=true]:bg-danger"
        );
    }

    #[test]
    fn test_important_scopes_conflict() {
        assert_eq!(merge(&["!duration-300", "duration-150"]), "!duration-300 duration-150");
        assert_eq!(merge(&["!duration-300", "!duration-150"]), "!duration-150");
    }

    #[test]
    fn test_whole_radius_overrides_earlier_side() {
        assert_eq!(merge(&["rounded-r-none", "rounded-xl"]), "rounded-xl");
        assert_eq!(merge(&["rounded-xl", "rounded-r-none"]), "rounded-xl rounded-r-none");
        assert_eq!(merge(&["rounded-tl-md", "rounded-l-none"]), "rounded-l-none");
    }

    #[test]
    fn test_whole_border_overrides_earlier_side() {
        assert_eq!(merge(&["border-l-0", "border-2"]), "border-2");
        assert_eq!(merge(&["border-1.5", "border-l-0"]), "border-1.5 border-l-0");
    }

    #[test]
    fn test_unknown_classes_keep_last_duplicate() {
        assert_eq!(merge(&["foo", "bar", "foo"]), "bar foo");
    }

    #[test]
    fn test_custom_prefix_group() {
        let merger = UtilityMerger::new().group_prefix("animate");
        assert_eq!(merger.merge(&["animate-spin", "animate-none"]), "animate-none");
        assert_eq!(
            UtilityMerger::new().merge(&["animate-spin", "animate-none"]),
            "animate-spin animate-none"
        );
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(merge(&[]), "");
        assert_eq!(merge(&["", ""]), "");
    }
}
