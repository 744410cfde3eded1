//! Shared control, data-display, disclosure, and layout primitives.

use leptos::ev::MouseEvent;
use leptos::*;

use crate::selection::{SelectionMode, ToggleSet};
use crate::{Icon, IconName, IconSize};

mod controls;
mod data_display;
mod layout;
mod navigation;

pub use controls::{Button, ChipItem, Chips};
pub use data_display::{Card, ContentCard, ListCard};
pub use layout::{Cluster, Stack};
pub use navigation::{Accordion, AccordionItem};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Button variants, mapped from the design tool's `Type` property.
pub enum ButtonVariant {
    /// Primary brand-colored action.
    Primary,
    /// Secondary action.
    Secondary,
}

impl Default for ButtonVariant {
    fn default() -> Self {
        Self::Primary
    }
}

impl ButtonVariant {
    /// Every variant, in declaration order.
    pub const ALL: [Self; 2] = [Self::Primary, Self::Secondary];

    /// Stable token emitted as `data-ui-variant`.
    pub fn token(self) -> &'static str {
        match self {
            Self::Primary => "primary",
            Self::Secondary => "secondary",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Chip styling variants.
pub enum ChipVariant {
    /// Outlined chip with a tinted selected state.
    Default,
    /// Solid chip; selected chips show a check mark.
    Filled,
}

impl Default for ChipVariant {
    fn default() -> Self {
        Self::Default
    }
}

impl ChipVariant {
    /// Every variant, in declaration order.
    pub const ALL: [Self; 2] = [Self::Default, Self::Filled];

    /// Stable token emitted as `data-ui-variant`.
    pub fn token(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Filled => "filled",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Card asset slot, mapped from the design tool's `Asset Type` property.
pub enum CardAssetType {
    /// 32x32 icon container.
    Icon,
    /// 160x160 image container.
    Image,
}

impl Default for CardAssetType {
    fn default() -> Self {
        Self::Icon
    }
}

impl CardAssetType {
    /// Every asset type, in declaration order.
    pub const ALL: [Self; 2] = [Self::Icon, Self::Image];

    /// Stable token emitted as `data-ui-asset`.
    pub fn token(self) -> &'static str {
        match self {
            Self::Icon => "icon",
            Self::Image => "image",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Card surface variants.
pub enum CardVariant {
    /// Transparent background.
    Default,
    /// Filled card background.
    Stroke,
}

impl Default for CardVariant {
    fn default() -> Self {
        Self::Default
    }
}

impl CardVariant {
    /// Every variant, in declaration order.
    pub const ALL: [Self; 2] = [Self::Default, Self::Stroke];

    /// Stable token emitted as `data-ui-variant`.
    pub fn token(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Stroke => "stroke",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Card layout axis.
pub enum CardDirection {
    /// Asset left, body right.
    Horizontal,
    /// Asset on top, body below.
    Vertical,
}

impl Default for CardDirection {
    fn default() -> Self {
        Self::Horizontal
    }
}

impl CardDirection {
    /// Every direction, in declaration order.
    pub const ALL: [Self; 2] = [Self::Horizontal, Self::Vertical];

    /// Stable token emitted as `data-ui-direction`.
    pub fn token(self) -> &'static str {
        match self {
            Self::Horizontal => "horizontal",
            Self::Vertical => "vertical",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Content card elevation styles.
pub enum ContentCardVariant {
    /// Soft shadow.
    Default,
    /// Lifted shadow.
    Elevated,
    /// Hairline border, no shadow.
    Outlined,
}

impl Default for ContentCardVariant {
    fn default() -> Self {
        Self::Default
    }
}

impl ContentCardVariant {
    /// Every variant, in declaration order.
    pub const ALL: [Self; 3] = [Self::Default, Self::Elevated, Self::Outlined];

    /// Stable token emitted as `data-ui-variant`.
    pub fn token(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Elevated => "elevated",
            Self::Outlined => "outlined",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Layout gap tokens.
pub enum LayoutGap {
    /// 8px.
    Sm,
    /// 16px.
    Md,
    /// 32px.
    Lg,
}

impl Default for LayoutGap {
    fn default() -> Self {
        Self::Md
    }
}

impl LayoutGap {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Sm => "sm",
            Self::Md => "md",
            Self::Lg => "lg",
        }
    }
}

pub(crate) fn merge_layout_class(base: &'static str, layout_class: Option<&'static str>) -> String {
    match layout_class {
        Some(layout_class) if !layout_class.is_empty() => format!("{base} {layout_class}"),
        _ => base.to_string(),
    }
}

pub(crate) fn bool_token(value: bool) -> &'static str {
    if value {
        "true"
    } else {
        "false"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn merge_layout_class_appends_non_empty_extras() {
        assert_eq!(merge_layout_class("ui-card", None), "ui-card");
        assert_eq!(merge_layout_class("ui-card", Some("")), "ui-card");
        assert_eq!(
            merge_layout_class("ui-card", Some("app-hero")),
            "ui-card app-hero"
        );
    }

    #[test]
    fn tokens_are_unique_per_family() {
        fn assert_unique(tokens: &[&str]) {
            let mut seen = tokens.to_vec();
            seen.sort_unstable();
            seen.dedup();
            assert_eq!(seen.len(), tokens.len(), "duplicate token in {tokens:?}");
        }

        assert_unique(&ButtonVariant::ALL.map(ButtonVariant::token));
        assert_unique(&ChipVariant::ALL.map(ChipVariant::token));
        assert_unique(&CardAssetType::ALL.map(CardAssetType::token));
        assert_unique(&CardVariant::ALL.map(CardVariant::token));
        assert_unique(&CardDirection::ALL.map(CardDirection::token));
        assert_unique(&ContentCardVariant::ALL.map(ContentCardVariant::token));
    }

    #[test]
    fn defaults_match_component_prop_defaults() {
        assert_eq!(ButtonVariant::default(), ButtonVariant::Primary);
        assert_eq!(ChipVariant::default(), ChipVariant::Default);
        assert_eq!(CardAssetType::default(), CardAssetType::Icon);
        assert_eq!(CardVariant::default(), CardVariant::Default);
        assert_eq!(CardDirection::default(), CardDirection::Horizontal);
        assert_eq!(ContentCardVariant::default(), ContentCardVariant::Default);
        assert_eq!(bool_token(true), "true");
        assert_eq!(bool_token(false), "false");
    }
}
