//! Shared control, data-display, layout, navigation, overlay, and table primitives.

use leptos::ev::{KeyboardEvent, MouseEvent};
use leptos::*;

use crate::{use_outside_click, Icon, IconName, IconSize};

mod controls;
mod data_display;
mod layout;
mod navigation;
mod overlays;
mod table;

pub use controls::{
    Button, Checkbox, IconButton, MultiSelectDropdown, RadioGroup, RadioOption, SelectField,
    SelectOption, Switch, TextField,
};
pub use data_display::{Alert, Badge, Card, EmptyState, Heading, Panel, Text};
pub use layout::{Cluster, Grid, Stack};
pub use navigation::{Breadcrumbs, Pagination, Tab, TabList, ToolBar};
pub use overlays::{ConfirmModal, ContentModal, MenuItem, MenuSeparator, MenuSurface};
pub use table::{DataTable, TableBody, TableCell, TableHead, TableHeaderCell, TableRow};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Shared button variants.
pub enum ButtonVariant {
    /// Solid primary action.
    #[default]
    Default,
    /// Bordered action on a transparent background.
    Outline,
    /// Muted filled action.
    Secondary,
    /// Borderless action that only highlights on hover.
    Ghost,
    /// Destructive action.
    Destructive,
    /// Inline text link.
    Link,
}

impl ButtonVariant {
    /// Every variant, in showcase order.
    pub const ALL: [ButtonVariant; 6] = [
        Self::Default,
        Self::Outline,
        Self::Secondary,
        Self::Ghost,
        Self::Destructive,
        Self::Link,
    ];

    /// Stable token used for CSS hooks.
    pub fn token(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Outline => "outline",
            Self::Secondary => "secondary",
            Self::Ghost => "ghost",
            Self::Destructive => "destructive",
            Self::Link => "link",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Shared button sizing tokens.
pub enum ButtonSize {
    /// Dense button.
    Sm,
    /// Default button.
    #[default]
    Md,
    /// Large button.
    Lg,
    /// Square icon-only button.
    Icon,
}

impl ButtonSize {
    /// Every size, in showcase order.
    pub const ALL: [ButtonSize; 4] = [Self::Sm, Self::Md, Self::Lg, Self::Icon];

    /// Stable token used for CSS hooks.
    pub fn token(self) -> &'static str {
        match self {
            Self::Sm => "sm",
            Self::Md => "md",
            Self::Lg => "lg",
            Self::Icon => "icon",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash, PartialOrd, Ord)]
/// Badge palette.
pub enum BadgeColor {
    /// Neutral gray.
    #[default]
    Zinc,
    /// Red.
    Red,
    /// Orange.
    Orange,
    /// Amber.
    Amber,
    /// Yellow.
    Yellow,
    /// Lime.
    Lime,
    /// Green.
    Green,
    /// Emerald.
    Emerald,
    /// Teal.
    Teal,
    /// Cyan.
    Cyan,
    /// Sky.
    Sky,
    /// Blue.
    Blue,
    /// Indigo.
    Indigo,
    /// Violet.
    Violet,
    /// Purple.
    Purple,
    /// Fuchsia.
    Fuchsia,
    /// Pink.
    Pink,
    /// Rose.
    Rose,
    /// Inverse black.
    Black,
}

impl BadgeColor {
    /// Full palette, in showcase order.
    pub const ALL: [BadgeColor; 19] = [
        Self::Zinc,
        Self::Red,
        Self::Orange,
        Self::Amber,
        Self::Yellow,
        Self::Lime,
        Self::Green,
        Self::Emerald,
        Self::Teal,
        Self::Cyan,
        Self::Sky,
        Self::Blue,
        Self::Indigo,
        Self::Violet,
        Self::Purple,
        Self::Fuchsia,
        Self::Pink,
        Self::Rose,
        Self::Black,
    ];

    /// Stable token used for CSS hooks.
    pub fn token(self) -> &'static str {
        match self {
            Self::Zinc => "zinc",
            Self::Red => "red",
            Self::Orange => "orange",
            Self::Amber => "amber",
            Self::Yellow => "yellow",
            Self::Lime => "lime",
            Self::Green => "green",
            Self::Emerald => "emerald",
            Self::Teal => "teal",
            Self::Cyan => "cyan",
            Self::Sky => "sky",
            Self::Blue => "blue",
            Self::Indigo => "indigo",
            Self::Violet => "violet",
            Self::Purple => "purple",
            Self::Fuchsia => "fuchsia",
            Self::Pink => "pink",
            Self::Rose => "rose",
            Self::Black => "black",
        }
    }

    /// Display label (`"Zinc"`, `"Black"`, ...).
    pub fn label(self) -> &'static str {
        match self {
            Self::Zinc => "Zinc",
            Self::Red => "Red",
            Self::Orange => "Orange",
            Self::Amber => "Amber",
            Self::Yellow => "Yellow",
            Self::Lime => "Lime",
            Self::Green => "Green",
            Self::Emerald => "Emerald",
            Self::Teal => "Teal",
            Self::Cyan => "Cyan",
            Self::Sky => "Sky",
            Self::Blue => "Blue",
            Self::Indigo => "Indigo",
            Self::Violet => "Violet",
            Self::Purple => "Purple",
            Self::Fuchsia => "Fuchsia",
            Self::Pink => "Pink",
            Self::Rose => "Rose",
            Self::Black => "Black",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Alert severities.
pub enum AlertKind {
    /// Neutral information.
    #[default]
    Info,
    /// Completed operation.
    Success,
    /// Needs attention.
    Warning,
    /// Failed operation.
    Error,
}

impl AlertKind {
    /// Every severity, in showcase order.
    pub const ALL: [AlertKind; 4] = [Self::Info, Self::Success, Self::Warning, Self::Error];

    /// Stable token used for CSS hooks.
    pub fn token(self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Success => "success",
            Self::Warning => "warning",
            Self::Error => "error",
        }
    }

    pub(crate) fn icon(self) -> IconName {
        match self {
            Self::Info => IconName::Info,
            Self::Success => IconName::Success,
            Self::Warning => IconName::Warning,
            Self::Error => IconName::Error,
        }
    }

    pub(crate) fn role(self) -> &'static str {
        match self {
            Self::Warning | Self::Error => "alert",
            Self::Info | Self::Success => "status",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Confirm-dialog tone.
pub enum ConfirmTone {
    /// Regular confirmation.
    #[default]
    Default,
    /// Confirmation of an irreversible action.
    Destructive,
}

impl ConfirmTone {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Destructive => "destructive",
        }
    }

    pub(crate) fn button_variant(self) -> ButtonVariant {
        match self {
            Self::Default => ButtonVariant::Default,
            Self::Destructive => ButtonVariant::Destructive,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Shared text roles.
pub enum TextRole {
    /// Body text.
    #[default]
    Body,
    /// Label text.
    Label,
    /// Caption text.
    Caption,
    /// Section title text.
    Title,
    /// Page-level headline.
    Display,
}

impl TextRole {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Body => "body",
            Self::Label => "label",
            Self::Caption => "caption",
            Self::Title => "title",
            Self::Display => "display",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Shared text tone.
pub enum TextTone {
    /// Primary text.
    #[default]
    Primary,
    /// Secondary text.
    Secondary,
    /// Success tone.
    Success,
    /// Warning tone.
    Warning,
    /// Danger tone.
    Danger,
}

impl TextTone {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Primary => "primary",
            Self::Secondary => "secondary",
            Self::Success => "success",
            Self::Warning => "warning",
            Self::Danger => "danger",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Shared layout gap tokens.
pub enum LayoutGap {
    /// No gap.
    None,
    /// Small gap.
    Sm,
    /// Default gap.
    #[default]
    Md,
    /// Large gap.
    Lg,
}

impl LayoutGap {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Sm => "sm",
            Self::Md => "md",
            Self::Lg => "lg",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Shared layout padding tokens.
pub enum LayoutPadding {
    /// No padding.
    None,
    /// Compact padding.
    Sm,
    /// Default padding.
    #[default]
    Md,
    /// Spacious padding.
    Lg,
}

impl LayoutPadding {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Sm => "sm",
            Self::Md => "md",
            Self::Lg => "lg",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Shared layout alignment tokens.
pub enum LayoutAlign {
    /// Stretch/fill alignment.
    #[default]
    Stretch,
    /// Start alignment.
    Start,
    /// Center alignment.
    Center,
    /// End alignment.
    End,
}

impl LayoutAlign {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Stretch => "stretch",
            Self::Start => "start",
            Self::Center => "center",
            Self::End => "end",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Shared layout justification tokens.
pub enum LayoutJustify {
    /// Start justification.
    #[default]
    Start,
    /// Center justification.
    Center,
    /// Space between items.
    Between,
    /// End justification.
    End,
}

impl LayoutJustify {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Start => "start",
            Self::Center => "center",
            Self::Between => "between",
            Self::End => "end",
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
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn layout_class_is_appended_only_when_present() {
        assert_eq!(merge_layout_class("ui-button", None), "ui-button");
        assert_eq!(merge_layout_class("ui-button", Some("")), "ui-button");
        assert_eq!(
            merge_layout_class("ui-button", Some("grid-toolbar-action")),
            "ui-button grid-toolbar-action"
        );
    }

    #[test]
    fn badge_palette_covers_nineteen_distinct_tokens() {
        let mut tokens: Vec<&str> = BadgeColor::ALL.iter().map(|color| color.token()).collect();
        tokens.sort_unstable();
        tokens.dedup();
        assert_eq!(tokens.len(), 19);
        assert_eq!(BadgeColor::Black.label(), "Black");
    }

    #[test]
    fn only_blocking_alerts_are_announced_assertively() {
        let roles: Vec<&str> = AlertKind::ALL.iter().map(|kind| kind.role()).collect();
        assert_eq!(roles, vec!["status", "status", "alert", "alert"]);
    }

    #[test]
    fn destructive_confirm_uses_destructive_button() {
        assert_eq!(
            ConfirmTone::Destructive.button_variant(),
            ButtonVariant::Destructive
        );
        assert_eq!(ConfirmTone::Default.button_variant(), ButtonVariant::Default);
    }
}
