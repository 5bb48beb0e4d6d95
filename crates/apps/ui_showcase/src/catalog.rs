//! Headless story catalogue: groups, story metadata, and the icon registry.

use system_ui::IconName;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
/// Sidebar sections of the showcase.
pub enum StoryGroup {
    /// Single controls and data display primitives.
    Base,
    /// Containers, navigation, tables, and overlays.
    Layout,
    /// Design principles and reference tables.
    Guide,
}

impl StoryGroup {
    /// Every group, in sidebar order.
    pub const ALL: [StoryGroup; 3] = [Self::Base, Self::Layout, Self::Guide];

    /// Section heading.
    pub fn label(self) -> &'static str {
        match self {
            Self::Base => "Base",
            Self::Layout => "Layout",
            Self::Guide => "Guide",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
/// One isolated component demo.
pub enum StoryId {
    /// Button variants, sizes, and icons.
    Button,
    /// Icon-only buttons.
    IconButton,
    /// Text input with label, description, and error.
    TextField,
    /// Tri-state checkbox.
    Checkbox,
    /// Toggle switch.
    Switch,
    /// Radio group.
    Radio,
    /// Single-value select.
    Select,
    /// Multi-value dropdown with removable tags.
    MultiSelect,
    /// Badge palette and removable badges.
    Badge,
    /// Inline alerts.
    Alert,
    /// Empty result placeholder.
    EmptyState,
    /// Stack, cluster, and grid containers.
    Containers,
    /// Panel and card surfaces.
    Surfaces,
    /// Breadcrumbs, tabs, and toolbars.
    Navigation,
    /// Page navigation.
    Pagination,
    /// Table markup primitives.
    Table,
    /// Dropdown menu surface.
    Menu,
    /// Content and confirmation dialogs.
    Modal,
    /// Design principles.
    Principles,
    /// Icon registry.
    Icons,
    /// Badge and semantic colour reference.
    Colors,
}

impl StoryId {
    /// Every story, in catalogue order.
    pub const ALL: [StoryId; 21] = [
        Self::Button,
        Self::IconButton,
        Self::TextField,
        Self::Checkbox,
        Self::Switch,
        Self::Radio,
        Self::Select,
        Self::MultiSelect,
        Self::Badge,
        Self::Alert,
        Self::EmptyState,
        Self::Containers,
        Self::Surfaces,
        Self::Navigation,
        Self::Pagination,
        Self::Table,
        Self::Menu,
        Self::Modal,
        Self::Principles,
        Self::Icons,
        Self::Colors,
    ];

    /// Section this story is listed under.
    pub fn group(self) -> StoryGroup {
        match self {
            Self::Button
            | Self::IconButton
            | Self::TextField
            | Self::Checkbox
            | Self::Switch
            | Self::Radio
            | Self::Select
            | Self::MultiSelect
            | Self::Badge
            | Self::Alert
            | Self::EmptyState => StoryGroup::Base,
            Self::Containers
            | Self::Surfaces
            | Self::Navigation
            | Self::Pagination
            | Self::Table
            | Self::Menu
            | Self::Modal => StoryGroup::Layout,
            Self::Principles | Self::Icons | Self::Colors => StoryGroup::Guide,
        }
    }

    /// Navigation and page title.
    pub fn title(self) -> &'static str {
        match self {
            Self::Button => "Button",
            Self::IconButton => "Icon Button",
            Self::TextField => "Text Field",
            Self::Checkbox => "Checkbox",
            Self::Switch => "Switch",
            Self::Radio => "Radio Group",
            Self::Select => "Select",
            Self::MultiSelect => "Multi Select",
            Self::Badge => "Badge",
            Self::Alert => "Alert",
            Self::EmptyState => "Empty State",
            Self::Containers => "Containers",
            Self::Surfaces => "Panels and Cards",
            Self::Navigation => "Navigation",
            Self::Pagination => "Pagination",
            Self::Table => "Table",
            Self::Menu => "Menu",
            Self::Modal => "Modal",
            Self::Principles => "Design Principles",
            Self::Icons => "Icons",
            Self::Colors => "Colors",
        }
    }

    /// One-line summary under the title.
    pub fn description(self) -> &'static str {
        match self {
            Self::Button => "Primary, secondary, and destructive actions in four sizes.",
            Self::IconButton => "Compact actions that carry only an icon and an accessible label.",
            Self::TextField => "Single-line input with label, helper text, and validation error.",
            Self::Checkbox => "Checked, unchecked, and indeterminate states.",
            Self::Switch => "Binary setting that applies immediately.",
            Self::Radio => "One choice out of a short list.",
            Self::Select => "One choice out of a longer list, closed by an outside click.",
            Self::MultiSelect => "Several choices shown as removable tags.",
            Self::Badge => "Status labels in the shared colour palette.",
            Self::Alert => "Inline feedback for info, success, warning, and error.",
            Self::EmptyState => "Placeholder for lists with nothing to show.",
            Self::Containers => "Vertical stacks, wrapping clusters, and fixed-column grids.",
            Self::Surfaces => "Raised panels and cards that group related content.",
            Self::Navigation => "Breadcrumb trails, tab lists, and toolbars.",
            Self::Pagination => "Numbered pages with previous and next buttons.",
            Self::Table => "Header, body, and cell primitives used by the data grid.",
            Self::Menu => "Dropdown surface with selectable items and separators.",
            Self::Modal => "Scrollable content dialog and yes/no confirmation.",
            Self::Principles => "Rules every admin surface follows.",
            Self::Icons => "Every icon in the closed catalogue with its token.",
            Self::Colors => "Badge colours and the tokens they map to.",
        }
    }

    /// URL-safe identifier used in the location hash.
    pub fn slug(self) -> &'static str {
        match self {
            Self::Button => "button",
            Self::IconButton => "icon-button",
            Self::TextField => "text-field",
            Self::Checkbox => "checkbox",
            Self::Switch => "switch",
            Self::Radio => "radio",
            Self::Select => "select",
            Self::MultiSelect => "multi-select",
            Self::Badge => "badge",
            Self::Alert => "alert",
            Self::EmptyState => "empty-state",
            Self::Containers => "containers",
            Self::Surfaces => "surfaces",
            Self::Navigation => "navigation",
            Self::Pagination => "pagination",
            Self::Table => "table",
            Self::Menu => "menu",
            Self::Modal => "modal",
            Self::Principles => "principles",
            Self::Icons => "icons",
            Self::Colors => "colors",
        }
    }

    /// Resolves a slug produced by [`StoryId::slug`]. A leading `#` is ignored.
    pub fn from_slug(slug: &str) -> Option<Self> {
        let slug = slug.trim_start_matches('#');
        Self::ALL.into_iter().find(|story| story.slug() == slug)
    }
}

/// Stories listed under `group`, in catalogue order.
pub fn stories_in(group: StoryGroup) -> impl Iterator<Item = StoryId> {
    StoryId::ALL
        .into_iter()
        .filter(move |story| story.group() == group)
}

/// `(title, body)` pairs rendered by the principles guide.
pub const DESIGN_PRINCIPLES: [(&str, &str); 5] = [
    (
        "One primitive per control",
        "Pages compose shared primitives. No page emits its own button or input markup.",
    ),
    (
        "Tokens over literals",
        "Colours, spacing, and radii come from the exported token set, never from inline values.",
    ),
    (
        "Closed icon catalogue",
        "Icons are named by enum variant so a missing glyph is a compile error.",
    ),
    (
        "State lives in reducers",
        "Components dispatch actions; reducers own the transitions and report invalid ones.",
    ),
    (
        "Visible focus",
        "Every interactive element keeps a focus ring and an accessible name.",
    ),
];

/// Icons whose token contains `query`, ignoring case. An empty query returns every icon.
pub fn filter_icons(query: &str) -> Vec<IconName> {
    let needle = query.trim().to_lowercase();
    IconName::ALL
        .into_iter()
        .filter(|icon| needle.is_empty() || icon.token().contains(&needle))
        .collect()
}

/// Finds the item whose token equals `value`. Backs the variant pickers.
pub fn find_by_token<T: Copy>(items: &[T], token: fn(T) -> &'static str, value: &str) -> Option<T> {
    items.iter().copied().find(|item| token(*item) == value)
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn every_group_lists_stories_in_catalogue_order() {
        let listed: Vec<StoryId> = StoryGroup::ALL.into_iter().flat_map(stories_in).collect();
        assert_eq!(listed, StoryId::ALL.to_vec());
        assert_eq!(
            stories_in(StoryGroup::Guide).collect::<Vec<_>>(),
            vec![StoryId::Principles, StoryId::Icons, StoryId::Colors]
        );
    }

    #[test]
    fn slugs_are_unique_and_resolve() {
        let slugs: BTreeSet<&str> = StoryId::ALL.iter().map(|story| story.slug()).collect();
        assert_eq!(slugs.len(), StoryId::ALL.len());
        assert_eq!(StoryId::from_slug("#multi-select"), Some(StoryId::MultiSelect));
        assert_eq!(StoryId::from_slug("icons"), Some(StoryId::Icons));
        assert_eq!(StoryId::from_slug("carousel"), None);
    }

    #[test]
    fn pickers_resolve_tokens_back_to_variants() {
        use system_ui::{AlertKind, ButtonVariant};

        assert_eq!(
            find_by_token(&ButtonVariant::ALL, ButtonVariant::token, "destructive"),
            Some(ButtonVariant::Destructive)
        );
        assert_eq!(
            find_by_token(&AlertKind::ALL, AlertKind::token, "warning"),
            Some(AlertKind::Warning)
        );
        assert_eq!(find_by_token(&AlertKind::ALL, AlertKind::token, "fatal"), None);
    }

    #[test]
    fn icon_filter_matches_tokens_case_insensitively() {
        assert_eq!(filter_icons("").len(), IconName::ALL.len());
        let chevrons = filter_icons("  CHEVRON-DOUBLE ");
        assert_eq!(
            chevrons,
            vec![IconName::ChevronDoubleLeft, IconName::ChevronDoubleRight]
        );
        assert!(filter_icons("no-such-glyph").is_empty());
    }
}
