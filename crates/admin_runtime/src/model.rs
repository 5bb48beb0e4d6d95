use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::i18n::Language;

pub const SIDEBAR_OPEN_WIDTH_PX: u32 = 292;
pub const SIDEBAR_CLOSED_WIDTH_PX: u32 = 72;
pub const NAVBAR_HEIGHT_PX: u32 = 60;
/// Favorites present on first mount.
pub const DEFAULT_FAVORITES: [&str; 2] = ["Roles", "Dealers"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn token(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
/// Navbar dropdowns. At most one is open at a time.
pub enum NavbarDropdown {
    Search,
    Language,
    Notifications,
    User,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// Shell state shared by the navbar, sidebar, and page headers.
pub struct ShellState {
    pub sidebar_open: bool,
    /// Favorited menu labels.
    pub favorites: BTreeSet<String>,
    /// Expanded menu keys, see [`crate::menu::menu_key`].
    pub expanded_menus: BTreeSet<String>,
    pub theme: Theme,
    pub language: Language,
    pub open_dropdown: Option<NavbarDropdown>,
    pub search_query: String,
    /// Path of the page currently shown, used for the active sidebar item.
    pub active_path: String,
}

impl Default for ShellState {
    fn default() -> Self {
        Self {
            sidebar_open: true,
            favorites: DEFAULT_FAVORITES.iter().map(|label| label.to_string()).collect(),
            expanded_menus: BTreeSet::new(),
            theme: Theme::Light,
            language: Language::English,
            open_dropdown: None,
            search_query: String::new(),
            active_path: "/".to_string(),
        }
    }
}

impl ShellState {
    pub fn is_favorite(&self, label: &str) -> bool {
        self.favorites.contains(label)
    }

    pub fn is_expanded(&self, key: &str) -> bool {
        self.expanded_menus.contains(key)
    }

    pub fn is_dropdown_open(&self, dropdown: NavbarDropdown) -> bool {
        self.open_dropdown == Some(dropdown)
    }

    /// Left offset of the content area, matching the sidebar width.
    pub fn content_offset_px(&self) -> u32 {
        if self.sidebar_open {
            SIDEBAR_OPEN_WIDTH_PX
        } else {
            SIDEBAR_CLOSED_WIDTH_PX
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Entry in the notifications dropdown.
pub struct Notification {
    pub title: &'static str,
    pub message: &'static str,
    pub age: &'static str,
    pub highlighted: bool,
}

pub const NOTIFICATIONS: [Notification; 4] = [
    Notification {
        title: "New Reservation Request",
        message: "Alice Johnson requested a test drive for IONIQ 5.",
        age: "10 min ago",
        highlighted: false,
    },
    Notification {
        title: "Inventory Threshold Alert",
        message: "Genesis GV80 (Vik Black) stock is running low (Only 1 left).",
        age: "10 min ago",
        highlighted: true,
    },
    Notification {
        title: "Service Completed",
        message: "Maintenance #4022 for Tucson Hybrid has been completed.",
        age: "10 min ago",
        highlighted: false,
    },
    Notification {
        title: "System Update Scheduled",
        message: "Patch v4.0.2 will be installed tonight at 02:00 AM.",
        age: "10 min ago",
        highlighted: false,
    },
];

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn default_state_is_open_with_seeded_favorites() {
        let state = ShellState::default();
        assert!(state.sidebar_open);
        assert!(state.is_favorite("Roles"));
        assert!(state.is_favorite("Dealers"));
        assert_eq!(state.favorites.len(), 2);
        assert_eq!(state.content_offset_px(), 292);
    }

    #[test]
    fn collapsed_sidebar_narrows_the_content_offset() {
        let state = ShellState {
            sidebar_open: false,
            ..ShellState::default()
        };
        assert_eq!(state.content_offset_px(), 72);
    }

    #[test]
    fn theme_toggles_between_light_and_dark() {
        assert_eq!(Theme::Light.toggled(), Theme::Dark);
        assert_eq!(Theme::Dark.toggled().token(), "light");
    }
}
