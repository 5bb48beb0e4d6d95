//! Shell actions, side-effect intents, and the transition function.

use thiserror::Error;

use crate::i18n::Language;
use crate::menu::MenuTree;
use crate::model::{NavbarDropdown, ShellState, Theme};

#[derive(Debug, Clone, PartialEq, Eq)]
/// Actions accepted by [`reduce_shell`].
pub enum ShellAction {
    SetSidebarOpen(bool),
    ToggleSidebar,
    /// Add or remove a menu label from the favorites.
    ToggleFavorite { label: String },
    /// Expand or collapse a submenu by its [`crate::menu::menu_key`].
    ToggleMenu { key: String },
    SetTheme(Theme),
    ToggleTheme,
    SetLanguage(Language),
    ToggleDropdown(NavbarDropdown),
    OpenDropdown(NavbarDropdown),
    /// Close one dropdown; ignored when another one is open.
    CloseDropdown(NavbarDropdown),
    SetSearchQuery(String),
    /// Go to a route. Closes any open dropdown and clears the search box.
    Navigate { href: String },
    /// Record the route shown after an external navigation.
    SetActivePath(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Side effects requested by [`reduce_shell`] and executed by the provider.
pub enum ShellEffect {
    /// Sync the document theme class.
    ApplyTheme(Theme),
    /// Push a route onto the router.
    Navigate(String),
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ShellError {
    #[error("menu has no entry labelled `{0}`")]
    UnknownMenuItem(String),
    #[error("menu key `{0}` does not own a submenu")]
    UnknownMenuKey(String),
    #[error("navigation target must be an absolute path, got `{0}`")]
    InvalidHref(String),
    #[error("unknown icon token `{0}` in menu catalog")]
    UnknownIcon(String),
    #[error("menu catalog is not valid: {0}")]
    InvalidMenu(String),
}

/// Applies a [`ShellAction`] to `state`.
///
/// # Errors
///
/// Returns a [`ShellError`] when the action names a menu entry, submenu, or route the shell does
/// not know. The state is left unchanged in that case.
pub fn reduce_shell(
    state: &mut ShellState,
    menu: &MenuTree,
    action: ShellAction,
) -> Result<Vec<ShellEffect>, ShellError> {
    let mut effects = Vec::new();
    match action {
        ShellAction::SetSidebarOpen(open) => state.sidebar_open = open,
        ShellAction::ToggleSidebar => state.sidebar_open = !state.sidebar_open,
        ShellAction::ToggleFavorite { label } => {
            if !menu.contains_label(&label) {
                return Err(ShellError::UnknownMenuItem(label));
            }
            if !state.favorites.remove(&label) {
                state.favorites.insert(label);
            }
        }
        ShellAction::ToggleMenu { key } => {
            if !menu.expandable_keys().contains(&key) {
                return Err(ShellError::UnknownMenuKey(key));
            }
            if !state.expanded_menus.remove(&key) {
                state.expanded_menus.insert(key);
            }
        }
        ShellAction::SetTheme(theme) => {
            if state.theme != theme {
                state.theme = theme;
                effects.push(ShellEffect::ApplyTheme(theme));
            }
        }
        ShellAction::ToggleTheme => {
            state.theme = state.theme.toggled();
            effects.push(ShellEffect::ApplyTheme(state.theme));
        }
        ShellAction::SetLanguage(language) => {
            state.language = language;
            if state.open_dropdown == Some(NavbarDropdown::Language) {
                state.open_dropdown = None;
            }
        }
        ShellAction::ToggleDropdown(dropdown) => {
            state.open_dropdown = if state.is_dropdown_open(dropdown) {
                None
            } else {
                Some(dropdown)
            };
        }
        ShellAction::OpenDropdown(dropdown) => state.open_dropdown = Some(dropdown),
        ShellAction::CloseDropdown(dropdown) => {
            if state.is_dropdown_open(dropdown) {
                state.open_dropdown = None;
            }
        }
        ShellAction::SetSearchQuery(query) => state.search_query = query,
        ShellAction::Navigate { href } => {
            if !href.starts_with('/') {
                return Err(ShellError::InvalidHref(href));
            }
            state.open_dropdown = None;
            state.search_query.clear();
            if state.active_path != href {
                state.active_path = href.clone();
                effects.push(ShellEffect::Navigate(href));
            }
        }
        ShellAction::SetActivePath(path) => state.active_path = path,
    }
    Ok(effects)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::menu::MenuItem;
    use system_ui::IconName;

    fn menu() -> MenuTree {
        MenuTree::new(vec![
            MenuItem::new("Administration")
                .icon(IconName::Settings)
                .children(vec![MenuItem::new("Roles"), MenuItem::new("Users")]),
            MenuItem::new("Dealers")
                .icon(IconName::BuildingOffice)
                .href("/"),
        ])
    }

    fn reduce(state: &mut ShellState, action: ShellAction) -> Vec<ShellEffect> {
        reduce_shell(state, &menu(), action).expect("reduce")
    }

    #[test]
    fn toggle_favorite_adds_and_removes() {
        let mut state = ShellState::default();
        reduce(
            &mut state,
            ShellAction::ToggleFavorite {
                label: "Users".into(),
            },
        );
        assert!(state.is_favorite("Users"));
        reduce(
            &mut state,
            ShellAction::ToggleFavorite {
                label: "Dealers".into(),
            },
        );
        assert!(!state.is_favorite("Dealers"));
        assert!(state.is_favorite("Roles"));
    }

    #[test]
    fn unknown_favorite_is_rejected_without_changes() {
        let mut state = ShellState::default();
        let before = state.clone();
        let err = reduce_shell(
            &mut state,
            &menu(),
            ShellAction::ToggleFavorite {
                label: "Nope".into(),
            },
        )
        .expect_err("unknown label");
        assert_eq!(err, ShellError::UnknownMenuItem("Nope".into()));
        assert_eq!(state, before);
    }

    #[test]
    fn menus_expand_only_when_they_own_a_submenu() {
        let mut state = ShellState::default();
        reduce(
            &mut state,
            ShellAction::ToggleMenu {
                key: "Administration".into(),
            },
        );
        assert!(state.is_expanded("Administration"));
        let err = reduce_shell(
            &mut state,
            &menu(),
            ShellAction::ToggleMenu {
                key: "Dealers".into(),
            },
        )
        .expect_err("leaf entry");
        assert_eq!(err, ShellError::UnknownMenuKey("Dealers".into()));
    }

    #[test]
    fn sidebar_toggle_flips_the_open_flag() {
        let mut state = ShellState::default();
        reduce(&mut state, ShellAction::ToggleSidebar);
        assert!(!state.sidebar_open);
        reduce(&mut state, ShellAction::SetSidebarOpen(true));
        assert!(state.sidebar_open);
    }

    #[test]
    fn theme_changes_request_a_document_update() {
        let mut state = ShellState::default();
        assert_eq!(
            reduce(&mut state, ShellAction::ToggleTheme),
            vec![ShellEffect::ApplyTheme(Theme::Dark)]
        );
        assert!(reduce(&mut state, ShellAction::SetTheme(Theme::Dark)).is_empty());
    }

    #[test]
    fn only_one_dropdown_is_open_at_a_time() {
        let mut state = ShellState::default();
        reduce(&mut state, ShellAction::ToggleDropdown(NavbarDropdown::User));
        reduce(
            &mut state,
            ShellAction::ToggleDropdown(NavbarDropdown::Notifications),
        );
        assert_eq!(state.open_dropdown, Some(NavbarDropdown::Notifications));

        reduce(&mut state, ShellAction::CloseDropdown(NavbarDropdown::User));
        assert_eq!(state.open_dropdown, Some(NavbarDropdown::Notifications));
        reduce(
            &mut state,
            ShellAction::ToggleDropdown(NavbarDropdown::Notifications),
        );
        assert_eq!(state.open_dropdown, None);
    }

    #[test]
    fn picking_a_language_closes_the_language_menu() {
        let mut state = ShellState::default();
        reduce(&mut state, ShellAction::OpenDropdown(NavbarDropdown::Language));
        reduce(&mut state, ShellAction::SetLanguage(Language::Spanish));
        assert_eq!(state.language, Language::Spanish);
        assert_eq!(state.open_dropdown, None);
    }

    #[test]
    fn navigate_closes_search_and_emits_route_change() {
        let mut state = ShellState::default();
        reduce(&mut state, ShellAction::OpenDropdown(NavbarDropdown::Search));
        reduce(&mut state, ShellAction::SetSearchQuery("doc".into()));

        let effects = reduce(
            &mut state,
            ShellAction::Navigate {
                href: "/documents".into(),
            },
        );
        assert_eq!(effects, vec![ShellEffect::Navigate("/documents".into())]);
        assert_eq!(state.active_path, "/documents");
        assert_eq!(state.open_dropdown, None);
        assert!(state.search_query.is_empty());

        let again = reduce(
            &mut state,
            ShellAction::Navigate {
                href: "/documents".into(),
            },
        );
        assert!(again.is_empty());
    }

    #[test]
    fn relative_hrefs_are_rejected() {
        let mut state = ShellState::default();
        let err = reduce_shell(
            &mut state,
            &menu(),
            ShellAction::Navigate {
                href: "documents".into(),
            },
        )
        .expect_err("relative");
        assert_eq!(err, ShellError::InvalidHref("documents".into()));
    }
}
