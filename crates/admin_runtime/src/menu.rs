//! Admin menu tree, expand keys, and favorites resolution.

use std::collections::BTreeSet;

use serde::Deserialize;
use system_ui::IconName;

use crate::reducer::ShellError;

include!(concat!(env!("OUT_DIR"), "/menu_catalog_generated.rs"));

#[derive(Debug, Clone, Deserialize)]
struct MenuCatalogEntry {
    label: String,
    icon: Option<String>,
    href: Option<String>,
    accent: bool,
    chevron: bool,
    bookmarkable: bool,
    location: bool,
    children: Vec<MenuCatalogEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// One sidebar entry. Only top-level entries carry an icon.
pub struct MenuItem {
    pub label: String,
    pub icon: Option<IconName>,
    pub href: Option<String>,
    /// Rendered in the accent colour.
    pub accent: bool,
    /// Shows a trailing chevron instead of a submenu.
    pub chevron: bool,
    /// Has a bookmark toggle on the top level.
    pub bookmarkable: bool,
    /// Shows a location marker.
    pub location: bool,
    pub children: Vec<MenuItem>,
}

impl MenuItem {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            icon: None,
            href: None,
            accent: false,
            chevron: false,
            bookmarkable: false,
            location: false,
            children: Vec::new(),
        }
    }

    pub fn icon(mut self, icon: IconName) -> Self {
        self.icon = Some(icon);
        self
    }

    pub fn href(mut self, href: impl Into<String>) -> Self {
        self.href = Some(href.into());
        self
    }

    pub fn children(mut self, children: Vec<MenuItem>) -> Self {
        self.children = children;
        self
    }

    pub fn has_submenu(&self) -> bool {
        !self.children.is_empty()
    }

    fn from_catalog(entry: MenuCatalogEntry) -> Result<Self, ShellError> {
        let icon = entry
            .icon
            .map(|token| {
                IconName::from_token(&token).ok_or_else(|| ShellError::UnknownIcon(token.clone()))
            })
            .transpose()?;
        let children = entry
            .children
            .into_iter()
            .map(Self::from_catalog)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self {
            label: entry.label,
            icon,
            href: entry.href,
            accent: entry.accent,
            chevron: entry.chevron,
            bookmarkable: entry.bookmarkable,
            location: entry.location,
            children,
        })
    }
}

/// Expand key of a menu entry: the label on the top level, `parent-label` below it.
pub fn menu_key(parent: Option<&str>, label: &str) -> String {
    match parent {
        Some(parent) => format!("{parent}-{label}"),
        None => label.to_string(),
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// A favorited entry as listed in the sidebar favorites section.
pub struct FavoriteEntry {
    pub label: String,
    pub parent_label: Option<String>,
    /// Icon of the owning top-level entry.
    pub icon: Option<IconName>,
    pub href: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MenuTree {
    items: Vec<MenuItem>,
}

impl MenuTree {
    pub fn new(items: Vec<MenuItem>) -> Self {
        Self { items }
    }

    /// The admin menu generated from `menu.toml` at build time.
    pub fn builtin() -> Result<Self, ShellError> {
        Self::from_json(MENU_CATALOG_JSON)
    }

    pub fn from_json(json: &str) -> Result<Self, ShellError> {
        let entries: Vec<MenuCatalogEntry> =
            serde_json::from_str(json).map_err(|err| ShellError::InvalidMenu(err.to_string()))?;
        let items = entries
            .into_iter()
            .map(MenuItem::from_catalog)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { items })
    }

    pub fn items(&self) -> &[MenuItem] {
        &self.items
    }

    /// Whether any entry at any level has this label.
    pub fn contains_label(&self, label: &str) -> bool {
        fn walk(items: &[MenuItem], label: &str) -> bool {
            items
                .iter()
                .any(|item| item.label == label || walk(&item.children, label))
        }
        walk(&self.items, label)
    }

    /// Keys of every entry that owns a submenu.
    pub fn expandable_keys(&self) -> BTreeSet<String> {
        let mut keys = BTreeSet::new();
        for item in &self.items {
            if item.has_submenu() {
                keys.insert(menu_key(None, &item.label));
            }
            for child in &item.children {
                if child.has_submenu() {
                    keys.insert(menu_key(Some(&item.label), &child.label));
                }
            }
        }
        keys
    }

    /// Favorites in menu order.
    ///
    /// Top-level entries with a submenu are never listed themselves; their second- and third-level
    /// entries are, with the top-level icon. A label used in several places is listed once per
    /// place.
    pub fn favorites(&self, favorites: &BTreeSet<String>) -> Vec<FavoriteEntry> {
        let mut entries = Vec::new();
        for item in &self.items {
            if !item.has_submenu() {
                if favorites.contains(&item.label) {
                    entries.push(FavoriteEntry {
                        label: item.label.clone(),
                        parent_label: None,
                        icon: item.icon,
                        href: item.href.clone(),
                    });
                }
                continue;
            }
            for child in &item.children {
                if favorites.contains(&child.label) {
                    entries.push(FavoriteEntry {
                        label: child.label.clone(),
                        parent_label: Some(item.label.clone()),
                        icon: item.icon,
                        href: child.href.clone(),
                    });
                }
                for grandchild in &child.children {
                    if favorites.contains(&grandchild.label) {
                        entries.push(FavoriteEntry {
                            label: grandchild.label.clone(),
                            parent_label: Some(child.label.clone()),
                            icon: item.icon,
                            href: grandchild.href.clone(),
                        });
                    }
                }
            }
        }
        entries
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn favorites(labels: &[&str]) -> BTreeSet<String> {
        labels.iter().map(|label| label.to_string()).collect()
    }

    fn sample() -> MenuTree {
        MenuTree::new(vec![
            MenuItem::new("Fleet").icon(IconName::Car).children(vec![
                MenuItem::new("Bookings").children(vec![MenuItem::new("Calendar")]),
                MenuItem::new("Records"),
            ]),
            MenuItem::new("Dealers")
                .icon(IconName::BuildingOffice)
                .href("/"),
        ])
    }

    #[test]
    fn builtin_catalog_parses_with_known_icons() {
        let menu = MenuTree::builtin().expect("generated menu");
        assert_eq!(menu.items().len(), 15);
        assert!(menu.contains_label("System Settings"));
        let dealers = menu
            .items()
            .iter()
            .find(|item| item.label == "Dealers")
            .expect("dealers entry");
        assert_eq!(dealers.icon, Some(IconName::BuildingOffice));
        assert_eq!(dealers.href.as_deref(), Some("/"));
        assert!(dealers.bookmarkable);
    }

    #[test]
    fn only_dealers_is_bookmarkable_on_the_top_level() {
        let menu = MenuTree::builtin().expect("generated menu");
        let bookmarkable: Vec<&str> = menu
            .items()
            .iter()
            .filter(|item| item.bookmarkable)
            .map(|item| item.label.as_str())
            .collect();
        assert_eq!(bookmarkable, vec!["Dealers"]);
    }

    #[test]
    fn expand_keys_join_parent_and_child_labels() {
        assert_eq!(menu_key(None, "Fleet"), "Fleet");
        assert_eq!(menu_key(Some("Fleet"), "Bookings"), "Fleet-Bookings");
        assert_eq!(
            sample().expandable_keys(),
            favorites(&["Fleet", "Fleet-Bookings"])
        );
    }

    #[test]
    fn nested_favorites_inherit_the_top_level_icon() {
        let entries = sample().favorites(&favorites(&["Calendar", "Records", "Dealers"]));
        assert_eq!(
            entries,
            vec![
                FavoriteEntry {
                    label: "Records".into(),
                    parent_label: Some("Fleet".into()),
                    icon: Some(IconName::Car),
                    href: None,
                },
                FavoriteEntry {
                    label: "Calendar".into(),
                    parent_label: Some("Bookings".into()),
                    icon: Some(IconName::Car),
                    href: None,
                },
                FavoriteEntry {
                    label: "Dealers".into(),
                    parent_label: None,
                    icon: Some(IconName::BuildingOffice),
                    href: Some("/".into()),
                },
            ]
        );
    }

    #[test]
    fn top_level_entries_with_submenus_are_not_listed() {
        assert!(sample().favorites(&favorites(&["Fleet"])).is_empty());
    }

    #[test]
    fn builtin_seeded_favorites_resolve_with_parent_labels() {
        let menu = MenuTree::builtin().expect("generated menu");
        let entries = menu.favorites(&favorites(&["Roles", "Dealers"]));
        let labels: Vec<(&str, Option<&str>)> = entries
            .iter()
            .map(|entry| (entry.label.as_str(), entry.parent_label.as_deref()))
            .collect();
        assert_eq!(
            labels,
            vec![("Dealers", None), ("Roles", Some("Administration"))]
        );
        assert_eq!(entries[1].icon, Some(IconName::Settings));
    }

    #[test]
    fn unknown_icon_tokens_are_rejected() {
        let json = r#"[{"label":"X","icon":"nope","href":null,"accent":false,"chevron":false,
            "bookmarkable":false,"location":false,"children":[]}]"#;
        assert_eq!(
            MenuTree::from_json(json),
            Err(ShellError::UnknownIcon("nope".into()))
        );
    }
}
