//! Navbar languages and their string tables.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
/// Interface language picked in the navbar.
pub enum Language {
    Japanese,
    Spanish,
    #[default]
    English,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Keys of the translated shell strings.
pub enum UiText {
    SearchPlaceholder,
    RecentSearches,
    QuickActions,
    SearchResults,
    NoSearchResults,
    Notifications,
    Settings,
    FavoritesMenu,
    AdminMenu,
    NoFavorites,
    ToggleTheme,
    SignOut,
}

impl Language {
    /// Menu order of the language selector.
    pub const ALL: [Self; 3] = [Self::Japanese, Self::Spanish, Self::English];

    pub fn code(self) -> &'static str {
        match self {
            Self::Japanese => "jp",
            Self::Spanish => "es",
            Self::English => "en",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Japanese => "Japanese",
            Self::Spanish => "Spanish",
            Self::English => "English",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|language| language.code() == code)
    }

    /// Picks the variant of a phrase for this language.
    pub fn pick(self, en: &'static str, jp: &'static str, es: &'static str) -> &'static str {
        match self {
            Self::English => en,
            Self::Japanese => jp,
            Self::Spanish => es,
        }
    }

    pub fn text(self, key: UiText) -> &'static str {
        match key {
            UiText::SearchPlaceholder => self.pick(
                "Please enter your search term",
                "検索語を入力してください",
                "Introduzca su término de búsqueda",
            ),
            UiText::RecentSearches => self.pick("Recent searches", "最近の検索", "Búsquedas recientes"),
            UiText::QuickActions => self.pick("Quick actions", "クイックアクション", "Acciones rápidas"),
            UiText::SearchResults => self.pick("Results", "検索結果", "Resultados"),
            UiText::NoSearchResults => self.pick(
                "No matching pages",
                "一致するページはありません",
                "No hay páginas coincidentes",
            ),
            UiText::Notifications => self.pick("Notification", "通知", "Notificación"),
            UiText::Settings => self.pick("Setting", "設定", "Configuración"),
            UiText::FavoritesMenu => self.pick("Favorites Menu", "お気に入り", "Menú de favoritos"),
            UiText::AdminMenu => self.pick("Admin Menu", "管理メニュー", "Menú de administración"),
            UiText::NoFavorites => self.pick(
                "No favorites yet",
                "お気に入りはまだありません",
                "Aún no hay favoritos",
            ),
            UiText::ToggleTheme => self.pick("Toggle theme", "テーマを切り替え", "Cambiar tema"),
            UiText::SignOut => self.pick("Sign out", "サインアウト", "Cerrar sesión"),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn codes_round_trip_and_english_is_default() {
        for language in Language::ALL {
            assert_eq!(Language::from_code(language.code()), Some(language));
        }
        assert_eq!(Language::from_code("ko"), None);
        assert_eq!(Language::default(), Language::English);
    }

    #[test]
    fn text_lookup_follows_language() {
        assert_eq!(
            Language::English.text(UiText::NoFavorites),
            "No favorites yet"
        );
        assert_eq!(Language::Spanish.text(UiText::SignOut), "Cerrar sesión");
        assert_eq!(Language::Japanese.text(UiText::Notifications), "通知");
    }
}
