//! Navbar global search: keyword expansion, ranked page results, and the suggestion chip.

use serde::{Deserialize, Serialize};
use system_ui::IconName;

use crate::i18n::Language;

/// Queries shorter than this (after trimming) produce no results.
pub const MIN_QUERY_CHARS: usize = 2;
pub const MAX_RESULTS: usize = 5;

pub const RECENT_SEARCHES: [&str; 3] = ["Smart Test Drive", "Dealers", "Admin"];

pub const QUICK_ACTIONS: [(&str, IconName); 4] = [
    ("Register New Dealer", IconName::BuildingOffice2),
    ("Create New Role", IconName::UserPlus),
    ("Upload New Documents", IconName::ArrowUpTray),
    ("Manage Permissions", IconName::LockClosed),
];

/// Synonym table: when the query contains any of the phrases, the keywords are searched too.
type SynonymRule = (&'static [&'static str], &'static [&'static str]);

const JAPANESE_SYNONYMS: &[SynonymRule] = &[
    (&["ディーラー", "ディラー"], &["dealer"]),
    (&["ユーザー", "ユーザ"], &["user"]),
    (&["ロール", "役割"], &["role"]),
    (&["テスト", "試乗"], &["test", "drive"]),
    (&["車両", "自動車"], &["vehicle", "car"]),
];

const SPANISH_SYNONYMS: &[SynonymRule] = &[
    (&["distribuidor", "concesionario"], &["dealer"]),
    (&["usuario", "usuarios"], &["user"]),
    (&["rol", "roles"], &["role"]),
    (&["prueba", "conducción"], &["test", "drive"]),
    (&["vehículo", "coche"], &["vehicle", "car"]),
];

/// Korean phrases are recognised whatever language is selected.
const KOREAN_SYNONYMS: &[SynonymRule] = &[
    (&["딜러", "대리점"], &["dealer"]),
    (&["사용자", "유저"], &["user"]),
    (&["역할", "권한"], &["role", "permission"]),
    (&["테스트", "시승", "예약"], &["test", "drive"]),
    (&["차량", "자동차"], &["vehicle", "car"]),
    (&["지표", "리포트"], &["kpi", "report"]),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchResultKind {
    Page,
    Action,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchResult {
    pub kind: SearchResultKind,
    pub title: &'static str,
    pub path: &'static str,
    pub description: &'static str,
    pub relevance: u8,
    pub icon: IconName,
}

const fn page(
    title: &'static str,
    path: &'static str,
    description: &'static str,
    relevance: u8,
    icon: IconName,
) -> SearchResult {
    SearchResult {
        kind: SearchResultKind::Page,
        title,
        path,
        description,
        relevance,
        icon,
    }
}

const DEALERS: SearchResult = page(
    "Dealers",
    "/",
    "Manage dealer information and settings",
    95,
    IconName::BuildingOffice2,
);
const REGISTER_DEALER: SearchResult = SearchResult {
    kind: SearchResultKind::Action,
    ..page(
        "Register New Dealer",
        "/dealers/new",
        "Create a new dealer account",
        90,
        IconName::Plus,
    )
};
const USERS_AND_ROLES: SearchResult = page(
    "Users & Roles",
    "/admin/users",
    "Manage user accounts and role permissions",
    95,
    IconName::UserGroup,
);
const ROLES: SearchResult = page(
    "Roles",
    "/admin/roles",
    "Configure role-based access control",
    90,
    IconName::LockClosed,
);
const TEST_DRIVE_RESERVATIONS: SearchResult = page(
    "Test Drive Reservations",
    "/test-drives",
    "View and manage test drive appointments",
    95,
    IconName::Car,
);
const TEST_DRIVE_RECORDS: SearchResult = page(
    "Test Drive Records",
    "/test-drives/records",
    "Historical test drive data and analytics",
    85,
    IconName::Chart,
);
const VEHICLE_INVENTORY: SearchResult = page(
    "Vehicle Inventory",
    "/vehicles",
    "Browse and manage vehicle listings",
    95,
    IconName::Car,
);
const KPI_REPORTS: SearchResult = page(
    "KPI Reports",
    "/reports/kpi",
    "View dealer KPI metrics and analytics",
    95,
    IconName::Chart,
);

fn normalize(query: &str) -> String {
    query.trim().to_lowercase()
}

/// The lower-cased query followed by the English keywords its synonyms map to.
pub fn search_keywords(query: &str, language: Language) -> Vec<String> {
    let query = normalize(query);
    let mut keywords = vec![query.clone()];
    let localized: &[SynonymRule] = match language {
        Language::Japanese => JAPANESE_SYNONYMS,
        Language::Spanish => SPANISH_SYNONYMS,
        Language::English => &[],
    };
    for (phrases, expansions) in localized.iter().chain(KOREAN_SYNONYMS) {
        if phrases.iter().any(|phrase| query.contains(phrase)) {
            keywords.extend(expansions.iter().map(|keyword| keyword.to_string()));
        }
    }
    keywords
}

fn has_keyword(keywords: &[String], needle: &str) -> bool {
    keywords.iter().any(|keyword| keyword.contains(needle))
}

/// Ranked results for a query, most relevant first, at most [`MAX_RESULTS`].
pub fn search_results(query: &str, language: Language) -> Vec<SearchResult> {
    let normalized = normalize(query);
    if normalized.chars().count() < MIN_QUERY_CHARS {
        return Vec::new();
    }
    let keywords = search_keywords(query, language);
    let has = |needle: &str| has_keyword(&keywords, needle);

    let mut results = Vec::new();
    if has("dealer") || normalized.starts_with("de") {
        results.extend([DEALERS, REGISTER_DEALER]);
    }
    if has("user") || has("role") || has("permission") {
        results.extend([USERS_AND_ROLES, ROLES]);
    }
    if has("test") || has("drive") {
        results.extend([TEST_DRIVE_RESERVATIONS, TEST_DRIVE_RECORDS]);
    }
    if has("vehicle") || has("car") {
        results.push(VEHICLE_INVENTORY);
    }
    if normalized.contains("kpi") || normalized.starts_with("kp") {
        results.push(KPI_REPORTS);
    }

    results.sort_by(|a, b| b.relevance.cmp(&a.relevance));
    results.truncate(MAX_RESULTS);
    results
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Suggested next step shown above the search results.
pub enum Suggestion {
    RegisterDealer,
    PermissionsAndRoles,
    TestDriveRecords,
    VehicleInventory,
    KpiReports,
}

impl Suggestion {
    pub fn label(self, language: Language) -> &'static str {
        match self {
            Self::RegisterDealer => language.pick(
                "Register new dealer",
                "新しいディーラーを登録",
                "Registrar nuevo distribuidor",
            ),
            Self::PermissionsAndRoles => language.pick(
                "Go to Permissions & Roles",
                "権限とロールへ移動",
                "Ir a Permisos y Roles",
            ),
            Self::TestDriveRecords => language.pick(
                "View Test Drive Records",
                "試乗記録を表示",
                "Ver registros de prueba",
            ),
            Self::VehicleInventory => language.pick(
                "Browse Vehicle Inventory",
                "車両在庫を閲覧",
                "Explorar inventario de vehículos",
            ),
            Self::KpiReports => {
                language.pick("View KPI Reports", "KPIレポートを表示", "Ver informes KPI")
            }
        }
    }

    /// Page the suggestion leads to.
    pub fn target(self) -> SearchResult {
        match self {
            Self::RegisterDealer => REGISTER_DEALER,
            Self::PermissionsAndRoles => USERS_AND_ROLES,
            Self::TestDriveRecords => TEST_DRIVE_RECORDS,
            Self::VehicleInventory => VEHICLE_INVENTORY,
            Self::KpiReports => KPI_REPORTS,
        }
    }
}

const PREFIX_SUGGESTIONS: [(&[&str], Suggestion); 4] = [
    (&["de", "ディ", "딜"], Suggestion::RegisterDealer),
    (&["us", "ユー", "사용"], Suggestion::PermissionsAndRoles),
    (&["te", "テスト", "테스트"], Suggestion::TestDriveRecords),
    (&["ve", "車両", "차량"], Suggestion::VehicleInventory),
];

/// Suggestion for a query, if any.
///
/// Two- and three-character queries are matched on their prefix first; longer queries and
/// unmatched short ones fall back to keyword matching.
pub fn suggestion(query: &str, language: Language) -> Option<Suggestion> {
    let normalized = normalize(query);
    let length = normalized.chars().count();

    if (2..=3).contains(&length) {
        let by_prefix = PREFIX_SUGGESTIONS
            .iter()
            .find(|(prefixes, _)| prefixes.iter().any(|prefix| normalized.starts_with(prefix)))
            .map(|(_, suggestion)| *suggestion);
        if by_prefix.is_some() {
            return by_prefix;
        }
        if normalized.starts_with("kp") || normalized.contains("kpi") {
            return Some(Suggestion::KpiReports);
        }
    }

    let keywords = search_keywords(query, language);
    let has = |needle: &str| has_keyword(&keywords, needle);
    if has("user") || has("role") || has("permission") {
        Some(Suggestion::PermissionsAndRoles)
    } else if has("dealer") || has("register") {
        Some(Suggestion::RegisterDealer)
    } else if has("test") || has("drive") {
        Some(Suggestion::TestDriveRecords)
    } else if has("vehicle") || has("car") {
        Some(Suggestion::VehicleInventory)
    } else if has("kpi") || has("report") {
        Some(Suggestion::KpiReports)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn titles(results: &[SearchResult]) -> Vec<&'static str> {
        results.iter().map(|result| result.title).collect()
    }

    #[test]
    fn short_and_blank_queries_have_no_results() {
        assert!(search_results("", Language::English).is_empty());
        assert!(search_results(" d ", Language::English).is_empty());
    }

    #[test]
    fn dealer_prefix_lists_dealer_pages_by_relevance() {
        assert_eq!(
            titles(&search_results("de", Language::English)),
            vec!["Dealers", "Register New Dealer"]
        );
    }

    #[test]
    fn results_are_sorted_by_relevance_and_capped() {
        // "user test car" hits roles, test drive, and vehicle groups at once.
        let results = search_results("user test car", Language::English);
        assert_eq!(results.len(), MAX_RESULTS);
        assert!(results
            .windows(2)
            .all(|pair| pair[0].relevance >= pair[1].relevance));
        assert_eq!(
            titles(&results),
            vec![
                "Users & Roles",
                "Test Drive Reservations",
                "Vehicle Inventory",
                "Roles",
                "Test Drive Records",
            ]
        );
    }

    #[test]
    fn localized_synonyms_expand_into_english_keywords() {
        assert_eq!(
            search_keywords("Concesionario", Language::Spanish),
            vec!["concesionario".to_string(), "dealer".to_string()]
        );
        assert_eq!(
            titles(&search_results("試乗", Language::Japanese)),
            vec!["Test Drive Reservations", "Test Drive Records"]
        );
    }

    #[test]
    fn localized_synonyms_only_apply_to_their_language() {
        assert!(search_results("concesionario", Language::English).is_empty());
    }

    #[test]
    fn korean_synonyms_apply_in_every_language() {
        assert_eq!(
            titles(&search_results("차량", Language::English)),
            vec!["Vehicle Inventory"]
        );
    }

    #[test]
    fn kpi_results_need_the_literal_term() {
        assert_eq!(
            titles(&search_results("KPI", Language::English)),
            vec!["KPI Reports"]
        );
        assert!(search_results("report", Language::English).is_empty());
    }

    #[test]
    fn short_queries_suggest_by_prefix() {
        assert_eq!(
            suggestion("us", Language::English),
            Some(Suggestion::PermissionsAndRoles)
        );
        assert_eq!(
            suggestion("kp", Language::English),
            Some(Suggestion::KpiReports)
        );
        assert_eq!(suggestion("zz", Language::English), None);
    }

    #[test]
    fn long_queries_suggest_by_keyword_with_roles_first() {
        assert_eq!(
            suggestion("dealer role", Language::English),
            Some(Suggestion::PermissionsAndRoles)
        );
        assert_eq!(
            suggestion("monthly report", Language::English),
            Some(Suggestion::KpiReports)
        );
    }

    #[test]
    fn suggestion_labels_are_localized() {
        assert_eq!(
            Suggestion::RegisterDealer.label(Language::Spanish),
            "Registrar nuevo distribuidor"
        );
        assert_eq!(
            Suggestion::KpiReports.label(Language::Japanese),
            "KPIレポートを表示"
        );
    }
}
