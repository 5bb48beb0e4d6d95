//! Closed icon catalogue shared by every admin surface.
//!
//! Components never look icons up by free-form string. They name an [`IconName`] variant and the
//! [`Icon`] component renders the matching outline SVG (24px grid, 1.5 stroke). Tokens exist only
//! for CSS hooks and for resolving icon keys stored in data files.

use leptos::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
/// Semantic icon identifiers.
pub enum IconName {
    /// Vehicle and test-drive menu icon.
    Car,
    /// Agent and staff menu icon.
    Agent,
    /// Dealer organization icon.
    BuildingOffice,
    /// Dealer group icon.
    BuildingOffice2,
    /// Users and roles icon.
    UserGroup,
    /// Layered resources icon.
    Square3Stack3d,
    /// Content blocks icon.
    RectangleGroup,
    /// Downloads icon.
    CloudArrowDown,
    /// Service and maintenance icon.
    Wrench,
    /// Display and monitoring icon.
    Monitor,
    /// Reports and KPI icon.
    Chart,
    /// Developer tools icon.
    Code,
    /// Forms and surveys icon.
    Form,
    /// Settings icon.
    Settings,
    /// Location icon.
    MapPin,
    /// Downward chevron.
    ChevronDown,
    /// Upward chevron.
    ChevronUp,
    /// Left chevron.
    ChevronLeft,
    /// Right chevron.
    ChevronRight,
    /// Collapse-sidebar chevron.
    ChevronDoubleLeft,
    /// Expand-sidebar chevron.
    ChevronDoubleRight,
    /// Bookmark outline.
    Bookmark,
    /// Filled bookmark for favorited items.
    BookmarkSolid,
    /// Search magnifier.
    Search,
    /// Notifications bell.
    Bell,
    /// Light theme.
    Sun,
    /// Dark theme.
    Moon,
    /// Dismiss cross.
    Close,
    /// Checkmark.
    Check,
    /// Horizontal bar used by indeterminate checkboxes.
    Minus,
    /// Add action.
    Plus,
    /// Breadcrumb root.
    Home,
    /// Informational alert.
    Info,
    /// Success alert.
    Success,
    /// Warning alert.
    Warning,
    /// Error alert.
    Error,
    /// Recent searches.
    Clock,
    /// Register quick action.
    UserPlus,
    /// Upload quick action.
    ArrowUpTray,
    /// Permissions quick action.
    LockClosed,
    /// Language selector.
    Globe,
    /// Documents.
    Document,
    /// Delete action.
    Trash,
    /// Suggested search action.
    Sparkles,
    /// Unsorted column indicator.
    ArrowsUpDown,
    /// Ascending sort indicator.
    ArrowUp,
    /// Descending sort indicator.
    ArrowDown,
    /// Filter trigger.
    Funnel,
    /// Spreadsheet export.
    TableCells,
    /// Column visibility editor.
    ViewColumns,
    /// User menu avatar.
    UserCircle,
    /// Sign-out action.
    Logout,
    /// Menu toggle.
    Bars3,
}

impl IconName {
    /// Every icon, in catalogue order.
    pub const ALL: [IconName; 53] = [
        Self::Car,
        Self::Agent,
        Self::BuildingOffice,
        Self::BuildingOffice2,
        Self::UserGroup,
        Self::Square3Stack3d,
        Self::RectangleGroup,
        Self::CloudArrowDown,
        Self::Wrench,
        Self::Monitor,
        Self::Chart,
        Self::Code,
        Self::Form,
        Self::Settings,
        Self::MapPin,
        Self::ChevronDown,
        Self::ChevronUp,
        Self::ChevronLeft,
        Self::ChevronRight,
        Self::ChevronDoubleLeft,
        Self::ChevronDoubleRight,
        Self::Bookmark,
        Self::BookmarkSolid,
        Self::Search,
        Self::Bell,
        Self::Sun,
        Self::Moon,
        Self::Close,
        Self::Check,
        Self::Minus,
        Self::Plus,
        Self::Home,
        Self::Info,
        Self::Success,
        Self::Warning,
        Self::Error,
        Self::Clock,
        Self::UserPlus,
        Self::ArrowUpTray,
        Self::LockClosed,
        Self::Globe,
        Self::Document,
        Self::Trash,
        Self::Sparkles,
        Self::ArrowsUpDown,
        Self::ArrowUp,
        Self::ArrowDown,
        Self::Funnel,
        Self::TableCells,
        Self::ViewColumns,
        Self::UserCircle,
        Self::Logout,
        Self::Bars3,
    ];

    /// Stable token used for CSS hooks and data files.
    pub const fn token(self) -> &'static str {
        match self {
            Self::Car => "car",
            Self::Agent => "agent",
            Self::BuildingOffice => "building-office",
            Self::BuildingOffice2 => "building-office-2",
            Self::UserGroup => "user-group",
            Self::Square3Stack3d => "square-3-stack-3d",
            Self::RectangleGroup => "rectangle-group",
            Self::CloudArrowDown => "cloud-arrow-down",
            Self::Wrench => "wrench",
            Self::Monitor => "monitor",
            Self::Chart => "chart",
            Self::Code => "code",
            Self::Form => "form",
            Self::Settings => "settings",
            Self::MapPin => "map-pin",
            Self::ChevronDown => "chevron-down",
            Self::ChevronUp => "chevron-up",
            Self::ChevronLeft => "chevron-left",
            Self::ChevronRight => "chevron-right",
            Self::ChevronDoubleLeft => "chevron-double-left",
            Self::ChevronDoubleRight => "chevron-double-right",
            Self::Bookmark => "bookmark",
            Self::BookmarkSolid => "bookmark-solid",
            Self::Search => "search",
            Self::Bell => "bell",
            Self::Sun => "sun",
            Self::Moon => "moon",
            Self::Close => "close",
            Self::Check => "check",
            Self::Minus => "minus",
            Self::Plus => "plus",
            Self::Home => "home",
            Self::Info => "info",
            Self::Success => "success",
            Self::Warning => "warning",
            Self::Error => "error",
            Self::Clock => "clock",
            Self::UserPlus => "user-plus",
            Self::ArrowUpTray => "arrow-up-tray",
            Self::LockClosed => "lock-closed",
            Self::Globe => "globe",
            Self::Document => "document",
            Self::Trash => "trash",
            Self::Sparkles => "sparkles",
            Self::ArrowsUpDown => "arrows-up-down",
            Self::ArrowUp => "arrow-up",
            Self::ArrowDown => "arrow-down",
            Self::Funnel => "funnel",
            Self::TableCells => "table-cells",
            Self::ViewColumns => "view-columns",
            Self::UserCircle => "user-circle",
            Self::Logout => "logout",
            Self::Bars3 => "bars-3",
        }
    }

    /// Resolves a token produced by [`IconName::token`].
    pub fn from_token(token: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|icon| icon.token() == token)
    }

    /// Whether the glyph is drawn filled instead of outlined.
    pub const fn is_solid(self) -> bool {
        matches!(self, Self::BookmarkSolid)
    }

    fn svg_body(self) -> &'static str {
        match self {
            Self::Car => {
                r#"<path d="M8.25 18.75a1.5 1.5 0 0 1-3 0m3 0a1.5 1.5 0 0 0-3 0m3 0h6m-9 0H3.375a1.125 1.125 0 0 1-1.125-1.125V14.25m17.25 4.5a1.5 1.5 0 0 1-3 0m3 0a1.5 1.5 0 0 0-3 0m3 0h1.125c.621 0 1.129-.504 1.09-1.124a17.902 17.902 0 0 0-3.213-9.193 2.056 2.056 0 0 0-1.58-.86H14.25M16.5 18.75h-2.25m0-11.177v-.958c0-.568-.422-1.048-.987-1.106a48.554 48.554 0 0 0-10.026 0 1.106 1.106 0 0 0-.987 1.106v7.635m12-6.677v6.677m0 4.5v-4.5m0 0h-12"/>"#
            }
            Self::Agent => {
                r#"<path d="M20.25 14.15v4.25c0 1.094-.787 2.036-1.872 2.18-2.087.277-4.216.42-6.378.42s-4.291-.143-6.378-.42c-1.085-.144-1.872-1.086-1.872-2.18v-4.25m16.5 0a2.18 2.18 0 0 0 .75-1.661V8.706c0-1.081-.768-2.015-1.837-2.175a48.114 48.114 0 0 0-3.413-.387m4.5 8.006c-.194.165-.42.295-.673.38A23.978 23.978 0 0 1 12 15.75c-2.648 0-5.195-.429-7.577-1.22a2.016 2.016 0 0 1-.673-.38m0 0A2.18 2.18 0 0 1 3 12.489V8.706c0-1.081.768-2.015 1.837-2.175a48.111 48.111 0 0 1 3.413-.387m7.5 0V5.25A2.25 2.25 0 0 0 13.5 3h-3a2.25 2.25 0 0 0-2.25 2.25v.894m7.5 0a48.667 48.667 0 0 0-7.5 0M12 12.75h.008v.008H12v-.008Z"/>"#
            }
            Self::BuildingOffice => {
                r#"<path d="M3.75 21h16.5M4.5 3h15M5.25 3v18m13.5-18v18M9 6.75h1.5m-1.5 3h1.5m-1.5 3h1.5m3-6H15m-1.5 3H15m-1.5 3H15M9 21v-3.375c0-.621.504-1.125 1.125-1.125h3.75c.621 0 1.125.504 1.125 1.125V21"/>"#
            }
            Self::BuildingOffice2 => {
                r#"<path d="M2.25 21h19.5m-18-18v18m10.5-18v18m6-13.5V21M6.75 6.75h.75m-.75 3h.75m-.75 3h.75m3-6h.75m-.75 3h.75m-.75 3h.75M6.75 21v-3.375c0-.621.504-1.125 1.125-1.125h2.25c.621 0 1.125.504 1.125 1.125V21M3 3h12m-.75 4.5H21m-3.75 3.75h.008v.008h-.008v-.008Zm0 3h.008v.008h-.008v-.008Zm0 3h.008v.008h-.008v-.008Z"/>"#
            }
            Self::UserGroup => {
                r#"<path d="M18 18.72a9.094 9.094 0 0 0 3.741-.479 3 3 0 0 0-4.682-2.72m.94 3.198.001.031c0 .225-.012.447-.037.666A11.944 11.944 0 0 1 12 21c-2.17 0-4.207-.576-5.963-1.584A6.062 6.062 0 0 1 6 18.719m12 0a5.971 5.971 0 0 0-.941-3.197m0 0A5.995 5.995 0 0 0 12 12.75a5.995 5.995 0 0 0-5.058 2.772m0 0a3 3 0 0 0-4.681 2.72 8.986 8.986 0 0 0 3.74.477m.94-3.197a5.971 5.971 0 0 0-.94 3.197M15 6.75a3 3 0 1 1-6 0 3 3 0 0 1 6 0Zm6 3a2.25 2.25 0 1 1-4.5 0 2.25 2.25 0 0 1 4.5 0Zm-13.5 0a2.25 2.25 0 1 1-4.5 0 2.25 2.25 0 0 1 4.5 0Z"/>"#
            }
            Self::Square3Stack3d => {
                r#"<path d="M6.429 9.75 2.25 12l4.179 2.25m0-4.5 5.571 3 5.571-3m-11.142 0L2.25 7.5 12 2.25l9.75 5.25-4.179 2.25m0 0L21.75 12l-4.179 2.25m0 0 4.179 2.25L12 21.75 2.25 16.5l4.179-2.25m11.142 0-5.571 3-5.571-3"/>"#
            }
            Self::RectangleGroup => {
                r#"<path d="M2.25 7.125C2.25 6.504 2.754 6 3.375 6h6c.621 0 1.125.504 1.125 1.125v3.75c0 .621-.504 1.125-1.125 1.125h-6a1.125 1.125 0 0 1-1.125-1.125v-3.75ZM14.25 8.625c0-.621.504-1.125 1.125-1.125h5.25c.621 0 1.125.504 1.125 1.125v8.25c0 .621-.504 1.125-1.125 1.125h-5.25a1.125 1.125 0 0 1-1.125-1.125v-8.25ZM3.75 16.125c0-.621.504-1.125 1.125-1.125h5.25c.621 0 1.125.504 1.125 1.125v2.25c0 .621-.504 1.125-1.125 1.125h-5.25a1.125 1.125 0 0 1-1.125-1.125v-2.25Z"/>"#
            }
            Self::CloudArrowDown => {
                r#"<path d="M12 9.75v6.75m0 0-3-3m3 3 3-3m-8.25 6a4.5 4.5 0 0 1-1.41-8.775 5.25 5.25 0 0 1 10.233-2.33 3 3 0 0 1 3.758 3.848A3.752 3.752 0 0 1 18 19.5H6.75Z"/>"#
            }
            Self::Wrench => {
                r#"<path d="M21.75 6.75a4.5 4.5 0 0 1-4.884 4.484c-1.076-.091-2.264.071-2.95.904l-7.152 8.684a2.548 2.548 0 1 1-3.586-3.586l8.684-7.152c.833-.686.995-1.874.904-2.95a4.5 4.5 0 0 1 6.336-4.486l-3.276 3.276a3.004 3.004 0 0 0 2.25 2.25l3.276-3.276c.256.565.398 1.192.398 1.852Z"/>"#
            }
            Self::Monitor => {
                r#"<path d="M9 17.25v1.007a3 3 0 0 1-.879 2.122L7.5 21h9l-.621-.621A3 3 0 0 1 15 18.257V17.25m6-12V15a2.25 2.25 0 0 1-2.25 2.25H5.25A2.25 2.25 0 0 1 3 15V5.25m18 0A2.25 2.25 0 0 0 18.75 3H5.25A2.25 2.25 0 0 0 3 5.25m18 0V12a2.25 2.25 0 0 1-2.25 2.25H5.25A2.25 2.25 0 0 1 3 12V5.25"/>"#
            }
            Self::Chart => {
                r#"<path d="M3 13.125C3 12.504 3.504 12 4.125 12h2.25c.621 0 1.125.504 1.125 1.125v6.75C7.5 20.496 6.996 21 6.375 21h-2.25A1.125 1.125 0 0 1 3 19.875v-6.75ZM9.75 8.625c0-.621.504-1.125 1.125-1.125h2.25c.621 0 1.125.504 1.125 1.125v11.25c0 .621-.504 1.125-1.125 1.125h-2.25a1.125 1.125 0 0 1-1.125-1.125V8.625ZM16.5 4.125c0-.621.504-1.125 1.125-1.125h2.25C20.496 3 21 3.504 21 4.125v15.75c0 .621-.504 1.125-1.125 1.125h-2.25a1.125 1.125 0 0 1-1.125-1.125V4.125Z"/>"#
            }
            Self::Code => {
                r#"<path d="M17.25 6.75 22.5 12l-5.25 5.25m-10.5 0L1.5 12l5.25-5.25m7.5-3-4.5 16.5"/>"#
            }
            Self::Form => {
                r#"<path d="M9 12h3.75M9 15h3.75M9 18h3.75m3 .75H18a2.25 2.25 0 0 0 2.25-2.25V6.108c0-1.135-.845-2.098-1.976-2.192a48.424 48.424 0 0 0-1.123-.08m-5.801 0c-.065.21-.1.433-.1.664 0 .414.336.75.75.75h4.5a.75.75 0 0 0 .75-.75 2.25 2.25 0 0 0-.1-.664m-5.8 0A2.251 2.251 0 0 1 13.5 2.25H15c1.012 0 1.867.668 2.15 1.586m-5.8 0c-.376.023-.75.05-1.124.08C9.095 4.01 8.25 4.973 8.25 6.108V8.25m0 0H4.875c-.621 0-1.125.504-1.125 1.125v11.25c0 .621.504 1.125 1.125 1.125h9.75c.621 0 1.125-.504 1.125-1.125V9.375c0-.621-.504-1.125-1.125-1.125H8.25Z"/>"#
            }
            Self::Settings => {
                r#"<path d="M9.594 3.94c.09-.542.56-.94 1.11-.94h2.593c.55 0 1.02.398 1.11.94l.213 1.281c.063.374.313.686.645.87.074.04.147.083.22.127.325.196.72.257 1.075.124l1.217-.456a1.125 1.125 0 0 1 1.37.49l1.296 2.247a1.125 1.125 0 0 1-.26 1.431l-1.003.827c-.293.241-.438.613-.43.992a7.723 7.723 0 0 1 0 .255c-.008.378.137.75.43.991l1.004.827c.424.35.534.955.26 1.43l-1.298 2.247a1.125 1.125 0 0 1-1.369.491l-1.217-.456c-.355-.133-.75-.072-1.076.124a6.47 6.47 0 0 1-.22.128c-.331.183-.581.495-.644.869l-.213 1.281c-.09.543-.56.94-1.11.94h-2.594c-.55 0-1.019-.398-1.11-.94l-.213-1.281c-.062-.374-.312-.686-.644-.87a6.52 6.52 0 0 1-.22-.127c-.325-.196-.72-.257-1.076-.124l-1.217.456a1.125 1.125 0 0 1-1.369-.49l-1.297-2.247a1.125 1.125 0 0 1 .26-1.431l1.004-.827c.292-.24.437-.613.43-.991a6.932 6.932 0 0 1 0-.255c.007-.38-.138-.751-.43-.992l-1.004-.827a1.125 1.125 0 0 1-.26-1.43l1.297-2.247a1.125 1.125 0 0 1 1.37-.491l1.216.456c.356.133.751.072 1.076-.124.072-.044.146-.086.22-.128.332-.183.582-.495.644-.869l.214-1.28ZM15 12a3 3 0 1 1-6 0 3 3 0 0 1 6 0Z"/>"#
            }
            Self::MapPin => {
                r#"<path d="M15 10.5a3 3 0 1 1-6 0 3 3 0 0 1 6 0ZM19.5 10.5c0 7.142-7.5 11.25-7.5 11.25S4.5 17.642 4.5 10.5a7.5 7.5 0 1 1 15 0Z"/>"#
            }
            Self::ChevronDown => r#"<path d="m19.5 8.25-7.5 7.5-7.5-7.5"/>"#,
            Self::ChevronUp => r#"<path d="m4.5 15.75 7.5-7.5 7.5 7.5"/>"#,
            Self::ChevronLeft => r#"<path d="M15.75 19.5 8.25 12l7.5-7.5"/>"#,
            Self::ChevronRight => r#"<path d="m8.25 4.5 7.5 7.5-7.5 7.5"/>"#,
            Self::ChevronDoubleLeft => {
                r#"<path d="m18.75 4.5-7.5 7.5 7.5 7.5m-6-15L5.25 12l7.5 7.5"/>"#
            }
            Self::ChevronDoubleRight => {
                r#"<path d="m5.25 4.5 7.5 7.5-7.5 7.5m6-15 7.5 7.5-7.5 7.5"/>"#
            }
            Self::Bookmark => {
                r#"<path d="M17.593 3.322c1.1.128 1.907 1.077 1.907 2.185V21L12 17.25 4.5 21V5.507c0-1.108.806-2.057 1.907-2.185a48.507 48.507 0 0 1 11.186 0Z"/>"#
            }
            Self::BookmarkSolid => {
                r#"<path d="M17.593 3.322c1.1.128 1.907 1.077 1.907 2.185V21L12 17.25 4.5 21V5.507c0-1.108.806-2.057 1.907-2.185a48.507 48.507 0 0 1 11.186 0Z"/>"#
            }
            Self::Search => {
                r#"<path d="m21 21-5.197-5.197m0 0A7.5 7.5 0 1 0 5.196 5.196a7.5 7.5 0 0 0 10.607 10.607Z"/>"#
            }
            Self::Bell => {
                r#"<path d="M14.857 17.082a23.848 23.848 0 0 0 5.454-1.31A8.967 8.967 0 0 1 18 9.75V9A6 6 0 0 0 6 9v.75a8.967 8.967 0 0 1-2.312 6.022c1.733.64 3.56 1.085 5.455 1.31m5.714 0a24.255 24.255 0 0 1-5.714 0m5.714 0a3 3 0 1 1-5.714 0"/>"#
            }
            Self::Sun => {
                r#"<path d="M12 3v2.25m6.364.386-1.591 1.591M21 12h-2.25m-.386 6.364-1.591-1.591M12 18.75V21m-4.773-4.227-1.591 1.591M5.25 12H3m4.227-4.773L5.636 5.636M15.75 12a3.75 3.75 0 1 1-7.5 0 3.75 3.75 0 0 1 7.5 0Z"/>"#
            }
            Self::Moon => {
                r#"<path d="M21.752 15.002A9.72 9.72 0 0 1 18 15.75c-5.385 0-9.75-4.365-9.75-9.75 0-1.33.266-2.597.748-3.752A9.753 9.753 0 0 0 3 11.25C3 16.635 7.365 21 12.75 21a9.753 9.753 0 0 0 9.002-5.998Z"/>"#
            }
            Self::Close => r#"<path d="M6 18 18 6M6 6l12 12"/>"#,
            Self::Check => r#"<path d="m4.5 12.75 6 6 9-13.5"/>"#,
            Self::Minus => r#"<path d="M5 12h14"/>"#,
            Self::Plus => r#"<path d="M12 4.5v15m7.5-7.5h-15"/>"#,
            Self::Home => {
                r#"<path d="m2.25 12 8.954-8.955c.44-.439 1.152-.439 1.591 0L21.75 12M4.5 9.75v10.125c0 .621.504 1.125 1.125 1.125H9.75v-4.875c0-.621.504-1.125 1.125-1.125h2.25c.621 0 1.125.504 1.125 1.125V21h4.125c.621 0 1.125-.504 1.125-1.125V9.75M8.25 21h8.25"/>"#
            }
            Self::Info => {
                r#"<path d="m11.25 11.25.041-.02a.75.75 0 0 1 1.063.852l-.708 2.836a.75.75 0 0 0 1.063.853l.041-.021M21 12a9 9 0 1 1-18 0 9 9 0 0 1 18 0Zm-9-3.75h.008v.008H12V8.25Z"/>"#
            }
            Self::Success => {
                r#"<path d="M9 12.75 11.25 15 15 9.75M21 12a9 9 0 1 1-18 0 9 9 0 0 1 18 0Z"/>"#
            }
            Self::Warning => {
                r#"<path d="M12 9v3.75m-9.303 3.376c-.866 1.5.217 3.374 1.948 3.374h14.71c1.73 0 2.813-1.874 1.948-3.374L13.949 3.378c-.866-1.5-3.032-1.5-3.898 0L2.697 16.126ZM12 15.75h.007v.008H12v-.008Z"/>"#
            }
            Self::Error => {
                r#"<path d="m9.75 9.75 4.5 4.5m0-4.5-4.5 4.5M21 12a9 9 0 1 1-18 0 9 9 0 0 1 18 0Z"/>"#
            }
            Self::Clock => r#"<path d="M12 6v6h4.5m4.5 0a9 9 0 1 1-18 0 9 9 0 0 1 18 0Z"/>"#,
            Self::UserPlus => {
                r#"<path d="M18 7.5v3m0 0v3m0-3h3m-3 0h-3m-2.25-4.125a3.375 3.375 0 1 1-6.75 0 3.375 3.375 0 0 1 6.75 0ZM3 19.235v-.11a6.375 6.375 0 0 1 12.75 0v.109A12.318 12.318 0 0 1 9.374 21c-2.331 0-4.512-.645-6.374-1.766Z"/>"#
            }
            Self::ArrowUpTray => {
                r#"<path d="M3 16.5v2.25A2.25 2.25 0 0 0 5.25 21h13.5A2.25 2.25 0 0 0 21 18.75V16.5m-13.5-9L12 3m0 0 4.5 4.5M12 3v13.5"/>"#
            }
            Self::LockClosed => {
                r#"<path d="M16.5 10.5V6.75a4.5 4.5 0 1 0-9 0v3.75m-.75 11.25h10.5a2.25 2.25 0 0 0 2.25-2.25v-6.75a2.25 2.25 0 0 0-2.25-2.25H6.75a2.25 2.25 0 0 0-2.25 2.25v6.75a2.25 2.25 0 0 0 2.25 2.25Z"/>"#
            }
            Self::Globe => {
                r#"<path d="M12 21a9.004 9.004 0 0 0 8.716-6.747M12 21a9.004 9.004 0 0 1-8.716-6.747M12 21c2.485 0 4.5-4.03 4.5-9S14.485 3 12 3m0 18c-2.485 0-4.5-4.03-4.5-9S9.515 3 12 3m0 0a8.997 8.997 0 0 1 7.843 4.582M12 3a8.997 8.997 0 0 0-7.843 4.582m15.686 0A11.953 11.953 0 0 1 12 10.5c-2.998 0-5.74-1.1-7.843-2.918m15.686 0A8.959 8.959 0 0 1 21 12c0 .778-.099 1.533-.284 2.253m0 0A17.919 17.919 0 0 1 12 16.5c-3.162 0-6.133-.815-8.716-2.247m0 0A9.015 9.015 0 0 1 3 12c0-1.605.42-3.113 1.157-4.418"/>"#
            }
            Self::Document => {
                r#"<path d="M19.5 14.25v-2.625a3.375 3.375 0 0 0-3.375-3.375h-1.5A1.125 1.125 0 0 1 13.5 7.125v-1.5a3.375 3.375 0 0 0-3.375-3.375H8.25m0 12.75h7.5m-7.5 3H12M10.5 2.25H5.625c-.621 0-1.125.504-1.125 1.125v17.25c0 .621.504 1.125 1.125 1.125h12.75c.621 0 1.125-.504 1.125-1.125V11.25a9 9 0 0 0-9-9Z"/>"#
            }
            Self::Trash => {
                r#"<path d="m14.74 9-.346 9m-4.788 0L9.26 9m9.968-3.21c.342.052.682.107 1.022.166m-1.022-.165L18.16 19.673a2.25 2.25 0 0 1-2.244 2.077H8.084a2.25 2.25 0 0 1-2.244-2.077L4.772 5.79m14.456 0a48.108 48.108 0 0 0-3.478-.397m-12 .562c.34-.059.68-.114 1.022-.165m0 0a48.11 48.11 0 0 1 3.478-.397m7.5 0v-.916c0-1.18-.91-2.164-2.09-2.201a51.964 51.964 0 0 0-3.32 0c-1.18.037-2.09 1.022-2.09 2.201v.916m7.5 0a48.667 48.667 0 0 0-7.5 0"/>"#
            }
            Self::Sparkles => {
                r#"<path d="M9.813 15.904 9 18.75l-.813-2.846a4.5 4.5 0 0 0-3.09-3.09L2.25 12l2.846-.813a4.5 4.5 0 0 0 3.09-3.09L9 5.25l.813 2.846a4.5 4.5 0 0 0 3.09 3.09L15.75 12l-2.846.813a4.5 4.5 0 0 0-3.09 3.09Z"/>"#
            }
            Self::ArrowsUpDown => {
                r#"<path d="M3 7.5 7.5 3m0 0L12 7.5M7.5 3v13.5m13.5 0L16.5 21m0 0L12 16.5m4.5 4.5V7.5"/>"#
            }
            Self::ArrowUp => r#"<path d="M4.5 10.5 12 3m0 0 7.5 7.5M12 3v18"/>"#,
            Self::ArrowDown => r#"<path d="M19.5 13.5 12 21m0 0-7.5-7.5M12 21V3"/>"#,
            Self::Funnel => {
                r#"<path d="M12 3c2.755 0 5.455.232 8.083.678.533.09.917.556.917 1.096v1.044a2.25 2.25 0 0 1-.659 1.591l-5.432 5.432a2.25 2.25 0 0 0-.659 1.591v2.927a2.25 2.25 0 0 1-1.244 2.013L9.75 21v-6.568a2.25 2.25 0 0 0-.659-1.591L3.659 7.409A2.25 2.25 0 0 1 3 5.818V4.774c0-.54.384-1.006.917-1.096A48.32 48.32 0 0 1 12 3Z"/>"#
            }
            Self::TableCells => {
                r#"<path d="M3.375 4.5h17.25c.621 0 1.125.504 1.125 1.125v12.75c0 .621-.504 1.125-1.125 1.125H3.375A1.125 1.125 0 0 1 2.25 18.375V5.625c0-.621.504-1.125 1.125-1.125ZM2.25 9.75h19.5M2.25 14.25h19.5M9 4.5v15"/>"#
            }
            Self::ViewColumns => {
                r#"<path d="M9 4.5v15m6-15v15m-10.875 0h15.75c.621 0 1.125-.504 1.125-1.125V5.625c0-.621-.504-1.125-1.125-1.125H4.125C3.504 4.5 3 5.004 3 5.625v12.75c0 .621.504 1.125 1.125 1.125Z"/>"#
            }
            Self::UserCircle => {
                r#"<path d="M17.982 18.725A7.488 7.488 0 0 0 12 15.75a7.488 7.488 0 0 0-5.982 2.975m11.963 0a9 9 0 1 0-11.963 0m11.963 0A8.966 8.966 0 0 1 12 21a8.966 8.966 0 0 1-5.982-2.275M15 9.75a3 3 0 1 1-6 0 3 3 0 0 1 6 0Z"/>"#
            }
            Self::Logout => {
                r#"<path d="M15.75 9V5.25A2.25 2.25 0 0 0 13.5 3h-6a2.25 2.25 0 0 0-2.25 2.25v13.5A2.25 2.25 0 0 0 7.5 21h6a2.25 2.25 0 0 0 2.25-2.25V15m3 0 3-3m0 0-3-3m3 3H9"/>"#
            }
            Self::Bars3 => r#"<path d="M3.75 6.75h16.5M3.75 12h16.5m-16.5 5.25h16.5"/>"#,
        }
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
/// Standardized icon sizes.
pub enum IconSize {
    /// 12px, badges and dense table chrome.
    Xs,
    /// 16px, buttons and menu rows.
    #[default]
    Sm,
    /// 20px, navbar and sidebar entries.
    Md,
    /// 24px, empty states and KPI cards.
    Lg,
}

impl IconSize {
    /// Pixel size for the icon.
    pub const fn px(self) -> u16 {
        match self {
            Self::Xs => 12,
            Self::Sm => 16,
            Self::Md => 20,
            Self::Lg => 24,
        }
    }

    /// Stable size token used for CSS hooks.
    pub const fn token(self) -> &'static str {
        match self {
            Self::Xs => "xs",
            Self::Sm => "sm",
            Self::Md => "md",
            Self::Lg => "lg",
        }
    }
}

#[component]
/// Renders an icon from the catalogue.
pub fn Icon(
    /// Semantic icon identifier.
    icon: IconName,
    /// Standardized icon size token.
    #[prop(default = IconSize::Sm)]
    size: IconSize,
) -> impl IntoView {
    let size_px = size.px().to_string();

    view! {
        <svg
            class="ui-icon"
            data-icon=icon.token()
            data-size=size.token()
            xmlns="http://www.w3.org/2000/svg"
            viewBox="0 0 24 24"
            width=size_px.clone()
            height=size_px
            fill=if icon.is_solid() { "currentColor" } else { "none" }
            stroke="currentColor"
            stroke-width="1.5"
            stroke-linecap="round"
            stroke-linejoin="round"
            focusable="false"
            aria-hidden="true"
            inner_html=icon.svg_body()
        />
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use super::*;

    #[test]
    fn tokens_are_unique_and_resolve_back() {
        let tokens: BTreeSet<&str> = IconName::ALL.iter().map(|icon| icon.token()).collect();
        assert_eq!(tokens.len(), IconName::ALL.len());
        for icon in IconName::ALL {
            assert_eq!(IconName::from_token(icon.token()), Some(icon));
        }
    }

    #[test]
    fn unknown_token_does_not_resolve() {
        assert_eq!(IconName::from_token("rocket"), None);
        assert_eq!(IconName::from_token(""), None);
    }

    #[test]
    fn every_icon_has_path_markup() {
        for icon in IconName::ALL {
            assert!(icon.svg_body().starts_with("<path d=\""), "{}", icon.token());
        }
    }
}
