//! Shell layout composition: navbar, sidebar, and the content area.

mod content;
mod navbar;
mod sidebar;

use leptos::*;
use system_ui::{Icon, IconButton, IconName, IconSize};

use crate::{
    i18n::UiText,
    model::NavbarDropdown,
    reducer::ShellAction,
    runtime_context::{use_shell_runtime, ShellProvider},
};

pub use self::content::{ContentHeader, ContentWrapper};
pub use self::navbar::Navbar;
pub use self::sidebar::Sidebar;

#[component]
/// Root layout: provider, fixed navbar, sidebar, and the scrolling content area.
pub fn AppShell(
    /// Router hook forwarded to [`ShellProvider`].
    #[prop(optional_no_strip)]
    on_navigate: Option<Callback<String>>,
    #[prop(optional_no_strip)] initial_path: Option<String>,
    children: Children,
) -> impl IntoView {
    view! {
        <ShellProvider on_navigate=on_navigate initial_path=initial_path>
            <div class="admin-shell" data-ui-kind="app-shell">
                <Navbar />
                <div class="admin-shell-body" data-ui-slot="body">
                    <Sidebar />
                    <ContentWrapper>{children()}</ContentWrapper>
                </div>
            </div>
        </ShellProvider>
    }
}
