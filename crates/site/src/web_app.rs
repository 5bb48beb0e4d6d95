use admin_runtime::{use_shell_runtime, AppShell, ShellAction};
use leptos::*;
use leptos_meta::*;
use leptos_router::*;

use crate::pages::{DealersPage, DocumentsPage, NotFoundPage, ShowcasePage, SHOWCASE_PATH};

#[component]
pub fn SiteApp() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text="Dealer 365" />
        <Meta name="description" content="Dealer 365 administration console." />

        <Router>
            <ShellFrame />
        </Router>
    }
}

#[component]
/// Admin shell wired to the router: shell navigation pushes routes, route changes update the shell.
fn ShellFrame() -> impl IntoView {
    let navigate = use_navigate();
    let location = use_location();
    let on_navigate = Callback::new(move |href: String| navigate(&href, NavigateOptions::default()));

    view! {
        <AppShell on_navigate=Some(on_navigate) initial_path=Some(location.pathname.get_untracked())>
            <RouteSync />
            <Routes>
                <Route path="" view=DealersPage />
                <Route path="/documents" view=DocumentsPage />
                <Route path=SHOWCASE_PATH view=ShowcasePage />
                <Route path="/*any" view=NotFoundPage />
            </Routes>
        </AppShell>
    }
}

#[component]
fn RouteSync() -> impl IntoView {
    let runtime = use_shell_runtime();
    let location = use_location();

    create_effect(move |_| {
        let path = location.pathname.get();
        if runtime.state.with_untracked(|state| state.active_path != path) {
            runtime.dispatch_action(ShellAction::SetActivePath(path));
        }
    });
}
