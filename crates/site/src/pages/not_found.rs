use admin_runtime::use_shell_runtime;
use leptos::*;
use leptos_meta::Title;
use leptos_router::use_location;
use system_ui::{Button, ButtonVariant, EmptyState, IconName};

#[component]
/// Fallback for menu and search targets that have no page yet.
pub fn NotFoundPage() -> impl IntoView {
    let runtime = use_shell_runtime();
    let location = use_location();

    view! {
        <Title text="Not found | Dealer 365" />
        <EmptyState icon=IconName::Search title="This page is not available yet">
            <p>{move || format!("No screen is registered for {}.", location.pathname.get())}</p>
            <Button
                variant=ButtonVariant::Outline
                leading_icon=IconName::Home
                on_click=Callback::new(move |_| runtime.navigate("/"))
            >
                "Back to dealers"
            </Button>
        </EmptyState>
    }
}
