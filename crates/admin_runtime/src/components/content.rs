use system_ui::{Breadcrumbs, Button, ButtonSize, ButtonVariant, Heading, TextRole};

use super::*;

#[component]
/// Main content area. Its left offset follows the sidebar width.
pub fn ContentWrapper(children: Children) -> impl IntoView {
    let runtime = use_shell_runtime();
    let state = runtime.state;

    view! {
        <main
            class="admin-content"
            data-ui-kind="content-wrapper"
            data-ui-sidebar=move || if state.with(|state| state.sidebar_open) { "open" } else { "closed" }
            style=move || format!("margin-left: {}px;", state.with(|state| state.content_offset_px()))
        >
            {children()}
        </main>
    }
}

#[component]
/// Page header with breadcrumb, title, optional bookmark toggle, and a primary action.
pub fn ContentHeader(
    #[prop(into)] title: String,
    /// Crumbs after the home glyph; defaults to the title alone.
    #[prop(optional)]
    breadcrumbs: Option<Vec<(String, Option<String>)>>,
    /// Menu label whose favorite flag the bookmark button toggles.
    #[prop(optional, into)]
    favorite_label: Option<String>,
    #[prop(optional, into)] action_label: Option<String>,
    #[prop(default = IconName::Plus)] action_icon: IconName,
    #[prop(optional)] on_action: Option<Callback<()>>,
) -> impl IntoView {
    let runtime = use_shell_runtime();
    let crumbs = breadcrumbs.unwrap_or_else(|| vec![(title.clone(), None)]);

    let bookmark = favorite_label.map(|label| {
        let is_favorite = runtime.is_favorite(label.clone());
        let label = store_value(label);
        move || {
            let favorite = is_favorite.get();
            view! {
                <IconButton
                    icon=if favorite { IconName::BookmarkSolid } else { IconName::Bookmark }
                    aria_label=label.with_value(|label| format!("Bookmark {label}"))
                    ui_slot="bookmark"
                    variant=ButtonVariant::Outline
                    pressed=favorite
                    on_click=Callback::new(move |_| runtime.toggle_favorite(label.get_value()))
                />
            }
        }
    });

    let action = action_label.map(|label| {
        view! {
            <Button
                variant=ButtonVariant::Default
                size=ButtonSize::Sm
                leading_icon=action_icon
                ui_slot="primary-action"
                on_click=Callback::new(move |_| {
                    if let Some(on_action) = on_action.as_ref() {
                        on_action.call(());
                    }
                })
            >
                {label}
            </Button>
        }
    });

    view! {
        <header class="admin-content-header" data-ui-kind="content-header">
            <div data-ui-slot="heading">
                <Breadcrumbs items=crumbs />
                <div data-ui-slot="title-row">
                    <Heading role=TextRole::Display>{title}</Heading>
                    {bookmark}
                </div>
            </div>
            {action}
        </header>
    }
}
