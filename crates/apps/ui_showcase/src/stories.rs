//! Story views. Each story renders one primitive family in isolation with its own controls.

mod base;
mod guide;
mod layout;

use leptos::*;
use system_ui::prelude::*;

use crate::catalog::{find_by_token, StoryId};

/// Renders the demo body for `story`.
pub(crate) fn story_view(story: StoryId) -> View {
    match story {
        StoryId::Button => base::ButtonStory().into_view(),
        StoryId::IconButton => base::IconButtonStory().into_view(),
        StoryId::TextField => base::TextFieldStory().into_view(),
        StoryId::Checkbox => base::CheckboxStory().into_view(),
        StoryId::Switch => base::SwitchStory().into_view(),
        StoryId::Radio => base::RadioStory().into_view(),
        StoryId::Select => base::SelectStory().into_view(),
        StoryId::MultiSelect => base::MultiSelectStory().into_view(),
        StoryId::Badge => base::BadgeStory().into_view(),
        StoryId::Alert => base::AlertStory().into_view(),
        StoryId::EmptyState => base::EmptyStateStory().into_view(),
        StoryId::Containers => layout::ContainersStory().into_view(),
        StoryId::Surfaces => layout::SurfacesStory().into_view(),
        StoryId::Navigation => layout::NavigationStory().into_view(),
        StoryId::Pagination => layout::PaginationStory().into_view(),
        StoryId::Table => layout::TableStory().into_view(),
        StoryId::Menu => layout::MenuStory().into_view(),
        StoryId::Modal => layout::ModalStory().into_view(),
        StoryId::Principles => guide::PrinciplesStory().into_view(),
        StoryId::Icons => guide::IconsStory().into_view(),
        StoryId::Colors => guide::ColorsStory().into_view(),
    }
}

#[component]
/// Control strip shown above a story's preview.
fn Controls(children: Children) -> impl IntoView {
    view! {
        <ToolBar aria_label="Story controls" justify=LayoutJustify::Start gap=LayoutGap::Md>
            {children()}
        </ToolBar>
    }
}

#[component]
/// Preview area for a story.
fn Preview(#[prop(optional, into)] label: Option<String>, children: Children) -> impl IntoView {
    view! {
        <Panel aria_label=label.unwrap_or_else(|| "Preview".to_string()) ui_slot="preview">
            {children()}
        </Panel>
    }
}

#[component]
/// Boolean story control.
fn ToggleControl(#[prop(into)] label: String, value: RwSignal<bool>) -> impl IntoView {
    view! {
        <Switch
            label=label.clone()
            aria_label=label
            checked=Signal::derive(move || value.get())
            on_toggle=Callback::new(move |next| value.set(next))
        />
    }
}

#[component]
/// Variant picker over a closed set of tokenized values.
fn TokenPicker<T>(
    id: &'static str,
    #[prop(into)] label: String,
    items: &'static [T],
    token: fn(T) -> &'static str,
    value: RwSignal<T>,
) -> impl IntoView
where
    T: Copy + 'static,
{
    let options = items
        .iter()
        .map(|item| SelectOption::new(token(*item)))
        .collect::<Vec<_>>();

    view! {
        <SelectField
            id=id
            label=label
            options=options
            value=Signal::derive(move || Some(token(value.get()).to_string()))
            on_change=Callback::new(move |next: String| {
                match find_by_token(items, token, &next) {
                    Some(item) => value.set(item),
                    None => logging::warn!("unknown {id} token `{next}`"),
                }
            })
        />
    }
}
