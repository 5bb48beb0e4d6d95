//! Component showcase for the admin console design system.
//!
//! Stories are grouped into Base, Layout, and Guide sections. Each story renders one `system_ui`
//! primitive family in isolation, next to the controls that switch its variants, so visual changes
//! can be reviewed without walking through the dashboard pages.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod catalog;
mod stories;

use leptos::*;
use system_ui::prelude::*;

pub use catalog::{StoryGroup, StoryId};

#[component]
/// Showcase page: story navigation on the left, the selected story on the right.
pub fn UiShowcaseApp(
    /// Story shown on mount, as a slug (`"badge"`, `"#icons"`). Unknown slugs fall back to the
    /// first story.
    #[prop(optional_no_strip, into)]
    initial_story: Option<String>,
    /// Called when another story is opened, e.g. to mirror it into the location hash.
    #[prop(optional_no_strip)]
    on_story_change: Option<Callback<StoryId>>,
) -> impl IntoView {
    let initial = initial_story
        .as_deref()
        .and_then(StoryId::from_slug)
        .unwrap_or(StoryId::ALL[0]);
    let selected = create_rw_signal(initial);

    let open_story = move |story: StoryId| {
        if selected.get_untracked() == story {
            return;
        }
        selected.set(story);
        if let Some(on_story_change) = on_story_change.as_ref() {
            on_story_change.call(story);
        }
    };

    let nav = StoryGroup::ALL
        .into_iter()
        .map(|group| {
            view! {
                <Stack gap=LayoutGap::Sm ui_slot="story-group">
                    <Text role=TextRole::Label tone=TextTone::Secondary>{group.label()}</Text>
                    <MenuSurface role="listbox" aria_label=format!("{} stories", group.label())>
                        {catalog::stories_in(group)
                            .map(|story| {
                                view! {
                                    <MenuItem
                                        role="option"
                                        selected=Signal::derive(move || selected.get() == story)
                                        on_click=Callback::new(move |_| open_story(story))
                                    >
                                        {story.title()}
                                    </MenuItem>
                                }
                            })
                            .collect_view()}
                    </MenuSurface>
                </Stack>
            }
        })
        .collect_view();

    view! {
        <div class="ui-showcase" data-ui-kind="showcase">
            <nav class="ui-showcase-nav" aria-label="Stories">
                <Stack gap=LayoutGap::Md>{nav}</Stack>
            </nav>
            <section class="ui-showcase-story" data-ui-story=move || selected.get().slug()>
                {move || {
                    let story = selected.get();
                    view! {
                        <Stack gap=LayoutGap::Lg>
                            <Stack gap=LayoutGap::Sm>
                                <Text role=TextRole::Caption tone=TextTone::Secondary>
                                    {story.group().label()}
                                </Text>
                                <Heading role=TextRole::Display>{story.title()}</Heading>
                                <Text tone=TextTone::Secondary>{story.description()}</Text>
                            </Stack>
                            {stories::story_view(story)}
                        </Stack>
                    }
                }}
            </section>
        </div>
    }
}
