use admin_runtime::ContentHeader;
use leptos::*;
use leptos_meta::Title;
use leptos_router::*;
use ui_showcase::{StoryId, UiShowcaseApp};

/// Path of the showcase route.
pub const SHOWCASE_PATH: &str = "/showcase";

/// Showcase location for `story`; the story slug rides in the hash.
pub fn story_href(story: StoryId) -> String {
    format!("{SHOWCASE_PATH}#{}", story.slug())
}

#[component]
/// Component showcase mounted inside the admin shell.
pub fn ShowcasePage() -> impl IntoView {
    let location = use_location();
    let navigate = use_navigate();
    let on_story_change = Callback::new(move |story: StoryId| {
        navigate(&story_href(story), NavigateOptions::default());
    });

    view! {
        <Title text="Component Showcase | Dealer 365" />
        <ContentHeader title="Component Showcase" />
        <UiShowcaseApp
            initial_story=Some(location.hash.get_untracked())
            on_story_change=Some(on_story_change)
        />
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn story_links_resolve_back_to_the_story() {
        let href = story_href(StoryId::MultiSelect);
        assert_eq!(href, "/showcase#multi-select");
        let hash = href.trim_start_matches(SHOWCASE_PATH);
        assert_eq!(StoryId::from_slug(hash), Some(StoryId::MultiSelect));
    }
}
