use super::*;

const PAGINATION_SIBLINGS: usize = 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PageSlot {
    Page(usize),
    Gap,
}

/// Page buttons to render: first, last, and `siblings` pages around `current`, with gaps where
/// ranges are skipped. A gap never stands in for a single page.
fn page_slots(current: usize, count: usize, siblings: usize) -> Vec<PageSlot> {
    if count == 0 {
        return Vec::new();
    }
    let current = current.clamp(1, count);
    let start = current.saturating_sub(siblings).max(1);
    let end = (current + siblings).min(count);

    let mut slots = Vec::new();
    if start > 1 {
        slots.push(PageSlot::Page(1));
        match start {
            2 => {}
            3 => slots.push(PageSlot::Page(2)),
            _ => slots.push(PageSlot::Gap),
        }
    }
    slots.extend((start..=end).map(PageSlot::Page));
    if end < count {
        match count - end {
            1 => {}
            2 => slots.push(PageSlot::Page(count - 1)),
            _ => slots.push(PageSlot::Gap),
        }
        slots.push(PageSlot::Page(count));
    }
    slots
}

#[component]
/// Shared toolbar primitive.
pub fn ToolBar(
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(default = LayoutGap::Sm)] gap: LayoutGap,
    #[prop(default = LayoutJustify::Between)] justify: LayoutJustify,
    #[prop(optional, into)] aria_label: Option<String>,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            class=merge_layout_class("ui-toolbar", layout_class)
            data-ui-primitive="true"
            data-ui-kind="toolbar"
            data-ui-gap=gap.token()
            data-ui-justify=justify.token()
            role="toolbar"
            aria-label=aria_label
        >
            {children()}
        </div>
    }
}

#[component]
/// Shared tab list primitive.
pub fn TabList(
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] aria_label: Option<String>,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            class=merge_layout_class("ui-tab-list", layout_class)
            data-ui-primitive="true"
            data-ui-kind="tab-list"
            role="tablist"
            aria-label=aria_label
        >
            {children()}
        </div>
    }
}

#[component]
/// Shared tab trigger primitive.
pub fn Tab(
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(into)] id: String,
    #[prop(into)] controls: String,
    #[prop(optional, into)] selected: MaybeSignal<bool>,
    #[prop(optional)] on_select: Option<Callback<()>>,
    children: Children,
) -> impl IntoView {
    view! {
        <button
            type="button"
            class=merge_layout_class("ui-tab", layout_class)
            id=id
            role="tab"
            aria-controls=controls
            aria-selected=move || selected.get().to_string()
            tabindex=move || if selected.get() { 0 } else { -1 }
            data-ui-primitive="true"
            data-ui-kind="tab"
            data-ui-selected=move || bool_token(selected.get())
            on:click=move |_| {
                if let Some(on_select) = on_select.as_ref() {
                    on_select.call(());
                }
            }
        >
            {children()}
        </button>
    }
}

#[component]
/// Breadcrumb trail starting at a home glyph. The last crumb is the current page.
pub fn Breadcrumbs(
    #[prop(optional)] layout_class: Option<&'static str>,
    /// `(label, href)` pairs; crumbs without an href render as plain text.
    items: Vec<(String, Option<String>)>,
) -> impl IntoView {
    let last = items.len().saturating_sub(1);
    let crumbs = items
        .into_iter()
        .enumerate()
        .map(|(index, (label, href))| {
            let current = index == last;
            view! {
                <li data-ui-slot="crumb" aria-current=current.then_some("page")>
                    <Icon icon=IconName::ChevronRight size=IconSize::Xs />
                    {match href {
                        Some(href) if !current => view! { <a href=href>{label}</a> }.into_view(),
                        _ => view! { <span>{label}</span> }.into_view(),
                    }}
                </li>
            }
        })
        .collect_view();

    view! {
        <nav
            class=merge_layout_class("ui-breadcrumbs", layout_class)
            aria-label="Breadcrumb"
            data-ui-primitive="true"
            data-ui-kind="breadcrumbs"
        >
            <ol>
                <li data-ui-slot="home">
                    <a href="/" aria-label="Home">
                        <Icon icon=IconName::Home size=IconSize::Sm />
                    </a>
                </li>
                {crumbs}
            </ol>
        </nav>
    }
}

#[component]
/// Numbered pagination with previous/next buttons. Pages are 1-indexed.
pub fn Pagination(
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(into)] page: Signal<usize>,
    #[prop(into)] page_count: Signal<usize>,
    on_page_change: Callback<usize>,
) -> impl IntoView {
    let go_to = move |target: usize| {
        if target >= 1 && target <= page_count.get_untracked() && target != page.get_untracked() {
            on_page_change.call(target);
        }
    };

    view! {
        <nav
            class=merge_layout_class("ui-pagination", layout_class)
            aria-label="Pagination"
            data-ui-primitive="true"
            data-ui-kind="pagination"
        >
            <IconButton
                icon=IconName::ChevronLeft
                aria_label="Previous page"
                ui_slot="previous"
                disabled=Signal::derive(move || page.get() <= 1)
                on_click=Callback::new(move |_| go_to(page.get_untracked().saturating_sub(1)))
            />
            {move || {
                let current = page.get();
                page_slots(current, page_count.get(), PAGINATION_SIBLINGS)
                    .into_iter()
                    .map(|slot| match slot {
                        PageSlot::Page(number) => view! {
                            <button
                                type="button"
                                data-ui-slot="page"
                                data-ui-selected=bool_token(number == current)
                                aria-current=(number == current).then_some("page")
                                on:click=move |_| go_to(number)
                            >
                                {number}
                            </button>
                        }
                        .into_view(),
                        PageSlot::Gap => view! {
                            <span data-ui-slot="gap" aria-hidden="true">"..."</span>
                        }
                        .into_view(),
                    })
                    .collect_view()
            }}
            <IconButton
                icon=IconName::ChevronRight
                aria_label="Next page"
                ui_slot="next"
                disabled=Signal::derive(move || page.get() >= page_count.get())
                on_click=Callback::new(move |_| go_to(page.get_untracked() + 1))
            />
        </nav>
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::PageSlot::{Gap, Page};
    use super::*;

    #[test]
    fn short_ranges_list_every_page() {
        assert_eq!(page_slots(1, 3, 1), vec![Page(1), Page(2), Page(3)]);
        assert_eq!(page_slots(2, 4, 1), vec![Page(1), Page(2), Page(3), Page(4)]);
        assert_eq!(page_slots(1, 0, 1), Vec::new());
    }

    #[test]
    fn long_ranges_collapse_into_gaps_around_the_current_page() {
        assert_eq!(
            page_slots(5, 10, 1),
            vec![Page(1), Gap, Page(4), Page(5), Page(6), Gap, Page(10)]
        );
        assert_eq!(page_slots(1, 8, 1), vec![Page(1), Page(2), Gap, Page(8)]);
        assert_eq!(page_slots(8, 8, 1), vec![Page(1), Gap, Page(7), Page(8)]);
    }

    #[test]
    fn a_single_skipped_page_is_shown_instead_of_a_gap() {
        assert_eq!(
            page_slots(4, 6, 1),
            vec![Page(1), Page(2), Page(3), Page(4), Page(5), Page(6)]
        );
    }

    #[test]
    fn out_of_range_current_page_is_clamped() {
        assert_eq!(page_slots(9, 3, 1), vec![Page(1), Page(2), Page(3)]);
    }
}
