use table_model::{ColumnAlign, SortDirection};

use super::*;

/// Indicator glyph for a sortable header.
fn sort_icon(direction: Option<SortDirection>) -> IconName {
    match direction {
        Some(SortDirection::Ascending) => IconName::ArrowUp,
        Some(SortDirection::Descending) => IconName::ArrowDown,
        None => IconName::ArrowsUpDown,
    }
}

fn aria_sort(direction: Option<SortDirection>) -> &'static str {
    match direction {
        Some(SortDirection::Ascending) => "ascending",
        Some(SortDirection::Descending) => "descending",
        None => "none",
    }
}

#[component]
/// Scrollable table frame.
pub fn DataTable(
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] aria_label: Option<String>,
    #[prop(optional)] compact: bool,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            class=merge_layout_class("ui-data-table", layout_class)
            data-ui-primitive="true"
            data-ui-kind="data-table"
            data-ui-density=if compact { "compact" } else { "default" }
        >
            <table aria-label=aria_label>{children()}</table>
        </div>
    }
}

#[component]
/// Table header group.
pub fn TableHead(children: Children) -> impl IntoView {
    view! { <thead data-ui-slot="head">{children()}</thead> }
}

#[component]
/// Table body group.
pub fn TableBody(children: Children) -> impl IntoView {
    view! { <tbody data-ui-slot="body">{children()}</tbody> }
}

#[component]
/// Table row with selection and expansion hooks.
pub fn TableRow(
    #[prop(optional)] ui_slot: Option<&'static str>,
    #[prop(optional, into)] selected: MaybeSignal<bool>,
    #[prop(optional, into)] expanded: MaybeSignal<bool>,
    children: Children,
) -> impl IntoView {
    view! {
        <tr
            data-ui-slot=ui_slot.unwrap_or("row")
            data-ui-selected=move || bool_token(selected.get())
            data-ui-expanded=move || bool_token(expanded.get())
            aria-selected=move || selected.get().to_string()
        >
            {children()}
        </tr>
    }
}

#[component]
/// Column header cell. Sortable headers render as a button with a direction indicator.
pub fn TableHeaderCell(
    #[prop(optional)] align: ColumnAlign,
    #[prop(optional_no_strip)] width: Option<u16>,
    #[prop(optional)] ui_slot: Option<&'static str>,
    #[prop(optional)] sortable: bool,
    #[prop(optional, into)] sort: MaybeSignal<Option<SortDirection>>,
    #[prop(optional)] on_sort: Option<Callback<()>>,
    children: Children,
) -> impl IntoView {
    let style = width.map(|px| format!("width: {px}px; min-width: {px}px;"));
    let sort = Signal::derive(move || sort.get());
    let content = children();

    view! {
        <th
            scope="col"
            style=style
            data-ui-slot=ui_slot.unwrap_or("header-cell")
            data-ui-align=align.token()
            aria-sort=move || sortable.then(|| aria_sort(sort.get()))
        >
            {if sortable {
                view! {
                    <button
                        type="button"
                        data-ui-slot="sort-trigger"
                        data-ui-sort=move || sort.get().map(SortDirection::token).unwrap_or("none")
                        on:click=move |_| {
                            if let Some(on_sort) = on_sort.as_ref() {
                                on_sort.call(());
                            }
                        }
                    >
                        <span>{content}</span>
                        {move || view! { <Icon icon=sort_icon(sort.get()) size=IconSize::Xs /> }}
                    </button>
                }
                .into_view()
            } else {
                content.into_view()
            }}
        </th>
    }
}

#[component]
/// Body cell.
pub fn TableCell(
    #[prop(optional)] align: ColumnAlign,
    #[prop(optional)] colspan: Option<usize>,
    #[prop(optional)] ui_slot: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <td
            colspan=colspan
            data-ui-slot=ui_slot.unwrap_or("cell")
            data-ui-align=align.token()
        >
            {children()}
        </td>
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn sort_indicator_follows_direction() {
        assert_eq!(sort_icon(None), IconName::ArrowsUpDown);
        assert_eq!(sort_icon(Some(SortDirection::Ascending)), IconName::ArrowUp);
        assert_eq!(sort_icon(Some(SortDirection::Descending)), IconName::ArrowDown);
    }

    #[test]
    fn aria_sort_uses_aria_tokens() {
        assert_eq!(aria_sort(None), "none");
        assert_eq!(aria_sort(Some(SortDirection::Ascending)), "ascending");
        assert_eq!(aria_sort(Some(SortDirection::Descending)), "descending");
    }
}
