use super::*;

/// Inline custom properties for a [`Grid`]: the column cap and, for auto-fill grids, the
/// narrowest a track may shrink to before it wraps.
pub(crate) fn grid_style(columns: u8, min_track_px: Option<u16>) -> String {
    let columns = columns.max(1);
    match min_track_px {
        Some(min) => format!("--ui-grid-columns:{columns};--ui-grid-min:{min}px"),
        None => format!("--ui-grid-columns:{columns}"),
    }
}

#[component]
/// Vertical flow. A labelled stack is exposed as a group to assistive tech.
pub fn Stack(
    #[prop(default = LayoutGap::Md)] gap: LayoutGap,
    #[prop(default = LayoutAlign::Stretch)] align: LayoutAlign,
    #[prop(default = LayoutPadding::None)] padding: LayoutPadding,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional)] ui_slot: Option<&'static str>,
    #[prop(optional, into)] aria_label: Option<String>,
    children: Children,
) -> impl IntoView {
    let role = aria_label.is_some().then_some("group");

    view! {
        <div
            class=merge_layout_class("ui-stack", layout_class)
            role=role
            aria-label=aria_label
            data-ui-primitive="true"
            data-ui-kind="stack"
            data-ui-slot=ui_slot
            data-ui-gap=gap.token()
            data-ui-align=align.token()
            data-ui-padding=padding.token()
        >
            {children()}
        </div>
    }
}

#[component]
/// Horizontal row. Wraps by default; toolbars and table footers pass `wrap=false`.
pub fn Cluster(
    #[prop(default = LayoutGap::Md)] gap: LayoutGap,
    #[prop(default = LayoutAlign::Center)] align: LayoutAlign,
    #[prop(default = LayoutJustify::Start)] justify: LayoutJustify,
    #[prop(default = LayoutPadding::None)] padding: LayoutPadding,
    #[prop(default = true)] wrap: bool,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional)] ui_slot: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            class=merge_layout_class("ui-cluster", layout_class)
            data-ui-primitive="true"
            data-ui-kind="cluster"
            data-ui-slot=ui_slot
            data-ui-gap=gap.token()
            data-ui-align=align.token()
            data-ui-justify=justify.token()
            data-ui-padding=padding.token()
            data-ui-wrap=bool_token(wrap)
        >
            {children()}
        </div>
    }
}

#[component]
/// Card grid for KPI tiles and widget rows.
///
/// Below the `md` breakpoint the grid collapses to one column. With `min_track_px` set, tracks
/// auto-fill instead and `columns` only caps how many fit on one row.
pub fn Grid(
    #[prop(default = 4)] columns: u8,
    #[prop(optional)] min_track_px: Option<u16>,
    #[prop(default = LayoutGap::Md)] gap: LayoutGap,
    #[prop(default = LayoutPadding::None)] padding: LayoutPadding,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional)] ui_slot: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            class=merge_layout_class("ui-grid", layout_class)
            style=grid_style(columns, min_track_px)
            data-ui-primitive="true"
            data-ui-kind="grid"
            data-ui-slot=ui_slot
            data-ui-fill=if min_track_px.is_some() { "auto" } else { "fixed" }
            data-ui-gap=gap.token()
            data-ui-padding=padding.token()
        >
            {children()}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::grid_style;

    #[test]
    fn grid_style_clamps_columns_and_adds_min_track() {
        assert_eq!(grid_style(0, None), "--ui-grid-columns:1");
        assert_eq!(grid_style(6, Some(96)), "--ui-grid-columns:6;--ui-grid-min:96px");
    }
}
