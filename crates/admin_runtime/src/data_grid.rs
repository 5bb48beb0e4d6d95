//! Generic data grid bound to the headless [`table_model`] state.
//!
//! The owning page keeps the dataset and a [`TableState`] signal, derives the visible page with
//! [`use_grid_query`], and hands both to [`DataGrid`]. The grid turns user input into
//! [`TableAction`] values, runs them through [`reduce_table`], and forwards the resulting
//! [`TableEffect`] notifications to the page's callbacks.

use std::collections::BTreeSet;
use std::ops::Range;
use std::rc::Rc;

use leptos::html;
use leptos::*;
use system_ui::{
    use_outside_click, BadgeColor, Button, ButtonSize, ButtonVariant, CheckState, Checkbox,
    Cluster, ConfirmModal, ConfirmTone, DataTable, EmptyState, Icon, IconButton, IconName,
    IconSize, LayoutGap, LayoutJustify, MenuSurface, MultiSelectDropdown, Pagination, Panel,
    SelectField, SelectOption, TableBody, TableCell, TableHead, TableHeaderCell, TableRow, Text,
    TextField, TextRole, TextTone,
};
use table_model::{
    reduce_table, run_query, ColumnDef, FilterMap, RowId, SortDirection, TableAction, TableConfig,
    TableEffect, TableRecord, TableState,
};

/// Leading checkbox and chevron columns rendered on every row.
const FIXED_LEADING_COLUMNS: usize = 2;

/// Column definition plus an optional custom cell renderer.
pub struct GridColumn<T> {
    pub def: ColumnDef,
    render: Option<Rc<dyn Fn(&T) -> View>>,
}

impl<T> Clone for GridColumn<T> {
    fn clone(&self) -> Self {
        Self {
            def: self.def.clone(),
            render: self.render.clone(),
        }
    }
}

impl<T> std::fmt::Debug for GridColumn<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GridColumn")
            .field("def", &self.def)
            .field("custom_render", &self.render.is_some())
            .finish()
    }
}

impl<T: TableRecord> GridColumn<T> {
    pub fn new(def: ColumnDef) -> Self {
        Self { def, render: None }
    }

    /// Replaces the default text rendering of the cell.
    pub fn render(mut self, render: impl Fn(&T) -> View + 'static) -> Self {
        self.render = Some(Rc::new(render));
        self
    }

    fn cell_view(&self, row: &T) -> View {
        match self.render.as_ref() {
            Some(render) => render(row),
            None => row.cell(&self.def.key).display().into_view(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
/// Owned rows of the visible page plus the paging metadata the footer needs.
pub struct GridPage<T> {
    pub rows: Vec<T>,
    pub total_items: usize,
    pub page: usize,
    pub page_count: usize,
    pub range: Range<usize>,
}

impl<T> Default for GridPage<T> {
    fn default() -> Self {
        Self {
            rows: Vec::new(),
            total_items: 0,
            page: 1,
            page_count: 0,
            range: 0..0,
        }
    }
}

impl<T: TableRecord + Clone> GridPage<T> {
    /// Runs the query pipeline and copies out the visible rows.
    pub fn query(rows: &[T], config: &TableConfig, state: &TableState) -> Self {
        let view = run_query(rows, config, state);
        Self {
            rows: view.to_owned_rows(),
            total_items: view.total_items,
            page: view.page,
            page_count: view.page_count,
            range: view.range,
        }
    }
}

/// Memoized visible page for `rows` under the current table `state`.
pub fn use_grid_query<T>(
    rows: Signal<Vec<T>>,
    config: StoredValue<TableConfig>,
    state: RwSignal<TableState>,
) -> Memo<GridPage<T>>
where
    T: TableRecord + Clone + PartialEq + 'static,
{
    create_memo(move |_| {
        rows.with(|rows| {
            state.with(|state| config.with_value(|config| GridPage::query(rows, config, state)))
        })
    })
}

/// Footer text for the visible window, for example `1-10 of 23`.
pub fn page_summary(range: &Range<usize>, total_items: usize) -> String {
    if total_items == 0 || range.is_empty() {
        format!("0 of {total_items}")
    } else {
        format!("{}-{} of {total_items}", range.start + 1, range.end)
    }
}

/// Bulk bar caption.
pub fn selection_label(selected: usize) -> String {
    format!("{selected} Selected")
}

/// Columns to render, in configured order.
pub fn visible_columns<'a, T>(
    columns: &'a [GridColumn<T>],
    state: &TableState,
) -> Vec<&'a GridColumn<T>> {
    columns
        .iter()
        .filter(|column| state.is_column_visible(&column.def.key))
        .collect()
}

fn filter_options(
    config: &TableConfig,
    label: &str,
    color: Option<Callback<(String, String), BadgeColor>>,
) -> Vec<SelectOption> {
    config
        .filter(label)
        .map(|group| {
            group
                .options
                .iter()
                .map(|value| {
                    let option = SelectOption::new(value.clone());
                    match color.as_ref() {
                        Some(color) => option.color(color.call((label.to_string(), value.clone()))),
                        None => option,
                    }
                })
                .collect()
        })
        .unwrap_or_default()
}

#[derive(Clone, Copy)]
struct GridCallbacks {
    on_page_change: Option<Callback<usize>>,
    on_row_count_change: Option<Callback<usize>>,
    on_search: Option<Callback<String>>,
    on_filter: Option<Callback<FilterMap>>,
    on_sort: Option<Callback<(String, SortDirection)>>,
}

impl GridCallbacks {
    fn notify(&self, effect: TableEffect) {
        match effect {
            TableEffect::PageChanged(page) => {
                if let Some(cb) = self.on_page_change.as_ref() {
                    cb.call(page);
                }
            }
            TableEffect::RowCountChanged(count) => {
                if let Some(cb) = self.on_row_count_change.as_ref() {
                    cb.call(count);
                }
            }
            TableEffect::SearchChanged(term) => {
                if let Some(cb) = self.on_search.as_ref() {
                    cb.call(term);
                }
            }
            TableEffect::FiltersChanged(filters) => {
                if let Some(cb) = self.on_filter.as_ref() {
                    cb.call(filters);
                }
            }
            TableEffect::SortChanged(sort) => {
                if let Some(cb) = self.on_sort.as_ref() {
                    cb.call((sort.key, sort.direction));
                }
            }
        }
    }
}

#[component]
/// Searchable, filterable, sortable, paginated table with cascading selection and row expansion.
pub fn DataGrid<T>(
    /// Section title shown above the toolbar.
    #[prop(optional, into)]
    title: Option<String>,
    /// Every loaded row; `toggle all` and the header checkbox cover this set.
    rows: Signal<Vec<T>>,
    /// Visible page derived with [`use_grid_query`].
    page: Memo<GridPage<T>>,
    config: StoredValue<TableConfig>,
    columns: Vec<GridColumn<T>>,
    /// Columns of the nested sub-table; defaults to `columns`.
    #[prop(optional)]
    sub_columns: Option<Vec<GridColumn<T>>>,
    state: RwSignal<TableState>,
    #[prop(default = "Search".to_string(), into)] search_placeholder: String,
    #[prop(optional)] on_page_change: Option<Callback<usize>>,
    #[prop(optional)] on_row_count_change: Option<Callback<usize>>,
    #[prop(optional)] on_search: Option<Callback<String>>,
    #[prop(optional)] on_filter: Option<Callback<FilterMap>>,
    #[prop(optional)] on_sort: Option<Callback<(String, SortDirection)>>,
    /// Badge colour for a `(filter label, value)` pair.
    #[prop(optional)]
    filter_color: Option<Callback<(String, String), BadgeColor>>,
    #[prop(optional)] on_bulk_confirm: Option<Callback<BTreeSet<RowId>>>,
    #[prop(optional)] on_bulk_delete: Option<Callback<BTreeSet<RowId>>>,
    #[prop(optional)] on_export: Option<Callback<()>>,
    #[prop(optional)] on_row_open: Option<Callback<RowId>>,
) -> impl IntoView
where
    T: TableRecord + Clone + PartialEq + 'static,
{
    let callbacks = GridCallbacks {
        on_page_change,
        on_row_count_change,
        on_search,
        on_filter,
        on_sort,
    };
    let sub_columns = store_value(sub_columns.unwrap_or_else(|| columns.clone()));
    let columns = store_value(columns);

    let dispatch = Callback::new(move |action: TableAction| {
        let mut next = state.get_untracked();
        match config.with_value(|config| reduce_table(&mut next, config, action)) {
            Ok(effects) => {
                if state.with_untracked(|current| *current != next) {
                    state.set(next);
                }
                for effect in effects {
                    callbacks.notify(effect);
                }
            }
            Err(err) => logging::warn!("table reducer error: {err}"),
        }
    });

    create_effect(move |_| {
        let total_items = page.with(|page| page.total_items);
        dispatch.call(TableAction::ReconcileTotal { total_items });
    });

    let selected_count = Signal::derive(move || state.with(|state| state.selected.len()));
    let header_state = Signal::derive(move || {
        rows.with(|rows| state.with(|state| state.header_check_state(rows)))
    });
    let visible_count = Signal::derive(move || {
        columns.with_value(|columns| state.with(|state| visible_columns(columns, state).len()))
    });
    let full_colspan = move || {
        visible_count.get() + FIXED_LEADING_COLUMNS + usize::from(on_row_open.is_some())
    };

    let delete_open = create_rw_signal(false);
    let columns_open = create_rw_signal(false);
    let columns_menu = create_node_ref::<html::Div>();
    use_outside_click(
        columns_menu,
        columns_open.into(),
        Callback::new(move |_| columns_open.set(false)),
    );

    let filter_dropdowns = config.with_value(|config| {
        config
            .filter_groups
            .iter()
            .map(|group| {
                let label = group.label.clone();
                let options = filter_options(config, &label, filter_color);
                let selected = {
                    let label = label.clone();
                    Signal::derive(move || {
                        state.with(|state| state.filters.accepted(&label).cloned().unwrap_or_default())
                    })
                };
                let toggle_group = label.clone();
                let clear_group = label.clone();
                view! {
                    <MultiSelectDropdown
                        label=label
                        options=options
                        selected=selected
                        on_toggle=Callback::new(move |value: String| {
                            dispatch.call(TableAction::ToggleFilterValue {
                                group: toggle_group.clone(),
                                value,
                            });
                        })
                        on_clear=Callback::new(move |_| {
                            dispatch.call(TableAction::ClearFilter { group: clear_group.clone() });
                        })
                    />
                }
            })
            .collect_view()
    });

    let column_toggles = move || {
        columns.with_value(|columns| {
            columns
                .iter()
                .map(|column| {
                    let key = column.def.key.clone();
                    let check_key = key.clone();
                    let visible = Signal::derive(move || {
                        CheckState::from(state.with(|state| state.is_column_visible(&check_key)))
                    });
                    view! {
                        <Checkbox
                            label=column.def.header.clone()
                            state=visible
                            on_toggle=Callback::new(move |_| {
                                dispatch.call(TableAction::ToggleColumn { key: key.clone() });
                            })
                        />
                    }
                })
                .collect_view()
        })
    };

    let page_size_options = config.with_value(|config| {
        config
            .page_size_options
            .iter()
            .map(|size| SelectOption::new(size.to_string()))
            .collect::<Vec<_>>()
    });

    let header_cells = move || {
        columns.with_value(|columns| {
            state.with(|current| {
                visible_columns(columns, current)
                    .into_iter()
                    .map(|column| {
                        let key = column.def.key.clone();
                        let sort_key = key.clone();
                        let sort = Signal::derive(move || {
                            state.with(|state| state.sort_direction(&sort_key))
                        });
                        view! {
                            <TableHeaderCell
                                align=column.def.align
                                width=column.def.width
                                sortable=column.def.sortable
                                sort=sort
                                on_sort=Callback::new(move |_| {
                                    dispatch.call(TableAction::SortBy { key: key.clone() });
                                })
                            >
                                {column.def.header.clone()}
                            </TableHeaderCell>
                        }
                    })
                    .collect_view()
            })
        })
    };

    let body_rows = move || {
        let rows = page.with(|page| page.rows.clone());
        if rows.is_empty() {
            return view! {
                <TableRow ui_slot="empty">
                    <TableCell colspan=full_colspan()>
                        <EmptyState icon=IconName::Search title="No results found" />
                    </TableCell>
                </TableRow>
            }
            .into_view();
        }
        rows.into_iter()
            .map(|row| {
                view! {
                    <GridRow
                        row=row
                        columns=columns
                        sub_columns=sub_columns
                        state=state
                        dispatch=dispatch
                        colspan=full_colspan()
                        on_row_open=on_row_open
                    />
                }
            })
            .collect_view()
    };

    view! {
        <Panel ui_slot="data-grid" aria_label=title.clone().unwrap_or_else(|| "Table".to_string())>
            {title.map(|title| view! { <Text role=TextRole::Title ui_slot="grid-title">{title}</Text> })}
            <Cluster justify=LayoutJustify::Between ui_slot="toolbar">
                <Cluster gap=LayoutGap::Lg ui_slot="filters">
                    <TextField
                        id="grid-search"
                        input_type="search"
                        leading_icon=IconName::Search
                        placeholder=search_placeholder
                        value=Signal::derive(move || state.with(|state| state.search.clone()))
                        on_input=Callback::new(move |term: String| {
                            dispatch.call(TableAction::SetSearch(term));
                        })
                    />
                    {filter_dropdowns}
                </Cluster>
                <Cluster gap=LayoutGap::Sm wrap=false ui_slot="actions">
                    <div node_ref=columns_menu data-ui-slot="edit-columns">
                        <Button
                            variant=ButtonVariant::Outline
                            size=ButtonSize::Sm
                            leading_icon=IconName::ViewColumns
                            aria_haspopup="menu"
                            aria_expanded=columns_open
                            on_click=Callback::new(move |_| columns_open.update(|open| *open = !*open))
                        >
                            "Edit columns"
                        </Button>
                        <Show when=move || columns_open.get()>
                            <MenuSurface role="group" aria_label="Visible columns" align_end=true>
                                <Text role=TextRole::Caption tone=TextTone::Secondary>"Visible Columns"</Text>
                                {column_toggles}
                            </MenuSurface>
                        </Show>
                    </div>
                    <Button
                        variant=ButtonVariant::Outline
                        size=ButtonSize::Sm
                        leading_icon=IconName::TableCells
                        on_click=Callback::new(move |_| match on_export.as_ref() {
                            Some(cb) => cb.call(()),
                            None => logging::log!("excel export requested"),
                        })
                    >
                        "Excel"
                    </Button>
                </Cluster>
            </Cluster>

            <Show when=move || { selected_count.get() > 0 }>
                <Cluster gap=LayoutGap::Md ui_slot="bulk-actions">
                    <Text role=TextRole::Label>{move || selection_label(selected_count.get())}</Text>
                    <Button
                        variant=ButtonVariant::Ghost
                        size=ButtonSize::Sm
                        leading_icon=IconName::Check
                        ui_slot="bulk-confirm"
                        on_click=Callback::new(move |_| {
                            let selected = state.with_untracked(|state| state.selected.clone());
                            if let Some(cb) = on_bulk_confirm.as_ref() {
                                cb.call(selected);
                            }
                        })
                    >
                        "Confirm selected"
                    </Button>
                    <Button
                        variant=ButtonVariant::Ghost
                        size=ButtonSize::Sm
                        leading_icon=IconName::Trash
                        ui_slot="bulk-delete"
                        on_click=Callback::new(move |_| delete_open.set(true))
                    >
                        "Delete selected"
                    </Button>
                </Cluster>
            </Show>
            <ConfirmModal
                open=delete_open
                title="Delete selected rows"
                message=Signal::derive(move || {
                    format!("{} will be removed. This cannot be undone.", selection_label(selected_count.get()))
                })
                tone=ConfirmTone::Destructive
                confirm_label="Delete"
                on_confirm=Callback::new(move |_| {
                    let selected = state.with_untracked(|state| state.selected.clone());
                    if let Some(cb) = on_bulk_delete.as_ref() {
                        cb.call(selected);
                    }
                    dispatch.call(TableAction::ClearSelection);
                    delete_open.set(false);
                })
                on_cancel=Callback::new(move |_| delete_open.set(false))
            />

            <DataTable aria_label="Rows">
                <TableHead>
                    <TableRow>
                        <TableHeaderCell width=Some(40) ui_slot="expand-header">""</TableHeaderCell>
                        <TableHeaderCell width=Some(40) ui_slot="select-header">
                            <Checkbox
                                aria_label="Select all rows"
                                state=header_state
                                on_toggle=Callback::new(move |_| {
                                    let action = rows.with_untracked(|rows| TableAction::toggle_all(rows));
                                    dispatch.call(action);
                                })
                            />
                        </TableHeaderCell>
                        {header_cells}
                        {on_row_open.is_some().then(|| view! {
                            <TableHeaderCell width=Some(40) ui_slot="action-header">""</TableHeaderCell>
                        })}
                    </TableRow>
                </TableHead>
                <TableBody>{body_rows}</TableBody>
            </DataTable>

            <Cluster justify=LayoutJustify::Between ui_slot="footer">
                <Cluster gap=LayoutGap::Sm wrap=false ui_slot="row-count">
                    <SelectField
                        id="grid-row-count"
                        label="Row count"
                        options=page_size_options
                        value=Signal::derive(move || Some(state.with(|state| state.per_page.to_string())))
                        on_change=Callback::new(move |value: String| match value.parse::<usize>() {
                            Ok(per_page) => dispatch.call(TableAction::SetPageSize(per_page)),
                            Err(err) => logging::warn!("invalid row count `{value}`: {err}"),
                        })
                    />
                    <Text role=TextRole::Caption tone=TextTone::Secondary>
                        {move || page.with(|page| page_summary(&page.range, page.total_items))}
                    </Text>
                </Cluster>
                <Pagination
                    page=Signal::derive(move || page.with(|page| page.page))
                    page_count=Signal::derive(move || page.with(|page| page.page_count))
                    on_page_change=Callback::new(move |target| dispatch.call(TableAction::SetPage(target)))
                />
            </Cluster>
        </Panel>
    }
}

#[component]
fn GridRow<T>(
    row: T,
    columns: StoredValue<Vec<GridColumn<T>>>,
    sub_columns: StoredValue<Vec<GridColumn<T>>>,
    state: RwSignal<TableState>,
    dispatch: Callback<TableAction>,
    colspan: usize,
    on_row_open: Option<Callback<RowId>>,
) -> impl IntoView
where
    T: TableRecord + Clone + PartialEq + 'static,
{
    let id = row.row_id();
    let expandable = !row.sub_rows().is_empty();
    let selected = Signal::derive(move || state.with(|state| state.is_selected(id)));
    let expanded = Signal::derive(move || state.with(|state| state.is_expanded(id)));
    let row = store_value(row);

    let toggle_expand = move || {
        if expandable {
            dispatch.call(row.with_value(TableAction::toggle_expand));
        }
    };

    let cells = move || {
        columns.with_value(|columns| {
            state.with(|current| {
                row.with_value(|row| {
                    visible_columns(columns, current)
                        .into_iter()
                        .map(|column| {
                            view! { <TableCell align=column.def.align>{column.cell_view(row)}</TableCell> }
                        })
                        .collect_view()
                })
            })
        })
    };

    let sub_table = move || {
        (expandable && expanded.get()).then(|| {
            let children = row.with_value(|row| row.sub_rows().to_vec());
            view! {
                <TableRow ui_slot="sub-table-row" expanded=true>
                    <TableCell colspan=colspan ui_slot="sub-table">
                        <SubTable rows=children columns=sub_columns state=state dispatch=dispatch />
                    </TableCell>
                </TableRow>
            }
        })
    };

    view! {
        <TableRow selected=selected expanded=expanded>
            <TableCell ui_slot="expand">
                {expandable.then(|| view! {
                    <IconButton
                        icon=IconName::ChevronRight
                        aria_label="Toggle sub rows"
                        pressed=expanded
                        ui_slot="expand-toggle"
                        on_click=Callback::new(move |_| toggle_expand())
                    />
                })}
            </TableCell>
            <TableCell ui_slot="select">
                <Checkbox
                    aria_label="Select row"
                    state=Signal::derive(move || CheckState::from(selected.get()))
                    on_toggle=Callback::new(move |_| {
                        dispatch.call(row.with_value(TableAction::toggle_row));
                    })
                />
            </TableCell>
            {cells}
            {on_row_open.map(|open| view! {
                <TableCell ui_slot="row-action">
                    <IconButton
                        icon=IconName::ChevronRight
                        aria_label="Open row"
                        on_click=Callback::new(move |_| open.call(id))
                    />
                </TableCell>
            })}
        </TableRow>
        {sub_table}
    }
}

#[component]
fn SubTable<T>(
    rows: Vec<T>,
    columns: StoredValue<Vec<GridColumn<T>>>,
    state: RwSignal<TableState>,
    dispatch: Callback<TableAction>,
) -> impl IntoView
where
    T: TableRecord + Clone + PartialEq + 'static,
{
    let header = columns.with_value(|columns| {
        columns
            .iter()
            .map(|column| {
                view! {
                    <TableHeaderCell align=column.def.align width=column.def.width>
                        {column.def.header.clone()}
                    </TableHeaderCell>
                }
            })
            .collect_view()
    });

    let body = rows
        .into_iter()
        .map(|row| {
            let id = row.row_id();
            let selected = Signal::derive(move || state.with(|state| state.is_selected(id)));
            let action = TableAction::toggle_sub_row(&row);
            let cells = columns.with_value(|columns| {
                columns
                    .iter()
                    .map(|column| {
                        view! { <TableCell align=column.def.align>{column.cell_view(&row)}</TableCell> }
                    })
                    .collect_view()
            });
            view! {
                <TableRow selected=selected>
                    <TableCell ui_slot="select">
                        <Checkbox
                            aria_label="Select sub row"
                            state=Signal::derive(move || CheckState::from(selected.get()))
                            on_toggle=Callback::new(move |_| dispatch.call(action.clone()))
                        />
                    </TableCell>
                    {cells}
                </TableRow>
            }
        })
        .collect_view();

    view! {
        <DataTable aria_label="Sub rows" compact=true>
            <TableHead>
                <TableRow>
                    <TableHeaderCell width=Some(40)>
                        <Icon icon=IconName::ChevronDown size=IconSize::Xs />
                    </TableHeaderCell>
                    {header}
                </TableRow>
            </TableHead>
            <TableBody>{body}</TableBody>
        </DataTable>
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use table_model::{CellValue, ColumnDef, FilterGroup};

    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Car {
        id: u64,
        model: &'static str,
        trim: &'static str,
    }

    impl TableRecord for Car {
        fn row_id(&self) -> RowId {
            RowId(self.id)
        }

        fn cell(&self, key: &str) -> CellValue {
            match key {
                "model" => self.model.into(),
                "trim" => self.trim.into(),
                _ => CellValue::Empty,
            }
        }
    }

    fn config() -> TableConfig {
        TableConfig::new(vec![
            ColumnDef::new("model", "Model"),
            ColumnDef::new("trim", "Trim"),
        ])
        .searchable(["model"])
        .filter_group(FilterGroup::new("Trim", "trim", ["Base", "Sport"]))
    }

    fn cars(count: u64) -> Vec<Car> {
        (1..=count)
            .map(|id| Car {
                id,
                model: "Sedan",
                trim: if id % 2 == 0 { "Sport" } else { "Base" },
            })
            .collect()
    }

    #[test]
    fn summary_describes_the_visible_window() {
        assert_eq!(page_summary(&(0..10), 23), "1-10 of 23");
        assert_eq!(page_summary(&(20..23), 23), "21-23 of 23");
        assert_eq!(page_summary(&(0..0), 0), "0 of 0");
    }

    #[test]
    fn selection_label_counts_rows() {
        assert_eq!(selection_label(3), "3 Selected");
    }

    #[test]
    fn grid_page_copies_the_requested_slice() {
        let config = config();
        let mut state = TableState::new(&config);
        state.per_page = 2;
        state.page = 2;

        let page = GridPage::query(&cars(5), &config, &state);
        assert_eq!(page.rows.iter().map(|car| car.id).collect::<Vec<_>>(), vec![3, 4]);
        assert_eq!(page.total_items, 5);
        assert_eq!(page.page_count, 3);
        assert_eq!(page.range, 2..4);
    }

    #[test]
    fn grid_page_applies_filters_before_paging() {
        let config = config();
        let mut state = TableState::new(&config);
        state.filters.toggle_value("Trim", "Sport");

        let page = GridPage::query(&cars(5), &config, &state);
        assert_eq!(page.rows.iter().map(|car| car.id).collect::<Vec<_>>(), vec![2, 4]);
    }

    #[test]
    fn hidden_columns_are_skipped() {
        let config = config();
        let mut state = TableState::new(&config);
        state.visible_columns.remove("trim");
        let columns: Vec<GridColumn<Car>> = config
            .columns
            .iter()
            .cloned()
            .map(GridColumn::new)
            .collect();

        let keys: Vec<&str> = visible_columns(&columns, &state)
            .into_iter()
            .map(|column| column.def.key.as_str())
            .collect();
        assert_eq!(keys, vec!["model"]);
    }

    #[test]
    fn default_page_is_empty_first_page() {
        let page = GridPage::<Car>::default();
        assert_eq!(page.page, 1);
        assert!(page.rows.is_empty());
    }
}
