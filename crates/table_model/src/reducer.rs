//! Table view state, actions, and the transition function that applies them.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::{FilterMap, RowId, SortDescriptor, SortDirection, TableConfig, TableRecord};
use crate::query::resolve_page;
use crate::selection::{self, all_selectable_ids, header_check_state, sub_row_ids};
use crate::CheckState;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// Every piece of interactive table state. Created fresh per mount and never persisted.
pub struct TableState {
    /// Current 1-indexed page.
    pub page: usize,
    pub per_page: usize,
    pub search: String,
    pub filters: FilterMap,
    pub sort: Option<SortDescriptor>,
    pub selected: BTreeSet<RowId>,
    pub expanded: BTreeSet<RowId>,
    pub visible_columns: BTreeSet<String>,
}

impl TableState {
    /// Initial state: page 1, default page size, every column visible.
    pub fn new(config: &TableConfig) -> Self {
        Self {
            page: 1,
            per_page: config.default_page_size,
            search: String::new(),
            filters: FilterMap::new(),
            sort: None,
            selected: BTreeSet::new(),
            expanded: BTreeSet::new(),
            visible_columns: config.column_keys(),
        }
    }

    pub fn is_selected(&self, id: RowId) -> bool {
        self.selected.contains(&id)
    }

    pub fn is_expanded(&self, id: RowId) -> bool {
        self.expanded.contains(&id)
    }

    pub fn is_column_visible(&self, key: &str) -> bool {
        self.visible_columns.contains(key)
    }

    /// Direction of the sort on `key`, if that column is the active sort.
    pub fn sort_direction(&self, key: &str) -> Option<SortDirection> {
        self.sort
            .as_ref()
            .filter(|sort| sort.key == key)
            .map(|sort| sort.direction)
    }

    /// Header checkbox state over the given rows and their sub-rows.
    pub fn header_check_state<T: TableRecord>(&self, rows: &[T]) -> CheckState {
        header_check_state(self.selected.len(), all_selectable_ids(rows).len())
    }
}

#[derive(Debug, Clone, PartialEq)]
/// Actions accepted by [`reduce_table`].
pub enum TableAction {
    /// Jump to a 1-indexed page.
    SetPage(usize),
    /// Change the number of rows per page. Always returns to page 1.
    SetPageSize(usize),
    /// Replace the search term. Returns to page 1.
    SetSearch(String),
    /// Add or remove one accepted value of a filter group.
    ToggleFilterValue { group: String, value: String },
    ClearFilter { group: String },
    /// Header click on a column.
    SortBy { key: String },
    /// Toggle a row and cascade onto the listed child ids.
    ToggleRow { id: RowId, sub_row_ids: Vec<RowId> },
    /// Select or clear every listed id.
    ToggleAll { selectable: BTreeSet<RowId> },
    ClearSelection,
    /// Expand or collapse a row. Rows without sub-rows are rejected.
    ToggleExpand { id: RowId, has_sub_rows: bool },
    ToggleColumn { key: String },
    /// Re-check the current page against the latest result count.
    ReconcileTotal { total_items: usize },
}

impl TableAction {
    /// Cascading toggle for `row` and its sub-rows.
    pub fn toggle_row<T: TableRecord>(row: &T) -> Self {
        Self::ToggleRow {
            id: row.row_id(),
            sub_row_ids: sub_row_ids(row),
        }
    }

    /// Non-cascading toggle, used by checkboxes inside an expanded sub-table.
    pub fn toggle_sub_row<T: TableRecord>(row: &T) -> Self {
        Self::ToggleRow {
            id: row.row_id(),
            sub_row_ids: Vec::new(),
        }
    }

    pub fn toggle_all<T: TableRecord>(rows: &[T]) -> Self {
        Self::ToggleAll {
            selectable: all_selectable_ids(rows),
        }
    }

    pub fn toggle_expand<T: TableRecord>(row: &T) -> Self {
        Self::ToggleExpand {
            id: row.row_id(),
            has_sub_rows: !row.sub_rows().is_empty(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
/// Change notifications emitted by [`reduce_table`] for the owning page's callbacks.
pub enum TableEffect {
    PageChanged(usize),
    RowCountChanged(usize),
    SearchChanged(String),
    FiltersChanged(FilterMap),
    SortChanged(SortDescriptor),
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
/// Reducer errors for actions that reference things the table does not have.
pub enum TableError {
    #[error("page numbers start at 1")]
    InvalidPage,
    #[error("page size must be greater than zero")]
    InvalidPageSize,
    #[error("unknown filter group `{0}`")]
    UnknownFilterGroup(String),
    #[error("unknown column `{0}`")]
    UnknownColumn(String),
    #[error("column `{0}` is not sortable")]
    ColumnNotSortable(String),
    #[error("row {0} has no sub-rows to expand")]
    RowNotExpandable(RowId),
}

/// Applies a [`TableAction`] to `state` and returns the callbacks the owner should fire.
///
/// # Errors
///
/// Returns a [`TableError`] when the action names a page, column, filter group, or row that the
/// table cannot accept. The state is left unchanged in that case.
pub fn reduce_table(
    state: &mut TableState,
    config: &TableConfig,
    action: TableAction,
) -> Result<Vec<TableEffect>, TableError> {
    let mut effects = Vec::new();
    match action {
        TableAction::SetPage(page) => {
            if page == 0 {
                return Err(TableError::InvalidPage);
            }
            if state.page != page {
                state.page = page;
                effects.push(TableEffect::PageChanged(page));
            }
        }
        TableAction::SetPageSize(per_page) => {
            if per_page == 0 {
                return Err(TableError::InvalidPageSize);
            }
            if state.per_page != per_page {
                state.per_page = per_page;
                effects.push(TableEffect::RowCountChanged(per_page));
            }
            reset_page(state, &mut effects);
        }
        TableAction::SetSearch(term) => {
            if state.search != term {
                state.search = term.clone();
                effects.push(TableEffect::SearchChanged(term));
            }
            reset_page(state, &mut effects);
        }
        TableAction::ToggleFilterValue { group, value } => {
            ensure_filter_group(config, &group)?;
            state.filters.toggle_value(&group, &value);
            filters_changed(state, &mut effects);
        }
        TableAction::ClearFilter { group } => {
            ensure_filter_group(config, &group)?;
            if state.filters.accepted(&group).is_some() {
                state.filters.clear_group(&group);
                filters_changed(state, &mut effects);
            }
        }
        TableAction::SortBy { key } => {
            let column = config
                .column(&key)
                .ok_or_else(|| TableError::UnknownColumn(key.clone()))?;
            if !column.sortable {
                return Err(TableError::ColumnNotSortable(key));
            }
            let next = SortDescriptor::after_header_click(state.sort.as_ref(), &key);
            state.sort = Some(next.clone());
            effects.push(TableEffect::SortChanged(next));
        }
        TableAction::ToggleRow { id, sub_row_ids } => {
            selection::toggle_row(&mut state.selected, id, sub_row_ids);
        }
        TableAction::ToggleAll { selectable } => {
            selection::toggle_all(&mut state.selected, selectable);
        }
        TableAction::ClearSelection => state.selected.clear(),
        TableAction::ToggleExpand { id, has_sub_rows } => {
            if !has_sub_rows {
                return Err(TableError::RowNotExpandable(id));
            }
            if !state.expanded.remove(&id) {
                state.expanded.insert(id);
            }
        }
        TableAction::ToggleColumn { key } => {
            if config.column(&key).is_none() {
                return Err(TableError::UnknownColumn(key));
            }
            if !state.visible_columns.remove(&key) {
                state.visible_columns.insert(key);
            }
        }
        TableAction::ReconcileTotal { total_items } => {
            let page = resolve_page(state.page, total_items, state.per_page);
            if page != state.page {
                state.page = page;
                effects.push(TableEffect::PageChanged(page));
            }
        }
    }
    Ok(effects)
}

fn ensure_filter_group(config: &TableConfig, group: &str) -> Result<(), TableError> {
    if config.filter(group).is_some() {
        Ok(())
    } else {
        Err(TableError::UnknownFilterGroup(group.to_string()))
    }
}

fn filters_changed(state: &mut TableState, effects: &mut Vec<TableEffect>) {
    effects.push(TableEffect::FiltersChanged(state.filters.clone()));
    reset_page(state, effects);
}

fn reset_page(state: &mut TableState, effects: &mut Vec<TableEffect>) {
    if state.page != 1 {
        state.page = 1;
        effects.push(TableEffect::PageChanged(1));
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::model::{ColumnDef, FilterGroup};

    fn config() -> TableConfig {
        TableConfig::new(vec![
            ColumnDef::new("code", "Code"),
            ColumnDef::new("name", "Name"),
            ColumnDef::new("actions", "").sortable(false),
        ])
        .searchable(["code", "name"])
        .filter_group(FilterGroup::new("Status", "active", ["Active", "Inactive"]))
    }

    fn reduce(state: &mut TableState, action: TableAction) -> Vec<TableEffect> {
        reduce_table(state, &config(), action).expect("reduce")
    }

    #[test]
    fn new_state_shows_every_column_on_page_one() {
        let state = TableState::new(&config());
        assert_eq!(state.page, 1);
        assert_eq!(state.per_page, 10);
        assert!(state.is_column_visible("code"));
        assert!(state.is_column_visible("actions"));
    }

    #[test]
    fn sort_by_same_column_flips_direction_and_reports_it() {
        let mut state = TableState::new(&config());
        let effects = reduce(&mut state, TableAction::SortBy { key: "name".into() });
        assert_eq!(
            effects,
            vec![TableEffect::SortChanged(SortDescriptor::ascending("name"))]
        );

        let effects = reduce(&mut state, TableAction::SortBy { key: "name".into() });
        assert_eq!(
            effects,
            vec![TableEffect::SortChanged(SortDescriptor::descending("name"))]
        );
        assert_eq!(state.sort_direction("name"), Some(SortDirection::Descending));
        assert_eq!(state.sort_direction("code"), None);
    }

    #[test]
    fn sorting_an_unsortable_column_is_rejected() {
        let mut state = TableState::new(&config());
        let err = reduce_table(
            &mut state,
            &config(),
            TableAction::SortBy {
                key: "actions".into(),
            },
        )
        .expect_err("unsortable");
        assert_eq!(err, TableError::ColumnNotSortable("actions".into()));
        assert_eq!(state.sort, None);
    }

    #[test]
    fn search_resets_page_and_reports_term() {
        let mut state = TableState::new(&config());
        reduce(&mut state, TableAction::SetPage(3));

        let effects = reduce(&mut state, TableAction::SetSearch("ban".into()));
        assert_eq!(
            effects,
            vec![
                TableEffect::SearchChanged("ban".into()),
                TableEffect::PageChanged(1)
            ]
        );
        assert_eq!(state.page, 1);
    }

    #[test]
    fn changing_page_size_returns_to_first_page() {
        let mut state = TableState::new(&config());
        reduce(&mut state, TableAction::SetPage(2));

        let effects = reduce(&mut state, TableAction::SetPageSize(30));
        assert_eq!(
            effects,
            vec![TableEffect::RowCountChanged(30), TableEffect::PageChanged(1)]
        );
        assert_eq!(state.per_page, 30);
    }

    #[test]
    fn zero_page_and_zero_page_size_are_rejected() {
        let mut state = TableState::new(&config());
        assert_eq!(
            reduce_table(&mut state, &config(), TableAction::SetPage(0)),
            Err(TableError::InvalidPage)
        );
        assert_eq!(
            reduce_table(&mut state, &config(), TableAction::SetPageSize(0)),
            Err(TableError::InvalidPageSize)
        );
    }

    #[test]
    fn filter_toggle_reports_the_whole_map() {
        let mut state = TableState::new(&config());
        let effects = reduce(
            &mut state,
            TableAction::ToggleFilterValue {
                group: "Status".into(),
                value: "Active".into(),
            },
        );

        let mut expected = FilterMap::new();
        expected.toggle_value("Status", "Active");
        assert_eq!(effects, vec![TableEffect::FiltersChanged(expected)]);
    }

    #[test]
    fn unknown_filter_group_is_rejected() {
        let mut state = TableState::new(&config());
        let err = reduce_table(
            &mut state,
            &config(),
            TableAction::ClearFilter {
                group: "Region".into(),
            },
        )
        .expect_err("unknown group");
        assert_eq!(err, TableError::UnknownFilterGroup("Region".into()));
    }

    #[test]
    fn expansion_requires_sub_rows() {
        let mut state = TableState::new(&config());
        reduce(
            &mut state,
            TableAction::ToggleExpand {
                id: RowId(1),
                has_sub_rows: true,
            },
        );
        assert!(state.is_expanded(RowId(1)));

        let err = reduce_table(
            &mut state,
            &config(),
            TableAction::ToggleExpand {
                id: RowId(2),
                has_sub_rows: false,
            },
        )
        .expect_err("leaf row");
        assert_eq!(err, TableError::RowNotExpandable(RowId(2)));
        assert!(!state.is_expanded(RowId(2)));
    }

    #[test]
    fn toggling_column_hides_then_shows_it() {
        let mut state = TableState::new(&config());
        reduce(&mut state, TableAction::ToggleColumn { key: "name".into() });
        assert!(!state.is_column_visible("name"));
        reduce(&mut state, TableAction::ToggleColumn { key: "name".into() });
        assert!(state.is_column_visible("name"));
    }

    #[test]
    fn reconcile_moves_past_the_end_back_to_page_one() {
        let mut state = TableState::new(&config());
        state.per_page = 1;
        reduce(&mut state, TableAction::SetPage(4));

        let effects = reduce(&mut state, TableAction::ReconcileTotal { total_items: 3 });
        assert_eq!(effects, vec![TableEffect::PageChanged(1)]);
        assert_eq!(state.page, 1);

        reduce(&mut state, TableAction::SetPage(2));
        let effects = reduce(&mut state, TableAction::ReconcileTotal { total_items: 3 });
        assert!(effects.is_empty());
        assert_eq!(state.page, 2);
    }

    #[test]
    fn reconcile_with_no_rows_left_returns_to_page_one() {
        let mut state = TableState::new(&config());
        reduce(&mut state, TableAction::SetPage(3));

        let effects = reduce(&mut state, TableAction::ReconcileTotal { total_items: 0 });
        assert_eq!(effects, vec![TableEffect::PageChanged(1)]);
        assert_eq!(state.page, 1);
    }
}
