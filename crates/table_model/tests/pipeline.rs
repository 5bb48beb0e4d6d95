use pretty_assertions::assert_eq;
use table_model::{
    reduce_table, run_query, CellValue, CheckState, ColumnDef, FilterGroup, RowId, TableAction,
    TableConfig, TableEffect, TableRecord, TableState,
};

#[derive(Debug, Clone, PartialEq)]
struct Item {
    id: u64,
    name: &'static str,
    status: &'static str,
    tier: &'static str,
    sub_rows: Vec<Item>,
}

impl TableRecord for Item {
    fn row_id(&self) -> RowId {
        RowId(self.id)
    }

    fn cell(&self, key: &str) -> CellValue {
        match key {
            "name" => self.name.into(),
            "status" => self.status.into(),
            "tier" => self.tier.into(),
            _ => CellValue::Empty,
        }
    }

    fn sub_rows(&self) -> &[Self] {
        &self.sub_rows
    }
}

fn item(id: u64, name: &'static str, status: &'static str) -> Item {
    Item {
        id,
        name,
        status,
        tier: "Basic",
        sub_rows: Vec::new(),
    }
}

fn fixture() -> Vec<Item> {
    vec![
        Item {
            sub_rows: vec![item(11, "Apple Seed", "Inactive"), item(12, "Apple Peel", "Inactive")],
            ..item(1, "Apple", "Active")
        },
        item(2, "Banana", "Active"),
    ]
}

fn config() -> TableConfig {
    TableConfig::new(vec![
        ColumnDef::new("name", "Name"),
        ColumnDef::new("status", "Status"),
        ColumnDef::new("tier", "Dealer Type"),
    ])
    .searchable(["name"])
    .filter_group(FilterGroup::new("Status", "status", ["Active", "Inactive"]))
    .filter_group(FilterGroup::new("Dealer Type", "tier", ["Basic", "Premium"]))
}

fn names(view_rows: &[&Item]) -> Vec<&'static str> {
    view_rows.iter().map(|row| row.name).collect()
}

fn dispatch(state: &mut TableState, action: TableAction) -> Vec<TableEffect> {
    reduce_table(state, &config(), action).expect("reduce")
}

#[test]
fn parent_toggle_selects_and_clears_children() {
    let rows = fixture();
    let mut state = TableState::new(&config());

    dispatch(&mut state, TableAction::toggle_row(&rows[0]));
    assert_eq!(
        state.selected.iter().map(|id| id.0).collect::<Vec<_>>(),
        vec![1, 11, 12]
    );
    assert_eq!(state.header_check_state(&rows), CheckState::Indeterminate);

    dispatch(&mut state, TableAction::toggle_row(&rows[0]));
    assert!(state.selected.is_empty());
    assert_eq!(state.header_check_state(&rows), CheckState::Unchecked);
}

#[test]
fn toggle_all_covers_sub_rows_and_round_trips() {
    let rows = fixture();
    let mut state = TableState::new(&config());

    dispatch(&mut state, TableAction::toggle_all(&rows));
    assert_eq!(state.selected.len(), 4);
    assert_eq!(state.header_check_state(&rows), CheckState::Checked);

    dispatch(&mut state, TableAction::toggle_all(&rows));
    assert!(state.selected.is_empty());
}

#[test]
fn sub_table_checkbox_does_not_cascade() {
    let rows = fixture();
    let mut state = TableState::new(&config());

    dispatch(&mut state, TableAction::toggle_sub_row(&rows[0].sub_rows[1]));
    assert_eq!(state.selected.iter().copied().collect::<Vec<_>>(), vec![RowId(12)]);
}

#[test]
fn search_ban_keeps_only_banana() {
    let rows = fixture();
    let mut state = TableState::new(&config());
    dispatch(&mut state, TableAction::SetSearch("ban".into()));

    let view = run_query(&rows, &config(), &state);
    assert_eq!(names(&view.rows), vec!["Banana"]);
    assert_eq!(view.total_items, 1);
}

#[test]
fn filters_do_not_touch_sub_rows() {
    let rows = fixture();
    let mut state = TableState::new(&config());
    dispatch(
        &mut state,
        TableAction::ToggleFilterValue {
            group: "Status".into(),
            value: "Active".into(),
        },
    );

    let view = run_query(&rows, &config(), &state);
    assert_eq!(names(&view.rows), vec!["Apple", "Banana"]);
    assert_eq!(view.rows[0].sub_rows().len(), 2);
}

#[test]
fn every_active_filter_group_must_accept_the_row() {
    let rows = vec![
        item(1, "Apple", "Active"),
        Item {
            tier: "Premium",
            ..item(2, "Banana", "Active")
        },
        Item {
            tier: "Premium",
            ..item(3, "Cherry", "Inactive")
        },
        item(4, "Date", "Inactive"),
    ];
    let mut state = TableState::new(&config());
    for (group, value) in [("Status", "Active"), ("Dealer Type", "Premium")] {
        dispatch(
            &mut state,
            TableAction::ToggleFilterValue {
                group: group.into(),
                value: value.into(),
            },
        );
    }

    let view = run_query(&rows, &config(), &state);
    assert_eq!(names(&view.rows), vec!["Banana"]);
    assert!(view
        .rows
        .iter()
        .all(|row| row.status == "Active" && row.tier == "Premium"));

    dispatch(
        &mut state,
        TableAction::ToggleFilterValue {
            group: "Status".into(),
            value: "Inactive".into(),
        },
    );
    let view = run_query(&rows, &config(), &state);
    assert_eq!(names(&view.rows), vec!["Banana", "Cherry"]);

    dispatch(
        &mut state,
        TableAction::ClearFilter {
            group: "Dealer Type".into(),
        },
    );
    let view = run_query(&rows, &config(), &state);
    assert_eq!(view.total_items, 4);
}

#[test]
fn header_clicks_sort_ascending_then_descending() {
    let rows = vec![item(2, "Banana", "Active"), item(1, "Apple", "Active")];
    let mut state = TableState::new(&config());

    dispatch(&mut state, TableAction::SortBy { key: "name".into() });
    let view = run_query(&rows, &config(), &state);
    assert_eq!(names(&view.rows), vec!["Apple", "Banana"]);

    dispatch(&mut state, TableAction::SortBy { key: "name".into() });
    let view = run_query(&rows, &config(), &state);
    assert_eq!(names(&view.rows), vec!["Banana", "Apple"]);
}

#[test]
fn single_row_pages_and_out_of_range_reset() {
    let rows = vec![
        item(1, "Apple", "Active"),
        item(2, "Banana", "Active"),
        item(3, "Cherry", "Active"),
    ];
    let config = config().page_size(1);
    let mut state = TableState::new(&config);

    reduce_table(&mut state, &config, TableAction::SetPage(2)).expect("page 2");
    let view = run_query(&rows, &config, &state);
    assert_eq!(names(&view.rows), vec!["Banana"]);
    assert_eq!(view.page_count, 3);

    reduce_table(&mut state, &config, TableAction::SetPage(4)).expect("page 4");
    let view = run_query(&rows, &config, &state);
    assert_eq!(view.page, 1);
    assert_eq!(names(&view.rows), vec!["Apple"]);

    let effects = reduce_table(
        &mut state,
        &config,
        TableAction::ReconcileTotal {
            total_items: view.total_items,
        },
    )
    .expect("reconcile");
    assert_eq!(effects, vec![TableEffect::PageChanged(1)]);
    assert_eq!(state.page, 1);
}
