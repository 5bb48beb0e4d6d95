//! Headless state model for the admin data table.
//!
//! The crate owns everything the table needs that is not markup: row and column metadata, the
//! search/filter/sort/paginate pipeline, cascading selection, row expansion, column visibility, and
//! the [`reduce_table`] transition function. UI crates render [`TableView`] results and dispatch
//! [`TableAction`] values back in.

#![warn(missing_debug_implementations)]

pub mod model;
pub mod query;
pub mod reducer;
pub mod selection;

pub use model::{
    CellValue, CheckState, ColumnAlign, ColumnDef, FilterGroup, FilterMap, RowId, SortDescriptor,
    SortDirection, TableConfig, TableRecord, DEFAULT_PAGE_SIZE, PAGE_SIZE_OPTIONS,
};
pub use query::{
    filter_rows, page_count, page_range, resolve_page, run_query, sort_rows, TableView,
};
pub use reducer::{reduce_table, TableAction, TableEffect, TableError, TableState};
pub use selection::{all_selectable_ids, header_check_state, toggle_all, toggle_row};
