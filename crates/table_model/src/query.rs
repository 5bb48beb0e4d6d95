//! Client-side query pipeline: search, filter, sort, then paginate.

use std::ops::Range;

use crate::model::{FilterMap, SortDescriptor, SortDirection, TableConfig, TableRecord};
use crate::reducer::TableState;

/// Returns `true` when any searchable field contains `term`, ignoring case.
///
/// Only the empty term matches every row; whitespace is part of the needle.
pub fn matches_search<T: TableRecord>(row: &T, term: &str, fields: &[String]) -> bool {
    if term.is_empty() {
        return true;
    }
    let needle = term.to_lowercase();
    fields
        .iter()
        .any(|field| row.cell(field).display().to_lowercase().contains(&needle))
}

/// Returns `true` when the row's value is accepted by every active filter group.
///
/// Labels without a configured group fall back to using the label as the field key.
pub fn matches_filters<T: TableRecord>(row: &T, filters: &FilterMap, config: &TableConfig) -> bool {
    filters.iter().all(|(label, accepted)| {
        let field = config
            .filter(label)
            .map(|group| group.field.as_str())
            .unwrap_or(label.as_str());
        accepted.contains(&row.cell(field).display())
    })
}

/// Keeps the top-level rows that pass the search term and every filter group.
///
/// Sub-rows are never filtered; an expanded parent always shows all of its children.
pub fn filter_rows<'a, T: TableRecord>(
    rows: &'a [T],
    search: &str,
    filters: &FilterMap,
    config: &TableConfig,
) -> Vec<&'a T> {
    rows.iter()
        .filter(|row| matches_search(*row, search, &config.searchable_fields))
        .filter(|row| matches_filters(*row, filters, config))
        .collect()
}

/// Stable sort on the descriptor's field. Rows with equal keys keep their input order.
pub fn sort_rows<T: TableRecord>(rows: &mut [&T], sort: Option<&SortDescriptor>) {
    let Some(sort) = sort else {
        return;
    };
    rows.sort_by(|a, b| {
        let ordering = a.cell(&sort.key).compare(&b.cell(&sort.key));
        match sort.direction {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    });
}

/// Number of pages needed for `total` items; zero when there is nothing to show.
pub fn page_count(total: usize, per_page: usize) -> usize {
    if per_page == 0 {
        return 0;
    }
    total.div_ceil(per_page)
}

/// Index window `[(page-1)*per_page, min(page*per_page, total))` for a 1-indexed page.
pub fn page_range(page: usize, per_page: usize, total: usize) -> Range<usize> {
    let start = page.saturating_sub(1).saturating_mul(per_page).min(total);
    let end = page.saturating_mul(per_page).min(total);
    start..end
}

/// Page that should actually be displayed.
///
/// A page beyond the last one falls back to page 1, including when nothing is left to show.
pub fn resolve_page(page: usize, total: usize, per_page: usize) -> usize {
    if page == 0 || page > page_count(total, per_page) {
        1
    } else {
        page
    }
}

#[derive(Debug, Clone, PartialEq)]
/// Output of [`run_query`]: the rows of the visible page plus paging metadata.
pub struct TableView<'a, T> {
    pub rows: Vec<&'a T>,
    /// Rows that survived search and filters, before slicing.
    pub total_items: usize,
    pub page: usize,
    pub page_count: usize,
    pub range: Range<usize>,
}

impl<T: Clone> TableView<'_, T> {
    pub fn to_owned_rows(&self) -> Vec<T> {
        self.rows.iter().map(|row| (*row).clone()).collect()
    }
}

/// Runs the full pipeline (filter, sort, paginate) over the dataset.
pub fn run_query<'a, T: TableRecord>(
    rows: &'a [T],
    config: &TableConfig,
    state: &TableState,
) -> TableView<'a, T> {
    let mut matched = filter_rows(rows, &state.search, &state.filters, config);
    sort_rows(&mut matched, state.sort.as_ref());

    let total_items = matched.len();
    let page = resolve_page(state.page, total_items, state.per_page);
    let range = page_range(page, state.per_page, total_items);
    let rows = matched[range.clone()].to_vec();

    TableView {
        rows,
        total_items,
        page,
        page_count: page_count(total_items, state.per_page),
        range,
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::model::{CellValue, ColumnDef, FilterGroup, RowId};

    #[derive(Debug, Clone, PartialEq)]
    struct Fruit {
        id: u64,
        name: &'static str,
        kind: &'static str,
        stock: u64,
    }

    impl TableRecord for Fruit {
        fn row_id(&self) -> RowId {
            RowId(self.id)
        }

        fn cell(&self, key: &str) -> CellValue {
            match key {
                "name" => self.name.into(),
                "kind" => self.kind.into(),
                "stock" => self.stock.into(),
                _ => CellValue::Empty,
            }
        }
    }

    fn fruit(id: u64, name: &'static str, kind: &'static str, stock: u64) -> Fruit {
        Fruit {
            id,
            name,
            kind,
            stock,
        }
    }

    fn config() -> TableConfig {
        TableConfig::new(vec![
            ColumnDef::new("name", "Name"),
            ColumnDef::new("kind", "Kind"),
            ColumnDef::new("stock", "Stock"),
        ])
        .searchable(["name"])
        .filter_group(FilterGroup::new("Kind", "kind", ["Berry", "Pome"]))
    }

    fn ids(rows: &[&Fruit]) -> Vec<u64> {
        rows.iter().map(|row| row.id).collect()
    }

    #[test]
    fn search_is_case_insensitive_substring() {
        let rows = vec![fruit(1, "Apple", "Pome", 3), fruit(2, "Banana", "Berry", 5)];
        let matched = filter_rows(&rows, "BAN", &FilterMap::new(), &config());
        assert_eq!(ids(&matched), vec![2]);
    }

    #[test]
    fn empty_search_matches_everything() {
        let rows = vec![fruit(1, "Apple", "Pome", 3), fruit(2, "Banana", "Berry", 5)];
        let matched = filter_rows(&rows, "", &FilterMap::new(), &config());
        assert_eq!(ids(&matched), vec![1, 2]);
    }

    #[test]
    fn whitespace_is_part_of_the_search_term() {
        let rows = vec![
            fruit(1, "Apple", "Pome", 3),
            fruit(2, "Banana", "Berry", 5),
            fruit(3, "Wild ban", "Berry", 2),
        ];
        let filters = FilterMap::new();

        assert_eq!(ids(&filter_rows(&rows, " ", &filters, &config())), vec![3]);
        assert_eq!(ids(&filter_rows(&rows, " ban", &filters, &config())), vec![3]);
        assert_eq!(ids(&filter_rows(&rows, "ban", &filters, &config())), vec![2, 3]);
    }

    #[test]
    fn filter_group_keeps_only_accepted_values() {
        let rows = vec![
            fruit(1, "Apple", "Pome", 3),
            fruit(2, "Banana", "Berry", 5),
            fruit(3, "Grape", "Berry", 1),
        ];
        let mut filters = FilterMap::new();
        filters.toggle_value("Kind", "Berry");

        let matched = filter_rows(&rows, "", &filters, &config());
        assert_eq!(ids(&matched), vec![2, 3]);
        assert!(matched.iter().all(|row| row.kind == "Berry"));
    }

    #[test]
    fn search_and_filters_combine() {
        let rows = vec![
            fruit(1, "Apple", "Pome", 3),
            fruit(2, "Banana", "Berry", 5),
            fruit(3, "Grape", "Berry", 1),
        ];
        let mut filters = FilterMap::new();
        filters.toggle_value("Kind", "Berry");

        let matched = filter_rows(&rows, "ap", &filters, &config());
        assert_eq!(ids(&matched), vec![3]);
    }

    #[test]
    fn descending_sort_keeps_ties_in_input_order() {
        let rows = vec![
            fruit(1, "Apple", "Pome", 3),
            fruit(2, "Banana", "Berry", 5),
            fruit(3, "Grape", "Berry", 3),
            fruit(4, "Pear", "Pome", 5),
        ];
        let mut refs: Vec<&Fruit> = rows.iter().collect();
        sort_rows(&mut refs, Some(&SortDescriptor::descending("stock")));
        assert_eq!(ids(&refs), vec![2, 4, 1, 3]);

        sort_rows(&mut refs, Some(&SortDescriptor::ascending("stock")));
        assert_eq!(ids(&refs), vec![1, 3, 2, 4]);
    }

    #[test]
    fn no_sort_leaves_order_untouched() {
        let rows = vec![fruit(2, "Banana", "Berry", 5), fruit(1, "Apple", "Pome", 3)];
        let mut refs: Vec<&Fruit> = rows.iter().collect();
        sort_rows(&mut refs, None);
        assert_eq!(ids(&refs), vec![2, 1]);
    }

    #[test]
    fn page_math_matches_ceil_and_clamps_end() {
        assert_eq!(page_count(0, 10), 0);
        assert_eq!(page_count(21, 10), 3);
        assert_eq!(page_range(3, 10, 21), 20..21);
        assert_eq!(page_range(5, 10, 21), 21..21);
    }

    #[test]
    fn out_of_range_page_resolves_to_first_page() {
        assert_eq!(resolve_page(4, 3, 1), 1);
        assert_eq!(resolve_page(3, 3, 1), 3);
        assert_eq!(resolve_page(2, 0, 10), 1);
        assert_eq!(resolve_page(1, 0, 10), 1);
        assert_eq!(resolve_page(0, 5, 10), 1);
    }

    #[test]
    fn pages_concatenate_back_into_the_sorted_result() {
        let rows: Vec<Fruit> = (1..=23)
            .map(|id| fruit(id, "Fig", if id % 2 == 0 { "Berry" } else { "Pome" }, 24 - id))
            .collect();
        let config = config();
        let mut state = TableState::new(&config);
        state.per_page = 5;
        state.sort = Some(SortDescriptor::ascending("stock"));

        let mut collected = Vec::new();
        let pages = run_query(&rows, &config, &state).page_count;
        for page in 1..=pages {
            state.page = page;
            collected.extend(ids(&run_query(&rows, &config, &state).rows));
        }

        let expected: Vec<u64> = (1..=23).rev().collect();
        assert_eq!(collected, expected);
    }
}
