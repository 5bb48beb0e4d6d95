//! Cascading row selection and the derived header checkbox state.

use std::collections::BTreeSet;

use crate::model::{CheckState, RowId, TableRecord};

/// Toggles `id` and cascades the same change onto `sub_row_ids`.
///
/// A selected row is removed together with all of its children; an unselected row is added
/// together with all of its children.
pub fn toggle_row(
    selection: &mut BTreeSet<RowId>,
    id: RowId,
    sub_row_ids: impl IntoIterator<Item = RowId>,
) {
    if selection.remove(&id) {
        for child in sub_row_ids {
            selection.remove(&child);
        }
    } else {
        selection.insert(id);
        selection.extend(sub_row_ids);
    }
}

/// Every top-level id plus every sub-row id across `rows`.
pub fn all_selectable_ids<T: TableRecord>(rows: &[T]) -> BTreeSet<RowId> {
    let mut ids = BTreeSet::new();
    for row in rows {
        ids.insert(row.row_id());
        ids.extend(row.sub_rows().iter().map(|child| child.row_id()));
    }
    ids
}

/// Clears the selection when everything is selected, otherwise selects everything.
pub fn toggle_all(selection: &mut BTreeSet<RowId>, selectable: BTreeSet<RowId>) {
    if selection.len() == selectable.len() {
        selection.clear();
    } else {
        *selection = selectable;
    }
}

/// Header checkbox state derived from how many of the selectable rows are selected.
pub fn header_check_state(selected: usize, selectable: usize) -> CheckState {
    if selectable > 0 && selected == selectable {
        CheckState::Checked
    } else if selected > 0 {
        CheckState::Indeterminate
    } else {
        CheckState::Unchecked
    }
}

/// Child ids of `row`, in display order.
pub fn sub_row_ids<T: TableRecord>(row: &T) -> Vec<RowId> {
    row.sub_rows().iter().map(|child| child.row_id()).collect()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::model::CellValue;

    #[derive(Debug, Clone)]
    struct Node {
        id: u64,
        children: Vec<Node>,
    }

    impl TableRecord for Node {
        fn row_id(&self) -> RowId {
            RowId(self.id)
        }

        fn cell(&self, _key: &str) -> CellValue {
            CellValue::Empty
        }

        fn sub_rows(&self) -> &[Self] {
            &self.children
        }
    }

    fn leaf(id: u64) -> Node {
        Node {
            id,
            children: Vec::new(),
        }
    }

    fn set(ids: &[u64]) -> BTreeSet<RowId> {
        ids.iter().copied().map(RowId).collect()
    }

    #[test]
    fn toggling_parent_cascades_to_children() {
        let mut selection = BTreeSet::new();
        toggle_row(&mut selection, RowId(1), [RowId(11), RowId(12)]);
        assert_eq!(selection, set(&[1, 11, 12]));

        toggle_row(&mut selection, RowId(1), [RowId(11), RowId(12)]);
        assert_eq!(selection, set(&[]));
    }

    #[test]
    fn deselecting_parent_removes_children_selected_individually() {
        let mut selection = set(&[1, 11, 12, 2]);
        toggle_row(&mut selection, RowId(12), Vec::<RowId>::new());
        assert_eq!(selection, set(&[1, 11, 2]));

        toggle_row(&mut selection, RowId(1), [RowId(11), RowId(12)]);
        assert_eq!(selection, set(&[2]));
    }

    #[test]
    fn toggle_all_twice_returns_to_empty() {
        let rows = vec![
            Node {
                id: 1,
                children: vec![leaf(11), leaf(12)],
            },
            leaf(2),
        ];
        let mut selection = BTreeSet::new();

        toggle_all(&mut selection, all_selectable_ids(&rows));
        assert_eq!(selection, set(&[1, 2, 11, 12]));

        toggle_all(&mut selection, all_selectable_ids(&rows));
        assert!(selection.is_empty());
    }

    #[test]
    fn partial_selection_is_completed_by_toggle_all() {
        let rows = vec![leaf(1), leaf(2), leaf(3)];
        let mut selection = set(&[2]);
        toggle_all(&mut selection, all_selectable_ids(&rows));
        assert_eq!(selection, set(&[1, 2, 3]));
    }

    #[test]
    fn header_state_is_derived_from_counts() {
        assert_eq!(header_check_state(0, 0), CheckState::Unchecked);
        assert_eq!(header_check_state(0, 4), CheckState::Unchecked);
        assert_eq!(header_check_state(2, 4), CheckState::Indeterminate);
        assert_eq!(header_check_state(4, 4), CheckState::Checked);
    }
}
