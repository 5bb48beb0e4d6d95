use std::cmp::Ordering;
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use serde::{Deserialize, Serialize};

pub const PAGE_SIZE_OPTIONS: [usize; 4] = [10, 20, 30, 50];
pub const DEFAULT_PAGE_SIZE: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
/// Row identifier shared by parent rows and their sub-rows.
pub struct RowId(pub u64);

impl fmt::Display for RowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
/// A single field value read from a row for searching, filtering, and sorting.
pub enum CellValue {
    /// Field absent on this row.
    Empty,
    /// Numeric field.
    Number(f64),
    /// Text or enumerated field.
    Text(String),
}

impl CellValue {
    /// Text used for substring search and filter membership.
    pub fn display(&self) -> String {
        match self {
            Self::Empty => String::new(),
            Self::Number(value) if value.fract() == 0.0 && value.is_finite() => {
                format!("{}", *value as i64)
            }
            Self::Number(value) => value.to_string(),
            Self::Text(value) => value.clone(),
        }
    }

    fn rank(&self) -> u8 {
        match self {
            Self::Empty => 0,
            Self::Number(_) => 1,
            Self::Text(_) => 2,
        }
    }

    /// Total order used by column sorting.
    ///
    /// Empty cells sort before numbers, numbers before text. Numbers compare numerically and text
    /// compares lexically, so mixed columns still yield a consistent order.
    pub fn compare(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Self::Number(a), Self::Number(b)) => a.total_cmp(b),
            (Self::Text(a), Self::Text(b)) => a.cmp(b),
            _ => self.rank().cmp(&other.rank()),
        }
    }
}

impl From<&str> for CellValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for CellValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<u64> for CellValue {
    fn from(value: u64) -> Self {
        Self::Number(value as f64)
    }
}

impl From<f64> for CellValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl<T: Into<CellValue>> From<Option<T>> for CellValue {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or(Self::Empty)
    }
}

/// A row that can be displayed by the data table.
///
/// Implementors expose an identifier, named field values, and an optional ordered list of child
/// rows of the same shape.
pub trait TableRecord {
    /// Identifier used by selection and expansion.
    fn row_id(&self) -> RowId;

    /// Returns the value stored under `key`, or [`CellValue::Empty`] when absent.
    fn cell(&self, key: &str) -> CellValue;

    /// Nested rows revealed when this row is expanded.
    fn sub_rows(&self) -> &[Self]
    where
        Self: Sized,
    {
        &[]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
/// Horizontal alignment for a column's header and cells.
pub enum ColumnAlign {
    /// Left aligned (default).
    #[default]
    Left,
    /// Centered.
    Center,
    /// Right aligned.
    Right,
}

impl ColumnAlign {
    /// Stable token for `data-ui-align` hooks.
    pub fn token(self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Center => "center",
            Self::Right => "right",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// Column metadata. Rendering is attached by the UI layer.
pub struct ColumnDef {
    pub key: String,
    pub header: String,
    pub width: Option<u16>,
    pub align: ColumnAlign,
    pub sortable: bool,
}

impl ColumnDef {
    pub fn new(key: impl Into<String>, header: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            header: header.into(),
            width: None,
            align: ColumnAlign::Left,
            sortable: true,
        }
    }

    pub fn width(mut self, px: u16) -> Self {
        self.width = Some(px);
        self
    }

    pub fn align(mut self, align: ColumnAlign) -> Self {
        self.align = align;
        self
    }

    pub fn sortable(mut self, sortable: bool) -> Self {
        self.sortable = sortable;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// A multi-select filter shown in the table toolbar.
pub struct FilterGroup {
    /// Label shown on the dropdown and used as the filter-map key.
    pub label: String,
    /// Row field the accepted values are matched against.
    pub field: String,
    /// Selectable values in display order.
    pub options: Vec<String>,
}

impl FilterGroup {
    pub fn new<I, S>(label: impl Into<String>, field: impl Into<String>, options: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            label: label.into(),
            field: field.into(),
            options: options.into_iter().map(Into::into).collect(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
/// Filter-group label mapped to the set of accepted values.
///
/// Groups with an empty accepted set are never stored, so every entry is an active predicate.
pub struct FilterMap(BTreeMap<String, BTreeSet<String>>);

impl FilterMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the accepted values for `label`; an empty set removes the group.
    pub fn set_group(&mut self, label: impl Into<String>, values: BTreeSet<String>) {
        let label = label.into();
        if values.is_empty() {
            self.0.remove(&label);
        } else {
            self.0.insert(label, values);
        }
    }

    /// Adds or removes a single value from a group.
    pub fn toggle_value(&mut self, label: &str, value: &str) {
        let mut values = self.accepted(label).cloned().unwrap_or_default();
        if !values.remove(value) {
            values.insert(value.to_string());
        }
        self.set_group(label.to_string(), values);
    }

    pub fn clear_group(&mut self, label: &str) {
        self.0.remove(label);
    }

    pub fn accepted(&self, label: &str) -> Option<&BTreeSet<String>> {
        self.0.get(label)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Active groups in label order.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &BTreeSet<String>)> {
        self.0.iter()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortDirection {
    #[serde(rename = "asc")]
    Ascending,
    #[serde(rename = "desc")]
    Descending,
}

impl SortDirection {
    pub fn token(self) -> &'static str {
        match self {
            Self::Ascending => "asc",
            Self::Descending => "desc",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// The single active sort.
pub struct SortDescriptor {
    pub key: String,
    pub direction: SortDirection,
}

impl SortDescriptor {
    pub fn ascending(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            direction: SortDirection::Ascending,
        }
    }

    pub fn descending(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            direction: SortDirection::Descending,
        }
    }

    /// Sort produced by clicking the header of `key`.
    ///
    /// Only a click on the column that is currently sorted ascending flips to descending; every
    /// other click starts over at ascending.
    pub fn after_header_click(current: Option<&SortDescriptor>, key: &str) -> Self {
        match current {
            Some(current)
                if current.key == key && current.direction == SortDirection::Ascending =>
            {
                Self::descending(key)
            }
            _ => Self::ascending(key),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
/// Derived state of the header "select all" checkbox.
pub enum CheckState {
    Checked,
    Indeterminate,
    Unchecked,
}

impl CheckState {
    pub fn token(self) -> &'static str {
        match self {
            Self::Checked => "checked",
            Self::Indeterminate => "indeterminate",
            Self::Unchecked => "unchecked",
        }
    }
}

impl From<bool> for CheckState {
    fn from(checked: bool) -> Self {
        if checked {
            Self::Checked
        } else {
            Self::Unchecked
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// Static description of a table: its columns, searchable fields, filters, and page sizes.
pub struct TableConfig {
    pub columns: Vec<ColumnDef>,
    pub searchable_fields: Vec<String>,
    pub filter_groups: Vec<FilterGroup>,
    pub page_size_options: Vec<usize>,
    pub default_page_size: usize,
}

impl TableConfig {
    pub fn new(columns: Vec<ColumnDef>) -> Self {
        Self {
            columns,
            searchable_fields: Vec::new(),
            filter_groups: Vec::new(),
            page_size_options: PAGE_SIZE_OPTIONS.to_vec(),
            default_page_size: DEFAULT_PAGE_SIZE,
        }
    }

    pub fn searchable<I, S>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.searchable_fields = fields.into_iter().map(Into::into).collect();
        self
    }

    pub fn filter_group(mut self, group: FilterGroup) -> Self {
        self.filter_groups.push(group);
        self
    }

    pub fn page_size(mut self, default_page_size: usize) -> Self {
        self.default_page_size = default_page_size;
        self
    }

    pub fn column(&self, key: &str) -> Option<&ColumnDef> {
        self.columns.iter().find(|column| column.key == key)
    }

    pub fn filter(&self, label: &str) -> Option<&FilterGroup> {
        self.filter_groups.iter().find(|group| group.label == label)
    }

    pub fn column_keys(&self) -> BTreeSet<String> {
        self.columns.iter().map(|column| column.key.clone()).collect()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn header_click_cycles_between_ascending_and_descending() {
        let first = SortDescriptor::after_header_click(None, "name");
        assert_eq!(first, SortDescriptor::ascending("name"));

        let second = SortDescriptor::after_header_click(Some(&first), "name");
        assert_eq!(second, SortDescriptor::descending("name"));

        let third = SortDescriptor::after_header_click(Some(&second), "name");
        assert_eq!(third, SortDescriptor::ascending("name"));
    }

    #[test]
    fn header_click_on_other_column_starts_ascending() {
        let current = SortDescriptor::ascending("name");
        assert_eq!(
            SortDescriptor::after_header_click(Some(&current), "code"),
            SortDescriptor::ascending("code")
        );
    }

    #[test]
    fn empty_accepted_set_removes_filter_group() {
        let mut filters = FilterMap::new();
        filters.toggle_value("Status", "Active");
        assert_eq!(
            filters.accepted("Status").map(|set| set.len()),
            Some(1)
        );

        filters.toggle_value("Status", "Active");
        assert!(filters.accepted("Status").is_none());
        assert!(filters.is_empty());
    }

    #[test]
    fn cell_compare_orders_numbers_numerically_and_text_lexically() {
        assert_eq!(
            CellValue::from(9_u64).compare(&CellValue::from(10_u64)),
            Ordering::Less
        );
        assert_eq!(
            CellValue::from("Banana").compare(&CellValue::from("Apple")),
            Ordering::Greater
        );
        assert_eq!(
            CellValue::Empty.compare(&CellValue::from(1_u64)),
            Ordering::Less
        );
    }

    #[test]
    fn integral_numbers_display_without_fraction() {
        assert_eq!(CellValue::from(1_250_000_u64).display(), "1250000");
        assert_eq!(CellValue::from(2.5).display(), "2.5");
    }
}
