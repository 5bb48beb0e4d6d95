//! Mock datasets and chart series for the dashboard pages.

use std::collections::BTreeSet;

use leptos::logging;
use serde::{Deserialize, Serialize};
use system_ui::BadgeColor;
use table_model::{CellValue, RowId, TableRecord};

const DEALERS_JSON: &str = include_str!("../data/dealers.json");
const DOCUMENTS_JSON: &str = include_str!("../data/documents.json");

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
/// Dealer account, optionally grouping branch accounts as sub-rows.
pub struct Dealer {
    pub id: u64,
    pub code: String,
    pub name: String,
    pub edition: String,
    pub dealer_type: String,
    pub side_menu_set: String,
    pub active: String,
    pub creation_time: String,
    pub email: String,
    #[serde(default)]
    pub region: String,
    #[serde(default)]
    pub total_sales: u64,
    #[serde(default)]
    pub last_updated: String,
    #[serde(default)]
    pub status: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub sub_rows: Vec<Dealer>,
}

impl TableRecord for Dealer {
    fn row_id(&self) -> RowId {
        RowId(self.id)
    }

    fn cell(&self, key: &str) -> CellValue {
        match key {
            "id" => self.id.into(),
            "code" => self.code.as_str().into(),
            "name" => self.name.as_str().into(),
            "edition" => self.edition.as_str().into(),
            "dealer_type" => self.dealer_type.as_str().into(),
            "side_menu_set" => self.side_menu_set.as_str().into(),
            "active" => self.active.as_str().into(),
            "creation_time" => self.creation_time.as_str().into(),
            "email" => self.email.as_str().into(),
            "region" => self.region.as_str().into(),
            "total_sales" => self.total_sales.into(),
            "status" => self.status.as_str().into(),
            _ => CellValue::Empty,
        }
    }

    fn sub_rows(&self) -> &[Self] {
        &self.sub_rows
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    pub id: u64,
    pub doc_id: String,
    pub name: String,
    pub category: String,
    pub owner: String,
}

impl TableRecord for Document {
    fn row_id(&self) -> RowId {
        RowId(self.id)
    }

    fn cell(&self, key: &str) -> CellValue {
        match key {
            "id" => self.id.into(),
            "doc_id" => self.doc_id.as_str().into(),
            "name" => self.name.as_str().into(),
            "category" => self.category.as_str().into(),
            "owner" => self.owner.as_str().into(),
            _ => CellValue::Empty,
        }
    }
}

/// Bundled dealer dataset. A malformed bundle is logged and yields no rows.
pub fn dealers() -> Vec<Dealer> {
    serde_json::from_str(DEALERS_JSON).unwrap_or_else(|err| {
        logging::warn!("failed to parse bundled dealers: {err}");
        Vec::new()
    })
}

/// Bundled document dataset. A malformed bundle is logged and yields no rows.
pub fn documents() -> Vec<Document> {
    serde_json::from_str(DOCUMENTS_JSON).unwrap_or_else(|err| {
        logging::warn!("failed to parse bundled documents: {err}");
        Vec::new()
    })
}

/// Drops every selected dealer and every selected branch row.
pub fn remove_dealers(dealers: &mut Vec<Dealer>, selected: &BTreeSet<RowId>) {
    dealers.retain(|dealer| !selected.contains(&dealer.row_id()));
    for dealer in dealers.iter_mut() {
        dealer
            .sub_rows
            .retain(|branch| !selected.contains(&branch.row_id()));
    }
}

/// Badge colour for a dealer attribute, keyed by filter label or column key.
pub fn dealer_badge_color(field: &str, value: &str) -> BadgeColor {
    match (field, value) {
        ("Dealer Type" | "dealer_type", "Standard") => BadgeColor::Blue,
        ("Dealer Type" | "dealer_type", "Premium") => BadgeColor::Pink,
        ("Dealer Type" | "dealer_type", "Enterprise") => BadgeColor::Purple,
        ("Side Menu Set" | "side_menu_set", "SSC") => BadgeColor::Orange,
        ("Status" | "active", "Active") => BadgeColor::Green,
        _ => BadgeColor::Zinc,
    }
}

pub fn document_category_color(category: &str) -> BadgeColor {
    match category {
        "Legal" => BadgeColor::Blue,
        "Product" => BadgeColor::Pink,
        "Technical" => BadgeColor::Purple,
        _ => BadgeColor::Zinc,
    }
}

/// Headline KPI card: title, count, change versus last month, and whether the change is good news.
pub const KPI_CARDS: [(&str, u32, &str, bool); 3] = [
    ("Active Dealers Now", 142, "+2", true),
    ("Pending Approvals", 8, "-3", true),
    ("New Registrations", 3, "-1", false),
];

/// Edition rows of the "Dealers by Edition" widget with their volume labels.
pub const EDITIONS: [(&str, &str); 4] = [
    ("Standard", "120k"),
    ("Premium", "80k"),
    ("Enterprise", "50k"),
    ("Basic", "30k"),
];

/// First year plotted by the growth trend chart.
pub const GROWTH_FIRST_YEAR: u16 = 2016;
/// Upper bound of the growth chart's value axis.
pub const GROWTH_AXIS_MAX: u32 = 200;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Reporting window selected by the dashboard widget tabs.
pub enum GrowthPeriod {
    #[default]
    Daily,
    Weekly,
    Monthly,
    Yearly,
}

impl GrowthPeriod {
    pub const ALL: [Self; 4] = [Self::Daily, Self::Weekly, Self::Monthly, Self::Yearly];

    pub fn label(self) -> &'static str {
        match self {
            Self::Daily => "Daily",
            Self::Weekly => "Weekly",
            Self::Monthly => "Monthly",
            Self::Yearly => "Yearly",
        }
    }

    /// Dealer growth samples, one per year starting at [`GROWTH_FIRST_YEAR`].
    pub fn growth_series(self) -> [u32; 8] {
        match self {
            Self::Daily => [120, 135, 110, 145, 130, 150, 140, 160],
            Self::Weekly => [100, 120, 140, 130, 150, 160, 155, 170],
            Self::Monthly => [80, 100, 120, 140, 150, 160, 170, 180],
            Self::Yearly => [50, 70, 90, 110, 130, 150, 170, 190],
        }
    }

    /// Share of the active-dealer goal reached, in percent.
    pub fn goal_percent(self) -> u8 {
        match self {
            Self::Daily => 84,
            Self::Weekly => 82,
            Self::Monthly => 80,
            Self::Yearly => 78,
        }
    }

    /// Bar widths in percent for [`EDITIONS`], in the same order.
    pub fn edition_widths(self) -> [u8; 4] {
        let step = match self {
            Self::Daily => 0,
            Self::Weekly => 2,
            Self::Monthly => 4,
            Self::Yearly => 6,
        };
        [90 - step, 65 - step, 45 - step, 30 - step]
    }
}

/// SVG polyline points for `series` scaled into a `width` x `height` box.
///
/// Values are clamped to `max`; the first sample sits on the left edge and the last on the right.
pub fn sparkline_points(series: &[u32], width: u32, height: u32, max: u32) -> String {
    if series.is_empty() || max == 0 {
        return String::new();
    }
    let step = if series.len() > 1 {
        f64::from(width) / (series.len() - 1) as f64
    } else {
        0.0
    };
    series
        .iter()
        .enumerate()
        .map(|(index, value)| {
            let x = step * index as f64;
            let y = f64::from(height) * (1.0 - f64::from((*value).min(max)) / f64::from(max));
            format!("{x:.1},{y:.1}")
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn bundled_dealers_parse_with_branch_rows() {
        let dealers = dealers();
        assert_eq!(dealers.len(), 80);
        assert_eq!(dealers[0].code, "A11AD70701");
        assert_eq!(
            dealers[0]
                .sub_rows()
                .iter()
                .map(|branch| branch.id)
                .collect::<Vec<_>>(),
            vec![101, 102]
        );
    }

    #[test]
    fn bundled_documents_parse() {
        let documents = documents();
        assert_eq!(documents.len(), 10);
        assert_eq!(documents[0].doc_id, "DE-2024-001");
        assert_eq!(documents[0].cell("category").display(), "Legal");
    }

    #[test]
    fn dealer_ids_are_unique_across_branches() {
        let dealers = dealers();
        let mut ids = std::collections::BTreeSet::new();
        for dealer in &dealers {
            assert!(ids.insert(dealer.id));
            for branch in dealer.sub_rows() {
                assert!(ids.insert(branch.id), "duplicate id {}", branch.id);
            }
        }
    }

    #[test]
    fn removing_dealers_drops_selected_parents_and_branches() {
        let mut dealers = dealers();
        let selected: BTreeSet<RowId> = [RowId(2), RowId(101)].into_iter().collect();
        remove_dealers(&mut dealers, &selected);

        assert!(dealers.iter().all(|dealer| dealer.id != 2));
        assert_eq!(
            dealers[0].sub_rows.iter().map(|branch| branch.id).collect::<Vec<_>>(),
            vec![102]
        );
    }

    #[test]
    fn badge_colors_match_filter_labels_and_columns() {
        assert_eq!(dealer_badge_color("Dealer Type", "Premium"), BadgeColor::Pink);
        assert_eq!(dealer_badge_color("dealer_type", "Premium"), BadgeColor::Pink);
        assert_eq!(dealer_badge_color("Status", "Inactive"), BadgeColor::Zinc);
        assert_eq!(dealer_badge_color("Side Menu Set", "SSC"), BadgeColor::Orange);
        assert_eq!(document_category_color("Internal"), BadgeColor::Zinc);
    }

    #[test]
    fn edition_widths_shrink_with_longer_periods() {
        assert_eq!(GrowthPeriod::Daily.edition_widths(), [90, 65, 45, 30]);
        assert_eq!(GrowthPeriod::Yearly.edition_widths(), [84, 59, 39, 24]);
    }

    #[test]
    fn sparkline_spans_the_box() {
        assert_eq!(
            sparkline_points(&[0, 100, 200], 100, 50, 200),
            "0.0,50.0 50.0,25.0 100.0,0.0"
        );
        assert_eq!(sparkline_points(&[], 100, 50, 200), "");
    }
}
