use std::collections::BTreeSet;

use admin_runtime::{use_grid_query, ContentHeader, DataGrid, GridColumn};
use leptos::*;
use leptos_meta::Title;
use system_ui::{Badge, BadgeColor};
use table_model::{ColumnDef, FilterGroup, RowId, TableConfig, TableRecord, TableState};

use crate::data::{self, Document};

fn document_config() -> TableConfig {
    TableConfig::new(vec![
        ColumnDef::new("id", "#").width(60),
        ColumnDef::new("doc_id", "Document ID").width(160),
        ColumnDef::new("name", "Document Name"),
        ColumnDef::new("category", "Category").width(210),
        ColumnDef::new("owner", "Owner").width(210),
    ])
    .searchable(["doc_id", "name"])
    .filter_group(FilterGroup::new(
        "Category",
        "category",
        ["Legal", "Product", "Technical", "Internal"],
    ))
    .filter_group(FilterGroup::new("Owner", "owner", ["admin", "user", "developer"]))
}

fn document_columns(config: &TableConfig) -> Vec<GridColumn<Document>> {
    config
        .columns
        .iter()
        .cloned()
        .map(|def| match def.key.as_str() {
            "category" => GridColumn::new(def).render(|document: &Document| {
                let category = document.category.clone();
                view! { <Badge color=data::document_category_color(&category)>{category}</Badge> }
                    .into_view()
            }),
            "name" | "owner" => {
                let key = def.key.clone();
                GridColumn::new(def).render(move |document: &Document| {
                    let text = if key == "name" { &document.name } else { &document.owner };
                    view! { <strong>{text.clone()}</strong> }.into_view()
                })
            }
            _ => GridColumn::new(def),
        })
        .collect()
}

#[component]
pub fn DocumentsPage() -> impl IntoView {
    let documents = create_rw_signal(data::documents());
    let config = store_value(document_config());
    let table = create_rw_signal(config.with_value(TableState::new));
    let rows = Signal::derive(move || documents.get());
    let page = use_grid_query(rows, config, table);
    let columns = config.with_value(document_columns);

    view! {
        <Title text="Documents | Dealer 365" />
        <ContentHeader title="Documents" favorite_label="Documents" />
        <DataGrid
            title="List"
            rows=rows
            page=page
            config=config
            columns=columns
            state=table
            search_placeholder="Search for document ID, document name"
            filter_color=Callback::new(|(label, value): (String, String)| {
                if label == "Category" {
                    data::document_category_color(&value)
                } else {
                    BadgeColor::Zinc
                }
            })
            on_bulk_delete=Callback::new(move |selected: BTreeSet<RowId>| {
                documents.update(|documents| {
                    documents.retain(|document| !selected.contains(&document.row_id()));
                });
            })
        />
    }
}
