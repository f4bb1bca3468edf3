use browser::{BrowserConfig, ColumnDef, FacetDef, FacetSource};
use contracts::{FacetOption, RecordId, ResourceRecord};
use leptos::prelude::*;
use serde::{Deserialize, Serialize};

use crate::shared::components::browser_page::BrowserPage;

mod form;

/// Lookup kinds the category endpoint serves. They back this screen's kind
/// facet and the other screens' facet/form selects.
pub const CATEGORY_KINDS: &[(&str, &str)] = &[
    ("negotiation_status", "Negotiation status"),
    ("contract_nature", "Contract nature"),
    ("followup", "Follow-up"),
    ("city", "City"),
    ("consultant", "Consultant"),
    ("acceptance_kind", "Acceptance kind"),
    ("pendency_status", "Pendency status"),
];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub id: RecordId,
    #[serde(default)]
    pub archived: bool,
    pub name: String,
    pub kind: String,
    #[serde(default)]
    pub notes: Option<String>,
}

impl ResourceRecord for Category {
    fn id(&self) -> &str {
        self.id.as_str()
    }

    fn archived(&self) -> bool {
        self.archived
    }
}

pub fn browser_config() -> BrowserConfig {
    BrowserConfig::new("/api/categories", "categories", "category")
        .with_columns(vec![
            ColumnDef::new("name", "Name"),
            ColumnDef::new("kind", "Kind"),
            ColumnDef::new("notes", "Notes"),
        ])
        .with_facets(vec![FacetDef {
            key: "kind",
            label: "Kind",
            source: FacetSource::Static(
                CATEGORY_KINDS
                    .iter()
                    .map(|(id, name)| FacetOption::new(*id, *name))
                    .collect(),
            ),
        }])
}

fn kind_label(kind: &str) -> &str {
    CATEGORY_KINDS
        .iter()
        .find(|(id, _)| *id == kind)
        .map(|(_, name)| *name)
        .unwrap_or(kind)
}

fn cell(col: &ColumnDef, record: &Category) -> String {
    match col.key {
        "name" => record.name.clone(),
        "kind" => kind_label(&record.kind).to_string(),
        "notes" => record.notes.clone().unwrap_or_else(|| "-".to_string()),
        _ => "-".to_string(),
    }
}

#[component]
#[allow(non_snake_case)]
pub fn CategoriesPage() -> impl IntoView {
    view! {
        <BrowserPage
            config=browser_config()
            title="Categories"
            cell=cell
            form=form::render
        />
    }
}
