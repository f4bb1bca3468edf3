use browser::{BrowserConfig, ColumnDef, FacetDef, FacetSource};
use contracts::{NamedRef, PersonKind, RecordId, ResourceRecord};
use leptos::prelude::*;
use serde::{Deserialize, Serialize};

use crate::shared::components::browser_page::BrowserPage;
use crate::shared::date_utils::format_iso_date;

mod form;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Prospect {
    pub id: RecordId,
    #[serde(default)]
    pub archived: bool,
    #[serde(default)]
    pub contract_number: Option<String>,
    pub name: String,
    #[serde(default)]
    pub person_kind: PersonKind,
    #[serde(default)]
    pub tax_id: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub entry_date: Option<String>,
    #[serde(default)]
    pub status: Option<NamedRef>,
    #[serde(default)]
    pub consultant: Option<NamedRef>,
}

impl ResourceRecord for Prospect {
    fn id(&self) -> &str {
        self.id.as_str()
    }

    fn archived(&self) -> bool {
        self.archived
    }
}

/// Negotiation statuses come from the category lookup endpoint; the same
/// source feeds both the facet select and the form's status select.
fn status_source() -> FacetSource {
    FacetSource::Remote {
        endpoint: "/api/categories",
        list_key: "categories",
        kind: Some("negotiation_status"),
    }
}

pub fn browser_config() -> BrowserConfig {
    BrowserConfig::new("/api/prospects", "prospects", "prospect")
        .with_columns(vec![
            ColumnDef::new("contract_number", "Contract #"),
            ColumnDef::new("name", "Name"),
            ColumnDef::new("person_kind", "Kind"),
            ColumnDef::new("tax_id", "Tax ID"),
            ColumnDef::new("phone", "Phone"),
            ColumnDef::new("entry_date", "Entry date"),
            ColumnDef::new("status", "Status"),
            ColumnDef::new("consultant", "Consultant"),
        ])
        .with_facets(vec![FacetDef {
            key: "status_id",
            label: "Status",
            source: status_source(),
        }])
}

fn cell(col: &ColumnDef, record: &Prospect) -> String {
    match col.key {
        "contract_number" => record
            .contract_number
            .clone()
            .unwrap_or_else(|| "-".to_string()),
        "name" => record.name.clone(),
        "person_kind" => record.person_kind.label().to_string(),
        "tax_id" => record.tax_id.clone(),
        "phone" => record.phone.clone(),
        "entry_date" => record
            .entry_date
            .as_deref()
            .map(format_iso_date)
            .unwrap_or_else(|| "-".to_string()),
        "status" => record
            .status
            .as_ref()
            .map(|s| s.name.clone())
            .unwrap_or_else(|| "-".to_string()),
        "consultant" => record
            .consultant
            .as_ref()
            .map(|c| c.name.clone())
            .unwrap_or_else(|| "-".to_string()),
        _ => "-".to_string(),
    }
}

#[component]
#[allow(non_snake_case)]
pub fn ProspectsPage() -> impl IntoView {
    view! {
        <BrowserPage
            config=browser_config()
            title="Prospects"
            cell=cell
            form=form::render
        />
    }
}
