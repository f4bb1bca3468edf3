use browser::{BrowserConfig, ColumnDef, FacetDef, FacetSource};
use contracts::{NamedRef, RecordId, ResourceRecord};
use leptos::prelude::*;
use serde::{Deserialize, Serialize};

use crate::shared::components::browser_page::BrowserPage;
use crate::shared::date_utils::format_iso_date;

mod form;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pendency {
    pub id: RecordId,
    #[serde(default)]
    pub archived: bool,
    pub title: String,
    #[serde(default)]
    pub due_date: Option<String>,
    #[serde(default)]
    pub status: Option<NamedRef>,
    #[serde(default)]
    pub client: Option<NamedRef>,
    #[serde(default)]
    pub notes: Option<String>,
}

impl ResourceRecord for Pendency {
    fn id(&self) -> &str {
        self.id.as_str()
    }

    fn archived(&self) -> bool {
        self.archived
    }
}

fn status_source() -> FacetSource {
    FacetSource::Remote {
        endpoint: "/api/categories",
        list_key: "categories",
        kind: Some("pendency_status"),
    }
}

fn client_source() -> FacetSource {
    FacetSource::Remote {
        endpoint: "/api/clients",
        list_key: "clients",
        kind: None,
    }
}

pub fn browser_config() -> BrowserConfig {
    BrowserConfig::new("/api/pendencies", "pendencies", "pendency")
        .with_columns(vec![
            ColumnDef::new("title", "Title"),
            ColumnDef::new("client", "Client"),
            ColumnDef::new("status", "Status"),
            ColumnDef::new("due_date", "Due date"),
        ])
        .with_facets(vec![
            FacetDef {
                key: "status_id",
                label: "Status",
                source: status_source(),
            },
            FacetDef {
                key: "client_id",
                label: "Client",
                source: client_source(),
            },
        ])
}

fn cell(col: &ColumnDef, record: &Pendency) -> String {
    match col.key {
        "title" => record.title.clone(),
        "client" => record
            .client
            .as_ref()
            .map(|c| c.name.clone())
            .unwrap_or_else(|| "-".to_string()),
        "status" => record
            .status
            .as_ref()
            .map(|s| s.name.clone())
            .unwrap_or_else(|| "-".to_string()),
        "due_date" => record
            .due_date
            .as_deref()
            .map(format_iso_date)
            .unwrap_or_else(|| "-".to_string()),
        _ => "-".to_string(),
    }
}

#[component]
#[allow(non_snake_case)]
pub fn PendenciesPage() -> impl IntoView {
    view! {
        <BrowserPage
            config=browser_config()
            title="Pendencies"
            cell=cell
            form=form::render
        />
    }
}
