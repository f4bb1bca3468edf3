use contracts::FacetOption;

pub const DEFAULT_PAGE_SIZE: u32 = 10;

/// One listed column: a stable key plus its header label. How a record's
/// value for the key is rendered stays with the screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnDef {
    pub key: &'static str,
    pub label: &'static str,
}

impl ColumnDef {
    pub const fn new(key: &'static str, label: &'static str) -> Self {
        Self { key, label }
    }
}

/// Where a facet's selectable options come from.
#[derive(Debug, Clone, PartialEq)]
pub enum FacetSource {
    /// Fixed option list known at configuration time.
    Static(Vec<FacetOption>),
    /// Options fetched from a lookup endpoint. `list_key` names the array in
    /// the response body; `kind` is appended as a query parameter when set.
    Remote {
        endpoint: &'static str,
        list_key: &'static str,
        kind: Option<&'static str>,
    },
}

/// A named single-valued filter, distinct from the free-text search term.
#[derive(Debug, Clone, PartialEq)]
pub struct FacetDef {
    pub key: &'static str,
    pub label: &'static str,
    pub source: FacetSource,
}

/// Everything that distinguishes one resource screen from another.
///
/// The screens themselves are interchangeable: endpoint, columns and facets
/// come from this object, the record type and its cell/form rendering from
/// the instantiating module.
#[derive(Debug, Clone)]
pub struct BrowserConfig {
    /// Resource path, e.g. `/api/prospects`.
    pub endpoint: &'static str,
    /// Key of the record array in the list response body.
    pub resource_key: &'static str,
    /// Singular noun used in confirmation prompts and notices.
    pub singular: &'static str,
    pub page_size: u32,
    /// Delay before a facet change triggers a reload. 0 reloads immediately.
    pub facet_debounce_ms: u32,
    pub columns: Vec<ColumnDef>,
    pub facets: Vec<FacetDef>,
}

impl BrowserConfig {
    pub fn new(endpoint: &'static str, resource_key: &'static str, singular: &'static str) -> Self {
        Self {
            endpoint,
            resource_key,
            singular,
            page_size: DEFAULT_PAGE_SIZE,
            facet_debounce_ms: 0,
            columns: Vec::new(),
            facets: Vec::new(),
        }
    }

    pub fn with_columns(mut self, columns: Vec<ColumnDef>) -> Self {
        self.columns = columns;
        self
    }

    pub fn with_facets(mut self, facets: Vec<FacetDef>) -> Self {
        self.facets = facets;
        self
    }

    pub fn with_page_size(mut self, page_size: u32) -> Self {
        self.page_size = page_size;
        self
    }

    pub fn with_facet_debounce_ms(mut self, ms: u32) -> Self {
        self.facet_debounce_ms = ms;
        self
    }

    pub fn column_keys(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.columns.iter().map(|c| c.key)
    }
}
