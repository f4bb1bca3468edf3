use std::collections::BTreeMap;

/// Query state a browser instance holds against its data source.
///
/// Invariant: `page` stays within `[1, total_pages]` whenever the source
/// reports at least one page, and is pinned to 1 otherwise. The controller
/// enforces this on every navigation and on every applied response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceQuery {
    pub page: u32,
    pub page_size: u32,
    pub search_term: String,
    pub archived: bool,
    pub facets: BTreeMap<String, String>,
}

impl ResourceQuery {
    pub fn new(page_size: u32) -> Self {
        Self {
            page: 1,
            page_size,
            search_term: String::new(),
            archived: false,
            facets: BTreeMap::new(),
        }
    }

    /// Set or clear a facet; an empty value means "all" and removes the key.
    pub fn set_facet(&mut self, key: &str, value: &str) {
        if value.is_empty() {
            self.facets.remove(key);
        } else {
            self.facets.insert(key.to_string(), value.to_string());
        }
    }

    pub fn facet(&self, key: &str) -> Option<&str> {
        self.facets.get(key).map(String::as_str)
    }

    pub fn active_facet_count(&self) -> usize {
        self.facets.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_on_first_page_with_no_filters() {
        let query = ResourceQuery::new(10);
        assert_eq!(query.page, 1);
        assert_eq!(query.page_size, 10);
        assert!(!query.archived);
        assert!(query.facets.is_empty());
    }

    #[test]
    fn empty_facet_value_clears_the_key() {
        let mut query = ResourceQuery::new(10);
        query.set_facet("status_id", "3");
        assert_eq!(query.facet("status_id"), Some("3"));
        query.set_facet("status_id", "");
        assert_eq!(query.facet("status_id"), None);
        assert_eq!(query.active_facet_count(), 0);
    }
}
