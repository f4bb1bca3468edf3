use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::record::RecordId;

/// One page of a server-filtered listing.
///
/// The wire response keys the record array by resource name
/// (`{"prospects": [...], "pages": 7}`), so the adapter assembles this
/// struct manually instead of deriving `Deserialize`.
#[derive(Debug, Clone, PartialEq)]
pub struct ListPage<R> {
    pub records: Vec<R>,
    pub pages: u32,
}

impl<R> ListPage<R> {
    pub fn empty() -> Self {
        Self {
            records: Vec::new(),
            pages: 0,
        }
    }
}

/// Reference to a related record carried inline on a listing row
/// (`{"id": 3, "name": "In negotiation"}`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NamedRef {
    pub id: RecordId,
    pub name: String,
}

/// A selectable option for a facet filter.
#[derive(Debug, Clone, PartialEq)]
pub struct FacetOption {
    pub id: String,
    pub name: String,
}

impl FacetOption {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }

    /// Lenient extraction from an untyped option payload. Ids arrive as
    /// either strings or integers depending on the backend.
    pub fn from_value(value: &Value) -> Option<Self> {
        let id = match value.get("id")? {
            Value::String(s) => s.clone(),
            Value::Number(n) => n.to_string(),
            _ => return None,
        };
        let name = value.get("name")?.as_str()?.to_string();
        Some(Self { id, name })
    }
}

/// Error payload a mutation endpoint returns on failure.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerErrorBody {
    pub error: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn facet_option_reads_string_and_integer_ids() {
        let opt = FacetOption::from_value(&json!({"id": 3, "name": "Open"})).unwrap();
        assert_eq!(opt.id, "3");
        assert_eq!(opt.name, "Open");

        let opt = FacetOption::from_value(&json!({"id": "x9", "name": "Won"})).unwrap();
        assert_eq!(opt.id, "x9");
    }

    #[test]
    fn facet_option_rejects_malformed_payloads() {
        assert!(FacetOption::from_value(&json!({"name": "no id"})).is_none());
        assert!(FacetOption::from_value(&json!({"id": 1})).is_none());
        assert!(FacetOption::from_value(&json!({"id": [], "name": "bad"})).is_none());
    }

    #[test]
    fn named_ref_round_trips() {
        let r: NamedRef = serde_json::from_value(json!({"id": 5, "name": "Maria"})).unwrap();
        assert_eq!(r.id.as_str(), "5");
        assert_eq!(r.name, "Maria");
    }
}
