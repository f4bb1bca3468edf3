//! Wire-level contracts shared by the browser engine and its data-source
//! adapters.
//!
//! Everything here mirrors the shape of what travels over the REST boundary;
//! nothing here performs I/O.

pub mod list;
pub mod person;
pub mod record;

pub use list::{FacetOption, ListPage, NamedRef, ServerErrorBody};
pub use person::PersonKind;
pub use record::{RecordId, ResourceRecord};
