//! Generic resource-browser engine.
//!
//! One configuration-driven controller replaces the per-entity copies of the
//! same screen: server-paginated listing with free-text search and facet
//! filters, an archived/active view toggle, archive/unarchive/delete row
//! actions and a list ↔ form mode switch. The engine is UI-agnostic and does
//! no I/O of its own; a [`store::ResourceStore`] adapter owns the transport.

pub mod columns;
pub mod config;
mod hook;
pub mod controller;
pub mod error;
pub mod lifecycle;
pub mod mask;
pub mod page_window;
pub mod query;
pub mod store;
pub mod view_mode;

pub use columns::ColumnVisibility;
pub use config::{BrowserConfig, ColumnDef, FacetDef, FacetSource};
pub use controller::ResourceBrowser;
pub use error::{BrowserError, FieldIssue};
pub use lifecycle::{ArchiveState, LifecycleError};
pub use mask::{format_phone, format_tax_id, strip_digits};
pub use page_window::{page_window, PageWindow};
pub use query::ResourceQuery;
pub use store::{ConfirmPrompt, Notices, ResourceStore};
pub use view_mode::{ViewMode, ViewModeSwitch};
