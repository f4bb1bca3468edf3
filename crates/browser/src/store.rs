//! Boundary ports of the engine: the data source, and the two presentation
//! capabilities the controller needs but does not implement (notifications
//! and destructive-action confirmation).

use async_trait::async_trait;
use contracts::ListPage;
use serde_json::Value;

use crate::error::BrowserError;
use crate::query::ResourceQuery;

/// Asynchronous data source behind a browser instance.
///
/// Futures are `?Send`: everything runs on a single cooperative thread, the
/// wasm event loop in production and a local pool in tests.
#[async_trait(?Send)]
pub trait ResourceStore<R> {
    /// One server-filtered page for `query`. The `archived` flag is part of
    /// the query — the store must never hand back a superset for the client
    /// to filter, or pagination counts drift from the remote result set.
    async fn fetch_page(&self, query: &ResourceQuery) -> Result<ListPage<R>, BrowserError>;

    async fn archive(&self, id: &str) -> Result<(), BrowserError>;
    async fn unarchive(&self, id: &str) -> Result<(), BrowserError>;
    async fn delete(&self, id: &str) -> Result<(), BrowserError>;

    /// Create (`id == None`) or update a record from a field map, returning
    /// the persisted record payload.
    async fn save(&self, id: Option<&str>, fields: &Value) -> Result<Value, BrowserError>;
}

/// Outcome notifications surfaced to the user; delivery is someone else's
/// concern.
pub trait Notices {
    fn success(&self, message: &str);
    fn error(&self, message: &str);
}

/// Injected confirmation capability for destructive actions, so the
/// lifecycle logic stays free of presentation concerns.
pub trait ConfirmPrompt {
    fn confirm(&self, message: &str) -> bool;
}
