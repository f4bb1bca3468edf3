use std::cell::{Cell, RefCell};
use std::rc::Rc;

use contracts::ResourceRecord;

use crate::config::BrowserConfig;
use crate::hook::ChangeHook;
use crate::lifecycle::ArchiveState;
use crate::query::ResourceQuery;
use crate::store::{ConfirmPrompt, Notices, ResourceStore};

/// Owns one screen's query state and record cache, and orchestrates fetches
/// against the data source.
///
/// Ordering contract is last-request-wins: every list fetch takes a
/// monotonically increasing token, and a response is applied only when its
/// token is still the most recently issued one. Stale responses are dropped
/// without touching displayed state. Row mutations carry no ordering
/// guarantee of their own; each is followed by an explicit reload.
///
/// All state sits behind `Cell`/`RefCell` and every mutation happens on the
/// single cooperative thread, so no borrow is ever held across an await.
pub struct ResourceBrowser<R> {
    config: BrowserConfig,
    store: Rc<dyn ResourceStore<R>>,
    notices: Rc<dyn Notices>,
    confirm: Rc<dyn ConfirmPrompt>,
    query: RefCell<ResourceQuery>,
    records: RefCell<Vec<R>>,
    total_pages: Cell<u32>,
    is_loading: Cell<bool>,
    last_issued: Cell<u64>,
    hook: ChangeHook,
}

impl<R: ResourceRecord + Clone + 'static> ResourceBrowser<R> {
    pub fn new(
        config: BrowserConfig,
        store: Rc<dyn ResourceStore<R>>,
        notices: Rc<dyn Notices>,
        confirm: Rc<dyn ConfirmPrompt>,
    ) -> Self {
        let query = ResourceQuery::new(config.page_size);
        Self {
            config,
            store,
            notices,
            confirm,
            query: RefCell::new(query),
            records: RefCell::new(Vec::new()),
            total_pages: Cell::new(0),
            is_loading: Cell::new(false),
            last_issued: Cell::new(0),
            hook: ChangeHook::default(),
        }
    }

    pub fn set_on_change(&self, listener: impl Fn() + 'static) {
        self.hook.set(listener);
    }

    pub fn config(&self) -> &BrowserConfig {
        &self.config
    }

    pub fn query(&self) -> ResourceQuery {
        self.query.borrow().clone()
    }

    pub fn records(&self) -> Vec<R> {
        self.records.borrow().clone()
    }

    pub fn total_pages(&self) -> u32 {
        self.total_pages.get()
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading.get()
    }

    pub fn showing_archived(&self) -> bool {
        self.query.borrow().archived
    }

    /// Update the search term locally. Deliberately does not fetch: search
    /// is explicit-submit, unlike facets.
    pub fn set_search_term(&self, term: &str) {
        self.query.borrow_mut().search_term = term.to_string();
        self.hook.notify();
    }

    pub async fn submit_search(&self) {
        self.query.borrow_mut().page = 1;
        self.run_fetch().await;
    }

    /// Set or clear (`value == ""`) a facet and refetch from page 1.
    /// Reload timing is the UI layer's business when a facet debounce is
    /// configured; the engine itself always reloads immediately.
    pub async fn set_facet(&self, key: &str, value: &str) {
        {
            let mut query = self.query.borrow_mut();
            query.set_facet(key, value);
            query.page = 1;
        }
        self.run_fetch().await;
    }

    /// Flip between the active and archived views. Always refetches: the
    /// list is server-filtered by the archived flag, never narrowed from a
    /// client-side superset.
    pub async fn toggle_archived_view(&self) {
        {
            let mut query = self.query.borrow_mut();
            query.archived = !query.archived;
            query.page = 1;
        }
        self.run_fetch().await;
    }

    pub async fn go_to_page(&self, page: u32) {
        let upper = self.total_pages.get().max(1);
        self.query.borrow_mut().page = page.clamp(1, upper);
        self.run_fetch().await;
    }

    pub async fn reload(&self) {
        self.run_fetch().await;
    }

    async fn run_fetch(&self) {
        loop {
            let token = self.last_issued.get() + 1;
            self.last_issued.set(token);
            self.is_loading.set(true);
            self.hook.notify();

            let query = self.query.borrow().clone();
            let result = self.store.fetch_page(&query).await;

            if self.last_issued.get() != token {
                log::debug!(
                    "discarding stale {} response (token {token})",
                    self.config.resource_key
                );
                return;
            }

            match result {
                Ok(page) => {
                    self.is_loading.set(false);
                    *self.records.borrow_mut() = page.records;
                    self.total_pages.set(page.pages);

                    let current = self.query.borrow().page;
                    if page.pages == 0 {
                        self.query.borrow_mut().page = 1;
                    } else if current > page.pages {
                        // The result set shrank under us; land on the last
                        // page that still exists.
                        self.query.borrow_mut().page = page.pages;
                        continue;
                    }
                    self.hook.notify();
                }
                Err(err) => {
                    self.is_loading.set(false);
                    self.notices.error(&format!(
                        "Failed to load {} list: {err}",
                        self.config.singular
                    ));
                    self.hook.notify();
                }
            }
            return;
        }
    }

    pub async fn archive(&self, record: &R) {
        if !self
            .confirm
            .confirm(&format!("Archive this {}?", self.config.singular))
        {
            return;
        }
        if let Err(err) = ArchiveState::from_flag(record.archived()).archive() {
            self.notices.error(&err.to_string());
            return;
        }
        match self.store.archive(record.id()).await {
            Ok(()) => {
                self.notices
                    .success(&format!("{} archived", self.config.singular));
                self.run_fetch().await;
            }
            Err(err) => self
                .notices
                .error(&format!("Failed to archive {}: {err}", self.config.singular)),
        }
    }

    /// Restore an archived record. Only offered while the archived view is
    /// active; elsewhere the action is not reachable and is ignored.
    pub async fn unarchive(&self, record: &R) {
        if !self.query.borrow().archived {
            log::warn!("unarchive requested outside the archived view");
            return;
        }
        if let Err(err) = ArchiveState::from_flag(record.archived()).unarchive() {
            self.notices.error(&err.to_string());
            return;
        }
        match self.store.unarchive(record.id()).await {
            Ok(()) => {
                self.notices
                    .success(&format!("{} unarchived", self.config.singular));
                self.run_fetch().await;
            }
            Err(err) => self.notices.error(&format!(
                "Failed to unarchive {}: {err}",
                self.config.singular
            )),
        }
    }

    pub async fn delete(&self, record: &R) {
        let message = format!(
            "Permanently delete this {}? This cannot be undone.",
            self.config.singular
        );
        if !self.confirm.confirm(&message) {
            return;
        }
        if let Err(err) = ArchiveState::from_flag(record.archived()).delete() {
            self.notices.error(&err.to_string());
            return;
        }
        match self.store.delete(record.id()).await {
            Ok(()) => {
                self.notices
                    .success(&format!("{} deleted", self.config.singular));
                self.run_fetch().await;
            }
            Err(err) => self
                .notices
                .error(&format!("Failed to delete {}: {err}", self.config.singular)),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::VecDeque;

    use async_trait::async_trait;
    use contracts::ListPage;
    use futures::channel::oneshot;
    use futures::executor::LocalPool;
    use futures::task::LocalSpawnExt;
    use serde_json::{json, Value};

    use super::*;
    use crate::error::BrowserError;

    #[derive(Debug, Clone, PartialEq)]
    struct TestRecord {
        id: String,
        archived: bool,
    }

    impl TestRecord {
        fn active(id: &str) -> Self {
            Self {
                id: id.to_string(),
                archived: false,
            }
        }

        fn archived(id: &str) -> Self {
            Self {
                id: id.to_string(),
                archived: true,
            }
        }
    }

    impl ResourceRecord for TestRecord {
        fn id(&self) -> &str {
            &self.id
        }

        fn archived(&self) -> bool {
            self.archived
        }
    }

    type FetchReply = oneshot::Sender<Result<ListPage<TestRecord>, BrowserError>>;

    #[derive(Default)]
    struct MockStore {
        pending: RefCell<VecDeque<(ResourceQuery, FetchReply)>>,
        ops: RefCell<Vec<String>>,
    }

    impl MockStore {
        fn pending_count(&self) -> usize {
            self.pending.borrow().len()
        }

        fn resolve_next(&self, records: Vec<TestRecord>, pages: u32) -> ResourceQuery {
            let (query, reply) = self
                .pending
                .borrow_mut()
                .pop_front()
                .expect("no pending fetch");
            let _ = reply.send(Ok(ListPage { records, pages }));
            query
        }

        fn fail_next(&self, err: BrowserError) -> ResourceQuery {
            let (query, reply) = self
                .pending
                .borrow_mut()
                .pop_front()
                .expect("no pending fetch");
            let _ = reply.send(Err(err));
            query
        }
    }

    #[async_trait(?Send)]
    impl ResourceStore<TestRecord> for MockStore {
        async fn fetch_page(
            &self,
            query: &ResourceQuery,
        ) -> Result<ListPage<TestRecord>, BrowserError> {
            let (tx, rx) = oneshot::channel();
            self.pending.borrow_mut().push_back((query.clone(), tx));
            rx.await.expect("mock reply dropped")
        }

        async fn archive(&self, id: &str) -> Result<(), BrowserError> {
            self.ops.borrow_mut().push(format!("archive:{id}"));
            Ok(())
        }

        async fn unarchive(&self, id: &str) -> Result<(), BrowserError> {
            self.ops.borrow_mut().push(format!("unarchive:{id}"));
            Ok(())
        }

        async fn delete(&self, id: &str) -> Result<(), BrowserError> {
            self.ops.borrow_mut().push(format!("delete:{id}"));
            Ok(())
        }

        async fn save(&self, id: Option<&str>, _fields: &Value) -> Result<Value, BrowserError> {
            self.ops
                .borrow_mut()
                .push(format!("save:{}", id.unwrap_or("new")));
            Ok(json!({}))
        }
    }

    #[derive(Default)]
    struct TestNotices {
        successes: RefCell<Vec<String>>,
        errors: RefCell<Vec<String>>,
    }

    impl Notices for TestNotices {
        fn success(&self, message: &str) {
            self.successes.borrow_mut().push(message.to_string());
        }

        fn error(&self, message: &str) {
            self.errors.borrow_mut().push(message.to_string());
        }
    }

    struct TestConfirm {
        answer: Cell<bool>,
        asked: Cell<usize>,
    }

    impl TestConfirm {
        fn answering(answer: bool) -> Self {
            Self {
                answer: Cell::new(answer),
                asked: Cell::new(0),
            }
        }
    }

    impl ConfirmPrompt for TestConfirm {
        fn confirm(&self, _message: &str) -> bool {
            self.asked.set(self.asked.get() + 1);
            self.answer.get()
        }
    }

    struct Fixture {
        pool: LocalPool,
        browser: Rc<ResourceBrowser<TestRecord>>,
        store: Rc<MockStore>,
        notices: Rc<TestNotices>,
        confirm: Rc<TestConfirm>,
    }

    fn fixture() -> Fixture {
        fixture_with_confirm(true)
    }

    fn fixture_with_confirm(answer: bool) -> Fixture {
        let store = Rc::new(MockStore::default());
        let notices = Rc::new(TestNotices::default());
        let confirm = Rc::new(TestConfirm::answering(answer));
        let browser = Rc::new(ResourceBrowser::new(
            BrowserConfig::new("/api/things", "things", "thing"),
            store.clone(),
            notices.clone(),
            confirm.clone(),
        ));
        Fixture {
            pool: LocalPool::new(),
            browser,
            store,
            notices,
            confirm,
        }
    }

    impl Fixture {
        /// Spawn a browser call and run the pool until it parks on the mock.
        fn drive<F, Fut>(&mut self, call: F)
        where
            F: FnOnce(Rc<ResourceBrowser<TestRecord>>) -> Fut,
            Fut: std::future::Future<Output = ()> + 'static,
        {
            let future = call(self.browser.clone());
            self.pool.spawner().spawn_local(future).expect("spawn");
            self.pool.run_until_stalled();
        }

        fn settle(&mut self) {
            self.pool.run_until_stalled();
        }
    }

    #[test]
    fn submit_search_resets_to_page_one() {
        let mut fx = fixture();
        fx.drive(|b| async move { b.reload().await });
        fx.store.resolve_next(vec![TestRecord::active("1")], 5);
        fx.settle();

        fx.drive(|b| async move { b.go_to_page(3).await });
        let query = fx.store.resolve_next(Vec::new(), 5);
        assert_eq!(query.page, 3);
        fx.settle();

        fx.browser.set_search_term("acme");
        fx.drive(|b| async move { b.submit_search().await });
        let query = fx.store.resolve_next(Vec::new(), 1);
        assert_eq!(query.page, 1);
        assert_eq!(query.search_term, "acme");
        fx.settle();
    }

    #[test]
    fn setting_the_search_term_does_not_fetch() {
        let fx = fixture();
        fx.browser.set_search_term("acme");
        assert_eq!(fx.store.pending_count(), 0);
        assert_eq!(fx.browser.query().search_term, "acme");
    }

    #[test]
    fn facet_change_fetches_from_page_one() {
        let mut fx = fixture();
        fx.drive(|b| async move { b.set_facet("status_id", "3").await });
        let query = fx.store.resolve_next(Vec::new(), 1);
        assert_eq!(query.page, 1);
        assert_eq!(query.facet("status_id"), Some("3"));
        fx.settle();

        fx.drive(|b| async move { b.set_facet("status_id", "").await });
        let query = fx.store.resolve_next(Vec::new(), 1);
        assert_eq!(query.facet("status_id"), None);
        fx.settle();
    }

    #[test]
    fn last_request_wins() {
        let mut fx = fixture();
        // Fetch A (active view) parks on the mock, then fetch B (archived
        // view) is issued with a later token.
        fx.drive(|b| async move { b.reload().await });
        fx.drive(|b| async move { b.toggle_archived_view().await });
        assert_eq!(fx.store.pending_count(), 2);

        // B resolves first and is applied.
        {
            let mut pending = fx.store.pending.borrow_mut();
            let (query_b, reply_b) = pending.pop_back().expect("fetch B");
            assert!(query_b.archived);
            let _ = reply_b.send(Ok(ListPage {
                records: vec![TestRecord::archived("b")],
                pages: 1,
            }));
        }
        fx.settle();
        assert_eq!(fx.browser.records(), vec![TestRecord::archived("b")]);

        // A resolves late and must be discarded silently.
        fx.store.resolve_next(vec![TestRecord::active("a")], 9);
        fx.settle();
        assert_eq!(fx.browser.records(), vec![TestRecord::archived("b")]);
        assert_eq!(fx.browser.total_pages(), 1);
        assert!(!fx.browser.is_loading());
    }

    #[test]
    fn toggling_archived_resets_page_and_discards_pending_fetch() {
        let mut fx = fixture();
        fx.drive(|b| async move { b.reload().await });
        fx.store.resolve_next(vec![TestRecord::active("1")], 3);
        fx.settle();

        // Navigate to the last page but leave that fetch in flight.
        fx.drive(|b| async move { b.go_to_page(3).await });
        assert_eq!(fx.store.pending_count(), 1);

        fx.drive(|b| async move { b.toggle_archived_view().await });
        assert_eq!(fx.store.pending_count(), 2);

        // The stale page-3 fetch for the active view resolves late.
        let stale = fx.store.resolve_next(vec![TestRecord::active("stale")], 3);
        assert!(!stale.archived);
        assert_eq!(stale.page, 3);
        fx.settle();
        assert_ne!(fx.browser.records(), vec![TestRecord::active("stale")]);

        let fresh = fx.store.resolve_next(vec![TestRecord::archived("z")], 1);
        assert!(fresh.archived);
        assert_eq!(fresh.page, 1);
        fx.settle();
        assert_eq!(fx.browser.records(), vec![TestRecord::archived("z")]);
    }

    #[test]
    fn fetch_failure_keeps_previous_records_and_notifies() {
        let mut fx = fixture();
        fx.drive(|b| async move { b.reload().await });
        fx.store.resolve_next(vec![TestRecord::active("keep")], 2);
        fx.settle();

        fx.drive(|b| async move { b.submit_search().await });
        fx.store
            .fail_next(BrowserError::Network("connection refused".into()));
        fx.settle();

        assert_eq!(fx.browser.records(), vec![TestRecord::active("keep")]);
        assert_eq!(fx.browser.total_pages(), 2);
        assert!(!fx.browser.is_loading());
        assert_eq!(fx.notices.errors.borrow().len(), 1);
        assert!(fx.notices.errors.borrow()[0].contains("connection refused"));
    }

    #[test]
    fn go_to_page_clamps_to_known_bounds() {
        let mut fx = fixture();
        fx.drive(|b| async move { b.reload().await });
        fx.store.resolve_next(Vec::new(), 4);
        fx.settle();

        fx.drive(|b| async move { b.go_to_page(99).await });
        let query = fx.store.resolve_next(Vec::new(), 4);
        assert_eq!(query.page, 4);
        fx.settle();

        fx.drive(|b| async move { b.go_to_page(0).await });
        let query = fx.store.resolve_next(Vec::new(), 4);
        assert_eq!(query.page, 1);
        fx.settle();
    }

    #[test]
    fn shrunken_result_set_lands_on_the_last_page() {
        let mut fx = fixture();
        fx.drive(|b| async move { b.reload().await });
        fx.store.resolve_next(Vec::new(), 5);
        fx.settle();

        fx.drive(|b| async move { b.go_to_page(5).await });
        // The server now reports only 2 pages; the controller clamps and
        // refetches once.
        fx.store.resolve_next(Vec::new(), 2);
        fx.settle();
        let query = fx.store.resolve_next(vec![TestRecord::active("tail")], 2);
        assert_eq!(query.page, 2);
        fx.settle();
        assert_eq!(fx.browser.query().page, 2);
        assert_eq!(fx.browser.records(), vec![TestRecord::active("tail")]);
    }

    #[test]
    fn empty_result_set_pins_page_to_one() {
        let mut fx = fixture();
        fx.drive(|b| async move { b.reload().await });
        fx.store.resolve_next(Vec::new(), 0);
        fx.settle();
        assert_eq!(fx.browser.query().page, 1);
        assert_eq!(fx.browser.total_pages(), 0);
        assert!(fx.browser.records().is_empty());
    }

    #[test]
    fn archive_confirms_mutates_and_reloads() {
        let mut fx = fixture();
        let record = TestRecord::active("7");
        fx.drive(|b| async move { b.archive(&record).await });

        assert_eq!(fx.confirm.asked.get(), 1);
        assert_eq!(*fx.store.ops.borrow(), vec!["archive:7".to_string()]);
        assert_eq!(
            *fx.notices.successes.borrow(),
            vec!["thing archived".to_string()]
        );
        // The follow-up reload is already in flight.
        assert_eq!(fx.store.pending_count(), 1);
        fx.store.resolve_next(Vec::new(), 1);
        fx.settle();
    }

    #[test]
    fn declined_confirmation_blocks_archive_and_delete() {
        let mut fx = fixture_with_confirm(false);
        let record = TestRecord::active("7");
        let r = record.clone();
        fx.drive(|b| async move { b.archive(&r).await });
        fx.drive(|b| async move { b.delete(&record).await });

        assert_eq!(fx.confirm.asked.get(), 2);
        assert!(fx.store.ops.borrow().is_empty());
        assert_eq!(fx.store.pending_count(), 0);
    }

    #[test]
    fn archiving_an_archived_record_is_rejected_client_side() {
        let mut fx = fixture();
        let record = TestRecord::archived("7");
        fx.drive(|b| async move { b.archive(&record).await });

        assert!(fx.store.ops.borrow().is_empty());
        assert_eq!(fx.notices.errors.borrow().len(), 1);
    }

    #[test]
    fn unarchive_requires_the_archived_view() {
        let mut fx = fixture();
        let record = TestRecord::archived("9");
        let r = record.clone();
        fx.drive(|b| async move { b.unarchive(&r).await });
        assert!(fx.store.ops.borrow().is_empty());

        fx.drive(|b| async move { b.toggle_archived_view().await });
        fx.store.resolve_next(vec![record.clone()], 1);
        fx.settle();

        let asked_before = fx.confirm.asked.get();
        fx.drive(|b| async move { b.unarchive(&record).await });
        assert_eq!(*fx.store.ops.borrow(), vec!["unarchive:9".to_string()]);
        // Unarchive is not destructive; no confirmation is requested.
        assert_eq!(fx.confirm.asked.get(), asked_before);
        fx.store.resolve_next(Vec::new(), 1);
        fx.settle();
    }

    #[test]
    fn delete_works_from_both_views_and_reloads() {
        let mut fx = fixture();
        let record = TestRecord::archived("3");
        fx.drive(|b| async move { b.delete(&record).await });

        assert_eq!(*fx.store.ops.borrow(), vec!["delete:3".to_string()]);
        assert_eq!(
            *fx.notices.successes.borrow(),
            vec!["thing deleted".to_string()]
        );
        assert_eq!(fx.store.pending_count(), 1);
        fx.store.resolve_next(Vec::new(), 0);
        fx.settle();
    }
}
