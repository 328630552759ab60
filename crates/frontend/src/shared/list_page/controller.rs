use std::sync::Arc;

use contracts::domain::a001_project::aggregate::{project_path, Project};
use contracts::domain::common::ItemId;
use contracts::shared::events::{ItemChange, SnackbarMessage, EVENT_SHOW_DRAWER, EVENT_SNACKBAR};
use leptos::prelude::*;

use super::page::{ItemListPage, ListPageProps};
use super::state::ListPageState;
use crate::shared::error::{error_message, ApiError};
use crate::shared::event_bus::EventBus;
use crate::shared::http::HttpClient;

/// Drives one list page: loading, selection, dialogs and change notifications.
///
/// State lives in a signal so views re-render on every mutation. Cloning is
/// cheap and all clones share the same state.
pub struct ListPageController<P: ItemListPage, H, B> {
    page: Arc<P>,
    http: Arc<H>,
    bus: Arc<B>,
    props: ListPageProps,
    state: RwSignal<ListPageState<P::Item>>,
}

impl<P: ItemListPage, H, B> Clone for ListPageController<P, H, B> {
    fn clone(&self) -> Self {
        Self {
            page: self.page.clone(),
            http: self.http.clone(),
            bus: self.bus.clone(),
            props: self.props,
            state: self.state,
        }
    }
}

impl<P, H, B> ListPageController<P, H, B>
where
    P: ItemListPage,
    H: HttpClient,
    B: EventBus,
{
    pub fn new(page: P, props: ListPageProps, http: H, bus: B) -> Self {
        let headers = page.headers();
        Self {
            page: Arc::new(page),
            http: Arc::new(http),
            bus: Arc::new(bus),
            props,
            state: RwSignal::new(ListPageState::new(headers)),
        }
    }

    pub fn state(&self) -> RwSignal<ListPageState<P::Item>> {
        self.state
    }

    pub fn page(&self) -> &P {
        &self.page
    }

    pub fn props(&self) -> ListPageProps {
        self.props
    }

    pub fn http(&self) -> &H {
        &self.http
    }

    /// First load after mount. Errors are returned to the caller untouched.
    pub async fn initialize(&self) -> Result<(), ApiError> {
        self.load_items().await
    }

    /// Fetch the project (when `project_id` is set), then the items.
    ///
    /// The two requests run one after another. Each successful response
    /// replaces the corresponding state field wholesale.
    pub async fn load_items(&self) -> Result<(), ApiError> {
        if let Some(project_id) = self.props.project_id {
            let url = project_path(project_id);
            log::debug!("GET {}", url);
            let project: Project = serde_json::from_value(self.http.get_json(&url).await?)?;
            self.state.update(|s| s.project = Some(project));
        }

        let url = self.page.items_url();
        log::debug!("GET {}", url);
        let items: Vec<P::Item> = serde_json::from_value(self.http.get_json(&url).await?)?;
        log::debug!("loaded {} item(s) from {}", items.len(), url);
        self.state.update(|s| s.replace_items(items));

        Ok(())
    }

    pub fn request_item_deletion(&self, item_id: ItemId) {
        self.state.update(|s| s.request_deletion(item_id));
    }

    /// Delete a record and reload the list.
    ///
    /// Failures of either the DELETE or the reload end up in the snackbar;
    /// nothing is returned to the caller.
    pub async fn delete_item(&self, item_id: ItemId) {
        let item = self
            .state
            .with_untracked(|s| s.find_item(item_id).cloned());

        let url = self.page.single_item_url(item_id);
        log::debug!("DELETE {}", url);
        if let Err(err) = self.http.delete(&url).await {
            log::warn!("delete of item {} failed: {}", item_id, err);
            self.notify_error(&err);
            return;
        }

        self.bus
            .emit_payload(self.page.event_name(), &ItemChange::deleted(item));

        if let Err(err) = self.load_items().await {
            log::warn!("reload after delete failed: {}", err);
            self.notify_error(&err);
        }
    }

    /// Delete the record selected by [`Self::request_item_deletion`].
    pub async fn confirm_deletion(&self) {
        let selected = self.state.with_untracked(|s| s.selected_item_id);
        self.close_delete_dialog();
        if let Some(item_id) = selected {
            self.delete_item(item_id).await;
        }
    }

    pub fn start_editing_item(&self, item_id: ItemId) {
        self.state.update(|s| s.start_editing(item_id));
    }

    pub fn start_creating_item(&self) {
        self.state.update(|s| s.start_creating());
    }

    /// Called by the edit dialog after a successful create or update.
    pub async fn on_item_saved(&self) -> Result<(), ApiError> {
        self.close_edit_dialog();
        self.load_items().await
    }

    pub fn close_edit_dialog(&self) {
        self.state.update(|s| s.edit_dialog_visible = false);
    }

    pub fn close_delete_dialog(&self) {
        self.state.update(|s| s.delete_dialog_visible = false);
    }

    pub fn reveal_navigation_drawer(&self) {
        self.bus.emit(EVENT_SHOW_DRAWER, None);
    }

    pub fn notify_error(&self, err: &ApiError) {
        self.bus
            .emit_payload(EVENT_SNACKBAR, &SnackbarMessage::error(error_message(err)));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use contracts::domain::common::Identifiable;
    use contracts::shared::list_page::ColumnHeader;
    use futures::executor::block_on;
    use serde::{Deserialize, Serialize};
    use serde_json::{json, Value};
    use std::collections::HashMap;
    use std::sync::Mutex;

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    struct Row {
        id: ItemId,
        name: String,
    }

    impl Identifiable for Row {
        fn id(&self) -> ItemId {
            self.id
        }
    }

    struct RowsPage;

    impl ItemListPage for RowsPage {
        type Item = Row;

        fn items_url(&self) -> String {
            "/api/rows".to_string()
        }

        fn single_item_url(&self, item_id: ItemId) -> String {
            format!("/api/rows/{}", item_id)
        }

        fn event_name(&self) -> &'static str {
            "i-row"
        }

        fn headers(&self) -> Vec<ColumnHeader> {
            vec![ColumnHeader::new("Name", "name")]
        }
    }

    /// Everything observable from outside, in the order it happened.
    #[derive(Debug, Clone, PartialEq)]
    enum Entry {
        Request(&'static str, String),
        Event(String, Option<Value>),
    }

    type Journal = Arc<Mutex<Vec<Entry>>>;

    #[derive(Default)]
    struct FakeHttp {
        journal: Journal,
        gets: Mutex<HashMap<String, Result<Value, ApiError>>>,
        delete_result: Mutex<Option<ApiError>>,
    }

    impl FakeHttp {
        fn respond(&self, url: &str, result: Result<Value, ApiError>) {
            self.gets.lock().unwrap().insert(url.to_string(), result);
        }

        fn fail_deletes(&self, err: ApiError) {
            *self.delete_result.lock().unwrap() = Some(err);
        }

        fn record(&self, method: &'static str, url: &str) {
            self.journal
                .lock()
                .unwrap()
                .push(Entry::Request(method, url.to_string()));
        }
    }

    #[async_trait(?Send)]
    impl HttpClient for Arc<FakeHttp> {
        async fn get_json(&self, path: &str) -> Result<Value, ApiError> {
            self.record("GET", path);
            self.gets
                .lock()
                .unwrap()
                .get(path)
                .cloned()
                .unwrap_or_else(|| Err(ApiError::Status { status: 404, body: String::new() }))
        }

        async fn delete(&self, path: &str) -> Result<(), ApiError> {
            self.record("DELETE", path);
            match self.delete_result.lock().unwrap().clone() {
                Some(err) => Err(err),
                None => Ok(()),
            }
        }

        async fn post_json(&self, path: &str, _body: &Value) -> Result<Value, ApiError> {
            self.record("POST", path);
            Ok(Value::Null)
        }

        async fn put_json(&self, path: &str, _body: &Value) -> Result<(), ApiError> {
            self.record("PUT", path);
            Ok(())
        }
    }

    struct RecordingBus {
        journal: Journal,
    }

    impl EventBus for RecordingBus {
        fn emit(&self, name: &str, payload: Option<Value>) {
            self.journal
                .lock()
                .unwrap()
                .push(Entry::Event(name.to_string(), payload));
        }
    }

    struct Fixture {
        journal: Journal,
        http: Arc<FakeHttp>,
        controller: ListPageController<RowsPage, Arc<FakeHttp>, RecordingBus>,
        _owner: Owner,
    }

    fn fixture(props: ListPageProps) -> Fixture {
        let owner = Owner::new();
        owner.set();

        let journal: Journal = Arc::new(Mutex::new(Vec::new()));
        let http = Arc::new(FakeHttp {
            journal: journal.clone(),
            ..FakeHttp::default()
        });
        http.respond(
            "/api/rows",
            Ok(json!([{"id": 1, "name": "A"}, {"id": 2, "name": "B"}])),
        );
        http.respond("/api/project/7", Ok(json!({"id": 7, "name": "Demo"})));

        let bus = RecordingBus {
            journal: journal.clone(),
        };
        let controller = ListPageController::new(RowsPage, props, http.clone(), bus);

        Fixture {
            journal,
            http,
            controller,
            _owner: owner,
        }
    }

    impl Fixture {
        fn entries(&self) -> Vec<Entry> {
            self.journal.lock().unwrap().clone()
        }

        fn clear(&self) {
            self.journal.lock().unwrap().clear();
        }
    }

    fn get(url: &str) -> Entry {
        Entry::Request("GET", url.to_string())
    }

    #[test]
    fn test_headers_come_from_page() {
        let f = fixture(ListPageProps::default());
        let state = f.controller.state().get_untracked();
        assert_eq!(state.headers, vec![ColumnHeader::new("Name", "name")]);
        assert!(state.items.is_none());
    }

    #[test]
    fn test_load_without_project_skips_project_fetch() {
        let f = fixture(ListPageProps::default());

        block_on(f.controller.load_items()).unwrap();

        assert_eq!(f.entries(), vec![get("/api/rows")]);
        let state = f.controller.state().get_untracked();
        assert!(state.project.is_none());
        assert_eq!(state.items.map(|items| items.len()), Some(2));
    }

    #[test]
    fn test_load_with_project_fetches_project_first() {
        let f = fixture(ListPageProps::for_project(7));

        block_on(f.controller.initialize()).unwrap();

        assert_eq!(f.entries(), vec![get("/api/project/7"), get("/api/rows")]);
        let state = f.controller.state().get_untracked();
        assert!(state.is_loaded());
        assert_eq!(state.project.map(|p| p.name), Some("Demo".to_string()));
    }

    #[test]
    fn test_load_replaces_items_wholesale() {
        let f = fixture(ListPageProps::default());
        block_on(f.controller.load_items()).unwrap();

        f.http.respond("/api/rows", Ok(json!([{"id": 3, "name": "C"}])));
        block_on(f.controller.load_items()).unwrap();

        let items = f.controller.state().get_untracked().items.unwrap();
        assert_eq!(items, vec![Row { id: 3, name: "C".to_string() }]);
    }

    #[test]
    fn test_load_empty_collection() {
        let f = fixture(ListPageProps::default());
        f.http.respond("/api/rows", Ok(json!([])));

        block_on(f.controller.load_items()).unwrap();

        assert_eq!(f.controller.state().get_untracked().items, Some(vec![]));
    }

    #[test]
    fn test_load_errors_propagate() {
        let f = fixture(ListPageProps::for_project(7));
        f.http.respond(
            "/api/project/7",
            Err(ApiError::Status { status: 500, body: String::new() }),
        );

        let err = block_on(f.controller.initialize()).unwrap_err();

        assert_eq!(err.status(), Some(500));
        assert_eq!(f.entries(), vec![get("/api/project/7")]);
        assert!(f.controller.state().get_untracked().items.is_none());
    }

    #[test]
    fn test_load_rejects_malformed_collection() {
        let f = fixture(ListPageProps::default());
        f.http.respond("/api/rows", Ok(json!({"not": "an array"})));

        let err = block_on(f.controller.load_items()).unwrap_err();

        assert!(matches!(err, ApiError::Decode(_)));
    }

    #[test]
    fn test_request_item_deletion_is_pure() {
        let f = fixture(ListPageProps::default());

        f.controller.request_item_deletion(42);

        let state = f.controller.state().get_untracked();
        assert_eq!(state.selected_item_id, Some(42));
        assert!(state.delete_dialog_visible);
        assert!(f.entries().is_empty());
    }

    #[test]
    fn test_start_editing_item() {
        let f = fixture(ListPageProps::default());

        f.controller.start_editing_item(2);

        let state = f.controller.state().get_untracked();
        assert_eq!(state.selected_item_id, Some(2));
        assert!(state.edit_dialog_visible);
        assert!(!state.delete_dialog_visible);
        assert!(f.entries().is_empty());
    }

    #[test]
    fn test_delete_success_emits_change_then_reloads() {
        let f = fixture(ListPageProps::default());
        block_on(f.controller.load_items()).unwrap();
        f.clear();

        block_on(f.controller.delete_item(1));

        assert_eq!(
            f.entries(),
            vec![
                Entry::Request("DELETE", "/api/rows/1".to_string()),
                Entry::Event(
                    "i-row".to_string(),
                    Some(json!({"action": "delete", "item": {"id": 1, "name": "A"}}))
                ),
                get("/api/rows"),
            ]
        );
    }

    #[test]
    fn test_delete_of_unknown_item_sends_null_payload() {
        let f = fixture(ListPageProps::default());
        block_on(f.controller.load_items()).unwrap();
        f.clear();

        block_on(f.controller.delete_item(9));

        assert_eq!(
            f.entries()[1],
            Entry::Event(
                "i-row".to_string(),
                Some(json!({"action": "delete", "item": null}))
            )
        );
    }

    #[test]
    fn test_delete_failure_shows_snackbar_without_reload() {
        let f = fixture(ListPageProps::default());
        block_on(f.controller.load_items()).unwrap();
        f.clear();
        f.http.fail_deletes(ApiError::Status {
            status: 500,
            body: String::new(),
        });

        block_on(f.controller.delete_item(1));

        let entries = f.entries();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0], Entry::Request("DELETE", "/api/rows/1".to_string()));
        match &entries[1] {
            Entry::Event(name, Some(payload)) => {
                assert_eq!(name, "i-snackbar");
                assert_eq!(payload["color"], "error");
                assert!(!payload["text"].as_str().unwrap_or_default().is_empty());
            }
            other => panic!("expected snackbar, got {:?}", other),
        }
        assert!(!entries.iter().any(|e| *e == get("/api/rows")));
    }

    #[test]
    fn test_delete_failure_uses_server_message() {
        let f = fixture(ListPageProps::default());
        f.http.fail_deletes(ApiError::Status {
            status: 400,
            body: r#"{"error":"Row is referenced"}"#.to_string(),
        });

        block_on(f.controller.delete_item(1));

        assert_eq!(
            f.entries().last(),
            Some(&Entry::Event(
                "i-snackbar".to_string(),
                Some(json!({"color": "error", "text": "Row is referenced"}))
            ))
        );
    }

    #[test]
    fn test_reload_failure_after_delete_shows_snackbar() {
        let f = fixture(ListPageProps::default());
        block_on(f.controller.load_items()).unwrap();
        f.http.respond(
            "/api/rows",
            Err(ApiError::Network("connection refused".to_string())),
        );
        f.clear();

        block_on(f.controller.delete_item(2));

        let entries = f.entries();
        assert_eq!(entries.len(), 4);
        assert!(matches!(&entries[1], Entry::Event(name, _) if name == "i-row"));
        assert!(matches!(&entries[3], Entry::Event(name, _) if name == "i-snackbar"));
    }

    #[test]
    fn test_confirm_deletion_uses_selection() {
        let f = fixture(ListPageProps::default());
        block_on(f.controller.load_items()).unwrap();
        f.controller.request_item_deletion(2);
        f.clear();

        block_on(f.controller.confirm_deletion());

        assert_eq!(
            f.entries()[0],
            Entry::Request("DELETE", "/api/rows/2".to_string())
        );
        assert!(!f.controller.state().get_untracked().delete_dialog_visible);
    }

    #[test]
    fn test_confirm_deletion_without_selection_does_nothing() {
        let f = fixture(ListPageProps::default());

        block_on(f.controller.confirm_deletion());

        assert!(f.entries().is_empty());
    }

    #[test]
    fn test_on_item_saved_reloads_and_closes_dialog() {
        let f = fixture(ListPageProps::for_project(7));
        f.controller.start_creating_item();

        block_on(f.controller.on_item_saved()).unwrap();

        assert_eq!(f.entries(), vec![get("/api/project/7"), get("/api/rows")]);
        assert!(!f.controller.state().get_untracked().edit_dialog_visible);
    }

    #[test]
    fn test_reveal_navigation_drawer() {
        let f = fixture(ListPageProps::default());

        f.controller.reveal_navigation_drawer();

        assert_eq!(
            f.entries(),
            vec![Entry::Event("i-show-drawer".to_string(), None)]
        );
        assert!(f.controller.state().get_untracked().items.is_none());
    }

    #[test]
    fn test_selection_is_cleared_once_deleted_item_is_gone() {
        let f = fixture(ListPageProps::default());
        block_on(f.controller.load_items()).unwrap();
        f.controller.request_item_deletion(1);
        f.http.respond("/api/rows", Ok(json!([{"id": 2, "name": "B"}])));

        block_on(f.controller.confirm_deletion());

        let state = f.controller.state().get_untracked();
        let ids: Vec<ItemId> = state.items.iter().flatten().map(|r| r.id).collect();
        assert_eq!(ids, vec![2]);
        assert!(state.selected_item_id.map_or(true, |id| ids.contains(&id)));
        assert_eq!(state.selected_item_id, None);
    }
}
