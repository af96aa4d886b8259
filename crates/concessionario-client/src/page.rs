//! State machine behind each management page.
//!
//! ```text
//!  list:     idle ──begin_load──▶ loading ──finish_load──▶ ready | error
//!  dialogs:  add / edit / search / view, each independently open or closed
//! ```
//!
//! Transitions are synchronous so the UI can drive them from signal updates
//! around its own `spawn_local`; `load`, `submit_add`, `submit_edit`,
//! `search` and `reset` wrap a transition pair around one API call.

use concessionario_types::{FieldErrors, FormDraft, Notification};

use crate::api::ApiClient;
use crate::error::ClientError;
use crate::resource::{Creatable, Editable, Resource, Searchable};

#[derive(Debug, Clone)]
pub struct Page<R: Resource> {
    items: Vec<R>,
    loading: bool,
    error: Option<String>,
    add_open: bool,
    editing: Option<R>,
    search_open: bool,
    viewing: Option<R>,
    notification: Option<Notification>,
    quick_filter: String,
}

impl<R: Resource> Default for Page<R> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            loading: false,
            error: None,
            add_open: false,
            editing: None,
            search_open: false,
            viewing: None,
            notification: None,
            quick_filter: String::new(),
        }
    }
}

impl<R: Resource> Page<R> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn items(&self) -> &[R] {
        &self.items
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Load failure shown in place of the table.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn is_add_open(&self) -> bool {
        self.add_open
    }

    pub fn editing(&self) -> Option<&R> {
        self.editing.as_ref()
    }

    pub fn is_search_open(&self) -> bool {
        self.search_open
    }

    pub fn viewing(&self) -> Option<&R> {
        self.viewing.as_ref()
    }

    pub fn notification(&self) -> Option<&Notification> {
        self.notification.as_ref()
    }

    pub fn quick_filter(&self) -> &str {
        &self.quick_filter
    }

    /// Rows matching the quick filter (case-insensitive substring).
    pub fn visible_items(&self) -> Vec<&R> {
        let needle = self.quick_filter.trim().to_lowercase();
        if needle.is_empty() {
            return self.items.iter().collect();
        }
        self.items.iter().filter(|item| item.search_text().contains(&needle)).collect()
    }

    pub fn set_quick_filter(&mut self, value: impl Into<String>) {
        self.quick_filter = value.into();
    }

    // ---- list ----

    pub fn begin_load(&mut self) {
        self.loading = true;
    }

    pub fn finish_load(&mut self, result: Result<Vec<R>, ClientError>) {
        self.loading = false;
        match result {
            Ok(items) => {
                self.items = items;
                self.error = None;
            }
            Err(e) => {
                tracing::warn!(resource = R::NAME, "List fetch failed: {}", e);
                self.items.clear();
                self.error = Some(if e.status() == Some(404) {
                    format!("Endpoint /{} non trovato. Verifica che il backend sia attivo.", R::NAME)
                } else {
                    R::LOAD_ERROR.to_string()
                });
            }
        }
    }

    // ---- dialogs ----

    pub fn open_add(&mut self) {
        self.add_open = true;
    }

    pub fn close_add(&mut self) {
        self.add_open = false;
    }

    pub fn open_edit(&mut self, item: R) {
        self.editing = Some(item);
    }

    pub fn close_edit(&mut self) {
        self.editing = None;
    }

    pub fn open_search(&mut self) {
        self.search_open = true;
    }

    pub fn close_search(&mut self) {
        self.search_open = false;
    }

    pub fn open_view(&mut self, item: R) {
        self.viewing = Some(item);
    }

    pub fn close_view(&mut self) {
        self.viewing = None;
    }

    /// Open the detail dialog for the row with `key`, if it is loaded.
    pub fn view_by_key(&mut self, key: &R::Key) -> bool {
        let found = self.items.iter().find(|item| &item.key() == key).cloned();
        let opened = found.is_some();
        if opened {
            self.viewing = found;
        }
        opened
    }

    pub fn notify(&mut self, notification: Notification) {
        self.notification = Some(notification);
    }

    pub fn dismiss_notification(&mut self) {
        self.notification = None;
    }

    /// Shared failure path of add/edit/search: server text wins over `fallback`.
    fn notify_failure(&mut self, action: &str, error: &ClientError, fallback: &str) {
        tracing::warn!(resource = R::NAME, action, "Request failed: {}", error);
        self.notify(Notification::error(error.user_message(fallback)));
    }

    pub async fn load(&mut self, api: &ApiClient) {
        self.begin_load();
        let result = R::fetch_all(api).await;
        self.finish_load(result);
    }

    /// Drop any search and show the full list again.
    pub async fn reset(&mut self, api: &ApiClient) {
        self.load(api).await;
    }
}

impl<R: Creatable> Page<R> {
    /// Outcome of a create call. Returns `true` when the list must be
    /// re-fetched.
    pub fn finish_add(&mut self, result: Result<R, ClientError>) -> bool {
        match result {
            Ok(_) => {
                self.add_open = false;
                self.notify(Notification::success(R::ADD_SUCCESS));
                true
            }
            Err(e) => {
                self.notify_failure("add", &e, R::ADD_ERROR);
                false
            }
        }
    }

    /// Validate `draft`; only a passing form reaches the server.
    pub async fn submit_add(&mut self, api: &ApiClient, draft: &R::Draft) -> Result<(), FieldErrors> {
        let payload = draft.parse()?;
        let result = R::create(api, &payload).await;
        if self.finish_add(result) {
            self.load(api).await;
        }
        Ok(())
    }
}

impl<R: Editable> Page<R> {
    /// Outcome of an update call: patches the row by key on success. Returns
    /// `true` when the list must be re-fetched as well.
    pub fn finish_edit(&mut self, result: Result<R, ClientError>) -> bool {
        match result {
            Ok(updated) => {
                let key = updated.key();
                if let Some(row) = self.items.iter_mut().find(|row| row.key() == key) {
                    *row = updated;
                }
                self.editing = None;
                self.notify(Notification::success(R::EDIT_SUCCESS));
                R::REFETCH_AFTER_EDIT
            }
            Err(e) => {
                self.notify_failure("edit", &e, R::EDIT_ERROR);
                false
            }
        }
    }

    /// Validate `draft` and update the record currently open for editing.
    /// Without an open edit dialog this does nothing.
    pub async fn submit_edit(&mut self, api: &ApiClient, draft: &R::EditDraft) -> Result<(), FieldErrors> {
        let payload = draft.parse()?;
        let Some(key) = self.editing.as_ref().map(Resource::key) else {
            return Ok(());
        };
        let result = R::update(api, &key, &payload).await;
        if self.finish_edit(result) {
            self.load(api).await;
        }
        Ok(())
    }
}

impl<R: Searchable> Page<R> {
    pub fn begin_search(&mut self) {
        self.loading = true;
    }

    pub fn finish_search(&mut self, result: Result<Vec<R>, ClientError>) {
        self.loading = false;
        match result {
            Ok(items) => {
                self.items = items;
                self.error = None;
                self.search_open = false;
            }
            Err(e) => self.notify_failure("search", &e, R::SEARCH_ERROR),
        }
    }

    pub async fn search(&mut self, api: &ApiClient, filter: &R::Filter) {
        self.begin_search();
        let result = R::search(api, filter).await;
        self.finish_search(result);
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use concessionario_types::{Configurazione, Movimento, Severity, Utente, Veicolo};

    use super::*;

    fn veicolo(telaio: &str, marca: &str) -> Veicolo {
        Veicolo {
            numero_telaio: telaio.into(),
            marca: marca.into(),
            modello: "Panda".into(),
            anno_immatricolazione: 2020,
            disponibile: true,
        }
    }

    #[test]
    fn test_load_success_and_error() {
        let mut page: Page<Veicolo> = Page::new();
        page.begin_load();
        assert!(page.is_loading());

        page.finish_load(Ok(vec![veicolo("T1", "Fiat")]));
        assert!(!page.is_loading());
        assert_eq!(page.items().len(), 1);
        assert!(page.error().is_none());

        page.begin_load();
        page.finish_load(Err(ClientError::Status { status: 500, message: None }));
        assert!(page.items().is_empty());
        assert_eq!(page.error(), Some("Errore durante il recupero dei veicoli. Riprova più tardi."));
    }

    #[test]
    fn test_not_found_names_endpoint() {
        let mut page: Page<Utente> = Page::new();
        page.begin_load();
        page.finish_load(Err(ClientError::Status { status: 404, message: None }));
        assert_eq!(page.error(), Some("Endpoint /utenti non trovato. Verifica che il backend sia attivo."));
    }

    #[test]
    fn test_dialog_does_not_interrupt_loading() {
        let mut page: Page<Veicolo> = Page::new();
        page.begin_load();
        page.open_add();
        page.open_search();
        assert!(page.is_loading());
        page.finish_load(Ok(vec![]));
        assert!(page.is_add_open());
        assert!(page.is_search_open());
    }

    #[test]
    fn test_add_failure_keeps_dialog_open() {
        let mut page: Page<Veicolo> = Page::new();
        page.open_add();

        let refetch = page.finish_add(Err(ClientError::Status {
            status: 409,
            message: Some("Numero telaio già registrato".into()),
        }));
        assert!(!refetch);
        assert!(page.is_add_open());
        let notice = page.notification().unwrap();
        assert_eq!(notice.severity, Severity::Error);
        assert_eq!(notice.message, "Numero telaio già registrato");

        page.finish_add(Err(ClientError::Decode("eof".into())));
        assert_eq!(page.notification().unwrap().message, "Errore durante l'aggiunta del veicolo");
    }

    #[test]
    fn test_add_success_closes_and_refetches() {
        let mut page: Page<Veicolo> = Page::new();
        page.open_add();
        assert!(page.finish_add(Ok(veicolo("T9", "Lancia"))));
        assert!(!page.is_add_open());
        assert_eq!(page.notification().unwrap().message, "Veicolo aggiunto con successo");
        assert_eq!(page.notification().unwrap().auto_hide_ms, 6_000);
    }

    #[test]
    fn test_edit_patches_row_by_key() {
        let mut page: Page<Veicolo> = Page::new();
        page.finish_load(Ok(vec![veicolo("T1", "Fiat"), veicolo("T2", "Fiat")]));
        page.open_edit(page.items()[1].clone());

        assert!(page.finish_edit(Ok(veicolo("T2", "Lancia"))));
        assert!(page.editing().is_none());
        assert_eq!(page.items()[0].marca, "Fiat");
        assert_eq!(page.items()[1].marca, "Lancia");
    }

    #[test]
    fn test_configurazione_edit_only_patches() {
        let mut page: Page<Configurazione> = Page::new();
        page.finish_load(Ok(vec![Configurazione { id_configurazione: 1, nome_configurazione: "Base".into() }]));
        page.open_edit(page.items()[0].clone());

        let refetch =
            page.finish_edit(Ok(Configurazione { id_configurazione: 1, nome_configurazione: "Premium".into() }));
        assert!(!refetch);
        assert_eq!(page.items()[0].nome_configurazione, "Premium");
        assert_eq!(page.notification().unwrap().message, "Configurazione aggiornata con successo");
    }

    #[test]
    fn test_edit_failure_keeps_dialog() {
        let mut page: Page<Configurazione> = Page::new();
        let row = Configurazione { id_configurazione: 1, nome_configurazione: "Base".into() };
        page.finish_load(Ok(vec![row.clone()]));
        page.open_edit(row);

        assert!(!page.finish_edit(Err(ClientError::Transport("offline".into()))));
        assert!(page.editing().is_some());
        assert!(page.notification().unwrap().is_error());
    }

    #[test]
    fn test_search_closes_dialog_only_on_success() {
        let mut page: Page<Veicolo> = Page::new();
        page.open_search();
        page.begin_search();
        page.finish_search(Err(ClientError::Status { status: 500, message: None }));
        assert!(page.is_search_open());
        assert_eq!(page.notification().unwrap().message, "Errore durante la ricerca dei veicoli");

        page.begin_search();
        page.finish_search(Ok(vec![veicolo("T1", "Fiat")]));
        assert!(!page.is_search_open());
        assert_eq!(page.items().len(), 1);
    }

    #[test]
    fn test_quick_filter() {
        let mut page: Page<Veicolo> = Page::new();
        page.finish_load(Ok(vec![veicolo("T1", "Fiat"), veicolo("T2", "Lancia")]));
        page.set_quick_filter("  LANC ");
        let visible = page.visible_items();
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].numero_telaio, "T2");

        page.set_quick_filter("");
        assert_eq!(page.visible_items().len(), 2);
    }

    #[test]
    fn test_view_by_movement_id() {
        let mut page: Page<Movimento> = Page::new();
        page.finish_load(Ok(vec![
            Movimento { id_movimento: 7, ..Default::default() },
            Movimento { id_movimento: 8, note: Some("permuta".into()), ..Default::default() },
        ]));

        assert!(page.view_by_key(&8));
        assert_eq!(page.viewing().unwrap().note.as_deref(), Some("permuta"));
        assert!(!page.view_by_key(&99));
        page.close_view();
        assert!(page.viewing().is_none());
    }
}
