#![allow(unused_crate_dependencies)]
#![allow(clippy::tests_outside_test_module, reason = "integration tests live in tests/ dir")]
#![allow(clippy::expect_used, reason = "integration test: panics are the assertion mechanism")]

use std::sync::Arc;

use concessionario_client::storage::{TOKEN_KEY, USER_KEY};
use concessionario_client::{ApiClient, AuthState, ClientConfig, LoginError, MemoryStorage, SessionStorage, SessionStore};
use concessionario_types::StorageError;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn session(server: &MockServer, storage: Arc<MemoryStorage>) -> SessionStore {
    let api = ApiClient::new(ClientConfig::new(server.uri()), storage).expect("valid base url");
    SessionStore::new(api)
}

fn accepted() -> serde_json::Value {
    serde_json::json!({ "success": true, "username": "mario", "token": "jwt-123" })
}

#[tokio::test]
async fn test_login_persists_session_and_authorizes_requests() {
    let server = MockServer::start().await;
    let storage = Arc::new(MemoryStorage::new());
    let store = session(&server, storage.clone());
    store.restore();

    Mock::given(method("POST"))
        .and(path("/auth/login"))
        .and(body_json(serde_json::json!({ "email": "mario@concessionario.it", "password": "segreta" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(accepted()))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/veicoli"))
        .and(header("authorization", "Bearer jwt-123"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
        .expect(1)
        .mount(&server)
        .await;

    let user = store.login("mario@concessionario.it", "segreta").await.expect("login accepted");
    assert_eq!(user.username, "mario");
    assert!(store.is_authenticated());
    assert_eq!(store.auth_state(), AuthState::Authenticated);

    assert_eq!(storage.get(TOKEN_KEY).expect("readable").as_deref(), Some("jwt-123"));
    let raw_user = storage.get(USER_KEY).expect("readable").expect("user persisted");
    let persisted: serde_json::Value = serde_json::from_str(&raw_user).expect("user is json");
    assert_eq!(persisted, serde_json::json!({ "username": "mario" }));

    let notice = store.take_notification().expect("login banner");
    assert_eq!(notice.message, "Login effettuato con successo");
    assert_eq!(notice.auto_hide_ms, 3_000);

    let veicoli = store.api().veicoli().list().await.expect("authorized list");
    assert!(veicoli.is_empty());
}

#[tokio::test]
async fn test_rejected_login_leaves_prior_session_untouched() {
    let server = MockServer::start().await;
    let storage = Arc::new(MemoryStorage::with_entries([
        (USER_KEY, r#"{"username":"anna"}"#),
        (TOKEN_KEY, "old-token"),
    ]));
    let store = session(&server, storage.clone());
    assert!(store.restore());

    Mock::given(method("POST"))
        .and(path("/auth/login"))
        .respond_with(
            ResponseTemplate::new(401)
                .set_body_json(serde_json::json!({ "success": false, "message": "Credenziali errate" })),
        )
        .mount(&server)
        .await;

    let err = store.login("anna@concessionario.it", "sbagliata").await.expect_err("must be rejected");
    assert_eq!(err, LoginError::Rejected("Credenziali errate".into()));
    assert_eq!(err.to_string(), "Credenziali errate");

    assert_eq!(store.current_user().expect("still signed in").username, "anna");
    assert_eq!(storage.get(TOKEN_KEY).expect("readable").as_deref(), Some("old-token"));
    assert!(store.take_notification().is_none());
}

#[tokio::test]
async fn test_login_failure_reasons() {
    let server = MockServer::start().await;
    let store = session(&server, Arc::new(MemoryStorage::new()));
    store.restore();

    {
        let _guard = Mock::given(method("POST"))
            .and(path("/auth/login"))
            .respond_with(ResponseTemplate::new(401))
            .mount_as_scoped(&server)
            .await;
        let err = store.login("a@b.it", "x").await.expect_err("401 without body");
        assert_eq!(err.to_string(), "Credenziali non valide");
    }

    {
        let _guard = Mock::given(method("POST"))
            .and(path("/auth/login"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({ "success": false })))
            .mount_as_scoped(&server)
            .await;
        let err = store.login("a@b.it", "x").await.expect_err("success=false");
        assert_eq!(err.to_string(), "Errore durante il login");
    }

    {
        let _guard = Mock::given(method("POST"))
            .and(path("/auth/login"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>proxy</html>"))
            .mount_as_scoped(&server)
            .await;
        let err = store.login("a@b.it", "x").await.expect_err("not json");
        assert_eq!(err, LoginError::Malformed);
    }

    assert!(!store.is_authenticated());
}

#[tokio::test]
async fn test_login_unreachable_server() {
    let storage = Arc::new(MemoryStorage::new());
    let api = ApiClient::new(ClientConfig::new("http://127.0.0.1:9"), storage.clone()).expect("valid base url");
    let store = SessionStore::new(api);
    store.restore();

    let err = store.login("a@b.it", "x").await.expect_err("nothing listens on port 9");
    assert_eq!(err, LoginError::Unreachable);
    assert_eq!(err.to_string(), "Impossibile connettersi al server. Verifica la tua connessione.");
    assert!(storage.is_empty());
}

#[tokio::test]
async fn test_no_authorization_header_without_token() {
    let server = MockServer::start().await;
    let store = session(&server, Arc::new(MemoryStorage::new()));

    Mock::given(method("GET"))
        .and(path("/utenti"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
        .expect(1)
        .mount(&server)
        .await;

    store.api().utenti().list().await.expect("list");

    let requests = server.received_requests().await.expect("recording enabled");
    assert_eq!(requests.len(), 1);
    assert!(requests[0].headers.get("authorization").is_none());
}

#[tokio::test]
async fn test_logout_stops_sending_token() {
    let server = MockServer::start().await;
    let storage = Arc::new(MemoryStorage::with_entries([
        (USER_KEY, r#"{"username":"anna"}"#),
        (TOKEN_KEY, "old-token"),
    ]));
    let store = session(&server, storage.clone());
    store.restore();

    Mock::given(method("GET"))
        .and(path("/configurazioni"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
        .mount(&server)
        .await;

    store.logout();
    assert!(storage.is_empty());
    store.api().configurazioni().list().await.expect("list");

    let requests = server.received_requests().await.expect("recording enabled");
    assert!(requests[0].headers.get("authorization").is_none());
}

/// In-memory storage whose `user` entry cannot be written.
struct ReadOnlyUser(Arc<MemoryStorage>);

impl SessionStorage for ReadOnlyUser {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.0.get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        if key == USER_KEY {
            return Err(StorageError::access(key, "quota exceeded"));
        }
        self.0.set(key, value)
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.0.remove(key)
    }
}

async fn mount_accepted_login(server: &MockServer, token: &str) {
    Mock::given(method("POST"))
        .and(path("/auth/login"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "success": true, "username": "mario", "token": token
        })))
        .expect(1)
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_failed_user_write_keeps_previous_session_in_storage() {
    let server = MockServer::start().await;
    let inner = Arc::new(MemoryStorage::with_entries([(USER_KEY, r#"{"username":"anna"}"#), (TOKEN_KEY, "old-token")]));
    let api = ApiClient::new(ClientConfig::new(server.uri()), Arc::new(ReadOnlyUser(inner.clone()))).expect("valid base url");
    let store = SessionStore::new(api);
    assert!(store.restore());

    mount_accepted_login(&server, "new-token").await;

    let err = store.login("mario@concessionario.it", "segreta").await.expect_err("user entry not writable");
    assert!(matches!(err, LoginError::Storage(StorageError::Access { .. })));

    assert_eq!(store.current_user().expect("previous session kept").username, "anna");
    assert_eq!(inner.get(TOKEN_KEY).expect("readable").as_deref(), Some("old-token"));
    assert_eq!(inner.get(USER_KEY).expect("readable").as_deref(), Some(r#"{"username":"anna"}"#));

    // A reload pairs the old user with the old token.
    let reloaded = SessionStore::new(
        ApiClient::new(ClientConfig::new(server.uri()), inner.clone()).expect("valid base url"),
    );
    assert!(reloaded.restore());
    assert_eq!(reloaded.current_user().expect("restored").username, "anna");
}

#[tokio::test]
async fn test_failed_user_write_without_prior_session_leaves_storage_empty() {
    let server = MockServer::start().await;
    let inner = Arc::new(MemoryStorage::new());
    let api = ApiClient::new(ClientConfig::new(server.uri()), Arc::new(ReadOnlyUser(inner.clone()))).expect("valid base url");
    let store = SessionStore::new(api);
    store.restore();

    mount_accepted_login(&server, "new-token").await;

    let err = store.login("mario@concessionario.it", "segreta").await.expect_err("user entry not writable");
    assert!(matches!(err, LoginError::Storage(_)));
    assert!(!store.is_authenticated());
    assert!(inner.is_empty());
}
