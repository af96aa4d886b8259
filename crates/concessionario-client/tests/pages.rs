#![allow(unused_crate_dependencies)]
#![allow(clippy::tests_outside_test_module, reason = "integration tests live in tests/ dir")]
#![allow(clippy::expect_used, reason = "integration test: panics are the assertion mechanism")]

use std::sync::Arc;

use concessionario_client::{ApiClient, ClientConfig, ClientError, MemoryStorage, Page};
use concessionario_types::{
    Configurazione, ConfigurazioneDraft, Movimento, MovimentoFilter, Utente, UtenteDraft, Veicolo, VeicoloFilter,
};
use wiremock::matchers::{body_json, body_partial_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn api(server: &MockServer) -> ApiClient {
    ApiClient::new(ClientConfig::new(server.uri()), Arc::new(MemoryStorage::new())).expect("valid base url")
}

fn veicoli_body() -> serde_json::Value {
    serde_json::json!([
        { "numeroTelaio": "ZFA1", "marca": "Fiat", "modello": "Panda", "annoImmatricolazione": 2019, "disponibile": true },
        { "numeroTelaio": "ZLA2", "marca": "Lancia", "modello": "Ypsilon", "annoImmatricolazione": 2021, "disponibile": false }
    ])
}

#[tokio::test]
async fn test_vehicle_search_sends_only_filled_fields_and_reset_restores_list() {
    let server = MockServer::start().await;
    let api = api(&server);
    let mut page: Page<Veicolo> = Page::new();

    Mock::given(method("GET"))
        .and(path("/veicoli"))
        .respond_with(ResponseTemplate::new(200).set_body_json(veicoli_body()))
        .expect(2)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/veicoli/search"))
        .and(query_param("marca", "Fiat"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([veicoli_body()[0].clone()])))
        .expect(1)
        .mount(&server)
        .await;

    page.load(&api).await;
    assert_eq!(page.items().len(), 2);

    page.open_search();
    let filter = VeicoloFilter { marca: " Fiat ".into(), ..Default::default() };
    page.search(&api, &filter).await;
    assert!(!page.is_search_open());
    assert_eq!(page.items().len(), 1);
    assert_eq!(page.items()[0].marca, "Fiat");

    let requests = server.received_requests().await.expect("recording enabled");
    let search = requests.iter().find(|r| r.url.path() == "/veicoli/search").expect("search issued");
    let pairs: Vec<(String, String)> = search.url.query_pairs().into_owned().collect();
    assert_eq!(pairs, vec![("marca".to_string(), "Fiat".to_string())]);

    page.reset(&api).await;
    assert_eq!(page.items().len(), 2);
}

#[tokio::test]
async fn test_user_create_posts_trimmed_payload_then_reloads() {
    let server = MockServer::start().await;
    let api = api(&server);
    let mut page: Page<Utente> = Page::new();

    Mock::given(method("POST"))
        .and(path("/utenti"))
        .and(body_partial_json(serde_json::json!({
            "codiceFiscaleUtente": "RSSMRA80A01H501U",
            "nome": "Mario",
            "cognome": "Rossi",
            "dataNascita": "1980-01-01T00:00:00Z",
            "email": "mario.rossi@example.it"
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(serde_json::json!({
            "codiceFiscaleUtente": "RSSMRA80A01H501U",
            "nome": "Mario",
            "cognome": "Rossi"
        })))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/utenti"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
            { "codiceFiscaleUtente": "RSSMRA80A01H501U", "nome": "Mario", "cognome": "Rossi", "email": null }
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let draft = UtenteDraft {
        codice_fiscale_utente: " rssmra80a01h501u ".into(),
        nome: " Mario ".into(),
        cognome: "Rossi".into(),
        data_nascita: "1980-01-01".into(),
        telefono: "3331234567".into(),
        email: " mario.rossi@example.it".into(),
        indirizzo: "Via Roma 1".into(),
    };

    page.open_add();
    page.submit_add(&api, &draft).await.expect("draft is valid");

    assert!(!page.is_add_open());
    assert_eq!(page.notification().expect("banner").message, "Utente aggiunto con successo");
    assert_eq!(page.items().len(), 1);
    assert_eq!(page.items()[0].email, "");
}

#[tokio::test]
async fn test_invalid_draft_never_reaches_server() {
    let server = MockServer::start().await;
    let api = api(&server);
    let mut page: Page<Utente> = Page::new();

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(201))
        .expect(0)
        .mount(&server)
        .await;

    page.open_add();
    let draft = UtenteDraft { codice_fiscale_utente: "SHORT".into(), ..Default::default() };
    let errors = page.submit_add(&api, &draft).await.expect_err("draft is invalid");

    assert_eq!(errors.get("nome"), Some("Nome obbligatorio"));
    assert_eq!(errors.get("codice_fiscale_utente"), Some("Il codice fiscale deve essere di 16 caratteri"));
    assert!(page.is_add_open());
    assert!(page.notification().is_none());
}

#[tokio::test]
async fn test_add_failure_shows_server_message() {
    let server = MockServer::start().await;
    let api = api(&server);
    let mut page: Page<Veicolo> = Page::new();

    Mock::given(method("POST"))
        .and(path("/veicoli"))
        .respond_with(
            ResponseTemplate::new(409).set_body_json(serde_json::json!({ "message": "Numero telaio già presente" })),
        )
        .expect(1)
        .mount(&server)
        .await;

    page.open_add();
    let draft = concessionario_types::VeicoloDraft {
        numero_telaio: "ZFA1".into(),
        marca: "Fiat".into(),
        modello: "Panda".into(),
        anno_immatricolazione: "2019".into(),
        disponibile: true,
    };
    page.submit_add(&api, &draft).await.expect("draft is valid");

    assert!(page.is_add_open());
    let notice = page.notification().expect("banner");
    assert!(notice.is_error());
    assert_eq!(notice.message, "Numero telaio già presente");
}

#[tokio::test]
async fn test_missing_endpoint_is_reported() {
    let server = MockServer::start().await;
    let api = api(&server);
    let mut page: Page<Movimento> = Page::new();

    page.load(&api).await;

    assert!(page.items().is_empty());
    assert_eq!(page.error(), Some("Endpoint /movimenti non trovato. Verifica che il backend sia attivo."));
}

#[tokio::test]
async fn test_movement_search_uses_list_endpoint() {
    let server = MockServer::start().await;
    let api = api(&server);

    Mock::given(method("GET"))
        .and(path("/movimenti"))
        .and(query_param("codiceFiscale", "RSSMRA80A01H501U"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([{
            "idMovimento": 42,
            "tipoMovimento": "VENDITA",
            "dataMovimento": "2024-03-15T00:00:00Z",
            "prezzo": 12500.5,
            "codiceFiscaleUtente": "RSSMRA80A01H501U",
            "nomeUtente": "Mario",
            "cognomeUtente": "Rossi",
            "numeroTelaio": "ZFA1",
            "marcaVeicolo": "Fiat",
            "modelloVeicolo": "Panda"
        }])))
        .expect(1)
        .mount(&server)
        .await;

    let filter = MovimentoFilter { codice_fiscale_utente: "RSSMRA80A01H501U".into(), ..Default::default() };
    let movimenti = api.movimenti().search(&filter).await.expect("search");

    assert_eq!(movimenti.len(), 1);
    assert_eq!(movimenti[0].id_movimento, 42);
    assert_eq!(movimenti[0].cliente(), "Mario Rossi");
}

#[tokio::test]
async fn test_configuration_edit_puts_by_query_id() {
    let server = MockServer::start().await;
    let api = api(&server);
    let mut page: Page<Configurazione> = Page::new();

    Mock::given(method("GET"))
        .and(path("/configurazioni"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
            { "idConfigurazione": 3, "nomeConfigurazione": "Base" }
        ])))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("PUT"))
        .and(path("/configurazioni"))
        .and(query_param("id", "3"))
        .and(body_json(serde_json::json!({ "idConfigurazione": 3, "nomeConfigurazione": "Premium" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "idConfigurazione": 3, "nomeConfigurazione": "Premium"
        })))
        .expect(1)
        .mount(&server)
        .await;

    page.load(&api).await;
    page.open_edit(page.items()[0].clone());
    let draft = ConfigurazioneDraft { id_configurazione: 3, nome_configurazione: " Premium ".into() };
    page.submit_edit(&api, &draft).await.expect("draft is valid");

    assert!(page.editing().is_none());
    assert_eq!(page.items()[0].nome_configurazione, "Premium");
}

#[tokio::test]
async fn test_non_json_success_body_is_a_decode_error() {
    let server = MockServer::start().await;
    let api = api(&server);

    Mock::given(method("GET"))
        .and(path("/veicoli/disponibili"))
        .respond_with(ResponseTemplate::new(200).set_body_string("ok"))
        .mount(&server)
        .await;

    let err = api.veicoli().list_available().await.expect_err("not a list");
    assert!(matches!(err, ClientError::Decode(_)));
    assert_eq!(err.status(), None);
}

#[tokio::test]
async fn test_delete_targets_the_record_key() {
    let server = MockServer::start().await;
    let api = api(&server);

    Mock::given(method("DELETE"))
        .and(path("/movimenti/42"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/utenti/RSSMRA80A01H501U"))
        .respond_with(ResponseTemplate::new(404).set_body_json(serde_json::json!({ "message": "Utente non trovato" })))
        .expect(1)
        .mount(&server)
        .await;

    api.movimenti().delete(42).await.expect("movement deleted");

    let err = api.utenti().delete("RSSMRA80A01H501U").await.expect_err("unknown user");
    assert_eq!(err.status(), Some(404));
    assert_eq!(err.server_message(), Some("Utente non trovato"));
}

#[tokio::test]
async fn test_truncated_body_is_a_transport_error() {
    use tokio::io::{AsyncReadExt, AsyncWriteExt};

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("local addr");
    tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.expect("accept");
        let mut request = [0_u8; 1024];
        let _ = socket.read(&mut request).await;
        let _ = socket
            .write_all(b"HTTP/1.1 200 OK\r\nContent-Type: application/json\r\nContent-Length: 100\r\n\r\n[{\"num")
            .await;
        // Closing before the announced length makes the body read fail.
    });

    let api = ApiClient::new(ClientConfig::new(format!("http://{addr}")), Arc::new(MemoryStorage::new()))
        .expect("valid base url");
    let err = api.veicoli().list().await.expect_err("body cut short");
    assert!(err.is_transport(), "unexpected error: {err:?}");
    assert_eq!(err.status(), None);
}
