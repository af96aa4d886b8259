//! Domain API: one method per resource operation, each a single HTTP call.
//!
//! ```text
//! ApiClient
//!   ├── auth()            POST /auth/login
//!   ├── utenti()          /utenti[/{codiceFiscale}], /utenti/search
//!   ├── veicoli()         /veicoli[/{numeroTelaio}], /veicoli/search, /veicoli/disponibili
//!   ├── movimenti()       /movimenti[/{idMovimento}]
//!   └── configurazioni()  /configurazioni, PUT /configurazioni?id=
//! ```

mod auth;
mod configurazioni;
mod movimenti;
mod utenti;
mod veicoli;

use std::sync::Arc;

pub use auth::AuthApi;
pub use configurazioni::ConfigurazioniApi;
pub use movimenti::MovimentiApi;
pub use utenti::UtentiApi;
pub use veicoli::VeicoliApi;

use crate::config::ClientConfig;
use crate::error::ClientError;
use crate::http::HttpClient;
use crate::storage::SessionStorage;

/// Entry point for the remote API. Cheap to clone.
#[derive(Clone)]
pub struct ApiClient {
    http: HttpClient,
}

impl ApiClient {
    pub fn new(config: ClientConfig, storage: Arc<dyn SessionStorage>) -> Result<Self, ClientError> {
        Ok(Self { http: HttpClient::new(config, storage)? })
    }

    pub fn from_http(http: HttpClient) -> Self {
        Self { http }
    }

    pub fn http(&self) -> &HttpClient {
        &self.http
    }

    /// Storage shared with the HTTP layer (token source).
    pub fn storage(&self) -> Arc<dyn SessionStorage> {
        self.http.storage()
    }

    pub fn auth(&self) -> AuthApi<'_> {
        AuthApi { http: &self.http }
    }

    pub fn utenti(&self) -> UtentiApi<'_> {
        UtentiApi { http: &self.http }
    }

    pub fn veicoli(&self) -> VeicoliApi<'_> {
        VeicoliApi { http: &self.http }
    }

    pub fn movimenti(&self) -> MovimentiApi<'_> {
        MovimentiApi { http: &self.http }
    }

    pub fn configurazioni(&self) -> ConfigurazioniApi<'_> {
        ConfigurazioniApi { http: &self.http }
    }
}
