use concessionario_types::{SearchFilter, Utente, UtenteFilter, UtentePayload};

use crate::error::ClientError;
use crate::http::HttpClient;

const RESOURCE: &str = "utenti";

/// Customers, keyed by fiscal code.
pub struct UtentiApi<'a> {
    pub(super) http: &'a HttpClient,
}

impl UtentiApi<'_> {
    pub async fn list(&self) -> Result<Vec<Utente>, ClientError> {
        self.http.get(&[RESOURCE], &[]).await
    }

    pub async fn get(&self, codice_fiscale: &str) -> Result<Utente, ClientError> {
        self.http.get(&[RESOURCE, codice_fiscale], &[]).await
    }

    pub async fn create(&self, payload: &UtentePayload) -> Result<Utente, ClientError> {
        self.http.post(&[RESOURCE], payload).await
    }

    pub async fn update(&self, codice_fiscale: &str, payload: &UtentePayload) -> Result<Utente, ClientError> {
        self.http.put(&[RESOURCE, codice_fiscale], &[], payload).await
    }

    pub async fn delete(&self, codice_fiscale: &str) -> Result<(), ClientError> {
        self.http.delete(&[RESOURCE, codice_fiscale]).await
    }

    /// `GET /utenti/search` with the non-empty filter fields only.
    pub async fn search(&self, filter: &UtenteFilter) -> Result<Vec<Utente>, ClientError> {
        self.http.get(&[RESOURCE, "search"], &filter.to_query()).await
    }
}
