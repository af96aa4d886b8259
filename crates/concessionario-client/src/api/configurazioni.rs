use concessionario_types::Configurazione;

use crate::error::ClientError;
use crate::http::HttpClient;

const RESOURCE: &str = "configurazioni";

pub struct ConfigurazioniApi<'a> {
    pub(super) http: &'a HttpClient,
}

impl ConfigurazioniApi<'_> {
    pub async fn list(&self) -> Result<Vec<Configurazione>, ClientError> {
        self.http.get(&[RESOURCE], &[]).await
    }

    /// `PUT /configurazioni?id={id}` with the whole record as body.
    pub async fn update(&self, id: i64, configurazione: &Configurazione) -> Result<Configurazione, ClientError> {
        self.http.put(&[RESOURCE], &[("id", id.to_string())], configurazione).await
    }
}
