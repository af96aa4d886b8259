use concessionario_types::{Movimento, MovimentoFilter, MovimentoPayload, SearchFilter};

use crate::error::ClientError;
use crate::http::HttpClient;

const RESOURCE: &str = "movimenti";

/// Sales and purchases, keyed by `idMovimento`.
pub struct MovimentiApi<'a> {
    pub(super) http: &'a HttpClient,
}

impl MovimentiApi<'_> {
    pub async fn list(&self) -> Result<Vec<Movimento>, ClientError> {
        self.http.get(&[RESOURCE], &[]).await
    }

    pub async fn get(&self, id_movimento: i64) -> Result<Movimento, ClientError> {
        let id = id_movimento.to_string();
        self.http.get(&[RESOURCE, id.as_str()], &[]).await
    }

    pub async fn create(&self, payload: &MovimentoPayload) -> Result<Movimento, ClientError> {
        self.http.post(&[RESOURCE], payload).await
    }

    pub async fn update(&self, id_movimento: i64, payload: &MovimentoPayload) -> Result<Movimento, ClientError> {
        let id = id_movimento.to_string();
        self.http.put(&[RESOURCE, id.as_str()], &[], payload).await
    }

    pub async fn delete(&self, id_movimento: i64) -> Result<(), ClientError> {
        let id = id_movimento.to_string();
        self.http.delete(&[RESOURCE, id.as_str()]).await
    }

    /// Filtered listing. Shares `GET /movimenti` with [`Self::list`]; an empty
    /// filter is the same request.
    pub async fn search(&self, filter: &MovimentoFilter) -> Result<Vec<Movimento>, ClientError> {
        self.http.get(&[RESOURCE], &filter.to_query()).await
    }
}
