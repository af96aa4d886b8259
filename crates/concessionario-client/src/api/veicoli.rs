use concessionario_types::{SearchFilter, Veicolo, VeicoloFilter, VeicoloPayload};

use crate::error::ClientError;
use crate::http::HttpClient;

const RESOURCE: &str = "veicoli";

/// Vehicles, keyed by chassis number.
pub struct VeicoliApi<'a> {
    pub(super) http: &'a HttpClient,
}

impl VeicoliApi<'_> {
    pub async fn list(&self) -> Result<Vec<Veicolo>, ClientError> {
        self.http.get(&[RESOURCE], &[]).await
    }

    /// Vehicles that can still be sold (`GET /veicoli/disponibili`).
    pub async fn list_available(&self) -> Result<Vec<Veicolo>, ClientError> {
        self.http.get(&[RESOURCE, "disponibili"], &[]).await
    }

    pub async fn get(&self, numero_telaio: &str) -> Result<Veicolo, ClientError> {
        self.http.get(&[RESOURCE, numero_telaio], &[]).await
    }

    pub async fn create(&self, payload: &VeicoloPayload) -> Result<Veicolo, ClientError> {
        self.http.post(&[RESOURCE], payload).await
    }

    pub async fn update(&self, numero_telaio: &str, payload: &VeicoloPayload) -> Result<Veicolo, ClientError> {
        self.http.put(&[RESOURCE, numero_telaio], &[], payload).await
    }

    pub async fn delete(&self, numero_telaio: &str) -> Result<(), ClientError> {
        self.http.delete(&[RESOURCE, numero_telaio]).await
    }

    pub async fn search(&self, filter: &VeicoloFilter) -> Result<Vec<Veicolo>, ClientError> {
        self.http.get(&[RESOURCE, "search"], &filter.to_query()).await
    }
}
