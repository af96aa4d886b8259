use std::sync::Arc;

use reqwest::header::AUTHORIZATION;
use reqwest::{Client, Method};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use url::Url;

use crate::config::ClientConfig;
use crate::error::ClientError;
use crate::storage::{SessionStorage, TOKEN_KEY};

/// Longest plain-text error body surfaced to the user.
const MAX_PLAIN_MESSAGE_CHARS: usize = 200;

/// Thin wrapper over `reqwest::Client` bound to the API root.
///
/// Every request reads the token from storage at send time, so a login or
/// logout is visible to the next call without rebuilding the client.
#[derive(Clone)]
pub struct HttpClient {
    client: Client,
    config: ClientConfig,
    storage: Arc<dyn SessionStorage>,
}

impl HttpClient {
    pub fn new(config: ClientConfig, storage: Arc<dyn SessionStorage>) -> Result<Self, ClientError> {
        Url::parse(&config.base_url)
            .map_err(|e| ClientError::InvalidUrl(format!("{}: {}", config.base_url, e)))?;

        let builder = Client::builder();
        #[cfg(not(target_arch = "wasm32"))]
        let builder = match config.timeout() {
            Some(timeout) => builder.timeout(timeout),
            None => builder,
        };
        let client = builder.build().map_err(|e| ClientError::Transport(e.to_string()))?;

        Ok(Self { client, config, storage })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn storage(&self) -> Arc<dyn SessionStorage> {
        Arc::clone(&self.storage)
    }

    /// Absolute URL for `segments` under the API root. Segments are
    /// percent-encoded; empty query values are the caller's business.
    pub fn url(&self, segments: &[&str], query: &[(&str, String)]) -> Result<Url, ClientError> {
        let mut url = Url::parse(&self.config.base_url)
            .map_err(|e| ClientError::InvalidUrl(format!("{}: {}", self.config.base_url, e)))?;
        url.path_segments_mut()
            .map_err(|()| ClientError::InvalidUrl(self.config.base_url.clone()))?
            .pop_if_empty()
            .extend(segments);
        if !query.is_empty() {
            url.query_pairs_mut().extend_pairs(query.iter().map(|(k, v)| (*k, v.as_str())));
        }
        Ok(url)
    }

    pub async fn get<R: DeserializeOwned>(
        &self,
        segments: &[&str],
        query: &[(&str, String)],
    ) -> Result<R, ClientError> {
        let url = self.url(segments, query)?;
        let body = self.send(Method::GET, url, None::<&()>).await?;
        decode(&body)
    }

    pub async fn post<B, R>(&self, segments: &[&str], payload: &B) -> Result<R, ClientError>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        let url = self.url(segments, &[])?;
        let body = self.send(Method::POST, url, Some(payload)).await?;
        decode(&body)
    }

    pub async fn put<B, R>(
        &self,
        segments: &[&str],
        query: &[(&str, String)],
        payload: &B,
    ) -> Result<R, ClientError>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        let url = self.url(segments, query)?;
        let body = self.send(Method::PUT, url, Some(payload)).await?;
        decode(&body)
    }

    /// DELETE; any 2xx body is discarded.
    pub async fn delete(&self, segments: &[&str]) -> Result<(), ClientError> {
        let url = self.url(segments, &[])?;
        self.send(Method::DELETE, url, None::<&()>).await.map(|_| ())
    }

    fn token(&self) -> Option<String> {
        match self.storage.get(TOKEN_KEY) {
            Ok(token) => token.filter(|t| !t.is_empty()),
            Err(e) => {
                tracing::warn!("Cannot read session token: {}", e);
                None
            }
        }
    }

    async fn send<B>(&self, method: Method, url: Url, payload: Option<&B>) -> Result<String, ClientError>
    where
        B: Serialize + ?Sized,
    {
        let mut request = self.client.request(method.clone(), url.clone());
        if let Some(token) = self.token() {
            request = request.header(AUTHORIZATION, format!("Bearer {}", token));
        }
        if let Some(payload) = payload {
            request = request.json(payload);
        }

        tracing::debug!(%method, %url, "API request");

        let response = request.send().await.map_err(|e| {
            tracing::warn!(%method, %url, "API request failed: {}", e);
            ClientError::Transport(e.to_string())
        })?;

        let status = response.status();
        let body = response.text().await.map_err(|e| {
            tracing::warn!(%method, %url, status = status.as_u16(), "API response body unreadable: {}", e);
            ClientError::Transport(e.to_string())
        })?;

        tracing::debug!(%method, %url, status = status.as_u16(), bytes = body.len(), "API response");

        if !status.is_success() {
            let message = server_message(&body);
            tracing::warn!(
                %method,
                %url,
                status = status.as_u16(),
                "API error: {}",
                message.as_deref().unwrap_or("<no message>")
            );
            return Err(ClientError::Status { status: status.as_u16(), message });
        }

        Ok(body)
    }
}

fn decode<R: DeserializeOwned>(body: &str) -> Result<R, ClientError> {
    serde_json::from_str(body).map_err(|e| ClientError::Decode(e.to_string()))
}

/// Human-readable message from an error body: `message` (or `error`) of a
/// JSON object, a bare JSON string, or short plain text. HTML pages and
/// structured bodies without a message yield `None`.
pub(crate) fn server_message(body: &str) -> Option<String> {
    let body = body.trim();
    if body.is_empty() {
        return None;
    }

    let text = match serde_json::from_str::<Value>(body) {
        Ok(Value::Object(map)) => {
            ["message", "error"].iter().find_map(|key| map.get(*key).and_then(Value::as_str))?.to_string()
        }
        Ok(Value::String(text)) => text,
        Ok(_) => return None,
        Err(_) if body.starts_with('<') => return None,
        Err(_) => body.chars().take(MAX_PLAIN_MESSAGE_CHARS).collect(),
    };

    let text = text.trim();
    (!text.is_empty()).then(|| text.to_string())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::storage::MemoryStorage;

    fn client(base: &str) -> HttpClient {
        HttpClient::new(ClientConfig::new(base), Arc::new(MemoryStorage::new())).unwrap()
    }

    #[test]
    fn test_url_appends_segments_to_base_path() {
        let http = client("http://localhost:8080/api");
        let url = http.url(&["utenti", "RSSMRA80A01H501U"], &[]).unwrap();
        assert_eq!(url.as_str(), "http://localhost:8080/api/utenti/RSSMRA80A01H501U");

        let http = client("http://localhost:8080/api/");
        assert_eq!(http.url(&["veicoli"], &[]).unwrap().path(), "/api/veicoli");
    }

    #[test]
    fn test_url_encodes_query_and_segments() {
        let http = client("http://localhost:8080/api");
        let url = http.url(&["veicoli", "AB 12/3"], &[("marca", "Alfa Romeo".to_string())]).unwrap();
        assert_eq!(url.path(), "/api/veicoli/AB%2012%2F3");
        assert_eq!(url.query(), Some("marca=Alfa+Romeo"));
    }

    #[test]
    fn test_invalid_base_url_is_rejected() {
        let result = HttpClient::new(ClientConfig::new("not a url"), Arc::new(MemoryStorage::new()));
        assert!(matches!(result, Err(ClientError::InvalidUrl(_))));
    }

    #[test]
    fn test_server_message_shapes() {
        assert_eq!(server_message(r#"{"message":"Utente non trovato"}"#).as_deref(), Some("Utente non trovato"));
        assert_eq!(server_message(r#"{"status":400,"error":"Bad Request"}"#).as_deref(), Some("Bad Request"));
        assert_eq!(server_message(r#""Veicolo non disponibile""#).as_deref(), Some("Veicolo non disponibile"));
        assert_eq!(server_message("Credenziali errate").as_deref(), Some("Credenziali errate"));
        assert_eq!(server_message("<html><body>502</body></html>"), None);
        assert_eq!(server_message(r#"{"timestamp":"2024-01-01"}"#), None);
        assert_eq!(server_message("   "), None);
    }
}
