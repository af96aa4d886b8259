use serde::{Deserialize, Serialize};

use super::null_as_default;

/// Customer record, keyed by the 16-character fiscal code.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct Utente {
    pub codice_fiscale_utente: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub nome: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub cognome: String,
    /// As sent by the server: either `YYYY-MM-DD` or an ISO-8601 timestamp
    #[serde(default)]
    pub data_nascita: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub telefono: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub email: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub indirizzo: String,
}

impl Utente {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.nome, self.cognome).trim().to_string()
    }

    /// Text matched by the list quick filter.
    pub fn search_text(&self) -> String {
        format!(
            "{} {} {} {} {}",
            self.codice_fiscale_utente, self.nome, self.cognome, self.email, self.telefono
        )
        .to_lowercase()
    }
}
