use serde::{Deserialize, Serialize};

use super::null_as_default;

/// Named system setting. Only the name is editable.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct Configurazione {
    pub id_configurazione: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub nome_configurazione: String,
}

impl Configurazione {
    pub fn search_text(&self) -> String {
        format!("{} {}", self.id_configurazione, self.nome_configurazione).to_lowercase()
    }
}
