use serde::{Deserialize, Serialize};

use super::null_as_default;

/// Vehicle inventory record, keyed by chassis number.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct Veicolo {
    pub numero_telaio: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub marca: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub modello: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub anno_immatricolazione: i32,
    #[serde(default, deserialize_with = "null_as_default")]
    pub disponibile: bool,
}

impl Veicolo {
    /// "Marca Modello", as shown in pickers and movement rows.
    pub fn label(&self) -> String {
        format!("{} {}", self.marca, self.modello).trim().to_string()
    }

    pub fn search_text(&self) -> String {
        format!("{} {} {} {}", self.numero_telaio, self.marca, self.modello, self.anno_immatricolazione)
            .to_lowercase()
    }
}
