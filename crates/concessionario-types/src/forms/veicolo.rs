use chrono::{Datelike, Utc};
use serde::{Deserialize, Serialize};

use super::FormDraft;
use crate::error::FieldErrors;
use crate::models::Veicolo;

/// Oldest accepted registration year.
pub const MIN_ANNO_IMMATRICOLAZIONE: i32 = 1900;

/// Create/edit form for a vehicle. On edit the chassis number is read-only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VeicoloDraft {
    pub numero_telaio: String,
    pub marca: String,
    pub modello: String,
    pub anno_immatricolazione: String,
    pub disponibile: bool,
}

impl Default for VeicoloDraft {
    fn default() -> Self {
        Self {
            numero_telaio: String::new(),
            marca: String::new(),
            modello: String::new(),
            anno_immatricolazione: Utc::now().year().to_string(),
            disponibile: true,
        }
    }
}

/// Wire body of `POST /veicoli` and `PUT /veicoli/{telaio}`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct VeicoloPayload {
    pub numero_telaio: String,
    pub marca: String,
    pub modello: String,
    pub anno_immatricolazione: i32,
    pub disponibile: bool,
}

impl VeicoloDraft {
    /// Validation against an explicit current year.
    pub fn parse_for_year(&self, current_year: i32) -> Result<VeicoloPayload, FieldErrors> {
        let numero_telaio = self.numero_telaio.trim();
        let marca = self.marca.trim();
        let modello = self.modello.trim();
        let anno = self.anno_immatricolazione.trim();

        let mut errors = FieldErrors::new();
        errors.require("numero_telaio", numero_telaio, "Numero telaio obbligatorio");
        errors.require("marca", marca, "Marca obbligatoria");
        errors.require("modello", modello, "Modello obbligatorio");
        errors.require("anno_immatricolazione", anno, "Anno immatricolazione obbligatorio");

        let anno_immatricolazione = match anno.parse::<i32>() {
            Ok(year) if year < MIN_ANNO_IMMATRICOLAZIONE => {
                errors.push("anno_immatricolazione", "Anno non valido");
                None
            }
            Ok(year) if year > current_year => {
                errors.push("anno_immatricolazione", "Anno non può essere nel futuro");
                None
            }
            Ok(year) => Some(year),
            Err(_) => {
                errors.push("anno_immatricolazione", "Anno non valido");
                None
            }
        };

        match (errors.is_empty(), anno_immatricolazione) {
            (true, Some(anno_immatricolazione)) => Ok(VeicoloPayload {
                numero_telaio: numero_telaio.to_string(),
                marca: marca.to_string(),
                modello: modello.to_string(),
                anno_immatricolazione,
                disponibile: self.disponibile,
            }),
            _ => Err(errors),
        }
    }
}

impl From<&Veicolo> for VeicoloDraft {
    fn from(veicolo: &Veicolo) -> Self {
        Self {
            numero_telaio: veicolo.numero_telaio.clone(),
            marca: veicolo.marca.clone(),
            modello: veicolo.modello.clone(),
            anno_immatricolazione: veicolo.anno_immatricolazione.to_string(),
            disponibile: veicolo.disponibile,
        }
    }
}

impl FormDraft for VeicoloDraft {
    type Payload = VeicoloPayload;

    fn parse(&self) -> Result<VeicoloPayload, FieldErrors> {
        self.parse_for_year(Utc::now().year())
    }
}
