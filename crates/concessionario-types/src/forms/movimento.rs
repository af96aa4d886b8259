use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{date_input_value, midnight_utc, parse_date, FormDraft};
use crate::error::FieldErrors;
use crate::models::{Movimento, TipoMovimento};

/// Create form for a movement.
///
/// The co-owner fields only matter when `has_comproprietario` is set; the
/// co-owner must then be present and differ from the owner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MovimentoDraft {
    pub tipo_movimento: TipoMovimento,
    /// `YYYY-MM-DD`
    pub data_movimento: String,
    /// Price as typed; both `1500.50` and `1500,50` are accepted
    pub importo: String,
    pub codice_fiscale_utente: String,
    pub numero_telaio: String,
    pub note: String,
    pub has_comproprietario: bool,
    pub codice_fiscale_comproprietario: String,
}

impl Default for MovimentoDraft {
    fn default() -> Self {
        Self {
            tipo_movimento: TipoMovimento::Vendita,
            data_movimento: Utc::now().date_naive().format("%Y-%m-%d").to_string(),
            importo: String::new(),
            codice_fiscale_utente: String::new(),
            numero_telaio: String::new(),
            note: String::new(),
            has_comproprietario: false,
            codice_fiscale_comproprietario: String::new(),
        }
    }
}

/// Wire body of `POST /movimenti` and `PUT /movimenti/{id}`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MovimentoPayload {
    pub codice_fiscale_utente: String,
    pub numero_telaio: String,
    pub data_movimento: DateTime<Utc>,
    pub tipo_movimento: TipoMovimento,
    pub prezzo: f64,
    pub note: Option<String>,
    pub has_comproprietario: bool,
    pub codice_fiscale_comproprietario: Option<String>,
}

fn parse_importo(value: &str) -> Result<f64, &'static str> {
    let normalized = value.trim().replace(',', ".");
    match normalized.parse::<f64>() {
        Ok(amount) if !amount.is_finite() => Err("Importo deve essere un numero"),
        Ok(amount) if amount <= 0.0 => Err("Importo deve essere positivo"),
        Ok(amount) => Ok(amount),
        Err(_) => Err("Importo deve essere un numero"),
    }
}

impl From<&Movimento> for MovimentoDraft {
    fn from(movimento: &Movimento) -> Self {
        let comproprietario = movimento.codice_fiscale_comproprietario.clone().unwrap_or_default();
        Self {
            tipo_movimento: movimento.tipo_movimento,
            data_movimento: date_input_value(movimento.data_movimento.as_deref()),
            importo: movimento.prezzo.to_string(),
            codice_fiscale_utente: movimento.codice_fiscale_utente.clone(),
            numero_telaio: movimento.numero_telaio.clone(),
            note: movimento.note.clone().unwrap_or_default(),
            has_comproprietario: !comproprietario.is_empty(),
            codice_fiscale_comproprietario: comproprietario,
        }
    }
}

impl FormDraft for MovimentoDraft {
    type Payload = MovimentoPayload;

    fn parse(&self) -> Result<MovimentoPayload, FieldErrors> {
        let owner = self.codice_fiscale_utente.trim();
        let co_owner = self.codice_fiscale_comproprietario.trim();
        let telaio = self.numero_telaio.trim();

        let mut errors = FieldErrors::new();
        errors.require("data_movimento", &self.data_movimento, "Data movimento obbligatoria");
        errors.require("importo", &self.importo, "Importo obbligatorio");
        errors.require("codice_fiscale_utente", owner, "Cliente obbligatorio");
        errors.require("numero_telaio", telaio, "Veicolo obbligatorio");

        let data_movimento = parse_date(&self.data_movimento);
        if data_movimento.is_none() {
            errors.push("data_movimento", "Data movimento non valida");
        }

        let prezzo = match parse_importo(&self.importo) {
            Ok(amount) => Some(amount),
            Err(message) => {
                errors.push("importo", message);
                None
            }
        };

        if self.has_comproprietario {
            errors.require("codice_fiscale_comproprietario", co_owner, "Comproprietario obbligatorio");
            if co_owner.eq_ignore_ascii_case(owner) {
                errors.push(
                    "codice_fiscale_comproprietario",
                    "Il comproprietario deve essere diverso dal proprietario principale",
                );
            }
        }

        let (Some(date), Some(prezzo)) = (data_movimento, prezzo) else {
            return Err(errors);
        };
        let note = self.note.trim();
        errors.into_result(|| MovimentoPayload {
            codice_fiscale_utente: owner.to_string(),
            numero_telaio: telaio.to_string(),
            data_movimento: midnight_utc(date),
            tipo_movimento: self.tipo_movimento,
            prezzo,
            note: (!note.is_empty()).then(|| note.to_string()),
            has_comproprietario: self.has_comproprietario,
            codice_fiscale_comproprietario: self.has_comproprietario.then(|| co_owner.to_string()),
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn valid_draft() -> MovimentoDraft {
        MovimentoDraft {
            tipo_movimento: TipoMovimento::Acquisto,
            data_movimento: "2024-03-05".into(),
            importo: "15500,50".into(),
            codice_fiscale_utente: "RSSMRA80A01H501U".into(),
            numero_telaio: "ZFA31200000123456".into(),
            note: String::new(),
            has_comproprietario: false,
            codice_fiscale_comproprietario: "ignored".into(),
        }
    }

    #[test]
    fn test_valid_payload() {
        let payload = valid_draft().parse().unwrap();
        assert!((payload.prezzo - 15500.5).abs() < f64::EPSILON);
        assert_eq!(payload.note, None);
        assert_eq!(payload.codice_fiscale_comproprietario, None);

        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(json["tipoMovimento"], "ACQUISTO");
        assert_eq!(json["dataMovimento"], "2024-03-05T00:00:00Z");
        assert_eq!(json["hasComproprietario"], false);
        assert!(json["codiceFiscaleComproprietario"].is_null());
    }

    #[test]
    fn test_co_owner_equal_to_owner_is_rejected() {
        let draft = MovimentoDraft {
            has_comproprietario: true,
            codice_fiscale_comproprietario: "RSSMRA80A01H501U".into(),
            ..valid_draft()
        };
        let errors = draft.parse().unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(
            errors.get("codice_fiscale_comproprietario"),
            Some("Il comproprietario deve essere diverso dal proprietario principale")
        );
    }

    #[test]
    fn test_co_owner_required_when_flagged() {
        let draft = MovimentoDraft {
            has_comproprietario: true,
            codice_fiscale_comproprietario: " ".into(),
            ..valid_draft()
        };
        let errors = draft.parse().unwrap_err();
        assert_eq!(errors.get("codice_fiscale_comproprietario"), Some("Comproprietario obbligatorio"));
    }

    #[test]
    fn test_distinct_co_owner_is_sent() {
        let draft = MovimentoDraft {
            has_comproprietario: true,
            codice_fiscale_comproprietario: "VRDLGU85B02F205X".into(),
            note: " permuta ".into(),
            ..valid_draft()
        };
        let payload = draft.parse().unwrap();
        assert_eq!(payload.codice_fiscale_comproprietario.as_deref(), Some("VRDLGU85B02F205X"));
        assert_eq!(payload.note.as_deref(), Some("permuta"));
    }

    #[test]
    fn test_importo_rules() {
        let zero = MovimentoDraft { importo: "0".into(), ..valid_draft() };
        assert_eq!(zero.parse().unwrap_err().get("importo"), Some("Importo deve essere positivo"));

        let text = MovimentoDraft { importo: "tanti".into(), ..valid_draft() };
        assert_eq!(text.parse().unwrap_err().get("importo"), Some("Importo deve essere un numero"));

        let empty = MovimentoDraft { importo: String::new(), ..valid_draft() };
        assert_eq!(empty.parse().unwrap_err().get("importo"), Some("Importo obbligatorio"));
    }

    #[test]
    fn test_missing_customer_and_vehicle() {
        let draft = MovimentoDraft {
            codice_fiscale_utente: String::new(),
            numero_telaio: String::new(),
            ..valid_draft()
        };
        let errors = draft.parse().unwrap_err();
        assert_eq!(errors.get("codice_fiscale_utente"), Some("Cliente obbligatorio"));
        assert_eq!(errors.get("numero_telaio"), Some("Veicolo obbligatorio"));
    }
}
