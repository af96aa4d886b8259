use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use super::{date_input_value, midnight_utc, parse_date, FormDraft};
use crate::error::FieldErrors;
use crate::models::Utente;

const FIELD_ORDER: &[&str] =
    &["nome", "cognome", "codice_fiscale_utente", "email", "telefono", "data_nascita", "indirizzo"];

/// Create/edit form for a customer. On edit the fiscal code is read-only.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct UtenteDraft {
    #[validate(length(equal = 16, message = "Il codice fiscale deve essere di 16 caratteri"))]
    pub codice_fiscale_utente: String,
    pub nome: String,
    pub cognome: String,
    /// `YYYY-MM-DD`, as produced by a date input
    pub data_nascita: String,
    pub telefono: String,
    #[validate(email(message = "Email non valida"))]
    pub email: String,
    pub indirizzo: String,
}

/// Wire body of `POST /utenti` and `PUT /utenti/{cf}`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct UtentePayload {
    pub codice_fiscale_utente: String,
    pub nome: String,
    pub cognome: String,
    pub data_nascita: DateTime<Utc>,
    pub telefono: String,
    pub email: String,
    pub indirizzo: String,
}

impl UtenteDraft {
    fn trimmed(&self) -> Self {
        Self {
            codice_fiscale_utente: self.codice_fiscale_utente.trim().to_uppercase(),
            nome: self.nome.trim().to_string(),
            cognome: self.cognome.trim().to_string(),
            data_nascita: self.data_nascita.trim().to_string(),
            telefono: self.telefono.trim().to_string(),
            email: self.email.trim().to_string(),
            indirizzo: self.indirizzo.trim().to_string(),
        }
    }
}

impl From<&Utente> for UtenteDraft {
    fn from(utente: &Utente) -> Self {
        Self {
            codice_fiscale_utente: utente.codice_fiscale_utente.clone(),
            nome: utente.nome.clone(),
            cognome: utente.cognome.clone(),
            data_nascita: date_input_value(utente.data_nascita.as_deref()),
            telefono: utente.telefono.clone(),
            email: utente.email.clone(),
            indirizzo: utente.indirizzo.clone(),
        }
    }
}

impl FormDraft for UtenteDraft {
    type Payload = UtentePayload;

    fn parse(&self) -> Result<UtentePayload, FieldErrors> {
        let draft = self.trimmed();

        let mut errors = FieldErrors::new();
        errors.require("nome", &draft.nome, "Nome obbligatorio");
        errors.require("cognome", &draft.cognome, "Cognome obbligatorio");
        errors.require("codice_fiscale_utente", &draft.codice_fiscale_utente, "Codice fiscale obbligatorio");
        errors.require("email", &draft.email, "Email obbligatoria");
        errors.require("telefono", &draft.telefono, "Telefono obbligatorio");
        errors.require("data_nascita", &draft.data_nascita, "Data di nascita obbligatoria");
        errors.require("indirizzo", &draft.indirizzo, "Indirizzo obbligatorio");

        if let Err(failures) = Validate::validate(&draft) {
            errors.merge_validation(&failures, FIELD_ORDER);
        }

        let data_nascita = parse_date(&draft.data_nascita);
        if data_nascita.is_none() {
            errors.push("data_nascita", "Data di nascita non valida");
        }

        match (errors.is_empty(), data_nascita) {
            (true, Some(date)) => Ok(UtentePayload {
                codice_fiscale_utente: draft.codice_fiscale_utente,
                nome: draft.nome,
                cognome: draft.cognome,
                data_nascita: midnight_utc(date),
                telefono: draft.telefono,
                email: draft.email,
                indirizzo: draft.indirizzo,
            }),
            _ => Err(errors),
        }
    }
}
