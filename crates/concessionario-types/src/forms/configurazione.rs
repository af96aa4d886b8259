use serde::{Deserialize, Serialize};

use super::FormDraft;
use crate::error::FieldErrors;
use crate::models::Configurazione;

/// Edit form for a configuration: only the name can change.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigurazioneDraft {
    pub id_configurazione: i64,
    pub nome_configurazione: String,
}

impl From<&Configurazione> for ConfigurazioneDraft {
    fn from(config: &Configurazione) -> Self {
        Self {
            id_configurazione: config.id_configurazione,
            nome_configurazione: config.nome_configurazione.clone(),
        }
    }
}

impl FormDraft for ConfigurazioneDraft {
    type Payload = Configurazione;

    fn parse(&self) -> Result<Configurazione, FieldErrors> {
        let nome = self.nome_configurazione.trim();

        let mut errors = FieldErrors::new();
        errors.require("nome_configurazione", nome, "Nome configurazione obbligatorio");

        errors.into_result(|| Configurazione {
            id_configurazione: self.id_configurazione,
            nome_configurazione: nome.to_string(),
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_keeps_id_and_trims_name() {
        let draft = ConfigurazioneDraft { id_configurazione: 4, nome_configurazione: " IVA 22% ".into() };
        let config = draft.parse().unwrap();
        assert_eq!(config.id_configurazione, 4);
        assert_eq!(config.nome_configurazione, "IVA 22%");
    }

    #[test]
    fn test_blank_name_rejected() {
        let draft = ConfigurazioneDraft { id_configurazione: 4, nome_configurazione: "  ".into() };
        assert!(draft.parse().unwrap_err().has("nome_configurazione"));
    }
}
