//! Search filters.
//!
//! Each filter mirrors a search dialog. `to_query` only yields fields that are
//! non-empty after trimming, so an untouched dialog sends no parameters.

use serde::{Deserialize, Serialize};

/// A search form that turns into query parameters.
pub trait SearchFilter {
    /// `(key, value)` pairs for the non-empty fields, in declaration order.
    fn to_query(&self) -> Vec<(&'static str, String)>;

    fn is_empty(&self) -> bool {
        self.to_query().is_empty()
    }
}

fn non_empty(pairs: &[(&'static str, &str)]) -> Vec<(&'static str, String)> {
    pairs
        .iter()
        .map(|(key, value)| (*key, value.trim()))
        .filter(|(_, value)| !value.is_empty())
        .map(|(key, value)| (key, value.to_string()))
        .collect()
}

/// `GET /utenti/search`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UtenteFilter {
    pub nome: String,
    pub cognome: String,
    pub email: String,
}

impl SearchFilter for UtenteFilter {
    fn to_query(&self) -> Vec<(&'static str, String)> {
        non_empty(&[("nome", self.nome.as_str()), ("cognome", self.cognome.as_str()), ("email", self.email.as_str())])
    }
}

/// `GET /veicoli/search`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VeicoloFilter {
    pub numero_telaio: String,
    pub marca: String,
    pub modello: String,
}

impl SearchFilter for VeicoloFilter {
    fn to_query(&self) -> Vec<(&'static str, String)> {
        non_empty(&[
            ("numeroTelaio", self.numero_telaio.as_str()),
            ("marca", self.marca.as_str()),
            ("modello", self.modello.as_str()),
        ])
    }
}

/// `GET /movimenti` (shared with the unfiltered list)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MovimentoFilter {
    pub codice_fiscale_utente: String,
    pub numero_telaio: String,
}

impl SearchFilter for MovimentoFilter {
    fn to_query(&self) -> Vec<(&'static str, String)> {
        non_empty(&[
            ("codiceFiscale", self.codice_fiscale_utente.as_str()),
            ("numeroTelaio", self.numero_telaio.as_str()),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_marca() {
        let filter = VeicoloFilter { marca: "Fiat".into(), ..Default::default() };
        assert_eq!(filter.to_query(), vec![("marca", "Fiat".to_string())]);
        assert!(!filter.is_empty());
    }

    #[test]
    fn test_whitespace_fields_are_dropped() {
        let filter = UtenteFilter { nome: "  ".into(), cognome: " Rossi ".into(), email: String::new() };
        assert_eq!(filter.to_query(), vec![("cognome", "Rossi".to_string())]);
        assert!(UtenteFilter::default().is_empty());
    }

    #[test]
    fn test_movimento_filter_uses_backend_key() {
        let filter = MovimentoFilter { codice_fiscale_utente: "RSSMRA80A01H501U".into(), ..Default::default() };
        assert_eq!(filter.to_query(), vec![("codiceFiscale", "RSSMRA80A01H501U".to_string())]);
    }
}
