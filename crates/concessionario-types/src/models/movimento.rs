use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::null_as_default;

/// Direction of a movement, from the dealership's point of view.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TipoMovimento {
    #[default]
    Vendita,
    Acquisto,
}

impl TipoMovimento {
    pub const ALL: [Self; 2] = [Self::Vendita, Self::Acquisto];

    /// Wire value (`VENDITA` / `ACQUISTO`).
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Vendita => "VENDITA",
            Self::Acquisto => "ACQUISTO",
        }
    }

    /// Human label.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Vendita => "Vendita",
            Self::Acquisto => "Acquisto",
        }
    }
}

impl fmt::Display for TipoMovimento {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for TipoMovimento {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "VENDITA" => Ok(Self::Vendita),
            "ACQUISTO" => Ok(Self::Acquisto),
            other => Err(format!("Tipo movimento sconosciuto: {other}")),
        }
    }
}

/// Sale or purchase transaction.
///
/// `idMovimento` is the only identity field, used both by the list and by the
/// detail view. The customer and vehicle display fields are denormalized by the
/// server; the client never looks them up.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct Movimento {
    pub id_movimento: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub tipo_movimento: TipoMovimento,
    #[serde(default)]
    pub data_movimento: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub prezzo: f64,

    #[serde(default, deserialize_with = "null_as_default")]
    pub codice_fiscale_utente: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub nome_utente: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub cognome_utente: String,

    #[serde(default)]
    pub codice_fiscale_comproprietario: Option<String>,
    #[serde(default)]
    pub nome_comproprietario: Option<String>,
    #[serde(default)]
    pub cognome_comproprietario: Option<String>,

    #[serde(default, deserialize_with = "null_as_default")]
    pub numero_telaio: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub marca_veicolo: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub modello_veicolo: String,

    #[serde(default)]
    pub note: Option<String>,
}

impl Movimento {
    pub fn cliente(&self) -> String {
        format!("{} {}", self.nome_utente, self.cognome_utente).trim().to_string()
    }

    /// Co-owner display name; `None` when the movement has no co-owner.
    pub fn comproprietario(&self) -> Option<String> {
        self.codice_fiscale_comproprietario.as_ref().filter(|cf| !cf.is_empty())?;
        let name = format!(
            "{} {}",
            self.nome_comproprietario.as_deref().unwrap_or_default(),
            self.cognome_comproprietario.as_deref().unwrap_or_default()
        );
        Some(name.trim().to_string())
    }

    pub fn veicolo(&self) -> String {
        format!("{} {}", self.marca_veicolo, self.modello_veicolo).trim().to_string()
    }

    pub fn search_text(&self) -> String {
        format!(
            "{} {} {} {} {} {}",
            self.id_movimento,
            self.tipo_movimento.label(),
            self.cliente(),
            self.codice_fiscale_utente,
            self.veicolo(),
            self.numero_telaio
        )
        .to_lowercase()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_tipo_movimento_wire_format() {
        assert_eq!(serde_json::to_string(&TipoMovimento::Acquisto).unwrap(), "\"ACQUISTO\"");
        let parsed: TipoMovimento = serde_json::from_str("\"VENDITA\"").unwrap();
        assert_eq!(parsed, TipoMovimento::Vendita);
        assert_eq!("acquisto".parse::<TipoMovimento>().unwrap(), TipoMovimento::Acquisto);
        assert!("NOLEGGIO".parse::<TipoMovimento>().is_err());
    }

    #[test]
    fn test_movimento_display_fields() {
        let json = r#"{
            "idMovimento": 12,
            "tipoMovimento": "ACQUISTO",
            "dataMovimento": "2024-03-05T00:00:00",
            "prezzo": 15500.5,
            "codiceFiscaleUtente": "RSSMRA80A01H501U",
            "nomeUtente": "Mario",
            "cognomeUtente": "Rossi",
            "codiceFiscaleComproprietario": null,
            "numeroTelaio": "ZFA12300000123456",
            "marcaVeicolo": "Fiat",
            "modelloVeicolo": "Panda"
        }"#;

        let movimento: Movimento = serde_json::from_str(json).unwrap();
        assert_eq!(movimento.id_movimento, 12);
        assert_eq!(movimento.cliente(), "Mario Rossi");
        assert_eq!(movimento.veicolo(), "Fiat Panda");
        assert_eq!(movimento.comproprietario(), None);
    }

    #[test]
    fn test_null_tipo_movimento_falls_back_to_default() {
        let json = r#"[
            { "idMovimento": 1, "tipoMovimento": null, "prezzo": 100.0 },
            { "idMovimento": 2, "tipoMovimento": "ACQUISTO", "prezzo": null }
        ]"#;

        let movimenti: Vec<Movimento> = serde_json::from_str(json).unwrap();
        assert_eq!(movimenti.len(), 2);
        assert_eq!(movimenti[0].tipo_movimento, TipoMovimento::Vendita);
        assert_eq!(movimenti[1].tipo_movimento, TipoMovimento::Acquisto);
        assert!(movimenti[1].prezzo.abs() < f64::EPSILON);
    }

    #[test]
    fn test_movimento_with_comproprietario() {
        let movimento = Movimento {
            codice_fiscale_comproprietario: Some("VRDLGU85B02F205X".to_string()),
            nome_comproprietario: Some("Luigi".to_string()),
            cognome_comproprietario: Some("Verdi".to_string()),
            ..Default::default()
        };
        assert_eq!(movimento.comproprietario().as_deref(), Some("Luigi Verdi"));
    }
}
