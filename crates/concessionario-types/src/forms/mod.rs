//! Typed form drafts.
//!
//! A draft holds the raw values of a form exactly as typed. `FormDraft::parse`
//! is a pure function that either produces the wire payload (trimmed, typed,
//! upper-cased where the backend expects it) or the list of field errors to
//! show inline. No network call is made for a draft that does not parse.

mod configurazione;
mod login;
mod movimento;
mod utente;
mod veicolo;

pub use configurazione::ConfigurazioneDraft;
pub use login::LoginDraft;
pub use movimento::{MovimentoDraft, MovimentoPayload};
pub use utente::{UtenteDraft, UtentePayload};
pub use veicolo::{VeicoloDraft, VeicoloPayload};

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};

use crate::error::FieldErrors;

/// A form whose values can be turned into a request payload.
pub trait FormDraft {
    type Payload;

    fn parse(&self) -> Result<Self::Payload, FieldErrors>;
}

/// Parse a date typed as `YYYY-MM-DD` (HTML date input) or `dd/mm/yyyy`.
/// A full ISO timestamp is accepted too; only its date part is kept.
pub(crate) fn parse_date(value: &str) -> Option<NaiveDate> {
    let value = value.trim();
    if let Some(date) = value.get(..10).and_then(|d| NaiveDate::parse_from_str(d, "%Y-%m-%d").ok()) {
        return Some(date);
    }
    NaiveDate::parse_from_str(value, "%d/%m/%Y").ok()
}

/// Midnight UTC of `date`, serialized by serde as an ISO-8601 timestamp.
pub(crate) fn midnight_utc(date: NaiveDate) -> DateTime<Utc> {
    date.and_time(NaiveTime::MIN).and_utc()
}

/// Value for a date input prefilled from a server date string.
pub(crate) fn date_input_value(server: Option<&str>) -> String {
    server
        .and_then(parse_date)
        .map(|d| d.format("%Y-%m-%d").to_string())
        .unwrap_or_default()
}
