//! Records exchanged verbatim with the remote API.
//!
//! Keys follow the backend's camelCase JSON. Textual fields the backend may
//! send as `null` deserialize to an empty string so views never deal with
//! `Option<String>` for plain display text.

mod configurazione;
mod movimento;
mod session;
mod utente;
mod veicolo;

pub use configurazione::Configurazione;
pub use movimento::{Movimento, TipoMovimento};
pub use session::{LoginRequest, LoginResponse, SessionUser};
pub use utente::Utente;
pub use veicolo::Veicolo;

use serde::{Deserialize, Deserializer};

/// Deserialize `null` as `T::default()`.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}
