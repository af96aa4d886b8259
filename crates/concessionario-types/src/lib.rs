//! # Concessionario Types
//!
//! Records, typed form inputs and shared error definitions for the
//! Concessionario back office.
//!
//! - **`models`** - Records exchanged verbatim with the remote API
//! - **`forms`** - Typed drafts with pure validation into wire payloads
//! - **`filters`** - Search filters that drop empty fields
//! - **`error`** - Field-level validation errors and storage errors
//! - **`routes`** / **`notification`** - Navigation targets and transient messages
//!
//! ## Architecture Role
//!
//! `concessionario-types` sits at the bottom of the dependency graph and does
//! no I/O:
//!
//! ```text
//!            concessionario-types (this crate)
//!                        │
//!                        ▼
//!              concessionario-client
//!                        │
//!                        ▼
//!              concessionario-leptos
//! ```

pub mod error;
pub mod filters;
pub mod forms;
pub mod models;
pub mod notification;
pub mod routes;

pub use error::{FieldError, FieldErrors, StorageError};
pub use filters::{MovimentoFilter, SearchFilter, UtenteFilter, VeicoloFilter};
pub use forms::{
    ConfigurazioneDraft, FormDraft, LoginDraft, MovimentoDraft, MovimentoPayload, UtenteDraft,
    UtentePayload, VeicoloDraft, VeicoloPayload,
};
pub use models::{
    Configurazione, LoginRequest, LoginResponse, Movimento, SessionUser, TipoMovimento, Utente,
    Veicolo,
};
pub use notification::{Notification, Severity};
pub use routes::Route;
