//! Typed error definitions shared by the client and the UI.
//!
//! - **`FieldErrors`** - ordered, field-level validation output of a form draft
//! - **`StorageError`** - failures of the durable session storage

mod storage;
mod validation;

pub use storage::StorageError;
pub use validation::{FieldError, FieldErrors};
