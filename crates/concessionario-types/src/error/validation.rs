//! Field-level validation errors.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use validator::ValidationErrors;

/// A single failed rule on a form field.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FieldError {
    /// Draft field name (snake_case, as declared on the draft struct)
    pub field: String,
    /// Message shown next to the input
    pub message: String,
}

/// Ordered list of field errors produced by a draft's `validate()`.
///
/// At most one error is kept per field: the first rule that fails wins, so
/// "required" messages take precedence over format messages.
#[derive(Debug, Clone, Default, Error, Serialize, Deserialize, PartialEq, Eq)]
#[error("{} invalid field(s)", .errors.len())]
pub struct FieldErrors {
    errors: Vec<FieldError>,
}

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `message` for `field` unless the field already has an error.
    pub fn push(&mut self, field: &str, message: impl Into<String>) {
        if self.has(field) {
            return;
        }
        self.errors.push(FieldError { field: field.to_string(), message: message.into() });
    }

    /// Record an error when `value` is empty after trimming.
    pub fn require(&mut self, field: &str, value: &str, message: &str) {
        if value.trim().is_empty() {
            self.push(field, message);
        }
    }

    /// Merge the output of a `validator` derive.
    ///
    /// `validator` reports fields in hash order, so errors are merged following
    /// `order`; fields outside `order` are appended sorted by name.
    pub fn merge_validation(&mut self, errors: &ValidationErrors, order: &[&str]) {
        let field_errors = errors.field_errors();
        let mut names: Vec<&str> = field_errors.keys().map(|name| name.as_ref()).collect();
        names.sort_by_key(|name| (order.iter().position(|o| o == name).unwrap_or(usize::MAX), *name));

        for name in names {
            let Some(failures) = field_errors.get(name) else {
                continue;
            };
            if let Some(failure) = failures.first() {
                let message = failure
                    .message
                    .as_ref()
                    .map_or_else(|| failure.code.to_string(), ToString::to_string);
                self.push(name, message);
            }
        }
    }

    pub fn has(&self, field: &str) -> bool {
        self.errors.iter().any(|e| e.field == field)
    }

    /// Message for `field`, if any.
    pub fn get(&self, field: &str) -> Option<&str> {
        self.errors.iter().find(|e| e.field == field).map(|e| e.message.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &FieldError> {
        self.errors.iter()
    }

    /// `Ok(value)` when no error was recorded.
    pub fn into_result<T>(self, value: impl FnOnce() -> T) -> Result<T, Self> {
        if self.errors.is_empty() {
            Ok(value())
        } else {
            Err(self)
        }
    }
}
