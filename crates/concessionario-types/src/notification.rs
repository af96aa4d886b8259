//! Transient, auto-dismissing messages.

use std::sync::atomic::{AtomicU64, Ordering};

use serde::{Deserialize, Serialize};

static NEXT_ID: AtomicU64 = AtomicU64::new(1);

fn next_id() -> u64 {
    NEXT_ID.fetch_add(1, Ordering::Relaxed)
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    #[default]
    Success,
    Info,
    Error,
}

impl Severity {
    pub const fn class(self) -> &'static str {
        match self {
            Self::Success => "alert--success",
            Self::Info => "alert--info",
            Self::Error => "alert--error",
        }
    }
}

/// A message shown briefly and then dismissed automatically.
///
/// Every constructed notification gets its own `id`, so two banners with the
/// same text are still told apart by their auto-hide timers.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Notification {
    #[serde(default)]
    pub id: u64,
    pub message: String,
    pub severity: Severity,
    pub auto_hide_ms: u32,
}

impl Notification {
    /// Login/logout banners.
    pub const SESSION_AUTO_HIDE_MS: u32 = 3_000;
    /// Page action results.
    pub const PAGE_AUTO_HIDE_MS: u32 = 6_000;

    fn new(message: String, severity: Severity) -> Self {
        Self { id: next_id(), message, severity, auto_hide_ms: Self::PAGE_AUTO_HIDE_MS }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(message.into(), Severity::Success)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(message.into(), Severity::Error)
    }

    #[must_use]
    pub const fn with_auto_hide(mut self, auto_hide_ms: u32) -> Self {
        self.auto_hide_ms = auto_hide_ms;
        self
    }

    pub const fn is_error(&self) -> bool {
        matches!(self.severity, Severity::Error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identical_messages_are_distinct_notifications() {
        let first = Notification::error("Errore durante l'aggiunta del veicolo");
        let second = Notification::error("Errore durante l'aggiunta del veicolo");

        assert_ne!(first.id, second.id);
        assert_ne!(first, second);
        assert_eq!(first.clone(), first);
    }

    #[test]
    fn test_auto_hide_override_keeps_identity() {
        let notice = Notification::success("Login effettuato con successo");
        let id = notice.id;
        let notice = notice.with_auto_hide(Notification::SESSION_AUTO_HIDE_MS);

        assert_eq!(notice.id, id);
        assert_eq!(notice.auto_hide_ms, 3_000);
        assert!(!notice.is_error());
    }
}
