use serde::{Deserialize, Serialize};
use validator::Validate;

use super::FormDraft;
use crate::error::FieldErrors;
use crate::models::LoginRequest;

/// Login form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct LoginDraft {
    #[validate(email(message = "Email non valida"))]
    pub email: String,
    pub password: String,
}

impl FormDraft for LoginDraft {
    type Payload = LoginRequest;

    fn parse(&self) -> Result<LoginRequest, FieldErrors> {
        let email = self.email.trim().to_string();

        let mut errors = FieldErrors::new();
        errors.require("email", &email, "Email obbligatoria");
        errors.require("password", &self.password, "Password obbligatoria");

        let trimmed = Self { email: email.clone(), password: String::new() };
        if let Err(failures) = Validate::validate(&trimmed) {
            errors.merge_validation(&failures, &["email"]);
        }

        errors.into_result(|| LoginRequest { email, password: self.password.clone() })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_login_requires_both_fields() {
        let errors = LoginDraft::default().parse().unwrap_err();
        assert_eq!(errors.get("email"), Some("Email obbligatoria"));
        assert_eq!(errors.get("password"), Some("Password obbligatoria"));
    }

    #[test]
    fn test_login_rejects_bad_email() {
        let draft = LoginDraft { email: "not-an-email".into(), password: "x".into() };
        let errors = draft.parse().unwrap_err();
        assert_eq!(errors.get("email"), Some("Email non valida"));
        assert!(!errors.has("password"));
    }

    #[test]
    fn test_login_payload_trims_email_only() {
        let draft = LoginDraft { email: "  admin@concessionario.it ".into(), password: " pw ".into() };
        let request = draft.parse().unwrap();
        assert_eq!(request.email, "admin@concessionario.it");
        assert_eq!(request.password, " pw ");
    }
}
