//! Navigable routes.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Route {
    Login,
    Dashboard,
    Utenti,
    Veicoli,
    Movimenti,
    Configurazioni,
}

impl Route {
    /// Entries of the application shell's navigation, in display order.
    pub const NAVIGATION: [Self; 5] =
        [Self::Dashboard, Self::Utenti, Self::Veicoli, Self::Movimenti, Self::Configurazioni];

    pub const fn path(self) -> &'static str {
        match self {
            Self::Login => "/login",
            Self::Dashboard => "/",
            Self::Utenti => "/utenti",
            Self::Veicoli => "/veicoli",
            Self::Movimenti => "/movimenti",
            Self::Configurazioni => "/configurazioni",
        }
    }

    pub const fn title(self) -> &'static str {
        match self {
            Self::Login => "Login",
            Self::Dashboard => "Dashboard",
            Self::Utenti => "Utenti",
            Self::Veicoli => "Veicoli",
            Self::Movimenti => "Movimenti",
            Self::Configurazioni => "Configurazioni",
        }
    }

    /// Everything but the login screen needs a session.
    pub const fn is_protected(self) -> bool {
        !matches!(self, Self::Login)
    }

    /// Match a location pathname. Trailing slashes and query strings are ignored.
    pub fn from_path(path: &str) -> Option<Self> {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let trimmed = path.trim_end_matches('/');
        match trimmed {
            "" => Some(Self::Dashboard),
            "/login" => Some(Self::Login),
            "/utenti" => Some(Self::Utenti),
            "/veicoli" => Some(Self::Veicoli),
            "/movimenti" => Some(Self::Movimenti),
            "/configurazioni" => Some(Self::Configurazioni),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_path_roundtrips_every_route() {
        for route in [Route::Login, Route::Dashboard, Route::Utenti, Route::Veicoli, Route::Movimenti, Route::Configurazioni] {
            assert_eq!(Route::from_path(route.path()), Some(route));
        }
    }

    #[test]
    fn test_from_path_variants() {
        assert_eq!(Route::from_path("/utenti/"), Some(Route::Utenti));
        assert_eq!(Route::from_path("/veicoli?marca=Fiat"), Some(Route::Veicoli));
        assert_eq!(Route::from_path("/nope"), None);
        assert_eq!(Route::from_path("/utenti/RSSMRA80A01H501U"), None);
    }
}
