use std::sync::Arc;

use concessionario_types::{LoginRequest, LoginResponse, Notification, Route, SessionUser, StorageError};
use parking_lot::RwLock;

use crate::api::ApiClient;
use crate::error::{ClientError, LoginError};
use crate::guard::AuthState;
use crate::storage::{SessionStorage, TOKEN_KEY, USER_KEY};

const LOGIN_OK: &str = "Login effettuato con successo";
const LOGOUT_OK: &str = "Logout effettuato con successo";
const REJECTED_BY_STATUS: &str = "Credenziali non valide";
const REJECTED_BY_BODY: &str = "Errore durante il login";

#[derive(Debug, Default)]
struct SessionState {
    user: Option<SessionUser>,
    restored: bool,
    notice: Option<Notification>,
}

/// Authenticated-user slot mirrored to durable storage.
///
/// The in-memory slot is authoritative for `is_authenticated`; storage is
/// only read back by [`SessionStore::restore`]. Writes to the two are not
/// transactional.
pub struct SessionStore {
    api: ApiClient,
    storage: Arc<dyn SessionStorage>,
    state: RwLock<SessionState>,
}

impl SessionStore {
    /// Store sharing `api`'s storage, so the token written here is the one
    /// the HTTP layer attaches.
    pub fn new(api: ApiClient) -> Self {
        let storage = api.storage();
        Self { api, storage, state: RwLock::new(SessionState::default()) }
    }

    pub fn api(&self) -> &ApiClient {
        &self.api
    }

    /// Load the session persisted by a previous login. Both entries must be
    /// present and the user entry must decode; anything else leaves the
    /// session anonymous. Returns whether a session was restored.
    pub fn restore(&self) -> bool {
        let user = match self.read_persisted() {
            Ok(user) => user,
            Err(e) => {
                tracing::warn!("Session restore failed: {}", e);
                None
            }
        };

        let restored = user.is_some();
        if let Some(user) = &user {
            tracing::info!(username = %user.username, "Session restored");
        }

        let mut state = self.state.write();
        state.user = user;
        state.restored = true;
        restored
    }

    fn read_persisted(&self) -> Result<Option<SessionUser>, StorageError> {
        let (Some(raw_user), Some(token)) = (self.storage.get(USER_KEY)?, self.storage.get(TOKEN_KEY)?) else {
            return Ok(None);
        };
        if token.is_empty() {
            return Ok(None);
        }
        serde_json::from_str(&raw_user)
            .map(Some)
            .map_err(|e| StorageError::Corrupted { key: USER_KEY.to_string(), message: e.to_string() })
    }

    /// Exchange credentials for a session. On failure nothing in memory is
    /// touched and storage is written only after the server accepted.
    pub async fn login(&self, email: &str, password: &str) -> Result<SessionUser, LoginError> {
        let request = LoginRequest { email: email.to_string(), password: password.to_string() };

        let response = self.api.auth().login(&request).await.map_err(|e| {
            tracing::warn!(email, "Login failed: {}", e);
            match e {
                ClientError::Status { message, .. } => {
                    LoginError::Rejected(message.unwrap_or_else(|| REJECTED_BY_STATUS.to_string()))
                }
                ClientError::Transport(_) => LoginError::Unreachable,
                ClientError::Decode(_) | ClientError::InvalidUrl(_) => LoginError::Malformed,
            }
        })?;

        let (user, token) = accepted_session(response)?;

        self.persist(&user, &token)?;

        tracing::info!(username = %user.username, "Login succeeded");

        let mut state = self.state.write();
        state.user = Some(user.clone());
        state.restored = true;
        state.notice = Some(Notification::success(LOGIN_OK).with_auto_hide(Notification::SESSION_AUTO_HIDE_MS));
        Ok(user)
    }

    /// Write token then user. If the user write fails the previous token is
    /// put back, so storage still holds the prior session (or none).
    fn persist(&self, user: &SessionUser, token: &str) -> Result<(), StorageError> {
        let raw_user = serde_json::to_string(user).map_err(|e| StorageError::access(USER_KEY, e.to_string()))?;
        let previous_token = self.storage.get(TOKEN_KEY)?;

        self.storage.set(TOKEN_KEY, token)?;
        if let Err(e) = self.storage.set(USER_KEY, &raw_user) {
            tracing::warn!(username = %user.username, "Cannot persist session, restoring previous token: {}", e);
            let rollback = match previous_token.as_deref() {
                Some(previous) => self.storage.set(TOKEN_KEY, previous),
                None => self.storage.remove(TOKEN_KEY),
            };
            if let Err(rollback_err) = rollback {
                tracing::warn!("Cannot restore previous token: {}", rollback_err);
            }
            return Err(e);
        }
        Ok(())
    }

    /// Drop the session everywhere. Storage failures are logged; the
    /// in-memory slot is cleared regardless. Returns where to navigate.
    pub fn logout(&self) -> Route {
        for key in [USER_KEY, TOKEN_KEY] {
            if let Err(e) = self.storage.remove(key) {
                tracing::warn!("Cannot clear '{}' on logout: {}", key, e);
            }
        }

        let mut state = self.state.write();
        if let Some(user) = state.user.take() {
            tracing::info!(username = %user.username, "Logged out");
            state.notice = Some(Notification::success(LOGOUT_OK).with_auto_hide(Notification::SESSION_AUTO_HIDE_MS));
        }
        state.restored = true;
        Route::Login
    }

    pub fn is_authenticated(&self) -> bool {
        self.state.read().user.is_some()
    }

    /// False until [`Self::restore`] (or a login) has run.
    pub fn is_ready(&self) -> bool {
        self.state.read().restored
    }

    pub fn current_user(&self) -> Option<SessionUser> {
        self.state.read().user.clone()
    }

    pub fn auth_state(&self) -> AuthState {
        let state = self.state.read();
        match (state.restored, state.user.is_some()) {
            (false, _) => AuthState::Restoring,
            (true, true) => AuthState::Authenticated,
            (true, false) => AuthState::Anonymous,
        }
    }

    /// Pending login/logout banner, handed out once.
    pub fn take_notification(&self) -> Option<Notification> {
        self.state.write().notice.take()
    }
}

fn accepted_session(response: LoginResponse) -> Result<(SessionUser, String), LoginError> {
    if !response.success {
        let reason = response.message.filter(|m| !m.trim().is_empty());
        return Err(LoginError::Rejected(reason.unwrap_or_else(|| REJECTED_BY_BODY.to_string())));
    }

    let username = response.username.filter(|u| !u.trim().is_empty());
    let token = response.token.filter(|t| !t.is_empty());
    match (username, token) {
        (Some(username), Some(token)) => Ok((SessionUser { username }, token)),
        _ => Err(LoginError::Malformed),
    }
}
