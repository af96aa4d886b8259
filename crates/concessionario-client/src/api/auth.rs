use concessionario_types::{LoginRequest, LoginResponse};

use crate::error::ClientError;
use crate::http::HttpClient;

pub struct AuthApi<'a> {
    pub(super) http: &'a HttpClient,
}

impl AuthApi<'_> {
    /// `POST /auth/login`. Rejections arrive as `ClientError::Status` or as
    /// `success: false`; interpreting them is up to the session store.
    pub async fn login(&self, request: &LoginRequest) -> Result<LoginResponse, ClientError> {
        self.http.post(&["auth", "login"], request).await
    }
}
