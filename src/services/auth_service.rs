use tracing::{info, instrument};
use validator::Validate;

use crate::dto::auth_dto::{AuthResponse, LoginRequest, RegisterRequest};
use crate::error::Result;
use crate::http::ApiClient;

#[derive(Clone)]
pub struct AuthService {
    api: ApiClient,
}

impl AuthService {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    /// Exchanges credentials for a token and establishes the session. A
    /// deactivated account is rejected by the server with 401, which surfaces
    /// here as an authentication error.
    #[instrument(skip(self, payload))]
    pub async fn login(&self, payload: LoginRequest) -> Result<AuthResponse> {
        payload.validate()?;

        let auth: AuthResponse = self.api.post("/auth/login", &payload).await?;
        info!(email = %auth.email, role = %auth.role, "Logged in");
        self.api.session().establish(auth.clone());
        Ok(auth)
    }

    /// Registers a new account. On success the backend returns a token
    /// immediately, so the session is established in the same step.
    #[instrument(skip(self, payload))]
    pub async fn register(&self, payload: RegisterRequest) -> Result<AuthResponse> {
        payload.validate()?;

        let auth: AuthResponse = self.api.post("/auth/register", &payload).await?;
        info!(email = %auth.email, role = %auth.role, "Registered");
        self.api.session().establish(auth.clone());
        Ok(auth)
    }

    /// Clears the session atomically. Purely local; the token is opaque and
    /// has no server-side revocation endpoint.
    pub fn logout(&self) {
        self.api.session().clear();
        info!("Logged out");
    }
}
