use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::user::Role;

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 1))]
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 8))]
    pub password: String,
    #[validate(length(min = 1))]
    pub first_name: String,
    #[validate(length(min = 1))]
    pub last_name: String,
    pub role: Role,
    pub phone: Option<String>,
}

/// Returned by both login and register; the token is opaque and attached to
/// every subsequent request.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthResponse {
    pub token: String,
    pub user_id: String,
    pub email: String,
    pub role: Role,
    pub first_name: String,
    pub last_name: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::Validate;

    #[test]
    fn login_requires_well_formed_email() {
        let bad = LoginRequest {
            email: "not-an-email".into(),
            password: "secret".into(),
        };
        assert!(bad.validate().is_err());

        let ok = LoginRequest {
            email: "ada@example.com".into(),
            password: "secret".into(),
        };
        assert!(ok.validate().is_ok());
    }

    #[test]
    fn register_rejects_short_passwords() {
        let req = RegisterRequest {
            email: "ada@example.com".into(),
            password: "short".into(),
            first_name: "Ada".into(),
            last_name: "Lovelace".into(),
            role: Role::Candidate,
            phone: None,
        };
        assert!(req.validate().is_err());
    }
}
