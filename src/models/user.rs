use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Platform roles. A user's role is immutable by the user themself; only an
/// admin may change another user's role or active flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    Admin,
    Recruiter,
    Candidate,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "ADMIN",
            Role::Recruiter => "RECRUITER",
            Role::Candidate => "CANDIDATE",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub email: String,
    /// Joined full name as rendered by the backend.
    pub name: String,
    pub role: Role,
    pub is_active: bool,
    pub created_at: Option<NaiveDateTime>,
    pub updated_at: Option<NaiveDateTime>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile: Option<UserProfile>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub phone: Option<String>,
    pub location: Option<String>,
    pub avatar: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_round_trips_screaming_snake_case() {
        let json = serde_json::to_string(&Role::Candidate).unwrap();
        assert_eq!(json, "\"CANDIDATE\"");
        let role: Role = serde_json::from_str("\"RECRUITER\"").unwrap();
        assert_eq!(role, Role::Recruiter);
    }

    #[test]
    fn user_deserializes_from_wire_shape() {
        let user: User = serde_json::from_value(serde_json::json!({
            "id": "64f1c0ffee",
            "email": "ada@example.com",
            "name": "Ada Lovelace",
            "role": "ADMIN",
            "isActive": true,
            "createdAt": "2026-01-05T09:30:00",
            "updatedAt": null
        }))
        .unwrap();
        assert_eq!(user.role, Role::Admin);
        assert!(user.is_active);
        assert!(user.profile.is_none());
    }
}
