use std::path::PathBuf;
use std::sync::{Arc, RwLock};

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::dto::auth_dto::AuthResponse;
use crate::models::user::Role;

/// The authenticated identity. Exists only while logged in; the token is
/// opaque and attached to every API call.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    pub user_id: String,
    pub email: String,
    pub role: Role,
    pub first_name: String,
    pub last_name: String,
    pub token: String,
}

impl Session {
    pub fn display_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// Shared, injectable session state. Cloning is cheap; every clone observes
/// the same session. With a path configured the session survives process
/// restarts.
#[derive(Clone, Default)]
pub struct SessionStore {
    inner: Arc<RwLock<Option<Session>>>,
    path: Option<PathBuf>,
}

impl SessionStore {
    pub fn in_memory() -> Self {
        Self::default()
    }

    /// Restores a previously persisted session if one is readable. A corrupt
    /// or missing file simply starts logged out.
    pub fn with_persistence(path: PathBuf) -> Self {
        let restored = match std::fs::read_to_string(&path) {
            Ok(raw) => match serde_json::from_str::<Session>(&raw) {
                Ok(session) => {
                    debug!(email = %session.email, "Restored persisted session");
                    Some(session)
                }
                Err(e) => {
                    warn!(error = %e, "Discarding unreadable session file");
                    None
                }
            },
            Err(_) => None,
        };

        Self {
            inner: Arc::new(RwLock::new(restored)),
            path: Some(path),
        }
    }

    /// Set on login/register.
    pub fn establish(&self, auth: AuthResponse) {
        let session = Session {
            user_id: auth.user_id,
            email: auth.email,
            role: auth.role,
            first_name: auth.first_name,
            last_name: auth.last_name,
            token: auth.token,
        };
        if let Some(path) = &self.path {
            if let Err(e) = std::fs::write(path, serde_json::to_vec(&session).unwrap_or_default())
            {
                warn!(error = %e, "Failed to persist session");
            }
        }
        *self.inner.write().expect("session lock poisoned") = Some(session);
    }

    /// Cleared atomically on logout; the persisted copy goes with it.
    pub fn clear(&self) {
        *self.inner.write().expect("session lock poisoned") = None;
        if let Some(path) = &self.path {
            let _ = std::fs::remove_file(path);
        }
    }

    pub fn current(&self) -> Option<Session> {
        self.inner.read().expect("session lock poisoned").clone()
    }

    pub fn token(&self) -> Option<String> {
        self.inner
            .read()
            .expect("session lock poisoned")
            .as_ref()
            .map(|s| s.token.clone())
    }

    pub fn role(&self) -> Option<Role> {
        self.inner
            .read()
            .expect("session lock poisoned")
            .as_ref()
            .map(|s| s.role)
    }

    pub fn email(&self) -> Option<String> {
        self.inner
            .read()
            .expect("session lock poisoned")
            .as_ref()
            .map(|s| s.email.clone())
    }

    pub fn is_authenticated(&self) -> bool {
        self.inner.read().expect("session lock poisoned").is_some()
    }
}
