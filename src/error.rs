use reqwest::StatusCode;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Authentication error: {0}")]
    Auth(String),

    #[error("Not permitted: {0}")]
    Authorization(String),

    #[error("Validation error: {0}")]
    Validation(#[from] validator::ValidationErrors),

    #[error("Validation rejected by server: {0}")]
    ServerValidation(String),

    #[error("Invalid state: {0}")]
    InvalidState(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("API error ({status}): {message}")]
    Api { status: StatusCode, message: String },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Anyhow(#[from] anyhow::Error),
}

impl Error {
    /// Maps a non-success HTTP status plus the server-supplied message into
    /// the client taxonomy. The server message is kept verbatim so callers
    /// can surface it to the user.
    pub fn from_status(status: StatusCode, message: String) -> Self {
        match status {
            StatusCode::UNAUTHORIZED => Error::Auth(message),
            StatusCode::FORBIDDEN => Error::Authorization(message),
            StatusCode::NOT_FOUND => Error::NotFound(message),
            StatusCode::CONFLICT => Error::InvalidState(message),
            StatusCode::BAD_REQUEST | StatusCode::UNPROCESSABLE_ENTITY => {
                Error::ServerValidation(message)
            }
            _ => Error::Api { status, message },
        }
    }

    pub fn is_auth(&self) -> bool {
        matches!(self, Error::Auth(_))
    }

    pub fn is_authorization(&self) -> bool {
        matches!(self, Error::Authorization(_))
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, Error::Validation(_) | Error::ServerValidation(_))
    }

    pub fn is_invalid_state(&self) -> bool {
        matches!(self, Error::InvalidState(_))
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::NotFound(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_mapping_covers_the_taxonomy() {
        assert!(Error::from_status(StatusCode::UNAUTHORIZED, "expired".into()).is_auth());
        assert!(Error::from_status(StatusCode::FORBIDDEN, "role".into()).is_authorization());
        assert!(Error::from_status(StatusCode::NOT_FOUND, "gone".into()).is_not_found());
        assert!(Error::from_status(StatusCode::CONFLICT, "twice".into()).is_invalid_state());
        assert!(Error::from_status(StatusCode::BAD_REQUEST, "missing".into()).is_validation());

        match Error::from_status(StatusCode::INTERNAL_SERVER_ERROR, "boom".into()) {
            Error::Api { status, message } => {
                assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
                assert_eq!(message, "boom");
            }
            other => panic!("unexpected mapping: {other:?}"),
        }
    }
}
