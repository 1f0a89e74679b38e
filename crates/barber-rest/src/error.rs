use barber_core::store::LookupError;
use thiserror::Error;

/// Errors from the hosted backend adapter.
#[derive(Debug, Error)]
pub enum RestError {
    #[error("invalid backend url '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },

    #[error("http client setup failed: {0}")]
    Client(String),

    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("HTTP {status}: {body}")]
    Status { status: u16, body: String },

    #[error("response decode failed: {0}")]
    Decode(String),
}

impl From<RestError> for LookupError {
    fn from(error: RestError) -> Self {
        match error {
            RestError::Status { status: 401 | 403, body } => Self::Permission(body),
            RestError::Decode(msg) => Self::Decode(msg),
            other => Self::Transport(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn auth_statuses_map_to_permission() {
        for status in [401, 403] {
            let err: LookupError = RestError::Status {
                status,
                body: "denied".into(),
            }
            .into();
            assert_eq!(err, LookupError::Permission("denied".into()));
        }
    }

    #[test]
    fn server_errors_map_to_transport() {
        let err: LookupError = RestError::Status {
            status: 503,
            body: "down".into(),
        }
        .into();
        assert!(matches!(err, LookupError::Transport(msg) if msg.contains("503")));
    }
}
