use reqwest::StatusCode;
use thiserror::Error;

/// Failure classes surfaced by the tracker client.
#[derive(Debug, Error)]
pub enum Error {
    /// The tracker rejected the token (401/403).
    #[error("tracker rejected credentials: {0}")]
    Unauthorized(String),

    #[error("tracker request failed ({status}): {body}")]
    Api { status: StatusCode, body: String },

    #[error(transparent)]
    Transport(#[from] reqwest::Error),
}

impl Error {
    /// True for failures meaning the tracker was never usable with these
    /// credentials: auth rejections and transport-level connect failures.
    /// These end the run without reports instead of propagating.
    pub fn is_connection_failure(&self) -> bool {
        match self {
            Error::Unauthorized(_) => true,
            Error::Transport(e) => e.is_connect() || e.is_timeout(),
            Error::Api { .. } => false,
        }
    }
}
