//! Failures of the remote emotion service that cannot be reported as
//! "invalid text".

use std::time::Duration;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DetectorError {
    #[error("Emotion service did not respond within {0:?}")]
    Timeout(Duration),

    #[error("Emotion service request failed: {0}")]
    Request(#[source] reqwest::Error),

    #[error("Emotion service returned unexpected status {status}: {body}")]
    UnexpectedStatus { status: u16, body: String },

    #[error("Emotion service returned a malformed response: {0}")]
    MalformedResponse(#[from] serde_json::Error),
}

pub type DetectorResult<T> = Result<T, DetectorError>;

impl DetectorError {
    /// Classify a transport error, keeping timeouts distinct.
    pub fn from_reqwest(err: reqwest::Error, timeout: Duration) -> Self {
        if err.is_timeout() {
            Self::Timeout(timeout)
        } else {
            Self::Request(err)
        }
    }

    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::Timeout(_))
    }
}
