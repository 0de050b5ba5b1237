use thiserror::Error;
use tokio::task::JoinError;
use axum::http::StatusCode;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("Fetch timed out after {0:?}")]
    Timeout(std::time::Duration),

    #[error("Upstream returned HTTP {status}")]
    Upstream { status: u16 },

    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Unable to convert page contents to numbers: {0}")]
    Parse(String),

    #[error("No data to calculate standard deviation from")]
    EmptyData,

    #[error("Configuration error: {0}")]
    Config(String),
}

impl Error {
    /// HTTP status the API answers with when this error ends a request.
    pub fn status_code(&self) -> StatusCode {
        match self {
            Error::InvalidParameter(_) => StatusCode::BAD_REQUEST,
            Error::Timeout(_)
            | Error::Upstream { .. }
            | Error::Transport(_)
            | Error::Parse(_) => StatusCode::REQUEST_TIMEOUT,
            Error::EmptyData | Error::Config(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        match err.status() {
            Some(status) => Error::Upstream { status: status.as_u16() },
            None => Error::Transport(err.to_string()),
        }
    }
}

impl From<JoinError> for Error {
    fn from(err: JoinError) -> Self {
        Error::Transport(format!("fetch task failed: {}", err))
    }
}

pub type Result<T> = std::result::Result<T, Error>;
