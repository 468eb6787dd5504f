use thiserror::Error;

/// Failure reported by an [`HttpTransport`](crate::transport::HttpTransport)
/// when the HTTP exchange could not be completed.
#[derive(Debug, Error)]
#[error("{0}")]
pub struct TransportError(pub String);

impl From<reqwest::Error> for TransportError {
    fn from(err: reqwest::Error) -> Self {
        // The request URL carries the API key.
        Self(err.without_url().to_string())
    }
}

/// Why a response body could not be turned into a result.
#[derive(Debug, Error)]
pub enum MalformedReason {
    /// The body is not the expected current-conditions document.
    #[error("{0}")]
    Json(#[from] serde_json::Error),

    /// The body is WeatherAPI.com's error envelope.
    #[error("WeatherAPI error {code}: {message}")]
    Api { code: i64, message: String },
}

/// Errors returned by the weather client and its building blocks.
#[derive(Debug, Error)]
pub enum WeatherError {
    /// The query or API key cannot be turned into a request URL.
    #[error("Invalid query: {0}")]
    InvalidQuery(String),

    /// The request never produced a response.
    #[error("Network error: {0}")]
    Network(#[from] TransportError),

    /// The response body does not hold current conditions.
    #[error("Malformed response: {0}")]
    MalformedResponse(#[from] MalformedReason),
}

impl From<serde_json::Error> for WeatherError {
    fn from(err: serde_json::Error) -> Self {
        WeatherError::MalformedResponse(MalformedReason::Json(err))
    }
}

/// Field-less discriminant of [`WeatherError`], handy for matching and tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    InvalidQuery,
    Network,
    MalformedResponse,
}

impl WeatherError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            WeatherError::InvalidQuery(_) => ErrorKind::InvalidQuery,
            WeatherError::Network(_) => ErrorKind::Network,
            WeatherError::MalformedResponse(_) => ErrorKind::MalformedResponse,
        }
    }

    /// Code and message when the API answered with its error envelope.
    pub fn api_error(&self) -> Option<(i64, &str)> {
        match self {
            WeatherError::MalformedResponse(MalformedReason::Api { code, message }) => {
                Some((*code, message.as_str()))
            }
            _ => None,
        }
    }
}
