//! TITSA client error types.

/// Errors from the TITSA HTTP client.
#[derive(Debug, thiserror::Error)]
pub enum TitsaError {
    /// Upstream call exceeded the request timeout.
    #[error("TITSA request timed out")]
    Timeout,

    /// HTTP request failed (connection error, DNS, etc.)
    #[error("HTTP error: {0}")]
    Http(reqwest::Error),

    /// API returned an error status code
    #[error("API error {status}: {message}")]
    Api { status: u16, message: String },

    /// Failed to parse response JSON
    #[error("JSON parse error: {message}")]
    Json {
        message: String,
        body: Option<String>,
    },
}

impl From<reqwest::Error> for TitsaError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            TitsaError::Timeout
        } else {
            TitsaError::Http(err)
        }
    }
}
