//! AWDB client error types.

use std::fmt;

/// Errors from the AWDB client.
#[derive(Debug)]
pub enum AwdbError {
    /// HTTP request failed (network error, timeout, TLS, etc.)
    Http(reqwest::Error),

    /// JSON deserialization or conversion failed
    Json {
        message: String,
        body: Option<String>,
    },

    /// API returned an error status code
    Api { status: u16, message: String },

    /// Rate limited by the API
    RateLimited,

    /// The service rejected the request as unauthorized
    Unauthorized,

    /// Mock fixture data could not be loaded
    Fixture(String),
}

impl fmt::Display for AwdbError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AwdbError::Http(e) => write!(f, "HTTP error: {e}"),
            AwdbError::Json { message, body } => {
                write!(f, "JSON parse error: {message}")?;
                if let Some(body) = body {
                    write!(f, " (body: {body})")?;
                }
                Ok(())
            }
            AwdbError::Api { status, message } => write!(f, "API error {status}: {message}"),
            AwdbError::RateLimited => write!(f, "rate limited by AWDB"),
            AwdbError::Unauthorized => write!(f, "unauthorized by AWDB"),
            AwdbError::Fixture(msg) => write!(f, "mock fixture error: {msg}"),
        }
    }
}

impl std::error::Error for AwdbError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AwdbError::Http(e) => Some(e),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for AwdbError {
    fn from(err: reqwest::Error) -> Self {
        AwdbError::Http(err)
    }
}
