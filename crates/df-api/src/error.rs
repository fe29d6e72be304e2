/// Errors that can occur talking to the Dragonfish API.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum ApiError {
    /// The request never produced a response (connect failure, timeout).
    #[error("Request to '{endpoint}' failed: {source}")]
    Request {
        endpoint: String,
        #[source]
        source: reqwest::Error,
    },

    /// The server answered with a non-success status.
    #[error("'{endpoint}' returned HTTP {status}")]
    Status {
        endpoint: String,
        status: reqwest::StatusCode,
    },

    /// The response body was not the expected JSON envelope.
    #[error("Failed to decode response from '{endpoint}': {source}")]
    Decode {
        endpoint: String,
        #[source]
        source: reqwest::Error,
    },

    /// The client could not be constructed from the given configuration.
    #[error("Invalid client configuration: {0}")]
    Config(String),
}

impl ApiError {
    /// Returns true if this error is transient and the call may succeed on retry.
    pub fn is_transient(&self) -> bool {
        match self {
            ApiError::Request { source, .. } => source.is_timeout() || source.is_connect(),
            ApiError::Status { status, .. } => status.is_server_error(),
            _ => false,
        }
    }
}
