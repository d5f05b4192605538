use thiserror::Error;

/// Failures from the prospect generation service.
#[derive(Debug, Error)]
pub enum GeneratorError {
    /// Network, TLS, or timeout failure from the underlying HTTP client.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("invalid generator base URL \"{url}\": {reason}")]
    InvalidBaseUrl { url: String, reason: String },

    #[error("unexpected HTTP status {status} from {url}: {message}")]
    UnexpectedStatus {
        status: u16,
        url: String,
        message: String,
    },

    /// The service answered with an `error` payload.
    #[error("generator error: {0}")]
    Service(String),

    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Debug, Error)]
pub enum ExpansionError {
    #[error("expansion failed: {0}")]
    Generator(#[from] GeneratorError),

    #[error("unknown vertical: {0}")]
    UnknownVertical(String),
}
