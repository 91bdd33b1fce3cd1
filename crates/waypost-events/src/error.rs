use thiserror::Error;

/// Errors that can occur during event delivery
#[derive(Debug, Error)]
pub enum EventError {
    /// Client construction failed
    #[error("Configuration error: {0}")]
    Config(String),

    /// The request never produced a response
    #[error("Connection error: {0}")]
    Connection(String),

    /// The collector answered with a non-success status
    #[error("Collector returned HTTP {status}: {body}")]
    Http { status: u16, body: String },

    /// The response body was not a valid acknowledgement
    #[error("Response decode error: {0}")]
    Decode(String),
}
