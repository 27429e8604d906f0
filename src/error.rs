use thiserror::Error;

/// Everything a TNG lookup can fail with. Errors are returned as values
/// and passed through the call chain unchanged, so callers can match on
/// the kind to decide what to show.
#[derive(Error, Debug)]
pub enum TngError {
    #[error("no such request kind: '{0}'")]
    InvalidRequestKind(String),

    #[error("failed to reach the TNG server: {0}")]
    Transport(#[source] Box<dyn std::error::Error + Send + Sync>),

    #[error("TNG replied with an error ({code}): {message}")]
    Remote { code: u16, message: String },

    #[error("failed to decode TNG response: {0}")]
    Decode(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, TngError>;
