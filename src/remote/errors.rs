use reqwest::StatusCode;
use thiserror::Error;

/// Failure modes of one fetch cycle against the remote ideas service.
///
/// The three variants are surfaced to callers unchanged so the view layer
/// can distinguish a failed fetch from an empty result.
#[derive(Debug, Error)]
pub enum RemoteError {
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("unexpected status: {0}")]
    Status(StatusCode),

    #[error("malformed response: {0}")]
    Malformed(String),
}

pub type RemoteResult<T> = Result<T, RemoteError>;
