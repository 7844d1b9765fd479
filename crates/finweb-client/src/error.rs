//! Error types for finweb-client

use thiserror::Error;

/// A downstream call failed: transport problem, bad status, or
/// an unparseable body. Callers substitute an empty default.
#[derive(Error, Debug)]
pub enum ClientError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("unexpected status {status} from {path}")]
    Status { path: String, status: u16 },

    #[error("failed to decode response from {path}: {source}")]
    Decode {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Result type with ClientError
pub type ClientResult<T> = Result<T, ClientError>;
