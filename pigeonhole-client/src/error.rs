use thiserror::Error;

pub type Result<T> = std::result::Result<T, PigeonholeClientError>;

#[derive(Debug, Error)]
pub enum PigeonholeClientError {
    /// The request never completed. Surfaced as-is; retrying is the
    /// caller's decision.
    #[error("transport failure: {0}")]
    Transport(#[from] reqwest::Error),
    /// A response arrived but did not match the wire contract.
    #[error("malformed response: {0}")]
    MalformedResponse(#[from] MalformedResponse),
    /// The key to publish could not be serialized locally.
    #[error(transparent)]
    Key(#[from] pigeonhole::KeyError),

    // Wrapped errors
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    InvalidUrl(#[from] url::ParseError),
    #[error(transparent)]
    Toml(#[from] toml::de::Error),
}

/// Ways a received response can violate the wire contract.
///
/// Absence is never one of them: an empty inbox or an unpublished key is a
/// valid outcome and takes a different path entirely.
#[derive(Debug, Error)]
pub enum MalformedResponse {
    #[error("body is not the expected JSON shape: {0}")]
    Json(#[from] serde_json::Error),
    #[error("payload field is not valid hex: {0}")]
    Hex(#[from] hex::FromHexError),
    #[error("published key could not be decoded: {0}")]
    Key(#[source] pigeonhole::KeyError),
}

impl From<serde_json::Error> for PigeonholeClientError {
    fn from(error: serde_json::Error) -> Self {
        Self::MalformedResponse(MalformedResponse::Json(error))
    }
}

impl From<hex::FromHexError> for PigeonholeClientError {
    fn from(error: hex::FromHexError) -> Self {
        Self::MalformedResponse(MalformedResponse::Hex(error))
    }
}
