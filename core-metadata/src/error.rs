use thiserror::Error;

#[derive(Error, Debug)]
pub enum MetadataError {
    #[error("Network error: {0}")]
    NetworkError(String),

    #[error("HTTP error {status}: {body}")]
    HttpError { status: u16, body: String },

    #[error("Failed to parse response: {0}")]
    JsonParse(String),

    #[error("Remote API error: {0}")]
    RemoteApi(String),

    #[error("Invalid id: {0}")]
    InvalidId(String),

    #[error("Provider already registered: {0}")]
    AlreadyRegistered(String),

    #[error("Configuration error: {0}")]
    Config(#[from] core_runtime::Error),

    #[error("Bridge error: {0}")]
    Bridge(#[from] bridge_traits::error::BridgeError),
}

pub type Result<T> = std::result::Result<T, MetadataError>;
