use thiserror::Error;

#[derive(Error, Debug)]
pub enum DocError {
    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Upstream returned status {status} for {endpoint}")]
    UpstreamError { endpoint: String, status: u16 },

    #[error("Shipment {id} not found")]
    ShipmentNotFound { id: String },

    #[error("Shipment record has no usable id")]
    MissingShipmentId,

    #[error("Invalid value for {field} ({value}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },
}

pub type Result<T> = std::result::Result<T, DocError>;
