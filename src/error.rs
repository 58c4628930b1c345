use aws_sdk_dynamodb::{error, operation};

/// Errors produced by table operations and helpers.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A record or criteria value could not be converted to or from DynamoDB attribute values.
    #[error("could not convert attribute values: {0}")]
    Attribute(#[from] serde_dynamo::Error),
    /// A value could not be serialized to JSON.
    #[error("could not serialize JSON: {0}")]
    Json(#[from] serde_json::Error),
    /// The scan call failed.
    #[error("scan failed: {0}")]
    Scan(#[from] error::SdkError<operation::scan::ScanError>),
    /// The put call failed.
    #[error("put failed: {0}")]
    Put(#[from] error::SdkError<operation::put_item::PutItemError>),
    /// A store implementation other than the SDK client failed.
    #[error("store call failed: {0}")]
    Store(Box<dyn std::error::Error + Send + Sync>),
    /// A log level outside of `info`, `warn` and `error` was requested.
    #[error("{0} is not a valid log level")]
    InvalidLogLevel(String),
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;
