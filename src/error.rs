use reqwest::StatusCode;
use thiserror::Error;

pub type Result<T, E = PaymentError> = std::result::Result<T, E>;

/// Failure raised by the acquirer client, one variant per call outcome.
///
/// A single authorization attempt either yields a definitive response or one
/// of these. No retries happen at any layer.
#[derive(Error, Debug)]
pub enum AcquirerError {
    #[error("acquirer call failed with HTTP status code: {0}")]
    BadRequest(StatusCode),
    #[error("acquirer call failed with HTTP status code: {0}")]
    ServiceUnavailable(StatusCode),
    #[error("acquirer returned an empty response")]
    EmptyResponse,
    #[error("unexpected error while calling the acquirer: {0}")]
    Unexpected(String),
}

/// Failure raised by a store adapter.
#[derive(Error, Debug)]
#[error("store error: {0}")]
pub struct StoreError(pub String);

/// Uniform failure for anything that goes wrong between validation and the
/// stored record. Wraps the lower-layer cause and preserves its message.
#[derive(Error, Debug)]
#[error("{message}")]
pub struct ProcessingError {
    message: String,
    #[source]
    source: Option<Box<dyn std::error::Error + Send + Sync + 'static>>,
}

impl ProcessingError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            source: None,
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl From<AcquirerError> for ProcessingError {
    fn from(err: AcquirerError) -> Self {
        Self {
            message: err.to_string(),
            source: Some(Box::new(err)),
        }
    }
}

impl From<StoreError> for ProcessingError {
    fn from(err: StoreError) -> Self {
        Self {
            message: err.to_string(),
            source: Some(Box::new(err)),
        }
    }
}

/// Outcome surfaced to callers of the payment workflow.
///
/// `Rejected` carries the accumulated validation message and maps to a
/// client error at the HTTP boundary; `Processing` maps to a server error.
#[derive(Error, Debug)]
pub enum PaymentError {
    #[error("{0}")]
    Rejected(String),
    #[error(transparent)]
    Processing(#[from] ProcessingError),
}
