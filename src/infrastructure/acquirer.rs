use crate::domain::payment::{AcquirerRequest, AcquirerResponse};
use crate::domain::ports::AcquirerApi;
use crate::error::AcquirerError;
use async_trait::async_trait;
use reqwest::{Client, StatusCode, Url};

/// HTTP client for the acquiring bank's authorization endpoint.
///
/// Issues exactly one request per authorization attempt; transport failures
/// and timeouts surface as [`AcquirerError::Unexpected`].
pub struct AcquirerClient {
    client: Client,
    endpoint: Url,
}

impl AcquirerClient {
    pub fn new(endpoint: Url) -> Self {
        Self {
            client: Client::new(),
            endpoint,
        }
    }
}

#[async_trait]
impl AcquirerApi for AcquirerClient {
    async fn authorize(&self, request: AcquirerRequest) -> Result<AcquirerResponse, AcquirerError> {
        let response = self
            .client
            .post(self.endpoint.clone())
            .json(&request)
            .send()
            .await
            .map_err(|err| {
                tracing::error!(error = %err, "acquirer call did not complete");
                AcquirerError::Unexpected(err.to_string())
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(classify_failure(status));
        }

        let body = response
            .text()
            .await
            .map_err(|err| AcquirerError::Unexpected(err.to_string()))?;
        parse_response(&body)
    }
}

/// A success status with a missing or unreadable body counts as an empty
/// response.
fn parse_response(body: &str) -> Result<AcquirerResponse, AcquirerError> {
    match serde_json::from_str::<Option<AcquirerResponse>>(body) {
        Ok(Some(response)) => Ok(response),
        _ => {
            tracing::error!("acquirer response body was empty or unreadable");
            Err(AcquirerError::EmptyResponse)
        }
    }
}

fn classify_failure(status: StatusCode) -> AcquirerError {
    match status {
        StatusCode::BAD_REQUEST => {
            tracing::error!(%status, "acquirer rejected the request as malformed");
            AcquirerError::BadRequest(status)
        }
        StatusCode::SERVICE_UNAVAILABLE => {
            tracing::error!(%status, "acquirer service is unavailable");
            AcquirerError::ServiceUnavailable(status)
        }
        _ => {
            tracing::error!(%status, "unexpected status from the acquirer");
            AcquirerError::Unexpected(format!("acquirer responded with HTTP status code: {status}"))
        }
    }
}
