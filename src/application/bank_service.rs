use crate::domain::payment::{AcquirerRequest, AcquirerResponse, PaymentRequest};
use crate::domain::ports::AcquirerApiBox;
use crate::error::ProcessingError;

/// Wraps the acquirer call behind a uniform failure boundary.
///
/// Callers above this layer see a single `ProcessingError` carrying the
/// original cause's message, whatever failed underneath.
pub struct BankService {
    acquirer: AcquirerApiBox,
}

impl BankService {
    pub fn new(acquirer: AcquirerApiBox) -> Self {
        Self { acquirer }
    }

    pub async fn get_authorization(
        &self,
        request: &PaymentRequest,
    ) -> Result<AcquirerResponse, ProcessingError> {
        let acquirer_request = AcquirerRequest::for_request(request)
            .ok_or_else(|| ProcessingError::new("payment request carries no card details"))?;

        match self.acquirer.authorize(acquirer_request).await {
            Ok(response) => Ok(response),
            Err(err) => {
                tracing::error!(error = %err, "authorization attempt with the acquirer failed");
                Err(ProcessingError::from(err))
            }
        }
    }
}
