use super::bank_service::BankService;
use crate::domain::payment::{Payment, PaymentRequest};
use crate::domain::ports::SharedPaymentStore;
use crate::domain::validation::PaymentRequestValidator;
use crate::error::{PaymentError, ProcessingError};

/// The payment workflow: validate, authorize with the bank, record the
/// outcome.
///
/// A declined authorization is a successful run of the workflow; the decline
/// is visible only in the stored record's status. Nothing is persisted unless
/// the acquirer returned a definitive decision.
pub struct PaymentService {
    store: SharedPaymentStore,
    bank: BankService,
    validator: PaymentRequestValidator,
}

impl PaymentService {
    pub fn new(store: SharedPaymentStore, bank: BankService) -> Self {
        Self {
            store,
            bank,
            validator: PaymentRequestValidator::new(),
        }
    }

    pub async fn process_payment(&self, request: &PaymentRequest) -> Result<(), PaymentError> {
        let outcome = self.validator.validate(Some(request));
        if !outcome.is_valid() {
            return Err(PaymentError::Rejected(outcome.message()));
        }

        let response = self.bank.get_authorization(request).await?;
        let payment = Payment::from_authorization(request, response.authorized)?;

        if let Err(err) = self.store.save(payment).await {
            tracing::error!(error = %err, "failed to persist the payment record");
            return Err(ProcessingError::from(err).into());
        }

        Ok(())
    }
}
