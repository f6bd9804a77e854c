use crate::domain::payment::Merchant;
use crate::domain::ports::SharedMerchantStore;
use crate::error::ProcessingError;
use uuid::Uuid;

pub struct MerchantService {
    store: SharedMerchantStore,
}

impl MerchantService {
    pub fn new(store: SharedMerchantStore) -> Self {
        Self { store }
    }

    /// Creates a merchant with a generated identifier.
    pub async fn create_merchant(&self, name: String) -> Result<Merchant, ProcessingError> {
        let merchant = Merchant {
            id: Uuid::new_v4(),
            name,
        };
        tracing::info!(merchant_id = %merchant.id, name = %merchant.name, "merchant created");

        self.store
            .save(merchant.clone())
            .await
            .map_err(ProcessingError::from)?;

        Ok(merchant)
    }
}
