use crate::domain::payment::{Merchant, Payment};
use crate::domain::ports::{MerchantStore, PaymentStore};
use crate::error::StoreError;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

/// A thread-safe in-memory store for payment records.
///
/// Uses `Arc<RwLock<HashMap>>` to allow shared concurrent access; records are
/// only ever inserted, never mutated or removed.
#[derive(Default, Clone)]
pub struct InMemoryPaymentStore {
    payments: Arc<RwLock<HashMap<Uuid, Payment>>>,
}

impl InMemoryPaymentStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl PaymentStore for InMemoryPaymentStore {
    async fn save(&self, payment: Payment) -> Result<(), StoreError> {
        let mut payments = self.payments.write().await;
        payments.insert(payment.id, payment);
        Ok(())
    }

    async fn get_all(&self) -> Result<Vec<Payment>, StoreError> {
        let payments = self.payments.read().await;
        Ok(payments.values().cloned().collect())
    }

    async fn get_by_merchant(&self, merchant_id: Uuid) -> Result<Vec<Payment>, StoreError> {
        let payments = self.payments.read().await;
        Ok(payments
            .values()
            .filter(|payment| payment.merchant_id == merchant_id)
            .cloned()
            .collect())
    }

    async fn get_by_ids(
        &self,
        merchant_id: Uuid,
        payment_id: Uuid,
    ) -> Result<Option<Payment>, StoreError> {
        let payments = self.payments.read().await;
        Ok(payments
            .get(&payment_id)
            .filter(|payment| payment.merchant_id == merchant_id)
            .cloned())
    }
}

/// A thread-safe in-memory store for merchants.
#[derive(Default, Clone)]
pub struct InMemoryMerchantStore {
    merchants: Arc<RwLock<HashMap<Uuid, Merchant>>>,
}

impl InMemoryMerchantStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl MerchantStore for InMemoryMerchantStore {
    async fn save(&self, merchant: Merchant) -> Result<(), StoreError> {
        let mut merchants = self.merchants.write().await;
        merchants.insert(merchant.id, merchant);
        Ok(())
    }

    async fn get_all(&self) -> Result<Vec<Merchant>, StoreError> {
        let merchants = self.merchants.read().await;
        Ok(merchants.values().cloned().collect())
    }
}
