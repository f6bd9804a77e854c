use super::payment::{AcquirerRequest, AcquirerResponse, Merchant, Payment};
use crate::error::{AcquirerError, StoreError};
use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

#[async_trait]
pub trait PaymentStore: Send + Sync {
    async fn save(&self, payment: Payment) -> Result<(), StoreError>;
    async fn get_all(&self) -> Result<Vec<Payment>, StoreError>;
    async fn get_by_merchant(&self, merchant_id: Uuid) -> Result<Vec<Payment>, StoreError>;
    async fn get_by_ids(
        &self,
        merchant_id: Uuid,
        payment_id: Uuid,
    ) -> Result<Option<Payment>, StoreError>;
}

#[async_trait]
pub trait MerchantStore: Send + Sync {
    async fn save(&self, merchant: Merchant) -> Result<(), StoreError>;
    async fn get_all(&self) -> Result<Vec<Merchant>, StoreError>;
}

/// Outbound authorization call to the acquiring bank. One attempt per call.
#[async_trait]
pub trait AcquirerApi: Send + Sync {
    async fn authorize(&self, request: AcquirerRequest) -> Result<AcquirerResponse, AcquirerError>;
}

pub type SharedPaymentStore = Arc<dyn PaymentStore>;
pub type SharedMerchantStore = Arc<dyn MerchantStore>;
pub type AcquirerApiBox = Box<dyn AcquirerApi>;
