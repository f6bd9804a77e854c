use async_trait::async_trait;
use axum_test::TestServer;
use payment_gateway::application::bank_service::BankService;
use payment_gateway::application::merchant_service::MerchantService;
use payment_gateway::application::payment_service::PaymentService;
use payment_gateway::domain::payment::{AcquirerRequest, AcquirerResponse};
use payment_gateway::domain::ports::{AcquirerApi, SharedMerchantStore, SharedPaymentStore};
use payment_gateway::error::AcquirerError;
use payment_gateway::infrastructure::in_memory::{InMemoryMerchantStore, InMemoryPaymentStore};
use payment_gateway::interfaces::http::{AppState, router};
use reqwest::StatusCode;
use serde_json::{Value, json};
use std::sync::Arc;

/// What the stubbed acquirer does for every authorization attempt.
pub enum BankMode {
    Authorize(bool),
    Unavailable,
}

struct StubAcquirer {
    mode: BankMode,
}

#[async_trait]
impl AcquirerApi for StubAcquirer {
    async fn authorize(&self, _request: AcquirerRequest) -> Result<AcquirerResponse, AcquirerError> {
        match self.mode {
            BankMode::Authorize(authorized) => Ok(AcquirerResponse {
                authorized,
                authorization_code: authorized.then(|| "auth-0001".to_string()),
            }),
            BankMode::Unavailable => Err(AcquirerError::ServiceUnavailable(
                StatusCode::SERVICE_UNAVAILABLE,
            )),
        }
    }
}

/// Builds the full application with in-memory stores and a stubbed acquirer.
pub fn test_server(mode: BankMode) -> TestServer {
    let payment_store: SharedPaymentStore = Arc::new(InMemoryPaymentStore::new());
    let merchant_store: SharedMerchantStore = Arc::new(InMemoryMerchantStore::new());

    let bank = BankService::new(Box::new(StubAcquirer { mode }));
    let state = AppState {
        payment_service: Arc::new(PaymentService::new(payment_store.clone(), bank)),
        merchant_service: Arc::new(MerchantService::new(merchant_store.clone())),
        payment_store,
        merchant_store,
    };

    TestServer::new(router(state)).expect("test server starts")
}

pub fn payment_request_body() -> Value {
    json!({
        "card": {
            "number": "2222405343248879",
            "expiry_month": 12,
            "expiry_year": 2030,
            "cvv": "123"
        },
        "currency": "USD",
        "amount": 100
    })
}
