//! HTTP surface of the gateway. Handlers translate the core error taxonomy
//! into status codes: a validation rejection becomes a 400 carrying the
//! accumulated message, a processing failure becomes a generic 500.

use crate::application::merchant_service::MerchantService;
use crate::application::payment_service::PaymentService;
use crate::domain::ports::{SharedMerchantStore, SharedPaymentStore};
use axum::Router;
use axum::routing::{get, post};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

pub mod merchants;
pub mod payments;

/// Shared state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    pub payment_service: Arc<PaymentService>,
    pub merchant_service: Arc<MerchantService>,
    pub payment_store: SharedPaymentStore,
    pub merchant_store: SharedMerchantStore,
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/payment/all", get(payments::get_all))
        .route("/payment/create/{merchant_id}", post(payments::create))
        .route("/payment/{merchant_id}/all", get(payments::get_by_merchant))
        .route("/payment/{merchant_id}/{payment_id}", get(payments::get_by_ids))
        .route("/merchant/create", post(merchants::create))
        .route("/merchant/all", get(merchants::get_all))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
