use super::AppState;
use crate::domain::payment::PaymentRequest;
use crate::error::{PaymentError, StoreError};
use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use uuid::Uuid;

pub async fn create(
    State(state): State<AppState>,
    Path(merchant_id): Path<Uuid>,
    Json(mut request): Json<PaymentRequest>,
) -> Response {
    // The path segment wins over whatever merchant id the body carries.
    request.merchant_id = merchant_id;

    match state.payment_service.process_payment(&request).await {
        Ok(()) => {
            tracing::info!("payment processed");
            StatusCode::NO_CONTENT.into_response()
        }
        Err(PaymentError::Rejected(message)) => (StatusCode::BAD_REQUEST, message).into_response(),
        Err(PaymentError::Processing(err)) => {
            tracing::error!(error = %err, "error creating payment");
            (StatusCode::INTERNAL_SERVER_ERROR, "Error creating payment.").into_response()
        }
    }
}

pub async fn get_all(State(state): State<AppState>) -> Response {
    match state.payment_store.get_all().await {
        Ok(payments) => Json(payments).into_response(),
        Err(err) => store_failure(err),
    }
}

pub async fn get_by_merchant(
    State(state): State<AppState>,
    Path(merchant_id): Path<Uuid>,
) -> Response {
    match state.payment_store.get_by_merchant(merchant_id).await {
        Ok(payments) if payments.is_empty() => {
            (StatusCode::NOT_FOUND, "No payments found.").into_response()
        }
        Ok(payments) => Json(payments).into_response(),
        Err(err) => store_failure(err),
    }
}

pub async fn get_by_ids(
    State(state): State<AppState>,
    Path((merchant_id, payment_id)): Path<(Uuid, Uuid)>,
) -> Response {
    match state.payment_store.get_by_ids(merchant_id, payment_id).await {
        Ok(Some(payment)) => Json(payment).into_response(),
        Ok(None) => (StatusCode::NOT_FOUND, "Payment not found.").into_response(),
        Err(err) => store_failure(err),
    }
}

fn store_failure(err: StoreError) -> Response {
    tracing::error!(error = %err, "payment store lookup failed");
    StatusCode::INTERNAL_SERVER_ERROR.into_response()
}
