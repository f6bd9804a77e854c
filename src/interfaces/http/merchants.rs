use super::AppState;
use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct CreateMerchantRequest {
    pub name: String,
}

pub async fn create(
    State(state): State<AppState>,
    Json(request): Json<CreateMerchantRequest>,
) -> Response {
    match state.merchant_service.create_merchant(request.name).await {
        Ok(_) => StatusCode::NO_CONTENT.into_response(),
        Err(err) => {
            tracing::error!(error = %err, "error creating merchant");
            (StatusCode::INTERNAL_SERVER_ERROR, "Error creating merchant.").into_response()
        }
    }
}

pub async fn get_all(State(state): State<AppState>) -> Response {
    match state.merchant_store.get_all().await {
        Ok(merchants) => Json(merchants).into_response(),
        Err(err) => {
            tracing::error!(error = %err, "merchant store lookup failed");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}
