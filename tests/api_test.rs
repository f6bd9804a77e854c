mod common;

use common::{BankMode, payment_request_body, test_server};
use payment_gateway::domain::payment::{Merchant, Payment, PaymentStatus};
use reqwest::StatusCode;
use serde_json::json;
use uuid::Uuid;

#[tokio::test]
async fn test_authorized_payment_end_to_end() {
    let server = test_server(BankMode::Authorize(true));
    let merchant_id = Uuid::new_v4();

    let response = server
        .post(&format!("/payment/create/{merchant_id}"))
        .json(&payment_request_body())
        .await;
    assert_eq!(response.status_code(), StatusCode::NO_CONTENT);

    let payments: Vec<Payment> = server
        .get(&format!("/payment/{merchant_id}/all"))
        .await
        .json();
    assert_eq!(payments.len(), 1);
    assert_eq!(payments[0].merchant_id, merchant_id);
    assert_eq!(payments[0].status, PaymentStatus::Authorized);
    assert_eq!(payments[0].last_four_digits, "8879");
    assert_eq!(payments[0].currency, "USD");
    assert_eq!(payments[0].amount, 100);

    let single: Payment = server
        .get(&format!("/payment/{merchant_id}/{}", payments[0].id))
        .await
        .json();
    assert_eq!(single, payments[0]);

    let all: Vec<Payment> = server.get("/payment/all").await.json();
    assert_eq!(all.len(), 1);
}

#[tokio::test]
async fn test_declined_payment_is_still_recorded() {
    let server = test_server(BankMode::Authorize(false));
    let merchant_id = Uuid::new_v4();

    let response = server
        .post(&format!("/payment/create/{merchant_id}"))
        .json(&payment_request_body())
        .await;
    assert_eq!(response.status_code(), StatusCode::NO_CONTENT);

    let payments: Vec<Payment> = server
        .get(&format!("/payment/{merchant_id}/all"))
        .await
        .json();
    assert_eq!(payments[0].status, PaymentStatus::Declined);
}

#[tokio::test]
async fn test_invalid_payment_is_rejected_with_the_accumulated_message() {
    let server = test_server(BankMode::Authorize(true));
    let merchant_id = Uuid::new_v4();

    let response = server
        .post(&format!("/payment/create/{merchant_id}"))
        .json(&json!({
            "card": {
                "number": "2222405343248879",
                "expiry_month": 12,
                "expiry_year": 2030,
                "cvv": "123"
            }
        }))
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    assert_eq!(
        response.text(),
        "Amount must be supplied\nCurrency must be supplied"
    );

    let response = server.get(&format!("/payment/{merchant_id}/all")).await;
    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
    assert_eq!(response.text(), "No payments found.");
}

#[tokio::test]
async fn test_acquirer_outage_fails_the_request_and_records_nothing() {
    let server = test_server(BankMode::Unavailable);
    let merchant_id = Uuid::new_v4();

    let response = server
        .post(&format!("/payment/create/{merchant_id}"))
        .json(&payment_request_body())
        .await;
    assert_eq!(response.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(response.text(), "Error creating payment.");

    let response = server.get(&format!("/payment/{merchant_id}/all")).await;
    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_unknown_payment_lookup_returns_not_found() {
    let server = test_server(BankMode::Authorize(true));

    let response = server
        .get(&format!("/payment/{}/{}", Uuid::new_v4(), Uuid::new_v4()))
        .await;
    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
    assert_eq!(response.text(), "Payment not found.");
}

#[tokio::test]
async fn test_merchant_create_and_list() {
    let server = test_server(BankMode::Authorize(true));

    let response = server
        .post("/merchant/create")
        .json(&json!({ "name": "Acme" }))
        .await;
    assert_eq!(response.status_code(), StatusCode::NO_CONTENT);

    let merchants: Vec<Merchant> = server.get("/merchant/all").await.json();
    assert_eq!(merchants.len(), 1);
    assert_eq!(merchants[0].name, "Acme");
    assert!(!merchants[0].id.is_nil());
}
