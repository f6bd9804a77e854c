//! Application layer containing the core business logic orchestration.
//!
//! `PaymentService` runs the payment workflow end to end; `BankService` is
//! the boundary between that workflow and the acquirer; `MerchantService`
//! covers merchant onboarding.

pub mod bank_service;
pub mod merchant_service;
pub mod payment_service;
