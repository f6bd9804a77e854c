use crate::error::ProcessingError;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Currencies the gateway accepts, matched case-insensitively.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Currency {
    Usd,
    Eur,
    Gbp,
}

impl Currency {
    pub fn from_code(code: &str) -> Option<Self> {
        match code.to_ascii_uppercase().as_str() {
            "USD" => Some(Self::Usd),
            "EUR" => Some(Self::Eur),
            "GBP" => Some(Self::Gbp),
            _ => None,
        }
    }
}

/// Card details as submitted by the caller.
///
/// Lives only inside a request; the stored record keeps the last four digits
/// and the expiry, never the full number or CVV.
#[derive(Debug, Deserialize, Serialize, PartialEq, Clone, Default)]
pub struct Card {
    #[serde(default)]
    pub number: String,
    #[serde(default)]
    pub expiry_month: u32,
    #[serde(default)]
    pub expiry_year: i32,
    #[serde(default)]
    pub cvv: String,
}

/// An incoming payment request. Absent fields deserialize to their empty
/// representation and are caught by the validator.
#[derive(Debug, Deserialize, Serialize, PartialEq, Clone, Default)]
pub struct PaymentRequest {
    #[serde(default)]
    pub merchant_id: Uuid,
    #[serde(default)]
    pub card: Option<Card>,
    #[serde(default)]
    pub currency: Option<String>,
    #[serde(default)]
    pub amount: Option<i64>,
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone, Copy)]
pub enum PaymentStatus {
    Authorized,
    Declined,
}

/// The persisted outcome of a processed payment. Created exactly once per
/// definitive authorization decision and never mutated afterwards.
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
pub struct Payment {
    pub id: Uuid,
    pub merchant_id: Uuid,
    pub status: PaymentStatus,
    pub last_four_digits: String,
    pub expiry_month: u32,
    pub expiry_year: i32,
    pub currency: String,
    pub amount: i64,
}

impl Payment {
    /// Derives the stored record from a validated request and the acquirer's
    /// authorized/declined decision.
    ///
    /// A missing card or a card number shorter than four digits cannot occur
    /// for a request that passed validation, so both are reported as
    /// processing failures rather than panics.
    pub fn from_authorization(
        request: &PaymentRequest,
        authorized: bool,
    ) -> Result<Self, ProcessingError> {
        let card = request
            .card
            .as_ref()
            .ok_or_else(|| ProcessingError::new("payment request carries no card details"))?;

        let digits = card.number.chars().count();
        if digits < 4 {
            return Err(ProcessingError::new(
                "card number is too short to derive the last four digits",
            ));
        }

        let status = if authorized {
            PaymentStatus::Authorized
        } else {
            PaymentStatus::Declined
        };

        Ok(Self {
            id: Uuid::new_v4(),
            merchant_id: request.merchant_id,
            status,
            last_four_digits: card.number.chars().skip(digits - 4).collect(),
            expiry_month: card.expiry_month,
            expiry_year: card.expiry_year,
            currency: request.currency.clone().unwrap_or_default(),
            amount: request.amount.unwrap_or_default(),
        })
    }
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
pub struct Merchant {
    pub id: Uuid,
    pub name: String,
}

/// The request shape the acquirer expects on the wire.
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
pub struct AcquirerRequest {
    pub card_number: String,
    pub expiry_date: String,
    pub currency: String,
    pub amount: i64,
    pub cvv: String,
}

impl AcquirerRequest {
    /// Maps a validated payment request onto the acquirer wire shape.
    /// Returns `None` when the request carries no card.
    pub fn for_request(request: &PaymentRequest) -> Option<Self> {
        let card = request.card.as_ref()?;
        Some(Self {
            card_number: card.number.clone(),
            expiry_date: format!("{:02}/{}", card.expiry_month, card.expiry_year),
            currency: request.currency.clone().unwrap_or_default(),
            amount: request.amount.unwrap_or_default(),
            cvv: card.cvv.clone(),
        })
    }
}

/// The acquirer's decision for one authorization attempt.
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
pub struct AcquirerResponse {
    pub authorized: bool,
    #[serde(default)]
    pub authorization_code: Option<String>,
}
