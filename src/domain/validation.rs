use super::payment::{Currency, PaymentRequest};
use chrono::{Datelike, Local, NaiveDate};
use regex::Regex;
use std::sync::LazyLock;

/// Numeric pattern applied to card numbers and CVVs. Permits an optional
/// leading minus and decimal fraction.
static NUMERIC: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^-?[0-9]+(?:\.[0-9]+)?$").expect("numeric pattern compiles"));

fn is_numeric(value: &str) -> bool {
    NUMERIC.is_match(value)
}

/// Accumulated validation failures for one request, in rule order.
///
/// The ordered list is exposed for structured assertions; the newline-joined
/// message is what gets surfaced at the boundary.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ValidationOutcome {
    errors: Vec<String>,
}

impl ValidationOutcome {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    pub fn message(&self) -> String {
        self.errors.join("\n")
    }
}

/// Checks a payment request's structural and business-rule validity.
///
/// All rules run and their failures accumulate, except that an absent request
/// skips everything else and an absent card number skips the remaining card
/// checks.
#[derive(Debug, Default, Clone, Copy)]
pub struct PaymentRequestValidator;

impl PaymentRequestValidator {
    pub fn new() -> Self {
        Self
    }

    pub fn validate(&self, request: Option<&PaymentRequest>) -> ValidationOutcome {
        self.validate_at(request, Local::now().date_naive())
    }

    /// Same as [`Self::validate`] with an explicit reference date for the
    /// expiry checks.
    pub fn validate_at(
        &self,
        request: Option<&PaymentRequest>,
        today: NaiveDate,
    ) -> ValidationOutcome {
        let mut errors = Vec::new();

        let Some(request) = request else {
            errors.push("Payment request must be supplied.".to_string());
            return ValidationOutcome { errors };
        };

        Self::check_card(request, today, &mut errors);
        Self::check_request_params(request, &mut errors);

        ValidationOutcome { errors }
    }

    fn check_card(request: &PaymentRequest, today: NaiveDate, errors: &mut Vec<String>) {
        let Some(card) = request.card.as_ref() else {
            errors.push("Card details must be supplied.".to_string());
            return;
        };

        if card.number.is_empty() {
            errors.push("Card number must be supplied.".to_string());
            return;
        }

        if card.number.chars().count() != 16 {
            errors.push("Card number must be 16 digits long.".to_string());
        }
        if !is_numeric(&card.number) {
            errors.push("Card number must only contain digits.".to_string());
        }
        if card.expiry_month < 1 || card.expiry_month > 12 {
            errors.push("Expiry month must be between 1 and 12.".to_string());
        }
        if card.expiry_year < today.year() {
            errors.push("Expiry year cannot be in the past.".to_string());
        } else if card.expiry_year == today.year() && card.expiry_month <= today.month() {
            errors.push("Card has already expired.".to_string());
        }
        if card.cvv.chars().count() != 3 {
            errors.push("CVV must be 3 digits long.".to_string());
        }
        if !is_numeric(&card.cvv) {
            errors.push("CVV must only contain digits.".to_string());
        }
    }

    fn check_request_params(request: &PaymentRequest, errors: &mut Vec<String>) {
        if request.merchant_id.is_nil() {
            errors.push("MerchantId must be supplied".to_string());
        }
        if request.amount.is_none() {
            errors.push("Amount must be supplied".to_string());
        }
        if request.amount.is_some_and(|amount| amount <= 0) {
            errors.push("Amount must be greater than zero".to_string());
        }
        match request.currency.as_deref() {
            None | Some("") => errors.push("Currency must be supplied".to_string()),
            Some(code) => {
                if Currency::from_code(code).is_none() {
                    errors.push("Currency supplied is invalid".to_string());
                }
            }
        }
    }
}
