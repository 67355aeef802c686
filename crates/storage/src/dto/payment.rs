use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::models::Payment;

/// Request payload for creating a payment toward a registration.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreatePaymentRequest {
    pub registration_id: Uuid,

    #[validate(custom(function = "validate_amount"))]
    pub amount: Decimal,
}

fn validate_amount(amount: &Decimal) -> Result<(), validator::ValidationError> {
    if amount.is_sign_negative() {
        return Err(validator::ValidationError::new("negative_amount"));
    }
    Ok(())
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct PaymentResponse {
    pub payment_id: Uuid,
    pub registration_id: Uuid,
    pub event_id: Uuid,
    pub code: String,
    pub amount: Decimal,
    pub status: String,
    pub created_at: chrono::NaiveDateTime,
}

impl From<Payment> for PaymentResponse {
    fn from(payment: Payment) -> Self {
        Self {
            payment_id: payment.payment_id,
            registration_id: payment.registration_id,
            event_id: payment.event_id,
            code: payment.code,
            amount: payment.amount,
            status: payment.status,
            created_at: payment.created_at,
        }
    }
}

/// Request payload for changing a payment's status.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdatePaymentStatusRequest {
    #[validate(custom(function = "validate_status"))]
    pub status: String,
}

fn validate_status(status: &str) -> Result<(), validator::ValidationError> {
    use crate::models::payment::{
        PAYMENT_STATUS_CANCELLED, PAYMENT_STATUS_CONFIRMED, PAYMENT_STATUS_PENDING,
    };

    const VALID_STATUSES: &[&str] = &[
        PAYMENT_STATUS_PENDING,
        PAYMENT_STATUS_CONFIRMED,
        PAYMENT_STATUS_CANCELLED,
    ];

    if VALID_STATUSES.contains(&status) {
        Ok(())
    } else {
        Err(validator::ValidationError::new("invalid_status"))
    }
}

/// Request payload for submitting a payment proof; the attachment travels
/// base64-encoded and is forwarded as-is to the mail collaborator.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct SubmitProofRequest {
    #[validate(length(min = 1, max = 255, message = "Filename is required"))]
    pub filename: String,

    #[validate(length(min = 1, message = "Attachment content is required"))]
    pub content_base64: String,

    #[validate(length(max = 2000))]
    pub message: Option<String>,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct SubmitProofResponse {
    pub sent: bool,
}
