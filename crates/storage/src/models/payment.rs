use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

pub const PAYMENT_STATUS_PENDING: &str = "pending";
pub const PAYMENT_STATUS_CONFIRMED: &str = "confirmed";
pub const PAYMENT_STATUS_CANCELLED: &str = "cancelled";

/// A payment toward a registration. `code` is the sequential identifier
/// shown to the user, unique per event.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Payment {
    pub payment_id: Uuid,
    pub registration_id: Uuid,
    pub event_id: Uuid,
    pub code: String,
    pub amount: Decimal,
    pub status: String,
    pub created_at: chrono::NaiveDateTime,
}
