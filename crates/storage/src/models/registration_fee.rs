use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

/// Registration fee tied to an (event, profile) pair.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct RegistrationFee {
    pub fee_id: Uuid,
    pub event_id: Uuid,
    pub profile_id: Uuid,
    pub amount: Decimal,
    pub exempt: bool,
}
