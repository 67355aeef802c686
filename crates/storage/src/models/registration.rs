use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

/// A user's registration in an event, pointing at the resolved profile and
/// fee. At most one row per (user, event).
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Registration {
    pub registration_id: Uuid,
    pub user_id: Uuid,
    pub event_id: Uuid,
    pub profile_id: Uuid,
    pub fee_id: Uuid,
    pub created_at: chrono::NaiveDateTime,
    pub updated_at: chrono::NaiveDateTime,
}
