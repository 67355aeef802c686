use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

/// Join of user, profile and event.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct RoleAssignment {
    pub assignment_id: Uuid,
    pub user_id: Uuid,
    pub profile_id: Uuid,
    pub event_id: Uuid,
    pub created_at: chrono::NaiveDateTime,
}
