use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Event {
    pub event_id: Uuid,
    pub name: String,
    pub registration_opens_on: Option<chrono::NaiveDate>,
    pub registration_closes_on: Option<chrono::NaiveDate>,
    pub status: String,
    pub created_at: chrono::NaiveDateTime,
}

impl Event {
    pub fn is_active(&self) -> bool {
        self.status == "active"
    }
}
