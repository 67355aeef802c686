use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::models::Event;

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct EventResponse {
    pub event_id: Uuid,
    pub name: String,
    pub registration_opens_on: Option<chrono::NaiveDate>,
    pub registration_closes_on: Option<chrono::NaiveDate>,
    pub status: String,
}

impl From<Event> for EventResponse {
    fn from(event: Event) -> Self {
        Self {
            event_id: event.event_id,
            name: event.name,
            registration_opens_on: event.registration_opens_on,
            registration_closes_on: event.registration_closes_on,
            status: event.status,
        }
    }
}

/// Profile joined with its configured fee for an event.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct ProfileWithFee {
    pub profile_id: Uuid,
    pub name: String,
    pub type_code: String,
    pub amount: Option<Decimal>,
    pub exempt: Option<bool>,
}
