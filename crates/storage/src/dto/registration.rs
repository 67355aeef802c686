use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::models::Registration;
use crate::services::enrollment::RegistrationCategory;

/// Request payload for registering a user into an event.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct RegisterRequest {
    pub user_id: Uuid,
    pub event_id: Uuid,
    pub category: RegistrationCategory,
}

/// Request payload for registering a dependent into an event.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct DependentRegisterRequest {
    pub dependent_id: Uuid,
    pub event_id: Uuid,
    #[validate(custom(function = "validate_birth_date"))]
    pub birth_date: NaiveDate,
}

fn validate_birth_date(birth_date: &NaiveDate) -> Result<(), validator::ValidationError> {
    if *birth_date > chrono::Utc::now().date_naive() {
        return Err(validator::ValidationError::new("birth_date_in_future"));
    }
    Ok(())
}

/// Outcome of a registration call. `already_registered` distinguishes a
/// fresh row from an update of an existing one.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct RegisterResponse {
    pub registration_id: Uuid,
    pub user_id: Uuid,
    pub event_id: Uuid,
    pub profile_id: Uuid,
    pub profile_name: String,
    pub type_code: String,
    pub fee_amount: Decimal,
    pub fee_exempt: bool,
    pub already_registered: bool,
}

/// Basic registration row as stored.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct RegistrationResponse {
    pub registration_id: Uuid,
    pub user_id: Uuid,
    pub event_id: Uuid,
    pub profile_id: Uuid,
    pub fee_id: Uuid,
    pub created_at: chrono::NaiveDateTime,
    pub updated_at: chrono::NaiveDateTime,
}

impl From<Registration> for RegistrationResponse {
    fn from(registration: Registration) -> Self {
        Self {
            registration_id: registration.registration_id,
            user_id: registration.user_id,
            event_id: registration.event_id,
            profile_id: registration.profile_id,
            fee_id: registration.fee_id,
            created_at: registration.created_at,
            updated_at: registration.updated_at,
        }
    }
}
