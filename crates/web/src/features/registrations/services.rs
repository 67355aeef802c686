use chrono::NaiveDate;
use sqlx::PgPool;
use storage::{
    dto::registration::RegisterResponse,
    error::Result,
    models::{Profile, Registration},
    repository::{
        fee::FeeRepository, profile::ProfileRepository, registration::RegistrationRepository,
        user::UserRepository,
    },
    services::enrollment::{RegistrationCategory, dependent_profile_code},
};
use uuid::Uuid;

/// Register a user into an event under the requested category.
///
/// Resolution order is profile, user, fee; each missing piece surfaces its
/// own error so the caller can report precisely what is not configured. The
/// upsert and role swap happen in one transaction in the repository.
pub async fn register_user(
    pool: &PgPool,
    user_id: Uuid,
    event_id: Uuid,
    category: RegistrationCategory,
) -> Result<RegisterResponse> {
    let profile = ProfileRepository::new(pool)
        .find_by_event_and_name(event_id, category.profile_name())
        .await?;

    register_into_profile(pool, user_id, profile).await
}

/// Register a dependent into the age-banded profile for their birth date.
pub async fn register_dependent(
    pool: &PgPool,
    dependent_id: Uuid,
    event_id: Uuid,
    birth_date: NaiveDate,
) -> Result<RegisterResponse> {
    let today = chrono::Utc::now().date_naive();
    let code = dependent_profile_code(birth_date, today);

    let profile = ProfileRepository::new(pool)
        .find_by_event_and_code(event_id, code)
        .await?;

    register_into_profile(pool, dependent_id, profile).await
}

async fn register_into_profile(
    pool: &PgPool,
    user_id: Uuid,
    profile: Profile,
) -> Result<RegisterResponse> {
    let user = UserRepository::new(pool).find_by_id(user_id).await?;

    let fee = FeeRepository::new(pool)
        .find_for_profile(profile.event_id, profile.profile_id)
        .await?;

    let (registration, already_registered) = RegistrationRepository::new(pool)
        .register(user.user_id, &profile, &fee)
        .await?;

    tracing::info!(
        "Registration {} for user {} (profile {}, already_registered: {})",
        registration.registration_id,
        user.user_id,
        profile.type_code,
        already_registered
    );

    Ok(RegisterResponse {
        registration_id: registration.registration_id,
        user_id: registration.user_id,
        event_id: registration.event_id,
        profile_id: profile.profile_id,
        profile_name: profile.name,
        type_code: profile.type_code,
        fee_amount: fee.amount,
        fee_exempt: fee.exempt,
        already_registered,
    })
}

/// Fetch a user's registration for an event
pub async fn get_registration(
    pool: &PgPool,
    user_id: Uuid,
    event_id: Uuid,
) -> Result<Registration> {
    let repo = RegistrationRepository::new(pool);
    repo.find_for_user(user_id, event_id).await
}
