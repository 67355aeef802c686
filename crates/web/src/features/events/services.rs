use sqlx::PgPool;
use storage::{
    dto::event::ProfileWithFee,
    error::Result,
    models::Event,
    repository::{event::EventRepository, profile::ProfileRepository},
};
use uuid::Uuid;

/// List all events
pub async fn list_events(pool: &PgPool) -> Result<Vec<Event>> {
    let repo = EventRepository::new(pool);
    repo.list().await
}

/// Get an event by ID
pub async fn get_event(pool: &PgPool, event_id: Uuid) -> Result<Event> {
    let repo = EventRepository::new(pool);
    repo.find_by_id(event_id).await
}

/// List an event's profiles with their fees
pub async fn list_profiles(pool: &PgPool, event_id: Uuid) -> Result<Vec<ProfileWithFee>> {
    EventRepository::new(pool).find_by_id(event_id).await?;

    let repo = ProfileRepository::new(pool);
    repo.list_with_fees(event_id).await
}
