use axum::{
    Json,
    extract::{Path, State},
    response::{IntoResponse, Response},
};
use storage::{
    Database,
    dto::event::{EventResponse, ProfileWithFee},
};
use uuid::Uuid;

use crate::error::WebError;

use super::services;

#[utoipa::path(
    get,
    path = "/api/events",
    responses(
        (status = 200, description = "List all events", body = Vec<EventResponse>)
    ),
    tag = "events"
)]
pub async fn list_events(State(db): State<Database>) -> Result<Response, WebError> {
    let events = services::list_events(db.pool()).await?;

    let response: Vec<EventResponse> = events.into_iter().map(EventResponse::from).collect();

    Ok(Json(response).into_response())
}

#[utoipa::path(
    get,
    path = "/api/events/{event_id}",
    params(
        ("event_id" = Uuid, Path, description = "Event ID")
    ),
    responses(
        (status = 200, description = "Event found", body = EventResponse),
        (status = 404, description = "Event not found")
    ),
    tag = "events"
)]
pub async fn get_event(
    State(db): State<Database>,
    Path(event_id): Path<Uuid>,
) -> Result<Response, WebError> {
    let event = services::get_event(db.pool(), event_id).await?;

    Ok(Json(EventResponse::from(event)).into_response())
}

#[utoipa::path(
    get,
    path = "/api/events/{event_id}/profiles",
    params(
        ("event_id" = Uuid, Path, description = "Event ID")
    ),
    responses(
        (status = 200, description = "Profiles with fees for the event", body = Vec<ProfileWithFee>),
        (status = 404, description = "Event not found")
    ),
    tag = "events"
)]
pub async fn list_profiles(
    State(db): State<Database>,
    Path(event_id): Path<Uuid>,
) -> Result<Response, WebError> {
    let profiles = services::list_profiles(db.pool(), event_id).await?;

    Ok(Json(profiles).into_response())
}
