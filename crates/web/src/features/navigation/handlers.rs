use axum::{
    Json,
    extract::{Path, Query, State},
    response::{IntoResponse, Response},
};
use serde::Deserialize;
use storage::{
    Database, models::ProfileCode, repository::role_assignment::RoleAssignmentRepository,
};
use utoipa::IntoParams;
use uuid::Uuid;

use crate::error::WebError;

use super::services::{self, NavigationRequest, NavigationResponse};

#[utoipa::path(
    post,
    path = "/api/navigation/resolve",
    request_body = NavigationRequest,
    responses(
        (status = 200, description = "Landing route and menu for the given role codes", body = NavigationResponse)
    ),
    tag = "navigation"
)]
pub async fn resolve(Json(req): Json<NavigationRequest>) -> Result<Response, WebError> {
    Ok(Json(services::resolve(&req.roles)).into_response())
}

#[derive(Debug, Deserialize, IntoParams)]
pub struct NavigationQuery {
    pub event_id: Uuid,
}

#[utoipa::path(
    get,
    path = "/api/navigation/{user_id}",
    params(
        ("user_id" = Uuid, Path, description = "User ID"),
        NavigationQuery
    ),
    responses(
        (status = 200, description = "Landing route and menu for the user's stored roles", body = NavigationResponse)
    ),
    tag = "navigation"
)]
pub async fn resolve_for_user(
    State(db): State<Database>,
    Path(user_id): Path<Uuid>,
    Query(query): Query<NavigationQuery>,
) -> Result<Response, WebError> {
    let codes = RoleAssignmentRepository::new(db.pool())
        .list_codes_for_user(user_id, query.event_id)
        .await?;

    let roles: Vec<ProfileCode> = codes
        .iter()
        .filter_map(|code| ProfileCode::parse(code))
        .collect();

    Ok(Json(services::resolve(&roles)).into_response())
}
