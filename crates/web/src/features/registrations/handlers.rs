use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Deserialize;
use storage::{
    Database,
    dto::registration::{
        DependentRegisterRequest, RegisterRequest, RegisterResponse, RegistrationResponse,
    },
};
use utoipa::IntoParams;
use uuid::Uuid;
use validator::Validate;

use crate::error::WebError;

use super::services;

#[utoipa::path(
    post,
    path = "/api/registrations",
    request_body = RegisterRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 201, description = "Registration created", body = RegisterResponse),
        (status = 200, description = "Existing registration updated", body = RegisterResponse),
        (status = 400, description = "Validation error"),
        (status = 404, description = "Profile, user or fee not found")
    ),
    tag = "registrations"
)]
pub async fn register(
    State(db): State<Database>,
    Json(req): Json<RegisterRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    let outcome =
        services::register_user(db.pool(), req.user_id, req.event_id, req.category).await?;

    let status = if outcome.already_registered {
        StatusCode::OK
    } else {
        StatusCode::CREATED
    };

    Ok((status, Json(outcome)).into_response())
}

#[utoipa::path(
    post,
    path = "/api/registrations/dependents",
    request_body = DependentRegisterRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 201, description = "Dependent registration created", body = RegisterResponse),
        (status = 200, description = "Existing registration updated", body = RegisterResponse),
        (status = 400, description = "Validation error"),
        (status = 404, description = "Age-band profile, user or fee not found")
    ),
    tag = "registrations"
)]
pub async fn register_dependent(
    State(db): State<Database>,
    Json(req): Json<DependentRegisterRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    let outcome =
        services::register_dependent(db.pool(), req.dependent_id, req.event_id, req.birth_date)
            .await?;

    let status = if outcome.already_registered {
        StatusCode::OK
    } else {
        StatusCode::CREATED
    };

    Ok((status, Json(outcome)).into_response())
}

#[derive(Debug, Deserialize, IntoParams)]
pub struct RegistrationQuery {
    pub event_id: Uuid,
}

#[utoipa::path(
    get,
    path = "/api/registrations/{user_id}",
    params(
        ("user_id" = Uuid, Path, description = "User ID"),
        RegistrationQuery
    ),
    responses(
        (status = 200, description = "Registration found", body = RegistrationResponse),
        (status = 404, description = "No registration for this user and event")
    ),
    tag = "registrations"
)]
pub async fn get_registration(
    State(db): State<Database>,
    Path(user_id): Path<Uuid>,
    Query(query): Query<RegistrationQuery>,
) -> Result<Response, WebError> {
    let registration = services::get_registration(db.pool(), user_id, query.event_id).await?;

    Ok(Json(RegistrationResponse::from(registration)).into_response())
}
