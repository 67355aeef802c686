use axum::{
    Json,
    response::{IntoResponse, Response},
};
use storage::dto::account::{DocumentRequest, DocumentResponse, PasswordStrengthRequest};
use storage::services::password::PasswordStrength;
use validator::Validate;

use crate::error::WebError;

use super::services;

#[utoipa::path(
    post,
    path = "/api/accounts/password-strength",
    request_body = PasswordStrengthRequest,
    responses(
        (status = 200, description = "Strength score and label", body = PasswordStrength),
        (status = 400, description = "Validation error")
    ),
    tag = "accounts"
)]
pub async fn password_strength(
    Json(req): Json<PasswordStrengthRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    Ok(Json(services::password_strength(&req.password)).into_response())
}

#[utoipa::path(
    post,
    path = "/api/accounts/validate-document",
    request_body = DocumentRequest,
    responses(
        (status = 200, description = "Validation verdict with cleaned and formatted forms", body = DocumentResponse),
        (status = 400, description = "Validation error")
    ),
    tag = "accounts"
)]
pub async fn validate_document(Json(req): Json<DocumentRequest>) -> Result<Response, WebError> {
    req.validate()?;

    Ok(Json(services::check_document(&req.document, &req.kind)).into_response())
}
