use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Deserialize;
use storage::{
    Database,
    dto::payment::{
        CreatePaymentRequest, PaymentResponse, SubmitProofRequest, SubmitProofResponse,
        UpdatePaymentStatusRequest,
    },
};
use utoipa::IntoParams;
use uuid::Uuid;
use validator::Validate;

use crate::error::WebError;
use crate::mailer::Mailer;
use crate::state::AdminEmail;

use super::services;

#[utoipa::path(
    post,
    path = "/api/payments",
    request_body = CreatePaymentRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 201, description = "Payment created with sequential code", body = PaymentResponse),
        (status = 400, description = "Validation error"),
        (status = 404, description = "Registration not found")
    ),
    tag = "payments"
)]
pub async fn create_payment(
    State(db): State<Database>,
    Json(req): Json<CreatePaymentRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    let payment = services::create_payment(db.pool(), &req).await?;

    Ok((StatusCode::CREATED, Json(PaymentResponse::from(payment))).into_response())
}

#[derive(Debug, Deserialize, IntoParams)]
pub struct PaymentListQuery {
    pub event_id: Uuid,
    pub user_id: Option<Uuid>,
}

#[utoipa::path(
    get,
    path = "/api/payments",
    params(PaymentListQuery),
    responses(
        (status = 200, description = "Payments for the event", body = Vec<PaymentResponse>)
    ),
    tag = "payments"
)]
pub async fn list_payments(
    State(db): State<Database>,
    Query(query): Query<PaymentListQuery>,
) -> Result<Response, WebError> {
    let payments = services::list_payments(db.pool(), query.event_id, query.user_id).await?;

    let response: Vec<PaymentResponse> = payments.into_iter().map(PaymentResponse::from).collect();

    Ok(Json(response).into_response())
}

#[utoipa::path(
    put,
    path = "/api/payments/{payment_id}/status",
    params(
        ("payment_id" = Uuid, Path, description = "Payment ID")
    ),
    request_body = UpdatePaymentStatusRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Payment status updated", body = PaymentResponse),
        (status = 400, description = "Validation error"),
        (status = 404, description = "Payment not found")
    ),
    tag = "payments"
)]
pub async fn update_status(
    State(db): State<Database>,
    Path(payment_id): Path<Uuid>,
    Json(req): Json<UpdatePaymentStatusRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    let payment = services::update_status(db.pool(), payment_id, &req).await?;

    Ok(Json(PaymentResponse::from(payment)).into_response())
}

#[utoipa::path(
    post,
    path = "/api/payments/{payment_id}/proof",
    params(
        ("payment_id" = Uuid, Path, description = "Payment ID")
    ),
    request_body = SubmitProofRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Proof emailed to the administrator", body = SubmitProofResponse),
        (status = 400, description = "Validation error"),
        (status = 404, description = "Payment not found"),
        (status = 500, description = "Mail dispatch failed")
    ),
    tag = "payments"
)]
pub async fn submit_proof(
    State(db): State<Database>,
    State(mailer): State<Mailer>,
    State(admin_email): State<AdminEmail>,
    Path(payment_id): Path<Uuid>,
    Json(req): Json<SubmitProofRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    services::submit_proof(db.pool(), &mailer, &admin_email.0, payment_id, &req).await?;

    Ok(Json(SubmitProofResponse { sent: true }).into_response())
}
