use sqlx::PgPool;
use storage::{
    dto::payment::{CreatePaymentRequest, SubmitProofRequest, UpdatePaymentStatusRequest},
    error::Result,
    models::Payment,
    repository::{payment::PaymentRepository, registration::RegistrationRepository},
};
use uuid::Uuid;

use crate::error::WebError;
use crate::mailer::{EmailAttachment, Mailer};

/// Create a pending payment toward a registration. The sequential code is
/// generated inside the repository against the registration's event.
pub async fn create_payment(pool: &PgPool, req: &CreatePaymentRequest) -> Result<Payment> {
    let registration = RegistrationRepository::new(pool)
        .find_by_id(req.registration_id)
        .await?;

    let payment = PaymentRepository::new(pool)
        .create(registration.registration_id, registration.event_id, req.amount)
        .await?;

    tracing::info!(
        "Payment {} created with code {} for registration {}",
        payment.payment_id,
        payment.code,
        registration.registration_id
    );

    Ok(payment)
}

/// List an event's payments, optionally narrowed to one user
pub async fn list_payments(
    pool: &PgPool,
    event_id: Uuid,
    user_id: Option<Uuid>,
) -> Result<Vec<Payment>> {
    let repo = PaymentRepository::new(pool);
    repo.list(event_id, user_id).await
}

/// Change a payment's status (administrator confirmation or cancellation)
pub async fn update_status(
    pool: &PgPool,
    payment_id: Uuid,
    req: &UpdatePaymentStatusRequest,
) -> Result<Payment> {
    let repo = PaymentRepository::new(pool);
    repo.update_status(payment_id, &req.status).await
}

/// Email a submitted payment proof to the administrator.
pub async fn submit_proof(
    pool: &PgPool,
    mailer: &Mailer,
    admin_email: &str,
    payment_id: Uuid,
    req: &SubmitProofRequest,
) -> std::result::Result<(), WebError> {
    let repo = PaymentRepository::new(pool);
    let payment = repo.find_by_id(payment_id).await?;
    let payer = repo.find_payer(payment_id).await?;

    let subject = format!("Comprovante de pagamento - inscrição {}", payment.code);

    let mut text = format!(
        "Comprovante de pagamento enviado.\n\nParticipante: {}\nInscrição: {}\nValor: R$ {}\nStatus atual: {}\n",
        payer.full_name, payment.code, payment.amount, payment.status
    );
    if let Some(message) = req.message.as_deref().filter(|m| !m.is_empty()) {
        text.push_str("\nMensagem do participante:\n");
        text.push_str(message);
        text.push('\n');
    }

    let attachment = EmailAttachment {
        filename: req.filename.clone(),
        content_base64: req.content_base64.clone(),
    };

    mailer
        .send(admin_email, &subject, &text, Some(&attachment))
        .await?;

    Ok(())
}
