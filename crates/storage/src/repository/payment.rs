use rust_decimal::Decimal;
use sqlx::PgPool;
use uuid::Uuid;

use crate::error::{Result, StorageError};
use crate::models::payment::PAYMENT_STATUS_PENDING;
use crate::models::{Payment, User};
use crate::services::registration_code::format_registration_code;

/// Attempts before giving up when two inserts race for the same code.
const CODE_RETRIES: u32 = 3;

pub struct PaymentRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> PaymentRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Count payment rows for an event
    pub async fn count_for_event(&self, event_id: Uuid) -> Result<i64> {
        let count = sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM payments WHERE event_id = $1",
        )
        .bind(event_id)
        .fetch_one(self.pool)
        .await?;

        Ok(count)
    }

    /// Create a pending payment with a generated sequential code.
    ///
    /// The code is derived from the current row count; the unique constraint
    /// on (event_id, code) catches concurrent creations, which are retried
    /// with a fresh count.
    pub async fn create(
        &self,
        registration_id: Uuid,
        event_id: Uuid,
        amount: Decimal,
    ) -> Result<Payment> {
        let mut last_err = StorageError::NotFound;

        for _ in 0..CODE_RETRIES {
            let count = self.count_for_event(event_id).await?;
            let code = format_registration_code(count);

            match self.insert(registration_id, event_id, &code, amount).await {
                Ok(payment) => return Ok(payment),
                Err(e) if e.is_unique_violation() => last_err = e,
                Err(e) => return Err(e),
            }
        }

        Err(last_err)
    }

    async fn insert(
        &self,
        registration_id: Uuid,
        event_id: Uuid,
        code: &str,
        amount: Decimal,
    ) -> Result<Payment> {
        let payment = sqlx::query_as::<_, Payment>(
            r#"
            INSERT INTO payments (registration_id, event_id, code, amount, status)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING payment_id, registration_id, event_id, code, amount, status, created_at
            "#,
        )
        .bind(registration_id)
        .bind(event_id)
        .bind(code)
        .bind(amount)
        .bind(PAYMENT_STATUS_PENDING)
        .fetch_one(self.pool)
        .await?;

        Ok(payment)
    }

    /// Find a payment by ID
    pub async fn find_by_id(&self, id: Uuid) -> Result<Payment> {
        let payment = sqlx::query_as::<_, Payment>(
            r#"
            SELECT payment_id, registration_id, event_id, code, amount, status, created_at
            FROM payments
            WHERE payment_id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound)?;

        Ok(payment)
    }

    /// The user behind a payment, via its registration
    pub async fn find_payer(&self, payment_id: Uuid) -> Result<User> {
        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT u.user_id, u.full_name, u.email, u.phone, u.document_type,
                   u.document_number, u.birth_date, u.branch, u.confirmed, u.created_at
            FROM payments pay
            JOIN registrations r ON r.registration_id = pay.registration_id
            JOIN users u ON u.user_id = r.user_id
            WHERE pay.payment_id = $1
            "#,
        )
        .bind(payment_id)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::UserNotFound)?;

        Ok(user)
    }

    /// List payments for an event, optionally narrowed to one user
    pub async fn list(&self, event_id: Uuid, user_id: Option<Uuid>) -> Result<Vec<Payment>> {
        let payments = sqlx::query_as::<_, Payment>(
            r#"
            SELECT pay.payment_id, pay.registration_id, pay.event_id, pay.code,
                   pay.amount, pay.status, pay.created_at
            FROM payments pay
            JOIN registrations r ON r.registration_id = pay.registration_id
            WHERE pay.event_id = $1
              AND ($2::uuid IS NULL OR r.user_id = $2)
            ORDER BY pay.created_at DESC
            "#,
        )
        .bind(event_id)
        .bind(user_id)
        .fetch_all(self.pool)
        .await?;

        Ok(payments)
    }

    /// Update a payment's status
    pub async fn update_status(&self, id: Uuid, status: &str) -> Result<Payment> {
        let payment = sqlx::query_as::<_, Payment>(
            r#"
            UPDATE payments
            SET status = $2
            WHERE payment_id = $1
            RETURNING payment_id, registration_id, event_id, code, amount, status, created_at
            "#,
        )
        .bind(id)
        .bind(status)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound)?;

        Ok(payment)
    }
}
