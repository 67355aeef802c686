use sqlx::PgPool;
use uuid::Uuid;

use crate::error::{Result, StorageError};
use crate::models::RegistrationFee;

pub struct FeeRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> FeeRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Find the fee configured for a profile within an event
    pub async fn find_for_profile(&self, event_id: Uuid, profile_id: Uuid) -> Result<RegistrationFee> {
        let fee = sqlx::query_as::<_, RegistrationFee>(
            r#"
            SELECT fee_id, event_id, profile_id, amount, exempt
            FROM registration_fees
            WHERE event_id = $1 AND profile_id = $2
            "#,
        )
        .bind(event_id)
        .bind(profile_id)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::FeeNotConfigured)?;

        Ok(fee)
    }
}
