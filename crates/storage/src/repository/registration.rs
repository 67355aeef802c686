use sqlx::PgPool;
use uuid::Uuid;

use crate::error::{Result, StorageError};
use crate::models::{Profile, Registration, RegistrationFee};

const EXCLUSIVE_CODES: &[&str] = &["ATL", "PGR"];

pub struct RegistrationRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> RegistrationRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Find a user's registration for an event
    pub async fn find_for_user(&self, user_id: Uuid, event_id: Uuid) -> Result<Registration> {
        let registration = sqlx::query_as::<_, Registration>(
            r#"
            SELECT registration_id, user_id, event_id, profile_id, fee_id,
                   created_at, updated_at
            FROM registrations
            WHERE user_id = $1 AND event_id = $2
            "#,
        )
        .bind(user_id)
        .bind(event_id)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound)?;

        Ok(registration)
    }

    /// Find a registration by ID
    pub async fn find_by_id(&self, id: Uuid) -> Result<Registration> {
        let registration = sqlx::query_as::<_, Registration>(
            r#"
            SELECT registration_id, user_id, event_id, profile_id, fee_id,
                   created_at, updated_at
            FROM registrations
            WHERE registration_id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound)?;

        Ok(registration)
    }

    /// Upsert a registration for (user, event) and swap role assignments in
    /// the same transaction.
    ///
    /// The registration row is locked and updated in place when it already
    /// exists. Exclusive-profile assignments (ATL/PGR) other than the target
    /// are cleared before the target assignment is inserted, so the
    /// at-most-one-exclusive-profile invariant cannot be broken by
    /// interleaved calls.
    ///
    /// Returns the registration and whether it already existed.
    pub async fn register(
        &self,
        user_id: Uuid,
        profile: &Profile,
        fee: &RegistrationFee,
    ) -> Result<(Registration, bool)> {
        let event_id = profile.event_id;
        let mut tx = self.pool.begin().await?;

        let existing = sqlx::query_as::<_, Registration>(
            r#"
            SELECT registration_id, user_id, event_id, profile_id, fee_id,
                   created_at, updated_at
            FROM registrations
            WHERE user_id = $1 AND event_id = $2
            FOR UPDATE
            "#,
        )
        .bind(user_id)
        .bind(event_id)
        .fetch_optional(&mut *tx)
        .await?;

        let already_registered = existing.is_some();

        let registration = if let Some(existing) = existing {
            sqlx::query_as::<_, Registration>(
                r#"
                UPDATE registrations
                SET profile_id = $2,
                    fee_id = $3,
                    updated_at = NOW()
                WHERE registration_id = $1
                RETURNING registration_id, user_id, event_id, profile_id, fee_id,
                          created_at, updated_at
                "#,
            )
            .bind(existing.registration_id)
            .bind(profile.profile_id)
            .bind(fee.fee_id)
            .fetch_one(&mut *tx)
            .await?
        } else {
            sqlx::query_as::<_, Registration>(
                r#"
                INSERT INTO registrations (user_id, event_id, profile_id, fee_id)
                VALUES ($1, $2, $3, $4)
                RETURNING registration_id, user_id, event_id, profile_id, fee_id,
                          created_at, updated_at
                "#,
            )
            .bind(user_id)
            .bind(event_id)
            .bind(profile.profile_id)
            .bind(fee.fee_id)
            .fetch_one(&mut *tx)
            .await?
        };

        if profile.code().is_some_and(|c| c.is_exclusive()) {
            sqlx::query(
                r#"
                DELETE FROM role_assignments ra
                USING profiles p
                WHERE ra.profile_id = p.profile_id
                  AND ra.user_id = $1
                  AND ra.event_id = $2
                  AND p.type_code = ANY($3)
                  AND ra.profile_id <> $4
                "#,
            )
            .bind(user_id)
            .bind(event_id)
            .bind(EXCLUSIVE_CODES)
            .bind(profile.profile_id)
            .execute(&mut *tx)
            .await?;
        }

        sqlx::query(
            r#"
            INSERT INTO role_assignments (user_id, profile_id, event_id)
            VALUES ($1, $2, $3)
            ON CONFLICT (user_id, profile_id, event_id) DO NOTHING
            "#,
        )
        .bind(user_id)
        .bind(profile.profile_id)
        .bind(event_id)
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;

        Ok((registration, already_registered))
    }
}
