use sqlx::PgPool;
use uuid::Uuid;

use crate::dto::event::ProfileWithFee;
use crate::error::{Result, StorageError};
use crate::models::{Profile, ProfileCode};

pub struct ProfileRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> ProfileRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Find the profile with the given name within an event
    pub async fn find_by_event_and_name(&self, event_id: Uuid, name: &str) -> Result<Profile> {
        let profile = sqlx::query_as::<_, Profile>(
            r#"
            SELECT profile_id, event_id, name, type_code, created_at
            FROM profiles
            WHERE event_id = $1 AND name = $2
            "#,
        )
        .bind(event_id)
        .bind(name)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::ProfileNotFound)?;

        Ok(profile)
    }

    /// Find the profile with the given type code within an event
    pub async fn find_by_event_and_code(
        &self,
        event_id: Uuid,
        code: ProfileCode,
    ) -> Result<Profile> {
        let profile = sqlx::query_as::<_, Profile>(
            r#"
            SELECT profile_id, event_id, name, type_code, created_at
            FROM profiles
            WHERE event_id = $1 AND type_code = $2
            "#,
        )
        .bind(event_id)
        .bind(code.as_str())
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::ProfileNotFound)?;

        Ok(profile)
    }

    /// List an event's profiles joined with their configured fees
    pub async fn list_with_fees(&self, event_id: Uuid) -> Result<Vec<ProfileWithFee>> {
        let profiles = sqlx::query_as::<_, ProfileWithFee>(
            r#"
            SELECT p.profile_id, p.name, p.type_code, f.amount, f.exempt
            FROM profiles p
            LEFT JOIN registration_fees f
                ON f.profile_id = p.profile_id AND f.event_id = p.event_id
            WHERE p.event_id = $1
            ORDER BY p.name
            "#,
        )
        .bind(event_id)
        .fetch_all(self.pool)
        .await?;

        Ok(profiles)
    }
}
