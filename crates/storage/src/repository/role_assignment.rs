use sqlx::PgPool;
use uuid::Uuid;

use crate::error::Result;

pub struct RoleAssignmentRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> RoleAssignmentRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List the profile type codes a user holds for an event
    pub async fn list_codes_for_user(&self, user_id: Uuid, event_id: Uuid) -> Result<Vec<String>> {
        let codes = sqlx::query_scalar::<_, String>(
            r#"
            SELECT p.type_code
            FROM role_assignments ra
            JOIN profiles p ON p.profile_id = ra.profile_id
            WHERE ra.user_id = $1 AND ra.event_id = $2
            ORDER BY ra.created_at
            "#,
        )
        .bind(user_id)
        .bind(event_id)
        .fetch_all(self.pool)
        .await?;

        Ok(codes)
    }
}
