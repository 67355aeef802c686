use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct User {
    pub user_id: Uuid,
    pub full_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub document_type: String,
    pub document_number: String,
    pub birth_date: Option<chrono::NaiveDate>,
    pub branch: Option<String>,
    pub confirmed: bool,
    pub created_at: chrono::NaiveDateTime,
}
