use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct PasswordStrengthRequest {
    #[validate(length(max = 256))]
    pub password: String,
}

/// Request payload for validating and formatting a document number.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct DocumentRequest {
    #[validate(length(min = 1, max = 32, message = "Document number is required"))]
    pub document: String,

    #[validate(custom(function = "validate_document_kind"))]
    pub kind: String,
}

fn validate_document_kind(kind: &str) -> Result<(), validator::ValidationError> {
    const VALID_KINDS: &[&str] = &["CPF", "RG"];

    if VALID_KINDS.contains(&kind) {
        Ok(())
    } else {
        Err(validator::ValidationError::new("invalid_document_kind"))
    }
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct DocumentResponse {
    pub valid: bool,
    pub cleaned: String,
    pub formatted: Option<String>,
}
