use storage::dto::account::DocumentResponse;
use storage::services::document::{
    DocumentKind, clean_document_number, format_document, validate_cpf,
};
use storage::services::password::{PasswordStrength, evaluate_password};

/// Score a candidate password
pub fn password_strength(password: &str) -> PasswordStrength {
    evaluate_password(password)
}

/// Validate and format a document number.
///
/// RG numbers have no checksum; they are considered valid when the cleaned
/// form is non-empty, and only formatted.
pub fn check_document(document: &str, kind: &str) -> DocumentResponse {
    let cleaned = clean_document_number(document);

    match kind {
        "CPF" => {
            let valid = validate_cpf(document);
            DocumentResponse {
                valid,
                formatted: valid.then(|| format_document(&cleaned, DocumentKind::Cpf)),
                cleaned,
            }
        }
        _ => {
            let valid = !cleaned.is_empty();
            DocumentResponse {
                valid,
                formatted: valid.then(|| format_document(&cleaned, DocumentKind::Rg)),
                cleaned,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_cpf_is_formatted() {
        let result = check_document("11144477735", "CPF");
        assert!(result.valid);
        assert_eq!(result.formatted.as_deref(), Some("111.444.777-35"));
        assert_eq!(result.cleaned, "11144477735");
    }

    #[test]
    fn test_invalid_cpf_is_not_formatted() {
        let result = check_document("11111111111", "CPF");
        assert!(!result.valid);
        assert_eq!(result.formatted, None);
    }

    #[test]
    fn test_rg_is_formatted_without_checksum() {
        let result = check_document("12.345.678-9", "RG");
        assert!(result.valid);
        assert_eq!(result.formatted.as_deref(), Some("12.345.678-9"));
        assert_eq!(result.cleaned, "123456789");
    }

    #[test]
    fn test_empty_rg_is_invalid() {
        let result = check_document("--", "RG");
        assert!(!result.valid);
    }
}
