/// National identity document kinds accepted at signup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    Cpf,
    Rg,
}

/// Remove everything but digits from a document number.
pub fn clean_document_number(input: &str) -> String {
    input.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// Validate a CPF via its two weighted checksum digits.
///
/// Rejects anything whose cleaned form is not exactly 11 digits, and the
/// degenerate all-identical sequences ("00000000000" etc.) which satisfy
/// the checksum but are not valid documents.
pub fn validate_cpf(input: &str) -> bool {
    let digits = clean_document_number(input);
    if digits.len() != 11 {
        return false;
    }

    let d: Vec<u32> = digits.chars().filter_map(|c| c.to_digit(10)).collect();

    if d.iter().all(|&n| n == d[0]) {
        return false;
    }

    check_digit(&d[..9], 10) == d[9] && check_digit(&d[..10], 11) == d[10]
}

/// Weighted sum of `digits` with weights counting down from `start_weight`
/// to 2, times 10, mod 11; remainders of 10 and 11 collapse to 0.
fn check_digit(digits: &[u32], start_weight: u32) -> u32 {
    let sum: u32 = digits
        .iter()
        .zip((2..=start_weight).rev())
        .map(|(d, w)| d * w)
        .sum();

    let remainder = (sum * 10) % 11;
    if remainder >= 10 { 0 } else { remainder }
}

/// Insert display punctuation into a cleaned document number.
///
/// CPF: `###.###.###-##`. RG: `##.###.###-#`. Inputs shorter than the full
/// pattern are formatted as far as their digits reach.
pub fn format_document(input: &str, kind: DocumentKind) -> String {
    let digits = clean_document_number(input);

    let groups: &[usize] = match kind {
        DocumentKind::Cpf => &[3, 3, 3, 2],
        DocumentKind::Rg => &[2, 3, 3, 1],
    };

    let mut out = String::with_capacity(digits.len() + groups.len());
    let mut rest = digits.as_str();

    for (i, &len) in groups.iter().enumerate() {
        if rest.is_empty() {
            break;
        }
        let take = len.min(rest.len());
        if i > 0 {
            out.push(if i == groups.len() - 1 { '-' } else { '.' });
        }
        out.push_str(&rest[..take]);
        rest = &rest[take..];
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_valid_cpf() {
        assert!(validate_cpf("11144477735"));
        assert!(validate_cpf("111.444.777-35"));
    }

    #[test]
    fn test_wrong_check_digits() {
        assert!(!validate_cpf("11144477736"));
        assert!(!validate_cpf("11144477745"));
    }

    #[test]
    fn test_all_identical_digits_rejected() {
        for digit in 0..=9 {
            let cpf = digit.to_string().repeat(11);
            assert!(!validate_cpf(&cpf), "{cpf} should be invalid");
        }
    }

    #[test]
    fn test_wrong_length_rejected() {
        assert!(!validate_cpf(""));
        assert!(!validate_cpf("1114447773"));
        assert!(!validate_cpf("111444777350"));
        assert!(!validate_cpf("abc"));
    }

    #[test]
    fn test_format_cpf() {
        assert_eq!(format_document("11144477735", DocumentKind::Cpf), "111.444.777-35");
    }

    #[test]
    fn test_format_rg() {
        assert_eq!(format_document("123456789", DocumentKind::Rg), "12.345.678-9");
    }

    #[test]
    fn test_format_partial_input() {
        assert_eq!(format_document("11144", DocumentKind::Cpf), "111.44");
    }

    #[test]
    fn test_clean_strips_punctuation() {
        assert_eq!(clean_document_number("111.444.777-35"), "11144477735");
    }

    #[test]
    fn test_clean_format_round_trip() {
        let cases = ["11144477735", "52998224725", "00000000191"];
        for digits in cases {
            assert_eq!(
                clean_document_number(&format_document(digits, DocumentKind::Cpf)),
                digits
            );
        }
    }
}
