/// Derive the next sequential payment code from the current count of
/// payment rows for the event: `count + 1`, zero-padded to width 3.
/// Codes past "999" grow naturally without truncation.
pub fn format_registration_code(count: i64) -> String {
    format!("{:03}", count + 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_code_is_padded() {
        assert_eq!(format_registration_code(0), "001");
    }

    #[test]
    fn test_mid_range_padding() {
        assert_eq!(format_registration_code(42), "043");
        assert_eq!(format_registration_code(98), "099");
    }

    #[test]
    fn test_grows_past_three_digits() {
        assert_eq!(format_registration_code(999), "1000");
        assert_eq!(format_registration_code(12344), "12345");
    }
}
