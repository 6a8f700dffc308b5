/// Reduces a phone number to its digits, dropping punctuation,
/// whitespace and any other separator.
///
/// `(555) 123-4567` and `555.123.4567` both normalize to `5551234567`,
/// which is the form used for validation and search matching.
pub fn normalize_phone(raw: &str) -> String {
    raw.chars().filter(char::is_ascii_digit).collect()
}
