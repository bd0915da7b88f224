//! Validadores y formateadores puros por campo.

use once_cell::sync::Lazy;
use regex::Regex;

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$").expect("email regex literal is valid")
});

/// `true` si el texto tiene forma `local@dominio.tld`.
///
/// Sólo revisa la forma: no hay consulta de red ni de registros MX.
pub fn validate_email_format(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

/// Formatea un teléfono de forma progresiva mientras el donante escribe.
///
/// Se descartan los caracteres que no son dígitos y todo dígito después del
/// décimo: `123` -> `123`, `12345` -> `(123) 45`, `1234567890` ->
/// `(123) 456-7890`.
pub fn format_phone_number(raw: &str) -> String {
    let digits: String = raw.chars().filter(char::is_ascii_digit).take(10).collect();
    match digits.len() {
        0..=3 => digits,
        4..=6 => format!("({}) {}", &digits[..3], &digits[3..]),
        _ => format!("({}) {}-{}", &digits[..3], &digits[3..6], &digits[6..]),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn email_accepts_minimal_shape() {
        assert!(validate_email_format("a@b.co"));
        assert!(validate_email_format("first.last+tag@mail.example.org"));
    }

    #[test]
    fn email_rejects_bad_shapes() {
        for bad in ["", "a@b", "a.com", "a@b.c", "a b@c.com", "@b.co", "a@b.c0"] {
            assert!(!validate_email_format(bad), "{bad:?} should be rejected");
        }
    }

    #[test]
    fn phone_progressive_formatting() {
        assert_eq!(format_phone_number(""), "");
        assert_eq!(format_phone_number("123"), "123");
        assert_eq!(format_phone_number("1234"), "(123) 4");
        assert_eq!(format_phone_number("12345"), "(123) 45");
        assert_eq!(format_phone_number("1234567"), "(123) 456-7");
        assert_eq!(format_phone_number("1234567890"), "(123) 456-7890");
    }

    #[test]
    fn phone_strips_non_digits_and_truncates() {
        assert_eq!(format_phone_number("12a3"), "123");
        assert_eq!(format_phone_number("123456789012345"), "(123) 456-7890");
        let once = format_phone_number("(555) 010-9999");
        assert_eq!(once, "(555) 010-9999");
        assert_eq!(format_phone_number(&once), once);
    }
}
