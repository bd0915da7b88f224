use crate::error_map::ErrorMap;
use crate::form::{FormField, FormInfo};
use crate::validators::validate_email_format;

pub const EMAIL_REQUIRED: &str = "Email is required";
pub const EMAIL_FORMAT_HINT: &str = "Please enter in the format: email@domain.com";

/// Mensaje a mostrar bajo el campo de email.
///
/// Sólo hay mensaje si el campo está marcado y el valor actual sigue sin
/// pasar el chequeo de formato.
pub fn email_feedback(form: &FormInfo, errors: &ErrorMap) -> Option<&'static str> {
    if !errors.is_flagged(FormField::Email) || validate_email_format(&form.email) {
        return None;
    }
    if form.email.is_empty() {
        Some(EMAIL_REQUIRED)
    } else {
        Some(EMAIL_FORMAT_HINT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_feedback_unless_flagged() {
        let form = FormInfo::default();
        assert_eq!(email_feedback(&form, &ErrorMap::new()), None);
    }

    #[test]
    fn required_vs_format_hint() {
        let errors: ErrorMap = [FormField::Email].into_iter().collect();
        assert_eq!(email_feedback(&FormInfo::default(), &errors), Some(EMAIL_REQUIRED));
        let typo = FormInfo::default().with_email("ada@example");
        assert_eq!(email_feedback(&typo, &errors), Some(EMAIL_FORMAT_HINT));
        let fixed = FormInfo::default().with_email("ada@example.org");
        assert_eq!(email_feedback(&fixed, &errors), None);
    }
}
