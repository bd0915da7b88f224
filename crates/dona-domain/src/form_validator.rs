//! Validación completa del paso "datos del donante".
//!
//! Cada chequeo es independiente y aporta a lo sumo una clave. Todos corren
//! siempre, sin cortocircuito, para que el donante vea todos los campos
//! pendientes de una sola vez.

use crate::error_map::ErrorMap;
use crate::form::{FormField, FormInfo};
use crate::validators::validate_email_format;

/// Campos obligatorios que sólo exigen texto no vacío.
const REQUIRED_FIELDS: [FormField; 7] = [FormField::Address1,
                                         FormField::State,
                                         FormField::Country,
                                         FormField::PostalCode,
                                         FormField::City,
                                         FormField::FirstName,
                                         FormField::LastName];

fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

/// Devuelve un `ErrorMap` vacío si y sólo si el formulario es válido para el
/// paso 2. No modifica nada.
pub fn validate_form(form: &FormInfo) -> ErrorMap {
    let mut errors = ErrorMap::new();

    if !validate_email_format(&form.email) {
        errors.flag(FormField::Email);
    }

    if form.org_donate && is_blank(&form.org_name) {
        errors.flag(FormField::OrgName);
    }

    for field in REQUIRED_FIELDS {
        if is_blank(form.field(field)) {
            errors.flag(field);
        }
    }

    errors
}
