//! Registro de campos del formulario (`FormInfo`) e identificadores de campo.
//!
//! `FormInfo` se trata como un valor: quien lo modifica construye un registro
//! nuevo y lo reemplaza completo en la sesión. Por eso los helpers `with_*`
//! consumen `self` y devuelven la copia actualizada.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Todos los datos capturados durante el flujo.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormInfo {
    /// Monto como texto decimal, tal como lo escribió el donante.
    pub amount: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    /// `true` si la donación se hace en nombre de una organización.
    pub org_donate: bool,
    pub org_name: String,
    pub address1: String,
    pub address2: String,
    pub city: String,
    pub state: String,
    pub postal_code: String,
    pub country: String,
}

impl FormInfo {
    pub fn with_amount(self, amount: impl Into<String>) -> Self {
        Self { amount: amount.into(), ..self }
    }

    pub fn with_email(self, email: impl Into<String>) -> Self {
        Self { email: email.into(), ..self }
    }

    pub fn with_org(self, org_donate: bool, org_name: impl Into<String>) -> Self {
        Self { org_donate,
               org_name: org_name.into(),
               ..self }
    }

    /// Devuelve una copia con el campo indicado reemplazado.
    ///
    /// `org_donate` no es un campo de texto; para cambiarlo usar `with_org`.
    pub fn with_field(self, field: FormField, value: impl Into<String>) -> Self {
        let value = value.into();
        match field {
            FormField::Amount => Self { amount: value, ..self },
            FormField::FirstName => Self { first_name: value, ..self },
            FormField::LastName => Self { last_name: value, ..self },
            FormField::Email => Self { email: value, ..self },
            FormField::OrgName => Self { org_name: value, ..self },
            FormField::Address1 => Self { address1: value, ..self },
            FormField::Address2 => Self { address2: value, ..self },
            FormField::City => Self { city: value, ..self },
            FormField::State => Self { state: value, ..self },
            FormField::PostalCode => Self { postal_code: value, ..self },
            FormField::Country => Self { country: value, ..self },
        }
    }

    /// Valor textual de un campo.
    pub fn field(&self, field: FormField) -> &str {
        match field {
            FormField::Amount => &self.amount,
            FormField::FirstName => &self.first_name,
            FormField::LastName => &self.last_name,
            FormField::Email => &self.email,
            FormField::OrgName => &self.org_name,
            FormField::Address1 => &self.address1,
            FormField::Address2 => &self.address2,
            FormField::City => &self.city,
            FormField::State => &self.state,
            FormField::PostalCode => &self.postal_code,
            FormField::Country => &self.country,
        }
    }
}

/// Identificador de un campo de texto del formulario.
///
/// Serializa con los nombres que usa la capa de presentación (`postalCode`,
/// `orgName`, ...), que son también las claves del `ErrorMap`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FormField {
    Amount,
    FirstName,
    LastName,
    Email,
    OrgName,
    Address1,
    Address2,
    City,
    State,
    PostalCode,
    Country,
}

impl FormField {
    pub fn as_str(&self) -> &'static str {
        match self {
            FormField::Amount => "amount",
            FormField::FirstName => "firstName",
            FormField::LastName => "lastName",
            FormField::Email => "email",
            FormField::OrgName => "orgName",
            FormField::Address1 => "address1",
            FormField::Address2 => "address2",
            FormField::City => "city",
            FormField::State => "state",
            FormField::PostalCode => "postalCode",
            FormField::Country => "country",
        }
    }
}

impl fmt::Display for FormField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn with_field_returns_new_record_and_keeps_original() {
        let original = FormInfo::default().with_email("a@b.co");
        let updated = original.clone().with_field(FormField::City, "Quito");
        assert_eq!(original.city, "");
        assert_eq!(updated.city, "Quito");
        assert_eq!(updated.email, "a@b.co");
    }

    #[test]
    fn serializes_with_presentation_keys() {
        let v = serde_json::to_value(FormInfo::default().with_field(FormField::PostalCode, "10115")).unwrap();
        assert_eq!(v["postalCode"], "10115");
        assert_eq!(v["orgDonate"], false);
        assert_eq!(serde_json::to_value(FormField::OrgName).unwrap(), "orgName");
    }

    #[test]
    fn as_str_matches_serde_name() {
        for f in [FormField::FirstName, FormField::Address1, FormField::PostalCode] {
            assert_eq!(serde_json::to_value(f).unwrap(), f.as_str());
        }
    }
}
