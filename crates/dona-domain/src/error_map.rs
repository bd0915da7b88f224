//! `ErrorMap`: mapa disperso campo -> inválido.
//!
//! Una clave ausente significa "todavía no marcado". Las claves aparecen cuando
//! el campo falla una validación durante un intento de avance y desaparecen
//! todas juntas cuando una pasada completa resulta válida (`ErrorMap::new`).
//! Una clave con valor `false` indica que el donante editó el campo después de
//! haber fallado.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::form::FormField;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ErrorMap {
    inner: IndexMap<FormField, bool>,
}

impl ErrorMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Marca un campo como inválido (inserta `true`).
    pub fn flag(&mut self, field: FormField) {
        self.inner.insert(field, true);
    }

    /// Número de claves presentes, con independencia de su valor.
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    pub fn get(&self, field: FormField) -> Option<bool> {
        self.inner.get(&field).copied()
    }

    pub fn contains(&self, field: FormField) -> bool {
        self.inner.contains_key(&field)
    }

    /// `true` sólo si la clave existe y vale `true`.
    pub fn is_flagged(&self, field: FormField) -> bool {
        self.get(field).unwrap_or(false)
    }

    /// Campos marcados como inválidos, en orden de primera aparición.
    pub fn flagged_fields(&self) -> Vec<FormField> {
        self.inner.iter().filter(|(_, v)| **v).map(|(k, _)| *k).collect()
    }

    /// Merge aditivo: las claves de `other` se agregan o sobreescriben, las
    /// existentes que `other` no menciona se conservan.
    pub fn merged(&self, other: &ErrorMap) -> ErrorMap {
        let mut inner = self.inner.clone();
        for (k, v) in other.inner.iter() {
            inner.insert(*k, *v);
        }
        ErrorMap { inner }
    }

    /// Copia con la marca del campo bajada a `false`, si estaba presente.
    pub fn with_edited(&self, field: FormField) -> ErrorMap {
        let mut inner = self.inner.clone();
        if let Some(v) = inner.get_mut(&field) {
            *v = false;
        }
        ErrorMap { inner }
    }
}

impl FromIterator<FormField> for ErrorMap {
    fn from_iter<T: IntoIterator<Item = FormField>>(iter: T) -> Self {
        let mut map = ErrorMap::new();
        for f in iter {
            map.flag(f);
        }
        map
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn merge_is_additive() {
        let prev: ErrorMap = [FormField::City, FormField::Email].into_iter().collect();
        let pass: ErrorMap = [FormField::State].into_iter().collect();
        let merged = prev.merged(&pass);
        assert_eq!(merged.flagged_fields(), vec![FormField::City, FormField::Email, FormField::State]);
        // el original queda intacto
        assert_eq!(prev.len(), 2);
    }

    #[test]
    fn edited_lowers_flag_but_keeps_key() {
        let map: ErrorMap = [FormField::Email].into_iter().collect();
        let edited = map.with_edited(FormField::Email);
        assert!(edited.contains(FormField::Email));
        assert!(!edited.is_flagged(FormField::Email));
        assert_eq!(edited.get(FormField::Email), Some(false));
    }

    #[test]
    fn edited_on_absent_field_adds_nothing() {
        let map = ErrorMap::new().with_edited(FormField::City);
        assert!(map.is_empty());
    }

    #[test]
    fn serializes_as_plain_object() {
        let map: ErrorMap = [FormField::PostalCode].into_iter().collect();
        assert_eq!(serde_json::to_string(&map).unwrap(), r#"{"postalCode":true}"#);
    }
}
