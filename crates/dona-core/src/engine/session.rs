//! Estado observable de una sesión.
//!
//! La capa de presentación lee todo desde aquí y sólo escribe mediante los
//! setters públicos, que siempre reemplazan registros completos. `loading` y
//! `error_message` sólo los escribe el orquestador del paso 3.

use dona_domain::{ErrorMap, FormField, FormInfo};

use crate::step::Step;

/// Consumidor del estado (capa de presentación). Se le notifica después de
/// cada submit, de cada `go_back` y al entrar en `loading` durante el pago.
pub trait SessionObserver: Send + Sync {
    fn state_changed(&self, state: &SessionState);
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SessionState {
    form: FormInfo,
    errors: ErrorMap,
    step: Step,
    loading: bool,
    error_message: Option<String>,
}

impl SessionState {
    pub fn new(form: FormInfo) -> Self {
        Self { form,
               ..Self::default() }
    }

    pub fn form(&self) -> &FormInfo {
        &self.form
    }

    pub fn errors(&self) -> &ErrorMap {
        &self.errors
    }

    pub fn step(&self) -> Step {
        self.step
    }

    pub fn loading(&self) -> bool {
        self.loading
    }

    pub fn error_message(&self) -> Option<&str> {
        self.error_message.as_deref()
    }

    /// Reemplaza el formulario completo.
    pub fn replace_form(&mut self, form: FormInfo) {
        self.form = form;
    }

    /// Construye un formulario nuevo a partir del actual y lo reemplaza.
    pub fn update_form<F>(&mut self, f: F)
        where F: FnOnce(&FormInfo) -> FormInfo
    {
        let next = f(&self.form);
        self.form = next;
    }

    pub fn set_errors(&mut self, errors: ErrorMap) {
        self.errors = errors;
    }

    /// El donante editó un campo: su marca baja a `false` (si existía) para
    /// que deje de resaltarse hasta el próximo submit.
    pub fn mark_field_edited(&mut self, field: FormField) {
        let next = self.errors.with_edited(field);
        self.errors = next;
    }

    pub(crate) fn set_step(&mut self, step: Step) {
        self.step = step;
    }

    pub(crate) fn set_loading(&mut self, loading: bool) {
        self.loading = loading;
    }

    pub(crate) fn set_error_message(&mut self, message: Option<String>) {
        self.error_message = message;
    }
}
