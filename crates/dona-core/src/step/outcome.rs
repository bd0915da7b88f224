use dona_domain::{DomainError, FormField};

use super::Step;

/// Motivo por el que un submit no avanzó.
#[derive(Debug, Clone, PartialEq)]
pub enum BlockReason {
    /// Paso 1: el monto no parsea o está fuera de rango. No se muestra nada al
    /// donante.
    InvalidAmount(DomainError),
    /// Paso 2: campos marcados por esta pasada de validación.
    InvalidFields(Vec<FormField>),
    /// Paso 3: falta el cliente del procesador o los elements.
    PaymentNotReady,
    /// Paso 3: la validación previa de los elements falló.
    PaymentRejected { message: Option<String> },
    /// Paso 3: el procesador rechazó la confirmación.
    PaymentFailed { message: String },
}

/// Decisión de un handler de paso.
#[derive(Debug, Clone, PartialEq)]
pub enum StepVerdict {
    Advance,
    Block(BlockReason),
}

/// Resultado observable de `DonationFlow::submit`.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    Advanced { from: Step, to: Step },
    Blocked(BlockReason),
}

impl SubmitOutcome {
    pub fn advanced(&self) -> bool {
        matches!(self, SubmitOutcome::Advanced { .. })
    }
}
