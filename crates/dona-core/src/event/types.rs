//! Tipos de evento de una sesión de donación.
//!
//! Rol en el flujo:
//! - Cada submit emite eventos a un `EventStore` append-only.
//! - Con ellos `SessionRepository` reconstruye la posición de la sesión
//!   (replay) sin leer el estado mutable del controlador.
//! - Ningún evento contiene el client secret ni datos de tarjeta.
use chrono::{DateTime, Utc};
use dona_domain::FormField;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::step::Step;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SessionEventKind {
    /// Primer evento de un `session_id`.
    SessionStarted,
    /// Transición exitosa. `to` es siempre `from.next()`.
    StepAdvanced { from: Step, to: Step },
    /// El donante volvió al paso anterior.
    StepReverted { from: Step, to: Step },
    /// Paso 1 bloqueado por monto inválido.
    AmountRejected { reason: String },
    /// Paso 2 bloqueado; campos marcados por esta pasada.
    ValidationFailed { fields: Vec<FormField> },
    /// Paso 3 abortado por falta de cliente o elements.
    PaymentPreconditionMissing,
    /// Paso 3: la validación previa de los elements falló.
    PaymentSubmitRejected { message: Option<String> },
    /// Paso 3: se invocó la confirmación con este request.
    PaymentConfirmationRequested { request_fingerprint: String },
    /// Paso 3: el procesador rechazó la confirmación.
    PaymentFailed { message: String },
    /// Cierre con fingerprint agregado de la sesión.
    FlowCompleted { session_fingerprint: String },
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionEvent {
    pub seq: u64, // orden de append dentro de la sesión
    pub session_id: Uuid,
    pub kind: SessionEventKind,
    pub ts: DateTime<Utc>, // metadato (no entra en fingerprint)
}
