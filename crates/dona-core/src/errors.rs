//! Errores del controlador de pasos.
//!
//! Los bloqueos de validación no son errores: se reportan como
//! `SubmitOutcome::Blocked`. Aquí sólo quedan los casos en que el submit no
//! pudo interpretarse.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum FlowError {
    #[error("flow already completed")]
    FlowCompleted,
    #[error("serialization: {0}")]
    Serialization(String),
    #[error("internal: {0}")]
    Internal(String),
}

impl From<serde_json::Error> for FlowError {
    fn from(e: serde_json::Error) -> Self {
        FlowError::Serialization(e.to_string())
    }
}
