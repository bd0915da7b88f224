use thiserror::Error;

/// Errores del dominio de donaciones.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    #[error("Monto no numérico: {0:?}")]
    InvalidAmount(String),

    #[error("Monto fuera de rango: {0}")]
    AmountOutOfRange(f64),
}
