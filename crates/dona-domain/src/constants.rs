//! Límites del monto de donación.
//!
//! Ambos extremos son inclusivos: `1` y `999999.99` se aceptan.

/// Monto mínimo aceptado.
pub const MIN_DONATION: f64 = 1.0;

/// Monto máximo aceptado.
pub const MAX_DONATION: f64 = 999_999.99;
