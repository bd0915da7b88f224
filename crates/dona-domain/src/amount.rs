use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::constants::{MAX_DONATION, MIN_DONATION};
use crate::DomainError;

// Prefijo decimal más largo: signo, dígitos, punto, exponente opcional.
static DECIMAL_PREFIX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[+-]?(?:\d+\.?\d*|\.\d+)(?:[eE][+-]?\d+)?").expect("decimal prefix regex literal is valid")
});

/// Monto de donación ya validado.
///
/// Sólo se construye mediante `parse`, que garantiza un número finito dentro
/// de `MIN_DONATION..=MAX_DONATION`.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
pub struct DonationAmount(f64);

impl DonationAmount {
    /// Interpreta el texto del formulario.
    ///
    /// Un texto vacío equivale a `0` (y por lo tanto queda fuera de rango). Se
    /// recortan espacios y se lee el prefijo numérico: `"25 USD"` vale 25 y
    /// `"1,000"` vale 1. Sin dígitos al inicio el monto es inválido.
    pub fn parse(raw: &str) -> Result<Self, DomainError> {
        let trimmed = raw.trim();
        let value = if trimmed.is_empty() {
            0.0
        } else {
            let prefix = DECIMAL_PREFIX.find(trimmed)
                                       .ok_or_else(|| DomainError::InvalidAmount(raw.to_string()))?;
            prefix.as_str()
                  .parse::<f64>()
                  .map_err(|_| DomainError::InvalidAmount(raw.to_string()))?
        };
        // "1e400" desborda a infinito
        if !value.is_finite() {
            return Err(DomainError::InvalidAmount(raw.to_string()));
        }
        if !(MIN_DONATION..=MAX_DONATION).contains(&value) {
            return Err(DomainError::AmountOutOfRange(value));
        }
        Ok(Self(value))
    }

    pub fn value(&self) -> f64 {
        self.0
    }
}

impl FromStr for DonationAmount {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for DonationAmount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}
