use serde::{Deserialize, Serialize};
use std::fmt;

/// Posición del donante dentro del flujo.
///
/// Las transiciones válidas son sólo hacia adelante y de a una:
/// - `Amount` -> `DonorInfo`
/// - `DonorInfo` -> `Payment`
/// - `Payment` -> `Complete`
///
/// `Complete` no tiene contenido propio; la capa de presentación deja de
/// renderizar pasos cuando lo ve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Step {
    Amount,
    DonorInfo,
    Payment,
    Complete,
}

impl Step {
    /// Primer paso de toda sesión.
    pub const FIRST: Step = Step::Amount;

    /// Número visible del paso (1..=3; `Complete` es 4).
    pub fn number(&self) -> u8 {
        match self {
            Step::Amount => 1,
            Step::DonorInfo => 2,
            Step::Payment => 3,
            Step::Complete => 4,
        }
    }

    pub fn from_number(n: u8) -> Option<Step> {
        match n {
            1 => Some(Step::Amount),
            2 => Some(Step::DonorInfo),
            3 => Some(Step::Payment),
            4 => Some(Step::Complete),
            _ => None,
        }
    }

    /// Identificador estable, usado en logs y eventos.
    pub fn id(&self) -> &'static str {
        match self {
            Step::Amount => "amount",
            Step::DonorInfo => "donor_info",
            Step::Payment => "payment",
            Step::Complete => "complete",
        }
    }

    pub fn next(&self) -> Option<Step> {
        Step::from_number(self.number() + 1)
    }

    pub fn previous(&self) -> Option<Step> {
        Step::from_number(self.number().checked_sub(1)?)
    }

    pub fn is_complete(&self) -> bool {
        matches!(self, Step::Complete)
    }
}

impl Default for Step {
    fn default() -> Self {
        Step::FIRST
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}
