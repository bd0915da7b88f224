//! Pasos del flujo de donación.
//!
//! Un paso es una posición del formulario. Este módulo define:
//! - `Step`: el dominio ordenado de posiciones (1..=3 más `Complete`).
//! - `SubmitOutcome` / `BlockReason`: lo que ve quien dispara un submit.

pub mod definition;
mod outcome;

pub use definition::Step;
pub use outcome::{BlockReason, StepVerdict, SubmitOutcome};
