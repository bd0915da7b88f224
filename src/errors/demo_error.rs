use dona_core::{FlowError, Step};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DemoError {
    #[error("Error del flujo: {0}")]
    Flow(#[from] FlowError),
    #[error("La sesión quedó detenida en el paso {0}")]
    Stalled(Step),
    #[error("Error de serialización: {0}")]
    Serialization(#[from] serde_json::Error),
}
