use async_trait::async_trait;
use std::fmt;
use std::sync::Arc;
use thiserror::Error;

use super::ConfirmPaymentRequest;

/// Error reportado por el procesador. El mensaje es opcional: algunos
/// rechazos llegan sin explicación.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("{}", .message.as_deref().unwrap_or("payment processor error"))]
pub struct ProcessorError {
    pub message: Option<String>,
}

impl ProcessorError {
    pub fn new(message: impl Into<String>) -> Self {
        Self { message: Some(message.into()) }
    }

    pub fn without_message() -> Self {
        Self { message: None }
    }
}

/// Handles de los campos de pago embebidos en la página.
#[async_trait]
pub trait PaymentElements: Send + Sync {
    /// Validación previa de los datos de tarjeta antes de confirmar.
    async fn submit(&self) -> Result<(), ProcessorError>;
}

/// Cliente del procesador.
#[async_trait]
pub trait PaymentClient: Send + Sync {
    /// Confirma el pago. `Ok(())` significa que el procesador no reportó error.
    async fn confirm_payment(&self, request: ConfirmPaymentRequest<'_>) -> Result<(), ProcessorError>;
}

/// Capacidades entregadas por la página. Cualquiera de las dos puede faltar
/// mientras el SDK del procesador termina de cargar.
#[derive(Clone, Default)]
pub struct PaymentContext {
    pub client: Option<Arc<dyn PaymentClient>>,
    pub elements: Option<Arc<dyn PaymentElements>>,
}

impl PaymentContext {
    pub fn new(client: Arc<dyn PaymentClient>, elements: Arc<dyn PaymentElements>) -> Self {
        Self { client: Some(client),
               elements: Some(elements) }
    }

    /// Contexto sin capacidades; suficiente para los pasos 1 y 2.
    pub fn empty() -> Self {
        Self::default()
    }
}

impl fmt::Debug for PaymentContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PaymentContext")
         .field("client", &self.client.is_some())
         .field("elements", &self.elements.is_some())
         .finish()
    }
}
