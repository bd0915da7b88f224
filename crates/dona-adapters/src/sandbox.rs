//! Procesador guionado.
//!
//! Cada llamada consume el siguiente resultado de la cola; con la cola vacía
//! responde `Ok(())`. Las llamadas quedan registradas para inspección.

use async_trait::async_trait;
use log::debug;
use serde::Serialize;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex, MutexGuard};

use dona_core::{ConfirmParams, ConfirmPaymentRequest, PaymentClient, PaymentContext, PaymentElements, ProcessorError};

fn lock<T>(m: &Mutex<T>) -> MutexGuard<'_, T> {
    match m.lock() {
        Ok(g) => g,
        Err(poisoned) => poisoned.into_inner(),
    }
}

#[derive(Debug, Default)]
pub struct ScriptedElements {
    script: Mutex<VecDeque<Result<(), ProcessorError>>>,
    calls: Mutex<usize>,
}

impl ScriptedElements {
    pub fn new() -> Self {
        Self::default()
    }

    /// Encola un resultado para el próximo `submit`.
    pub fn then(self, result: Result<(), ProcessorError>) -> Self {
        lock(&self.script).push_back(result);
        self
    }

    /// Atajo: el próximo `submit` falla con `message`.
    pub fn reject_next(self, message: &str) -> Self {
        self.then(Err(ProcessorError::new(message)))
    }

    pub fn submit_calls(&self) -> usize {
        *lock(&self.calls)
    }
}

#[async_trait]
impl PaymentElements for ScriptedElements {
    async fn submit(&self) -> Result<(), ProcessorError> {
        *lock(&self.calls) += 1;
        let result = lock(&self.script).pop_front().unwrap_or(Ok(()));
        debug!("sandbox elements.submit -> {result:?}");
        result
    }
}

/// Copia de lo que recibió `confirm_payment`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConfirmationCall {
    pub client_secret: String,
    pub confirm_params: ConfirmParams,
}

#[derive(Debug, Default)]
pub struct ScriptedClient {
    script: Mutex<VecDeque<Result<(), ProcessorError>>>,
    calls: Mutex<Vec<ConfirmationCall>>,
}

impl ScriptedClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// Encola un resultado para la próxima confirmación.
    pub fn then(self, result: Result<(), ProcessorError>) -> Self {
        lock(&self.script).push_back(result);
        self
    }

    pub fn decline_next(self, message: Option<&str>) -> Self {
        let err = match message {
            Some(m) => ProcessorError::new(m),
            None => ProcessorError::without_message(),
        };
        self.then(Err(err))
    }

    pub fn calls(&self) -> Vec<ConfirmationCall> {
        lock(&self.calls).clone()
    }
}

#[async_trait]
impl PaymentClient for ScriptedClient {
    async fn confirm_payment(&self, request: ConfirmPaymentRequest<'_>) -> Result<(), ProcessorError> {
        lock(&self.calls).push(ConfirmationCall { client_secret: request.client_secret.to_string(),
                                                  confirm_params: request.confirm_params.clone() });
        let result = lock(&self.script).pop_front().unwrap_or(Ok(()));
        debug!("sandbox confirm_payment -> {result:?}");
        result
    }
}

/// Arma un `PaymentContext` listo con ambas capacidades.
pub fn sandbox_context(client: Arc<ScriptedClient>, elements: Arc<ScriptedElements>) -> PaymentContext {
    PaymentContext::new(client, elements)
}
