//! Orquestador del paso de pago.
//!
//! Secuencia: `loading = true` -> chequeo de capacidades -> validación previa
//! de los elements -> confirmación -> `loading = false`. El único punto de
//! suspensión relevante es la confirmación; mientras dura, `loading` queda en
//! `true`. El controlador está prestado como `&mut`, así que no puede entrar
//! un segundo submit hasta que esta función retorne.

use log::{debug, warn};

use crate::config::FlowConfig;
use crate::constants::PAYMENT_FAILED_FALLBACK;
use crate::engine::{SessionObserver, SessionState};
use crate::errors::FlowError;
use crate::payment::{ConfirmParams, ConfirmPaymentRequest, PaymentContext};

/// Rama terminal alcanzada por el orquestador.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PaymentOutcome {
    Confirmed { request_fingerprint: String },
    PreconditionMissing,
    SubmitRejected { message: Option<String> },
    ConfirmationFailed { message: String, request_fingerprint: String },
}

pub struct SubmissionOrchestrator<'a> {
    config: &'a FlowConfig,
}

impl<'a> SubmissionOrchestrator<'a> {
    pub fn new(config: &'a FlowConfig) -> Self {
        Self { config }
    }

    /// Ejecuta el paso 3 sobre `state`. Nunca avanza el paso: eso lo decide el
    /// controlador según el `PaymentOutcome`.
    ///
    /// `observer` recibe el estado con `loading == true` antes de cualquier
    /// llamada al procesador.
    pub async fn run(&self,
                     state: &mut SessionState,
                     payment: &PaymentContext,
                     client_secret: &str,
                     observer: Option<&dyn SessionObserver>)
                     -> Result<PaymentOutcome, FlowError> {
        state.set_loading(true);
        if let Some(obs) = observer {
            obs.state_changed(state);
        }

        let (client, elements) = match (&payment.client, &payment.elements) {
            (Some(client), Some(elements)) => (client, elements),
            _ => {
                warn!("payment processor not ready (client: {}, elements: {})",
                      payment.client.is_some(),
                      payment.elements.is_some());
                state.set_loading(false);
                return Ok(PaymentOutcome::PreconditionMissing);
            }
        };

        if let Err(err) = elements.submit().await {
            debug!("pre-submit validation rejected: {err}");
            state.set_error_message(err.message.clone());
            state.set_loading(false);
            return Ok(PaymentOutcome::SubmitRejected { message: err.message });
        }

        let confirm_params = ConfirmParams::from_form(state.form(), self.config);
        let request_fingerprint = match confirm_params.fingerprint() {
            Ok(fp) => fp,
            Err(e) => {
                state.set_loading(false);
                return Err(e.into());
            }
        };

        let request = ConfirmPaymentRequest { elements: elements.as_ref(),
                                              client_secret,
                                              confirm_params };
        let result = client.confirm_payment(request).await;
        state.set_loading(false);

        match result {
            Ok(()) => {
                state.set_error_message(None);
                Ok(PaymentOutcome::Confirmed { request_fingerprint })
            }
            Err(err) => {
                let message = err.message.unwrap_or_else(|| PAYMENT_FAILED_FALLBACK.to_string());
                debug!("payment confirmation failed: {message}");
                state.set_error_message(Some(message.clone()));
                Ok(PaymentOutcome::ConfirmationFailed { message,
                                                        request_fingerprint })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::payment::{PaymentClient, PaymentElements, ProcessorError};
    use async_trait::async_trait;
    use std::sync::{Arc, Mutex};

    struct Elements(Result<(), ProcessorError>);

    #[async_trait]
    impl PaymentElements for Elements {
        async fn submit(&self) -> Result<(), ProcessorError> {
            self.0.clone()
        }
    }

    #[derive(Default)]
    struct Client {
        result: Option<ProcessorError>,
        secrets: Mutex<Vec<String>>,
    }

    #[async_trait]
    impl PaymentClient for Client {
        async fn confirm_payment(&self, request: ConfirmPaymentRequest<'_>) -> Result<(), ProcessorError> {
            self.secrets.lock().unwrap().push(request.client_secret.to_string());
            match &self.result {
                Some(e) => Err(e.clone()),
                None => Ok(()),
            }
        }
    }

    fn ctx(elements: Result<(), ProcessorError>, client: Arc<Client>) -> PaymentContext {
        PaymentContext::new(client, Arc::new(Elements(elements)))
    }

    #[test]
    fn missing_elements_aborts_and_resets_loading() {
        let cfg = FlowConfig::default();
        let mut state = SessionState::default();
        let payment = PaymentContext { client: Some(Arc::new(Client::default())),
                                       elements: None };
        let out = tokio_test::block_on(SubmissionOrchestrator::new(&cfg).run(&mut state, &payment, "pi_secret", None)).unwrap();
        assert_eq!(out, PaymentOutcome::PreconditionMissing);
        assert!(!state.loading());
        assert_eq!(state.error_message(), None);
    }

    #[test]
    fn pre_submit_error_is_surfaced_verbatim() {
        let cfg = FlowConfig::default();
        let mut state = SessionState::default();
        let client = Arc::new(Client::default());
        let payment = ctx(Err(ProcessorError::new("card declined")), client.clone());
        let out = tokio_test::block_on(SubmissionOrchestrator::new(&cfg).run(&mut state, &payment, "pi_secret", None)).unwrap();
        assert_eq!(out, PaymentOutcome::SubmitRejected { message: Some("card declined".into()) });
        assert_eq!(state.error_message(), Some("card declined"));
        assert!(!state.loading());
        assert!(client.secrets.lock().unwrap().is_empty(), "confirm must not run");
    }

    #[test]
    fn confirmation_error_without_message_uses_fallback() {
        let cfg = FlowConfig::default();
        let mut state = SessionState::default();
        let client = Arc::new(Client { result: Some(ProcessorError::without_message()),
                                       ..Client::default() });
        let payment = ctx(Ok(()), client.clone());
        let out = tokio_test::block_on(SubmissionOrchestrator::new(&cfg).run(&mut state, &payment, "pi_secret", None)).unwrap();
        assert!(matches!(out, PaymentOutcome::ConfirmationFailed { ref message, .. } if message == PAYMENT_FAILED_FALLBACK));
        assert_eq!(state.error_message(), Some(PAYMENT_FAILED_FALLBACK));
        assert_eq!(*client.secrets.lock().unwrap(), vec!["pi_secret".to_string()]);
    }

    #[test]
    fn success_clears_loading() {
        let cfg = FlowConfig::default();
        let mut state = SessionState::default();
        let payment = ctx(Ok(()), Arc::new(Client::default()));
        let out = tokio_test::block_on(SubmissionOrchestrator::new(&cfg).run(&mut state, &payment, "pi_secret", None)).unwrap();
        assert!(matches!(out, PaymentOutcome::Confirmed { .. }));
        assert!(!state.loading());
    }
}
