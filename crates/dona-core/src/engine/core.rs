//! Controlador de pasos (`DonationFlow`).

use log::{debug, info};
use serde_json::json;
use std::fmt;
use std::sync::Arc;
use uuid::Uuid;

use dona_domain::{validate_form, DonationAmount, ErrorMap};

use crate::config::FlowConfig;
use crate::engine::{SessionObserver, SessionState};
use crate::errors::FlowError;
use crate::event::{EventStore, InMemoryEventStore, SessionEvent, SessionEventKind};
use crate::hashing::hash_value;
use crate::orchestrator::{PaymentOutcome, SubmissionOrchestrator};
use crate::payment::PaymentContext;
use crate::repo::{InMemorySessionRepository, SessionRepository, SessionSnapshot};
use crate::step::{BlockReason, Step, StepVerdict, SubmitOutcome};

use super::builder::FlowBuilder;

/// Máquina de estados de una sesión de donación.
///
/// Recibe cada submit, despacha al handler del paso actual y sólo avanza
/// cuando el handler lo aprueba. Cada decisión queda registrada en el
/// `EventStore`.
pub struct DonationFlow<E, R>
    where E: EventStore,
          R: SessionRepository
{
    pub(crate) session_id: Uuid,
    pub(crate) state: SessionState,
    pub(crate) client_secret: String,
    pub(crate) config: FlowConfig,
    pub(crate) event_store: E,
    pub(crate) repository: R,
    pub(crate) observer: Option<Arc<dyn SessionObserver>>,
}

impl<E, R> fmt::Debug for DonationFlow<E, R>
    where E: EventStore,
          R: SessionRepository
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // el client secret nunca sale en logs
        f.debug_struct("DonationFlow")
         .field("session_id", &self.session_id)
         .field("state", &self.state)
         .field("config", &self.config)
         .field("observer", &self.observer.is_some())
         .finish_non_exhaustive()
    }
}

impl DonationFlow<InMemoryEventStore, InMemorySessionRepository> {
    /// Sesión con stores en memoria y configuración por defecto.
    pub fn new(client_secret: impl Into<String>) -> Self {
        Self::builder(InMemoryEventStore::default(), InMemorySessionRepository::new()).client_secret(client_secret)
                                                                                      .build()
    }
}

impl<E, R> DonationFlow<E, R>
    where E: EventStore,
          R: SessionRepository
{
    /// Crea un builder con las stores proporcionadas.
    pub fn builder(event_store: E, repository: R) -> FlowBuilder<E, R> {
        FlowBuilder::new(event_store, repository)
    }

    pub fn session_id(&self) -> Uuid {
        self.session_id
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    /// Acceso de escritura para la capa de presentación (setters de
    /// `SessionState`).
    pub fn state_mut(&mut self) -> &mut SessionState {
        &mut self.state
    }

    pub fn step(&self) -> Step {
        self.state.step()
    }

    pub fn is_complete(&self) -> bool {
        self.state.step().is_complete()
    }

    pub fn config(&self) -> &FlowConfig {
        &self.config
    }

    pub fn events(&self) -> Vec<SessionEvent> {
        self.event_store.list(self.session_id)
    }

    /// Reconstruye la sesión a partir de sus eventos.
    pub fn replay(&self) -> SessionSnapshot {
        self.repository.load(self.session_id, &self.events())
    }

    /// Variante compacta de eventos, útil en logs y tests.
    pub fn event_variants(&self) -> Vec<&'static str> {
        self.events()
            .iter()
            .map(|e| match e.kind {
                SessionEventKind::SessionStarted => "I",
                SessionEventKind::StepAdvanced { .. } => "A",
                SessionEventKind::StepReverted { .. } => "B",
                SessionEventKind::AmountRejected { .. } => "M",
                SessionEventKind::ValidationFailed { .. } => "V",
                SessionEventKind::PaymentPreconditionMissing => "N",
                SessionEventKind::PaymentSubmitRejected { .. } => "S",
                SessionEventKind::PaymentConfirmationRequested { .. } => "R",
                SessionEventKind::PaymentFailed { .. } => "X",
                SessionEventKind::FlowCompleted { .. } => "C",
            })
            .collect()
    }

    /// Procesa un submit del formulario para el paso actual.
    ///
    /// Un bloqueo no es un error: se devuelve como `SubmitOutcome::Blocked` y
    /// el paso no cambia. `Err(FlowError::FlowCompleted)` si la sesión ya
    /// terminó.
    pub async fn submit(&mut self, payment: &PaymentContext) -> Result<SubmitOutcome, FlowError> {
        let from = self.state.step();
        let verdict = match from {
            Step::Amount => self.submit_amount(),
            Step::DonorInfo => self.submit_donor_info(),
            Step::Payment => self.submit_payment(payment).await?,
            Step::Complete => return Err(FlowError::FlowCompleted),
        };

        let outcome = match verdict {
            StepVerdict::Advance => {
                let to = self.advance(from)?;
                SubmitOutcome::Advanced { from, to }
            }
            StepVerdict::Block(reason) => {
                debug!("step {from} blocked: {reason:?}");
                SubmitOutcome::Blocked(reason)
            }
        };
        self.notify();
        Ok(outcome)
    }

    /// Vuelve al paso anterior. No hace nada en el primer paso ni con la
    /// sesión completa. Devuelve el paso resultante.
    pub fn go_back(&mut self) -> Step {
        let from = self.state.step();
        if from.is_complete() {
            return from;
        }
        if let Some(to) = from.previous() {
            self.state.set_step(to);
            self.event_store.append_kind(self.session_id, SessionEventKind::StepReverted { from, to });
            self.notify();
            return to;
        }
        from
    }

    fn notify(&self) {
        if let Some(observer) = &self.observer {
            observer.state_changed(&self.state);
        }
    }

    fn submit_amount(&mut self) -> StepVerdict {
        match DonationAmount::parse(&self.state.form().amount) {
            Ok(_) => StepVerdict::Advance,
            Err(e) => {
                self.event_store
                    .append_kind(self.session_id, SessionEventKind::AmountRejected { reason: e.to_string() });
                StepVerdict::Block(BlockReason::InvalidAmount(e))
            }
        }
    }

    fn submit_donor_info(&mut self) -> StepVerdict {
        let pass = validate_form(self.state.form());
        if pass.is_empty() {
            self.state.set_errors(ErrorMap::new());
            return StepVerdict::Advance;
        }

        let merged = self.state.errors().merged(&pass);
        self.state.set_errors(merged);

        let fields = pass.flagged_fields();
        self.event_store
            .append_kind(self.session_id, SessionEventKind::ValidationFailed { fields: fields.clone() });
        StepVerdict::Block(BlockReason::InvalidFields(fields))
    }

    async fn submit_payment(&mut self, payment: &PaymentContext) -> Result<StepVerdict, FlowError> {
        let orchestrator = SubmissionOrchestrator::new(&self.config);
        let outcome = orchestrator.run(&mut self.state, payment, &self.client_secret, self.observer.as_deref())
                                  .await?;

        let verdict = match outcome {
            PaymentOutcome::Confirmed { request_fingerprint } => {
                self.event_store
                    .append_kind(self.session_id,
                                 SessionEventKind::PaymentConfirmationRequested { request_fingerprint });
                StepVerdict::Advance
            }
            PaymentOutcome::PreconditionMissing => {
                self.event_store
                    .append_kind(self.session_id, SessionEventKind::PaymentPreconditionMissing);
                StepVerdict::Block(BlockReason::PaymentNotReady)
            }
            PaymentOutcome::SubmitRejected { message } => {
                self.event_store
                    .append_kind(self.session_id,
                                 SessionEventKind::PaymentSubmitRejected { message: message.clone() });
                StepVerdict::Block(BlockReason::PaymentRejected { message })
            }
            PaymentOutcome::ConfirmationFailed { message,
                                                 request_fingerprint } => {
                self.event_store
                    .append_kind(self.session_id,
                                 SessionEventKind::PaymentConfirmationRequested { request_fingerprint });
                self.event_store
                    .append_kind(self.session_id, SessionEventKind::PaymentFailed { message: message.clone() });
                StepVerdict::Block(BlockReason::PaymentFailed { message })
            }
        };
        Ok(verdict)
    }

    fn advance(&mut self, from: Step) -> Result<Step, FlowError> {
        let to = from.next()
                     .ok_or_else(|| FlowError::Internal(format!("no step after {from}")))?;
        self.state.set_step(to);
        self.event_store
            .append_kind(self.session_id, SessionEventKind::StepAdvanced { from, to });
        debug!("session {} advanced {from} -> {to}", self.session_id);

        if to.is_complete() {
            self.complete_flow();
        }
        Ok(to)
    }

    fn complete_flow(&mut self) {
        let transitions: Vec<String> = self.events()
                                           .iter()
                                           .filter_map(|e| match &e.kind {
                                               SessionEventKind::StepAdvanced { from, to } => Some(format!("{from}->{to}")),
                                               SessionEventKind::PaymentConfirmationRequested { request_fingerprint } => {
                                                   Some(request_fingerprint.clone())
                                               }
                                               _ => None,
                                           })
                                           .collect();

        let session_fingerprint = hash_value(&json!({
                                                 "engine_version": crate::constants::ENGINE_VERSION,
                                                 "transitions": transitions
                                             }));

        info!("donation session {} completed", self.session_id);
        self.event_store
            .append_kind(self.session_id, SessionEventKind::FlowCompleted { session_fingerprint });
    }

    /// Fingerprint de la sesión si ya terminó.
    pub fn session_fingerprint(&self) -> Option<String> {
        self.events().iter().rev().find_map(|e| match &e.kind {
                                      SessionEventKind::FlowCompleted { session_fingerprint } => {
                                          Some(session_fingerprint.clone())
                                      }
                                      _ => None,
                                  })
    }
}
