//! Replay de eventos hacia una foto (`SessionSnapshot`) de la sesión.
//!
//! El repositorio aplica los eventos en orden; no lee el estado del
//! controlador. La foto sirve para auditoría y para verificar que el paso
//! reconstruido coincide con el paso vivo.
use uuid::Uuid;

use crate::event::{SessionEvent, SessionEventKind};
use crate::step::Step;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionSnapshot {
    pub session_id: Uuid,
    pub step: Step,
    pub completed: bool,
    pub amount_rejections: u32,
    pub validation_failures: u32,
    /// Número de veces que se invocó la confirmación del procesador.
    pub payment_attempts: u32,
    pub last_payment_error: Option<String>,
}

/// Trait para reconstruir (`replay`) el estado de una sesión a partir de eventos.
pub trait SessionRepository {
    fn load(&self, session_id: Uuid, events: &[SessionEvent]) -> SessionSnapshot;
}

#[derive(Debug, Default)]
pub struct InMemorySessionRepository;

impl InMemorySessionRepository {
    pub fn new() -> Self {
        Self
    }
}

impl SessionRepository for InMemorySessionRepository {
    fn load(&self, session_id: Uuid, events: &[SessionEvent]) -> SessionSnapshot {
        let mut snap = SessionSnapshot { session_id,
                                         step: Step::FIRST,
                                         completed: false,
                                         amount_rejections: 0,
                                         validation_failures: 0,
                                         payment_attempts: 0,
                                         last_payment_error: None };
        for ev in events.iter().filter(|e| e.session_id == session_id) {
            match &ev.kind {
                SessionEventKind::SessionStarted | SessionEventKind::PaymentPreconditionMissing => {}
                SessionEventKind::StepAdvanced { to, .. } | SessionEventKind::StepReverted { to, .. } => snap.step = *to,
                SessionEventKind::AmountRejected { .. } => snap.amount_rejections += 1,
                SessionEventKind::ValidationFailed { .. } => snap.validation_failures += 1,
                SessionEventKind::PaymentSubmitRejected { message } => snap.last_payment_error = message.clone(),
                SessionEventKind::PaymentConfirmationRequested { .. } => snap.payment_attempts += 1,
                SessionEventKind::PaymentFailed { message } => snap.last_payment_error = Some(message.clone()),
                SessionEventKind::FlowCompleted { .. } => snap.completed = true,
            }
        }
        snap
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::{EventStore, InMemoryEventStore};

    #[test]
    fn replay_follows_advances_and_counts_attempts() {
        let mut store = InMemoryEventStore::default();
        let id = Uuid::new_v4();
        store.append_kind(id, SessionEventKind::SessionStarted);
        store.append_kind(id, SessionEventKind::StepAdvanced { from: Step::Amount, to: Step::DonorInfo });
        store.append_kind(id, SessionEventKind::ValidationFailed { fields: vec![] });
        store.append_kind(id, SessionEventKind::StepAdvanced { from: Step::DonorInfo, to: Step::Payment });
        store.append_kind(id, SessionEventKind::PaymentConfirmationRequested { request_fingerprint: "fp".into() });
        store.append_kind(id, SessionEventKind::PaymentFailed { message: "insufficient funds".into() });

        let snap = InMemorySessionRepository::new().load(id, &store.list(id));
        assert_eq!(snap.step, Step::Payment);
        assert!(!snap.completed);
        assert_eq!(snap.validation_failures, 1);
        assert_eq!(snap.payment_attempts, 1);
        assert_eq!(snap.last_payment_error.as_deref(), Some("insufficient funds"));
    }
}
