use chrono::Utc;
use uuid::Uuid;

use super::{SessionEvent, SessionEventKind};

/// Registro append-only de lo que decide el controlador.
///
/// Los eventos nunca se modifican; `seq` crece de a uno dentro de cada
/// sesión y `list` los devuelve en ese orden.
pub trait EventStore {
    fn append_kind(&mut self, session_id: Uuid, kind: SessionEventKind) -> SessionEvent;
    fn list(&self, session_id: Uuid) -> Vec<SessionEvent>;
}

/// Un único log en orden de llegada, compartido por todas las sesiones.
#[derive(Debug, Default)]
pub struct InMemoryEventStore {
    log: Vec<SessionEvent>,
}

impl InMemoryEventStore {
    fn next_seq(&self, session_id: Uuid) -> u64 {
        self.log
            .iter()
            .rev()
            .find(|e| e.session_id == session_id)
            .map_or(0, |last| last.seq + 1)
    }
}

impl EventStore for InMemoryEventStore {
    fn append_kind(&mut self, session_id: Uuid, kind: SessionEventKind) -> SessionEvent {
        let event = SessionEvent { seq: self.next_seq(session_id),
                                   session_id,
                                   kind,
                                   ts: Utc::now() };
        self.log.push(event.clone());
        event
    }

    fn list(&self, session_id: Uuid) -> Vec<SessionEvent> {
        self.log
            .iter()
            .filter(|e| e.session_id == session_id)
            .cloned()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seq_is_per_session_even_when_interleaved() {
        let mut store = InMemoryEventStore::default();
        let a = Uuid::new_v4();
        let b = Uuid::new_v4();
        assert_eq!(store.append_kind(a, SessionEventKind::SessionStarted).seq, 0);
        assert_eq!(store.append_kind(b, SessionEventKind::SessionStarted).seq, 0);
        assert_eq!(store.append_kind(a, SessionEventKind::PaymentPreconditionMissing).seq, 1);

        let listed: Vec<u64> = store.list(a).iter().map(|e| e.seq).collect();
        assert_eq!(listed, vec![0, 1]);
        assert_eq!(store.list(b).len(), 1);
        assert!(store.list(Uuid::new_v4()).is_empty());
    }
}
