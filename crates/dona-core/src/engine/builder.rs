//! Builder para `DonationFlow`.
//!
//! Las stores son obligatorias (se reciben en `DonationFlow::builder`); el
//! resto tiene defaults: configuración `FlowConfig::default()`, formulario
//! vacío y client secret vacío. `build` registra `SessionStarted`.

use std::sync::Arc;
use uuid::Uuid;

use dona_domain::FormInfo;

use crate::config::FlowConfig;
use crate::engine::{DonationFlow, SessionObserver, SessionState};
use crate::event::{EventStore, SessionEventKind};
use crate::repo::SessionRepository;

pub struct FlowBuilder<E: EventStore, R: SessionRepository> {
    event_store: E,
    repository: R,
    session_id: Option<Uuid>,
    client_secret: String,
    config: FlowConfig,
    form: FormInfo,
    observer: Option<Arc<dyn SessionObserver>>,
}

impl<E: EventStore, R: SessionRepository> FlowBuilder<E, R> {
    pub(crate) fn new(event_store: E, repository: R) -> Self {
        Self { event_store,
               repository,
               session_id: None,
               client_secret: String::new(),
               config: FlowConfig::default(),
               form: FormInfo::default(),
               observer: None }
    }

    /// Token emitido por el procesador para este intento de pago.
    pub fn client_secret(mut self, secret: impl Into<String>) -> Self {
        self.client_secret = secret.into();
        self
    }

    pub fn config(mut self, config: FlowConfig) -> Self {
        self.config = config;
        self
    }

    /// Formulario inicial (por ejemplo, un monto preseleccionado).
    pub fn initial_form(mut self, form: FormInfo) -> Self {
        self.form = form;
        self
    }

    /// Fija el id de sesión; por defecto se genera un uuid v4.
    pub fn session_id(mut self, id: Uuid) -> Self {
        self.session_id = Some(id);
        self
    }

    /// Observador notificado en cada cambio de estado relevante.
    pub fn observer(mut self, observer: Arc<dyn SessionObserver>) -> Self {
        self.observer = Some(observer);
        self
    }

    pub fn build(self) -> DonationFlow<E, R> {
        let session_id = self.session_id.unwrap_or_else(Uuid::new_v4);
        let mut event_store = self.event_store;
        event_store.append_kind(session_id, SessionEventKind::SessionStarted);
        DonationFlow { session_id,
                       state: SessionState::new(self.form),
                       client_secret: self.client_secret,
                       config: self.config,
                       event_store,
                       repository: self.repository,
                       observer: self.observer }
    }
}
