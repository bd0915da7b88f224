//! dona-core: controlador de pasos del flujo de donación.
//!
//! Un submit entra por `DonationFlow::submit`, se despacha según el `Step`
//! actual (monto, datos del donante, pago) y sólo avanza si el handler del
//! paso lo aprueba. El paso de pago delega en `SubmissionOrchestrator`, que
//! habla con el procesador a través de `PaymentContext`.
pub mod config;
pub mod constants;
pub mod engine;
pub mod errors;
pub mod event;
pub mod hashing;
pub mod orchestrator;
pub mod payment;
pub mod repo;
pub mod step;

pub use config::FlowConfig;
pub use engine::{DonationFlow, FlowBuilder, SessionObserver, SessionState};
pub use errors::FlowError;
pub use event::{EventStore, InMemoryEventStore, SessionEvent, SessionEventKind};
pub use orchestrator::{PaymentOutcome, SubmissionOrchestrator};
pub use payment::{ConfirmParams, ConfirmPaymentRequest, PaymentClient, PaymentContext, PaymentElements, ProcessorError};
pub use repo::{InMemorySessionRepository, SessionRepository, SessionSnapshot};
pub use step::{BlockReason, Step, SubmitOutcome};
