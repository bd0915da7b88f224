//! Eventos de sesión y trait EventStore.

mod store;
mod types;

pub use store::{EventStore, InMemoryEventStore};
pub use types::{SessionEvent, SessionEventKind};
