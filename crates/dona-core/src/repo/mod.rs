pub mod types;
pub use types::{InMemorySessionRepository, SessionRepository, SessionSnapshot};
