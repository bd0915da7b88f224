//! Engine: controlador de pasos, builder y estado observable de la sesión.

pub mod builder;
pub mod core;
pub mod session;

pub use builder::FlowBuilder;
pub use core::DonationFlow;
pub use session::{SessionObserver, SessionState};
