//! dona-adapters: implementaciones del contrato de pagos del core.
//!
//! Por ahora sólo `sandbox`: un procesador guionado que responde lo que el
//! test o la demo le indiquen y registra cada llamada. Las integraciones
//! reales con un procesador viven fuera de este workspace.

pub mod sandbox;

pub use sandbox::{sandbox_context, ConfirmationCall, ScriptedClient, ScriptedElements};
