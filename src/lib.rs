//! DonaFlow Rust Library
//!
//! Este crate agrupa el workspace del flujo de donación:
//! - Re-exporta `dona_domain`, `dona_core` y `dona_adapters`.
//! - Expone `demo` para ejecutar una sesión completa contra el procesador
//!   guionado (usado por el binario `donation-demo`).
//! - Expone `errors` con los errores de ese recorrido.

pub mod demo;
pub mod errors;

pub use dona_adapters;
pub use dona_core;
pub use dona_domain;
