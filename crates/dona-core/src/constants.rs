//! Constantes del controlador.

/// Versión lógica del controlador. Forma parte del fingerprint de sesión, de
/// modo que un cambio incompatible en las transiciones produce fingerprints
/// distintos para la misma secuencia de eventos.
pub const ENGINE_VERSION: &str = "D1.0";

/// Mensaje mostrado cuando el procesador rechaza la confirmación sin
/// explicar el motivo.
pub const PAYMENT_FAILED_FALLBACK: &str = "Payment failed";
