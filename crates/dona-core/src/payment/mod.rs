//! Contrato con el procesador de pagos externo.
//!
//! El core sólo conoce dos operaciones: `PaymentElements::submit` (validación
//! previa de los campos de tarjeta) y `PaymentClient::confirm_payment`. Las
//! implementaciones reales viven fuera del workspace; `dona-adapters`
//! provee una versión guionada para pruebas y demos.

mod capability;
mod params;

pub use capability::{PaymentClient, PaymentContext, PaymentElements, ProcessorError};
pub use params::{BillingAddress, BillingDetails, ConfirmParams, ConfirmPaymentRequest, PaymentMethodData};
