//! dona-domain: modelo de dominio del formulario de donación.
//!
//! Este crate no conoce el motor de pasos ni el procesador de pagos. Expone:
//! - `FormInfo` / `FormField`: el registro completo de campos capturados.
//! - `ErrorMap`: mapa disperso campo -> "marcado como inválido".
//! - `DonationAmount`: monto validado (rango 1..=999999.99).
//! - Validadores puros por campo (`validators`) y el agregador
//!   `validate_form` para el paso de datos del donante.

pub mod amount;
pub mod constants;
pub mod error;
pub mod error_map;
pub mod feedback;
pub mod form;
pub mod form_validator;
pub mod validators;

pub use amount::DonationAmount;
pub use error::DomainError;
pub use error_map::ErrorMap;
pub use feedback::email_feedback;
pub use form::{FormField, FormInfo};
pub use form_validator::validate_form;
pub use validators::{format_phone_number, validate_email_format};
