//! Payload de confirmación construido a partir de `FormInfo`.
//!
//! Las claves serializadas (`return_url`, `receipt_email`,
//! `payment_method_data.billing_details.address.postal_code`, ...) son las
//! que espera el procesador.

use dona_domain::FormInfo;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::config::FlowConfig;
use crate::hashing::hash_value;

use super::PaymentElements;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BillingAddress {
    pub country: String,
    pub line1: String,
    pub line2: String,
    pub state: String,
    pub city: String,
    pub postal_code: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BillingDetails {
    pub address: BillingAddress,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentMethodData {
    pub billing_details: BillingDetails,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfirmParams {
    pub return_url: String,
    pub receipt_email: String,
    pub payment_method_data: PaymentMethodData,
}

impl ConfirmParams {
    /// Mapea el formulario campo a campo: address1 -> line1,
    /// address2 -> line2, postal_code -> postal_code.
    pub fn from_form(form: &FormInfo, config: &FlowConfig) -> Self {
        let address = BillingAddress { country: form.country.clone(),
                                       line1: form.address1.clone(),
                                       line2: form.address2.clone(),
                                       state: form.state.clone(),
                                       city: form.city.clone(),
                                       postal_code: form.postal_code.clone() };
        Self { return_url: config.return_url_for(&form.amount),
               receipt_email: form.email.clone(),
               payment_method_data: PaymentMethodData { billing_details: BillingDetails { address } } }
    }

    /// Hash canónico del payload. No incluye el client secret.
    pub fn fingerprint(&self) -> Result<String, serde_json::Error> {
        Ok(hash_value(&serde_json::to_value(self)?))
    }
}

/// Request completo entregado a `PaymentClient::confirm_payment`.
pub struct ConfirmPaymentRequest<'a> {
    pub elements: &'a dyn PaymentElements,
    pub client_secret: &'a str,
    pub confirm_params: ConfirmParams,
}

impl fmt::Debug for ConfirmPaymentRequest<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConfirmPaymentRequest")
         .field("client_secret", &"<redacted>")
         .field("confirm_params", &self.confirm_params)
         .finish()
    }
}
