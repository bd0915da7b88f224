//! Configuración del flujo desde variables de entorno.
//! Usa la convención `DONATION_RETURN_URL`; si falta se usa el default local.

use dotenvy::dotenv;
use once_cell::sync::Lazy;
use std::env;

// Carga perezosa del archivo .env una sola vez.
static DOTENV_LOADED: Lazy<()> = Lazy::new(|| {
    let _ = dotenv(); // ignora error si no existe .env
});

pub const RETURN_URL_VAR: &str = "DONATION_RETURN_URL";
pub const DEFAULT_RETURN_URL: &str = "http://localhost:3000/payment-success";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlowConfig {
    /// Página a la que el procesador redirige tras confirmar. Se le agrega
    /// `?amount=<monto>`.
    pub return_url: String,
}

impl Default for FlowConfig {
    fn default() -> Self {
        Self { return_url: DEFAULT_RETURN_URL.to_string() }
    }
}

impl FlowConfig {
    pub fn from_env() -> Self {
        Lazy::force(&DOTENV_LOADED);
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Igual que `from_env` pero con una fuente de variables arbitraria.
    pub fn from_lookup<F>(lookup: F) -> Self
        where F: Fn(&str) -> Option<String>
    {
        let return_url = lookup(RETURN_URL_VAR).map(|v| v.trim().to_string())
                                               .filter(|v| !v.is_empty())
                                               .unwrap_or_else(|| DEFAULT_RETURN_URL.to_string());
        Self { return_url }
    }

    /// URL de retorno con el monto tal como lo escribió el donante.
    pub fn return_url_for(&self, amount: &str) -> String {
        format!("{}?amount={}", self.return_url, amount)
    }
}
