//! Recorrido de demostración: una sesión completa contra el sandbox.
//!
//! El donante escribe un monto inválido, lo corrige, olvida la ciudad, la
//! completa, recibe un rechazo de tarjeta y finalmente paga. Cada submit se
//! registra en el reporte junto con la secuencia de eventos.

use log::info;
use serde::Serialize;
use std::sync::Arc;
use uuid::Uuid;

use dona_adapters::{sandbox_context, ScriptedClient, ScriptedElements};
use dona_core::{DonationFlow, FlowConfig, InMemoryEventStore, InMemorySessionRepository, Step, SubmitOutcome};
use dona_domain::{FormField, FormInfo};

use crate::errors::DemoError;

/// Tope de submits antes de considerar la sesión atascada.
const MAX_SUBMITS: usize = 8;

#[derive(Debug, Serialize)]
pub struct DemoReport {
    pub session_id: Uuid,
    /// Una línea por submit: paso de origen y resultado.
    pub submits: Vec<String>,
    pub final_step: Step,
    pub events: Vec<&'static str>,
    pub session_fingerprint: Option<String>,
}

fn describe(from: Step, outcome: &SubmitOutcome) -> String {
    match outcome {
        SubmitOutcome::Advanced { to, .. } => format!("{from} -> {to}"),
        SubmitOutcome::Blocked(reason) => format!("{from} blocked: {reason:?}"),
    }
}

fn demo_form() -> FormInfo {
    FormInfo { amount: "0.50".into(),
               first_name: "Ada".into(),
               last_name: "Lovelace".into(),
               email: "ada@example.org".into(),
               address1: "12 St James's Square".into(),
               city: String::new(),
               state: "LDN".into(),
               postal_code: "SW1Y 4JH".into(),
               country: "GB".into(),
               ..FormInfo::default() }
}

fn fix_amount(form: &FormInfo) -> FormInfo {
    form.clone().with_amount("25")
}

fn fix_city(form: &FormInfo) -> FormInfo {
    form.clone().with_field(FormField::City, "London")
}

/// Ejecuta el recorrido completo y devuelve el reporte.
pub async fn run_demo(config: FlowConfig) -> Result<DemoReport, DemoError> {
    let mut flow = DonationFlow::builder(InMemoryEventStore::default(), InMemorySessionRepository::new())
        .client_secret("pi_demo_secret")
        .config(config)
        .initial_form(demo_form())
        .build();

    let elements = Arc::new(ScriptedElements::new().reject_next("Your card was declined."));
    let payment = sandbox_context(Arc::new(ScriptedClient::new()), elements);
    let mut submits = Vec::new();

    while !flow.is_complete() {
        if submits.len() >= MAX_SUBMITS {
            return Err(DemoError::Stalled(flow.step()));
        }
        let from = flow.step();
        let outcome = flow.submit(&payment).await?;
        submits.push(describe(from, &outcome));

        // el donante corrige lo que bloqueó el paso; el rechazo de tarjeta se
        // reintenta tal cual
        if let SubmitOutcome::Blocked(_) = outcome {
            match from {
                Step::Amount => flow.state_mut().update_form(fix_amount),
                Step::DonorInfo => flow.state_mut().update_form(fix_city),
                Step::Payment | Step::Complete => {}
            }
        }
    }

    info!("demo session {} finished after {} submits", flow.session_id(), submits.len());
    Ok(DemoReport { session_id: flow.session_id(),
                    submits,
                    final_step: flow.step(),
                    events: flow.event_variants(),
                    session_fingerprint: flow.session_fingerprint() })
}
