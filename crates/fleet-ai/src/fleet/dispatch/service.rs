use std::sync::Arc;

use chrono::NaiveDate;
use tracing::info;

use super::gateway::{CompletionGateway, CompletionRequest, GatewayError};
use super::prompt::DispatchPrompt;
use crate::fleet::compliance::report::ComplianceReport;
use crate::fleet::snapshot::FleetSnapshot;

/// Answer of one dispatch round trip, with the compliance analysis that was
/// embedded in the prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DispatchOutcome {
    pub result: String,
    pub analysis: String,
}

#[derive(Debug, thiserror::Error)]
pub enum DispatchError {
    #[error("completion credential is not configured")]
    MissingCredential,
    #[error("completion endpoint rejected the request (status {status})")]
    Upstream { status: u16, details: String },
    #[error("dispatch request is invalid: {0}")]
    MalformedInput(String),
    #[error("dispatch failed: {0}")]
    Internal(String),
}

impl From<GatewayError> for DispatchError {
    fn from(error: GatewayError) -> Self {
        match error {
            GatewayError::MissingCredential => Self::MissingCredential,
            GatewayError::Upstream { status, body } => Self::Upstream {
                status,
                details: body,
            },
            GatewayError::Transport(message) => Self::Internal(message),
            GatewayError::MalformedResponse(message) => Self::Internal(message),
        }
    }
}

/// Service composing one dispatch: credential pre-flight, compliance report,
/// prompt assembly, completion call.
#[derive(Debug)]
pub struct DispatchService<G> {
    gateway: Arc<G>,
}

impl<G> DispatchService<G>
where
    G: CompletionGateway + 'static,
{
    pub fn new(gateway: Arc<G>) -> Self {
        Self { gateway }
    }

    pub async fn dispatch(
        &self,
        user_query: &str,
        snapshot: &FleetSnapshot,
        today: NaiveDate,
    ) -> Result<DispatchOutcome, DispatchError> {
        // Refuse before evaluating anything when no credential is present.
        self.gateway.ensure_configured()?;

        if user_query.trim().is_empty() {
            return Err(DispatchError::MalformedInput(
                "user_query must not be empty".to_string(),
            ));
        }

        let report = ComplianceReport::build(snapshot, today);
        let analysis = report.render();
        let prompt = DispatchPrompt::build(snapshot, &analysis, user_query, today);

        info!(
            drivers = snapshot.drivers.len(),
            vehicles = snapshot.vehicles.len(),
            trips = snapshot.trips.len(),
            findings = report.findings().len(),
            "dispatching operator request"
        );

        let result = self
            .gateway
            .complete(CompletionRequest {
                system_instruction: prompt.system_instruction,
                user_prompt: prompt.user_prompt,
            })
            .await?;

        Ok(DispatchOutcome { result, analysis })
    }
}
