use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::response::Response;
use chrono::NaiveDate;
use serde_json::Value;

use crate::fleet::dispatch::gateway::{CompletionGateway, CompletionRequest, GatewayError};
use crate::fleet::dispatch::service::DispatchService;

pub(super) fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 1, 15).expect("valid date")
}

#[derive(Debug)]
pub(super) enum FakeMode {
    Reply(String),
    Unconfigured,
    Upstream { status: u16, body: String },
    Transport(String),
}

/// Completion double that records every request it sees and answers
/// according to its mode.
#[derive(Debug)]
pub(super) struct FakeGateway {
    mode: FakeMode,
    requests: Mutex<Vec<CompletionRequest>>,
}

impl FakeGateway {
    pub(super) fn replying(text: &str) -> Self {
        Self::with_mode(FakeMode::Reply(text.to_string()))
    }

    pub(super) fn unconfigured() -> Self {
        Self::with_mode(FakeMode::Unconfigured)
    }

    pub(super) fn upstream(status: u16, body: &str) -> Self {
        Self::with_mode(FakeMode::Upstream {
            status,
            body: body.to_string(),
        })
    }

    pub(super) fn transport(message: &str) -> Self {
        Self::with_mode(FakeMode::Transport(message.to_string()))
    }

    fn with_mode(mode: FakeMode) -> Self {
        Self {
            mode,
            requests: Mutex::new(Vec::new()),
        }
    }

    pub(super) fn requests(&self) -> Vec<CompletionRequest> {
        self.requests.lock().expect("requests mutex poisoned").clone()
    }
}

#[async_trait]
impl CompletionGateway for FakeGateway {
    fn ensure_configured(&self) -> Result<(), GatewayError> {
        match self.mode {
            FakeMode::Unconfigured => Err(GatewayError::MissingCredential),
            _ => Ok(()),
        }
    }

    async fn complete(&self, request: CompletionRequest) -> Result<String, GatewayError> {
        self.requests
            .lock()
            .expect("requests mutex poisoned")
            .push(request);
        match &self.mode {
            FakeMode::Reply(text) => Ok(text.clone()),
            FakeMode::Unconfigured => Err(GatewayError::MissingCredential),
            FakeMode::Upstream { status, body } => Err(GatewayError::Upstream {
                status: *status,
                body: body.clone(),
            }),
            FakeMode::Transport(message) => Err(GatewayError::Transport(message.clone())),
        }
    }
}

pub(super) fn service_with(gateway: FakeGateway) -> (Arc<DispatchService<FakeGateway>>, Arc<FakeGateway>) {
    let gateway = Arc::new(gateway);
    (Arc::new(DispatchService::new(gateway.clone())), gateway)
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read response body");
    serde_json::from_slice(&body).expect("json payload")
}
