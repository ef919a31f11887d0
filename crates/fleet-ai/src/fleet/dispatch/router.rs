use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::post;
use axum::Router;
use chrono::{Local, NaiveDate};
use serde::Deserialize;
use serde_json::json;
use tracing::error;

use super::gateway::CompletionGateway;
use super::service::{DispatchError, DispatchService};
use crate::fleet::snapshot::FleetSnapshot;

/// Dispatch request body. `today` is an override for deterministic replays;
/// omitted, the wall clock decides here at the boundary.
#[derive(Debug, Clone, Deserialize)]
pub struct DispatchRequestBody {
    pub user_query: String,
    pub context: FleetSnapshot,
    #[serde(default)]
    pub today: Option<NaiveDate>,
}

pub fn dispatch_router<G>(service: Arc<DispatchService<G>>) -> Router
where
    G: CompletionGateway + 'static,
{
    Router::new()
        .route("/api/v1/dispatch", post(dispatch_handler::<G>))
        .with_state(service)
}

pub(crate) async fn dispatch_handler<G>(
    State(service): State<Arc<DispatchService<G>>>,
    payload: Result<axum::Json<DispatchRequestBody>, JsonRejection>,
) -> Response
where
    G: CompletionGateway + 'static,
{
    // Malformed input rejects the whole request, nothing gets dispatched.
    let axum::Json(body) = match payload {
        Ok(json) => json,
        Err(rejection) => {
            let payload = json!({
                "error": "Richiesta non valida",
                "details": rejection.body_text(),
            });
            return (StatusCode::BAD_REQUEST, axum::Json(payload)).into_response();
        }
    };

    let today = body.today.unwrap_or_else(|| Local::now().date_naive());
    match service.dispatch(&body.user_query, &body.context, today).await {
        Ok(outcome) => {
            let payload = json!({ "result": outcome.result });
            (StatusCode::OK, axum::Json(payload)).into_response()
        }
        Err(DispatchError::MissingCredential) => {
            let payload = json!({
                "error": "GEMINI_API_KEY non configurata",
                "details": "Aggiungi GEMINI_API_KEY nel file .env per abilitare l'AI Dispatch. Puoi ottenere una chiave su https://aistudio.google.com/",
            });
            (StatusCode::SERVICE_UNAVAILABLE, axum::Json(payload)).into_response()
        }
        Err(DispatchError::Upstream { status, details }) => {
            error!(status, "completion endpoint rejected the dispatch");
            let payload = json!({
                "error": "Errore nella risposta dell'AI",
                "details": details,
            });
            (StatusCode::BAD_GATEWAY, axum::Json(payload)).into_response()
        }
        Err(DispatchError::MalformedInput(details)) => {
            let payload = json!({
                "error": "Richiesta non valida",
                "details": details,
            });
            (StatusCode::BAD_REQUEST, axum::Json(payload)).into_response()
        }
        Err(failure) => {
            error!(error = %failure, "dispatch failed");
            let payload = json!({
                "error": "Errore interno del server",
                "details": failure.to_string(),
            });
            (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
        }
    }
}
