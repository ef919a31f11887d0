use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use chrono::{Local, NaiveDate};
use serde::Deserialize;
use serde_json::json;

use super::finding::{Finding, Severity};
use super::hours::DriverStatusView;
use super::report::ComplianceReport;
use crate::fleet::domain::DriverId;
use crate::fleet::snapshot::FleetSnapshot;

/// Evaluation request carrying the fleet to inspect. When `today` is omitted
/// the wall clock decides, which is the only place it ever does.
#[derive(Debug, Deserialize)]
pub struct ComplianceReportRequest {
    pub context: FleetSnapshot,
    #[serde(default)]
    pub today: Option<NaiveDate>,
}

/// Router builder exposing the compliance read surface over a served
/// snapshot.
pub fn compliance_router(snapshot: Arc<FleetSnapshot>) -> Router {
    Router::new()
        .route("/api/v1/compliance/report", post(report_handler))
        .route("/api/v1/compliance/alerts", get(alerts_handler))
        .route("/api/v1/fleet/stats", get(stats_handler))
        .route(
            "/api/v1/fleet/drivers/:driver_id/status",
            get(driver_status_handler),
        )
        .with_state(snapshot)
}

pub(crate) async fn report_handler(
    payload: Result<axum::Json<ComplianceReportRequest>, JsonRejection>,
) -> Response {
    // Malformed input rejects the whole request, nothing gets evaluated.
    let axum::Json(request) = match payload {
        Ok(json) => json,
        Err(rejection) => {
            let payload = json!({
                "error": "Richiesta non valida",
                "details": rejection.body_text(),
            });
            return (StatusCode::BAD_REQUEST, axum::Json(payload)).into_response();
        }
    };

    let today = request.today.unwrap_or_else(|| Local::now().date_naive());
    let report = ComplianceReport::build(&request.context, today);
    let payload = json!({
        "analysis": report.render(),
        "findings": report.findings(),
        "clean": report.is_clean(),
    });
    (StatusCode::OK, axum::Json(payload)).into_response()
}

pub(crate) async fn alerts_handler(State(snapshot): State<Arc<FleetSnapshot>>) -> Response {
    let today = Local::now().date_naive();
    let report = ComplianceReport::build(&snapshot, today);

    let mut summary = serde_json::Map::new();
    for severity in Severity::ordered() {
        let count = report
            .findings()
            .iter()
            .filter(|finding| finding.severity() == Some(severity))
            .count();
        summary.insert(severity.prefix().to_lowercase(), json!(count));
    }
    let trip_issues = report
        .findings()
        .iter()
        .filter(|finding| finding.severity().is_none())
        .count();
    summary.insert("viaggio".to_string(), json!(trip_issues));
    summary.insert("totale".to_string(), json!(report.findings().len()));

    let payload = json!({
        "alerts": report
            .findings()
            .iter()
            .map(Finding::rendered)
            .collect::<Vec<_>>(),
        "summary": summary,
    });
    (StatusCode::OK, axum::Json(payload)).into_response()
}

pub(crate) async fn stats_handler(State(snapshot): State<Arc<FleetSnapshot>>) -> Response {
    let today = Local::now().date_naive();
    let report = ComplianceReport::build(&snapshot, today);
    let payload = json!({
        "drivers": snapshot.drivers.len(),
        "vehicles": snapshot.vehicles.len(),
        "trips": snapshot.trips.len(),
        "available_drivers": snapshot
            .available_drivers()
            .map(|driver| driver.id.0.clone())
            .collect::<Vec<_>>(),
        "available_vehicles": snapshot
            .available_vehicles()
            .map(|vehicle| vehicle.plate.clone())
            .collect::<Vec<_>>(),
        "recent_trips": snapshot
            .trips
            .iter()
            .take(5)
            .map(|trip| trip.id.0.clone())
            .collect::<Vec<_>>(),
        "open_findings": report.findings().len(),
    });
    (StatusCode::OK, axum::Json(payload)).into_response()
}

pub(crate) async fn driver_status_handler(
    State(snapshot): State<Arc<FleetSnapshot>>,
    Path(driver_id): Path<String>,
) -> Response {
    let id = DriverId(driver_id);
    match snapshot.driver(&id) {
        Some(driver) => {
            let view = DriverStatusView::for_driver(driver);
            (StatusCode::OK, axum::Json(view)).into_response()
        }
        None => {
            let payload = json!({
                "error": "Driver not found",
            });
            (StatusCode::NOT_FOUND, axum::Json(payload)).into_response()
        }
    }
}
