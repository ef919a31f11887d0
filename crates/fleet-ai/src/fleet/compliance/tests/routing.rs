use std::sync::Arc;

use axum::http::{header, Request, StatusCode};
use serde_json::{json, Value};
use tower::ServiceExt;

use super::common::{compliant_driver, day, fleet_of, read_json_body, today};
use crate::fleet::compliance::router::{compliance_router, report_handler, ComplianceReportRequest};
use crate::fleet::sample::sample_fleet;
use crate::fleet::snapshot::FleetSnapshot;

fn post_report(body: &Value) -> Request<axum::body::Body> {
    Request::post("/api/v1/compliance/report")
        .header(header::CONTENT_TYPE, "application/json")
        .body(axum::body::Body::from(
            serde_json::to_vec(body).expect("serializable body"),
        ))
        .expect("request builds")
}

fn get(uri: &str) -> Request<axum::body::Body> {
    Request::get(uri)
        .body(axum::body::Body::empty())
        .expect("request builds")
}

#[tokio::test]
async fn report_handler_evaluates_the_posted_snapshot() {
    let mut driver = compliant_driver("D-001", "Giuseppe", "Verdi");
    driver.license_deadline = day(-10);
    let request = ComplianceReportRequest {
        context: fleet_of(vec![driver], vec![], vec![]),
        today: Some(today()),
    };

    let response = report_handler(Ok(axum::Json(request))).await;

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    assert_eq!(payload.get("clean"), Some(&json!(false)));
    assert_eq!(
        payload.get("analysis").and_then(Value::as_str),
        Some("BLOCCANTE: Patente di Giuseppe Verdi SCADUTA")
    );
    let findings = payload
        .get("findings")
        .and_then(Value::as_array)
        .expect("findings array");
    assert_eq!(findings.len(), 1);
    assert_eq!(findings[0].get("kind"), Some(&json!("rule")));
    assert_eq!(findings[0].get("severity"), Some(&json!("blocking")));
}

#[tokio::test]
async fn report_handler_reports_clean_fleets() {
    let request = ComplianceReportRequest {
        context: fleet_of(
            vec![compliant_driver("D-001", "Marco", "Rossi")],
            vec![],
            vec![],
        ),
        today: Some(today()),
    };

    let response = report_handler(Ok(axum::Json(request))).await;

    let payload = read_json_body(response).await;
    assert_eq!(payload.get("clean"), Some(&json!(true)));
    assert_eq!(
        payload.get("analysis").and_then(Value::as_str),
        Some("Nessun problema di compliance rilevato.")
    );
}

#[tokio::test]
async fn report_route_accepts_posted_snapshots() {
    let router = compliance_router(Arc::new(FleetSnapshot::default()));
    let mut driver = compliant_driver("D-001", "Luca", "Bianchi");
    driver.license_deadline = day(25);
    let body = json!({
        "context": fleet_of(vec![driver], vec![], vec![]),
        "today": "2026-01-15",
    });

    let response = router.oneshot(post_report(&body)).await.expect("route runs");

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    assert_eq!(
        payload.get("analysis").and_then(Value::as_str),
        Some("URGENTE: Patente di Luca Bianchi scade tra 25 giorni")
    );
}

#[tokio::test]
async fn report_route_rejects_malformed_payloads() {
    let router = compliance_router(Arc::new(FleetSnapshot::default()));
    let request = Request::post("/api/v1/compliance/report")
        .header(header::CONTENT_TYPE, "application/json")
        .body(axum::body::Body::from(r#"{"context": {"drivers": 7}}"#))
        .expect("request builds");

    let response = router.oneshot(request).await.expect("route runs");

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let payload = read_json_body(response).await;
    assert_eq!(payload.get("error"), Some(&json!("Richiesta non valida")));
    assert!(!payload
        .get("details")
        .and_then(Value::as_str)
        .unwrap_or_default()
        .is_empty());
}

#[tokio::test]
async fn alerts_route_summarizes_by_category() {
    let snapshot = sample_fleet(chrono::Local::now().date_naive());
    let router = compliance_router(Arc::new(snapshot));

    let response = router
        .oneshot(get("/api/v1/compliance/alerts"))
        .await
        .expect("route runs");

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    let summary = payload.get("summary").expect("summary object");
    assert_eq!(summary.get("bloccante"), Some(&json!(3)));
    assert_eq!(summary.get("urgente"), Some(&json!(4)));
    assert_eq!(summary.get("limite"), Some(&json!(1)));
    assert_eq!(summary.get("attenzione"), Some(&json!(3)));
    assert_eq!(summary.get("violazione"), Some(&json!(2)));
    assert_eq!(summary.get("obbligo"), Some(&json!(2)));
    assert_eq!(summary.get("documento"), Some(&json!(1)));
    assert_eq!(summary.get("viaggio"), Some(&json!(1)));
    assert_eq!(summary.get("totale"), Some(&json!(17)));
    assert_eq!(
        payload.get("alerts").and_then(Value::as_array).map(Vec::len),
        Some(17)
    );
}

#[tokio::test]
async fn stats_route_reports_fleet_counts() {
    let snapshot = sample_fleet(chrono::Local::now().date_naive());
    let router = compliance_router(Arc::new(snapshot));

    let response = router
        .oneshot(get("/api/v1/fleet/stats"))
        .await
        .expect("route runs");

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    assert_eq!(payload.get("drivers"), Some(&json!(4)));
    assert_eq!(payload.get("vehicles"), Some(&json!(4)));
    assert_eq!(payload.get("trips"), Some(&json!(4)));
    assert_eq!(
        payload.get("available_drivers"),
        Some(&json!(["D-001", "D-004"]))
    );
    assert_eq!(
        payload.get("available_vehicles"),
        Some(&json!(["EF456GH", "MN012PQ"]))
    );
    assert_eq!(
        payload.get("recent_trips"),
        Some(&json!(["T-001", "T-002", "T-003", "T-004"]))
    );
    assert_eq!(payload.get("open_findings"), Some(&json!(17)));
}

#[tokio::test]
async fn driver_status_route_resolves_known_drivers() {
    let snapshot = sample_fleet(chrono::Local::now().date_naive());
    let router = compliance_router(Arc::new(snapshot));

    let response = router
        .clone()
        .oneshot(get("/api/v1/fleet/drivers/D-003/status"))
        .await
        .expect("route runs");

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    assert_eq!(payload.get("name"), Some(&json!("Giuseppe Verdi")));
    assert_eq!(payload.get("can_drive"), Some(&json!(false)));
    assert_eq!(payload.get("break_required"), Some(&json!(true)));
    let alerts = payload
        .get("alerts")
        .and_then(Value::as_array)
        .expect("alerts array");
    assert!(alerts
        .iter()
        .filter_map(Value::as_str)
        .any(|alert| alert.contains("LIMITE GIORNALIERO RAGGIUNTO")));

    let missing = router
        .oneshot(get("/api/v1/fleet/drivers/D-404/status"))
        .await
        .expect("route runs");

    assert_eq!(missing.status(), StatusCode::NOT_FOUND);
    let payload = read_json_body(missing).await;
    assert_eq!(payload.get("error"), Some(&json!("Driver not found")));
}
