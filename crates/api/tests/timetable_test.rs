use axum::{
    extract::Path,
    http::{header, HeaderMap, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use axum_test::TestServer;
use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use sihra_api::{app, handlers::timetable::NormalizeResponse, ApiState};
use sihra_client::ClientConfig;
use sihra_core::schedule::{CanonicalDay, GridConfig};
use std::{sync::Arc, time::Duration};
use tokio::net::TcpListener;

const TOKEN: &str = "docente-token";

async fn teacher_groups(Path(teacher_id): Path<String>, headers: HeaderMap) -> Response {
    let expected = format!("Bearer {}", TOKEN);
    if headers.get(header::AUTHORIZATION).and_then(|v| v.to_str().ok()) != Some(expected.as_str()) {
        return (StatusCode::UNAUTHORIZED, "invalid token").into_response();
    }
    if teacher_id != "42" {
        return (StatusCode::NOT_FOUND, "teacher not found").into_response();
    }

    Json(json!({
        "data": [
            { "id": 1, "name": "Programación I - A" },
            { "id": 2, "name": "Estructuras de Datos - B" }
        ]
    }))
    .into_response()
}

async fn group_schedules(Path(group_id): Path<String>) -> Response {
    match group_id.as_str() {
        "1" => Json(json!([
            { "id": 100, "day": "Mon", "startTime": "09:00", "endTime": "10:00", "room": "C-12" },
            { "id": 101, "day": "Domingo", "startTime": "09:00", "endTime": "10:00" },
            { "id": 102, "day": "Fri", "startTime": "12:00", "endTime": "12:05" }
        ]))
        .into_response(),
        _ => (StatusCode::SERVICE_UNAVAILABLE, "try later").into_response(),
    }
}

async fn test_server() -> TestServer {
    let upstream = Router::new()
        .route("/teachers/:teacher_id/groups", get(teacher_groups))
        .route("/groups/:group_id/schedules", get(group_schedules));

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, upstream).await.unwrap();
    });

    let client = ClientConfig {
        base_url: format!("http://{}", addr),
        request_timeout: Duration::from_secs(5),
        grid: GridConfig::default(),
    };
    let state = Arc::new(ApiState::new(&client).unwrap());

    TestServer::new(app(state)).unwrap()
}

fn bearer(token: &str) -> HeaderValue {
    HeaderValue::from_str(&format!("Bearer {}", token)).unwrap()
}

#[test_log::test(tokio::test)]
async fn test_health() {
    let server = test_server().await;

    let response = server.get("/health").await;
    response.assert_status_ok();
    assert_eq!(response.json::<Value>()["status"], "ok");
}

#[test_log::test(tokio::test)]
async fn test_version() {
    let server = test_server().await;

    let response = server.get("/version").await;
    response.assert_status_ok();
    assert_eq!(response.json::<Value>()["version"], env!("CARGO_PKG_VERSION"));
}

#[test_log::test(tokio::test)]
async fn test_teacher_timetable() {
    let server = test_server().await;

    let response = server
        .get("/api/teachers/42/timetable")
        .add_header(header::AUTHORIZATION, bearer(TOKEN))
        .await;
    response.assert_status_ok();

    let body = response.json::<Value>();
    assert_eq!(body["teacherId"], "42");

    let monday = &body["timetable"]["columns"][CanonicalDay::Lunes.index()];
    assert_eq!(monday["day"], "Lunes");
    let placed = &monday["cells"][2][0];
    assert_eq!(placed["slot"]["id"], "100");
    assert_eq!(placed["slot"]["groupName"], "Programación I - A");
    assert_eq!(placed["geometry"]["topPx"], 120.0);
    assert_eq!(placed["geometry"]["heightPx"], 60.0);

    let hidden = body["timetable"]["hidden"].as_array().unwrap();
    assert_eq!(hidden.len(), 2);
    assert_eq!(hidden[0]["reason"], "unmatchedDay");
    assert_eq!(hidden[1]["reason"], "belowMinimumHeight");
    assert_eq!(hidden[1]["heightPx"], 5.0);

    let failed = body["failedGroups"].as_array().unwrap();
    assert_eq!(failed.len(), 1);
    assert_eq!(failed[0]["group"]["name"], "Estructuras de Datos - B");
}

#[test_log::test(tokio::test)]
async fn test_missing_credential_is_rejected() {
    let server = test_server().await;

    let response = server.get("/api/teachers/42/timetable").await;
    response.assert_status(StatusCode::UNAUTHORIZED);
    assert!(response.json::<Value>()["error"]
        .as_str()
        .unwrap()
        .contains("Missing authorization header"));
}

#[test_log::test(tokio::test)]
async fn test_upstream_statuses_pass_through() {
    let server = test_server().await;

    server
        .get("/api/teachers/42/timetable")
        .add_header(header::AUTHORIZATION, bearer("expired"))
        .await
        .assert_status(StatusCode::UNAUTHORIZED);

    server
        .get("/api/teachers/7/timetable")
        .add_header(header::AUTHORIZATION, bearer(TOKEN))
        .await
        .assert_status(StatusCode::NOT_FOUND);
}

#[test_log::test(tokio::test)]
async fn test_normalize_day() {
    let server = test_server().await;

    let matched = server
        .get("/api/days/normalize")
        .add_query_param("day", "Miércoles")
        .await
        .json::<NormalizeResponse>();
    assert_eq!(matched.day, "Miércoles");
    assert!(matched.matched);
    assert_eq!(matched.canonical, Some(CanonicalDay::Miercoles));

    let unmatched = server
        .get("/api/days/normalize")
        .add_query_param("day", "xyz")
        .await
        .json::<NormalizeResponse>();
    assert_eq!(unmatched.day, "xyz");
    assert_eq!(unmatched.input, "xyz");
    assert!(!unmatched.matched);
    assert_eq!(unmatched.canonical, None);
}
