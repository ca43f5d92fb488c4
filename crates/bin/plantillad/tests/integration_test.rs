//! End-to-end smoke tests for the full plantillad stack.
//!
//! Each test spins up the complete application (real repository, real service,
//! real axum router) and exercises the HTTP layer via
//! `tower::ServiceExt::oneshot` — no TCP port is bound.

use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use axum::response::Response;
use http_body_util::BodyExt;
use plantilla_adapter_http_axum::router;
use plantilla_adapter_http_axum::state::AppState;
use plantilla_adapter_storage_memory::MemoryEmployeeRepository;
use plantilla_adapter_storage_sqlite_sqlx::{Config, SqliteEmployeeRepository};
use plantilla_app::ports::EmployeeRepository;
use plantilla_app::services::employee_service::EmployeeService;
use serde_json::{Value, json};
use tower::ServiceExt;

fn app_with<R>(repo: R) -> axum::Router
where
    R: EmployeeRepository + Send + Sync + 'static,
{
    router::build(AppState::new(EmployeeService::new(repo)))
}

/// Build a fully-wired router backed by an in-memory `SQLite` database.
async fn sqlite_app() -> axum::Router {
    let db = Config {
        database_url: "sqlite::memory:".to_string(),
    }
    .build()
    .await
    .expect("in-memory database should initialise");

    app_with(SqliteEmployeeRepository::new(db.pool().clone()))
}

fn memory_app() -> axum::Router {
    app_with(MemoryEmployeeRepository::new())
}

async fn send(app: &axum::Router, method: &str, uri: &str, body: Option<Value>) -> Response {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string())),
        None => builder.body(Body::empty()),
    }
    .unwrap();

    app.clone().oneshot(request).await.unwrap()
}

fn assert_json(resp: &Response) {
    assert_eq!(resp.headers()[header::CONTENT_TYPE], "application/json");
}

async fn body_json(resp: Response) -> Value {
    let bytes = resp.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// The ordered create → get → list → update → delete scenario.
async fn run_crud_scenario(app: axum::Router) {
    let ericson = json!({
        "id": 1,
        "nombre": "Ericson",
        "apellido": "Veliz",
        "email": "ev01@gmail.com",
    });

    // Create
    let resp = send(&app, "POST", "/api/empleados", Some(ericson.clone())).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    assert_json(&resp);
    assert_eq!(body_json(resp).await, ericson);

    // Get by id
    let resp = send(&app, "GET", "/api/empleados/1", None).await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_json(&resp);
    assert_eq!(body_json(resp).await, ericson);

    // List, twice without mutation
    let resp = send(&app, "GET", "/api/empleados", None).await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_json(&resp);
    let list = body_json(resp).await;
    assert_eq!(list.as_array().unwrap().len(), 1);
    assert_eq!(list[0]["nombre"], "Ericson");
    assert_eq!(list[0]["apellido"], "Veliz");
    assert_eq!(list[0]["email"], "ev01@gmail.com");

    let again = body_json(send(&app, "GET", "/api/empleados", None).await).await;
    assert_eq!(again, list);

    // Update
    let resp = send(
        &app,
        "PUT",
        "/api/empleados/1",
        Some(json!({
            "id": null,
            "nombre": "Juan",
            "apellido": "Valle",
            "email": "jv01@gmail.com",
        })),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_json(&resp);
    let juan = json!({
        "id": 1,
        "nombre": "Juan",
        "apellido": "Valle",
        "email": "jv01@gmail.com",
    });
    assert_eq!(body_json(resp).await, juan);

    let resp = send(&app, "GET", "/api/empleados/1", None).await;
    assert_eq!(body_json(resp).await, juan);

    // Delete
    let resp = send(&app, "DELETE", "/api/empleados/1", None).await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_json(&resp);

    let resp = send(&app, "GET", "/api/empleados", None).await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(body_json(resp).await, json!([]));

    let resp = send(&app, "GET", "/api/empleados/1", None).await;
    assert!(resp.status().is_client_error());
}

// ---------------------------------------------------------------------------
// Health check
// ---------------------------------------------------------------------------

#[tokio::test]
async fn should_return_ok_when_health_check_called() {
    let resp = send(&sqlite_app().await, "GET", "/health", None).await;
    assert_eq!(resp.status(), StatusCode::OK);
}

// ---------------------------------------------------------------------------
// API: full CRUD cycle
// ---------------------------------------------------------------------------

#[tokio::test]
async fn should_complete_employee_crud_cycle_with_sqlite() {
    run_crud_scenario(sqlite_app().await).await;
}

#[tokio::test]
async fn should_complete_employee_crud_cycle_in_memory() {
    run_crud_scenario(memory_app()).await;
}

#[tokio::test]
async fn should_keep_list_length_equal_to_live_records() {
    let app = sqlite_app().await;

    for name in ["Ana", "Luis", "Marta"] {
        let resp = send(
            &app,
            "POST",
            "/api/empleados",
            Some(json!({"nombre": name, "apellido": "Paz", "email": "x@y.z"})),
        )
        .await;
        assert_eq!(resp.status(), StatusCode::CREATED);
    }

    let resp = send(&app, "DELETE", "/api/empleados/2", None).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let list = body_json(send(&app, "GET", "/api/empleados", None).await).await;
    let names: Vec<&str> = list
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["nombre"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["Ana", "Marta"]);
}

#[tokio::test]
async fn should_reject_duplicate_id_and_keep_original() {
    let app = memory_app();
    let first = json!({"id": 3, "nombre": "Ana", "apellido": "Paz", "email": "a@p.z"});
    let second = json!({"id": 3, "nombre": "Luis", "apellido": "Paz", "email": "l@p.z"});

    let resp = send(&app, "POST", "/api/empleados", Some(first.clone())).await;
    assert_eq!(resp.status(), StatusCode::CREATED);

    let resp = send(&app, "POST", "/api/empleados", Some(second)).await;
    assert_eq!(resp.status(), StatusCode::CONFLICT);

    let resp = send(&app, "GET", "/api/empleados/3", None).await;
    assert_eq!(body_json(resp).await, first);
}

#[tokio::test]
async fn should_keep_assigning_ids_after_rejected_oversized_id_with_sqlite() {
    let app = sqlite_app().await;

    let resp = send(
        &app,
        "POST",
        "/api/empleados",
        Some(json!({"id": i64::MAX, "nombre": "Ana", "apellido": "Paz", "email": "a@p.z"})),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert_json(&resp);

    let resp = send(
        &app,
        "POST",
        "/api/empleados",
        Some(json!({"nombre": "Luis", "apellido": "Paz", "email": ""})),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    assert_eq!(body_json(resp).await["id"], 1);
}
