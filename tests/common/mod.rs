//! Shared utilities for integration tests: a programmable mock of the
//! upstream dummy employee API and a helper to start the facade.

#![allow(dead_code)]

use std::net::SocketAddr;
use std::sync::atomic::{AtomicBool, AtomicU16, AtomicU64, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{delete, get, post},
    Json, Router,
};
use serde_json::{json, Value};
use tokio::net::TcpListener;

use employee_facade::config::FacadeConfig;
use employee_facade::employees::Employee;
use employee_facade::upstream::Envelope;
use employee_facade::{HttpServer, Shutdown};

pub const FIXTURE: &str = include_str!("../fixtures/employees.json");

/// The 24 employees of the fixture.
pub fn fixture_employees() -> Vec<Employee> {
    let envelope: Envelope<Vec<Employee>> = serde_json::from_str(FIXTURE).unwrap();
    envelope.into_data().unwrap()
}

/// Knobs and data behind the mock upstream.
#[derive(Default)]
pub struct MockState {
    pub employees: Mutex<Vec<Employee>>,
    /// Really remove records on delete (the real upstream does not).
    pub honour_deletes: AtomicBool,
    /// Answer unknown ids with `200 {"data": null}` instead of 404.
    pub missing_as_null: AtomicBool,
    /// Non-zero: answer every call with this status.
    pub fail_with: AtomicU16,
    /// Answer every call with a body that is not JSON.
    pub garbage: AtomicBool,
    /// Delay before answering, in milliseconds.
    pub delay_ms: AtomicU64,
    pub delete_calls: Mutex<Vec<String>>,
    pub created: Mutex<Vec<Value>>,
}

pub struct MockUpstream {
    pub addr: SocketAddr,
    pub state: Arc<MockState>,
}

impl MockUpstream {
    pub fn base_url(&self) -> String {
        format!("http://{}/", self.addr)
    }
}

/// Start a mock upstream serving the fixture on an ephemeral port.
pub async fn start_mock_upstream() -> MockUpstream {
    let state = Arc::new(MockState {
        employees: Mutex::new(fixture_employees()),
        ..MockState::default()
    });

    let app = Router::new()
        .route("/api/v1/employees", get(list))
        .route("/api/v1/employee/{id}", get(fetch))
        .route("/api/v1/create", post(create))
        .route("/api/v1/delete/{id}", delete(remove))
        .with_state(state.clone());

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        let _ = axum::serve(listener, app).await;
    });

    MockUpstream { addr, state }
}

/// Common prelude of every mock route: delay, forced failure, garbage.
async fn intercept(state: &MockState) -> Option<Response> {
    let delay = state.delay_ms.load(Ordering::SeqCst);
    if delay > 0 {
        tokio::time::sleep(Duration::from_millis(delay)).await;
    }

    let fail = state.fail_with.load(Ordering::SeqCst);
    if fail != 0 {
        let status = StatusCode::from_u16(fail).unwrap();
        return Some((status, "upstream unhappy").into_response());
    }

    if state.garbage.load(Ordering::SeqCst) {
        return Some((StatusCode::OK, "<html>not json</html>").into_response());
    }
    None
}

fn envelope(data: Value, message: &str) -> Json<Value> {
    Json(json!({ "status": "success", "data": data, "message": message }))
}

async fn list(State(state): State<Arc<MockState>>) -> Response {
    if let Some(response) = intercept(&state).await {
        return response;
    }
    let employees = state.employees.lock().unwrap().clone();
    envelope(
        serde_json::to_value(employees).unwrap(),
        "Successfully! All records has been fetched.",
    )
    .into_response()
}

async fn fetch(State(state): State<Arc<MockState>>, Path(id): Path<String>) -> Response {
    if let Some(response) = intercept(&state).await {
        return response;
    }
    let found = id.parse::<i64>().ok().and_then(|id| {
        state
            .employees
            .lock()
            .unwrap()
            .iter()
            .find(|e| e.id == id)
            .cloned()
    });

    match found {
        Some(employee) => envelope(
            serde_json::to_value(employee).unwrap(),
            "Successfully! Record has been fetched.",
        )
        .into_response(),
        None if state.missing_as_null.load(Ordering::SeqCst) => {
            envelope(Value::Null, "Successfully! Record has been fetched.").into_response()
        }
        None => (
            StatusCode::NOT_FOUND,
            Json(json!({ "status": "error", "message": "Not found record" })),
        )
            .into_response(),
    }
}

/// Echoes the created record with the short key names and string numbers,
/// the way the real upstream does.
async fn create(State(state): State<Arc<MockState>>, Json(body): Json<Value>) -> Response {
    if let Some(response) = intercept(&state).await {
        return response;
    }
    state.created.lock().unwrap().push(body.clone());

    let echoed = json!({
        "name": body["employee_name"],
        "salary": body["employee_salary"].to_string(),
        "age": body["employee_age"].to_string(),
        "id": 25,
    });
    envelope(echoed, "Successfully! Record has been added.").into_response()
}

async fn remove(State(state): State<Arc<MockState>>, Path(id): Path<String>) -> Response {
    if let Some(response) = intercept(&state).await {
        return response;
    }
    state.delete_calls.lock().unwrap().push(id.clone());

    if state.honour_deletes.load(Ordering::SeqCst) {
        if let Ok(id) = id.parse::<i64>() {
            state.employees.lock().unwrap().retain(|e| e.id != id);
        }
    }
    envelope(Value::String(id), "Successfully! Record has been deleted").into_response()
}

/// A running facade.
pub struct Facade {
    pub addr: SocketAddr,
    pub shutdown: Shutdown,
}

impl Facade {
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }
}

impl Drop for Facade {
    fn drop(&mut self) {
        self.shutdown.trigger();
    }
}

/// Start the facade on an ephemeral port, pointed at `upstream`.
pub async fn start_facade(upstream: &MockUpstream, tweak: impl FnOnce(&mut FacadeConfig)) -> Facade {
    let mut config = FacadeConfig::default();
    config.listener.bind_address = "127.0.0.1:0".into();
    config.upstream.base_url = upstream.base_url();
    config.upstream.use_system_proxy = false;
    tweak(&mut config);

    let listener = TcpListener::bind(&config.listener.bind_address).await.unwrap();
    let addr = listener.local_addr().unwrap();

    let shutdown = Shutdown::new();
    let server = HttpServer::new(config).unwrap();
    let server_shutdown = shutdown.subscribe();
    tokio::spawn(async move {
        let _ = server.run(listener, server_shutdown).await;
    });

    Facade { addr, shutdown }
}

pub fn client() -> reqwest::Client {
    reqwest::Client::builder().no_proxy().build().unwrap()
}
