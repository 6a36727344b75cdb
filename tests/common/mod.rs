//! In-process fake of the evaluation backend.

#![allow(dead_code)]

use axum::extract::{Path, State};
use axum::http::{HeaderMap, StatusCode};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::{json, Value};
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use uaem_survey::config::ApiConfig;
use uaem_survey::domain::foundation::{AuthSession, Role, SessionUser, UserId};

pub const VALID_TOKEN: &str = "tok-valid";

type Reply = (StatusCode, Json<Value>);

/// Scripted backend behaviour plus recorded traffic.
#[derive(Default)]
pub struct Backend {
    pub roster_status: Option<StatusCode>,
    pub surveys_status: Option<StatusCode>,
    pub questions_body: Option<Value>,
    pub options_body: Option<Value>,
    pub failing_surveys: HashMap<i64, (StatusCode, &'static str)>,
    pub submissions: Mutex<Vec<(i64, Value)>>,
    pub logouts: AtomicUsize,
    pub hits: AtomicUsize,
}

impl Backend {
    pub fn hits(&self) -> usize {
        self.hits.load(Ordering::SeqCst)
    }

    pub fn submissions(&self) -> Vec<(i64, Value)> {
        self.submissions.lock().unwrap().clone()
    }
}

/// Starts the backend on an ephemeral port and returns its API config.
pub async fn spawn(backend: Backend) -> (ApiConfig, Arc<Backend>) {
    let state = Arc::new(backend);
    let app = Router::new()
        .route("/api/auth/login", post(login))
        .route("/api/auth/logout", post(logout))
        .route("/api/student/professors", get(professors))
        .route("/api/student/surveys", get(surveys))
        .route("/api/student/surveys/:id/submit", post(submit))
        .route("/api/survey/questions", get(questions))
        .route("/api/survey/options", get(options))
        .with_state(state.clone());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind listener");
    let addr = listener.local_addr().expect("local addr");
    tokio::spawn(async move { axum::serve(listener, app).await.expect("serve app") });

    let config = ApiConfig {
        base_url: format!("http://{}/api", addr),
        timeout_secs: 5,
    };
    (config, state)
}

pub fn student() -> SessionUser {
    SessionUser {
        id: UserId::new(9),
        first_name: "Laura".to_string(),
        last_name: "Méndez".to_string(),
        email: Some("laura@alumnos.uaem.mx".to_string()),
        matricula: Some("A001".to_string()),
        role: Role::Student,
    }
}

pub fn session(token: &str) -> AuthSession {
    AuthSession::new(token, student()).unwrap()
}

fn error(status: StatusCode, message: &str) -> Reply {
    (status, Json(json!({ "error": message })))
}

fn authorize(backend: &Backend, headers: &HeaderMap) -> Result<(), Reply> {
    backend.hits.fetch_add(1, Ordering::SeqCst);
    let expected = format!("Bearer {}", VALID_TOKEN);
    match headers.get("authorization").and_then(|v| v.to_str().ok()) {
        Some(value) if value == expected => Ok(()),
        _ => Err(error(StatusCode::UNAUTHORIZED, "Token is invalid")),
    }
}

async fn login(State(backend): State<Arc<Backend>>, Json(body): Json<Value>) -> Reply {
    backend.hits.fetch_add(1, Ordering::SeqCst);
    if body["role"] != "student" || body["matricula"] != "A001" {
        return error(StatusCode::UNAUTHORIZED, "Invalid credentials");
    }
    (
        StatusCode::OK,
        Json(json!({
            "message": "Login successful",
            "token": VALID_TOKEN,
            "user": {
                "id": 9,
                "first_name": "Laura",
                "last_name": "Méndez",
                "email": "laura@alumnos.uaem.mx",
                "matricula": "A001",
                "role": "student"
            }
        })),
    )
}

async fn logout(State(backend): State<Arc<Backend>>, headers: HeaderMap) -> Reply {
    if let Err(reply) = authorize(&backend, &headers) {
        return reply;
    }
    backend.logouts.fetch_add(1, Ordering::SeqCst);
    (StatusCode::OK, Json(json!({ "message": "Logout successful" })))
}

async fn professors(State(backend): State<Arc<Backend>>, headers: HeaderMap) -> Reply {
    if let Err(reply) = authorize(&backend, &headers) {
        return reply;
    }
    if let Some(status) = backend.roster_status {
        return error(status, "Internal server error");
    }
    (
        StatusCode::OK,
        Json(json!({
            "professors": [
                {"id": 7, "name": "Dra. Ruiz", "department": "Sistemas",
                 "subjects": [{"id": 3, "name": "Redes", "code": "RED-1", "survey_id": 40, "survey_status": "pending"}]},
                {"id": 8, "name": "Mtro. Soto", "department": null, "subjects": []}
            ],
            "total": 2
        })),
    )
}

async fn questions(State(backend): State<Arc<Backend>>, headers: HeaderMap) -> Reply {
    if let Err(reply) = authorize(&backend, &headers) {
        return reply;
    }
    let body = backend.questions_body.clone().unwrap_or_else(|| {
        json!({
            "questions": [
                {"id": 1, "text": "¿Promueve el respeto?", "topic": "Clima de aula y valores", "category": "Clima de aula"},
                {"id": 2, "text": "¿Evalúa con justicia?", "topic": "Evaluación", "category": "Evaluación"}
            ]
        })
    });
    (StatusCode::OK, Json(body))
}

async fn options(State(backend): State<Arc<Backend>>, headers: HeaderMap) -> Reply {
    if let Err(reply) = authorize(&backend, &headers) {
        return reply;
    }
    let body = backend.options_body.clone().unwrap_or_else(|| {
        json!({
            "options": [
                {"value": 5, "label": "Totalmente de acuerdo", "color": "bg-green-500"},
                {"value": 4, "label": "De acuerdo", "color": "bg-green-400"},
                {"value": 3, "label": "Neutral", "color": "bg-yellow-400"},
                {"value": 2, "label": "En desacuerdo", "color": "bg-orange-400"},
                {"value": 1, "label": "Totalmente en desacuerdo", "color": "bg-red-500"}
            ]
        })
    });
    (StatusCode::OK, Json(body))
}

async fn surveys(State(backend): State<Arc<Backend>>, headers: HeaderMap) -> Reply {
    if let Err(reply) = authorize(&backend, &headers) {
        return reply;
    }
    if let Some(status) = backend.surveys_status {
        return error(status, "Internal server error");
    }
    (
        StatusCode::OK,
        Json(json!({
            "surveys": [
                {"id": 30, "status": "completed", "professor": {"id": 7, "name": "Dra. Ruiz"}},
                {"id": 40, "status": "pending", "professor": {"id": 7, "name": "Dra. Ruiz"}},
                {"id": 41, "status": "pending", "professor": {"id": 8, "name": "Mtro. Soto"}}
            ],
            "total": 3
        })),
    )
}

async fn submit(
    State(backend): State<Arc<Backend>>,
    Path(id): Path<i64>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> Reply {
    if let Err(reply) = authorize(&backend, &headers) {
        return reply;
    }
    backend.submissions.lock().unwrap().push((id, body));
    if let Some((status, message)) = backend.failing_surveys.get(&id) {
        return error(*status, message);
    }
    (
        StatusCode::OK,
        Json(json!({
            "message": "Survey submitted successfully",
            "survey_id": id,
            "status": "completed",
            "sentiment": "positive",
            "confidence": 0.92
        })),
    )
}
