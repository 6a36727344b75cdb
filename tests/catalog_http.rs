//! Catalog loading over HTTP against the fake backend.

mod common;

use axum::http::StatusCode;
use serde_json::json;
use std::sync::Arc;

use common::{session, spawn, student, Backend, VALID_TOKEN};
use uaem_survey::adapters::{ApiClient, HttpCatalogSource, HttpSurveyGateway, InMemorySessionStore};
use uaem_survey::application::{LoadSurveyCommand, LoadSurveyError, LoadSurveyHandler};
use uaem_survey::domain::catalog::{CatalogOrigin, MULTIPLE_SUBJECTS};
use uaem_survey::ports::{ApiError, SessionStore, SurveyGateway};

fn command() -> LoadSurveyCommand {
    LoadSurveyCommand {
        user: Some(student()),
    }
}

#[tokio::test]
async fn remote_catalog_is_loaded() {
    let (config, _backend) = spawn(Backend::default()).await;
    let store = Arc::new(InMemorySessionStore::new());
    let client = Arc::new(ApiClient::new(&config, Some(session(VALID_TOKEN)), store).unwrap());
    let handler = LoadSurveyHandler::new(Arc::new(HttpCatalogSource::new(client)));

    let loaded = handler.handle(command()).await.unwrap();

    assert!(!loaded.origins.any_fallback());
    assert_eq!(loaded.catalog.question_count(), 2);
    assert_eq!(loaded.catalog.options.len(), 5);
    assert_eq!(loaded.catalog.professors[0].subject, "Redes");
    assert_eq!(loaded.catalog.professors[1].subject, MULTIPLE_SUBJECTS);
}

#[tokio::test]
async fn roster_server_error_falls_back_to_bundled_professors() {
    let (config, _backend) = spawn(Backend {
        roster_status: Some(StatusCode::INTERNAL_SERVER_ERROR),
        ..Default::default()
    })
    .await;
    let store = Arc::new(InMemorySessionStore::new());
    let client = Arc::new(ApiClient::new(&config, Some(session(VALID_TOKEN)), store).unwrap());
    let handler = LoadSurveyHandler::new(Arc::new(HttpCatalogSource::new(client)));

    let loaded = handler.handle(command()).await.unwrap();

    let ids: Vec<i64> = loaded.catalog.professors.iter().map(|p| p.id.value()).collect();
    assert_eq!(ids, vec![1, 2, 3]);
    assert_eq!(loaded.origins.professors, CatalogOrigin::Fallback);
    assert_eq!(loaded.origins.questions, CatalogOrigin::Remote);
    assert_eq!(loaded.catalog.question_count(), 2);
}

#[tokio::test]
async fn malformed_sections_fall_back_independently() {
    let (config, _backend) = spawn(Backend {
        questions_body: Some(json!({ "items": [] })),
        options_body: Some(json!({
            "options": [{"value": 6, "label": "Más que de acuerdo", "color": "bg-green-500"}]
        })),
        ..Default::default()
    })
    .await;
    let store = Arc::new(InMemorySessionStore::new());
    let client = Arc::new(ApiClient::new(&config, Some(session(VALID_TOKEN)), store).unwrap());
    let handler = LoadSurveyHandler::new(Arc::new(HttpCatalogSource::new(client)));

    let loaded = handler.handle(command()).await.unwrap();

    assert_eq!(loaded.origins.professors, CatalogOrigin::Remote);
    assert_eq!(loaded.origins.questions, CatalogOrigin::Fallback);
    assert_eq!(loaded.origins.options, CatalogOrigin::Fallback);
    assert_eq!(loaded.catalog.question_count(), 22);
    assert_eq!(loaded.catalog.professor_count(), 2);
}

#[tokio::test]
async fn rejected_token_expires_session_and_clears_store() {
    let (config, backend) = spawn(Backend::default()).await;
    let store = Arc::new(InMemorySessionStore::with_session(session("tok-stale")));
    let client = Arc::new(
        ApiClient::new(&config, Some(session("tok-stale")), store.clone()).unwrap(),
    );
    let handler = LoadSurveyHandler::new(Arc::new(HttpCatalogSource::new(client.clone())));

    let result = handler.handle(command()).await;

    assert_eq!(result.unwrap_err(), LoadSurveyError::SessionExpired);
    assert!(client.is_expired());
    assert!(store.clear_count() >= 1);
    assert!(store.load().await.unwrap().is_none());

    // Later authenticated calls never reach the backend.
    let hits = backend.hits();
    let gateway = HttpSurveyGateway::new(client);
    assert_eq!(
        gateway.list_surveys().await.unwrap_err(),
        ApiError::NotAuthenticated
    );
    assert_eq!(backend.hits(), hits);
}
