use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode, header},
};
use std::sync::Arc;

use async_trait::async_trait;
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt;

use course_manager::{
    api::router,
    db,
    error::AppError,
    models::{CourseCreateRequest, CourseId, CourseView},
    services::CourseService,
    state::AppState,
};

async fn setup_app() -> Router {
    let pool = db::connect("sqlite::memory:", 1)
        .await
        .expect("Failed to create database");
    db::run_migrations(&pool)
        .await
        .expect("Failed to run migrations");

    router(AppState::new(pool))
}

async fn send(
    app: &Router,
    method: &str,
    uri: &str,
    body: Option<Value>,
) -> (StatusCode, Option<String>, Value) {
    send_raw(app, method, uri, body.map(|json| json.to_string())).await
}

async fn send_raw(
    app: &Router,
    method: &str,
    uri: &str,
    body: Option<String>,
) -> (StatusCode, Option<String>, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(text) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(text)),
        None => builder.body(Body::empty()),
    }
    .expect("request should build");

    let response = app
        .clone()
        .oneshot(request)
        .await
        .expect("handler should respond");

    let status = response.status();
    let location = response
        .headers()
        .get(header::LOCATION)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("body should be readable")
        .to_bytes();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).expect("body should be json")
    };

    (status, location, json)
}

#[tokio::test]
async fn test_health() {
    let app = setup_app().await;
    let (status, _, _) = send(&app, "GET", "/health", None).await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn test_course_lifecycle_over_http() {
    let app = setup_app().await;

    let (status, location, body) = send(
        &app,
        "POST",
        "/courses",
        Some(json!({ "name": "Algorithms", "credits": 4 })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(location.as_deref(), Some("/courses/1"));
    assert_eq!(
        body,
        json!({ "id": 1, "name": "Algorithms", "description": null, "instructor": null, "credits": 4 })
    );

    let (status, _, body) = send(&app, "GET", "/courses", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().map(Vec::len), Some(1));

    let (status, _, body) = send(
        &app,
        "PUT",
        "/courses/1",
        Some(json!({ "id": 1, "name": "Algorithms II", "instructor": "Prof. Tarjan", "credits": 4 })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], "Algorithms II");

    let (status, _, body) = send(&app, "GET", "/courses/1", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["instructor"], "Prof. Tarjan");

    let (status, _, _) = send(&app, "DELETE", "/courses/1", None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, _, _) = send(&app, "GET", "/courses/1", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_update_missing_course_returns_404() {
    let app = setup_app().await;

    let (status, _, body) = send(
        &app,
        "PUT",
        "/courses/9",
        Some(json!({ "id": 9, "name": "Ghost", "credits": 1 })),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Course 9 not found");
}

#[tokio::test]
async fn test_delete_missing_course_returns_204() {
    let app = setup_app().await;
    let (status, _, _) = send(&app, "DELETE", "/courses/9", None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
}

#[tokio::test]
async fn test_invalid_create_is_rejected_before_storage() {
    let app = setup_app().await;

    let (status, _, body) = send(
        &app,
        "POST",
        "/courses",
        Some(json!({ "name": "", "credits": -1 })),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    let fields: Vec<&str> = body["fields"]
        .as_array()
        .expect("fields should be listed")
        .iter()
        .filter_map(|f| f["field"].as_str())
        .collect();
    assert_eq!(fields, vec!["name", "credits"]);

    let (_, _, body) = send(&app, "GET", "/courses", None).await;
    assert_eq!(body, json!([]));
}

#[tokio::test]
async fn test_update_with_mismatched_id_is_bad_request() {
    let app = setup_app().await;
    send(
        &app,
        "POST",
        "/courses",
        Some(json!({ "name": "Algorithms", "credits": 4 })),
    )
    .await;

    let (status, _, _) = send(
        &app,
        "PUT",
        "/courses/1",
        Some(json!({ "id": 2, "name": "Algorithms", "credits": 4 })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_create_with_missing_field_reports_json_fields() {
    let app = setup_app().await;

    let (status, _, body) = send(
        &app,
        "POST",
        "/courses",
        Some(json!({ "name": "Algorithms" })),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);

    let fields = body["fields"].as_array().expect("fields should be listed");
    assert_eq!(fields.len(), 1);
    assert_eq!(fields[0]["field"], "body");
    let message = fields[0]["message"].as_str().expect("message should be a string");
    assert!(message.contains("credits"), "unexpected message: {message}");
}

#[tokio::test]
async fn test_update_with_wrong_type_reports_json_fields() {
    let app = setup_app().await;

    let (status, _, body) = send(
        &app,
        "PUT",
        "/courses/1",
        Some(json!({ "id": 1, "name": "Algorithms", "credits": "four" })),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(body["fields"].is_array());
}

#[tokio::test]
async fn test_malformed_json_is_bad_request_with_json_body() {
    let app = setup_app().await;

    let (status, _, body) = send_raw(
        &app,
        "POST",
        "/courses",
        Some("{\"name\": ".to_string()),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "400 Bad Request");
}

/// Creates succeed, but the new row is gone before it can be read back.
struct DeletedAfterCreate;

#[async_trait]
impl CourseService for DeletedAfterCreate {
    async fn get_all(&self) -> Result<Vec<CourseView>, AppError> {
        Ok(Vec::new())
    }

    async fn get_by_id(&self, _id: CourseId) -> Result<Option<CourseView>, AppError> {
        Ok(None)
    }

    async fn create(&self, _request: CourseCreateRequest) -> Result<CourseId, AppError> {
        Ok(7)
    }

    async fn update(&self, view: CourseView) -> Result<CourseView, AppError> {
        Err(AppError::CourseNotFound(view.id))
    }

    async fn delete(&self, _id: CourseId) -> Result<bool, AppError> {
        Ok(false)
    }
}

#[tokio::test]
async fn test_create_reports_created_when_row_vanishes() {
    let pool = db::connect("sqlite::memory:", 1)
        .await
        .expect("Failed to create database");
    let state = AppState {
        db: pool,
        courses: Arc::new(DeletedAfterCreate),
    };
    let app = router(state);

    let (status, location, body) = send(
        &app,
        "POST",
        "/courses",
        Some(json!({ "name": "Algorithms", "credits": 4 })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(location.as_deref(), Some("/courses/7"));
    assert_eq!(body, Value::Null);
}
