pub mod validation;

use axum::Json;
use axum::extract::Path;
use axum::extract::rejection::JsonRejection;
use axum::http::header;
use axum::response::{IntoResponse, Response};
use axum::{Router, extract::State, http::StatusCode, routing::get};
use tower_http::trace::TraceLayer;

use crate::error::AppError;
use crate::models::*;
use crate::state::AppState;

use self::validation::Validate;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/courses", get(list_courses).post(create_course))
        .route(
            "/courses/{id}",
            get(get_course).put(update_course).delete(delete_course),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health(State(state): State<AppState>) -> Result<StatusCode, AppError> {
    sqlx::query("select 1").execute(&state.db).await?;
    Ok(StatusCode::OK)
}

async fn list_courses(State(state): State<AppState>) -> Result<Json<Vec<CourseView>>, AppError> {
    let courses = state.courses.get_all().await?;
    Ok(Json(courses))
}

async fn get_course(
    State(state): State<AppState>,
    Path(id): Path<CourseId>
) -> Result<Json<CourseView>, AppError> {
    let course = state
        .courses
        .get_by_id(id)
        .await?
        .ok_or(AppError::CourseNotFound(id))?;
    Ok(Json(course))
}

async fn create_course(
    State(state): State<AppState>,
    payload: Result<Json<CourseCreateRequest>, JsonRejection>
) -> Result<Response, AppError> {
    let Json(req) = payload?;
    req.validate()?;

    let id = state.courses.create(req).await?;
    let location = [(header::LOCATION, format!("/courses/{}", id))];

    // 作成直後に削除された場合は Location のみ返す
    let response = match state.courses.get_by_id(id).await? {
        Some(course) => (StatusCode::CREATED, location, Json(course)).into_response(),
        None => (StatusCode::CREATED, location).into_response(),
    };
    Ok(response)
}

async fn update_course(
    State(state): State<AppState>,
    Path(id): Path<CourseId>,
    payload: Result<Json<CourseView>, JsonRejection>
) -> Result<Json<CourseView>, AppError> {
    let Json(view) = payload?;
    if view.id != id {
        return Err(AppError::BadRequest(format!(
            "path id {} does not match body id {}",
            id, view.id
        )));
    }
    view.validate()?;

    let course = state.courses.update(view).await?;
    Ok(Json(course))
}

async fn delete_course(
    State(state): State<AppState>,
    Path(id): Path<CourseId>
) -> Result<StatusCode, AppError> {
    state.courses.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
