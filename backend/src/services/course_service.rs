use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, info, warn};

use crate::db::CourseStore;
use crate::error::AppError;
use crate::models::{Course, CourseCreateRequest, CourseId, CourseView, NewCourse};

/// CRUD operations on courses as seen by the HTTP layer.
///
/// Input is assumed to be validated by the caller.
#[async_trait]
pub trait CourseService: Send + Sync {
    /// Every stored course. Order is whatever the store returns.
    async fn get_all(&self) -> Result<Vec<CourseView>, AppError>;

    /// `None` when no course has this id.
    async fn get_by_id(&self, id: CourseId) -> Result<Option<CourseView>, AppError>;

    /// Persists a new course and returns its assigned id.
    async fn create(&self, request: CourseCreateRequest) -> Result<CourseId, AppError>;

    /// Replaces every field of an existing course.
    ///
    /// Fails with [`AppError::CourseNotFound`] if the id does not exist.
    async fn update(&self, view: CourseView) -> Result<CourseView, AppError>;

    /// Removes a course. Returns `false`, not an error, when nothing matched.
    async fn delete(&self, id: CourseId) -> Result<bool, AppError>;
}

pub struct CoursesService {
    store: Arc<dyn CourseStore>,
}

impl CoursesService {
    pub fn new(store: Arc<dyn CourseStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl CourseService for CoursesService {
    async fn get_all(&self) -> Result<Vec<CourseView>, AppError> {
        let courses = self.store.list().await?;
        debug!("Loaded {} courses", courses.len());
        Ok(courses.into_iter().map(CourseView::from).collect())
    }

    async fn get_by_id(&self, id: CourseId) -> Result<Option<CourseView>, AppError> {
        let course = self.store.find_by_id(id).await?;
        debug!(id, found = course.is_some(), "Looked up course");
        Ok(course.map(CourseView::from))
    }

    async fn create(&self, request: CourseCreateRequest) -> Result<CourseId, AppError> {
        let course = self.store.add(NewCourse::from(request)).await?;
        info!(id = course.id, name = %course.name, "Created course");
        Ok(course.id)
    }

    async fn update(&self, view: CourseView) -> Result<CourseView, AppError> {
        let id = view.id;
        if self.store.find_by_id(id).await?.is_none() {
            warn!(id, "Refusing to update missing course");
            return Err(AppError::CourseNotFound(id));
        }

        let course = Course::from(view);
        // 確認後に削除された場合
        if self.store.update(&course).await? == 0 {
            warn!(id, "Course disappeared before update");
            return Err(AppError::CourseNotFound(id));
        }

        info!(id, "Updated course");
        Ok(CourseView::from(course))
    }

    async fn delete(&self, id: CourseId) -> Result<bool, AppError> {
        let removed = self.store.remove(id).await? > 0;
        if removed {
            info!(id, "Deleted course");
        } else {
            debug!(id, "Delete of missing course ignored");
        }
        Ok(removed)
    }
}
