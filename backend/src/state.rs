use std::sync::Arc;

use sqlx::SqlitePool;

use crate::db::SqliteCourseStore;
use crate::services::{CourseService, CoursesService};

#[derive(Clone)]
pub struct AppState {
    pub db: SqlitePool,
    pub courses: Arc<dyn CourseService>,
}

impl AppState {
    /// Wires the SQLite-backed course service onto `db`.
    pub fn new(db: SqlitePool) -> Self {
        let store = Arc::new(SqliteCourseStore::new(db.clone()));
        Self {
            db,
            courses: Arc::new(CoursesService::new(store)),
        }
    }
}
