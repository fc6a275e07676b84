use async_trait::async_trait;
use sqlx::SqlitePool;

use crate::models::{Course, CourseId, NewCourse};

/// Whole-row access to the `courses` table.
///
/// Each write is a single autocommitted statement; `update` and `remove`
/// report how many rows they touched.
#[async_trait]
pub trait CourseStore: Send + Sync {
    async fn list(&self) -> Result<Vec<Course>, sqlx::Error>;
    async fn find_by_id(&self, id: CourseId) -> Result<Option<Course>, sqlx::Error>;
    async fn add(&self, course: NewCourse) -> Result<Course, sqlx::Error>;
    async fn update(&self, course: &Course) -> Result<u64, sqlx::Error>;
    async fn remove(&self, id: CourseId) -> Result<u64, sqlx::Error>;
}

#[derive(Clone)]
pub struct SqliteCourseStore {
    db: SqlitePool,
}

impl SqliteCourseStore {
    pub fn new(db: SqlitePool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl CourseStore for SqliteCourseStore {
    async fn list(&self) -> Result<Vec<Course>, sqlx::Error> {
        sqlx::query_as::<_, Course>(
            "SELECT id, name, description, instructor, credits FROM courses ORDER BY id",
        )
        .fetch_all(&self.db)
        .await
    }

    async fn find_by_id(&self, id: CourseId) -> Result<Option<Course>, sqlx::Error> {
        sqlx::query_as::<_, Course>(
            "SELECT id, name, description, instructor, credits FROM courses WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&self.db)
        .await
    }

    async fn add(&self, course: NewCourse) -> Result<Course, sqlx::Error> {
        let id = sqlx::query(
            "INSERT INTO courses (name, description, instructor, credits) VALUES (?, ?, ?, ?)",
        )
        .bind(&course.name)
        .bind(&course.description)
        .bind(&course.instructor)
        .bind(course.credits)
        .execute(&self.db)
        .await?
        .last_insert_rowid();

        Ok(course.with_id(id))
    }

    async fn update(&self, course: &Course) -> Result<u64, sqlx::Error> {
        let affected = sqlx::query(
            "UPDATE courses SET name = ?, description = ?, instructor = ?, credits = ? WHERE id = ?",
        )
        .bind(&course.name)
        .bind(&course.description)
        .bind(&course.instructor)
        .bind(course.credits)
        .bind(course.id)
        .execute(&self.db)
        .await?
        .rows_affected();

        Ok(affected)
    }

    async fn remove(&self, id: CourseId) -> Result<u64, sqlx::Error> {
        let affected = sqlx::query("DELETE FROM courses WHERE id = ?")
            .bind(id)
            .execute(&self.db)
            .await?
            .rows_affected();

        Ok(affected)
    }
}
