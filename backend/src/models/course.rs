use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Storage-assigned identity of a course. Never reused after deletion.
pub type CourseId = i64;

/// Persisted course row.
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct Course {
    pub id: CourseId,
    pub name: String,
    pub description: Option<String>,
    pub instructor: Option<String>,
    pub credits: i32,
}

/// Shape used to display a course and to submit an edit of it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CourseView {
    pub id: CourseId,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub instructor: Option<String>,
    pub credits: i32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CourseCreateRequest {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub instructor: Option<String>,
    pub credits: i32,
}

/// Insert payload handed to the store; the id comes back from SQLite.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCourse {
    pub name: String,
    pub description: Option<String>,
    pub instructor: Option<String>,
    pub credits: i32,
}
