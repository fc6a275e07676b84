pub mod course;
pub mod mapping;

pub use course::{Course, CourseCreateRequest, CourseId, CourseView, NewCourse};
