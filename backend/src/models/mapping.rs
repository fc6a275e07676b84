//! Field copies between the request, view and entity shapes of a course.

use super::course::{Course, CourseCreateRequest, CourseId, CourseView, NewCourse};

impl From<Course> for CourseView {
    fn from(course: Course) -> Self {
        Self {
            id: course.id,
            name: course.name,
            description: course.description,
            instructor: course.instructor,
            credits: course.credits,
        }
    }
}

impl From<CourseView> for Course {
    fn from(view: CourseView) -> Self {
        Self {
            id: view.id,
            name: view.name,
            description: view.description,
            instructor: view.instructor,
            credits: view.credits,
        }
    }
}

impl From<CourseCreateRequest> for NewCourse {
    fn from(req: CourseCreateRequest) -> Self {
        Self {
            name: req.name,
            description: req.description,
            instructor: req.instructor,
            credits: req.credits,
        }
    }
}

impl NewCourse {
    pub fn with_id(self, id: CourseId) -> Course {
        Course {
            id,
            name: self.name,
            description: self.description,
            instructor: self.instructor,
            credits: self.credits,
        }
    }
}
