use crate::error::{AppError, FieldError};
use crate::models::{CourseCreateRequest, CourseView};

pub const NAME_MAX_LEN: usize = 200;
pub const DESCRIPTION_MAX_LEN: usize = 2000;
pub const INSTRUCTOR_MAX_LEN: usize = 200;
pub const CREDITS_RANGE: std::ops::RangeInclusive<i32> = 0..=30;

/// Shape checks run on submitted forms before they reach the service.
pub trait Validate {
    fn validate(&self) -> Result<(), AppError>;
}

impl Validate for CourseCreateRequest {
    fn validate(&self) -> Result<(), AppError> {
        into_result(collect_field_errors(
            &self.name,
            self.description.as_deref(),
            self.instructor.as_deref(),
            self.credits,
        ))
    }
}

impl Validate for CourseView {
    fn validate(&self) -> Result<(), AppError> {
        let mut errors = collect_field_errors(
            &self.name,
            self.description.as_deref(),
            self.instructor.as_deref(),
            self.credits,
        );
        if self.id <= 0 {
            errors.insert(0, FieldError::new("id", "must be a positive integer"));
        }
        into_result(errors)
    }
}

fn collect_field_errors(
    name: &str,
    description: Option<&str>,
    instructor: Option<&str>,
    credits: i32,
) -> Vec<FieldError> {
    let mut errors = Vec::new();

    if name.trim().is_empty() {
        errors.push(FieldError::new("name", "must not be blank"));
    } else if name.chars().count() > NAME_MAX_LEN {
        errors.push(FieldError::new(
            "name",
            format!("must be at most {} characters", NAME_MAX_LEN),
        ));
    }

    if description.is_some_and(|d| d.chars().count() > DESCRIPTION_MAX_LEN) {
        errors.push(FieldError::new(
            "description",
            format!("must be at most {} characters", DESCRIPTION_MAX_LEN),
        ));
    }

    if instructor.is_some_and(|i| i.chars().count() > INSTRUCTOR_MAX_LEN) {
        errors.push(FieldError::new(
            "instructor",
            format!("must be at most {} characters", INSTRUCTOR_MAX_LEN),
        ));
    }

    if !CREDITS_RANGE.contains(&credits) {
        errors.push(FieldError::new(
            "credits",
            format!(
                "must be between {} and {}",
                CREDITS_RANGE.start(),
                CREDITS_RANGE.end()
            ),
        ));
    }

    errors
}

fn into_result(errors: Vec<FieldError>) -> Result<(), AppError> {
    if errors.is_empty() {
        Ok(())
    } else {
        Err(AppError::Validation(errors))
    }
}
