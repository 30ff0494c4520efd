//! Repository trait for courses.

use crate::domain::entities::{Course, CourseChanges, CourseWithOwner, NewCourse};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for courses and their owner join.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgCourseRepository`] - PostgreSQL implementation
/// - [`crate::infrastructure::persistence::MemoryStore`] - In-process implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CourseRepository: Send + Sync {
    /// Creates a new course.
    ///
    /// The owner reference is checked by storage only.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if `user_id` is missing or names no user.
    /// Returns [`AppError::Internal`] on database errors.
    async fn create(&self, new_course: NewCourse) -> Result<Course, AppError>;

    /// Lists every course with its owner, ordered by id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn list_with_owner(&self) -> Result<Vec<CourseWithOwner>, AppError>;

    /// Finds one course with its owner.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_with_owner(&self, id: i64) -> Result<Option<CourseWithOwner>, AppError>;

    /// Finds one course without joining the owner.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_by_id(&self, id: i64) -> Result<Option<Course>, AppError>;

    /// Replaces the editable fields of a course. Optional fields given as
    /// `None` keep their stored value; `Some(None)` clears them.
    ///
    /// Returns `Ok(false)` if no course has this id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn update(&self, id: i64, changes: CourseChanges) -> Result<bool, AppError>;

    /// Deletes a course.
    ///
    /// Returns `Ok(false)` if no course has this id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn delete(&self, id: i64) -> Result<bool, AppError>;

    /// Counts all courses.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn count(&self) -> Result<i64, AppError>;
}
