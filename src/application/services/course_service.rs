//! Course listing, creation and owner-only mutation.

use std::sync::Arc;
use tracing::{info, warn};

use crate::domain::entities::{Course, CourseChanges, CourseWithOwner, NewCourse, User};
use crate::domain::repositories::CourseRepository;
use crate::error::AppError;

pub const COURSE_NOT_FOUND: &str = "Course does not exist";
pub const NOT_COURSE_OWNER: &str = "User does not own course";

/// Service for courses.
///
/// Reads are public. Updates and deletes require the acting user to be the
/// course owner; the owner itself never changes.
pub struct CourseService {
    repository: Arc<dyn CourseRepository>,
}

impl CourseService {
    pub fn new(repository: Arc<dyn CourseRepository>) -> Self {
        Self { repository }
    }

    /// Lists every course with its owner.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on repository errors.
    pub async fn list_courses(&self) -> Result<Vec<CourseWithOwner>, AppError> {
        self.repository.list_with_owner().await
    }

    /// Retrieves one course with its owner.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no course has this id.
    /// Returns [`AppError::Internal`] on repository errors.
    pub async fn get_course(&self, id: i64) -> Result<CourseWithOwner, AppError> {
        self.repository
            .find_with_owner(id)
            .await?
            .ok_or_else(|| AppError::not_found(COURSE_NOT_FOUND))
    }

    /// Creates a course owned by `new_course.user_id`.
    ///
    /// The owner comes from the payload, not from the authenticated caller.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the owner is missing or unknown.
    /// Returns [`AppError::Internal`] on repository errors.
    pub async fn create_course(&self, new_course: NewCourse) -> Result<Course, AppError> {
        let course = self.repository.create(new_course).await?;
        info!(course_id = course.id, owner_id = course.user_id, "Course created");
        Ok(course)
    }

    /// Replaces the editable fields of a course owned by `actor`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no course has this id.
    /// Returns [`AppError::Forbidden`] if `actor` is not the owner.
    /// Returns [`AppError::Internal`] on repository errors.
    pub async fn update_course(
        &self,
        id: i64,
        actor: &User,
        changes: CourseChanges,
    ) -> Result<(), AppError> {
        self.owned_course(id, actor).await?;

        if !self.repository.update(id, changes).await? {
            return Err(AppError::not_found(COURSE_NOT_FOUND));
        }

        info!(course_id = id, user_id = actor.id, "Course updated");
        Ok(())
    }

    /// Deletes a course owned by `actor`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no course has this id.
    /// Returns [`AppError::Forbidden`] if `actor` is not the owner.
    /// Returns [`AppError::Internal`] on repository errors.
    pub async fn delete_course(&self, id: i64, actor: &User) -> Result<(), AppError> {
        self.owned_course(id, actor).await?;

        if !self.repository.delete(id).await? {
            return Err(AppError::not_found(COURSE_NOT_FOUND));
        }

        info!(course_id = id, user_id = actor.id, "Course deleted");
        Ok(())
    }

    async fn owned_course(&self, id: i64, actor: &User) -> Result<Course, AppError> {
        let course = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found(COURSE_NOT_FOUND))?;

        if !actor.owns(&course) {
            warn!(
                course_id = id,
                owner_id = course.user_id,
                user_id = actor.id,
                "Rejected change by non-owner"
            );
            return Err(AppError::forbidden(NOT_COURSE_OWNER));
        }

        Ok(course)
    }
}
