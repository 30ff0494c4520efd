//! Course entity and its owner join.

use chrono::{DateTime, Utc};

use super::UserSummary;

/// A course as stored. `user_id` references the owning user.
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct Course {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub estimated_time: Option<String>,
    pub materials_needed: Option<String>,
    pub user_id: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A course joined with the public fields of its owner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CourseWithOwner {
    pub course: Course,
    pub owner: UserSummary,
}

/// Input data for creating a new course.
///
/// `user_id` is optional here so that a missing owner reaches storage and is
/// rejected by its NOT NULL constraint, like any other bad reference.
#[derive(Debug, Clone)]
pub struct NewCourse {
    pub title: String,
    pub description: String,
    pub estimated_time: Option<String>,
    pub materials_needed: Option<String>,
    pub user_id: Option<i64>,
}

/// Replacement values for the editable fields of a course.
///
/// The owner is not editable. For the optional fields, `None` keeps the
/// stored value, `Some(None)` clears it and `Some(Some(v))` replaces it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CourseChanges {
    pub title: String,
    pub description: String,
    pub estimated_time: Option<Option<String>>,
    pub materials_needed: Option<Option<String>>,
}
