//! In-process implementation of the user and course repositories.

use async_trait::async_trait;
use chrono::Utc;
use std::collections::BTreeMap;
use tokio::sync::RwLock;
use tracing::debug;

use crate::domain::entities::{Course, CourseChanges, CourseWithOwner, NewCourse, NewUser, User};
use crate::domain::repositories::{CourseRepository, UserRepository};
use crate::error::{AppError, EMAIL_TAKEN, INVALID_OWNER};

/// A store that keeps both tables in memory.
///
/// Enforces the same constraints as the PostgreSQL schema: unique email
/// addresses and a non-null owner that references an existing user. Ids are
/// assigned from per-table sequences starting at 1.
///
/// # Use Cases
///
/// - HTTP tests that exercise the full router without a database
/// - Embedding the API in another process for demos
#[derive(Default)]
pub struct MemoryStore {
    tables: RwLock<Tables>,
}

#[derive(Default)]
struct Tables {
    users: BTreeMap<i64, User>,
    courses: BTreeMap<i64, Course>,
    next_user_id: i64,
    next_course_id: i64,
}

impl Tables {
    fn join(&self, course: &Course) -> Result<CourseWithOwner, AppError> {
        let owner = self.users.get(&course.user_id).ok_or_else(|| {
            AppError::internal(format!(
                "course {} references missing user {}",
                course.id, course.user_id
            ))
        })?;

        Ok(CourseWithOwner {
            course: course.clone(),
            owner: owner.summary(),
        })
    }
}

impl MemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        debug!("Using in-memory store");
        Self::default()
    }
}

#[async_trait]
impl UserRepository for MemoryStore {
    async fn create(&self, new_user: NewUser) -> Result<User, AppError> {
        let mut tables = self.tables.write().await;

        if tables
            .users
            .values()
            .any(|u| u.email_address == new_user.email_address)
        {
            return Err(AppError::invalid(EMAIL_TAKEN));
        }

        tables.next_user_id += 1;
        let now = Utc::now();
        let user = User {
            id: tables.next_user_id,
            first_name: new_user.first_name,
            last_name: new_user.last_name,
            email_address: new_user.email_address,
            password: new_user.password_hash,
            created_at: now,
            updated_at: now,
        };
        tables.users.insert(user.id, user.clone());

        Ok(user)
    }

    async fn find_by_email(&self, email_address: &str) -> Result<Option<User>, AppError> {
        let tables = self.tables.read().await;
        Ok(tables
            .users
            .values()
            .find(|u| u.email_address == email_address)
            .cloned())
    }

    async fn list(&self) -> Result<Vec<User>, AppError> {
        Ok(self.tables.read().await.users.values().cloned().collect())
    }
}

#[async_trait]
impl CourseRepository for MemoryStore {
    async fn create(&self, new_course: NewCourse) -> Result<Course, AppError> {
        let mut tables = self.tables.write().await;

        let user_id = match new_course.user_id {
            Some(id) if tables.users.contains_key(&id) => id,
            _ => return Err(AppError::invalid(INVALID_OWNER)),
        };

        tables.next_course_id += 1;
        let now = Utc::now();
        let course = Course {
            id: tables.next_course_id,
            title: new_course.title,
            description: new_course.description,
            estimated_time: new_course.estimated_time,
            materials_needed: new_course.materials_needed,
            user_id,
            created_at: now,
            updated_at: now,
        };
        tables.courses.insert(course.id, course.clone());

        Ok(course)
    }

    async fn list_with_owner(&self) -> Result<Vec<CourseWithOwner>, AppError> {
        let tables = self.tables.read().await;
        tables.courses.values().map(|c| tables.join(c)).collect()
    }

    async fn find_with_owner(&self, id: i64) -> Result<Option<CourseWithOwner>, AppError> {
        let tables = self.tables.read().await;
        tables.courses.get(&id).map(|c| tables.join(c)).transpose()
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Course>, AppError> {
        Ok(self.tables.read().await.courses.get(&id).cloned())
    }

    async fn update(&self, id: i64, changes: CourseChanges) -> Result<bool, AppError> {
        let mut tables = self.tables.write().await;
        let Some(course) = tables.courses.get_mut(&id) else {
            return Ok(false);
        };

        course.title = changes.title;
        course.description = changes.description;
        if let Some(estimated_time) = changes.estimated_time {
            course.estimated_time = estimated_time;
        }
        if let Some(materials_needed) = changes.materials_needed {
            course.materials_needed = materials_needed;
        }
        course.updated_at = Utc::now();

        Ok(true)
    }

    async fn delete(&self, id: i64) -> Result<bool, AppError> {
        Ok(self.tables.write().await.courses.remove(&id).is_some())
    }

    async fn count(&self) -> Result<i64, AppError> {
        Ok(self.tables.read().await.courses.len() as i64)
    }
}
