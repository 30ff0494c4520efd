//! PostgreSQL implementation of course repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{Course, CourseChanges, CourseWithOwner, NewCourse, UserSummary};
use crate::domain::repositories::CourseRepository;
use crate::error::AppError;

/// PostgreSQL repository for courses.
///
/// The owner join is an explicit `JOIN users`; the owner's password and
/// timestamps are never selected.
pub struct PgCourseRepository {
    pool: Arc<PgPool>,
}

impl PgCourseRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

/// Flat row produced by the course/owner join.
#[derive(sqlx::FromRow)]
struct CourseOwnerRow {
    id: i64,
    title: String,
    description: String,
    estimated_time: Option<String>,
    materials_needed: Option<String>,
    user_id: i64,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    owner_first_name: String,
    owner_last_name: String,
    owner_email_address: String,
}

impl From<CourseOwnerRow> for CourseWithOwner {
    fn from(row: CourseOwnerRow) -> Self {
        CourseWithOwner {
            owner: UserSummary {
                id: row.user_id,
                first_name: row.owner_first_name,
                last_name: row.owner_last_name,
                email_address: row.owner_email_address,
            },
            course: Course {
                id: row.id,
                title: row.title,
                description: row.description,
                estimated_time: row.estimated_time,
                materials_needed: row.materials_needed,
                user_id: row.user_id,
                created_at: row.created_at,
                updated_at: row.updated_at,
            },
        }
    }
}

const SELECT_WITH_OWNER: &str = r#"
    SELECT c.id, c.title, c.description, c.estimated_time, c.materials_needed,
           c.user_id, c.created_at, c.updated_at,
           u.first_name AS owner_first_name,
           u.last_name AS owner_last_name,
           u.email_address AS owner_email_address
    FROM courses c
    JOIN users u ON u.id = c.user_id
"#;

#[async_trait]
impl CourseRepository for PgCourseRepository {
    async fn create(&self, new_course: NewCourse) -> Result<Course, AppError> {
        let course = sqlx::query_as::<_, Course>(
            r#"
            INSERT INTO courses (title, description, estimated_time, materials_needed, user_id)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, title, description, estimated_time, materials_needed,
                      user_id, created_at, updated_at
            "#,
        )
        .bind(new_course.title)
        .bind(new_course.description)
        .bind(new_course.estimated_time)
        .bind(new_course.materials_needed)
        .bind(new_course.user_id)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(course)
    }

    async fn list_with_owner(&self) -> Result<Vec<CourseWithOwner>, AppError> {
        let rows = sqlx::query_as::<_, CourseOwnerRow>(&format!("{SELECT_WITH_OWNER} ORDER BY c.id"))
            .fetch_all(self.pool.as_ref())
            .await?;

        Ok(rows.into_iter().map(CourseWithOwner::from).collect())
    }

    async fn find_with_owner(&self, id: i64) -> Result<Option<CourseWithOwner>, AppError> {
        let row =
            sqlx::query_as::<_, CourseOwnerRow>(&format!("{SELECT_WITH_OWNER} WHERE c.id = $1"))
                .bind(id)
                .fetch_optional(self.pool.as_ref())
                .await?;

        Ok(row.map(CourseWithOwner::from))
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Course>, AppError> {
        let course = sqlx::query_as::<_, Course>(
            r#"
            SELECT id, title, description, estimated_time, materials_needed,
                   user_id, created_at, updated_at
            FROM courses
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(course)
    }

    async fn update(&self, id: i64, changes: CourseChanges) -> Result<bool, AppError> {
        let result = sqlx::query(
            r#"
            UPDATE courses
            SET title = $2,
                description = $3,
                estimated_time = CASE WHEN $4 THEN $5 ELSE estimated_time END,
                materials_needed = CASE WHEN $6 THEN $7 ELSE materials_needed END,
                updated_at = NOW()
            WHERE id = $1
            "#,
        )
        .bind(id)
        .bind(changes.title)
        .bind(changes.description)
        .bind(changes.estimated_time.is_some())
        .bind(changes.estimated_time.flatten())
        .bind(changes.materials_needed.is_some())
        .bind(changes.materials_needed.flatten())
        .execute(self.pool.as_ref())
        .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn delete(&self, id: i64) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM courses WHERE id = $1")
            .bind(id)
            .execute(self.pool.as_ref())
            .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn count(&self) -> Result<i64, AppError> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM courses")
            .fetch_one(self.pool.as_ref())
            .await?;

        Ok(count)
    }
}
