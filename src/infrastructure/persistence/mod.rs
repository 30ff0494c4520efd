//! Repository implementations.
//!
//! - [`PgUserRepository`] - User accounts in PostgreSQL
//! - [`PgCourseRepository`] - Courses and the owner join in PostgreSQL
//! - [`MemoryStore`] - Both tables in process memory, same constraints

pub mod memory_store;
pub mod pg_course_repository;
pub mod pg_user_repository;

pub use memory_store::MemoryStore;
pub use pg_course_repository::PgCourseRepository;
pub use pg_user_repository::PgUserRepository;
