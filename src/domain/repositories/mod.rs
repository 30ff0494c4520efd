//! Repository trait definitions for the domain layer.
//!
//! Traits define the contract for data operations. Implementations live in
//! `crate::infrastructure::persistence`; mocks are generated with `mockall`
//! for unit tests.
//!
//! - [`UserRepository`] - User accounts
//! - [`CourseRepository`] - Courses and their owner join

pub mod course_repository;
pub mod user_repository;

pub use course_repository::CourseRepository;
pub use user_repository::UserRepository;

#[cfg(test)]
pub use course_repository::MockCourseRepository;
#[cfg(test)]
pub use user_repository::MockUserRepository;
