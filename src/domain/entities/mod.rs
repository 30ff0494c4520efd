//! Core domain entities.
//!
//! - [`User`] - An account; authenticates requests and owns courses
//! - [`Course`] - A course, owned by exactly one user
//!
//! Creation inputs (`NewUser`, `NewCourse`) and the update set
//! (`CourseChanges`) are separate structs from the stored records.

pub mod course;
pub mod user;

pub use course::{Course, CourseChanges, CourseWithOwner, NewCourse};
pub use user::{NewUser, User, UserSummary};
