//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to one resource.

pub mod courses;
pub mod fallback;
pub mod users;

pub use courses::{
    create_course_handler, delete_course_handler, get_course_handler, list_courses_handler,
    update_course_handler,
};
pub use fallback::not_found_handler;
pub use users::{create_user_handler, current_user_handler};
