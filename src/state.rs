//! Shared application state injected into every handler.

use std::sync::Arc;

use crate::application::services::{AuthService, CourseService, UserService};
use crate::domain::repositories::{CourseRepository, UserRepository};
use crate::infrastructure::persistence::MemoryStore;

#[derive(Clone)]
pub struct AppState {
    pub auth_service: Arc<AuthService>,
    pub user_service: Arc<UserService>,
    pub course_service: Arc<CourseService>,
}

impl AppState {
    /// Wires the services over the given repositories.
    ///
    /// `bcrypt_cost` is the work factor for newly hashed passwords.
    pub fn new(
        users: Arc<dyn UserRepository>,
        courses: Arc<dyn CourseRepository>,
        bcrypt_cost: u32,
    ) -> Self {
        Self {
            auth_service: Arc::new(AuthService::new(users.clone())),
            user_service: Arc::new(UserService::new(users, bcrypt_cost)),
            course_service: Arc::new(CourseService::new(courses)),
        }
    }

    /// State backed by a fresh [`MemoryStore`] for both tables.
    pub fn in_memory(bcrypt_cost: u32) -> Self {
        let store = Arc::new(MemoryStore::new());
        Self::new(store.clone(), store, bcrypt_cost)
    }
}
