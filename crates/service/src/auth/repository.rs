use async_trait::async_trait;

use super::domain::{AuthUser, Credentials};
use super::errors::AuthError;

/// Repository abstraction for auth-related persistence.
#[async_trait]
pub trait AuthRepository: Send + Sync {
    async fn find_user_by_username(&self, username: &str) -> Result<Option<AuthUser>, AuthError>;
    async fn find_user_by_id(&self, id: i32) -> Result<Option<AuthUser>, AuthError>;
    async fn get_credentials(&self, user_id: i32) -> Result<Option<Credentials>, AuthError>;
}

/// Simple in-memory mock repository for tests and doc examples
pub mod mock {
    use super::*;
    use models::user::Role;
    use std::collections::HashMap;
    use std::sync::Mutex;

    #[derive(Default)]
    pub struct MockAuthRepository {
        users: Mutex<HashMap<String, (AuthUser, String)>>, // key: username
    }

    impl MockAuthRepository {
        fn lock(&self) -> Result<std::sync::MutexGuard<'_, HashMap<String, (AuthUser, String)>>, AuthError> {
            self.users.lock().map_err(|e| AuthError::Repository(e.to_string()))
        }

        /// Seed a user with an already hashed password. Replaces any user of the same name.
        pub fn insert_user(&self, username: &str, password_hash: String, role: Role) -> Result<AuthUser, AuthError> {
            let mut users = self.lock()?;
            let id = users.values().map(|(u, _)| u.id).max().unwrap_or(0) + 1;
            let user = AuthUser { id, username: username.to_string(), role, created_at: chrono::Utc::now().into() };
            users.insert(username.to_string(), (user.clone(), password_hash));
            Ok(user)
        }

        /// Drop a user, simulating deletion behind a live session.
        pub fn remove_user(&self, username: &str) {
            if let Ok(mut users) = self.users.lock() {
                users.remove(username);
            }
        }
    }

    #[async_trait]
    impl AuthRepository for MockAuthRepository {
        async fn find_user_by_username(&self, username: &str) -> Result<Option<AuthUser>, AuthError> {
            Ok(self.lock()?.get(username).map(|(u, _)| u.clone()))
        }

        async fn find_user_by_id(&self, id: i32) -> Result<Option<AuthUser>, AuthError> {
            Ok(self.lock()?.values().find(|(u, _)| u.id == id).map(|(u, _)| u.clone()))
        }

        async fn get_credentials(&self, user_id: i32) -> Result<Option<Credentials>, AuthError> {
            Ok(self
                .lock()?
                .values()
                .find(|(u, _)| u.id == user_id)
                .map(|(u, h)| Credentials { user_id: u.id, password_hash: h.clone() }))
        }
    }
}
