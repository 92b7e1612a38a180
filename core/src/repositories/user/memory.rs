//! In-memory implementation of UserRepository.
//!
//! Backs the binary when no external user store is wired up, and doubles as
//! the mock for service tests.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::entities::user::User;
use crate::errors::{AuthError, DomainError};

use super::trait_::UserRepository;

/// In-memory user repository
pub struct InMemoryUserRepository {
    users: Arc<RwLock<HashMap<Uuid, User>>>,
}

impl InMemoryUserRepository {
    /// Create a new empty repository
    pub fn new() -> Self {
        Self {
            users: Arc::new(RwLock::new(HashMap::new())),
        }
    }
}

impl Default for InMemoryUserRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError> {
        let users = self.users.read().await;
        Ok(users.values().find(|u| u.email == email).cloned())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, DomainError> {
        let users = self.users.read().await;
        Ok(users.get(&id).cloned())
    }

    async fn create(&self, user: User) -> Result<User, DomainError> {
        let mut users = self.users.write().await;

        if users.values().any(|u| u.email == user.email) {
            return Err(AuthError::UserAlreadyExists.into());
        }

        users.insert(user.id, user.clone());
        Ok(user)
    }

    async fn update(&self, user: User) -> Result<User, DomainError> {
        let mut users = self.users.write().await;

        if !users.contains_key(&user.id) {
            return Err(DomainError::NotFound {
                resource: "User".to_string(),
            });
        }

        users.insert(user.id, user.clone());
        Ok(user)
    }

    async fn exists_by_email(&self, email: &str) -> Result<bool, DomainError> {
        let users = self.users.read().await;
        Ok(users.values().any(|u| u.email == email))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_user(email: &str) -> User {
        User::new(email.to_string(), "Test".to_string(), "hash".to_string())
    }

    #[tokio::test]
    async fn test_create_and_find() {
        let repo = InMemoryUserRepository::new();
        let user = repo.create(sample_user("a@b.com")).await.unwrap();

        let by_email = repo.find_by_email("a@b.com").await.unwrap();
        assert_eq!(by_email.as_ref().map(|u| u.id), Some(user.id));

        let by_id = repo.find_by_id(user.id).await.unwrap();
        assert!(by_id.is_some());

        assert!(repo.exists_by_email("a@b.com").await.unwrap());
        assert!(!repo.exists_by_email("x@y.com").await.unwrap());
    }

    #[tokio::test]
    async fn test_duplicate_email_rejected() {
        let repo = InMemoryUserRepository::new();
        repo.create(sample_user("a@b.com")).await.unwrap();

        let result = repo.create(sample_user("a@b.com")).await;
        assert!(matches!(
            result.unwrap_err(),
            DomainError::Auth(AuthError::UserAlreadyExists)
        ));
    }

    #[tokio::test]
    async fn test_update_missing_user() {
        let repo = InMemoryUserRepository::new();
        let result = repo.update(sample_user("ghost@b.com")).await;

        assert!(matches!(
            result.unwrap_err(),
            DomainError::NotFound { .. }
        ));
    }

    #[tokio::test]
    async fn test_update_persists_changes() {
        let repo = InMemoryUserRepository::new();
        let mut user = repo.create(sample_user("a@b.com")).await.unwrap();

        user.update_last_login();
        repo.update(user.clone()).await.unwrap();

        let stored = repo.find_by_id(user.id).await.unwrap().unwrap();
        assert!(stored.last_login_at.is_some());
    }
}
