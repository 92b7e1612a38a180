//! Main authentication service implementation

use std::sync::Arc;

use crate::domain::entities::user::User;
use crate::domain::value_objects::auth_response::AuthResponse;
use crate::domain::value_objects::identity::Identity;
use crate::errors::{AuthError, DomainError, DomainResult, ValidationError};
use crate::repositories::UserRepository;
use crate::services::token::TokenService;

use super::config::AuthServiceConfig;

/// Authentication service for registration and login
pub struct AuthService<U>
where
    U: UserRepository,
{
    /// User repository for persistence
    user_repository: Arc<U>,
    /// Token service for credential issuance
    token_service: Arc<TokenService>,
    /// Service configuration
    config: AuthServiceConfig,
    /// Hash compared against on unknown-email logins, so a miss costs the
    /// same bcrypt work as a real credential check
    unknown_user_hash: String,
}

impl<U> AuthService<U>
where
    U: UserRepository,
{
    /// Create a new authentication service
    pub fn new(
        user_repository: Arc<U>,
        token_service: Arc<TokenService>,
        config: AuthServiceConfig,
    ) -> Self {
        let unknown_user_hash =
            bcrypt::hash("unknown-user-placeholder", config.bcrypt_cost).unwrap_or_default();

        Self {
            user_repository,
            token_service,
            config,
            unknown_user_hash,
        }
    }

    /// Register a new user and issue a token for them.
    ///
    /// # Returns
    ///
    /// * `Ok(AuthResponse)` - Token plus the registered identity
    /// * `Err(DomainError)` - Duplicate email, weak password, or store error
    pub async fn register(
        &self,
        email: &str,
        name: &str,
        password: &str,
    ) -> DomainResult<AuthResponse> {
        if password.len() < self.config.min_password_length {
            return Err(ValidationError::InvalidFormat {
                field: "password".to_string(),
            }
            .into());
        }

        if self.user_repository.exists_by_email(email).await? {
            return Err(AuthError::UserAlreadyExists.into());
        }

        let password_hash = bcrypt::hash(password, self.config.bcrypt_cost)
            .map_err(|_| AuthError::PasswordHashFailure)?;

        let user = User::new(email.to_string(), name.to_string(), password_hash);
        let created = self.user_repository.create(user).await?;

        tracing::info!(user_id = %created.id, "user registered");

        self.issue_for(&created)
    }

    /// Authenticate by email and password and issue a token.
    ///
    /// Unknown email and wrong password return the same
    /// [`AuthError::AuthenticationFailed`], so the endpoint cannot be used
    /// to probe which addresses are registered.
    pub async fn login(&self, email: &str, password: &str) -> DomainResult<AuthResponse> {
        let mut user = match self.user_repository.find_by_email(email).await? {
            Some(user) => user,
            None => {
                // Burn the same hashing cost as a real comparison so the
                // miss is not distinguishable by response latency either.
                let _ = bcrypt::verify(password, &self.unknown_user_hash);
                tracing::debug!("login rejected: credential check failed");
                return Err(AuthError::AuthenticationFailed.into());
            }
        };

        let password_matches =
            bcrypt::verify(password, &user.password_hash).unwrap_or(false);
        if !password_matches {
            tracing::debug!("login rejected: credential check failed");
            return Err(AuthError::AuthenticationFailed.into());
        }

        user.update_last_login();
        let user = self.user_repository.update(user).await?;

        tracing::info!(user_id = %user.id, "user logged in");

        self.issue_for(&user)
    }

    fn issue_for(&self, user: &User) -> DomainResult<AuthResponse> {
        let identity = Identity::from(user);
        let token = self.token_service.issue(&identity)?;
        Ok(AuthResponse::new(token, identity))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repositories::InMemoryUserRepository;
    use crate::services::token::TokenConfig;

    fn create_test_service() -> AuthService<InMemoryUserRepository> {
        let repository = Arc::new(InMemoryUserRepository::new());
        let token_service = Arc::new(TokenService::new(TokenConfig::new("test-secret")));
        AuthService::new(repository, token_service, AuthServiceConfig::fast())
    }

    #[tokio::test]
    async fn test_register_issues_verifiable_token() {
        let service = create_test_service();

        let response = service
            .register("a@b.com", "Alice", "password123")
            .await
            .unwrap();

        assert!(!response.token.is_empty());
        assert_eq!(response.identity.email, "a@b.com");
        assert_eq!(response.identity.name, "Alice");

        // The issued token round-trips through the token service.
        let token_service = TokenService::new(TokenConfig::new("test-secret"));
        let verified = token_service.verify(&response.token).unwrap();
        assert_eq!(verified, response.identity);
    }

    #[tokio::test]
    async fn test_register_duplicate_email() {
        let service = create_test_service();
        service
            .register("a@b.com", "Alice", "password123")
            .await
            .unwrap();

        let result = service.register("a@b.com", "Alan", "password456").await;
        assert!(matches!(
            result.unwrap_err(),
            DomainError::Auth(AuthError::UserAlreadyExists)
        ));
    }

    #[tokio::test]
    async fn test_register_short_password() {
        let service = create_test_service();
        let result = service.register("a@b.com", "Alice", "short").await;

        assert!(matches!(
            result.unwrap_err(),
            DomainError::ValidationErr(ValidationError::InvalidFormat { .. })
        ));
    }

    #[tokio::test]
    async fn test_login_success() {
        let service = create_test_service();
        let registered = service
            .register("a@b.com", "Alice", "password123")
            .await
            .unwrap();

        let response = service.login("a@b.com", "password123").await.unwrap();
        assert_eq!(response.identity, registered.identity);
    }

    #[tokio::test]
    async fn test_login_wrong_password() {
        let service = create_test_service();
        service
            .register("a@b.com", "Alice", "password123")
            .await
            .unwrap();

        let result = service.login("a@b.com", "wrong-password").await;
        assert!(matches!(
            result.unwrap_err(),
            DomainError::Auth(AuthError::AuthenticationFailed)
        ));
    }

    #[tokio::test]
    async fn test_login_unknown_email_same_error() {
        let service = create_test_service();

        // Unknown email must be indistinguishable from a wrong password.
        let result = service.login("nobody@b.com", "password123").await;
        assert!(matches!(
            result.unwrap_err(),
            DomainError::Auth(AuthError::AuthenticationFailed)
        ));
    }

    #[tokio::test]
    async fn test_unknown_email_still_runs_hash_comparison() {
        let service = create_test_service();

        // The placeholder is a real bcrypt hash at the configured cost, so
        // the miss path performs a full verification round instead of
        // returning early.
        assert!(bcrypt::verify("anything", &service.unknown_user_hash).is_ok());

        let result = service.login("nobody@b.com", "password123").await;
        assert!(matches!(
            result.unwrap_err(),
            DomainError::Auth(AuthError::AuthenticationFailed)
        ));
    }

    #[tokio::test]
    async fn test_login_updates_last_login() {
        let repository = Arc::new(InMemoryUserRepository::new());
        let token_service = Arc::new(TokenService::new(TokenConfig::new("test-secret")));
        let service = AuthService::new(
            Arc::clone(&repository),
            token_service,
            AuthServiceConfig::fast(),
        );

        service
            .register("a@b.com", "Alice", "password123")
            .await
            .unwrap();
        service.login("a@b.com", "password123").await.unwrap();

        let user = repository.find_by_email("a@b.com").await.unwrap().unwrap();
        assert!(user.last_login_at.is_some());
    }
}
