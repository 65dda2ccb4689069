//! Credential flow: signup and login with Argon2id hashing.

use std::sync::Arc;

use serde_json::json;

use crate::domain::entities::{NewUser, User};
use crate::domain::repositories::UserRepository;
use crate::error::AppError;
use crate::utils::password::{hash_password, verify_password};

/// Result of a signup attempt.
#[derive(Debug)]
pub enum SignupOutcome {
    /// The account was created and the caller may attach it to the session.
    Created(User),
    /// The username is already taken; no second row was created.
    UsernameTaken,
}

/// Result of a login attempt.
///
/// Unknown usernames and wrong passwords are deliberately indistinguishable.
#[derive(Debug)]
pub enum LoginOutcome {
    Authenticated(User),
    Rejected,
}

/// Service for the signup and login flows.
///
/// Passwords are hashed with Argon2id before storage and verified through
/// the primitive's own comparison routine. Both operations run on the
/// blocking thread pool so key derivation never stalls the request executor.
pub struct AuthService {
    users: Arc<dyn UserRepository>,
}

impl AuthService {
    pub fn new(users: Arc<dyn UserRepository>) -> Self {
        Self { users }
    }

    /// Looks up a user by username.
    ///
    /// Used by the link-submission flow to resolve the session identity to
    /// its row; a miss there is an invariant violation, not a user error.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn find_user(&self, username: &str) -> Result<Option<User>, AppError> {
        self.users.find_by_username(username).await
    }

    /// Creates an account unless the username is already taken.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if hashing or persistence fails.
    pub async fn signup(&self, username: &str, password: &str) -> Result<SignupOutcome, AppError> {
        if self.users.find_by_username(username).await?.is_some() {
            return Ok(SignupOutcome::UsernameTaken);
        }

        let plaintext = password.to_owned();
        let hashed = tokio::task::spawn_blocking(move || hash_password(&plaintext))
            .await
            .map_err(|e| {
                tracing::error!(error = %e, "password hashing task failed");
                AppError::internal("Password hashing failed", json!({}))
            })?
            .map_err(|e| {
                tracing::error!(error = %e, "password hashing failed");
                AppError::internal("Password hashing failed", json!({}))
            })?;

        let user = self
            .users
            .create(NewUser {
                username: username.to_owned(),
                password: hashed,
            })
            .await?;

        Ok(SignupOutcome::Created(user))
    }

    /// Verifies credentials against the stored hash.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors or a malformed
    /// stored hash.
    pub async fn login(&self, username: &str, password: &str) -> Result<LoginOutcome, AppError> {
        let Some(user) = self.users.find_by_username(username).await? else {
            return Ok(LoginOutcome::Rejected);
        };

        let plaintext = password.to_owned();
        let stored = user.password.clone();
        let matches = tokio::task::spawn_blocking(move || verify_password(&plaintext, &stored))
            .await
            .map_err(|e| {
                tracing::error!(error = %e, "password verification task failed");
                AppError::internal("Password verification failed", json!({}))
            })?
            .map_err(|e| {
                tracing::error!(error = %e, "password verification failed");
                AppError::internal("Password verification failed", json!({}))
            })?;

        if matches {
            Ok(LoginOutcome::Authenticated(user))
        } else {
            Ok(LoginOutcome::Rejected)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::MockUserRepository;
    use chrono::Utc;

    fn stored_user(username: &str, password: &str) -> User {
        User {
            id: 1,
            username: username.to_string(),
            password: hash_password(password).unwrap(),
            created_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn test_signup_creates_user_with_hashed_password() {
        let mut mock_repo = MockUserRepository::new();

        mock_repo
            .expect_find_by_username()
            .times(1)
            .returning(|_| Ok(None));

        mock_repo
            .expect_create()
            .withf(|new_user| {
                new_user.username == "alice"
                    && new_user.password.starts_with("$argon2")
                    && verify_password("hunter22", &new_user.password).unwrap()
            })
            .times(1)
            .returning(|new_user| {
                Ok(User {
                    id: 1,
                    username: new_user.username,
                    password: new_user.password,
                    created_at: Utc::now(),
                })
            });

        let service = AuthService::new(Arc::new(mock_repo));

        let outcome = service.signup("alice", "hunter22").await.unwrap();
        assert!(matches!(outcome, SignupOutcome::Created(_)));
    }

    #[tokio::test]
    async fn test_signup_refuses_taken_username() {
        let mut mock_repo = MockUserRepository::new();

        mock_repo
            .expect_find_by_username()
            .times(1)
            .returning(|_| Ok(Some(stored_user("alice", "hunter22"))));

        mock_repo.expect_create().times(0);

        let service = AuthService::new(Arc::new(mock_repo));

        let outcome = service.signup("alice", "other").await.unwrap();
        assert!(matches!(outcome, SignupOutcome::UsernameTaken));
    }

    #[tokio::test]
    async fn test_login_success() {
        let mut mock_repo = MockUserRepository::new();

        mock_repo
            .expect_find_by_username()
            .times(1)
            .returning(|_| Ok(Some(stored_user("alice", "hunter22"))));

        let service = AuthService::new(Arc::new(mock_repo));

        let outcome = service.login("alice", "hunter22").await.unwrap();
        assert!(matches!(outcome, LoginOutcome::Authenticated(_)));
    }

    #[tokio::test]
    async fn test_login_wrong_password_rejected() {
        let mut mock_repo = MockUserRepository::new();

        mock_repo
            .expect_find_by_username()
            .times(1)
            .returning(|_| Ok(Some(stored_user("alice", "hunter22"))));

        let service = AuthService::new(Arc::new(mock_repo));

        let outcome = service.login("alice", "wrong").await.unwrap();
        assert!(matches!(outcome, LoginOutcome::Rejected));
    }

    #[tokio::test]
    async fn test_login_unknown_user_rejected() {
        let mut mock_repo = MockUserRepository::new();

        mock_repo
            .expect_find_by_username()
            .times(1)
            .returning(|_| Ok(None));

        let service = AuthService::new(Arc::new(mock_repo));

        let outcome = service.login("nobody", "anything").await.unwrap();
        assert!(matches!(outcome, LoginOutcome::Rejected));
    }
}
