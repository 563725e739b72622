//! Account operations: registration, login, lookup, cascading delete.

use std::sync::Arc;

use uuid::Uuid;

use crate::domain::{PublicUser, User};
use crate::error::{DomainError, RepoError};
use crate::ports::{
    AvatarGenerator, PasswordService, PostRepository, ProfileRepository, TokenService,
    UserRepository,
};

/// Result of a successful registration: the created user plus a login token.
#[derive(Debug, Clone)]
pub struct RegisteredAccount {
    pub user: PublicUser,
    pub token: String,
}

/// The credential store: owns user records and the operations that touch
/// credentials. Deletion cascades to the user's profile and posts.
pub struct AccountService {
    users: Arc<dyn UserRepository>,
    profiles: Arc<dyn ProfileRepository>,
    posts: Arc<dyn PostRepository>,
    passwords: Arc<dyn PasswordService>,
    tokens: Arc<dyn TokenService>,
    avatars: Arc<dyn AvatarGenerator>,
}

impl AccountService {
    pub fn new(
        users: Arc<dyn UserRepository>,
        profiles: Arc<dyn ProfileRepository>,
        posts: Arc<dyn PostRepository>,
        passwords: Arc<dyn PasswordService>,
        tokens: Arc<dyn TokenService>,
        avatars: Arc<dyn AvatarGenerator>,
    ) -> Self {
        Self {
            users,
            profiles,
            posts,
            passwords,
            tokens,
            avatars,
        }
    }

    /// Register a new user and issue a login token.
    pub async fn register(
        &self,
        name: &str,
        email: &str,
        password: &str,
    ) -> Result<RegisteredAccount, DomainError> {
        if name.trim().is_empty() {
            return Err(DomainError::Validation("name is required".into()));
        }
        if !email.contains('@') {
            return Err(DomainError::Validation("a valid email is required".into()));
        }
        if password.len() < 6 {
            return Err(DomainError::Validation(
                "password must be at least 6 characters".into(),
            ));
        }

        let existing = self
            .users
            .find_by_email(email)
            .await
            .map_err(|e| DomainError::storage("look up email", e))?;
        if existing.is_some() {
            return Err(DomainError::DuplicateEmail);
        }

        let avatar = self.avatars.derive(email);
        let password_hash = self
            .passwords
            .hash(password)
            .map_err(|e| DomainError::Internal(e.to_string()))?;

        let user = User::new(
            name.trim().to_string(),
            email.to_string(),
            avatar,
            password_hash,
        );
        let user = self.users.insert(user).await.map_err(|e| match e {
            // The storage-level unique index may win a race the earlier
            // lookup missed.
            RepoError::Constraint(_) => DomainError::DuplicateEmail,
            other => DomainError::storage("insert user", other),
        })?;

        let token = self
            .tokens
            .issue(user.id)
            .map_err(|e| DomainError::Internal(e.to_string()))?;

        tracing::info!(user_id = %user.id, "user registered");
        Ok(RegisteredAccount {
            user: user.to_public(),
            token,
        })
    }

    /// Verify credentials and issue a token.
    ///
    /// Unknown email and wrong password are indistinguishable to the caller.
    pub async fn authenticate(&self, email: &str, password: &str) -> Result<String, DomainError> {
        let user = self
            .users
            .find_by_email(email)
            .await
            .map_err(|e| DomainError::storage("look up email", e))?
            .ok_or(DomainError::InvalidCredentials)?;

        let matches = self
            .passwords
            .verify(password, &user.password_hash)
            .map_err(|e| DomainError::Internal(e.to_string()))?;
        if !matches {
            return Err(DomainError::InvalidCredentials);
        }

        self.tokens
            .issue(user.id)
            .map_err(|e| DomainError::Internal(e.to_string()))
    }

    pub async fn get_by_id(&self, id: Uuid) -> Result<PublicUser, DomainError> {
        let user = self
            .users
            .find_by_id(id)
            .await
            .map_err(|e| DomainError::storage("look up user", e))?
            .ok_or(DomainError::not_found("user"))?;
        Ok(user.to_public())
    }

    /// Delete an account and everything it owns: profile, then posts, then
    /// the user record. Each step commits independently; a failure partway
    /// reports the failed step and leaves earlier steps committed.
    pub async fn delete_account(&self, id: Uuid) -> Result<(), DomainError> {
        self.profiles
            .remove_by_user(id)
            .await
            .map_err(|e| DomainError::storage("delete profile", e))?;

        let removed_posts = self
            .posts
            .remove_by_author(id)
            .await
            .map_err(|e| DomainError::storage("delete posts", e))?;

        self.users.remove(id).await.map_err(|e| match e {
            RepoError::NotFound => DomainError::not_found("user"),
            other => DomainError::storage("delete user", other),
        })?;

        tracing::info!(user_id = %id, removed_posts, "account deleted");
        Ok(())
    }
}
