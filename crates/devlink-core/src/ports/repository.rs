//! Repository ports.
//!
//! Each aggregate is stored as a single record; sub-lists (likes, comments,
//! experience, education) are embedded in their parent. The `apply` methods
//! run an aggregate command atomically at the storage layer: the adapter
//! evaluates the domain mutation while it holds exclusive access to the
//! record, so a concurrent check-then-write cannot race.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{Post, PostCommand, Profile, ProfileCommand, User};
use crate::error::{DomainError, RepoError};

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Insert a new user. Fails with `Constraint` if the email is taken.
    async fn insert(&self, user: User) -> Result<User, RepoError>;

    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, RepoError>;

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, RepoError>;

    /// Remove a user record. Fails with `NotFound` if absent.
    async fn remove(&self, id: Uuid) -> Result<(), RepoError>;
}

#[async_trait]
pub trait PostRepository: Send + Sync {
    async fn insert(&self, post: Post) -> Result<Post, RepoError>;

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Post>, RepoError>;

    /// All posts ordered by creation time, newest first.
    async fn list_newest_first(&self) -> Result<Vec<Post>, RepoError>;

    async fn remove(&self, id: Uuid) -> Result<(), RepoError>;

    /// Delete every post authored by `author_id`; returns how many went.
    async fn remove_by_author(&self, author_id: Uuid) -> Result<u64, RepoError>;

    /// Atomically apply a command and return the updated post.
    async fn apply(&self, id: Uuid, command: PostCommand) -> Result<Post, DomainError>;
}

#[async_trait]
pub trait ProfileRepository: Send + Sync {
    /// Create or replace the profile for its user; at most one per user.
    async fn upsert(&self, profile: Profile) -> Result<Profile, RepoError>;

    async fn find_by_user(&self, user_id: Uuid) -> Result<Option<Profile>, RepoError>;

    async fn list_all(&self) -> Result<Vec<Profile>, RepoError>;

    /// Remove the profile owned by `user_id`; `false` if there was none.
    async fn remove_by_user(&self, user_id: Uuid) -> Result<bool, RepoError>;

    /// Atomically apply a command and return the updated profile.
    async fn apply(&self, user_id: Uuid, command: ProfileCommand) -> Result<Profile, DomainError>;
}
