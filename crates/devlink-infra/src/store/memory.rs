//! In-memory storage - the default when no database is configured.
//!
//! Commands run while the write lock is held, so the invariant check and
//! the write are one atomic step; two racing likes cannot both pass the
//! "not already liked" check.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use devlink_core::domain::{Post, PostCommand, Profile, ProfileCommand, User};
use devlink_core::error::{DomainError, RepoError};
use devlink_core::ports::{PostRepository, ProfileRepository, UserRepository};

/// In-memory user store; email uniqueness is checked on insert.
#[derive(Default)]
pub struct InMemoryUserStore {
    records: RwLock<HashMap<Uuid, User>>,
}

impl InMemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserStore {
    async fn insert(&self, user: User) -> Result<User, RepoError> {
        let mut records = self.records.write().await;
        if records.values().any(|u| u.email == user.email) {
            return Err(RepoError::Constraint("email already registered".into()));
        }
        records.insert(user.id, user.clone());
        Ok(user)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, RepoError> {
        Ok(self.records.read().await.get(&id).cloned())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, RepoError> {
        let records = self.records.read().await;
        Ok(records.values().find(|u| u.email == email).cloned())
    }

    async fn remove(&self, id: Uuid) -> Result<(), RepoError> {
        self.records
            .write()
            .await
            .remove(&id)
            .map(|_| ())
            .ok_or(RepoError::NotFound)
    }
}

#[derive(Default)]
pub struct InMemoryPostStore {
    records: RwLock<HashMap<Uuid, Post>>,
}

impl InMemoryPostStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl PostRepository for InMemoryPostStore {
    async fn insert(&self, post: Post) -> Result<Post, RepoError> {
        self.records.write().await.insert(post.id, post.clone());
        Ok(post)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Post>, RepoError> {
        Ok(self.records.read().await.get(&id).cloned())
    }

    async fn list_newest_first(&self) -> Result<Vec<Post>, RepoError> {
        let records = self.records.read().await;
        let mut posts: Vec<Post> = records.values().cloned().collect();
        posts.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(posts)
    }

    async fn remove(&self, id: Uuid) -> Result<(), RepoError> {
        self.records
            .write()
            .await
            .remove(&id)
            .map(|_| ())
            .ok_or(RepoError::NotFound)
    }

    async fn remove_by_author(&self, author_id: Uuid) -> Result<u64, RepoError> {
        let mut records = self.records.write().await;
        let before = records.len();
        records.retain(|_, post| post.author_id != author_id);
        Ok((before - records.len()) as u64)
    }

    async fn apply(&self, id: Uuid, command: PostCommand) -> Result<Post, DomainError> {
        let mut records = self.records.write().await;
        let post = records
            .get_mut(&id)
            .ok_or(DomainError::not_found("post"))?;
        post.apply(command)?;
        Ok(post.clone())
    }
}

/// In-memory profile store, keyed by the owning user id: one profile per
/// user by construction.
#[derive(Default)]
pub struct InMemoryProfileStore {
    records: RwLock<HashMap<Uuid, Profile>>,
}

impl InMemoryProfileStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ProfileRepository for InMemoryProfileStore {
    async fn upsert(&self, profile: Profile) -> Result<Profile, RepoError> {
        self.records
            .write()
            .await
            .insert(profile.user_id, profile.clone());
        Ok(profile)
    }

    async fn find_by_user(&self, user_id: Uuid) -> Result<Option<Profile>, RepoError> {
        Ok(self.records.read().await.get(&user_id).cloned())
    }

    async fn list_all(&self) -> Result<Vec<Profile>, RepoError> {
        Ok(self.records.read().await.values().cloned().collect())
    }

    async fn remove_by_user(&self, user_id: Uuid) -> Result<bool, RepoError> {
        Ok(self.records.write().await.remove(&user_id).is_some())
    }

    async fn apply(&self, user_id: Uuid, command: ProfileCommand) -> Result<Profile, DomainError> {
        let mut records = self.records.write().await;
        let profile = records
            .get_mut(&user_id)
            .ok_or(DomainError::not_found("profile"))?;
        profile.apply(command)?;
        Ok(profile.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use devlink_core::domain::AuthorSnapshot;

    fn user(email: &str) -> User {
        User::new(
            "Ann".to_string(),
            email.to_string(),
            "//avatar".to_string(),
            "hash".to_string(),
        )
    }

    fn post(author_id: Uuid, text: &str) -> Post {
        Post::new(
            author_id,
            AuthorSnapshot {
                name: "Ann".to_string(),
                avatar: "//avatar".to_string(),
            },
            text.to_string(),
        )
        .unwrap()
    }

    #[tokio::test]
    async fn duplicate_email_is_a_constraint_violation() {
        let store = InMemoryUserStore::new();
        store.insert(user("ann@x.com")).await.unwrap();

        let result = store.insert(user("ann@x.com")).await;
        assert!(matches!(result, Err(RepoError::Constraint(_))));
    }

    #[tokio::test]
    async fn posts_list_newest_first() {
        let store = InMemoryPostStore::new();
        let author = Uuid::new_v4();
        let first = store.insert(post(author, "first")).await.unwrap();
        tokio::time::sleep(std::time::Duration::from_millis(2)).await;
        let second = store.insert(post(author, "second")).await.unwrap();

        let listed = store.list_newest_first().await.unwrap();
        assert_eq!(listed[0].id, second.id);
        assert_eq!(listed[1].id, first.id);
    }

    #[tokio::test]
    async fn remove_by_author_only_touches_their_posts() {
        let store = InMemoryPostStore::new();
        let ann = Uuid::new_v4();
        let bob = Uuid::new_v4();
        store.insert(post(ann, "one")).await.unwrap();
        store.insert(post(ann, "two")).await.unwrap();
        let kept = store.insert(post(bob, "three")).await.unwrap();

        let removed = store.remove_by_author(ann).await.unwrap();
        assert_eq!(removed, 2);

        let remaining = store.list_newest_first().await.unwrap();
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].id, kept.id);
    }

    #[tokio::test]
    async fn apply_on_a_missing_post_is_not_found() {
        let store = InMemoryPostStore::new();
        let result = store
            .apply(
                Uuid::new_v4(),
                PostCommand::Like {
                    user_id: Uuid::new_v4(),
                },
            )
            .await;
        assert!(matches!(
            result,
            Err(DomainError::NotFound { entity: "post" })
        ));
    }

    #[tokio::test]
    async fn profile_upsert_replaces_the_single_record() {
        let store = InMemoryProfileStore::new();
        let user_id = Uuid::new_v4();

        let mut profile = Profile::new(user_id, "dev".to_string(), vec!["rust".to_string()]);
        store.upsert(profile.clone()).await.unwrap();

        profile.status = "senior dev".to_string();
        store.upsert(profile).await.unwrap();

        let all = store.list_all().await.unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].status, "senior dev");
    }
}
