//! PostgreSQL storage implementations.
//!
//! `apply` commands run inside a transaction holding a row lock, so the
//! aggregate's invariant check and the write are one atomic step.

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DbConn, DbErr, EntityTrait, QueryFilter, QueryOrder,
    QuerySelect, TransactionTrait,
};
use uuid::Uuid;

use devlink_core::domain::{Post, PostCommand, Profile, ProfileCommand, User};
use devlink_core::error::{DomainError, RepoError};
use devlink_core::ports::{PostRepository, ProfileRepository, UserRepository};

use super::entity::post::{self, Entity as PostEntity};
use super::entity::profile::{self, Entity as ProfileEntity};
use super::entity::user::{self, Entity as UserEntity};

fn query_err(e: DbErr) -> RepoError {
    RepoError::Query(e.to_string())
}

fn insert_err(e: DbErr) -> RepoError {
    let err_str = e.to_string();
    if err_str.contains("duplicate") || err_str.contains("unique") {
        RepoError::Constraint("record already exists".to_string())
    } else {
        RepoError::Query(err_str)
    }
}

/// Mask an email for logging to keep PII out of logs.
fn mask_email(email: &str) -> String {
    match email.find('@') {
        Some(at_pos) => {
            let (local, domain) = email.split_at(at_pos);
            if local.len() > 1 {
                format!("{}***{}", &local[..1], domain)
            } else {
                format!("***{domain}")
            }
        }
        None => "***".to_string(),
    }
}

pub struct PostgresUserStore {
    db: DbConn,
}

impl PostgresUserStore {
    pub fn new(db: DbConn) -> Self {
        Self { db }
    }
}

#[async_trait]
impl UserRepository for PostgresUserStore {
    async fn insert(&self, user: User) -> Result<User, RepoError> {
        let active: user::ActiveModel = user.into();
        let model = active.insert(&self.db).await.map_err(insert_err)?;
        Ok(model.into())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, RepoError> {
        let result = UserEntity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(query_err)?;
        Ok(result.map(Into::into))
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, RepoError> {
        tracing::debug!(user_email = %mask_email(email), "Finding user by email");

        let result = UserEntity::find()
            .filter(user::Column::Email.eq(email))
            .one(&self.db)
            .await
            .map_err(query_err)?;
        Ok(result.map(Into::into))
    }

    async fn remove(&self, id: Uuid) -> Result<(), RepoError> {
        let result = UserEntity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(query_err)?;
        if result.rows_affected == 0 {
            return Err(RepoError::NotFound);
        }
        Ok(())
    }
}

pub struct PostgresPostStore {
    db: DbConn,
}

impl PostgresPostStore {
    pub fn new(db: DbConn) -> Self {
        Self { db }
    }
}

#[async_trait]
impl PostRepository for PostgresPostStore {
    async fn insert(&self, post: Post) -> Result<Post, RepoError> {
        let active: post::ActiveModel = post.into();
        let model = active.insert(&self.db).await.map_err(insert_err)?;
        Ok(model.into())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Post>, RepoError> {
        let result = PostEntity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(query_err)?;
        Ok(result.map(Into::into))
    }

    async fn list_newest_first(&self) -> Result<Vec<Post>, RepoError> {
        let result = PostEntity::find()
            .order_by_desc(post::Column::CreatedAt)
            .all(&self.db)
            .await
            .map_err(query_err)?;
        Ok(result.into_iter().map(Into::into).collect())
    }

    async fn remove(&self, id: Uuid) -> Result<(), RepoError> {
        let result = PostEntity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(query_err)?;
        if result.rows_affected == 0 {
            return Err(RepoError::NotFound);
        }
        Ok(())
    }

    async fn remove_by_author(&self, author_id: Uuid) -> Result<u64, RepoError> {
        let result = PostEntity::delete_many()
            .filter(post::Column::AuthorId.eq(author_id))
            .exec(&self.db)
            .await
            .map_err(query_err)?;
        Ok(result.rows_affected)
    }

    async fn apply(&self, id: Uuid, command: PostCommand) -> Result<Post, DomainError> {
        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| DomainError::storage("begin transaction", query_err(e)))?;

        let model = PostEntity::find_by_id(id)
            .lock_exclusive()
            .one(&txn)
            .await
            .map_err(|e| DomainError::storage("load post", query_err(e)))?
            .ok_or(DomainError::not_found("post"))?;

        let mut post: Post = model.into();
        // A domain failure drops the transaction, rolling it back.
        post.apply(command)?;

        let active: post::ActiveModel = post.clone().into();
        active
            .update(&txn)
            .await
            .map_err(|e| DomainError::storage("update post", query_err(e)))?;
        txn.commit()
            .await
            .map_err(|e| DomainError::storage("commit post update", query_err(e)))?;

        Ok(post)
    }
}

pub struct PostgresProfileStore {
    db: DbConn,
}

impl PostgresProfileStore {
    pub fn new(db: DbConn) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ProfileRepository for PostgresProfileStore {
    async fn upsert(&self, profile: Profile) -> Result<Profile, RepoError> {
        let existing = ProfileEntity::find_by_id(profile.user_id)
            .one(&self.db)
            .await
            .map_err(query_err)?;

        let active: profile::ActiveModel = profile.clone().into();
        if existing.is_some() {
            active.update(&self.db).await.map_err(query_err)?;
        } else {
            active.insert(&self.db).await.map_err(insert_err)?;
        }
        Ok(profile)
    }

    async fn find_by_user(&self, user_id: Uuid) -> Result<Option<Profile>, RepoError> {
        let result = ProfileEntity::find_by_id(user_id)
            .one(&self.db)
            .await
            .map_err(query_err)?;
        Ok(result.map(Into::into))
    }

    async fn list_all(&self) -> Result<Vec<Profile>, RepoError> {
        let result = ProfileEntity::find()
            .all(&self.db)
            .await
            .map_err(query_err)?;
        Ok(result.into_iter().map(Into::into).collect())
    }

    async fn remove_by_user(&self, user_id: Uuid) -> Result<bool, RepoError> {
        let result = ProfileEntity::delete_by_id(user_id)
            .exec(&self.db)
            .await
            .map_err(query_err)?;
        Ok(result.rows_affected > 0)
    }

    async fn apply(&self, user_id: Uuid, command: ProfileCommand) -> Result<Profile, DomainError> {
        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| DomainError::storage("begin transaction", query_err(e)))?;

        let model = ProfileEntity::find_by_id(user_id)
            .lock_exclusive()
            .one(&txn)
            .await
            .map_err(|e| DomainError::storage("load profile", query_err(e)))?
            .ok_or(DomainError::not_found("profile"))?;

        let mut profile: Profile = model.into();
        profile.apply(command)?;

        let active: profile::ActiveModel = profile.clone().into();
        active
            .update(&txn)
            .await
            .map_err(|e| DomainError::storage("update profile", query_err(e)))?;
        txn.commit()
            .await
            .map_err(|e| DomainError::storage("commit profile update", query_err(e)))?;

        Ok(profile)
    }
}
