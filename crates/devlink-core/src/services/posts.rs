//! Post operations: the command surface over the post aggregate.

use std::sync::Arc;

use uuid::Uuid;

use crate::domain::{AuthorSnapshot, Comment, Post, PostCommand};
use crate::error::{DomainError, RepoError};
use crate::ports::{PostRepository, UserRepository};

pub struct PostService {
    posts: Arc<dyn PostRepository>,
    users: Arc<dyn UserRepository>,
}

impl PostService {
    pub fn new(posts: Arc<dyn PostRepository>, users: Arc<dyn UserRepository>) -> Self {
        Self { posts, users }
    }

    /// Create a post as `author_id`, snapshotting the author's current
    /// name and avatar.
    pub async fn create(&self, author_id: Uuid, text: &str) -> Result<Post, DomainError> {
        let author = self.author_snapshot(author_id).await?;
        let post = Post::new(author_id, author, text.to_string())?;
        self.posts
            .insert(post)
            .await
            .map_err(|e| DomainError::storage("insert post", e))
    }

    pub async fn list(&self) -> Result<Vec<Post>, DomainError> {
        self.posts
            .list_newest_first()
            .await
            .map_err(|e| DomainError::storage("list posts", e))
    }

    pub async fn get(&self, id: Uuid) -> Result<Post, DomainError> {
        self.posts
            .find_by_id(id)
            .await
            .map_err(|e| DomainError::storage("look up post", e))?
            .ok_or(DomainError::not_found("post"))
    }

    /// Delete a post; only its author may.
    pub async fn delete(&self, id: Uuid, requester_id: Uuid) -> Result<(), DomainError> {
        let post = self.get(id).await?;
        if post.author_id != requester_id {
            return Err(DomainError::Forbidden);
        }
        self.posts.remove(id).await.map_err(|e| match e {
            RepoError::NotFound => DomainError::not_found("post"),
            other => DomainError::storage("delete post", other),
        })
    }

    /// Like a post; returns the updated like list (newest first).
    pub async fn like(&self, id: Uuid, user_id: Uuid) -> Result<Vec<Uuid>, DomainError> {
        let post = self.posts.apply(id, PostCommand::Like { user_id }).await?;
        Ok(post.likes)
    }

    /// Remove `user_id`'s like; returns the updated like list.
    pub async fn unlike(&self, id: Uuid, user_id: Uuid) -> Result<Vec<Uuid>, DomainError> {
        let post = self
            .posts
            .apply(id, PostCommand::Unlike { user_id })
            .await?;
        Ok(post.likes)
    }

    /// Comment on a post; returns the updated comment list (newest first).
    pub async fn add_comment(
        &self,
        id: Uuid,
        author_id: Uuid,
        text: &str,
    ) -> Result<Vec<Comment>, DomainError> {
        let author = self.author_snapshot(author_id).await?;
        let comment = Comment::new(author_id, author, text.to_string())?;
        let post = self
            .posts
            .apply(id, PostCommand::AddComment { comment })
            .await?;
        Ok(post.comments)
    }

    /// Remove a comment by id; only the comment's author may.
    pub async fn remove_comment(
        &self,
        id: Uuid,
        comment_id: Uuid,
        requester_id: Uuid,
    ) -> Result<Vec<Comment>, DomainError> {
        let post = self
            .posts
            .apply(
                id,
                PostCommand::RemoveComment {
                    comment_id,
                    requester_id,
                },
            )
            .await?;
        Ok(post.comments)
    }

    async fn author_snapshot(&self, author_id: Uuid) -> Result<AuthorSnapshot, DomainError> {
        let user = self
            .users
            .find_by_id(author_id)
            .await
            .map_err(|e| DomainError::storage("look up author", e))?
            .ok_or(DomainError::not_found("user"))?;
        Ok(AuthorSnapshot::from(&user))
    }
}
