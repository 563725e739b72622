use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::AuthorSnapshot;
use crate::error::DomainError;

/// Post aggregate - a post together with its like set and comment list.
///
/// Likes and comments have no lifecycle of their own; all mutations go
/// through the aggregate so the invariants hold: a user appears in `likes`
/// at most once, and only a comment's author may remove that comment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Post {
    pub id: Uuid,
    pub author_id: Uuid,
    pub author: AuthorSnapshot,
    pub text: String,
    pub created_at: DateTime<Utc>,
    /// Liker user ids, newest first.
    pub likes: Vec<Uuid>,
    /// Comments, newest first.
    pub comments: Vec<Comment>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comment {
    pub id: Uuid,
    pub author_id: Uuid,
    pub author: AuthorSnapshot,
    pub text: String,
    pub created_at: DateTime<Utc>,
}

/// A mutation applied atomically to a stored post.
///
/// Storage adapters evaluate [`Post::apply`] inside their own atomicity
/// scope (write lock or transaction), so the invariant check and the write
/// are a single step.
#[derive(Debug, Clone)]
pub enum PostCommand {
    Like { user_id: Uuid },
    Unlike { user_id: Uuid },
    AddComment { comment: Comment },
    RemoveComment { comment_id: Uuid, requester_id: Uuid },
}

impl Post {
    /// Create a new post. The author snapshot is captured here and never
    /// re-resolved.
    pub fn new(
        author_id: Uuid,
        author: AuthorSnapshot,
        text: String,
    ) -> Result<Self, DomainError> {
        if text.trim().is_empty() {
            return Err(DomainError::Validation("text is required".into()));
        }
        Ok(Self {
            id: Uuid::new_v4(),
            author_id,
            author,
            text,
            created_at: Utc::now(),
            likes: Vec::new(),
            comments: Vec::new(),
        })
    }

    pub fn apply(&mut self, command: PostCommand) -> Result<(), DomainError> {
        match command {
            PostCommand::Like { user_id } => self.like(user_id),
            PostCommand::Unlike { user_id } => self.unlike(user_id),
            PostCommand::AddComment { comment } => {
                self.add_comment(comment);
                Ok(())
            }
            PostCommand::RemoveComment {
                comment_id,
                requester_id,
            } => self.remove_comment(comment_id, requester_id),
        }
    }

    pub fn like(&mut self, user_id: Uuid) -> Result<(), DomainError> {
        if self.likes.contains(&user_id) {
            return Err(DomainError::AlreadyLiked);
        }
        self.likes.insert(0, user_id);
        Ok(())
    }

    pub fn unlike(&mut self, user_id: Uuid) -> Result<(), DomainError> {
        let index = self
            .likes
            .iter()
            .position(|liker| *liker == user_id)
            .ok_or(DomainError::NotLiked)?;
        self.likes.remove(index);
        Ok(())
    }

    pub fn add_comment(&mut self, comment: Comment) {
        self.comments.insert(0, comment);
    }

    pub fn remove_comment(
        &mut self,
        comment_id: Uuid,
        requester_id: Uuid,
    ) -> Result<(), DomainError> {
        let index = self
            .comments
            .iter()
            .position(|c| c.id == comment_id)
            .ok_or(DomainError::not_found("comment"))?;
        if self.comments[index].author_id != requester_id {
            return Err(DomainError::Forbidden);
        }
        self.comments.remove(index);
        Ok(())
    }
}

impl Comment {
    pub fn new(
        author_id: Uuid,
        author: AuthorSnapshot,
        text: String,
    ) -> Result<Self, DomainError> {
        if text.trim().is_empty() {
            return Err(DomainError::Validation("text is required".into()));
        }
        Ok(Self {
            id: Uuid::new_v4(),
            author_id,
            author,
            text,
            created_at: Utc::now(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot() -> AuthorSnapshot {
        AuthorSnapshot {
            name: "Ann".to_string(),
            avatar: "//gravatar/ann".to_string(),
        }
    }

    fn post() -> Post {
        Post::new(Uuid::new_v4(), snapshot(), "hello".to_string()).unwrap()
    }

    #[test]
    fn empty_text_is_rejected() {
        let err = Post::new(Uuid::new_v4(), snapshot(), "   ".to_string());
        assert!(matches!(err, Err(DomainError::Validation(_))));
    }

    #[test]
    fn like_twice_fails_and_membership_is_unique() {
        let mut post = post();
        let user = Uuid::new_v4();

        post.like(user).unwrap();
        assert!(matches!(post.like(user), Err(DomainError::AlreadyLiked)));
        assert_eq!(post.likes.iter().filter(|l| **l == user).count(), 1);
    }

    #[test]
    fn likes_are_newest_first() {
        let mut post = post();
        let first = Uuid::new_v4();
        let second = Uuid::new_v4();

        post.like(first).unwrap();
        post.like(second).unwrap();
        assert_eq!(post.likes, vec![second, first]);
    }

    #[test]
    fn unlike_without_like_leaves_sequence_unchanged() {
        let mut post = post();
        let liker = Uuid::new_v4();
        post.like(liker).unwrap();

        let result = post.unlike(Uuid::new_v4());
        assert!(matches!(result, Err(DomainError::NotLiked)));
        assert_eq!(post.likes, vec![liker]);
    }

    #[test]
    fn unlike_removes_exactly_the_matching_entry() {
        let mut post = post();
        let (a, b, c) = (Uuid::new_v4(), Uuid::new_v4(), Uuid::new_v4());
        post.like(a).unwrap();
        post.like(b).unwrap();
        post.like(c).unwrap();

        post.unlike(b).unwrap();
        assert_eq!(post.likes, vec![c, a]);
    }

    #[test]
    fn only_comment_author_may_remove_it() {
        let mut post = post();
        let author = Uuid::new_v4();
        let comment = Comment::new(author, snapshot(), "nice".to_string()).unwrap();
        let comment_id = comment.id;
        post.add_comment(comment);

        let stranger = Uuid::new_v4();
        assert!(matches!(
            post.remove_comment(comment_id, stranger),
            Err(DomainError::Forbidden)
        ));
        assert_eq!(post.comments.len(), 1);

        post.remove_comment(comment_id, author).unwrap();
        assert!(post.comments.is_empty());

        // Removing again reports the comment as gone.
        assert!(matches!(
            post.remove_comment(comment_id, author),
            Err(DomainError::NotFound { entity: "comment" })
        ));
    }

    #[test]
    fn comments_are_newest_first() {
        let mut post = post();
        let author = Uuid::new_v4();
        let first = Comment::new(author, snapshot(), "first".to_string()).unwrap();
        let second = Comment::new(author, snapshot(), "second".to_string()).unwrap();
        post.add_comment(first);
        post.add_comment(second);

        assert_eq!(post.comments[0].text, "second");
        assert_eq!(post.comments[1].text, "first");
    }
}
