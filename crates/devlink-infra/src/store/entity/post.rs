//! Post entity for SeaORM. Likes and comments are embedded JSONB columns;
//! the whole aggregate is one row.

use sea_orm::entity::prelude::*;
use sea_orm::{FromJsonQueryResult, Set};
use serde::{Deserialize, Serialize};

use devlink_core::domain::{AuthorSnapshot, Comment, Post};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, FromJsonQueryResult)]
pub struct AuthorColumn(pub AuthorSnapshot);

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, FromJsonQueryResult)]
pub struct LikesColumn(pub Vec<Uuid>);

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, FromJsonQueryResult)]
pub struct CommentsColumn(pub Vec<Comment>);

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "posts")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub author_id: Uuid,
    #[sea_orm(column_type = "JsonBinary")]
    pub author: AuthorColumn,
    #[sea_orm(column_type = "Text")]
    pub text: String,
    pub created_at: DateTimeWithTimeZone,
    #[sea_orm(column_type = "JsonBinary")]
    pub likes: LikesColumn,
    #[sea_orm(column_type = "JsonBinary")]
    pub comments: CommentsColumn,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::AuthorId",
        to = "super::user::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    User,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Post {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            author_id: model.author_id,
            author: model.author.0,
            text: model.text,
            created_at: model.created_at.into(),
            likes: model.likes.0,
            comments: model.comments.0,
        }
    }
}

impl From<Post> for ActiveModel {
    fn from(post: Post) -> Self {
        Self {
            id: Set(post.id),
            author_id: Set(post.author_id),
            author: Set(AuthorColumn(post.author)),
            text: Set(post.text),
            created_at: Set(post.created_at.into()),
            likes: Set(LikesColumn(post.likes)),
            comments: Set(CommentsColumn(post.comments)),
        }
    }
}
