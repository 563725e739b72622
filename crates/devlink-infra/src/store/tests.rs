#[cfg(test)]
mod tests {
    use crate::store::entity::post::{self, AuthorColumn, CommentsColumn, LikesColumn};
    use crate::store::entity::user;
    use crate::store::postgres::{PostgresPostStore, PostgresUserStore};
    use devlink_core::domain::AuthorSnapshot;
    use devlink_core::ports::{PostRepository, UserRepository};
    use sea_orm::{DatabaseBackend, MockDatabase};

    #[tokio::test]
    async fn find_post_by_id_rehydrates_embedded_lists() {
        let post_id = uuid::Uuid::new_v4();
        let author_id = uuid::Uuid::new_v4();
        let liker = uuid::Uuid::new_v4();
        let now = chrono::Utc::now();

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![post::Model {
                id: post_id,
                author_id,
                author: AuthorColumn(AuthorSnapshot {
                    name: "Ann".to_owned(),
                    avatar: "//gravatar/ann".to_owned(),
                }),
                text: "hello".to_owned(),
                created_at: now.into(),
                likes: LikesColumn(vec![liker]),
                comments: CommentsColumn(vec![]),
            }]])
            .into_connection();

        let store = PostgresPostStore::new(db);

        let post = store.find_by_id(post_id).await.unwrap().unwrap();
        assert_eq!(post.id, post_id);
        assert_eq!(post.author.name, "Ann");
        assert_eq!(post.likes, vec![liker]);
        assert!(post.comments.is_empty());
    }

    #[tokio::test]
    async fn find_user_by_email_maps_the_row() {
        let user_id = uuid::Uuid::new_v4();
        let now = chrono::Utc::now();

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![user::Model {
                id: user_id,
                name: "Ann".to_owned(),
                email: "ann@x.com".to_owned(),
                avatar: "//gravatar/ann".to_owned(),
                password_hash: "phc-hash".to_owned(),
                created_at: now.into(),
            }]])
            .into_connection();

        let store = PostgresUserStore::new(db);

        let found = store.find_by_email("ann@x.com").await.unwrap().unwrap();
        assert_eq!(found.id, user_id);
        assert_eq!(found.email, "ann@x.com");
    }
}
