//! End-to-end service flows over the in-memory store with the real
//! JWT / Argon2 / Gravatar adapters.

use std::sync::Arc;

use devlink_core::DomainError;
use devlink_core::ports::{
    AvatarGenerator, PasswordService, PostRepository, ProfileRepository, TokenService,
    UserRepository,
};
use devlink_core::services::{AccountService, PostService, ProfileFields, ProfileService};
use devlink_infra::auth::{Argon2PasswordService, JwtConfig, JwtTokenService};
use devlink_infra::avatar::Gravatar;
use devlink_infra::store::{InMemoryPostStore, InMemoryProfileStore, InMemoryUserStore};

struct Services {
    accounts: AccountService,
    posts: PostService,
    profiles: ProfileService,
    tokens: Arc<dyn TokenService>,
}

fn services() -> Services {
    let users: Arc<dyn UserRepository> = Arc::new(InMemoryUserStore::new());
    let posts: Arc<dyn PostRepository> = Arc::new(InMemoryPostStore::new());
    let profiles: Arc<dyn ProfileRepository> = Arc::new(InMemoryProfileStore::new());
    let passwords: Arc<dyn PasswordService> = Arc::new(Argon2PasswordService::new());
    let tokens: Arc<dyn TokenService> = Arc::new(JwtTokenService::new(JwtConfig {
        secret: "test-secret".to_string(),
        ..JwtConfig::default()
    }));
    let avatars: Arc<dyn AvatarGenerator> = Arc::new(Gravatar::default());

    Services {
        accounts: AccountService::new(
            users.clone(),
            profiles.clone(),
            posts.clone(),
            passwords,
            tokens.clone(),
            avatars,
        ),
        posts: PostService::new(posts, users.clone()),
        profiles: ProfileService::new(profiles, users),
        tokens,
    }
}

fn dev_profile() -> ProfileFields {
    ProfileFields {
        status: "developer".to_string(),
        skills: "rust, sql".to_string(),
        ..ProfileFields::default()
    }
}

#[tokio::test]
async fn register_issues_a_verifiable_token_and_derives_the_avatar() {
    let svc = services();

    let account = svc
        .accounts
        .register("Ann", "ann@x.com", "secret1")
        .await
        .unwrap();

    assert!(account.user.avatar.starts_with("https://www.gravatar.com/avatar/"));
    let claims = svc.tokens.verify(&account.token).unwrap();
    assert_eq!(claims.user_id, account.user.id);
}

#[tokio::test]
async fn second_registration_with_same_email_is_rejected() {
    let svc = services();

    svc.accounts
        .register("Ann", "ann@x.com", "secret1")
        .await
        .unwrap();
    let result = svc.accounts.register("Ann 2", "ann@x.com", "secret2").await;
    assert!(matches!(result, Err(DomainError::DuplicateEmail)));

    // The first user is unaffected.
    svc.accounts
        .authenticate("ann@x.com", "secret1")
        .await
        .unwrap();
}

#[tokio::test]
async fn unknown_email_and_wrong_password_are_indistinguishable() {
    let svc = services();
    svc.accounts
        .register("Ann", "ann@x.com", "secret1")
        .await
        .unwrap();

    let unknown = svc.accounts.authenticate("nobody@x.com", "secret1").await;
    let mismatch = svc.accounts.authenticate("ann@x.com", "wrong").await;
    assert!(matches!(unknown, Err(DomainError::InvalidCredentials)));
    assert!(matches!(mismatch, Err(DomainError::InvalidCredentials)));
}

#[tokio::test]
async fn post_like_and_comment_lifecycle() {
    let svc = services();
    let ann = svc
        .accounts
        .register("Ann", "ann@x.com", "secret1")
        .await
        .unwrap()
        .user;
    let bob = svc
        .accounts
        .register("Bob", "bob@x.com", "secret2")
        .await
        .unwrap()
        .user;

    svc.accounts
        .authenticate("ann@x.com", "secret1")
        .await
        .unwrap();

    let post = svc.posts.create(ann.id, "hello").await.unwrap();
    assert_eq!(post.author.name, "Ann");

    let likes = svc.posts.like(post.id, ann.id).await.unwrap();
    assert_eq!(likes, vec![ann.id]);

    let again = svc.posts.like(post.id, ann.id).await;
    assert!(matches!(again, Err(DomainError::AlreadyLiked)));

    let likes = svc.posts.unlike(post.id, ann.id).await.unwrap();
    assert!(likes.is_empty());

    let not_liked = svc.posts.unlike(post.id, ann.id).await;
    assert!(matches!(not_liked, Err(DomainError::NotLiked)));

    let comments = svc.posts.add_comment(post.id, ann.id, "nice").await.unwrap();
    assert_eq!(comments.len(), 1);
    assert_eq!(comments[0].author_id, ann.id);
    assert_eq!(comments[0].text, "nice");

    let by_stranger = svc
        .posts
        .remove_comment(post.id, comments[0].id, bob.id)
        .await;
    assert!(matches!(by_stranger, Err(DomainError::Forbidden)));

    let comments = svc
        .posts
        .remove_comment(post.id, comments[0].id, ann.id)
        .await
        .unwrap();
    assert!(comments.is_empty());
}

#[tokio::test]
async fn only_the_author_may_delete_a_post() {
    let svc = services();
    let ann = svc
        .accounts
        .register("Ann", "ann@x.com", "secret1")
        .await
        .unwrap()
        .user;
    let bob = svc
        .accounts
        .register("Bob", "bob@x.com", "secret2")
        .await
        .unwrap()
        .user;

    let post = svc.posts.create(ann.id, "hello").await.unwrap();

    let result = svc.posts.delete(post.id, bob.id).await;
    assert!(matches!(result, Err(DomainError::Forbidden)));
    // Still retrievable.
    assert_eq!(svc.posts.get(post.id).await.unwrap().id, post.id);

    svc.posts.delete(post.id, ann.id).await.unwrap();
    assert!(matches!(
        svc.posts.get(post.id).await,
        Err(DomainError::NotFound { entity: "post" })
    ));
}

#[tokio::test]
async fn upsert_replaces_fields_without_duplicating_the_profile() {
    let svc = services();
    let ann = svc
        .accounts
        .register("Ann", "ann@x.com", "secret1")
        .await
        .unwrap()
        .user;

    let mut fields = dev_profile();
    fields.company = Some("Acme".to_string());
    svc.profiles.upsert(ann.id, fields).await.unwrap();

    svc.profiles
        .add_experience(
            ann.id,
            devlink_core::services::ExperienceInput {
                title: "Engineer".to_string(),
                company: "Acme".to_string(),
                location: None,
                from: chrono::NaiveDate::from_ymd_opt(2021, 3, 1).unwrap(),
                to: None,
                current: true,
                description: None,
            },
        )
        .await
        .unwrap();

    // Second submit omits company; the stored value must not go stale.
    let mut fields = dev_profile();
    fields.status = "architect".to_string();
    let updated = svc.profiles.upsert(ann.id, fields).await.unwrap();

    assert_eq!(updated.status, "architect");
    assert_eq!(updated.company, None);
    // Sub-records survive an upsert.
    assert_eq!(updated.experience.len(), 1);

    let all = svc.profiles.list().await.unwrap();
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].owner.name, "Ann");
}

#[tokio::test]
async fn experience_entries_are_removed_by_id() {
    let svc = services();
    let ann = svc
        .accounts
        .register("Ann", "ann@x.com", "secret1")
        .await
        .unwrap()
        .user;
    svc.profiles.upsert(ann.id, dev_profile()).await.unwrap();

    let profile = svc
        .profiles
        .add_experience(
            ann.id,
            devlink_core::services::ExperienceInput {
                title: "Engineer".to_string(),
                company: "Acme".to_string(),
                location: None,
                from: chrono::NaiveDate::from_ymd_opt(2021, 3, 1).unwrap(),
                to: None,
                current: true,
                description: None,
            },
        )
        .await
        .unwrap();
    let entry_id = profile.experience[0].id;

    let profile = svc.profiles.remove_experience(ann.id, entry_id).await.unwrap();
    assert!(profile.experience.is_empty());

    let missing = svc.profiles.remove_experience(ann.id, entry_id).await;
    assert!(matches!(missing, Err(DomainError::NotFound { .. })));
}

#[tokio::test]
async fn deleting_an_account_cascades_to_profile_and_posts() {
    let svc = services();
    let ann = svc
        .accounts
        .register("Ann", "ann@x.com", "secret1")
        .await
        .unwrap()
        .user;

    svc.profiles.upsert(ann.id, dev_profile()).await.unwrap();
    let post = svc.posts.create(ann.id, "hello").await.unwrap();

    svc.accounts.delete_account(ann.id).await.unwrap();

    assert!(matches!(
        svc.accounts.get_by_id(ann.id).await,
        Err(DomainError::NotFound { entity: "user" })
    ));
    assert!(matches!(
        svc.profiles.get_by_user(ann.id).await,
        Err(DomainError::NotFound { entity: "profile" })
    ));
    assert!(matches!(
        svc.posts.get(post.id).await,
        Err(DomainError::NotFound { entity: "post" })
    ));
}
