//! Application state - shared across all handlers.

use std::sync::Arc;

use devlink_core::ports::{
    AvatarGenerator, Cache, PasswordService, PostRepository, ProfileRepository, TokenService,
    UserRepository,
};
use devlink_core::services::{AccountService, PostService, ProfileService};
use devlink_infra::auth::Argon2PasswordService;
use devlink_infra::avatar::Gravatar;
use devlink_infra::cache::InMemoryCache;
use devlink_infra::store::{InMemoryPostStore, InMemoryProfileStore, InMemoryUserStore};

use crate::config::{AppConfig, GithubConfig};

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub accounts: Arc<AccountService>,
    pub posts: Arc<PostService>,
    pub profiles: Arc<ProfileService>,
    pub cache: Arc<dyn Cache>,
    pub github: GithubConfig,
    pub http: reqwest::Client,
}

type Stores = (
    Arc<dyn UserRepository>,
    Arc<dyn PostRepository>,
    Arc<dyn ProfileRepository>,
);

impl AppState {
    /// Build the application state with appropriate implementations.
    pub async fn new(config: &AppConfig, tokens: Arc<dyn TokenService>) -> Self {
        let (users, posts, profiles) = Self::storage(config).await;

        let passwords: Arc<dyn PasswordService> = Arc::new(Argon2PasswordService::new());
        let avatars: Arc<dyn AvatarGenerator> = Arc::new(Gravatar::default());
        let cache: Arc<dyn Cache> = Arc::new(InMemoryCache::new());

        let accounts = Arc::new(AccountService::new(
            users.clone(),
            profiles.clone(),
            posts.clone(),
            passwords,
            tokens,
            avatars,
        ));
        let post_service = Arc::new(PostService::new(posts, users.clone()));
        let profile_service = Arc::new(ProfileService::new(profiles, users));

        tracing::info!("Application state initialized");

        Self {
            accounts,
            posts: post_service,
            profiles: profile_service,
            cache,
            github: config.github.clone(),
            http: reqwest::Client::new(),
        }
    }

    #[cfg(feature = "postgres")]
    async fn storage(config: &AppConfig) -> Stores {
        use devlink_infra::store::{
            PostgresPostStore, PostgresProfileStore, PostgresUserStore, connect,
        };

        if let Some(db_config) = &config.database {
            match connect(db_config).await {
                Ok(conn) => {
                    return (
                        Arc::new(PostgresUserStore::new(conn.clone())),
                        Arc::new(PostgresPostStore::new(conn.clone())),
                        Arc::new(PostgresProfileStore::new(conn)),
                    );
                }
                Err(e) => {
                    tracing::error!(
                        "Failed to connect to database: {}. Using in-memory storage.",
                        e
                    );
                }
            }
        } else {
            tracing::warn!("DATABASE_URL not set. Running with in-memory storage.");
        }
        Self::memory_storage()
    }

    #[cfg(not(feature = "postgres"))]
    async fn storage(_config: &AppConfig) -> Stores {
        tracing::info!("Running without postgres feature - using in-memory storage");
        Self::memory_storage()
    }

    fn memory_storage() -> Stores {
        (
            Arc::new(InMemoryUserStore::new()),
            Arc::new(InMemoryPostStore::new()),
            Arc::new(InMemoryProfileStore::new()),
        )
    }
}
