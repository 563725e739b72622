//! HTTP handlers and route configuration.

mod auth;
mod github;
mod health;
mod posts;
mod profile;
mod users;

use actix_web::web;
use uuid::Uuid;

use crate::middleware::error::AppError;

/// Configure all application routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            // Public routes
            .route("/health", web::get().to(health::health_check))
            .route("/users", web::post().to(users::register))
            // Auth routes
            .service(
                web::scope("/auth")
                    .route("", web::post().to(auth::login))
                    .route("", web::get().to(auth::current_user)),
            )
            // Post routes (all behind the auth gate)
            .service(
                web::scope("/posts")
                    .route("", web::post().to(posts::create))
                    .route("", web::get().to(posts::list))
                    .route("/like/{id}", web::put().to(posts::like))
                    .route("/unlike/{id}", web::put().to(posts::unlike))
                    .route("/comment/{id}", web::post().to(posts::add_comment))
                    .route(
                        "/comment/{id}/{comment_id}",
                        web::delete().to(posts::remove_comment),
                    )
                    .route("/{id}", web::get().to(posts::get))
                    .route("/{id}", web::delete().to(posts::delete)),
            )
            // Profile routes
            .service(
                web::scope("/profile")
                    .route("/me", web::get().to(profile::me))
                    .route("/user/{user_id}", web::get().to(profile::by_user))
                    .route("/experience", web::put().to(profile::add_experience))
                    .route(
                        "/experience/{exp_id}",
                        web::delete().to(profile::remove_experience),
                    )
                    .route("/education", web::put().to(profile::add_education))
                    .route(
                        "/education/{edu_id}",
                        web::delete().to(profile::remove_education),
                    )
                    .route("/github/{username}", web::get().to(github::repos))
                    .route("", web::post().to(profile::upsert))
                    .route("", web::get().to(profile::list))
                    .route("", web::delete().to(profile::delete_account)),
            ),
    );
}

/// Parse a path id, collapsing malformed ids into the same 404 a missing
/// entity produces.
fn parse_id(raw: &str, entity: &'static str) -> Result<Uuid, AppError> {
    Uuid::parse_str(raw).map_err(|_| AppError::NotFound(format!("{entity} not found")))
}
