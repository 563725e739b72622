//! Post handlers: create, browse, like and comment.

use actix_web::{HttpResponse, web};

use devlink_shared::dto::{MessageResponse, TextRequest};

use super::parse_id;
use crate::middleware::auth::Identity;
use crate::middleware::error::AppResult;
use crate::state::AppState;

/// POST /api/posts - create a post as the authenticated user.
pub async fn create(
    state: web::Data<AppState>,
    identity: Identity,
    body: web::Json<TextRequest>,
) -> AppResult<HttpResponse> {
    let post = state.posts.create(identity.user_id, &body.text).await?;
    Ok(HttpResponse::Created().json(post))
}

/// GET /api/posts - all posts, newest first.
pub async fn list(state: web::Data<AppState>, _identity: Identity) -> AppResult<HttpResponse> {
    let posts = state.posts.list().await?;
    Ok(HttpResponse::Ok().json(posts))
}

/// GET /api/posts/{id}
pub async fn get(
    state: web::Data<AppState>,
    _identity: Identity,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let id = parse_id(&path, "post")?;
    let post = state.posts.get(id).await?;
    Ok(HttpResponse::Ok().json(post))
}

/// DELETE /api/posts/{id} - only the post's author may delete it.
pub async fn delete(
    state: web::Data<AppState>,
    identity: Identity,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let id = parse_id(&path, "post")?;
    state.posts.delete(id, identity.user_id).await?;
    Ok(HttpResponse::Ok().json(MessageResponse::new("Post removed")))
}

/// PUT /api/posts/like/{id} - returns the updated like list.
pub async fn like(
    state: web::Data<AppState>,
    identity: Identity,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let id = parse_id(&path, "post")?;
    let likes = state.posts.like(id, identity.user_id).await?;
    Ok(HttpResponse::Ok().json(likes))
}

/// PUT /api/posts/unlike/{id} - returns the updated like list.
pub async fn unlike(
    state: web::Data<AppState>,
    identity: Identity,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let id = parse_id(&path, "post")?;
    let likes = state.posts.unlike(id, identity.user_id).await?;
    Ok(HttpResponse::Ok().json(likes))
}

/// POST /api/posts/comment/{id} - returns the updated comment list.
pub async fn add_comment(
    state: web::Data<AppState>,
    identity: Identity,
    path: web::Path<String>,
    body: web::Json<TextRequest>,
) -> AppResult<HttpResponse> {
    let id = parse_id(&path, "post")?;
    let comments = state
        .posts
        .add_comment(id, identity.user_id, &body.text)
        .await?;
    Ok(HttpResponse::Ok().json(comments))
}

/// DELETE /api/posts/comment/{id}/{comment_id} - only the comment's author.
pub async fn remove_comment(
    state: web::Data<AppState>,
    identity: Identity,
    path: web::Path<(String, String)>,
) -> AppResult<HttpResponse> {
    let (post_raw, comment_raw) = path.into_inner();
    let post_id = parse_id(&post_raw, "post")?;
    let comment_id = parse_id(&comment_raw, "comment")?;
    let comments = state
        .posts
        .remove_comment(post_id, comment_id, identity.user_id)
        .await?;
    Ok(HttpResponse::Ok().json(comments))
}
