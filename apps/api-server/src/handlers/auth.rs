//! Authentication handlers.

use actix_web::{HttpResponse, web};
use std::sync::Arc;

use devlink_core::ports::TokenService;
use devlink_shared::dto::{AuthResponse, LoginRequest};

use crate::middleware::auth::Identity;
use crate::middleware::error::AppResult;
use crate::state::AppState;

/// POST /api/auth - verify credentials and get a token.
pub async fn login(
    state: web::Data<AppState>,
    token_service: web::Data<Arc<dyn TokenService>>,
    body: web::Json<LoginRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();

    let token = state.accounts.authenticate(&req.email, &req.password).await?;

    Ok(HttpResponse::Ok().json(AuthResponse {
        token,
        token_type: "Bearer".to_string(),
        expires_in: token_service.expiration_seconds().max(0) as u64,
    }))
}

/// GET /api/auth - the authenticated user, without the password hash.
pub async fn current_user(
    state: web::Data<AppState>,
    identity: Identity,
) -> AppResult<HttpResponse> {
    let user = state.accounts.get_by_id(identity.user_id).await?;
    Ok(HttpResponse::Ok().json(user))
}
