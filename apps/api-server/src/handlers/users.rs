//! User registration handler.

use actix_web::{HttpResponse, web};
use std::sync::Arc;

use devlink_core::ports::TokenService;
use devlink_shared::dto::{AuthResponse, RegisterRequest};

use crate::middleware::error::AppResult;
use crate::state::AppState;

/// POST /api/users - register and receive a login token.
pub async fn register(
    state: web::Data<AppState>,
    token_service: web::Data<Arc<dyn TokenService>>,
    body: web::Json<RegisterRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();

    let account = state
        .accounts
        .register(&req.name, &req.email, &req.password)
        .await?;

    Ok(HttpResponse::Created().json(AuthResponse {
        token: account.token,
        token_type: "Bearer".to_string(),
        expires_in: token_service.expiration_seconds().max(0) as u64,
    }))
}
