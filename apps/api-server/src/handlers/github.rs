//! Github repository pass-through with a short-lived cache in front.

use std::time::Duration;

use actix_web::{HttpResponse, web};
use reqwest::header::USER_AGENT;

use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

const CACHE_TTL: Duration = Duration::from_secs(300);

/// GET /api/profile/github/{username} - the user's five most recent
/// public repositories, as github returns them.
pub async fn repos(state: web::Data<AppState>, path: web::Path<String>) -> AppResult<HttpResponse> {
    let username = path.into_inner();
    let cache_key = format!("github:repos:{username}");

    if let Some(cached) = state.cache.get(&cache_key).await {
        tracing::debug!(%username, "github repos served from cache");
        return Ok(HttpResponse::Ok()
            .content_type("application/json")
            .body(cached));
    }

    let url = format!("https://api.github.com/users/{username}/repos");
    let mut query: Vec<(&str, String)> = vec![
        ("per_page", "5".to_string()),
        ("sort", "created:asc".to_string()),
    ];
    if let (Some(id), Some(secret)) = (&state.github.client_id, &state.github.client_secret) {
        query.push(("client_id", id.clone()));
        query.push(("client_secret", secret.clone()));
    }

    let response = state
        .http
        .get(&url)
        .query(&query)
        .header(USER_AGENT, "devlink-api")
        .send()
        .await
        .map_err(|e| {
            tracing::error!(%username, error = %e, "github request failed");
            AppError::Internal("github request failed".to_string())
        })?;

    if !response.status().is_success() {
        return Err(AppError::NotFound("no github profile found".to_string()));
    }

    let body = response.text().await.map_err(|e| {
        tracing::error!(%username, error = %e, "failed to read github response");
        AppError::Internal("github request failed".to_string())
    })?;

    // Cache failures only cost the next caller a round trip.
    let _ = state.cache.set(&cache_key, &body, Some(CACHE_TTL)).await;

    Ok(HttpResponse::Ok()
        .content_type("application/json")
        .body(body))
}
