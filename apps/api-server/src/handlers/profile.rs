//! Profile handlers: ownership, browsing, and career sub-records.

use actix_web::{HttpResponse, web};

use devlink_core::services::{EducationInput, ExperienceInput, ProfileFields};
use devlink_shared::dto::{
    EducationRequest, ExperienceRequest, MessageResponse, ProfileRequest,
};

use super::parse_id;
use crate::middleware::auth::Identity;
use crate::middleware::error::AppResult;
use crate::state::AppState;

/// GET /api/profile/me - the authenticated user's profile.
pub async fn me(state: web::Data<AppState>, identity: Identity) -> AppResult<HttpResponse> {
    let view = state.profiles.get_by_user(identity.user_id).await?;
    Ok(HttpResponse::Ok().json(view))
}

/// POST /api/profile - create the caller's profile or replace its fields.
pub async fn upsert(
    state: web::Data<AppState>,
    identity: Identity,
    body: web::Json<ProfileRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();
    let fields = ProfileFields {
        status: req.status,
        skills: req.skills,
        company: req.company,
        website: req.website,
        location: req.location,
        bio: req.bio,
        github_username: req.github_username,
        youtube: req.youtube,
        twitter: req.twitter,
        instagram: req.instagram,
        linkedin: req.linkedin,
    };
    let profile = state.profiles.upsert(identity.user_id, fields).await?;
    Ok(HttpResponse::Ok().json(profile))
}

/// GET /api/profile - all profiles, joined with owner name and avatar.
pub async fn list(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let views = state.profiles.list().await?;
    Ok(HttpResponse::Ok().json(views))
}

/// GET /api/profile/user/{user_id} - a single profile by its owner.
pub async fn by_user(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let user_id = parse_id(&path, "profile")?;
    let view = state.profiles.get_by_user(user_id).await?;
    Ok(HttpResponse::Ok().json(view))
}

/// DELETE /api/profile - remove the caller's profile, posts and account.
pub async fn delete_account(
    state: web::Data<AppState>,
    identity: Identity,
) -> AppResult<HttpResponse> {
    state.accounts.delete_account(identity.user_id).await?;
    Ok(HttpResponse::Ok().json(MessageResponse::new("User removed")))
}

/// PUT /api/profile/experience - prepend a work-history entry.
pub async fn add_experience(
    state: web::Data<AppState>,
    identity: Identity,
    body: web::Json<ExperienceRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();
    let input = ExperienceInput {
        title: req.title,
        company: req.company,
        location: req.location,
        from: req.from,
        to: req.to,
        current: req.current,
        description: req.description,
    };
    let profile = state
        .profiles
        .add_experience(identity.user_id, input)
        .await?;
    Ok(HttpResponse::Ok().json(profile))
}

/// DELETE /api/profile/experience/{exp_id}
pub async fn remove_experience(
    state: web::Data<AppState>,
    identity: Identity,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let entry_id = parse_id(&path, "experience entry")?;
    let profile = state
        .profiles
        .remove_experience(identity.user_id, entry_id)
        .await?;
    Ok(HttpResponse::Ok().json(profile))
}

/// PUT /api/profile/education - prepend an education entry.
pub async fn add_education(
    state: web::Data<AppState>,
    identity: Identity,
    body: web::Json<EducationRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();
    let input = EducationInput {
        school: req.school,
        degree: req.degree,
        field_of_study: req.field_of_study,
        from: req.from,
        to: req.to,
        current: req.current,
        description: req.description,
    };
    let profile = state
        .profiles
        .add_education(identity.user_id, input)
        .await?;
    Ok(HttpResponse::Ok().json(profile))
}

/// DELETE /api/profile/education/{edu_id}
pub async fn remove_education(
    state: web::Data<AppState>,
    identity: Identity,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let entry_id = parse_id(&path, "education entry")?;
    let profile = state
        .profiles
        .remove_education(identity.user_id, entry_id)
        .await?;
    Ok(HttpResponse::Ok().json(profile))
}
