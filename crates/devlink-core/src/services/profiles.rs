//! Profile operations: upsert, lookup, and the experience/education
//! sub-record commands.

use std::sync::Arc;

use chrono::NaiveDate;
use serde::Serialize;
use uuid::Uuid;

use crate::domain::{
    AuthorSnapshot, Education, Experience, Profile, ProfileCommand, SocialLinks,
};
use crate::error::DomainError;
use crate::ports::{ProfileRepository, UserRepository};

/// Profile fields as submitted by the owner. Empty or omitted optional
/// fields clear the stored value rather than leaving it stale.
#[derive(Debug, Clone, Default)]
pub struct ProfileFields {
    pub status: String,
    /// Comma-separated skills list.
    pub skills: String,
    pub company: Option<String>,
    pub website: Option<String>,
    pub location: Option<String>,
    pub bio: Option<String>,
    pub github_username: Option<String>,
    pub youtube: Option<String>,
    pub twitter: Option<String>,
    pub instagram: Option<String>,
    pub linkedin: Option<String>,
}

#[derive(Debug, Clone)]
pub struct ExperienceInput {
    pub title: String,
    pub company: String,
    pub location: Option<String>,
    pub from: NaiveDate,
    pub to: Option<NaiveDate>,
    pub current: bool,
    pub description: Option<String>,
}

#[derive(Debug, Clone)]
pub struct EducationInput {
    pub school: String,
    pub degree: String,
    pub field_of_study: String,
    pub from: NaiveDate,
    pub to: Option<NaiveDate>,
    pub current: bool,
    pub description: Option<String>,
}

/// A profile joined with the public fields of its owner.
#[derive(Debug, Clone, Serialize)]
pub struct ProfileView {
    pub owner: AuthorSnapshot,
    #[serde(flatten)]
    pub profile: Profile,
}

pub struct ProfileService {
    profiles: Arc<dyn ProfileRepository>,
    users: Arc<dyn UserRepository>,
}

impl ProfileService {
    pub fn new(profiles: Arc<dyn ProfileRepository>, users: Arc<dyn UserRepository>) -> Self {
        Self { profiles, users }
    }

    /// Create the profile for `user_id`, or replace its fields if one
    /// exists. Experience and education survive an upsert untouched.
    pub async fn upsert(
        &self,
        user_id: Uuid,
        fields: ProfileFields,
    ) -> Result<Profile, DomainError> {
        if fields.status.trim().is_empty() {
            return Err(DomainError::Validation("status is required".into()));
        }
        let skills = Profile::parse_skills(&fields.skills);
        if skills.is_empty() {
            return Err(DomainError::Validation("skills is required".into()));
        }

        let mut profile = self
            .profiles
            .find_by_user(user_id)
            .await
            .map_err(|e| DomainError::storage("look up profile", e))?
            .unwrap_or_else(|| Profile::new(user_id, String::new(), Vec::new()));

        profile.status = fields.status.trim().to_string();
        profile.skills = skills;
        profile.company = clean(fields.company);
        profile.website = clean(fields.website);
        profile.location = clean(fields.location);
        profile.bio = clean(fields.bio);
        profile.github_username = clean(fields.github_username);
        profile.social = SocialLinks {
            youtube: clean(fields.youtube),
            twitter: clean(fields.twitter),
            instagram: clean(fields.instagram),
            linkedin: clean(fields.linkedin),
        };

        self.profiles
            .upsert(profile)
            .await
            .map_err(|e| DomainError::storage("save profile", e))
    }

    pub async fn get_by_user(&self, user_id: Uuid) -> Result<ProfileView, DomainError> {
        let profile = self
            .profiles
            .find_by_user(user_id)
            .await
            .map_err(|e| DomainError::storage("look up profile", e))?
            .ok_or(DomainError::not_found("profile"))?;
        self.with_owner(profile).await
    }

    /// All profiles, each joined with its owner's public name and avatar.
    pub async fn list(&self) -> Result<Vec<ProfileView>, DomainError> {
        let profiles = self
            .profiles
            .list_all()
            .await
            .map_err(|e| DomainError::storage("list profiles", e))?;

        let mut views = Vec::with_capacity(profiles.len());
        for profile in profiles {
            match self.with_owner(profile).await {
                Ok(view) => views.push(view),
                // Cascade deletion makes this unreachable in practice;
                // skip rather than fail the whole listing.
                Err(DomainError::NotFound { .. }) => continue,
                Err(e) => return Err(e),
            }
        }
        Ok(views)
    }

    pub async fn add_experience(
        &self,
        user_id: Uuid,
        input: ExperienceInput,
    ) -> Result<Profile, DomainError> {
        if input.title.trim().is_empty() || input.company.trim().is_empty() {
            return Err(DomainError::Validation(
                "title and company are required".into(),
            ));
        }
        let entry = Experience {
            id: Uuid::new_v4(),
            title: input.title,
            company: input.company,
            location: clean(input.location),
            from: input.from,
            to: input.to,
            current: input.current,
            description: clean(input.description),
        };
        self.profiles
            .apply(user_id, ProfileCommand::AddExperience(entry))
            .await
    }

    pub async fn remove_experience(
        &self,
        user_id: Uuid,
        entry_id: Uuid,
    ) -> Result<Profile, DomainError> {
        self.profiles
            .apply(user_id, ProfileCommand::RemoveExperience { entry_id })
            .await
    }

    pub async fn add_education(
        &self,
        user_id: Uuid,
        input: EducationInput,
    ) -> Result<Profile, DomainError> {
        if input.school.trim().is_empty()
            || input.degree.trim().is_empty()
            || input.field_of_study.trim().is_empty()
        {
            return Err(DomainError::Validation(
                "school, degree and field of study are required".into(),
            ));
        }
        let entry = Education {
            id: Uuid::new_v4(),
            school: input.school,
            degree: input.degree,
            field_of_study: input.field_of_study,
            from: input.from,
            to: input.to,
            current: input.current,
            description: clean(input.description),
        };
        self.profiles
            .apply(user_id, ProfileCommand::AddEducation(entry))
            .await
    }

    pub async fn remove_education(
        &self,
        user_id: Uuid,
        entry_id: Uuid,
    ) -> Result<Profile, DomainError> {
        self.profiles
            .apply(user_id, ProfileCommand::RemoveEducation { entry_id })
            .await
    }

    async fn with_owner(&self, profile: Profile) -> Result<ProfileView, DomainError> {
        let owner = self
            .users
            .find_by_id(profile.user_id)
            .await
            .map_err(|e| DomainError::storage("look up profile owner", e))?
            .ok_or(DomainError::not_found("user"))?;
        Ok(ProfileView {
            owner: AuthorSnapshot::from(&owner),
            profile,
        })
    }
}

fn clean(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
