//! Profile entity for SeaORM, keyed by the owning user id.

use sea_orm::entity::prelude::*;
use sea_orm::{FromJsonQueryResult, Set};
use serde::{Deserialize, Serialize};

use devlink_core::domain::{Education, Experience, Profile, SocialLinks};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, FromJsonQueryResult)]
pub struct SkillsColumn(pub Vec<String>);

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, FromJsonQueryResult)]
pub struct SocialColumn(pub SocialLinks);

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, FromJsonQueryResult)]
pub struct ExperienceColumn(pub Vec<Experience>);

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, FromJsonQueryResult)]
pub struct EducationColumn(pub Vec<Education>);

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "profiles")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub user_id: Uuid,
    pub status: String,
    #[sea_orm(column_type = "JsonBinary")]
    pub skills: SkillsColumn,
    pub company: Option<String>,
    pub website: Option<String>,
    pub location: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub bio: Option<String>,
    pub github_username: Option<String>,
    #[sea_orm(column_type = "JsonBinary")]
    pub social: SocialColumn,
    #[sea_orm(column_type = "JsonBinary")]
    pub experience: ExperienceColumn,
    #[sea_orm(column_type = "JsonBinary")]
    pub education: EducationColumn,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::UserId",
        to = "super::user::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    User,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Profile {
    fn from(model: Model) -> Self {
        Self {
            user_id: model.user_id,
            status: model.status,
            skills: model.skills.0,
            company: model.company,
            website: model.website,
            location: model.location,
            bio: model.bio,
            github_username: model.github_username,
            social: model.social.0,
            experience: model.experience.0,
            education: model.education.0,
        }
    }
}

impl From<Profile> for ActiveModel {
    fn from(profile: Profile) -> Self {
        Self {
            user_id: Set(profile.user_id),
            status: Set(profile.status),
            skills: Set(SkillsColumn(profile.skills)),
            company: Set(profile.company),
            website: Set(profile.website),
            location: Set(profile.location),
            bio: Set(profile.bio),
            github_username: Set(profile.github_username),
            social: Set(SocialColumn(profile.social)),
            experience: Set(ExperienceColumn(profile.experience)),
            education: Set(EducationColumn(profile.education)),
        }
    }
}
