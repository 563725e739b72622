use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::DomainError;

/// Profile aggregate - one per user, keyed by the owning user id.
///
/// Experience and education entries are owned sub-records: prepended on add,
/// removed by id, and gone when the profile goes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub user_id: Uuid,
    pub status: String,
    pub skills: Vec<String>,
    pub company: Option<String>,
    pub website: Option<String>,
    pub location: Option<String>,
    pub bio: Option<String>,
    pub github_username: Option<String>,
    pub social: SocialLinks,
    /// Newest first.
    pub experience: Vec<Experience>,
    /// Newest first.
    pub education: Vec<Education>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialLinks {
    pub youtube: Option<String>,
    pub twitter: Option<String>,
    pub instagram: Option<String>,
    pub linkedin: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Experience {
    pub id: Uuid,
    pub title: String,
    pub company: String,
    pub location: Option<String>,
    pub from: NaiveDate,
    pub to: Option<NaiveDate>,
    pub current: bool,
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Education {
    pub id: Uuid,
    pub school: String,
    pub degree: String,
    pub field_of_study: String,
    pub from: NaiveDate,
    pub to: Option<NaiveDate>,
    pub current: bool,
    pub description: Option<String>,
}

/// A mutation applied atomically to a stored profile, keyed by user id.
#[derive(Debug, Clone)]
pub enum ProfileCommand {
    AddExperience(Experience),
    RemoveExperience { entry_id: Uuid },
    AddEducation(Education),
    RemoveEducation { entry_id: Uuid },
}

impl Profile {
    pub fn new(user_id: Uuid, status: String, skills: Vec<String>) -> Self {
        Self {
            user_id,
            status,
            skills,
            company: None,
            website: None,
            location: None,
            bio: None,
            github_username: None,
            social: SocialLinks::default(),
            experience: Vec::new(),
            education: Vec::new(),
        }
    }

    /// Parse a comma-separated skills string into a trimmed ordered list.
    pub fn parse_skills(raw: &str) -> Vec<String> {
        raw.split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(String::from)
            .collect()
    }

    pub fn apply(&mut self, command: ProfileCommand) -> Result<(), DomainError> {
        match command {
            ProfileCommand::AddExperience(entry) => {
                self.experience.insert(0, entry);
                Ok(())
            }
            ProfileCommand::RemoveExperience { entry_id } => {
                let index = self
                    .experience
                    .iter()
                    .position(|e| e.id == entry_id)
                    .ok_or(DomainError::not_found("experience"))?;
                self.experience.remove(index);
                Ok(())
            }
            ProfileCommand::AddEducation(entry) => {
                self.education.insert(0, entry);
                Ok(())
            }
            ProfileCommand::RemoveEducation { entry_id } => {
                let index = self
                    .education
                    .iter()
                    .position(|e| e.id == entry_id)
                    .ok_or(DomainError::not_found("education"))?;
                self.education.remove(index);
                Ok(())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn experience(title: &str) -> Experience {
        Experience {
            id: Uuid::new_v4(),
            title: title.to_string(),
            company: "Acme".to_string(),
            location: None,
            from: NaiveDate::from_ymd_opt(2020, 1, 1).unwrap(),
            to: None,
            current: true,
            description: None,
        }
    }

    #[test]
    fn skills_are_split_and_trimmed() {
        let skills = Profile::parse_skills("rust, sql ,, http ");
        assert_eq!(skills, vec!["rust", "sql", "http"]);
    }

    #[test]
    fn experience_is_prepended_and_removed_by_id() {
        let mut profile = Profile::new(Uuid::new_v4(), "dev".to_string(), vec![]);
        let older = experience("older");
        let newer = experience("newer");
        let older_id = older.id;

        profile.apply(ProfileCommand::AddExperience(older)).unwrap();
        profile.apply(ProfileCommand::AddExperience(newer)).unwrap();
        assert_eq!(profile.experience[0].title, "newer");

        profile
            .apply(ProfileCommand::RemoveExperience { entry_id: older_id })
            .unwrap();
        assert_eq!(profile.experience.len(), 1);
        assert_eq!(profile.experience[0].title, "newer");
    }

    #[test]
    fn removing_a_missing_entry_is_not_found() {
        let mut profile = Profile::new(Uuid::new_v4(), "dev".to_string(), vec![]);
        let result = profile.apply(ProfileCommand::RemoveEducation {
            entry_id: Uuid::new_v4(),
        });
        assert!(matches!(
            result,
            Err(DomainError::NotFound {
                entity: "education"
            })
        ));
    }
}
