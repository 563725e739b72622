//! Service layer - the query/command surface exposed to the HTTP boundary.
//!
//! Plain async calls taking already-authenticated identity and validated
//! input; no HTTP types appear here.

mod accounts;
mod posts;
mod profiles;

pub use accounts::{AccountService, RegisteredAccount};
pub use posts::PostService;
pub use profiles::{
    EducationInput, ExperienceInput, ProfileFields, ProfileService, ProfileView,
};
