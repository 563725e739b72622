//! Domain entities - the aggregates and the rules they enforce.

mod post;
mod profile;
mod user;

pub use post::{Comment, Post, PostCommand};
pub use profile::{Education, Experience, Profile, ProfileCommand, SocialLinks};
pub use user::{AuthorSnapshot, PublicUser, User};
