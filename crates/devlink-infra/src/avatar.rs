//! Gravatar avatar derivation.

use devlink_core::ports::AvatarGenerator;

/// Derives a Gravatar URI from an email address: md5 of the trimmed,
/// lowercased email, with fixed size/rating/default-image parameters.
#[derive(Debug, Clone)]
pub struct Gravatar {
    size: u16,
    rating: &'static str,
    default_image: &'static str,
}

impl Default for Gravatar {
    fn default() -> Self {
        Self {
            size: 200,
            rating: "pg",
            default_image: "mm",
        }
    }
}

impl AvatarGenerator for Gravatar {
    fn derive(&self, email: &str) -> String {
        let digest = md5::compute(email.trim().to_lowercase().as_bytes());
        format!(
            "https://www.gravatar.com/avatar/{:x}?s={}&r={}&d={}",
            digest, self.size, self.rating, self.default_image
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn derivation_is_deterministic() {
        let gravatar = Gravatar::default();
        assert_eq!(gravatar.derive("ann@x.com"), gravatar.derive("ann@x.com"));
        assert_ne!(gravatar.derive("ann@x.com"), gravatar.derive("bob@x.com"));
    }

    #[test]
    fn email_is_normalized_before_hashing() {
        let gravatar = Gravatar::default();
        assert_eq!(gravatar.derive(" Ann@X.com "), gravatar.derive("ann@x.com"));
    }

    #[test]
    fn uri_carries_the_display_parameters() {
        let uri = Gravatar::default().derive("ann@x.com");
        assert!(uri.starts_with("https://www.gravatar.com/avatar/"));
        assert!(uri.ends_with("?s=200&r=pg&d=mm"));
    }
}
