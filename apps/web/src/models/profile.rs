use serde::{Deserialize, Serialize};

/// The signed-in user's profile as returned by `GET /profiles/me`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(flatten)]
    pub details: ProfileUpdate,
}

/// Body of `PUT /profiles/me`. Every field is optional.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProfileUpdate {
    pub full_name: Option<String>,
    pub phone: Option<String>,
    pub location: Option<String>,
    pub bio: Option<String>,
    pub linkedin: Option<String>,
    pub github: Option<String>,
    pub website: Option<String>,
    pub title: Option<String>,
    pub company: Option<String>,
}

impl ProfileUpdate {
    /// Blank form inputs mean "not set".
    pub fn without_blanks(self) -> Self {
        let clean = |v: Option<String>| v.map(|s| s.trim().to_string()).filter(|s| !s.is_empty());
        Self {
            full_name: clean(self.full_name),
            phone: clean(self.phone),
            location: clean(self.location),
            bio: clean(self.bio),
            linkedin: clean(self.linkedin),
            github: clean(self.github),
            website: clean(self.website),
            title: clean(self.title),
            company: clean(self.company),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_profile_flattens_details() {
        let profile: Profile = serde_json::from_value(json!({
            "id": "1",
            "user_id": "u",
            "email": "a@b.c",
            "full_name": "Ada",
            "github": "ada"
        }))
        .unwrap();
        assert_eq!(profile.details.full_name.as_deref(), Some("Ada"));
        assert_eq!(profile.details.github.as_deref(), Some("ada"));
        assert_eq!(profile.details.bio, None);
    }

    #[test]
    fn test_without_blanks() {
        let update = ProfileUpdate {
            full_name: Some("  Ada  ".into()),
            bio: Some("   ".into()),
            ..Default::default()
        }
        .without_blanks();
        assert_eq!(update.full_name.as_deref(), Some("Ada"));
        assert_eq!(update.bio, None);
    }
}
