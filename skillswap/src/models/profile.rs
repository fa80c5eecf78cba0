use serde::{Deserialize, Serialize};

use super::{UserId, UserRef};
use crate::geo::Coordinates;

/// One-to-one extension of a [`User`](super::User). May not exist yet for new users.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    #[serde(default)]
    pub profile_id: Option<i64>,
    #[serde(default)]
    pub user: Option<UserRef>,
    /// Flat owner id, for payloads that do not nest the user.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<UserId>,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub latitude: Option<f64>,
    #[serde(default)]
    pub longitude: Option<f64>,
    #[serde(default)]
    pub show_location: Option<bool>,
    #[serde(default)]
    pub major: Option<String>,
    #[serde(default)]
    pub year: Option<String>,
    #[serde(default)]
    pub career_goals: Option<String>,
    #[serde(default)]
    pub availability: Option<String>,
    #[serde(default)]
    pub linkedin: Option<String>,
    #[serde(default)]
    pub github: Option<String>,
    #[serde(default)]
    pub portfolio: Option<String>,
}

impl Profile {
    pub fn for_user(user_id: UserId) -> Self {
        Self {
            user: Some(UserRef::new(user_id)),
            ..Default::default()
        }
    }

    /// Id of the user this profile belongs to.
    pub fn owner_id(&self) -> Option<UserId> {
        self.user.and_then(|u| u.user_id).or(self.user_id)
    }

    pub fn coordinates(&self) -> Option<Coordinates> {
        Coordinates::from_parts(self.latitude, self.longitude)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn owner_id_prefers_nested_user() {
        let json = r#"{"profileId": 1, "user": {"userId": 5}, "year": "Junior"}"#;
        let profile: Profile = serde_json::from_str(json).expect("deserialize");
        assert_eq!(profile.owner_id(), Some(5));
        assert_eq!(profile.year.as_deref(), Some("Junior"));
    }

    #[test]
    fn owner_id_falls_back_to_flat_field() {
        let json = r#"{"profileId": 2, "userId": 6}"#;
        let profile: Profile = serde_json::from_str(json).expect("deserialize");
        assert_eq!(profile.owner_id(), Some(6));
    }

    #[test]
    fn half_coordinates_are_unknown() {
        let profile = Profile {
            latitude: Some(40.0),
            ..Profile::for_user(1)
        };
        assert!(profile.coordinates().is_none());
    }
}
