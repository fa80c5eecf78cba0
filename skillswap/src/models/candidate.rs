use serde::Serialize;

use super::{Profile, User, UserId};
use crate::geo::Coordinates;

/// A user merged with their profile, eligible for the swipe feed.
///
/// Never persisted; rebuilt on every feed load.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    pub id: UserId,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub university: Option<String>,
    pub major: String,
    pub location: String,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub profile: Option<Profile>,
    /// Unrounded great-circle distance from the viewer.
    pub distance_km: Option<f64>,
    pub photo_url: Option<String>,
}

impl Candidate {
    /// Merge a user with their profile; profile fields win when present.
    pub fn merge(user: &User, profile: Option<&Profile>) -> Self {
        let non_empty = |s: &Option<String>| s.as_ref().filter(|v| !v.is_empty()).cloned();

        let major = profile.and_then(|p| non_empty(&p.major)).unwrap_or_default();
        let location = profile
            .and_then(|p| non_empty(&p.location))
            .or_else(|| non_empty(&user.location))
            .unwrap_or_default();
        let coords = profile
            .and_then(Profile::coordinates)
            .or_else(|| user.coordinates());

        Self {
            id: user.user_id,
            first_name: user.first_name.clone(),
            last_name: user.last_name.clone(),
            email: user.email.clone(),
            university: user.university.clone(),
            major,
            location,
            latitude: coords.map(|c| c.latitude),
            longitude: coords.map(|c| c.longitude),
            profile: profile.cloned(),
            distance_km: None,
            photo_url: None,
        }
    }

    pub fn coordinates(&self) -> Option<Coordinates> {
        Coordinates::from_parts(self.latitude, self.longitude)
    }

    pub fn year(&self) -> Option<&str> {
        self.profile.as_ref().and_then(|p| p.year.as_deref())
    }

    pub fn profile_id(&self) -> Option<i64> {
        self.profile.as_ref().and_then(|p| p.profile_id)
    }

    pub fn full_name(&self) -> String {
        format!(
            "{} {}",
            self.first_name.as_deref().unwrap_or(""),
            self.last_name.as_deref().unwrap_or("")
        )
        .trim()
        .to_string()
    }
}
