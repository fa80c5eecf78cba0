use std::collections::{BTreeSet, HashMap, HashSet};

use serde::{Deserialize, Serialize};

use crate::geo::{self, Coordinates};
use crate::models::{Candidate, Profile, Swipe, User, UserId};

/// Year labels offered by the clients. Filters accept any label.
pub const YEAR_LABELS: &[&str] = &[
    "Freshman",
    "Sophomore",
    "Junior",
    "Senior",
    "Graduate",
    "Faculty",
];

fn default_max_distance_km() -> f64 {
    50.0
}

/// Filter configuration chosen by the viewer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FeedFilters {
    /// Academic years to keep. Empty keeps everyone.
    #[serde(default)]
    pub years: BTreeSet<String>,
    #[serde(default)]
    pub location_enabled: bool,
    /// Inclusive radius, only applied when `location_enabled` is set.
    #[serde(default = "default_max_distance_km")]
    pub max_distance_km: f64,
}

impl Default for FeedFilters {
    fn default() -> Self {
        Self {
            years: BTreeSet::new(),
            location_enabled: false,
            max_distance_km: default_max_distance_km(),
        }
    }
}

/// Backend state the feed is computed from.
#[derive(Debug, Clone, Default)]
pub struct FeedSnapshot {
    pub users: Vec<User>,
    pub profiles: Vec<Profile>,
    /// Swipes made by the viewer.
    pub swipes: Vec<Swipe>,
}

/// Build the viewer's candidate list.
///
/// Drops the viewer and everyone they already swiped on, merges profiles,
/// annotates distances, then applies the year and location filters. The
/// order of `snapshot.users` is preserved.
pub fn build_candidates(
    snapshot: &FeedSnapshot,
    current_user_id: UserId,
    filters: &FeedFilters,
) -> Vec<Candidate> {
    let swiped: HashSet<UserId> = snapshot.swipes.iter().filter_map(Swipe::swipee_id).collect();

    let mut profiles_by_user: HashMap<UserId, &Profile> = HashMap::new();
    for profile in &snapshot.profiles {
        if let Some(owner) = profile.owner_id() {
            profiles_by_user.entry(owner).or_insert(profile);
        }
    }

    let viewer = viewer_coordinates(snapshot, current_user_id, &profiles_by_user);

    snapshot
        .users
        .iter()
        .filter(|user| user.user_id != current_user_id && !swiped.contains(&user.user_id))
        .map(|user| {
            let mut candidate =
                Candidate::merge(user, profiles_by_user.get(&user.user_id).copied());
            if let (Some(from), Some(to)) = (viewer, candidate.coordinates()) {
                candidate.distance_km = Some(geo::haversine_km(from, to));
            }
            candidate
        })
        .filter(|candidate| matches_years(candidate, &filters.years))
        .filter(|candidate| {
            !filters.location_enabled
                || candidate
                    .distance_km
                    .is_some_and(|d| d <= filters.max_distance_km)
        })
        .collect()
}

fn viewer_coordinates(
    snapshot: &FeedSnapshot,
    current_user_id: UserId,
    profiles_by_user: &HashMap<UserId, &Profile>,
) -> Option<Coordinates> {
    profiles_by_user
        .get(&current_user_id)
        .and_then(|p| p.coordinates())
        .or_else(|| {
            snapshot
                .users
                .iter()
                .find(|u| u.user_id == current_user_id)
                .and_then(User::coordinates)
        })
}

fn matches_years(candidate: &Candidate, years: &BTreeSet<String>) -> bool {
    if years.is_empty() {
        return true;
    }
    // No profile means no year, which never matches a non-empty set.
    candidate.year().is_some_and(|year| years.contains(year))
}
