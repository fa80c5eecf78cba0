//! Feed request/response DTOs for the v1 API.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::error::SkillSwapError;
use crate::feed::{AdvancePolicy, Decision, FeedFilters, FeedPhase, FeedSession, YEAR_LABELS};
use crate::geo::round_for_display;
use crate::models::{Candidate, SwipeDirection, UserId};
use crate::services::DecisionOutcome;

// ---------------------------------------------------------------------------
// Request DTOs
// ---------------------------------------------------------------------------

/// Request body for opening a feed or changing its filters.
///
/// Omitted fields take the server defaults.
#[derive(Debug, Clone, Default, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FeedFiltersRequest {
    /// Academic years to keep, e.g. `["Junior", "Senior"]`. Empty keeps everyone.
    pub years: Option<Vec<String>>,
    pub location_enabled: Option<bool>,
    /// Inclusive radius in kilometres.
    pub max_distance_km: Option<f64>,
}

impl FeedFiltersRequest {
    pub fn into_filters(self, defaults: FeedFilters) -> Result<FeedFilters, SkillSwapError> {
        let max_distance_km = self.max_distance_km.unwrap_or(defaults.max_distance_km);
        if !max_distance_km.is_finite() || max_distance_km < 0.0 {
            return Err(SkillSwapError::Validation(
                "maxDistanceKm must be a non-negative number".to_string(),
            ));
        }

        let years = match self.years {
            Some(years) => years
                .into_iter()
                .map(|y| y.trim().to_string())
                .filter(|y| !y.is_empty())
                .inspect(|y| {
                    if !YEAR_LABELS.contains(&y.as_str()) {
                        tracing::debug!(year = %y, "Filtering on a non-standard year label");
                    }
                })
                .collect::<BTreeSet<_>>(),
            None => defaults.years,
        };

        Ok(FeedFilters {
            years,
            location_enabled: self.location_enabled.unwrap_or(defaults.location_enabled),
            max_distance_km,
        })
    }
}

/// Request body for `POST /v1/feed/{userId}/decisions`.
///
/// Exactly one of `direction` or `dragDx` must be given. A drag that does
/// not clear the swipe threshold decides nothing.
#[derive(Debug, Clone, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DecideRequest {
    pub direction: Option<SwipeDirection>,
    /// Horizontal drag distance at release, in logical pixels. Positive is right.
    pub drag_dx: Option<f64>,
}

// ---------------------------------------------------------------------------
// Response DTOs
// ---------------------------------------------------------------------------

/// A candidate card.
#[derive(Debug, Clone, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CandidateResponse {
    pub id: UserId,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub full_name: String,
    pub email: Option<String>,
    pub university: Option<String>,
    pub major: String,
    pub location: String,
    pub year: Option<String>,
    pub bio: Option<String>,
    pub career_goals: Option<String>,
    pub availability: Option<String>,
    pub linkedin: Option<String>,
    pub github: Option<String>,
    pub portfolio: Option<String>,
    pub profile_id: Option<i64>,
    /// Kilometres from the viewer, to one decimal place.
    pub distance_km: Option<f64>,
    pub photo_url: Option<String>,
}

impl From<&Candidate> for CandidateResponse {
    fn from(candidate: &Candidate) -> Self {
        let profile = candidate.profile.as_ref();

        Self {
            id: candidate.id,
            first_name: candidate.first_name.clone(),
            last_name: candidate.last_name.clone(),
            full_name: candidate.full_name(),
            email: candidate.email.clone(),
            university: candidate.university.clone(),
            major: candidate.major.clone(),
            location: candidate.location.clone(),
            year: candidate.year().map(str::to_owned),
            bio: profile.and_then(|p| p.bio.clone()),
            career_goals: profile.and_then(|p| p.career_goals.clone()),
            availability: profile.and_then(|p| p.availability.clone()),
            linkedin: profile.and_then(|p| p.linkedin.clone()),
            github: profile.and_then(|p| p.github.clone()),
            portfolio: profile.and_then(|p| p.portfolio.clone()),
            profile_id: candidate.profile_id(),
            distance_km: candidate.distance_km.map(round_for_display),
            photo_url: candidate.photo_url.clone(),
        }
    }
}

/// The viewer's feed as it stands.
#[derive(Debug, Clone, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FeedResponse {
    pub user_id: UserId,
    pub phase: FeedPhase,
    pub index: usize,
    /// Candidates left, the current one included.
    pub remaining: usize,
    pub total: usize,
    /// `null` unless the phase is `ready`.
    pub current: Option<CandidateResponse>,
    pub filters: FeedFilters,
    pub policy: AdvancePolicy,
}

impl From<&FeedSession> for FeedResponse {
    fn from(session: &FeedSession) -> Self {
        Self {
            user_id: session.user_id(),
            phase: session.phase(),
            index: session.index(),
            remaining: session.remaining(),
            total: session.candidates().len(),
            current: session.current().map(CandidateResponse::from),
            filters: session.filters().clone(),
            policy: session.policy(),
        }
    }
}

/// A decision the backend accepted.
#[derive(Debug, Clone, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DecisionResponse {
    pub candidate_id: UserId,
    pub direction: SwipeDirection,
    /// Id the backend assigned to the swipe, when it reports one.
    pub swipe_id: Option<i64>,
}

impl From<&Decision> for DecisionResponse {
    fn from(decision: &Decision) -> Self {
        Self {
            candidate_id: decision.candidate.id,
            direction: decision.direction,
            swipe_id: decision.recorded.swipe_id,
        }
    }
}

/// Response body for `POST /v1/feed/{userId}/decisions`.
#[derive(Debug, Clone, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DecideResponse {
    /// `null` when nothing was decided.
    pub decision: Option<DecisionResponse>,
    pub feed: FeedResponse,
}

impl From<&DecisionOutcome> for DecideResponse {
    fn from(outcome: &DecisionOutcome) -> Self {
        Self {
            decision: outcome.decision.as_ref().map(DecisionResponse::from),
            feed: FeedResponse::from(&outcome.session),
        }
    }
}

/// Response body for `DELETE /v1/feed/{userId}`.
#[derive(Debug, Clone, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CloseFeedResponse {
    pub user_id: UserId,
    /// Whether a session existed.
    pub closed: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Profile, User};

    #[test]
    fn omitted_fields_take_defaults() {
        let defaults = FeedFilters {
            max_distance_km: 25.0,
            ..FeedFilters::default()
        };
        let filters = FeedFiltersRequest::default()
            .into_filters(defaults.clone())
            .unwrap();
        assert_eq!(filters, defaults);
    }

    #[test]
    fn blank_years_are_dropped() {
        let req: FeedFiltersRequest =
            serde_json::from_str(r#"{"years":["Junior"," ","Senior"],"locationEnabled":true}"#)
                .unwrap();
        let filters = req.into_filters(FeedFilters::default()).unwrap();
        assert_eq!(filters.years.len(), 2);
        assert!(filters.location_enabled);
        assert_eq!(filters.max_distance_km, 50.0);
    }

    #[test]
    fn negative_radius_is_rejected() {
        let req = FeedFiltersRequest {
            max_distance_km: Some(-1.0),
            ..Default::default()
        };
        assert!(matches!(
            req.into_filters(FeedFilters::default()),
            Err(SkillSwapError::Validation(_))
        ));
    }

    #[test]
    fn decide_request_accepts_either_form() {
        let req: DecideRequest = serde_json::from_str(r#"{"direction":"right"}"#).unwrap();
        assert_eq!(req.direction, Some(SwipeDirection::Like));
        assert!(req.drag_dx.is_none());

        let req: DecideRequest = serde_json::from_str(r#"{"dragDx":-130.5}"#).unwrap();
        assert!(req.direction.is_none());
        assert_eq!(req.drag_dx, Some(-130.5));
    }

    #[test]
    fn candidate_distance_is_rounded_for_display() {
        let mut user = User::new(2);
        user.first_name = Some("Ada".to_string());
        let mut profile = Profile::for_user(2);
        profile.profile_id = Some(9);
        profile.bio = Some("Compilers".to_string());

        let mut candidate = Candidate::merge(&user, Some(&profile));
        candidate.distance_km = Some(12.3456);

        let card = CandidateResponse::from(&candidate);
        assert_eq!(card.distance_km, Some(12.3));
        assert_eq!(card.profile_id, Some(9));
        assert_eq!(card.bio.as_deref(), Some("Compilers"));

        let json = serde_json::to_value(&card).unwrap();
        assert_eq!(json["firstName"], "Ada");
        assert_eq!(json["distanceKm"], 12.3);
    }
}
