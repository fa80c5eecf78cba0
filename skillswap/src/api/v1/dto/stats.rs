use serde::Serialize;

use crate::models::UserId;

/// Response body for `GET /v1/users/{userId}/stats`.
#[derive(Debug, Clone, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct StatsResponse {
    pub user_id: UserId,
    /// Matches the user is part of.
    pub total_matches: usize,
}
