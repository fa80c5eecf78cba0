use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::{UserId, UserRef};

/// Backend-created record for a pair of reciprocal likes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Match {
    #[serde(default)]
    pub match_id: Option<i64>,
    #[serde(default)]
    pub user1: Option<UserRef>,
    #[serde(default)]
    pub user2: Option<UserRef>,
    #[serde(default)]
    pub matched_at: Option<NaiveDateTime>,
    #[serde(default)]
    pub is_active: Option<bool>,
}

impl Match {
    pub fn involves(&self, user_id: UserId) -> bool {
        [self.user1, self.user2]
            .iter()
            .flatten()
            .any(|u| u.user_id == Some(user_id))
    }
}
