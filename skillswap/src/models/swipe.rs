use std::fmt;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::{UserId, UserRef};
use crate::error::{Result, SkillSwapError};

/// A recorded like/pass decision, as returned by `GET /api/swipes/user/{id}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Swipe {
    #[serde(default)]
    pub swipe_id: Option<i64>,
    #[serde(default)]
    pub swiper: Option<UserRef>,
    #[serde(default)]
    pub swipee: Option<UserRef>,
    #[serde(default)]
    pub is_like: bool,
    #[serde(default)]
    pub swiped_at: Option<NaiveDateTime>,
}

impl Swipe {
    pub fn swipee_id(&self) -> Option<UserId> {
        self.swipee.and_then(|u| u.user_id)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum SwipeDirection {
    #[serde(alias = "right")]
    Like,
    #[serde(alias = "left")]
    Pass,
}

impl SwipeDirection {
    pub fn is_like(self) -> bool {
        matches!(self, SwipeDirection::Like)
    }
}

impl fmt::Display for SwipeDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SwipeDirection::Like => write!(f, "like"),
            SwipeDirection::Pass => write!(f, "pass"),
        }
    }
}

/// Payload for `POST /api/swipes`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewSwipe {
    pub swiper: UserRef,
    pub swipee: UserRef,
    pub is_like: bool,
}

impl NewSwipe {
    pub fn new(swiper_id: UserId, swipee_id: UserId, direction: SwipeDirection) -> Self {
        Self {
            swiper: UserRef::new(swiper_id),
            swipee: UserRef::new(swipee_id),
            is_like: direction.is_like(),
        }
    }

    /// Reject payloads the backend cannot attribute to two distinct users.
    pub fn validate(&self) -> Result<()> {
        let swiper = self
            .swiper
            .user_id
            .filter(|id| *id > 0)
            .ok_or_else(|| SkillSwapError::Validation("Swipe is missing a swiper id".into()))?;
        let swipee = self
            .swipee
            .user_id
            .filter(|id| *id > 0)
            .ok_or_else(|| SkillSwapError::Validation("Swipe is missing a swipee id".into()))?;

        if swiper == swipee {
            return Err(SkillSwapError::Validation(
                "A user cannot swipe on themselves".into(),
            ));
        }
        Ok(())
    }
}
