pub mod feed;
pub(crate) mod health;
pub mod stats;

pub use health::health_check;

use crate::error::SkillSwapError;
use crate::models::UserId;

/// Backend user ids are positive.
fn check_user_id(user_id: UserId) -> Result<(), SkillSwapError> {
    if user_id <= 0 {
        return Err(SkillSwapError::Validation(format!(
            "userId must be positive, got {user_id}"
        )));
    }
    Ok(())
}
