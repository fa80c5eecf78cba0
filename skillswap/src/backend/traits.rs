use async_trait::async_trait;

use crate::error::Result;
use crate::models::{Match, NewSwipe, Profile, ProfilePhoto, Swipe, User, UserId};

/// The backend operations the feed depends on.
///
/// Implementations surface failures as-is; nothing here retries.
#[async_trait]
pub trait SkillSwapBackend: Send + Sync {
    async fn list_users(&self) -> Result<Vec<User>>;

    async fn list_profiles(&self) -> Result<Vec<Profile>>;

    /// Swipes made by `swiper_id`.
    async fn list_swipes_by_user(&self, swiper_id: UserId) -> Result<Vec<Swipe>>;

    async fn create_swipe(&self, swipe: &NewSwipe) -> Result<Swipe>;

    async fn list_photos(&self, profile_id: i64) -> Result<Vec<ProfilePhoto>>;

    async fn list_matches(&self) -> Result<Vec<Match>>;

    /// Cheap reachability probe.
    async fn ping(&self) -> Result<()>;
}
