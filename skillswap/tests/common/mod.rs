// Shared fixtures for integration tests
#![allow(dead_code)]

use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicI64, AtomicUsize, Ordering};
use std::sync::{Mutex, Once};

use async_trait::async_trait;

use skillswap::backend::SkillSwapBackend;
use skillswap::error::{Result, SkillSwapError};
use skillswap::models::{
    Match, NewSwipe, Profile, ProfilePhoto, Swipe, User, UserId, UserRef,
};

static INIT: Once = Once::new();

/// Initialize tracing subscriber once for tests
pub fn init_test_logger() {
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .try_init();
    });
}

pub fn user(id: UserId, first_name: &str) -> User {
    User {
        first_name: Some(first_name.to_string()),
        last_name: Some("Tester".to_string()),
        email: Some(format!("{}@uni.edu", first_name.to_lowercase())),
        university: Some("State University".to_string()),
        ..User::new(id)
    }
}

pub fn user_at(id: UserId, first_name: &str, latitude: f64, longitude: f64) -> User {
    User {
        latitude: Some(latitude),
        longitude: Some(longitude),
        ..user(id, first_name)
    }
}

pub fn profile(profile_id: i64, user_id: UserId, year: &str) -> Profile {
    Profile {
        profile_id: Some(profile_id),
        year: Some(year.to_string()),
        major: Some("Computer Science".to_string()),
        ..Profile::for_user(user_id)
    }
}

pub fn photo(photo_id: i64, url: &str, is_primary: bool) -> ProfilePhoto {
    ProfilePhoto {
        photo_id: Some(photo_id),
        photo_url: Some(url.to_string()),
        is_primary: Some(is_primary),
        uploaded_at: None,
    }
}

pub fn recorded_swipe(swiper: UserId, swipee: UserId, is_like: bool) -> Swipe {
    Swipe {
        swipe_id: None,
        swiper: Some(UserRef::new(swiper)),
        swipee: Some(UserRef::new(swipee)),
        is_like,
        swiped_at: None,
    }
}

/// Backend operations that can be made to fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Op {
    Users,
    Profiles,
    Swipes,
    CreateSwipe,
    Photos,
    Matches,
}

/// In-memory backend that behaves like the SkillSwap REST service.
///
/// Reciprocal likes create a match, as the real backend does.
#[derive(Default)]
pub struct FakeBackend {
    pub users: Mutex<Vec<User>>,
    pub profiles: Mutex<Vec<Profile>>,
    pub swipes: Mutex<Vec<Swipe>>,
    pub photos: Mutex<HashMap<i64, Vec<ProfilePhoto>>>,
    pub matches: Mutex<Vec<Match>>,
    failing: Mutex<HashSet<Op>>,
    failing_photos: Mutex<HashSet<i64>>,
    next_id: AtomicI64,
    pub create_swipe_calls: AtomicUsize,
}

impl FakeBackend {
    pub fn new(users: Vec<User>, profiles: Vec<Profile>) -> Self {
        Self {
            users: Mutex::new(users),
            profiles: Mutex::new(profiles),
            next_id: AtomicI64::new(1),
            ..Default::default()
        }
    }

    pub fn with_swipes(self, swipes: Vec<Swipe>) -> Self {
        *self.swipes.lock().unwrap() = swipes;
        self
    }

    pub fn with_photos(self, profile_id: i64, photos: Vec<ProfilePhoto>) -> Self {
        self.photos.lock().unwrap().insert(profile_id, photos);
        self
    }

    pub fn with_matches(self, matches: Vec<Match>) -> Self {
        *self.matches.lock().unwrap() = matches;
        self
    }

    pub fn fail(&self, op: Op) {
        self.failing.lock().unwrap().insert(op);
    }

    pub fn recover(&self, op: Op) {
        self.failing.lock().unwrap().remove(&op);
    }

    pub fn fail_photos_for(&self, profile_id: i64) {
        self.failing_photos.lock().unwrap().insert(profile_id);
    }

    pub fn recorded_swipes(&self) -> Vec<Swipe> {
        self.swipes.lock().unwrap().clone()
    }

    fn check(&self, op: Op) -> Result<()> {
        if self.failing.lock().unwrap().contains(&op) {
            return Err(SkillSwapError::Upstream {
                status: 500,
                message: format!("{op:?} unavailable"),
            });
        }
        Ok(())
    }

    fn id(&self) -> i64 {
        self.next_id.fetch_add(1, Ordering::SeqCst).max(1)
    }
}

#[async_trait]
impl SkillSwapBackend for FakeBackend {
    async fn list_users(&self) -> Result<Vec<User>> {
        self.check(Op::Users)?;
        Ok(self.users.lock().unwrap().clone())
    }

    async fn list_profiles(&self) -> Result<Vec<Profile>> {
        self.check(Op::Profiles)?;
        Ok(self.profiles.lock().unwrap().clone())
    }

    async fn list_swipes_by_user(&self, swiper_id: UserId) -> Result<Vec<Swipe>> {
        self.check(Op::Swipes)?;
        Ok(self
            .swipes
            .lock()
            .unwrap()
            .iter()
            .filter(|s| s.swiper.and_then(|u| u.user_id) == Some(swiper_id))
            .cloned()
            .collect())
    }

    async fn create_swipe(&self, swipe: &NewSwipe) -> Result<Swipe> {
        self.create_swipe_calls.fetch_add(1, Ordering::SeqCst);
        self.check(Op::CreateSwipe)?;

        let recorded = Swipe {
            swipe_id: Some(self.id()),
            swiper: Some(swipe.swiper),
            swipee: Some(swipe.swipee),
            is_like: swipe.is_like,
            swiped_at: None,
        };

        let mut swipes = self.swipes.lock().unwrap();
        let reciprocal = swipe.is_like
            && swipes.iter().any(|s| {
                s.is_like && s.swiper == Some(swipe.swipee) && s.swipee == Some(swipe.swiper)
            });
        swipes.push(recorded.clone());
        drop(swipes);

        if reciprocal {
            self.matches.lock().unwrap().push(Match {
                match_id: Some(self.id()),
                user1: Some(swipe.swipee),
                user2: Some(swipe.swiper),
                matched_at: None,
                is_active: Some(true),
            });
        }

        Ok(recorded)
    }

    async fn list_photos(&self, profile_id: i64) -> Result<Vec<ProfilePhoto>> {
        self.check(Op::Photos)?;
        if self.failing_photos.lock().unwrap().contains(&profile_id) {
            return Err(SkillSwapError::Upstream {
                status: 404,
                message: format!("no photos for profile {profile_id}"),
            });
        }
        Ok(self
            .photos
            .lock()
            .unwrap()
            .get(&profile_id)
            .cloned()
            .unwrap_or_default())
    }

    async fn list_matches(&self) -> Result<Vec<Match>> {
        self.check(Op::Matches)?;
        Ok(self.matches.lock().unwrap().clone())
    }

    async fn ping(&self) -> Result<()> {
        self.check(Op::Users)
    }
}
