use lru::LruCache;
use std::num::NonZeroUsize;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::feed::FeedSession;
use crate::models::UserId;

/// A session shared between requests. Decisions hold the lock across the
/// backend call so a viewer's swipes are applied one at a time.
pub type SharedSession = Arc<tokio::sync::Mutex<FeedSession>>;

/// Bounded map of live feed sessions, keyed by viewer.
///
/// The least recently used session is evicted once `capacity` is reached;
/// an evicted viewer simply opens a new feed.
#[derive(Clone)]
pub struct SessionRegistry {
    sessions: Arc<Mutex<LruCache<UserId, SharedSession>>>,
}

impl SessionRegistry {
    pub fn new(capacity: usize) -> Self {
        let capacity = NonZeroUsize::new(capacity).unwrap_or(NonZeroUsize::MIN);
        Self {
            sessions: Arc::new(Mutex::new(LruCache::new(capacity))),
        }
    }

    fn lock(&self) -> MutexGuard<'_, LruCache<UserId, SharedSession>> {
        self.sessions.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn get(&self, user_id: UserId) -> Option<SharedSession> {
        self.lock().get(&user_id).cloned()
    }

    /// Store `session`, replacing any previous session for the same viewer.
    pub fn insert(&self, session: FeedSession) -> SharedSession {
        let user_id = session.user_id();
        let shared = Arc::new(tokio::sync::Mutex::new(session));
        self.lock().put(user_id, shared.clone());
        shared
    }

    pub fn remove(&self, user_id: UserId) -> bool {
        self.lock().pop(&user_id).is_some()
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }
}
