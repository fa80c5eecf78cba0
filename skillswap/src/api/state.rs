use std::sync::Arc;

use crate::backend::SkillSwapBackend;
use crate::config::Config;
use crate::services::FeedService;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub backend: Arc<dyn SkillSwapBackend>,
    pub feed: FeedService,
}

impl AppState {
    pub fn new(config: Config, backend: Arc<dyn SkillSwapBackend>) -> Self {
        let config = Arc::new(config);
        let feed = FeedService::new(backend.clone(), &config.feed);

        Self {
            config,
            backend,
            feed,
        }
    }
}
