use crate::config::Config;
use crate::store::CollaborationStore;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<CollaborationStore>,
    pub config: Config,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        AppState {
            store: Arc::new(CollaborationStore::new()),
            config,
        }
    }
}
