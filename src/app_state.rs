use std::sync::Arc;

use tracing::info;

use crate::{
    config::Config,
    error::AppResult,
    infrastructure::{
        ApiDecorator, IdGenerator, LatencyDecorator, MockService, SeedStore, SharedStore,
        SocialApi, TracingDecorator, ViewerContext,
    },
};

#[derive(Clone)]
pub struct AppState {
    pub api: Arc<dyn SocialApi>,
    pub store: SharedStore,
    pub viewer: ViewerContext,
    pub config: Config,
}

impl AppState {
    /// Application backed by the default seed data
    pub fn new(config: Config) -> AppResult<Self> {
        Self::with_store(config, SeedStore::load_default()?)
    }

    /// Application backed by an explicit store, for tests and demos
    pub fn with_store(config: Config, store: SeedStore) -> AppResult<Self> {
        let store = store.into_shared();
        let ids = Arc::new(IdGenerator::new(config.ids.node_id)?);

        // Tracing -> Latency -> MockService
        let mock: Arc<dyn SocialApi> = Arc::new(MockService::new(store.clone(), ids));
        let latency = LatencyDecorator::new(mock, config.latency.profile());
        info!("{} configured: {:?}", latency.decorator_name(), config.latency);
        let api: Arc<dyn SocialApi> = Arc::new(TracingDecorator::new(Arc::new(latency)));

        Ok(Self {
            api,
            store,
            viewer: ViewerContext::new(config.viewer.user_id.as_str()),
            config,
        })
    }
}
