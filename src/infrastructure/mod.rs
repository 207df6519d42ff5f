// Infrastructure - the seed store, the mock backend and the decorators around it

pub mod decorators;
pub mod id_generator;
pub mod latency;
pub mod mock_service;
pub mod seed_store;
pub mod traits;
pub mod viewer;

pub use decorators::{ApiDecorator, LatencyDecorator, TracingDecorator};
pub use id_generator::{IdGenerator, NODE_LIMIT};
pub use latency::{LatencyProfile, Operation};
pub use mock_service::MockService;
pub use seed_store::{SeedStore, SharedStore};
pub use traits::SocialApi;
pub use viewer::ViewerContext;
