use std::sync::Arc;

use crate::config::server::ServerConfig;
use crate::domain::RuleSet;
use crate::rooms::RoomRegistry;

/// Application state shared by every worker.
#[derive(Clone)]
pub struct AppState {
    registry: Arc<RoomRegistry>,
    /// Listener settings, `None` when the state is built for tests
    pub config: Option<ServerConfig>,
}

impl AppState {
    pub fn new(config: ServerConfig, default_rules: RuleSet) -> Self {
        Self {
            registry: Arc::new(RoomRegistry::new(default_rules)),
            config: Some(config),
        }
    }

    /// State with an empty registry and no listener config.
    pub fn for_tests(default_rules: RuleSet) -> Self {
        Self {
            registry: Arc::new(RoomRegistry::new(default_rules)),
            config: None,
        }
    }

    pub fn registry(&self) -> &RoomRegistry {
        &self.registry
    }
}
