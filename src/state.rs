use crate::config::Config;
use std::sync::Arc;

/// Shared handler state. The config (and with it the served directory) is
/// immutable for the process lifetime; handlers coordinate through nothing
/// else.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub start_time: std::time::Instant,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self {
            config: Arc::new(config),
            start_time: std::time::Instant::now(),
        }
    }
}
