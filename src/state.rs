use std::sync::Arc;

use crate::cache::BoardStore;
use crate::config::Config;
use crate::fetching::AppointmentSource;
use crate::handlers::clock::Clock;

/// Everything the refresh loop and the routes share.
pub struct AppState {
    pub config: Config,
    pub source: Arc<dyn AppointmentSource>,
    pub store: BoardStore,
    pub clock: Clock,
}

impl AppState {
    pub fn new(config: Config, source: Arc<dyn AppointmentSource>, clock: Clock) -> Self {
        AppState {
            config,
            source,
            store: BoardStore::new(),
            clock,
        }
    }
}
