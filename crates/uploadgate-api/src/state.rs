//! Application state shared by all handlers.

use crate::services::gateway::UploadGateway;
use uploadgate_core::Config;

pub struct AppState {
    pub config: Config,
    pub gateway: UploadGateway,
}

impl AppState {
    pub fn new(config: Config, gateway: UploadGateway) -> Self {
        Self { config, gateway }
    }
}
