mod domain;
mod interfaces;
mod infrastructure;
pub mod errors;
pub mod settings;
pub mod constants;
pub mod graceful_shutdown;
pub mod telemetry;

pub use domain::{entities, use_cases};
pub use interfaces::{handlers, routes};
pub use infrastructure::{contact_client, content, utils};

use content::RecordStore;
use settings::AppConfig;

/// Shared, read-only state handed to every handler.
pub struct AppState {
    pub store: RecordStore,
    pub config: AppConfig,
}

impl AppState {
    pub fn new(config: AppConfig, store: RecordStore) -> Self {
        AppState { store, config }
    }
}
