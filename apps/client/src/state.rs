//! Application context — the explicit object the shell threads through its
//! screens instead of a hidden global.

use std::sync::Arc;

use tracing::info;

use crate::config::Config;
use crate::gateway::{HttpGateway, RemoteApi};
use crate::session::store::SessionStore;
use crate::storage::{FileSlotStore, SlotStore};

/// Everything a PrepNova shell needs: the session store, the backend
/// surface, and the configuration that built them.
pub struct AppContext {
    pub config: Config,
    pub session: SessionStore,
    pub api: Arc<dyn RemoteApi>,
}

impl AppContext {
    /// Wires the production parts: file-backed slots under the platform
    /// data dir and the HTTP gateway from the configured base URL.
    pub fn bootstrap(config: Config) -> Self {
        let slots: Arc<dyn SlotStore> = Arc::new(FileSlotStore::new(config.data_dir.clone()));
        let session = SessionStore::initialize(slots);
        info!(
            "Session store initialized (authenticated: {})",
            session.is_authenticated()
        );

        let api: Arc<dyn RemoteApi> = Arc::new(HttpGateway::new(config.api_base_url.clone()));
        info!("Gateway targeting {}", config.api_base_url);

        Self {
            config,
            session,
            api,
        }
    }

    /// Wires explicit parts. Shells use this for demo mode (in-memory
    /// slots) and tests use it to swap the backend surface.
    pub fn with_parts(config: Config, slots: Arc<dyn SlotStore>, api: Arc<dyn RemoteApi>) -> Self {
        Self {
            config,
            session: SessionStore::initialize(slots),
            api,
        }
    }
}
