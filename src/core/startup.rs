use crate::core::config::Config;
use crate::stores::peer_store::PeerStore;
use crate::stores::registry::DriverRegistry;
use anyhow::{Context, Result};
use std::path::Path;
use std::sync::Arc;
use tracing::info;

/// Build the configured peer store from `registry`
pub fn open_peer_store(config: &Config, registry: &DriverRegistry) -> Result<Arc<dyn PeerStore>> {
    let store = registry
        .open(&config.peer_store)
        .context(format!(
            "Failed to open peer store driver '{}' (registered drivers: {})",
            config.peer_store.driver,
            registry.names().join(", ")
        ))?;

    info!(
        driver = %config.peer_store.driver,
        swarms = store.num_swarms(),
        "Peer store ready"
    );

    Ok(store)
}

/// Load configuration, install logging and open the peer store with the
/// built-in drivers. Intended for the process that embeds the store.
pub fn bootstrap(config_path: &Path) -> Result<(Config, Arc<dyn PeerStore>)> {
    let config = Config::from_file(config_path)
        .context(format!(
            "Failed to load configuration from '{}'",
            config_path.display()
        ))?;

    crate::core::tracing_init::init_tracing(&config.logging);

    let store = open_peer_store(&config, &DriverRegistry::with_builtin())?;

    Ok((config, store))
}
