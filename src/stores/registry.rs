use crate::core::config::DriverConfig;
use crate::core::error::StoreError;
use crate::stores::memory::memory_store::{self, MemoryPeerStore};
use crate::stores::peer_store::PeerStore;
use std::collections::BTreeMap;
use std::sync::Arc;
use tracing::info;

pub type DriverConstructor = fn(&DriverConfig) -> Result<Arc<dyn PeerStore>, StoreError>;

/// Named peer store constructors
///
/// Owned by the composition root and consulted once at startup to build the
/// backend named in the configuration.
#[derive(Clone, Default)]
pub struct DriverRegistry {
    drivers: BTreeMap<String, DriverConstructor>,
}

impl DriverRegistry {
    /// An empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// A registry holding the drivers shipped with this crate
    pub fn with_builtin() -> Self {
        let mut drivers = BTreeMap::new();
        drivers.insert(
            memory_store::DRIVER_NAME.to_string(),
            MemoryPeerStore::open as DriverConstructor,
        );
        Self { drivers }
    }

    pub fn register(&mut self, name: &str, constructor: DriverConstructor) -> Result<(), StoreError> {
        if self.drivers.contains_key(name) {
            return Err(StoreError::DuplicateDriver(name.to_string()));
        }

        self.drivers.insert(name.to_string(), constructor);
        Ok(())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.drivers.contains_key(name)
    }

    /// Registered driver names in sorted order
    pub fn names(&self) -> Vec<&str> {
        self.drivers.keys().map(String::as_str).collect()
    }

    /// Build the store named by `config.driver`
    pub fn open(&self, config: &DriverConfig) -> Result<Arc<dyn PeerStore>, StoreError> {
        let constructor = self
            .drivers
            .get(&config.driver)
            .ok_or_else(|| StoreError::UnknownDriver(config.driver.clone()))?;

        let store = constructor(config)?;

        info!(driver = %config.driver, "Peer store opened");

        Ok(store)
    }
}
