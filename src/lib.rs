pub mod core {
    pub mod config;
    pub mod error;
    pub mod startup;
    pub mod tracing_init;
}

pub mod models {
    pub mod info_hash;
    pub mod peer;
    pub mod swarm;
}

pub mod stores {
    pub mod memory {
        pub mod memory_store;
        pub mod selection;
        pub mod shard;
    }
    pub mod peer_store;
    pub mod registry;
}

pub use crate::core::config::{Config, DriverConfig, MemoryConfig};
pub use crate::core::error::StoreError;
pub use crate::models::info_hash::InfoHash;
pub use crate::models::peer::{Peer, PeerId};
pub use crate::stores::memory::memory_store::MemoryPeerStore;
pub use crate::stores::peer_store::PeerStore;
pub use crate::stores::registry::DriverRegistry;
