use crate::core::config::{DriverConfig, MemoryConfig};
use crate::core::error::StoreError;
use crate::models::info_hash::InfoHash;
use crate::models::peer::Peer;
use crate::models::swarm::Swarm;
use crate::stores::memory::selection::select_peers;
use crate::stores::memory::shard::Shard;
use crate::stores::peer_store::PeerStore;
use std::sync::Arc;
use tracing::{info, trace};

pub const DRIVER_NAME: &str = "memory";

// Fixed seeds keep shard routing stable for the lifetime of the store.
const ROUTING_SEEDS: [u64; 4] = [
    0x243f_6a88_85a3_08d3,
    0x1319_8a2e_0370_7344,
    0xa409_3822_299f_31d0,
    0x082e_fa98_ec4e_6c89,
];

/// Sharded in-memory peer store
///
/// Info-hashes are routed to a fixed set of shards by hashing; each shard
/// owns its swarms behind one mutex. Every operation touches exactly one
/// shard, so swarms in different shards never contend.
pub struct MemoryPeerStore {
    shards: Box<[Shard]>,
    hasher: ahash::RandomState,
}

impl MemoryPeerStore {
    pub fn new(config: &MemoryConfig) -> Result<Self, StoreError> {
        config.validate()?;

        let shards = (0..config.shards)
            .map(|_| Shard::new(config.prune_empty_swarms))
            .collect::<Vec<_>>()
            .into_boxed_slice();

        info!(
            shards = config.shards,
            prune_empty_swarms = config.prune_empty_swarms,
            "Memory peer store created"
        );

        Ok(Self {
            shards,
            hasher: ahash::RandomState::with_seeds(
                ROUTING_SEEDS[0],
                ROUTING_SEEDS[1],
                ROUTING_SEEDS[2],
                ROUTING_SEEDS[3],
            ),
        })
    }

    /// Registry constructor for the `memory` driver
    pub fn open(driver_config: &DriverConfig) -> Result<Arc<dyn PeerStore>, StoreError> {
        let config = MemoryConfig::from_driver_config(driver_config)?;
        Ok(Arc::new(Self::new(&config)?))
    }

    pub fn shard_count(&self) -> usize {
        self.shards.len()
    }

    pub fn shard_index(&self, info_hash: &InfoHash) -> usize {
        (self.hasher.hash_one(info_hash) % self.shards.len() as u64) as usize
    }

    fn shard(&self, info_hash: &InfoHash) -> &Shard {
        &self.shards[self.shard_index(info_hash)]
    }
}

impl PeerStore for MemoryPeerStore {
    fn put_seeder(&self, info_hash: InfoHash, peer: Peer) {
        self.shard(&info_hash).upsert(info_hash, |swarm| swarm.put_seeder(peer));
    }

    fn put_leecher(&self, info_hash: InfoHash, peer: Peer) {
        self.shard(&info_hash).upsert(info_hash, |swarm| swarm.put_leecher(peer));
    }

    fn delete_seeder(&self, info_hash: InfoHash, peer: &Peer) {
        self.shard(&info_hash).modify(info_hash, |swarm| swarm.remove_seeder(peer));
    }

    fn delete_leecher(&self, info_hash: InfoHash, peer: &Peer) {
        self.shard(&info_hash).modify(info_hash, |swarm| swarm.remove_leecher(peer));
    }

    fn graduate_leecher(&self, info_hash: InfoHash, peer: Peer) {
        let was_leecher = self
            .shard(&info_hash)
            .upsert(info_hash, |swarm| swarm.graduate(peer));

        if !was_leecher {
            trace!(info_hash = %info_hash, peer = %peer, "Graduated a peer that was not leeching");
        }
    }

    fn announce_peers(
        &self,
        info_hash: InfoHash,
        announcer_is_seeder: bool,
        num_want: usize,
        announcer: &Peer,
    ) -> Vec<Peer> {
        if num_want == 0 {
            return Vec::new();
        }

        let mut rng = rand::rng();

        self.shard(&info_hash)
            .read(info_hash, |swarm| {
                select_peers(swarm, announcer_is_seeder, num_want, announcer, &mut rng)
            })
            .unwrap_or_default()
    }

    fn get_seeders(&self, info_hash: InfoHash) -> Vec<Peer> {
        self.shard(&info_hash)
            .read(info_hash, |swarm| swarm.seeders().copied().collect())
            .unwrap_or_default()
    }

    fn get_leechers(&self, info_hash: InfoHash) -> Vec<Peer> {
        self.shard(&info_hash)
            .read(info_hash, |swarm| swarm.leechers().copied().collect())
            .unwrap_or_default()
    }

    fn num_seeders(&self, info_hash: InfoHash) -> usize {
        self.shard(&info_hash)
            .read(info_hash, Swarm::num_seeders)
            .unwrap_or(0)
    }

    fn num_leechers(&self, info_hash: InfoHash) -> usize {
        self.shard(&info_hash)
            .read(info_hash, Swarm::num_leechers)
            .unwrap_or(0)
    }

    fn num_swarms(&self) -> usize {
        self.shards.iter().map(Shard::num_swarms).sum()
    }

    fn num_peers(&self) -> usize {
        self.shards.iter().map(Shard::num_peers).sum()
    }
}
