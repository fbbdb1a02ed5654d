use crate::models::info_hash::InfoHash;
use crate::models::swarm::Swarm;
use ahash::AHasher;
use parking_lot::Mutex;
use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::hash::BuildHasherDefault;
use tracing::trace;

pub type AHashMap<K, V> = HashMap<K, V, BuildHasherDefault<AHasher>>;

/// One partition of the swarm map behind a single exclusive lock
///
/// Each method takes the lock once and runs the whole closure under it, so
/// a multi-step change to a swarm is never visible half-applied. Closures
/// must not call back into the store.
#[derive(Debug)]
pub struct Shard {
    swarms: Mutex<AHashMap<InfoHash, Swarm>>,
    prune_empty_swarms: bool,
}

impl Shard {
    pub fn new(prune_empty_swarms: bool) -> Self {
        Self {
            swarms: Mutex::new(AHashMap::default()),
            prune_empty_swarms,
        }
    }

    /// Run `f` on the swarm for `info_hash`, creating it if absent
    pub fn upsert<F, T>(&self, info_hash: InfoHash, f: F) -> T
    where
        F: FnOnce(&mut Swarm) -> T,
    {
        let mut swarms = self.swarms.lock();

        let swarm = swarms.entry(info_hash).or_insert_with(|| {
            trace!(info_hash = %info_hash, "Swarm created");
            Swarm::new()
        });

        f(swarm)
    }

    /// Run `f` on an existing swarm; absent swarms are left absent.
    /// Swarms that end up empty are pruned when pruning is enabled.
    pub fn modify<F, T>(&self, info_hash: InfoHash, f: F) -> Option<T>
    where
        F: FnOnce(&mut Swarm) -> T,
    {
        let mut swarms = self.swarms.lock();

        match swarms.entry(info_hash) {
            Entry::Occupied(mut entry) => {
                let result = f(entry.get_mut());

                if self.prune_empty_swarms && entry.get().is_empty() {
                    entry.remove();
                    trace!(info_hash = %info_hash, "Empty swarm pruned");
                }

                Some(result)
            }
            Entry::Vacant(_) => None,
        }
    }

    /// Run `f` on the swarm for `info_hash` if it exists
    pub fn read<F, T>(&self, info_hash: InfoHash, f: F) -> Option<T>
    where
        F: FnOnce(&Swarm) -> T,
    {
        let swarms = self.swarms.lock();
        swarms.get(&info_hash).map(f)
    }

    pub fn num_swarms(&self) -> usize {
        self.swarms.lock().len()
    }

    pub fn num_peers(&self) -> usize {
        self.swarms.lock().values().map(Swarm::len).sum()
    }
}
