use crate::models::peer::Peer;
use ahash::AHasher;
use std::collections::HashSet;
use std::hash::BuildHasherDefault;

pub type AHashSet<T> = HashSet<T, BuildHasherDefault<AHasher>>;

/// Seeders and leechers of one info-hash
///
/// Every mutation keeps a peer in at most one of the two sets, so callers
/// cannot build a swarm where a peer is both seeding and leeching.
#[derive(Debug, Default, Clone)]
pub struct Swarm {
    seeders: AHashSet<Peer>,
    leechers: AHashSet<Peer>,
}

impl Swarm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make `peer` a seeder, dropping any leecher entry for it.
    /// Returns true if the peer was not already seeding.
    pub fn put_seeder(&mut self, peer: Peer) -> bool {
        self.leechers.remove(&peer);
        self.seeders.insert(peer)
    }

    /// Make `peer` a leecher, dropping any seeder entry for it.
    /// Returns true if the peer was not already leeching.
    pub fn put_leecher(&mut self, peer: Peer) -> bool {
        self.seeders.remove(&peer);
        self.leechers.insert(peer)
    }

    pub fn remove_seeder(&mut self, peer: &Peer) -> bool {
        self.seeders.remove(peer)
    }

    pub fn remove_leecher(&mut self, peer: &Peer) -> bool {
        self.leechers.remove(peer)
    }

    /// Move `peer` from the leechers to the seeders.
    ///
    /// A peer that was never seen leeching still ends up seeding. Returns
    /// whether the peer was a known leecher.
    pub fn graduate(&mut self, peer: Peer) -> bool {
        let was_leecher = self.leechers.remove(&peer);
        self.seeders.insert(peer);
        was_leecher
    }

    pub fn seeders(&self) -> impl Iterator<Item = &Peer> {
        self.seeders.iter()
    }

    pub fn leechers(&self) -> impl Iterator<Item = &Peer> {
        self.leechers.iter()
    }

    pub fn is_seeder(&self, peer: &Peer) -> bool {
        self.seeders.contains(peer)
    }

    pub fn is_leecher(&self, peer: &Peer) -> bool {
        self.leechers.contains(peer)
    }

    pub fn num_seeders(&self) -> usize {
        self.seeders.len()
    }

    pub fn num_leechers(&self) -> usize {
        self.leechers.len()
    }

    pub fn len(&self) -> usize {
        self.seeders.len() + self.leechers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.seeders.is_empty() && self.leechers.is_empty()
    }
}
