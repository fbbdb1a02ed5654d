use crate::models::info_hash::InfoHash;
use crate::models::peer::Peer;

/// Registry of seeders and leechers for every tracked swarm
///
/// Every operation addresses a single info-hash and none of them can fail:
/// a missing swarm or peer reads as empty, and deleting something that is
/// not there is a no-op. Announce handlers map events onto these calls:
///
/// - `started` / update: [`put_seeder`](PeerStore::put_seeder) or
///   [`put_leecher`](PeerStore::put_leecher) depending on whether the client is complete
/// - `stopped`: both [`delete_seeder`](PeerStore::delete_seeder) and
///   [`delete_leecher`](PeerStore::delete_leecher)
/// - `completed`: [`graduate_leecher`](PeerStore::graduate_leecher)
///
/// followed by [`announce_peers`](PeerStore::announce_peers) for the response.
/// Implementations must be safe to share between request handlers.
pub trait PeerStore: Send + Sync {
    /// Add `peer` to the seeders of `info_hash`, removing it from the leechers
    fn put_seeder(&self, info_hash: InfoHash, peer: Peer);

    /// Add `peer` to the leechers of `info_hash`, removing it from the seeders
    fn put_leecher(&self, info_hash: InfoHash, peer: Peer);

    fn delete_seeder(&self, info_hash: InfoHash, peer: &Peer);

    fn delete_leecher(&self, info_hash: InfoHash, peer: &Peer);

    /// Atomically move `peer` from the leechers to the seeders. Peers that
    /// were never seen leeching become seeders as well.
    fn graduate_leecher(&self, info_hash: InfoHash, peer: Peer);

    /// Up to `num_want` peers for `announcer`, never including the announcer.
    ///
    /// Seeders only get leechers back. Leechers get seeders first, topped up
    /// with other leechers. When more peers are eligible than requested, a
    /// random subset is returned.
    fn announce_peers(
        &self,
        info_hash: InfoHash,
        announcer_is_seeder: bool,
        num_want: usize,
        announcer: &Peer,
    ) -> Vec<Peer>;

    fn get_seeders(&self, info_hash: InfoHash) -> Vec<Peer>;

    fn get_leechers(&self, info_hash: InfoHash) -> Vec<Peer>;

    fn num_seeders(&self, info_hash: InfoHash) -> usize;

    fn num_leechers(&self, info_hash: InfoHash) -> usize;

    /// Number of swarms currently held in memory
    fn num_swarms(&self) -> usize;

    /// Number of seeders plus leechers across all swarms
    fn num_peers(&self) -> usize;
}
