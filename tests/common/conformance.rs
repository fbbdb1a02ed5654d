// Behavioural checks every PeerStore backend must pass.
//
// Each check receives a fresh, empty store from the factory.

use super::{assert_disjoint, create_test_peer, create_test_peer_v6, random_info_hash, TestStore};
use std::collections::HashSet;

pub fn run_all<F>(new_store: F)
where
    F: Fn() -> TestStore,
{
    put_seeder_is_idempotent(&new_store());
    put_leecher_then_seeder_moves_peer(&new_store());
    put_seeder_then_leecher_moves_peer(&new_store());
    delete_absent_peer_is_noop(&new_store());
    delete_only_touches_named_set(&new_store());
    graduate_known_leecher(&new_store());
    graduate_unknown_peer(&new_store());
    counts_match_peer_lists(&new_store());
    unknown_info_hash_reads_empty(&new_store());
    announce_excludes_announcer(&new_store());
    announce_as_seeder_returns_leechers_only(&new_store());
    announce_as_leecher_prefers_seeders(&new_store());
    announce_respects_num_want(&new_store());
    announce_with_unbounded_num_want(&new_store());
    swarms_are_independent(&new_store());
    empty_swarm_reads_like_absent(&new_store());
    mixed_address_families(&new_store());
}

pub fn put_seeder_is_idempotent(store: &TestStore) {
    let info_hash = random_info_hash();
    let peer = create_test_peer(1);

    store.put_seeder(info_hash, peer);
    store.put_seeder(info_hash, peer);

    assert_eq!(store.num_seeders(info_hash), 1);
    assert_eq!(store.num_leechers(info_hash), 0);
    assert_eq!(store.get_seeders(info_hash), vec![peer]);
}

pub fn put_leecher_then_seeder_moves_peer(store: &TestStore) {
    let info_hash = random_info_hash();
    let peer = create_test_peer(1);

    store.put_leecher(info_hash, peer);
    store.put_seeder(info_hash, peer);

    assert_eq!(store.num_seeders(info_hash), 1);
    assert_eq!(store.num_leechers(info_hash), 0);
    assert_disjoint(&**store, info_hash);
}

pub fn put_seeder_then_leecher_moves_peer(store: &TestStore) {
    let info_hash = random_info_hash();
    let peer = create_test_peer(1);

    store.put_seeder(info_hash, peer);
    store.put_leecher(info_hash, peer);

    assert_eq!(store.num_seeders(info_hash), 0);
    assert_eq!(store.num_leechers(info_hash), 1);
    assert_eq!(store.get_leechers(info_hash), vec![peer]);
}

pub fn delete_absent_peer_is_noop(store: &TestStore) {
    let info_hash = random_info_hash();
    let present = create_test_peer(1);
    let absent = create_test_peer(2);

    // Swarm does not exist yet
    store.delete_seeder(info_hash, &absent);
    store.delete_leecher(info_hash, &absent);
    assert_eq!(store.num_seeders(info_hash), 0);
    assert_eq!(store.num_leechers(info_hash), 0);

    store.put_seeder(info_hash, present);
    store.delete_seeder(info_hash, &absent);
    store.delete_leecher(info_hash, &absent);

    assert_eq!(store.num_seeders(info_hash), 1);
    assert_eq!(store.num_leechers(info_hash), 0);

    // Duplicate stop
    store.delete_seeder(info_hash, &present);
    store.delete_seeder(info_hash, &present);
    assert_eq!(store.num_seeders(info_hash), 0);
}

pub fn delete_only_touches_named_set(store: &TestStore) {
    let info_hash = random_info_hash();
    let peer = create_test_peer(1);

    store.put_leecher(info_hash, peer);
    store.delete_seeder(info_hash, &peer);
    assert_eq!(store.num_leechers(info_hash), 1);

    store.delete_leecher(info_hash, &peer);
    assert_eq!(store.num_leechers(info_hash), 0);
}

pub fn graduate_known_leecher(store: &TestStore) {
    let info_hash = random_info_hash();
    let peer = create_test_peer(1);

    store.put_leecher(info_hash, peer);
    assert_eq!(store.num_leechers(info_hash), 1);
    assert_eq!(store.num_seeders(info_hash), 0);

    store.graduate_leecher(info_hash, peer);
    assert_eq!(store.num_leechers(info_hash), 0);
    assert_eq!(store.num_seeders(info_hash), 1);
    assert_eq!(store.get_seeders(info_hash), vec![peer]);
}

pub fn graduate_unknown_peer(store: &TestStore) {
    let info_hash = random_info_hash();
    let leecher = create_test_peer(1);
    let newcomer = create_test_peer(2);

    store.put_leecher(info_hash, leecher);
    store.graduate_leecher(info_hash, newcomer);

    assert_eq!(store.num_leechers(info_hash), 1);
    assert_eq!(store.get_seeders(info_hash), vec![newcomer]);

    // Also on a swarm nobody announced to yet
    let fresh = random_info_hash();
    store.graduate_leecher(fresh, newcomer);
    assert_eq!(store.num_seeders(fresh), 1);
    assert_eq!(store.num_leechers(fresh), 0);
}

pub fn counts_match_peer_lists(store: &TestStore) {
    let info_hash = random_info_hash();

    for i in 0..20 {
        store.put_leecher(info_hash, create_test_peer(i));
    }
    for i in 0..7 {
        store.graduate_leecher(info_hash, create_test_peer(i));
    }
    for i in 15..20 {
        store.delete_leecher(info_hash, &create_test_peer(i));
    }

    assert_eq!(store.num_seeders(info_hash), store.get_seeders(info_hash).len());
    assert_eq!(store.num_leechers(info_hash), store.get_leechers(info_hash).len());
    assert_eq!(store.num_seeders(info_hash), 7);
    assert_eq!(store.num_leechers(info_hash), 8);
    assert_disjoint(&**store, info_hash);
}

pub fn unknown_info_hash_reads_empty(store: &TestStore) {
    let info_hash = random_info_hash();
    let announcer = create_test_peer(1);

    assert_eq!(store.num_seeders(info_hash), 0);
    assert_eq!(store.num_leechers(info_hash), 0);
    assert!(store.get_seeders(info_hash).is_empty());
    assert!(store.get_leechers(info_hash).is_empty());
    assert!(store.announce_peers(info_hash, false, 50, &announcer).is_empty());
    assert!(store.announce_peers(info_hash, true, 50, &announcer).is_empty());
}

pub fn announce_excludes_announcer(store: &TestStore) {
    let info_hash = random_info_hash();
    let announcer = create_test_peer(0);

    store.put_leecher(info_hash, announcer);
    for i in 1..5 {
        store.put_seeder(info_hash, create_test_peer(i));
        store.put_leecher(info_hash, create_test_peer(100 + i));
    }

    let peers = store.announce_peers(info_hash, false, 50, &announcer);
    assert_eq!(peers.len(), 8);
    assert!(!peers.contains(&announcer));

    // Only the announcer in the swarm
    let lonely = random_info_hash();
    store.put_leecher(lonely, announcer);
    assert!(store.announce_peers(lonely, false, 50, &announcer).is_empty());
}

pub fn announce_as_seeder_returns_leechers_only(store: &TestStore) {
    let info_hash = random_info_hash();
    let announcer = create_test_peer(1000);

    for i in 0..10 {
        store.put_leecher(info_hash, create_test_peer(i));
    }
    for i in 10..15 {
        store.put_seeder(info_hash, create_test_peer(i));
    }
    store.put_seeder(info_hash, announcer);

    let peers = store.announce_peers(info_hash, true, 5, &announcer);
    assert_eq!(peers.len(), 5);

    let seeders: HashSet<_> = store.get_seeders(info_hash).into_iter().collect();
    assert!(peers.iter().all(|p| !seeders.contains(p)));
    assert!(!peers.contains(&announcer));

    // Asking for more than exist returns every leecher
    let peers = store.announce_peers(info_hash, true, 50, &announcer);
    assert_eq!(peers.len(), 10);
}

pub fn announce_as_leecher_prefers_seeders(store: &TestStore) {
    let info_hash = random_info_hash();
    let announcer = create_test_peer(1000);

    for i in 0..4 {
        store.put_seeder(info_hash, create_test_peer(i));
    }
    for i in 4..30 {
        store.put_leecher(info_hash, create_test_peer(i));
    }
    store.put_leecher(info_hash, announcer);

    let peers = store.announce_peers(info_hash, false, 10, &announcer);
    assert_eq!(peers.len(), 10);

    let seeders: HashSet<_> = store.get_seeders(info_hash).into_iter().collect();
    let returned_seeders = peers.iter().filter(|p| seeders.contains(p)).count();
    assert_eq!(returned_seeders, 4);
}

pub fn announce_respects_num_want(store: &TestStore) {
    let info_hash = random_info_hash();
    let announcer = create_test_peer(1000);

    for i in 0..100 {
        store.put_leecher(info_hash, create_test_peer(i));
    }

    assert!(store.announce_peers(info_hash, false, 0, &announcer).is_empty());
    assert_eq!(store.announce_peers(info_hash, false, 1, &announcer).len(), 1);
    assert_eq!(store.announce_peers(info_hash, false, 30, &announcer).len(), 30);

    let peers = store.announce_peers(info_hash, false, 30, &announcer);
    let unique: HashSet<_> = peers.iter().collect();
    assert_eq!(unique.len(), peers.len());
}

pub fn announce_with_unbounded_num_want(store: &TestStore) {
    let info_hash = random_info_hash();
    let leecher = create_test_peer(0);
    let seeder = create_test_peer(1);

    for i in 2..12 {
        store.put_leecher(info_hash, create_test_peer(i));
    }
    for i in 12..17 {
        store.put_seeder(info_hash, create_test_peer(i));
    }
    store.put_leecher(info_hash, leecher);
    store.put_seeder(info_hash, seeder);

    // Every seeder and leecher except the announcer itself
    let peers = store.announce_peers(info_hash, false, usize::MAX, &leecher);
    let unique: HashSet<_> = peers.iter().collect();
    assert_eq!(peers.len(), 16);
    assert_eq!(unique.len(), 16);
    assert!(!peers.contains(&leecher));

    // Every leecher
    let mut peers = store.announce_peers(info_hash, true, usize::MAX, &seeder);
    let mut expected = store.get_leechers(info_hash);
    expected.sort_by_key(|p| p.socket_addr());
    peers.sort_by_key(|p| p.socket_addr());
    assert_eq!(peers, expected);
}

pub fn swarms_are_independent(store: &TestStore) {
    let first = random_info_hash();
    let second = random_info_hash();
    let peer = create_test_peer(1);

    store.put_seeder(first, peer);
    store.put_leecher(second, peer);

    assert_eq!(store.num_seeders(first), 1);
    assert_eq!(store.num_leechers(first), 0);
    assert_eq!(store.num_seeders(second), 0);
    assert_eq!(store.num_leechers(second), 1);

    store.delete_seeder(first, &peer);
    assert_eq!(store.num_leechers(second), 1);
}

pub fn empty_swarm_reads_like_absent(store: &TestStore) {
    let info_hash = random_info_hash();
    let peer = create_test_peer(1);

    store.put_seeder(info_hash, peer);
    store.delete_seeder(info_hash, &peer);

    assert_eq!(store.num_seeders(info_hash), 0);
    assert_eq!(store.num_leechers(info_hash), 0);
    assert!(store.get_seeders(info_hash).is_empty());
    assert!(store
        .announce_peers(info_hash, false, 50, &create_test_peer(2))
        .is_empty());
}

pub fn mixed_address_families(store: &TestStore) {
    let info_hash = random_info_hash();
    let v4 = create_test_peer(1);
    let v6 = create_test_peer_v6(1);

    // Same peer id on a different address is a different peer
    store.put_leecher(info_hash, v4);
    store.put_leecher(info_hash, v6);
    assert_eq!(store.num_leechers(info_hash), 2);

    let peers = store.announce_peers(info_hash, false, 50, &v4);
    assert_eq!(peers, vec![v6]);
}
