use crate::models::peer::Peer;
use crate::models::swarm::Swarm;
use rand::seq::IteratorRandom;
use rand::Rng;

/// Pick the peers handed back to an announcing client.
///
/// Seeding announcers only see leechers. Leeching announcers see seeders
/// first and leechers fill the remaining slots. Each set is reservoir
/// sampled so a large swarm does not keep returning the same peers.
pub fn select_peers<R: Rng + ?Sized>(
    swarm: &Swarm,
    announcer_is_seeder: bool,
    num_want: usize,
    announcer: &Peer,
    rng: &mut R,
) -> Vec<Peer> {
    let mut peers = Vec::with_capacity(num_want.min(swarm.len()));

    if !announcer_is_seeder {
        let amount = num_want.min(swarm.num_seeders());
        sample_into(&mut peers, swarm.seeders(), announcer, amount, rng);
    }

    let amount = (num_want - peers.len()).min(swarm.num_leechers());
    sample_into(&mut peers, swarm.leechers(), announcer, amount, rng);

    peers
}

// `amount` must already be capped at the candidate set size, since
// `choose_multiple` allocates that many slots up front.
fn sample_into<'a, I, R>(
    out: &mut Vec<Peer>,
    candidates: I,
    announcer: &Peer,
    amount: usize,
    rng: &mut R,
) where
    I: Iterator<Item = &'a Peer>,
    R: Rng + ?Sized,
{
    if amount == 0 {
        return;
    }

    let eligible = candidates.filter(|peer| *peer != announcer);
    out.extend(eligible.choose_multiple(rng, amount).into_iter().copied());
}
