//! Ford-Johnson merge-insertion sort, written once against [`Sequence`].
//!
//! Each level pairs up neighbours, recursively sorts the pair winners, and then binary-inserts
//! the losers into that sorted chain in [`jacobsthal::insertion_order`]. An odd element out is
//! inserted last. The sort is not stable.
//!
//! Nothing in here logs: [`crate::timing`] times these calls directly, so events are emitted
//! around the sort instead of inside it.

use std::cmp::Ordering;
use std::mem;

use crate::jacobsthal;
use crate::sequence::Sequence;

/// Element plus the slot it occupied in its level's input. Winners carry their pair index down
/// into the recursion, so the loser of each sorted winner is found by index, not by value.
struct Tagged<T> {
    slot: usize,
    value: T,
}

struct Pair<T> {
    winner_slot: usize,
    loser: Option<Tagged<T>>,
}

pub fn sort<S>(v: &mut S)
where
    S: Sequence,
    S::Item: Ord,
{
    sort_by(v, |a, b| a.cmp(b));
}

pub fn sort_by<S, F>(v: &mut S, mut compare: F)
where
    S: Sequence,
    F: FnMut(&S::Item, &S::Item) -> Ordering,
{
    if v.len() <= 1 {
        return;
    }

    let tagged = <S::Rebind<Tagged<S::Item>>>::from_items(
        mem::take(v)
            .into_iter()
            .enumerate()
            .map(|(slot, value)| Tagged { slot, value }),
    );

    let mut is_less =
        |a: &Tagged<S::Item>, b: &Tagged<S::Item>| compare(&a.value, &b.value) == Ordering::Less;
    let sorted = merge_insertion(tagged, &mut is_less);

    *v = S::from_items(sorted.into_iter().map(|elem| elem.value));
}

/// Upper bound on the comparisons [`sort_by`] performs for `n` elements.
///
/// Pairing costs one comparison per pair, the winners cost their own bound, and every further
/// insertion is charged a worst case binary search over the whole chain at that point. The
/// Jacobsthal windows are usually smaller, so actual counts tend to stay below this.
pub fn comparison_bound(n: usize) -> usize {
    if n <= 1 {
        return 0;
    }

    let pair_count = n / 2;
    let inserts = ((pair_count + 1)..n)
        .map(|chain_len| ceil_log2(chain_len + 1))
        .sum::<usize>();

    pair_count + comparison_bound(pair_count) + inserts
}

/// `ceil(log2(n!))`, no comparison sort can do better in the worst case.
pub fn information_theoretic_minimum(n: usize) -> usize {
    let log2_factorial = (2..=n).map(|k| (k as f64).log2()).sum::<f64>();
    log2_factorial.ceil() as usize
}

fn ceil_log2(value: usize) -> usize {
    if value <= 1 {
        return 0;
    }

    (usize::BITS - (value - 1).leading_zeros()) as usize
}

fn merge_insertion<S, T, F>(mut v: S, is_less: &mut F) -> S
where
    S: Sequence<Item = Tagged<T>>,
    F: FnMut(&Tagged<T>, &Tagged<T>) -> bool,
{
    let len = v.len();
    if len <= 1 {
        return v;
    }

    let straggler = if len % 2 != 0 { v.pop_back() } else { None };
    let pair_count = len / 2;

    // Winner first, the first element wins ties.
    let mut pairs = Vec::with_capacity(pair_count);
    let mut winners = S::with_capacity(pair_count);
    let mut elems = v.into_iter();
    while let (Some(a), Some(b)) = (elems.next(), elems.next()) {
        let (winner, loser) = if is_less(&a, &b) { (b, a) } else { (a, b) };

        winners.push_back(Tagged {
            slot: pairs.len(),
            value: winner.value,
        });
        pairs.push(Pair {
            winner_slot: winner.slot,
            loser: Some(loser),
        });
    }

    let sorted_winners = merge_insertion(winners, is_less);

    // pend[i] is the loser of chain[i], which stays true for the winners while the chain grows.
    // winner_pos tracks where each winner currently sits, its loser always sorts before it.
    let mut chain = S::with_capacity(len);
    let mut pend = <S::Rebind<Option<Tagged<T>>>>::with_capacity(pair_count);
    for winner in sorted_winners {
        let pair = &mut pairs[winner.slot];
        pend.push_back(pair.loser.take());
        chain.push_back(Tagged {
            slot: pair.winner_slot,
            value: winner.value,
        });
    }
    let mut winner_pos = (0..pair_count).collect::<Vec<_>>();

    // pend[0] <= chain[0] by construction, no comparison needed.
    if let Some(first) = pend.get_mut(0).and_then(Option::take) {
        chain.insert(0, first);
        shift_positions(&mut winner_pos, 0);
    }

    for idx in jacobsthal::insertion_order(pend.len()) {
        let Some(loser) = pend.get_mut(idx).and_then(Option::take) else {
            continue;
        };

        let pos = insertion_point(&chain, winner_pos[idx], &loser, is_less);
        chain.insert(pos, loser);
        shift_positions(&mut winner_pos, pos);
    }

    if let Some(straggler) = straggler {
        let pos = insertion_point(&chain, chain.len(), &straggler, is_less);
        chain.insert(pos, straggler);
    }

    chain
}

/// First position in `chain[..end]` holding an element greater than `elem`, so equal elements
/// are inserted after the ones already present.
fn insertion_point<S, T, F>(chain: &S, end: usize, elem: &Tagged<T>, is_less: &mut F) -> usize
where
    S: Sequence<Item = Tagged<T>>,
    F: FnMut(&Tagged<T>, &Tagged<T>) -> bool,
{
    let (mut lo, mut hi) = (0, end);
    while lo < hi {
        let mid = lo + (hi - lo) / 2;
        match chain.get(mid) {
            Some(probe) if is_less(elem, probe) => hi = mid,
            _ => lo = mid + 1,
        }
    }

    lo
}

fn shift_positions(positions: &mut [usize], inserted_at: usize) {
    for pos in positions.iter_mut().filter(|pos| **pos >= inserted_at) {
        *pos += 1;
    }
}
