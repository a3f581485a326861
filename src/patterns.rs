//! Seeded `u32` inputs for the test matrix and the benches.
//!
//! Every generator draws from a fresh [`StdRng`] seeded with [`random_init_seed`]. That seed is
//! fixed for the whole process unless [`disable_fixed_seed`] was called, so a failing input can
//! be regenerated from the seed the tests print.

use std::cmp::Reverse;
use std::sync::atomic::{AtomicBool, Ordering};

use once_cell::sync::OnceCell;
use rand::distributions::{Distribution, Standard, Uniform};
use rand::rngs::StdRng;
use rand::{thread_rng, Rng, SeedableRng};

static USE_FIXED_SEED: AtomicBool = AtomicBool::new(true);

/// Benches call this so repeated batches see different inputs.
pub fn disable_fixed_seed() {
    USE_FIXED_SEED.store(false, Ordering::Release);
}

pub fn random_init_seed() -> u64 {
    if USE_FIXED_SEED.load(Ordering::Acquire) {
        static SEED: OnceCell<u64> = OnceCell::new();
        *SEED.get_or_init(|| thread_rng().gen())
    } else {
        thread_rng().gen()
    }
}

/// Uniform over the whole `u32` range, duplicates are rare.
pub fn random(size: usize) -> Vec<u32> {
    seeded_rng().sample_iter(Standard).take(size).collect()
}

/// Uniform over `range`. Narrow ranges such as `0..4` make most pairings tie.
pub fn random_uniform<R>(size: usize, range: R) -> Vec<u32>
where
    R: Into<Uniform<u32>>,
{
    seeded_rng().sample_iter(range.into()).take(size).collect()
}

/// [`random`] with a length drawn from `0..=max_size`.
pub fn random_random_size(max_size: usize) -> Vec<u32> {
    let size = seeded_rng().gen_range(0..=max_size);
    random(size)
}

pub fn all_equal(size: usize) -> Vec<u32> {
    vec![66; size]
}

pub fn ascending(size: usize) -> Vec<u32> {
    (0..size as u32).collect()
}

pub fn descending(size: usize) -> Vec<u32> {
    (0..size as u32).rev().collect()
}

/// Random values cut into `saw_count` runs, each sorted ascending.
pub fn ascending_saw(size: usize, saw_count: usize) -> Vec<u32> {
    saw(size, saw_count, || Run::Ascending)
}

/// Random values cut into `saw_count` runs, each sorted descending.
pub fn descending_saw(size: usize, saw_count: usize) -> Vec<u32> {
    saw(size, saw_count, || Run::Descending)
}

/// Random values cut into `saw_count` runs, each sorted in a random direction.
pub fn saw_mixed(size: usize, saw_count: usize) -> Vec<u32> {
    let mut rng = StdRng::seed_from_u64(random_init_seed().rotate_left(32));
    saw(size, saw_count, move || {
        if rng.gen() {
            Run::Ascending
        } else {
            Run::Descending
        }
    })
}

/// Ascending first half, descending second half.
pub fn pipe_organ(size: usize) -> Vec<u32> {
    let mut vals = random(size);

    let (rising, falling) = vals.split_at_mut(size / 2);
    rising.sort_unstable();
    falling.sort_unstable_by_key(|&val| Reverse(val));

    vals
}

/// Neighbours come in equal pairs drawn from four values, so every pairing is a tie and the
/// sorted winners hold long runs of equal values whose losers must still be told apart. An odd
/// `size` ends on a lone straggler.
pub fn pair_ties(size: usize) -> Vec<u32> {
    let mut rng = seeded_rng();
    let dist = Uniform::new_inclusive(0, 3);

    let mut vals = Vec::with_capacity(size);
    while vals.len() + 1 < size {
        let val = dist.sample(&mut rng);
        vals.extend([val, val]);
    }
    if vals.len() < size {
        vals.push(dist.sample(&mut rng));
    }

    vals
}

enum Run {
    Ascending,
    Descending,
}

fn saw(size: usize, saw_count: usize, mut next_run: impl FnMut() -> Run) -> Vec<u32> {
    let mut vals = random(size);
    if vals.is_empty() {
        return vals;
    }

    // chunks_mut panics on 0, which a saw_count above size would round to.
    let run_len = (size / saw_count.max(1)).max(1);
    for chunk in vals.chunks_mut(run_len) {
        match next_run() {
            Run::Ascending => chunk.sort_unstable(),
            Run::Descending => chunk.sort_unstable_by_key(|&val| Reverse(val)),
        }
    }

    vals
}

fn seeded_rng() -> StdRng {
    StdRng::seed_from_u64(random_init_seed())
}
