use std::sync::atomic::{AtomicBool, Ordering};

use rand::prelude::*;

use once_cell::sync::OnceCell;

/// Provides a set of patterns useful for testing and benchmarking the radix
/// sort. Limited to u32 keys.

// --- Public ---

pub fn random(size: usize) -> Vec<u32> {
    //     .
    // : . : :
    // :.:::.::

    random_vec(size)
}

pub fn random_uniform<R>(size: usize, range: R) -> Vec<u32>
where
    R: Into<rand::distributions::Uniform<u32>>,
{
    // :.:.:.::
    let mut rng = new_rng();

    let dist: rand::distributions::Uniform<u32> = range.into();

    (0..size).map(|_| dist.sample(&mut rng)).collect()
}

pub fn all_equal(size: usize) -> Vec<u32> {
    // ......
    // ::::::

    (0..size).map(|_| 66).collect::<Vec<_>>()
}

pub fn ascending(size: usize) -> Vec<u32> {
    //     .:
    //   .:::
    // .:::::

    (0..size as u32).collect::<Vec<_>>()
}

pub fn descending(size: usize) -> Vec<u32> {
    // :.
    // :::.
    // :::::.

    (0..size as u32).rev().collect::<Vec<_>>()
}

pub fn pipe_organ(size: usize) -> Vec<u32> {
    //   .:.
    // .:::::.

    let mut vals = random_vec(size);

    let first_half = &mut vals[0..(size / 2)];
    first_half.sort_unstable();

    let second_half = &mut vals[(size / 2)..size];
    second_half.sort_unstable_by_key(|&e| std::cmp::Reverse(e));

    vals
}

static USE_FIXED_SEED: AtomicBool = AtomicBool::new(true);

pub fn disable_fixed_seed() {
    USE_FIXED_SEED.store(false, Ordering::Release);
}

pub fn random_init_seed() -> u64 {
    if USE_FIXED_SEED.load(Ordering::Acquire) {
        static SEED: OnceCell<u64> = OnceCell::new();
        *SEED.get_or_init(|| -> u64 { thread_rng().gen() })
    } else {
        thread_rng().gen()
    }
}

// --- Private ---

fn new_rng() -> StdRng {
    // Random seed, but kept stable for the process for repeatability.
    rand::SeedableRng::seed_from_u64(random_init_seed())
}

fn random_vec(size: usize) -> Vec<u32> {
    let mut rng = new_rng();

    (0..size).map(|_| rng.gen::<u32>()).collect()
}
