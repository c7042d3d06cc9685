use rand::{seq::SliceRandom, Rng};

/// Bounds a candidate pool to at most `cap` entries
///
/// Pools within the cap are returned whole; larger pools are reduced to a
/// uniformly random subset of exactly `cap` entries. Order is not meaningful.
pub fn sample_pool<T: Copy, R: Rng + ?Sized>(pool: &[T], cap: usize, rng: &mut R) -> Vec<T> {
    if pool.len() <= cap {
        return pool.to_vec();
    }
    pool.choose_multiple(rng, cap).copied().collect()
}
