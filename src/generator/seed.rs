/// Derive an independent seed for the feature at `index` of a seeded batch
///
/// Lets any feature be regenerated on its own, or batches be split across
/// workers, while ids still follow the request index.
pub fn seed_for_feature(base_seed: u64, index: usize) -> u64 {
    let mixed = base_seed ^ (index as u64).wrapping_mul(0x9E3779B97F4A7C15);
    mix_u64(mixed)
}

#[inline]
fn mix_u64(mut x: u64) -> u64 {
    x ^= x >> 30;
    x = x.wrapping_mul(0xBF58476D1CE4E5B9);
    x ^= x >> 27;
    x = x.wrapping_mul(0x94D049BB133111EB);
    x ^ (x >> 31)
}
