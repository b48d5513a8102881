//! Seeded linear-congruential generator and Fisher-Yates shuffle.
//!
//! Nothing here reads a clock or platform RNG: a given seed always yields
//! the same stream, and a given `(sequence, seed)` always yields the same
//! permutation.
//!
//! Step: `state' = (state * 9301 + 49297) mod 233280`, unit value
//! `state' / 233280` in `[0, 1)`.

/// LCG multiplier.
pub const LCG_MULTIPLIER: u64 = 9301;
/// LCG increment.
pub const LCG_INCREMENT: u64 = 49297;
/// LCG modulus.
pub const LCG_MODULUS: u64 = 233_280;

/// Deterministic uniform stream in `[0, 1)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lcg {
    state: u64,
}

impl Lcg {
    /// Seed the generator. Negative seeds are reduced into the modulus
    /// first, which leaves the stream unchanged for non-negative ones.
    pub fn new(seed: i64) -> Self {
        Self {
            state: seed.rem_euclid(LCG_MODULUS as i64) as u64,
        }
    }

    /// Advance and return the next unit value.
    pub fn next_unit(&mut self) -> f64 {
        self.state = (self.state * LCG_MULTIPLIER + LCG_INCREMENT) % LCG_MODULUS;
        self.state as f64 / LCG_MODULUS as f64
    }

    /// Next index in `0..=max`.
    fn next_index(&mut self, max: usize) -> usize {
        let j = (self.next_unit() * (max as f64 + 1.0)).floor() as usize;
        j.min(max)
    }
}

/// Shuffle `values` in place, from the last index down to 1.
pub fn shuffle_in_place<T>(values: &mut [T], seed: i64) {
    let mut rng = Lcg::new(seed);
    for i in (1..values.len()).rev() {
        let j = rng.next_index(i);
        values.swap(i, j);
    }
}

/// Seeded permutation of `values`; the input is left untouched.
pub fn shuffle<T: Clone>(values: &[T], seed: i64) -> Vec<T> {
    let mut out = values.to_vec();
    shuffle_in_place(&mut out, seed);
    out
}
