//! Deterministic seedable RNG for randomized policies.
//!
//! # Determinism strategy
//!
//! All randomness in a run flows from a single `SimRng` seeded by
//! `SimConfig::seed`.  Policies never touch thread-local or OS entropy; they
//! receive `&mut SimRng` as a call parameter, so the same seed and the same
//! call sequence always reproduce a run exactly.
//!
//! Independent sub-streams come from `child(offset)`: the offset is mixed
//! with the 64-bit fractional part of the golden ratio, which spreads
//! consecutive offsets uniformly across the seed space.  Deriving one child
//! per consumer means adding a new consumer never disturbs the draws of
//! existing ones.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::Floor;

/// 64-bit fractional golden-ratio constant for seed mixing.
const MIXING_CONSTANT: u64 = 0x9e37_79b9_7f4a_7c15;

/// Seedable simulation RNG.
///
/// The type is `!Sync` by construction — a run owns exactly one (plus any
/// derived children) and hands out `&mut` access, never shared access.
pub struct SimRng(SmallRng);

impl SimRng {
    pub fn new(seed: u64) -> Self {
        SimRng(SmallRng::seed_from_u64(seed))
    }

    /// Derive a child `SimRng` with a different seed offset — useful for
    /// giving each randomized policy its own independent stream.
    pub fn child(&mut self, offset: u64) -> SimRng {
        let child_seed: u64 = self.0.r#gen::<u64>() ^ offset.wrapping_mul(MIXING_CONSTANT);
        SimRng(SmallRng::seed_from_u64(child_seed))
    }

    /// Expose the inner `SmallRng` for use with `rand` distribution types.
    #[inline]
    pub fn inner(&mut self) -> &mut SmallRng {
        &mut self.0
    }

    /// Generate a value uniformly in `range`.
    #[inline]
    pub fn gen_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distributions::uniform::SampleUniform,
        R: rand::distributions::uniform::SampleRange<T>,
    {
        self.0.gen_range(range)
    }

    /// `true` with probability `p` (clamped to [0, 1]).
    #[inline]
    pub fn gen_bool(&mut self, p: f64) -> bool {
        self.0.gen_bool(p.clamp(0.0, 1.0))
    }

    /// Choose a random element from a slice.
    /// Returns `None` if the slice is empty.
    #[inline]
    pub fn pick<'a, T>(&mut self, slice: &'a [T]) -> Option<&'a T> {
        use rand::seq::SliceRandom;
        slice.choose(&mut self.0)
    }

    /// Draw two distinct floors uniformly without replacement from
    /// `[GROUND, top]`.  Distinctness is by construction, so the pair is
    /// always a valid (start, target) for a person.
    ///
    /// # Panics
    /// Panics if `top` is the ground floor (fewer than two floors to draw
    /// from).  `SimConfig::validate()` rules that building out up front.
    pub fn two_distinct_floors(&mut self, top: Floor) -> (Floor, Floor) {
        let picked = rand::seq::index::sample(&mut self.0, top.0 as usize, 2);
        (
            Floor(picked.index(0) as u32 + 1),
            Floor(picked.index(1) as u32 + 1),
        )
    }
}
