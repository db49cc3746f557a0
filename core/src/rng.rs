//! Deterministic random number generation.
//!
//! RULE: Nothing in the generator may call any platform RNG.
//! All randomness flows through GeneratorRng streams derived
//! from the single master seed for a dataset build.
//!
//! Each generation stage gets its own RNG stream, seeded
//! deterministically from (master_seed XOR stage_index). This means:
//!   - Adding a new stage never changes existing stages' streams.
//!   - Each stage's stream is fully reproducible in isolation.

use rand::SeedableRng;
use rand_pcg::Pcg64Mcg;

/// A named, deterministic RNG for a single generation stage.
pub struct GeneratorRng {
    pub name: &'static str,
    inner: Pcg64Mcg,
}

impl GeneratorRng {
    /// Create a stage RNG from the master seed and a stable
    /// stage index. The index must never change once assigned.
    pub fn new(master_seed: u64, stage_index: u64) -> Self {
        let derived_seed = master_seed ^ (stage_index.wrapping_mul(0x9e37_79b9_7f4a_7c15));
        Self {
            name: "unnamed",
            inner: Pcg64Mcg::seed_from_u64(derived_seed),
        }
    }

    pub fn with_name(mut self, name: &'static str) -> Self {
        self.name = name;
        self
    }

    /// Roll a float in [0.0, 1.0).
    pub fn next_f64(&mut self) -> f64 {
        use rand::RngCore;
        let bits = self.inner.next_u64();
        (bits >> 11) as f64 * (1.0 / (1u64 << 53) as f64)
    }

    /// Roll a u64 in [0, n).
    pub fn next_u64_below(&mut self, n: u64) -> u64 {
        use rand::RngCore;
        assert!(n > 0, "n must be > 0");
        self.inner.next_u64() % n
    }

    /// Bernoulli trial: returns true with probability p.
    pub fn chance(&mut self, p: f64) -> bool {
        self.next_f64() < p
    }

    /// Roll a float uniformly in [lo, hi).
    pub fn in_range(&mut self, lo: f64, hi: f64) -> f64 {
        lo + self.next_f64() * (hi - lo)
    }

    /// Roll an integer uniformly in [lo, hi).
    pub fn in_range_i64(&mut self, lo: i64, hi: i64) -> i64 {
        assert!(lo < hi, "lo must be < hi");
        lo + self.next_u64_below((hi - lo) as u64) as i64
    }

    /// Pick one element of a non-empty slice.
    pub fn pick<'a, T>(&mut self, items: &'a [T]) -> &'a T {
        &items[self.next_u64_below(items.len() as u64) as usize]
    }
}

/// All stage RNGs for a single dataset build, indexed by stable slot.
pub struct RngBank {
    master_seed: u64,
}

impl RngBank {
    pub fn new(master_seed: u64) -> Self {
        Self { master_seed }
    }

    pub fn for_stage(&self, slot: StageSlot) -> GeneratorRng {
        GeneratorRng::new(self.master_seed, slot as u64).with_name(slot.name())
    }
}

/// Stable stage slot assignments.
/// NEVER reorder or remove entries — only append.
/// Reordering changes every stage's seed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u64)]
pub enum StageSlot {
    Customers = 0,
    Subscriptions = 1,
    RecentSubscriptions = 2,
    MrrSeries = 3,
    UserGrowth = 4,
    // Add new stages here — append only.
}

impl StageSlot {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Customers => "customers",
            Self::Subscriptions => "subscriptions",
            Self::RecentSubscriptions => "recent_subscriptions",
            Self::MrrSeries => "mrr_series",
            Self::UserGrowth => "user_growth",
        }
    }
}
