//! Small, fast, reproducible pseudo-randomness.
//!
//! The annealing driver and the demo problems only need a deterministic
//! stream of uniform draws; a 64-bit xorshift is plenty and keeps runs
//! byte-for-byte reproducible across platforms.

/// 64-bit xorshift generator.
#[derive(Clone, Debug)]
pub struct XorShift {
    x: u64,
}

impl XorShift {
    /// Seed used by [`XorShift::new`].
    pub const DEFAULT_SEED: u64 = 0x0139_408D_CBBF_7A44;

    /// Generator with the default seed.
    pub fn new() -> Self {
        Self::seeded(Self::DEFAULT_SEED)
    }

    /// Generator with an explicit seed. The seed must be non-zero, or
    /// the stream degenerates to all zeros.
    pub fn seeded(seed: u64) -> Self {
        debug_assert!(seed != 0, "xorshift seed must be non-zero");
        Self { x: seed }
    }

    /// Next draw in `[0, 2^64)`.
    #[inline]
    pub fn next_u64(&mut self) -> u64 {
        self.x ^= self.x << 7;
        self.x ^= self.x >> 9;
        self.x
    }

    /// Next draw truncated to 32 bits.
    #[inline]
    pub fn next_u32(&mut self) -> u32 {
        self.next_u64() as u32
    }

    /// Uniform draw in `[0, r)` via the high bits of a 32x32 product.
    #[inline]
    pub fn uniform(&mut self, r: u32) -> u32 {
        ((u64::from(self.next_u32()) * u64::from(r)) >> 32) as u32
    }

    /// Uniform draw in `[l, r)`.
    #[inline]
    pub fn uniform_in(&mut self, l: u32, r: u32) -> u32 {
        l + self.uniform(r - l)
    }

    /// Uniform draw in `[0.0, 1.0]`.
    #[inline]
    pub fn probability(&mut self) -> f64 {
        f64::from(self.next_u32()) * (1.0 / u32::MAX as f64)
    }
}

impl Default for XorShift {
    fn default() -> Self {
        Self::new()
    }
}
