//! RNG module - deterministic random source for drop rolls
//!
//! Mining is the only randomized behavior in the game, so the roll source is
//! injected wherever drops are resolved. [`SimpleRng`] is a small LCG that
//! makes whole sessions reproducible from a seed; tests substitute scripted
//! [`Roll`] implementations instead.

/// Source of independent drop rolls.
pub trait Roll {
    /// Roll once; succeeds with the given probability in `[0.0, 1.0]`.
    fn roll(&mut self, chance: f64) -> bool;
}

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // Avoid 0 seed which would produce all zeros
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        // LCG formula: (a * state + c) mod m
        // Using Numerical Recipes constants: a=1664525, c=1013904223, m=2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate a uniform f64 in `[0.0, 1.0)`
    pub fn next_f64(&mut self) -> f64 {
        // 2^32 is exact in f64, so the quotient never reaches 1.0.
        f64::from(self.next_u32()) / 4_294_967_296.0
    }
}

impl Roll for SimpleRng {
    fn roll(&mut self, chance: f64) -> bool {
        self.next_f64() < chance
    }
}
