//! RNG module - seeded uniform selection
//!
//! Shape kind, color and initial orientation are each drawn uniformly from their
//! closed sets. A small LCG keeps every game reproducible from its seed.

use tetrix_types::{BlockColor, Orientation, ShapeKind};

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

    /// Generate random value in range [0, max)
    ///
    /// Uses the high bits; the low bits of a power-of-two LCG cycle with a short period.
    pub fn next_range(&mut self, max: u32) -> u32 {
        debug_assert!(max > 0);
        (self.next_u32() >> 16) % max
    }

    /// Pick one element uniformly from a non-empty slice
    pub fn pick<T: Copy>(&mut self, items: &[T]) -> T {
        items[self.next_range(items.len() as u32) as usize]
    }

    pub fn shape_kind(&mut self) -> ShapeKind {
        self.pick(&ShapeKind::ALL)
    }

    pub fn color(&mut self) -> BlockColor {
        self.pick(&BlockColor::ALL)
    }

    pub fn orientation(&mut self) -> Orientation {
        self.pick(&Orientation::ALL)
    }
}

impl Default for SimpleRng {
    fn default() -> Self {
        Self::new(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_rng_deterministic() {
        let mut rng1 = SimpleRng::new(12345);
        let mut rng2 = SimpleRng::new(12345);

        // Same seed should produce same sequence
        for _ in 0..100 {
            assert_eq!(rng1.next_u32(), rng2.next_u32());
        }
    }

    #[test]
    fn test_rng_different_seeds() {
        let mut rng1 = SimpleRng::new(12345);
        let mut rng2 = SimpleRng::new(54321);

        assert_ne!(rng1.next_u32(), rng2.next_u32());
    }

    #[test]
    fn test_zero_seed_is_remapped() {
        let mut zero = SimpleRng::new(0);
        let mut one = SimpleRng::new(1);
        assert_eq!(zero.next_u32(), one.next_u32());
    }

    #[test]
    fn test_next_range_stays_in_bounds() {
        let mut rng = SimpleRng::new(7);
        for _ in 0..1000 {
            assert!(rng.next_range(7) < 7);
        }
    }

    #[test]
    fn test_exactly_seven_kinds_reachable() {
        let mut rng = SimpleRng::new(99);
        let seen: HashSet<ShapeKind> = (0..500).map(|_| rng.shape_kind()).collect();
        assert_eq!(seen.len(), 7);
    }

    #[test]
    fn test_all_colors_and_orientations_reachable() {
        let mut rng = SimpleRng::new(3);
        let colors: HashSet<BlockColor> = (0..500).map(|_| rng.color()).collect();
        let orientations: HashSet<Orientation> = (0..500).map(|_| rng.orientation()).collect();
        assert_eq!(colors.len(), 6);
        assert_eq!(orientations.len(), 4);
    }
}
