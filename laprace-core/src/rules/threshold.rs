//! Dice-roll advancement.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use super::{Rule, Verdict};

/// Passes when a uniform roll in `0..=max_roll` reaches `threshold`.
#[derive(Debug)]
pub struct ThresholdRule {
    threshold: u8,
    max_roll: u8,
    rng: SmallRng,
}

impl ThresholdRule {
    pub const CLASSIC_THRESHOLD: u8 = 4;
    pub const CLASSIC_MAX_ROLL: u8 = 9;

    /// Creates a rule seeded from the thread-local generator.
    pub fn new(threshold: u8, max_roll: u8) -> Self {
        Self {
            threshold,
            max_roll,
            rng: SmallRng::from_rng(&mut rand::rng()),
        }
    }

    /// Creates a reproducible rule.
    pub fn seeded(threshold: u8, max_roll: u8, seed: u64) -> Self {
        Self {
            threshold,
            max_roll,
            rng: SmallRng::seed_from_u64(seed),
        }
    }

    /// Rolls 0 through 9 and moves on 4 or more.
    pub fn classic() -> Self {
        Self::new(Self::CLASSIC_THRESHOLD, Self::CLASSIC_MAX_ROLL)
    }

    pub fn threshold(&self) -> u8 {
        self.threshold
    }

    pub fn max_roll(&self) -> u8 {
        self.max_roll
    }
}

impl Rule for ThresholdRule {
    #[inline]
    fn evaluate(&mut self) -> Verdict {
        let roll = self.rng.random_range(0..=self.max_roll);
        (roll >= self.threshold).into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classic_pass_rate() {
        let mut rule = ThresholdRule::seeded(4, 9, 7);
        let iterations = 10_000;
        let passes = (0..iterations)
            .filter(|_| rule.evaluate().is_pass())
            .count();
        let rate = passes as f64 / iterations as f64;
        // 6 of 10 faces pass; allow a tolerance of 5%
        assert!((rate - 0.6).abs() < 0.05);
    }

    #[test]
    fn test_zero_threshold_always_passes() {
        let mut rule = ThresholdRule::seeded(0, 9, 1);
        assert!((0..100).all(|_| rule.evaluate().is_pass()));
    }

    #[test]
    fn test_unreachable_threshold_never_passes() {
        let mut rule = ThresholdRule::seeded(10, 9, 1);
        assert!((0..100).all(|_| rule.evaluate() == Verdict::Fail));
    }

    #[test]
    fn test_same_seed_same_rolls() {
        let mut a = ThresholdRule::seeded(4, 9, 42);
        let mut b = ThresholdRule::seeded(4, 9, 42);
        for _ in 0..50 {
            assert_eq!(a.evaluate(), b.evaluate());
        }
    }
}
