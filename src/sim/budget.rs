//! Attempt budget
//!
//! The budget is the number of bits a binary search needs over the range,
//! plus difficulty-dependent slack.

use serde::{Deserialize, Serialize};

/// Difficulty levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    #[default]
    Normal,
    Hard,
}

impl Difficulty {
    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Normal => "normal",
            Difficulty::Hard => "hard",
        }
    }

    /// Extra guesses granted on top of the binary-search minimum
    pub fn slack(&self) -> u32 {
        match self {
            Difficulty::Easy => 2,
            Difficulty::Normal => 1,
            Difficulty::Hard => 0,
        }
    }

    /// Default range used when the player doesn't give one
    pub fn preset_range(&self) -> (i64, i64) {
        match self {
            Difficulty::Easy => (1, 50),
            Difficulty::Normal => (1, 100),
            Difficulty::Hard => (1, 1000),
        }
    }
}

impl std::str::FromStr for Difficulty {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "easy" => Ok(Difficulty::Easy),
            "normal" => Ok(Difficulty::Normal),
            "hard" => Ok(Difficulty::Hard),
            other => Err(format!(
                "invalid difficulty '{other}' (expected easy, normal or hard)"
            )),
        }
    }
}

/// Number of candidate values in `[min, max]`, zero if the range is inverted
pub fn range_size(min: i64, max: i64) -> u128 {
    if max < min {
        return 0;
    }
    (max as i128 - min as i128 + 1) as u128
}

/// `ceil(log2(n))`, with `n <= 1` mapping to 0
pub fn ceil_log2(n: u128) -> u32 {
    if n <= 1 {
        0
    } else {
        u128::BITS - (n - 1).leading_zeros()
    }
}

/// Total attempts for a round
///
/// An explicit override wins outright and is floored at 1.
pub fn compute(min: i64, max: i64, difficulty: Difficulty, attempts_override: Option<i64>) -> u32 {
    if let Some(k) = attempts_override {
        return k.clamp(1, u32::MAX as i64) as u32;
    }
    ceil_log2(range_size(min, max)) + difficulty.slack()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_ceil_log2() {
        assert_eq!(ceil_log2(1), 0);
        assert_eq!(ceil_log2(2), 1);
        assert_eq!(ceil_log2(3), 2);
        assert_eq!(ceil_log2(4), 2);
        assert_eq!(ceil_log2(100), 7);
        assert_eq!(ceil_log2(1000), 10);
        assert_eq!(ceil_log2(1024), 10);
        assert_eq!(ceil_log2(1025), 11);
    }

    #[test]
    fn test_normal_hundred() {
        assert_eq!(compute(1, 100, Difficulty::Normal, None), 8);
        assert_eq!(compute(1, 100, Difficulty::Easy, None), 9);
        assert_eq!(compute(1, 100, Difficulty::Hard, None), 7);
    }

    #[test]
    fn test_smallest_range_hard() {
        assert_eq!(compute(0, 1, Difficulty::Hard, None), 1);
    }

    #[test]
    fn test_override() {
        assert_eq!(compute(1, 1000, Difficulty::Hard, Some(3)), 3);
        assert_eq!(compute(1, 10, Difficulty::Easy, Some(0)), 1);
        assert_eq!(compute(1, 10, Difficulty::Easy, Some(-7)), 1);
    }

    #[test]
    fn test_full_i64_range() {
        assert_eq!(range_size(i64::MIN, i64::MAX), 1u128 << 64);
        assert_eq!(compute(i64::MIN, i64::MAX, Difficulty::Hard, None), 64);
    }

    #[test]
    fn test_difficulty_from_str() {
        assert_eq!("EASY".parse::<Difficulty>(), Ok(Difficulty::Easy));
        assert_eq!("hard".parse::<Difficulty>(), Ok(Difficulty::Hard));
        assert!("extreme".parse::<Difficulty>().is_err());
    }

    proptest! {
        #[test]
        fn prop_difficulty_ordering(min in -10_000i64..10_000, span in 1i64..1_000_000) {
            let max = min + span;
            let hard = compute(min, max, Difficulty::Hard, None);
            let normal = compute(min, max, Difficulty::Normal, None);
            let easy = compute(min, max, Difficulty::Easy, None);
            prop_assert!(hard >= 1);
            prop_assert!(hard <= normal && normal <= easy);
        }

        #[test]
        fn prop_monotonic_in_range_size(min in -10_000i64..10_000, span in 1i64..1_000_000, extra in 0i64..1_000) {
            let small = compute(min, min + span, Difficulty::Normal, None);
            let large = compute(min, min + span + extra, Difficulty::Normal, None);
            prop_assert!(small <= large);
        }

        #[test]
        fn prop_override_ignores_range(min in -1000i64..1000, span in 1i64..10_000, k in -100i64..100) {
            for difficulty in [Difficulty::Easy, Difficulty::Normal, Difficulty::Hard] {
                prop_assert_eq!(compute(min, min + span, difficulty, Some(k)), k.max(1) as u32);
            }
        }
    }
}
