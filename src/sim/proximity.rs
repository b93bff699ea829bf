//! Hot/cold proximity hints
//!
//! Advisory only: never affects attempts or the outcome.

use serde::{Deserialize, Serialize};

use super::budget::range_size;
use crate::consts::{PROXIMITY_HOT_PCT, PROXIMITY_VERY_HOT_PCT, PROXIMITY_WARM_PCT};

/// Distance tier, closest first
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Proximity {
    VeryHot,
    Hot,
    Warm,
    Cold,
}

/// `max(1, floor(pct% of range))`
fn threshold(range: u128, pct: u128) -> u128 {
    (range * pct / 100).max(1)
}

pub fn classify(guess: i64, secret: i64, min: i64, max: i64) -> Proximity {
    let range = range_size(min, max);
    let d = (guess as i128 - secret as i128).unsigned_abs();
    if d <= threshold(range, PROXIMITY_VERY_HOT_PCT) {
        Proximity::VeryHot
    } else if d <= threshold(range, PROXIMITY_HOT_PCT) {
        Proximity::Hot
    } else if d <= threshold(range, PROXIMITY_WARM_PCT) {
        Proximity::Warm
    } else {
        Proximity::Cold
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hundred_range_tiers() {
        // thresholds 1 / 3 / 7
        assert_eq!(classify(49, 50, 1, 100), Proximity::VeryHot);
        assert_eq!(classify(52, 50, 1, 100), Proximity::Hot);
        assert_eq!(classify(53, 50, 1, 100), Proximity::Hot);
        assert_eq!(classify(54, 50, 1, 100), Proximity::Warm);
        assert_eq!(classify(57, 50, 1, 100), Proximity::Warm);
        assert_eq!(classify(58, 50, 1, 100), Proximity::Cold);
    }

    #[test]
    fn test_small_range_floors_at_one() {
        // every threshold floors to 1
        assert_eq!(classify(4, 5, 1, 10), Proximity::VeryHot);
        assert_eq!(classify(3, 5, 1, 10), Proximity::Cold);
    }

    #[test]
    fn test_thousand_range() {
        // thresholds 10 / 30 / 70
        assert_eq!(classify(510, 500, 1, 1000), Proximity::VeryHot);
        assert_eq!(classify(530, 500, 1, 1000), Proximity::Hot);
        assert_eq!(classify(430, 500, 1, 1000), Proximity::Warm);
        assert_eq!(classify(429, 500, 1, 1000), Proximity::Cold);
    }

    #[test]
    fn test_extreme_distance() {
        assert_eq!(classify(i64::MIN, i64::MAX, i64::MIN, i64::MAX), Proximity::Cold);
    }
}
