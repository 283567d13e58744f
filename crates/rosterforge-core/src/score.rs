//! BalanceScore - Composite quality of a candidate partition

use std::fmt;

/// Quality of a team partition. Lower is better.
///
/// The composite combines three terms:
/// - `rating_balance`: population standard deviation of team average ratings
/// - `position_balance`: per team, most-filled minus least-filled position, summed
/// - `pairing_penalty`: sum of squared historical pairing counts of teammates
///
/// # Examples
///
/// ```
/// use rosterforge_core::BalanceScore;
///
/// let score = BalanceScore::new(0.25, 3, 4);
/// assert_eq!(score.composite(), 0.5 + 3.0 + 2.0);
///
/// let better = BalanceScore::new(0.0, 2, 0);
/// assert!(better.is_better_than(&score));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct BalanceScore {
    pub rating_balance: f64,
    pub position_balance: u32,
    pub pairing_penalty: u64,
}

impl BalanceScore {
    /// Weight of the rating balance term.
    pub const RATING_WEIGHT: f64 = 2.0;

    /// Weight of the position balance term.
    pub const POSITION_WEIGHT: f64 = 1.0;

    /// Weight of the pairing penalty term.
    pub const PAIRING_WEIGHT: f64 = 0.5;

    /// The perfect score.
    pub const ZERO: BalanceScore = BalanceScore {
        rating_balance: 0.0,
        position_balance: 0,
        pairing_penalty: 0,
    };

    #[inline]
    pub const fn new(rating_balance: f64, position_balance: u32, pairing_penalty: u64) -> Self {
        Self {
            rating_balance,
            position_balance,
            pairing_penalty,
        }
    }

    /// Weighted sum of the three terms.
    #[inline]
    pub fn composite(&self) -> f64 {
        Self::RATING_WEIGHT * self.rating_balance
            + Self::POSITION_WEIGHT * f64::from(self.position_balance)
            + Self::PAIRING_WEIGHT * self.pairing_penalty as f64
    }

    /// Returns true if this score is strictly lower than `other`.
    ///
    /// Equal composites are not better, so the first of two equal
    /// candidates is kept.
    #[inline]
    pub fn is_better_than(&self, other: &BalanceScore) -> bool {
        self.composite() < other.composite()
    }
}

impl fmt::Display for BalanceScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:.3} (rating {:.3}, position {}, pairing {})",
            self.composite(),
            self.rating_balance,
            self.position_balance,
            self.pairing_penalty
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_composite_weights() {
        let score = BalanceScore::new(1.5, 2, 6);
        assert!((score.composite() - (3.0 + 2.0 + 3.0)).abs() < f64::EPSILON);
    }

    #[test]
    fn test_zero_is_not_better_than_itself() {
        assert!(!BalanceScore::ZERO.is_better_than(&BalanceScore::ZERO));
        assert_eq!(BalanceScore::default(), BalanceScore::ZERO);
    }

    #[test]
    fn test_equal_composites_do_not_replace() {
        let first = BalanceScore::new(0.5, 0, 0);
        let second = BalanceScore::new(0.0, 1, 0);
        assert!(!second.is_better_than(&first));
        assert!(!first.is_better_than(&second));
    }

    #[test]
    fn test_display() {
        let score = BalanceScore::new(0.25, 1, 2);
        assert_eq!(score.to_string(), "2.500 (rating 0.250, position 1, pairing 2)");
    }
}
