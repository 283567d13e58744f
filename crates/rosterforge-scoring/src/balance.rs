//! Partition quality: rating balance, position balance and pairing penalty.
//!
//! Mirrors a load-balance collector: each term measures how unevenly
//! something is spread across teams, and zero means perfectly even.

use std::borrow::Borrow;

use rosterforge_core::{BalanceScore, Player};

use crate::pairing::PairingHistory;

/// Per-position member counts, indexed by `Position::index`.
pub fn position_counts<P: Borrow<Player>>(team: &[P]) -> [usize; 4] {
    let mut counts = [0; 4];
    for player in team {
        counts[player.borrow().position.index()] += 1;
    }
    counts
}

/// Unrounded mean rating, 0 for an empty team.
fn mean_rating<P: Borrow<Player>>(team: &[P]) -> f64 {
    let sum: f64 = team.iter().map(|p| p.borrow().rating).sum();
    sum / team.len().max(1) as f64
}

/// Population standard deviation of the team average ratings.
pub fn rating_balance<T, P>(teams: &[T]) -> f64
where
    T: AsRef<[P]>,
    P: Borrow<Player>,
{
    if teams.is_empty() {
        return 0.0;
    }
    let averages: Vec<f64> = teams.iter().map(|t| mean_rating(t.as_ref())).collect();
    let n = averages.len() as f64;
    let mean = averages.iter().sum::<f64>() / n;
    let variance = averages.iter().map(|a| (a - mean).powi(2)).sum::<f64>() / n;
    variance.sqrt()
}

/// Sum over teams of most-filled minus least-filled position count.
pub fn position_balance<T, P>(teams: &[T]) -> u32
where
    T: AsRef<[P]>,
    P: Borrow<Player>,
{
    teams
        .iter()
        .map(|team| {
            let counts = position_counts(team.as_ref());
            let max = counts.iter().max().copied().unwrap_or(0);
            let min = counts.iter().min().copied().unwrap_or(0);
            (max - min) as u32
        })
        .sum()
}

/// Sum over every same-team pair of the squared historical pairing count.
pub fn pairing_penalty<T, P>(teams: &[T], history: &PairingHistory) -> u64
where
    T: AsRef<[P]>,
    P: Borrow<Player>,
{
    if history.is_empty() {
        return 0;
    }
    let mut penalty = 0u64;
    for team in teams {
        let members = team.as_ref();
        for (i, a) in members.iter().enumerate() {
            for b in &members[i + 1..] {
                let count = u64::from(history.count(&a.borrow().id, &b.borrow().id));
                penalty += count * count;
            }
        }
    }
    penalty
}

/// Scores a partition. Lower is better.
///
/// `history` is `None` when pairing diversification is disabled, which
/// zeroes the pairing term.
///
/// # Examples
///
/// ```
/// use rosterforge_core::{Player, Position};
/// use rosterforge_scoring::evaluate;
///
/// let teams = vec![
///     vec![
///         Player::new("a", "A", 4.0, Position::Goalkeeper),
///         Player::new("b", "B", 2.0, Position::Forward),
///     ],
///     vec![
///         Player::new("c", "C", 3.0, Position::Goalkeeper),
///         Player::new("d", "D", 3.0, Position::Forward),
///     ],
/// ];
///
/// let score = evaluate(&teams, None);
/// assert_eq!(score.rating_balance, 0.0);
/// // Each team: one GK, one FWD, zero DEF/MID.
/// assert_eq!(score.position_balance, 2);
/// assert_eq!(score.composite(), 2.0);
/// ```
pub fn evaluate<T, P>(teams: &[T], history: Option<&PairingHistory>) -> BalanceScore
where
    T: AsRef<[P]>,
    P: Borrow<Player>,
{
    BalanceScore::new(
        rating_balance(teams),
        position_balance(teams),
        history.map_or(0, |h| pairing_penalty(teams, h)),
    )
}
