//! Pairing history: how often two players recently shared a team.

use std::borrow::Borrow;
use std::collections::HashMap;

use rosterforge_core::{Player, PlayerId, TeamSelection};

/// Number of most recent selections considered by default.
pub const DEFAULT_HISTORY_WINDOW: usize = 5;

/// Symmetric co-occurrence counts between players.
///
/// Each count is the number of selections, within the window, in which the
/// two players were on the same team. Lookups are order independent:
/// `count(a, b) == count(b, a)` always holds because every recorded pair is
/// stored under both orientations.
///
/// # Examples
///
/// ```
/// use rosterforge_core::PlayerId;
/// use rosterforge_scoring::PairingHistory;
///
/// let (a, b) = (PlayerId::new("a"), PlayerId::new("b"));
/// let mut history = PairingHistory::new();
/// history.record(&a, &b);
/// history.record(&b, &a);
///
/// assert_eq!(history.count(&a, &b), 2);
/// assert_eq!(history.count(&b, &a), 2);
/// assert_eq!(history.pair_count(), 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PairingHistory {
    counts: HashMap<PlayerId, HashMap<PlayerId, u32>>,
}

impl PairingHistory {
    /// Creates an empty history.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds the history from the last `window` selections.
    ///
    /// `selections` must be in chronological order; anything older than the
    /// window is ignored. Every pair of teammates in every team of a
    /// selection adds one to that pair's count.
    pub fn from_selections(selections: &[TeamSelection], window: usize) -> Self {
        let start = selections.len().saturating_sub(window);
        let mut history = Self::new();

        for selection in &selections[start..] {
            for team in &selection.teams {
                let ids: Vec<&PlayerId> = team.player_ids().collect();
                for (i, a) in ids.iter().enumerate() {
                    for b in &ids[i + 1..] {
                        history.record(a, b);
                    }
                }
            }
        }

        history
    }

    /// Records one shared team for `a` and `b`. A player paired with
    /// itself is ignored.
    pub fn record(&mut self, a: &PlayerId, b: &PlayerId) {
        if a == b {
            return;
        }
        self.bump(a, b);
        self.bump(b, a);
    }

    fn bump(&mut self, from: &PlayerId, to: &PlayerId) {
        *self
            .counts
            .entry(from.clone())
            .or_default()
            .entry(to.clone())
            .or_insert(0) += 1;
    }

    /// Number of recorded shared teams for the pair.
    #[inline]
    pub fn count(&self, a: &PlayerId, b: &PlayerId) -> u32 {
        self.counts
            .get(a)
            .and_then(|row| row.get(b))
            .copied()
            .unwrap_or(0)
    }

    /// Sum of pair counts between `player` and each of `teammates`.
    pub fn teammate_count<P: Borrow<Player>>(&self, player: &PlayerId, teammates: &[P]) -> u32 {
        let Some(row) = self.counts.get(player) else {
            return 0;
        };
        teammates
            .iter()
            .map(Borrow::borrow)
            .filter_map(|mate: &Player| row.get(&mate.id))
            .sum()
    }

    /// Returns true if no pair has been recorded.
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Number of distinct recorded pairs.
    pub fn pair_count(&self) -> usize {
        self.counts.values().map(HashMap::len).sum::<usize>() / 2
    }

    /// Iterates over recorded pairs once each, lower id first.
    pub fn pairs(&self) -> impl Iterator<Item = (&PlayerId, &PlayerId, u32)> {
        self.counts.iter().flat_map(|(a, row)| {
            row.iter()
                .filter(move |(b, _)| a < *b)
                .map(move |(b, &count)| (a, b, count))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rosterforge_test::roster::{selection, team_of};

    fn id(s: &str) -> PlayerId {
        PlayerId::new(s)
    }

    #[test]
    fn test_counts_once_per_shared_team_per_selection() {
        let history = PairingHistory::from_selections(
            &[
                selection("s1", vec![team_of(&["a", "b", "c"]), team_of(&["d", "e"])]),
                selection("s2", vec![team_of(&["a", "b"]), team_of(&["c", "d", "e"])]),
            ],
            DEFAULT_HISTORY_WINDOW,
        );

        assert_eq!(history.count(&id("a"), &id("b")), 2);
        assert_eq!(history.count(&id("a"), &id("c")), 1);
        assert_eq!(history.count(&id("d"), &id("e")), 2);
        assert_eq!(history.count(&id("a"), &id("e")), 0);
        assert_eq!(history.pair_count(), 6);
    }

    #[test]
    fn test_symmetry_for_every_pair() {
        let history = PairingHistory::from_selections(
            &[
                selection("s1", vec![team_of(&["z", "a", "m"])]),
                selection("s2", vec![team_of(&["m", "z"]), team_of(&["a", "q"])]),
            ],
            DEFAULT_HISTORY_WINDOW,
        );

        let ids = ["a", "m", "q", "z"];
        for a in ids {
            for b in ids {
                assert_eq!(history.count(&id(a), &id(b)), history.count(&id(b), &id(a)));
            }
        }
        for (low, high, count) in history.pairs() {
            assert!(low < high);
            assert_eq!(history.count(high, low), count);
        }
    }

    #[test]
    fn test_only_most_recent_window_counts() {
        let mut selections = vec![selection("old", vec![team_of(&["a", "b"])])];
        for i in 0..DEFAULT_HISTORY_WINDOW {
            selections.push(selection(&format!("s{i}"), vec![team_of(&["c", "d"])]));
        }

        let history = PairingHistory::from_selections(&selections, DEFAULT_HISTORY_WINDOW);
        assert_eq!(history.count(&id("a"), &id("b")), 0);
        assert_eq!(history.count(&id("c"), &id("d")), 5);

        let wider = PairingHistory::from_selections(&selections, DEFAULT_HISTORY_WINDOW + 1);
        assert_eq!(wider.count(&id("a"), &id("b")), 1);
    }

    #[test]
    fn test_zero_window_is_empty() {
        let history =
            PairingHistory::from_selections(&[selection("s1", vec![team_of(&["a", "b"])])], 0);
        assert!(history.is_empty());
    }

    #[test]
    fn test_self_pair_ignored() {
        let mut history = PairingHistory::new();
        history.record(&id("a"), &id("a"));
        assert!(history.is_empty());
        assert_eq!(history.count(&id("a"), &id("a")), 0);
    }

    #[test]
    fn test_teammate_count_sums_pairs() {
        let history = PairingHistory::from_selections(
            &[
                selection("s1", vec![team_of(&["a", "b", "c"])]),
                selection("s2", vec![team_of(&["a", "b"])]),
            ],
            DEFAULT_HISTORY_WINDOW,
        );
        let teammates = team_of(&["b", "c", "x"]).players;
        assert_eq!(history.teammate_count(&id("a"), &teammates), 3);
        assert_eq!(history.teammate_count(&id("x"), &teammates), 0);
    }
}
