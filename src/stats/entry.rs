//! Immutable aggregate statistics entry
//!
//! An [`AggregateEntry`] accumulates outcome counts, a running rating sum
//! and two game lists for one grouping key. Every operation returns a new
//! value, so entries can be shared across threads freely and `combine` can
//! serve as the reduction step of a parallel fold over game shards.

use crate::config::EntryLimits;
use crate::types::{Color, GameRef};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// Per-position statistics record
///
/// Forms a monoid on the counter fields: [`AggregateEntry::empty`] is the
/// identity of [`AggregateEntry::combine`], and combining is associative
/// and commutative on counters and the rating sum. The game lists carry
/// weaker, documented ordering guarantees under `combine` (see the method
/// docs); tests treat them as multisets when checking commutativity.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AggregateEntry {
    /// Games won by white
    pub white_wins: u64,
    /// Drawn games
    pub draws: u64,
    /// Games won by black
    pub black_wins: u64,
    /// Sum of the contributing games' average ratings
    pub rating_sum: u64,
    /// Contributing games sorted by average rating, highest first; among
    /// equal ratings the most recently folded game ranks first
    pub top_games: Vec<GameRef>,
    /// Contributing games, most recently folded first
    pub recent_games: Vec<GameRef>,
}

impl AggregateEntry {
    /// The identity element: no games, all counters at zero
    pub fn empty() -> Self {
        Self::default()
    }

    /// Entry holding a single game
    ///
    /// Equivalent to `AggregateEntry::empty().with_game(game)`.
    pub fn from_game(game: GameRef) -> Self {
        Self::empty().with_game(game)
    }

    /// Fold one more game into the entry, producing a new entry
    ///
    /// Exactly one outcome counter is incremented based on `game.winner`,
    /// the game's rating is added to the rating sum, and the game becomes
    /// the head of `recent_games`. It is also ranked into `top_games`: the
    /// sort is stable and the new game enters at the front, so among games
    /// of equal rating the most recently folded one ranks first.
    ///
    /// Nothing is pruned here; callers that need bounded lists apply
    /// [`AggregateEntry::truncated`] at their own boundary.
    pub fn with_game(&self, game: GameRef) -> Self {
        let mut entry = self.clone();

        match game.winner {
            Some(Color::White) => entry.white_wins = entry.white_wins.saturating_add(1),
            Some(Color::Black) => entry.black_wins = entry.black_wins.saturating_add(1),
            None => entry.draws = entry.draws.saturating_add(1),
        }
        entry.rating_sum = add_rating_sum(entry.rating_sum, game.average_rating);

        entry.recent_games.insert(0, game.clone());

        entry.top_games.insert(0, game);
        entry
            .top_games
            .sort_by(|a, b| b.average_rating.cmp(&a.average_rating));

        entry
    }

    /// Merge two independently accumulated entries
    ///
    /// Counters and the rating sum are added component-wise, which is
    /// commutative and associative. `top_games` is the stable descending
    /// re-sort of `self`'s games followed by `other`'s, so among equal
    /// ratings all of `self`'s games rank ahead of `other`'s — the exact
    /// tie order depends on argument order. `recent_games` is plain
    /// concatenation with no re-sort: after a merge it is "self's recents,
    /// then other's recents", not a chronological interleaving.
    pub fn combine(&self, other: &AggregateEntry) -> Self {
        let mut top_games = Vec::with_capacity(self.top_games.len() + other.top_games.len());
        top_games.extend_from_slice(&self.top_games);
        top_games.extend_from_slice(&other.top_games);
        top_games.sort_by(|a, b| b.average_rating.cmp(&a.average_rating));

        let mut recent_games =
            Vec::with_capacity(self.recent_games.len() + other.recent_games.len());
        recent_games.extend_from_slice(&self.recent_games);
        recent_games.extend_from_slice(&other.recent_games);

        AggregateEntry {
            white_wins: self.white_wins.saturating_add(other.white_wins),
            draws: self.draws.saturating_add(other.draws),
            black_wins: self.black_wins.saturating_add(other.black_wins),
            rating_sum: add_rating_sum(self.rating_sum, other.rating_sum),
            top_games,
            recent_games,
        }
    }

    /// Total number of games folded into this entry
    pub fn total_games(&self) -> u64 {
        self.white_wins
            .saturating_add(self.draws)
            .saturating_add(self.black_wins)
    }

    /// Mean rating over all contributing games, truncated
    ///
    /// Returns `0` when no games have been folded.
    pub fn average_rating(&self) -> u64 {
        match self.total_games() {
            0 => 0,
            total => self.rating_sum / total,
        }
    }

    /// Count of the most frequent single outcome
    pub fn max_per_winner(&self) -> u64 {
        self.white_wins.max(self.draws).max(self.black_wins)
    }

    /// Apply retention limits, keeping only the highest rated and most
    /// recent games
    ///
    /// `top_games` is already sorted by rating and `recent_games` by
    /// recency, so each cap is a prefix. Counters and the rating sum are
    /// untouched: the derived accessors keep reporting totals over every
    /// game ever folded, only the list contents shrink.
    pub fn truncated(&self, limits: &EntryLimits) -> Self {
        let mut entry = self.clone();

        if let Some(cap) = limits.top_games {
            if entry.top_games.len() > cap {
                debug!(
                    "Truncating {} top games over cap {}",
                    entry.top_games.len() - cap,
                    cap
                );
                entry.top_games.truncate(cap);
            }
        }

        if let Some(cap) = limits.recent_games {
            if entry.recent_games.len() > cap {
                debug!(
                    "Truncating {} recent games over cap {}",
                    entry.recent_games.len() - cap,
                    cap
                );
                entry.recent_games.truncate(cap);
            }
        }

        entry
    }
}

/// Add to the rating sum, saturating at the numeric limit
///
/// Overflow is a documented limit of the core, not a checked error; the
/// average becomes inexact once the sum saturates.
fn add_rating_sum(current: u64, delta: u64) -> u64 {
    match current.checked_add(delta) {
        Some(sum) => sum,
        None => {
            warn!("Rating sum saturated at u64::MAX; average rating is no longer exact");
            u64::MAX
        }
    }
}
