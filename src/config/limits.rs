//! Retention limits for aggregate entry game lists
//!
//! The aggregation algebra itself never prunes, so both game lists grow
//! with every folded game and each fold re-sorts the full top list. Systems
//! that need bounded memory apply these limits at their own boundary via
//! `AggregateEntry::truncated`.

use serde::{Deserialize, Serialize};

use crate::error::{Result, StatsError};

/// Caps on the game lists carried by an aggregate entry
///
/// `None` means unbounded, which is the default and the literal aggregation
/// semantics.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntryLimits {
    /// Keep only this many of the highest rated games
    pub top_games: Option<usize>,
    /// Keep only this many of the most recent games
    pub recent_games: Option<usize>,
}

impl EntryLimits {
    /// Limits that never prune anything
    pub fn unbounded() -> Self {
        Self::default()
    }

    /// Cap both lists
    pub fn capped(top_games: usize, recent_games: usize) -> Self {
        Self {
            top_games: Some(top_games),
            recent_games: Some(recent_games),
        }
    }

    /// Validate configuration parameters
    ///
    /// A cap of zero would silently discard every game while the counters
    /// keep growing; leave the field unset for "unbounded" instead.
    pub fn validate(&self) -> Result<()> {
        if self.top_games == Some(0) {
            return Err(StatsError::ConfigurationError {
                message: "Top games cap must be positive".to_string(),
            }
            .into());
        }

        if self.recent_games == Some(0) {
            return Err(StatsError::ConfigurationError {
                message: "Recent games cap must be positive".to_string(),
            }
            .into());
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_unbounded() {
        let limits = EntryLimits::default();
        assert_eq!(limits, EntryLimits::unbounded());
        assert_eq!(limits.top_games, None);
        assert_eq!(limits.recent_games, None);
        assert!(limits.validate().is_ok());
    }

    #[test]
    fn test_capped_limits_validate() {
        let limits = EntryLimits::capped(4, 8);
        assert_eq!(limits.top_games, Some(4));
        assert_eq!(limits.recent_games, Some(8));
        assert!(limits.validate().is_ok());
    }

    #[test]
    fn test_zero_caps_are_rejected() {
        let limits = EntryLimits {
            top_games: Some(0),
            recent_games: None,
        };
        assert!(limits.validate().is_err());

        let limits = EntryLimits {
            top_games: None,
            recent_games: Some(0),
        };
        assert!(limits.validate().is_err());
    }
}
