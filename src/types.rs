//! Common types used throughout the statistics core

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::utils::{current_timestamp, generate_game_id};

/// Unique identifier for games
pub type GameId = Uuid;

/// Side that won a game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Color {
    White,
    Black,
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Color::White => write!(f, "White"),
            Color::Black => write!(f, "Black"),
        }
    }
}

/// Reference to a single played game
///
/// The game loader owns the full game record; the statistics core only
/// carries this handle and never mutates it. `winner` is `None` for a draw.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRef {
    pub id: GameId,
    /// Average of the two players' ratings
    pub average_rating: u64,
    pub winner: Option<Color>,
    /// When the game was played; carried for the surrounding system,
    /// never used for ordering inside this crate
    pub played_at: DateTime<Utc>,
}

impl GameRef {
    /// Create a reference for a freshly observed game
    pub fn new(average_rating: u64, winner: Option<Color>) -> Self {
        Self {
            id: generate_game_id(),
            average_rating,
            winner,
            played_at: current_timestamp(),
        }
    }
}
