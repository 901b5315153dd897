//! Game configuration.
//!
//! Hosts configure a game at creation time:
//! - Player display names (cosmetic; never read by the rules)
//! - Win-check strategy
//!
//! ```
//! use conhex::core::{GameConfig, Player, WinCheck};
//!
//! let config = GameConfig::new()
//!     .with_player_names("alice", "bob")
//!     .with_win_check(WinCheck::BorderHeuristic);
//!
//! assert_eq!(config.player_names[Player::Player2], "bob");
//! assert_eq!(config.win_check, WinCheck::BorderHeuristic);
//! ```

use serde::{Deserialize, Serialize};

use super::player::{Player, PlayerMap};

/// How the win detector decides whether to run the connectivity scan.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WinCheck {
    /// Always run the full connectivity scan.
    #[default]
    FullScan,

    /// Skip a player whose border cells show exactly two distinct axis
    /// values, then scan.
    ///
    /// Reproduces the historical quick-reject. It misses any connection
    /// whose border cells sit at just one near and one far coordinate
    /// (e.g. 1 and 9); use `FullScan` unless parity is required.
    BorderHeuristic,
}

/// Complete game configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Display names, `"Player 1"` and `"Player 2"` by default.
    pub player_names: PlayerMap<String>,

    /// Win detection strategy.
    pub win_check: WinCheck,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            player_names: PlayerMap::new(|p| p.to_string()),
            win_check: WinCheck::default(),
        }
    }
}

impl GameConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set both display names.
    #[must_use]
    pub fn with_player_names(mut self, player1: impl Into<String>, player2: impl Into<String>) -> Self {
        self.player_names[Player::Player1] = player1.into();
        self.player_names[Player::Player2] = player2.into();
        self
    }

    /// Set the win-check strategy.
    #[must_use]
    pub fn with_win_check(mut self, win_check: WinCheck) -> Self {
        self.win_check = win_check;
        self
    }
}
