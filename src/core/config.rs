//! Game configuration.
//!
//! A game is configured once at creation:
//! - `BoardSize`: which of the three official layouts is used
//! - `GameMode`: standard or blitz rules
//! - `WinConditions`: capture thresholds for the chosen mode
//! - `initial_reserve`: the shared marble pool at game start
//!
//! The configuration travels inside `GameState`, so every rule that needs a
//! threshold reads it from the state being evaluated.

use serde::{Deserialize, Serialize};

use super::marble::{MarbleColor, MarbleCounts};
use crate::error::ConfigError;

/// Supported board layouts, by ring count.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BoardSize {
    #[default]
    Rings37,
    Rings48,
    Rings61,
}

impl BoardSize {
    /// Look up a layout by ring count.
    pub fn from_rings(rings: usize) -> Result<Self, ConfigError> {
        match rings {
            37 => Ok(BoardSize::Rings37),
            48 => Ok(BoardSize::Rings48),
            61 => Ok(BoardSize::Rings61),
            other => Err(ConfigError::UnsupportedBoardSize(other)),
        }
    }

    /// Number of rings in the layout.
    #[must_use]
    pub const fn ring_count(self) -> usize {
        match self {
            BoardSize::Rings37 => 37,
            BoardSize::Rings48 => 48,
            BoardSize::Rings61 => 61,
        }
    }
}

/// Rule set.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameMode {
    #[default]
    Standard,
    Blitz,
}

/// Capture thresholds that end the game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WinConditions {
    pub white: u32,
    pub gray: u32,
    pub black: u32,
    /// Threshold that must be met for every color at once.
    pub each_color: u32,
}

impl WinConditions {
    /// 4 white, 5 gray, 6 black, or 3 of each.
    #[must_use]
    pub const fn standard() -> Self {
        Self {
            white: 4,
            gray: 5,
            black: 6,
            each_color: 3,
        }
    }

    /// 3 white, 4 gray, 5 black, or 2 of each.
    #[must_use]
    pub const fn blitz() -> Self {
        Self {
            white: 3,
            gray: 4,
            black: 5,
            each_color: 2,
        }
    }

    /// Single-color threshold.
    #[must_use]
    pub const fn single(&self, color: MarbleColor) -> u32 {
        match color {
            MarbleColor::White => self.white,
            MarbleColor::Gray => self.gray,
            MarbleColor::Black => self.black,
        }
    }
}

impl Default for WinConditions {
    fn default() -> Self {
        Self::standard()
    }
}

/// Complete game configuration.
///
/// ```
/// use zertz_engine::core::{BoardSize, GameConfig, GameMode};
///
/// let config = GameConfig::blitz(BoardSize::Rings48);
/// assert_eq!(config.mode, GameMode::Blitz);
/// assert_eq!(config.initial_reserve.total(), 21);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GameConfig {
    pub board_size: BoardSize,
    pub mode: GameMode,
    pub win_conditions: WinConditions,
    pub initial_reserve: MarbleCounts,
}

impl GameConfig {
    /// Standard rules: reserve 6/8/10.
    #[must_use]
    pub const fn standard(board_size: BoardSize) -> Self {
        Self {
            board_size,
            mode: GameMode::Standard,
            win_conditions: WinConditions::standard(),
            initial_reserve: MarbleCounts::new(6, 8, 10),
        }
    }

    /// Blitz rules: reserve 5/7/9 and lower thresholds.
    #[must_use]
    pub const fn blitz(board_size: BoardSize) -> Self {
        Self {
            board_size,
            mode: GameMode::Blitz,
            win_conditions: WinConditions::blitz(),
            initial_reserve: MarbleCounts::new(5, 7, 9),
        }
    }

    /// Override the win thresholds.
    #[must_use]
    pub fn with_win_conditions(mut self, win_conditions: WinConditions) -> Self {
        self.win_conditions = win_conditions;
        self
    }

    /// Override the starting reserve.
    #[must_use]
    pub fn with_initial_reserve(mut self, reserve: MarbleCounts) -> Self {
        self.initial_reserve = reserve;
        self
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::standard(BoardSize::Rings37)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_board_size_from_rings() {
        assert_eq!(BoardSize::from_rings(37).unwrap(), BoardSize::Rings37);
        assert_eq!(BoardSize::from_rings(48).unwrap(), BoardSize::Rings48);
        assert_eq!(BoardSize::from_rings(61).unwrap(), BoardSize::Rings61);
        assert_eq!(
            BoardSize::from_rings(40),
            Err(ConfigError::UnsupportedBoardSize(40))
        );
    }

    #[test]
    fn test_standard_config() {
        let config = GameConfig::default();

        assert_eq!(config.board_size, BoardSize::Rings37);
        assert_eq!(config.mode, GameMode::Standard);
        assert_eq!(config.initial_reserve, MarbleCounts::new(6, 8, 10));
        assert_eq!(config.win_conditions.single(MarbleColor::Black), 6);
        assert_eq!(config.win_conditions.each_color, 3);
    }

    #[test]
    fn test_config_builder() {
        let config = GameConfig::standard(BoardSize::Rings61)
            .with_initial_reserve(MarbleCounts::new(1, 1, 1))
            .with_win_conditions(WinConditions::blitz());

        assert_eq!(config.board_size.ring_count(), 61);
        assert_eq!(config.initial_reserve.total(), 3);
        assert_eq!(config.win_conditions.white, 3);
    }

    #[test]
    fn test_config_serialization() {
        let config = GameConfig::blitz(BoardSize::Rings48);
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: GameConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, deserialized);
    }
}
