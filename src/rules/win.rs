//! Win detection.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::core::{GameState, MarbleColor, MarbleCounts, Player, WinConditions};

/// Which threshold a winner reached, for display and notation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WinType {
    White,
    Gray,
    Black,
    /// The each-color threshold.
    Mixed,
}

impl fmt::Display for WinType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            WinType::White => "white",
            WinType::Gray => "gray",
            WinType::Black => "black",
            WinType::Mixed => "mixed",
        };
        f.write_str(label)
    }
}

impl From<MarbleColor> for WinType {
    fn from(color: MarbleColor) -> Self {
        match color {
            MarbleColor::White => WinType::White,
            MarbleColor::Gray => WinType::Gray,
            MarbleColor::Black => WinType::Black,
        }
    }
}

/// First threshold met by `captured`, tested white, gray, black, mixed.
#[must_use]
pub fn classify(captured: &MarbleCounts, wc: &WinConditions) -> Option<WinType> {
    if let Some(color) = MarbleColor::ALL
        .into_iter()
        .find(|&c| captured[c] >= wc.single(c))
    {
        return Some(WinType::from(color));
    }
    MarbleColor::ALL
        .into_iter()
        .all(|c| captured[c] >= wc.each_color)
        .then_some(WinType::Mixed)
}

/// The winning player, if any.
///
/// Player one is tested before player two.
#[must_use]
pub fn check_win_condition(state: &GameState) -> Option<Player> {
    let wc = &state.config.win_conditions;
    Player::ALL
        .into_iter()
        .find(|&p| classify(&state.captures[p], wc).is_some())
}

/// Classify `winner`'s win. `None` if they have not reached a threshold.
#[must_use]
pub fn get_win_type(state: &GameState, winner: Player) -> Option<WinType> {
    classify(&state.captures[winner], &state.config.win_conditions)
}
