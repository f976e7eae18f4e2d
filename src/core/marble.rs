//! Marble colors and per-color counters.
//!
//! `MarbleCounts` is used for the shared reserve and for each player's
//! capture pool.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// Marble color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum MarbleColor {
    White,
    Gray,
    Black,
}

impl MarbleColor {
    /// All colors, in notation order.
    pub const ALL: [MarbleColor; 3] = [MarbleColor::White, MarbleColor::Gray, MarbleColor::Black];

    /// Upper-case initial used in move notation.
    #[must_use]
    pub const fn initial(self) -> char {
        match self {
            MarbleColor::White => 'W',
            MarbleColor::Gray => 'G',
            MarbleColor::Black => 'B',
        }
    }

    /// Parse a notation initial (case-insensitive).
    #[must_use]
    pub fn from_initial(c: char) -> Option<Self> {
        match c.to_ascii_uppercase() {
            'W' => Some(MarbleColor::White),
            'G' => Some(MarbleColor::Gray),
            'B' => Some(MarbleColor::Black),
            _ => None,
        }
    }
}

impl std::fmt::Display for MarbleColor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            MarbleColor::White => "white",
            MarbleColor::Gray => "gray",
            MarbleColor::Black => "black",
        };
        f.write_str(name)
    }
}

/// Marble counts by color.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MarbleCounts {
    pub white: u32,
    pub gray: u32,
    pub black: u32,
}

impl MarbleCounts {
    #[must_use]
    pub const fn new(white: u32, gray: u32, black: u32) -> Self {
        Self { white, gray, black }
    }

    /// Sum over all colors.
    #[must_use]
    pub const fn total(&self) -> u32 {
        self.white + self.gray + self.black
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.total() == 0
    }

    /// Colors with a non-zero count, in notation order.
    pub fn available(&self) -> impl Iterator<Item = MarbleColor> + '_ {
        MarbleColor::ALL.into_iter().filter(move |&c| self[c] > 0)
    }
}

impl Index<MarbleColor> for MarbleCounts {
    type Output = u32;

    fn index(&self, color: MarbleColor) -> &Self::Output {
        match color {
            MarbleColor::White => &self.white,
            MarbleColor::Gray => &self.gray,
            MarbleColor::Black => &self.black,
        }
    }
}

impl IndexMut<MarbleColor> for MarbleCounts {
    fn index_mut(&mut self, color: MarbleColor) -> &mut Self::Output {
        match color {
            MarbleColor::White => &mut self.white,
            MarbleColor::Gray => &mut self.gray,
            MarbleColor::Black => &mut self.black,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initials_round_trip() {
        for color in MarbleColor::ALL {
            assert_eq!(MarbleColor::from_initial(color.initial()), Some(color));
        }
        assert_eq!(MarbleColor::from_initial('g'), Some(MarbleColor::Gray));
        assert_eq!(MarbleColor::from_initial('x'), None);
    }

    #[test]
    fn test_counts_indexing() {
        let mut counts = MarbleCounts::new(6, 8, 10);
        assert_eq!(counts[MarbleColor::Gray], 8);
        assert_eq!(counts.total(), 24);

        counts[MarbleColor::Black] -= 10;
        assert_eq!(counts.black, 0);
        assert_eq!(
            counts.available().collect::<Vec<_>>(),
            vec![MarbleColor::White, MarbleColor::Gray]
        );
    }

    #[test]
    fn test_empty_counts() {
        assert!(MarbleCounts::default().is_empty());
        assert!(!MarbleCounts::new(0, 0, 1).is_empty());
    }
}
