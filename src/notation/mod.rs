//! Algebraic coordinates and move notation.
//!
//! Columns are lettered from the leftmost `q` of the layout (`a`), rows are
//! numbered from the bottom row (`1`). On the 37 ring board the centre ring
//! `(0, 3)` is `d4`.
//!
//! Moves:
//! - placement: color initial + ring, then ` -` + removed ring if any
//!   (`"Wd4 -a1"`)
//! - capture: initial of the jumping marble + start ring, then `-` + landing
//!   ring for every jump (`"Wd4-f4-f6"`)

use crate::board::layout;
use crate::core::{BoardSize, MarbleColor, Move, RingId};
use crate::error::NotationError;

/// Algebraic label of a ring, e.g. `"d4"`.
#[must_use]
pub fn id_to_algebraic(id: RingId, size: BoardSize) -> String {
    let bounds = layout::bounds(size);
    let col = (b'a' as i16 + (id.q as i16 - bounds.min_q as i16)) as u8 as char;
    let row = bounds.max_r as i16 - id.r as i16 + 1;
    format!("{}{}", col, row)
}

/// Parse an algebraic label back to a ring of the given layout.
///
/// Case-insensitive. Labels that are well formed but name no ring of the
/// layout are rejected with [`NotationError::OffBoard`].
pub fn algebraic_to_id(text: &str, size: BoardSize) -> Result<RingId, NotationError> {
    let invalid = || NotationError::InvalidFormat(text.to_string());

    let trimmed = text.trim();
    let mut chars = trimmed.chars();
    let col = chars
        .next()
        .filter(char::is_ascii_alphabetic)
        .ok_or_else(invalid)?
        .to_ascii_lowercase();
    let digits = chars.as_str();
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid());
    }

    let off_board = || NotationError::OffBoard(text.to_string());
    let row: u32 = digits.parse().map_err(|_| off_board())?;

    let bounds = layout::bounds(size);
    let q = i32::from(col as u8 - b'a') + i32::from(bounds.min_q);
    let r = i64::from(bounds.max_r) - i64::from(row) + 1;

    let id = RingId::new(
        i8::try_from(q).map_err(|_| off_board())?,
        i8::try_from(r).map_err(|_| off_board())?,
    );
    if layout::contains(size, id) {
        Ok(id)
    } else {
        Err(off_board())
    }
}

/// Notation for a committed move.
///
/// `jumper` is the color of the marble that made a capture. When unknown the
/// capture is written with a `B` prefix.
#[must_use]
pub fn move_to_notation(mv: &Move, size: BoardSize, jumper: Option<MarbleColor>) -> String {
    match mv {
        Move::Placement(p) => {
            let mut text = format!("{}{}", p.color.initial(), id_to_algebraic(p.ring, size));
            if let Some(removed) = p.removed_ring {
                text.push_str(" -");
                text.push_str(&id_to_algebraic(removed, size));
            }
            text
        }
        Move::Capture(c) => {
            let initial = jumper.map_or('B', MarbleColor::initial);
            let mut text = format!("{}{}", initial, id_to_algebraic(c.start(), size));
            for step in c.steps() {
                text.push('-');
                text.push_str(&id_to_algebraic(step.to, size));
            }
            text
        }
    }
}
