//! Fixed board layouts.
//!
//! Each layout is a hexagonal region described row by row in axial
//! coordinates: row `r` (0 at the top) holds the rings `q = start .. start + len`.
//!
//! ```text
//! 37 rings          48 rings            61 rings
//!    ....             ....                .....
//!   .....            .....               ......
//!  ......           ......              .......
//! .......          .......             ........
//!  ......         ........            .........
//!   .....          .......             ........
//!    ....           ......              .......
//!                    .....               ......
//!                                         .....
//! ```

use crate::core::{BoardSize, RingId};

/// `(start_q, len)` per row.
type RowTable = &'static [(i8, i8)];

const ROWS_37: RowTable = &[(0, 4), (-1, 5), (-2, 6), (-3, 7), (-3, 6), (-3, 5), (-3, 4)];

const ROWS_48: RowTable = &[
    (0, 4),
    (-1, 5),
    (-2, 6),
    (-3, 7),
    (-4, 8),
    (-4, 7),
    (-4, 6),
    (-4, 5),
];

const ROWS_61: RowTable = &[
    (0, 5),
    (-1, 6),
    (-2, 7),
    (-3, 8),
    (-4, 9),
    (-4, 8),
    (-4, 7),
    (-4, 6),
    (-4, 5),
];

/// Row table for a layout.
#[must_use]
pub fn rows(size: BoardSize) -> RowTable {
    match size {
        BoardSize::Rings37 => ROWS_37,
        BoardSize::Rings48 => ROWS_48,
        BoardSize::Rings61 => ROWS_61,
    }
}

/// Every ring coordinate of a layout, row by row.
pub fn coords(size: BoardSize) -> impl Iterator<Item = RingId> {
    rows(size).iter().enumerate().flat_map(|(r, &(start, len))| {
        (start..start + len).map(move |q| RingId::new(q, r as i8))
    })
}

/// Whether `id` is part of the layout.
#[must_use]
pub fn contains(size: BoardSize, id: RingId) -> bool {
    if id.r < 0 {
        return false;
    }
    rows(size)
        .get(id.r as usize)
        .is_some_and(|&(start, len)| id.q >= start && id.q < start + len)
}

/// Bounding box of a layout, used for algebraic notation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Bounds {
    pub min_q: i8,
    pub max_q: i8,
    pub max_r: i8,
}

#[must_use]
pub fn bounds(size: BoardSize) -> Bounds {
    let table = rows(size);
    let min_q = table.iter().map(|&(start, _)| start).min().unwrap_or(0);
    let max_q = table.iter().map(|&(start, len)| start + len - 1).max().unwrap_or(0);
    Bounds {
        min_q,
        max_q,
        max_r: table.len() as i8 - 1,
    }
}
