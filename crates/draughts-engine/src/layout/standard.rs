//! The usual draughts opening layout.

use super::{LayoutProvider, Placement};
use draughts_core::{Coord, Side};

/// Fills `rows` columns on each side's home edge, using only cells where
/// `x + y` is even.
///
/// White's home edge is `x = 0` and Black's is `x = width - 1`, so both sides
/// face each other along their forward direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StandardLayout {
    rows: u8,
}

impl StandardLayout {
    pub const fn new(rows: u8) -> Self {
        StandardLayout { rows }
    }

    pub const fn rows(self) -> u8 {
        self.rows
    }
}

impl Default for StandardLayout {
    fn default() -> Self {
        StandardLayout::new(3)
    }
}

impl LayoutProvider for StandardLayout {
    fn layout(&self, width: u8, depth: u8, side: Side) -> Vec<Placement> {
        let rows = self.rows.min(width);
        let columns = match side {
            Side::White => 0..rows,
            Side::Black => width - rows..width,
        };

        columns
            .flat_map(|x| (0..depth).map(move |y| Coord::new(x, y)))
            .filter(|c| (c.x + c.y) % 2 == 0)
            .map(Placement::regular)
            .collect()
    }
}
