//! Grid coordinate representation.

use std::fmt;

/// Largest width or depth a board may have.
pub const MAX_DIMENSION: u8 = 15;

/// A cell on the grid.
///
/// `x` runs along the axis that defines "forward" (see
/// [`Side::forward`](crate::Side::forward)), `y` across it. Coordinates carry
/// no board size; the board validates them before any cell access.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coord {
    pub x: u8,
    pub y: u8,
}

impl Coord {
    /// Creates a coordinate.
    #[inline]
    pub const fn new(x: u8, y: u8) -> Self {
        Coord { x, y }
    }

    /// Returns the signed coordinates `dx`/`dy` steps away.
    ///
    /// The result may lie outside any board.
    #[inline]
    pub const fn offset(self, dx: i32, dy: i32) -> (i32, i32) {
        (self.x as i32 + dx, self.y as i32 + dy)
    }

    /// Converts signed coordinates back into a `Coord` if both are non-negative
    /// and fit in a board of [`MAX_DIMENSION`].
    #[inline]
    pub fn from_signed(x: i32, y: i32) -> Option<Self> {
        let limit = MAX_DIMENSION as i32;
        if (0..limit).contains(&x) && (0..limit).contains(&y) {
            Some(Coord::new(x as u8, y as u8))
        } else {
            None
        }
    }

    /// Parses a coordinate from notation (e.g., "d4" is x = 3, y = 3).
    ///
    /// The column letter (`a`-`o`) gives x, the 1-based number gives y.
    pub fn from_notation(s: &str) -> Option<Self> {
        let mut chars = s.chars();
        let col = chars.next()?.to_ascii_lowercase();
        if !('a'..='o').contains(&col) {
            return None;
        }
        let row: u8 = chars.as_str().parse().ok()?;
        if row == 0 || row > MAX_DIMENSION {
            return None;
        }
        Some(Coord::new(col as u8 - b'a', row - 1))
    }

    /// Returns the notation for this coordinate.
    pub fn to_notation(self) -> String {
        format!("{}{}", (b'a' + self.x) as char, self.y as u32 + 1)
    }
}

impl fmt::Debug for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Coord({}, {})", self.x, self.y)
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_notation())
    }
}
