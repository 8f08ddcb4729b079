//! Side (team) representation.

use serde::{Deserialize, Serialize};

/// The two opposing teams.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum Side {
    White = 0,
    Black = 1,
}

impl Side {
    /// Both sides in index order.
    pub const ALL: [Side; 2] = [Side::White, Side::Black];

    /// Returns the opposing side.
    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Side::White => Side::Black,
            Side::Black => Side::White,
        }
    }

    /// Returns the index (0 for White, 1 for Black).
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Returns the x step of a forward move (+1 for White, -1 for Black).
    ///
    /// Plain moves of regular pieces may only travel along this x direction.
    /// Captures ignore it.
    #[inline]
    pub const fn forward(self) -> i8 {
        match self {
            Side::White => 1,
            Side::Black => -1,
        }
    }

    /// Returns true if a step of `dx` along the x axis is forward for this side.
    #[inline]
    pub const fn is_forward(self, dx: i8) -> bool {
        dx == self.forward()
    }
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Side::White => write!(f, "White"),
            Side::Black => write!(f, "Black"),
        }
    }
}
