//! Move representation.

use crate::{Coord, PieceId};
use std::fmt;

/// A candidate move.
///
/// Moves are produced fresh by every generation pass and consumed once when
/// applied. They refer to pieces by id, never own them.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    piece: PieceId,
    from: Coord,
    to: Coord,
    captured: Option<PieceId>,
}

impl Move {
    /// Creates a non-capturing move.
    #[inline]
    pub const fn plain(piece: PieceId, from: Coord, to: Coord) -> Self {
        Move {
            piece,
            from,
            to,
            captured: None,
        }
    }

    /// Creates a move that jumps over and removes `captured`.
    #[inline]
    pub const fn capture(piece: PieceId, from: Coord, to: Coord, captured: PieceId) -> Self {
        Move {
            piece,
            from,
            to,
            captured: Some(captured),
        }
    }

    /// Returns the moving piece.
    #[inline]
    pub const fn piece(self) -> PieceId {
        self.piece
    }

    /// Returns the source cell.
    #[inline]
    pub const fn from(self) -> Coord {
        self.from
    }

    /// Returns the destination cell.
    #[inline]
    pub const fn to(self) -> Coord {
        self.to
    }

    /// Returns the piece this move removes, if it captures.
    #[inline]
    pub const fn captured(self) -> Option<PieceId> {
        self.captured
    }

    #[inline]
    pub const fn is_capture(self) -> bool {
        self.captured.is_some()
    }

    /// Returns the notation for this move ("d4-e5" or "d4xf6").
    pub fn to_notation(self) -> String {
        let sep = if self.is_capture() { 'x' } else { '-' };
        format!("{}{}{}", self.from, sep, self.to)
    }
}

impl fmt::Debug for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Move({} {})", self.piece, self.to_notation())
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_notation())
    }
}
