//! Piece representation.

use crate::{Coord, Move, Side};
use std::fmt;

/// Stable identity of a piece for the lifetime of a game.
///
/// Boards and moves refer to pieces by id; the side collections own the
/// pieces themselves.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PieceId(u16);

impl PieceId {
    /// Creates an id from its raw value.
    #[inline]
    pub const fn new(raw: u16) -> Self {
        PieceId(raw)
    }

    /// Returns the raw value.
    #[inline]
    pub const fn raw(self) -> u16 {
        self.0
    }
}

impl fmt::Debug for PieceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PieceId({})", self.0)
    }
}

impl fmt::Display for PieceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A piece on the board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Piece {
    id: PieceId,
    side: Side,
    coord: Coord,
    special: bool,
    /// Moves found for this piece by the last generation pass.
    moves: Vec<Move>,
}

impl Piece {
    /// Creates a piece with an empty move cache.
    pub fn new(id: PieceId, side: Side, coord: Coord, special: bool) -> Self {
        Piece {
            id,
            side,
            coord,
            special,
            moves: Vec::new(),
        }
    }

    #[inline]
    pub fn id(&self) -> PieceId {
        self.id
    }

    #[inline]
    pub fn side(&self) -> Side {
        self.side
    }

    /// Returns the cell the piece stands on.
    #[inline]
    pub fn coord(&self) -> Coord {
        self.coord
    }

    /// Returns true for promoted, long-range pieces.
    #[inline]
    pub fn is_special(&self) -> bool {
        self.special
    }

    /// Returns the moves cached by the last generation pass.
    #[inline]
    pub fn moves(&self) -> &[Move] {
        &self.moves
    }

    /// Records the piece's new cell.
    ///
    /// Only the owner of the board may call this, together with the matching
    /// board update.
    pub fn set_coord(&mut self, coord: Coord) {
        self.coord = coord;
    }

    pub fn set_special(&mut self, special: bool) {
        self.special = special;
    }

    /// Replaces the move cache.
    pub fn set_moves(&mut self, moves: Vec<Move>) {
        self.moves = moves;
    }

    /// Returns the diagram character for this piece.
    pub const fn to_char(&self) -> char {
        match (self.side, self.special) {
            (Side::White, false) => 'w',
            (Side::White, true) => 'W',
            (Side::Black, false) => 'b',
            (Side::Black, true) => 'B',
        }
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = if self.special { "special" } else { "regular" };
        write!(f, "{} {} {} at {}", self.side, kind, self.id, self.coord)
    }
}
