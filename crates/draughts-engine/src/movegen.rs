//! Move generation.
//!
//! Regular pieces step one cell diagonally, forward only, and capture by
//! jumping an adjacent hostile piece in any diagonal direction. Special pieces
//! slide along all four diagonals until blocked and capture the first hostile
//! piece they meet if the cell behind it is empty.
//!
//! Whenever any capture exists for the side, every plain move is dropped
//! (mandatory capture).

use crate::Position;
use draughts_core::{Coord, Move, Piece, Side};

/// The four diagonal directions as `(dx, dy)`.
pub const DIAGONALS: [(i32, i32); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];

/// A list of generated moves.
///
/// Boards go up to 15x15 with long-range pieces, so unlike a fixed chess
/// bound the list grows on the heap.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct MoveList {
    moves: Vec<Move>,
}

impl MoveList {
    /// Creates an empty move list.
    #[inline]
    pub const fn new() -> Self {
        MoveList { moves: Vec::new() }
    }

    /// Adds a move to the list.
    #[inline]
    pub fn push(&mut self, m: Move) {
        self.moves.push(m);
    }

    /// Returns the number of moves.
    #[inline]
    pub fn len(&self) -> usize {
        self.moves.len()
    }

    /// Returns true if the list is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    /// Returns a slice of the moves.
    #[inline]
    pub fn as_slice(&self) -> &[Move] {
        &self.moves
    }

    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, Move> {
        self.moves.iter()
    }

    /// Returns true if `m` is in the list.
    #[inline]
    pub fn contains(&self, m: &Move) -> bool {
        self.moves.contains(m)
    }

    /// Returns true if any move captures.
    pub fn has_capture(&self) -> bool {
        self.moves.iter().any(|m| m.is_capture())
    }

    /// Clears the move list.
    #[inline]
    pub fn clear(&mut self) {
        self.moves.clear();
    }

    /// Returns a new list holding the moves for which `f` returns true.
    pub fn filtered<F>(&self, mut f: F) -> MoveList
    where
        F: FnMut(&Move) -> bool,
    {
        self.moves.iter().filter(|m| f(m)).copied().collect()
    }
}

impl std::ops::Index<usize> for MoveList {
    type Output = Move;

    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        &self.moves[index]
    }
}

impl<'a> IntoIterator for &'a MoveList {
    type Item = &'a Move;
    type IntoIter = std::slice::Iter<'a, Move>;

    fn into_iter(self) -> Self::IntoIter {
        self.moves.iter()
    }
}

impl IntoIterator for MoveList {
    type Item = Move;
    type IntoIter = std::vec::IntoIter<Move>;

    fn into_iter(self) -> Self::IntoIter {
        self.moves.into_iter()
    }
}

impl FromIterator<Move> for MoveList {
    fn from_iter<I: IntoIterator<Item = Move>>(iter: I) -> Self {
        MoveList {
            moves: iter.into_iter().collect(),
        }
    }
}

impl std::fmt::Debug for MoveList {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.as_slice()).finish()
    }
}

/// Generates the legal moves for `side`, applying mandatory capture.
///
/// An empty list means the side has no pieces or no moves; that is a normal
/// state. This does not touch the per-piece move caches; see
/// [`refresh_moves`].
pub fn generate_moves(position: &Position, side: Side) -> MoveList {
    let mut moves = MoveList::new();
    let mut capture_found = false;

    for piece in position.pieces(side) {
        if piece.is_special() {
            long_range_moves(position, piece, &mut moves, &mut capture_found);
        } else {
            step_moves(position, piece, &mut moves, &mut capture_found);
        }
    }

    if capture_found {
        // Plain moves generated before the first capture are still in the list.
        moves = moves.filtered(|m| m.is_capture());
    }

    tracing::trace!(%side, count = moves.len(), capture_found, "generated moves");
    moves
}

/// Clears every per-piece move cache, regenerates `side`'s moves and stores
/// them back on the pieces that own them.
pub fn refresh_moves(position: &mut Position, side: Side) -> MoveList {
    let moves = generate_moves(position, side);
    position.set_move_caches(&moves);
    moves
}

/// Returns `(x, y)` as a coordinate if it is on the board and empty.
fn free_cell(position: &Position, x: i32, y: i32) -> Option<Coord> {
    if position.board().is_free(x, y) {
        Coord::from_signed(x, y)
    } else {
        None
    }
}

/// Returns true if `(x, y)` holds a piece that is not in `side`'s collection.
fn is_hostile(position: &Position, x: i32, y: i32, side: Side) -> bool {
    position.board().is_occupied(x, y) && !position.is_occupied_by_friendly(x, y, side)
}

fn step_moves(position: &Position, piece: &Piece, moves: &mut MoveList, capture_found: &mut bool) {
    let side = piece.side();
    let from = piece.coord();

    for (dx, dy) in DIAGONALS {
        let (x, y) = from.offset(dx, dy);
        if !position.board().is_valid(x, y) {
            continue;
        }

        if !*capture_found && side.is_forward(dx as i8) {
            if let Some(to) = free_cell(position, x, y) {
                moves.push(Move::plain(piece.id(), from, to));
            }
        }

        if is_hostile(position, x, y, side) {
            if let (Some(to), Some(target)) = (
                free_cell(position, x + dx, y + dy),
                position.piece_at(x, y),
            ) {
                *capture_found = true;
                moves.push(Move::capture(piece.id(), from, to, target.id()));
            }
        }
    }
}

fn long_range_moves(
    position: &Position,
    piece: &Piece,
    moves: &mut MoveList,
    capture_found: &mut bool,
) {
    let side = piece.side();
    let from = piece.coord();

    for (dx, dy) in DIAGONALS {
        let (mut x, mut y) = from.offset(dx, dy);
        while position.board().is_valid(x, y) {
            if let Some(to) = free_cell(position, x, y) {
                if !*capture_found {
                    moves.push(Move::plain(piece.id(), from, to));
                }
                x += dx;
                y += dy;
                continue;
            }

            // First occupied cell ends the walk either way.
            if is_hostile(position, x, y, side) {
                if let (Some(to), Some(target)) = (
                    free_cell(position, x + dx, y + dy),
                    position.piece_at(x, y),
                ) {
                    *capture_found = true;
                    moves.push(Move::capture(piece.id(), from, to, target.id()));
                }
            }
            break;
        }
    }
}
