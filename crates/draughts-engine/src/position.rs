//! Board plus the two side-indexed piece collections.

use crate::{Board, EngineError, MoveList};
use draughts_core::{Coord, Diagram, Piece, PieceId, Side};

/// Complete piece state of a game.
///
/// The side collections own the pieces; side membership is authoritative for
/// "is this piece mine". The board holds ids only. All mutation goes through
/// [`spawn`](Position::spawn), [`remove`](Position::remove) and
/// [`relocate`](Position::relocate), which update both sides of the
/// board/piece relation together.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Position {
    board: Board,
    pieces: [Vec<Piece>; 2],
    next_id: u16,
}

impl Position {
    /// Creates a position with an empty board.
    pub fn new(width: u8, depth: u8) -> Result<Self, EngineError> {
        Ok(Position {
            board: Board::new(width, depth)?,
            pieces: [Vec::new(), Vec::new()],
            next_id: 0,
        })
    }

    /// Creates a position from a diagram, White pieces first.
    pub fn from_diagram(diagram: &Diagram) -> Result<Self, EngineError> {
        let mut position = Position::new(diagram.width(), diagram.depth())?;
        for side in Side::ALL {
            for p in diagram.pieces_of(side) {
                position.spawn(side, p.coord, p.special)?;
            }
        }
        Ok(position)
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the pieces owned by `side`, in creation order.
    #[inline]
    pub fn pieces(&self, side: Side) -> &[Piece] {
        &self.pieces[side.index()]
    }

    /// Iterates over all pieces, White first.
    pub fn all_pieces(&self) -> impl Iterator<Item = &Piece> + '_ {
        self.pieces.iter().flatten()
    }

    /// Returns the side whose collection holds `id`.
    pub fn side_of(&self, id: PieceId) -> Option<Side> {
        Side::ALL
            .into_iter()
            .find(|side| self.pieces(*side).iter().any(|p| p.id() == id))
    }

    /// Looks up a piece by id.
    pub fn piece(&self, id: PieceId) -> Option<&Piece> {
        self.all_pieces().find(|p| p.id() == id)
    }

    fn piece_mut(&mut self, id: PieceId) -> Result<&mut Piece, EngineError> {
        self.pieces
            .iter_mut()
            .flatten()
            .find(|p| p.id() == id)
            .ok_or(EngineError::UnknownPiece(id))
    }

    /// Returns the piece standing on `(x, y)`.
    pub fn piece_at(&self, x: i32, y: i32) -> Option<&Piece> {
        match self.board.cell_at(x, y) {
            Ok(Some(id)) => self.piece(id),
            _ => None,
        }
    }

    /// Returns true if `(x, y)` holds a piece from `side`'s collection.
    pub fn is_occupied_by_friendly(&self, x: i32, y: i32, side: Side) -> bool {
        match self.board.cell_at(x, y) {
            Ok(Some(id)) => self.pieces(side).iter().any(|p| p.id() == id),
            _ => false,
        }
    }

    /// Creates a piece on an empty cell and adds it to `side`'s collection.
    ///
    /// Ids are never reused, so a position hands out at most `u16::MAX` of
    /// them over its lifetime.
    pub fn spawn(&mut self, side: Side, coord: Coord, special: bool) -> Result<PieceId, EngineError> {
        let id = PieceId::new(self.next_id);
        let next = self
            .next_id
            .checked_add(1)
            .ok_or(EngineError::PieceIdsExhausted)?;
        self.board.place(id, coord)?;
        self.next_id = next;
        self.pieces[side.index()].push(Piece::new(id, side, coord, special));
        Ok(id)
    }

    /// Removes a piece from the board and from its side's collection.
    pub fn remove(&mut self, id: PieceId) -> Result<Piece, EngineError> {
        let side = self.side_of(id).ok_or(EngineError::UnknownPiece(id))?;
        let list = &mut self.pieces[side.index()];
        let idx = list
            .iter()
            .position(|p| p.id() == id)
            .ok_or(EngineError::UnknownPiece(id))?;
        self.board.clear(list[idx].coord())?;
        Ok(list.remove(idx))
    }

    /// Moves a piece to an empty cell, returning the cell it left.
    ///
    /// The destination is validated before anything changes, so a failed call
    /// leaves the position untouched.
    pub fn relocate(&mut self, id: PieceId, to: Coord) -> Result<Coord, EngineError> {
        if self.board.occupant(to)?.is_some() {
            return Err(EngineError::CellOccupied(to));
        }
        let from = self.piece(id).ok_or(EngineError::UnknownPiece(id))?.coord();
        self.board.clear(from)?;
        self.board.place(id, to)?;
        self.piece_mut(id)?.set_coord(to);
        Ok(from)
    }

    /// Promotes or demotes a piece.
    pub fn set_special(&mut self, id: PieceId, special: bool) -> Result<(), EngineError> {
        self.piece_mut(id)?.set_special(special);
        Ok(())
    }

    /// Rebuilds every per-piece move cache from `moves`.
    ///
    /// Pieces without an entry in `moves` end up with an empty cache.
    pub fn set_move_caches(&mut self, moves: &MoveList) {
        for piece in self.pieces.iter_mut().flatten() {
            let own = moves
                .iter()
                .filter(|m| m.piece() == piece.id())
                .copied()
                .collect();
            piece.set_moves(own);
        }
    }

    /// Checks that board occupancy, piece coordinates and side collections
    /// agree with each other.
    pub fn is_consistent(&self) -> bool {
        let pieces_ok = Side::ALL.into_iter().all(|side| {
            self.pieces(side).iter().all(|p| {
                p.side() == side && matches!(self.board.occupant(p.coord()), Ok(Some(id)) if id == p.id())
            })
        });
        let cells_ok = self
            .board
            .occupied()
            .all(|(coord, id)| self.piece(id).is_some_and(|p| p.coord() == coord));
        pieces_ok && cells_ok
    }

    /// Renders the position as a diagram.
    pub fn to_diagram(&self) -> Diagram {
        let mut diagram = Diagram::new(self.board.width(), self.board.depth());
        for p in self.all_pieces() {
            diagram.push(p.coord(), p.side(), p.is_special());
        }
        diagram
    }
}
