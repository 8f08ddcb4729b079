//! Collaborator traits the host plugs into a [`Game`].

use crate::Game;
use draughts_core::{Coord, Move, Piece};

/// Receives piece lifecycle events.
///
/// All hooks default to no-ops so an observer only implements what it
/// renders.
pub trait PieceObserver {
    /// A piece was placed during setup.
    fn piece_created(&mut self, _piece: &Piece) {}

    /// A piece moved from `from` to its current coordinate.
    fn piece_moved(&mut self, _piece: &Piece, _from: Coord) {}

    /// A piece was captured. It is already gone from the board and its side.
    fn piece_destroyed(&mut self, _piece: &Piece) {}
}

/// Chooses which legal move to play.
///
/// Returning `None` declines to move, which is what a selector does when
/// [`Game::legal_moves`] is empty.
pub trait MoveSelector {
    fn select(&mut self, game: &Game) -> Option<Move>;
}

impl<F> MoveSelector for F
where
    F: FnMut(&Game) -> Option<Move>,
{
    fn select(&mut self, game: &Game) -> Option<Move> {
        self(game)
    }
}

/// Plays the first legal move. Useful for deterministic tests and replays.
#[derive(Debug, Clone, Copy, Default)]
pub struct FirstMove;

impl MoveSelector for FirstMove {
    fn select(&mut self, game: &Game) -> Option<Move> {
        game.legal_moves().iter().next().copied()
    }
}
