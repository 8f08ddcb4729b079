//! Engine error type.

use crate::config::ConfigError;
use draughts_core::{Coord, Move, PieceId};
use thiserror::Error;

/// Errors surfaced by board access, setup, and move application.
///
/// Every variant is a caller programming error. Running out of legal moves or
/// captures is ordinary data (an empty [`MoveList`](crate::MoveList)), never an
/// error.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("coordinate ({x}, {y}) is outside the {width}x{depth} board")]
    OutOfBounds { x: i32, y: i32, width: u8, depth: u8 },

    #[error("cell {0} is already occupied")]
    CellOccupied(Coord),

    #[error("no piece with id {0}")]
    UnknownPiece(PieceId),

    #[error("illegal move: {0}")]
    IllegalMove(Move),

    #[error("invalid board dimensions {width}x{depth}: both must be within 1..=15")]
    InvalidDimensions { width: u8, depth: u8 },

    #[error("no piece ids left for this position")]
    PieceIdsExhausted,

    #[error(transparent)]
    Config(#[from] ConfigError),
}
