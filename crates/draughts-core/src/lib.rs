//! Core types for draughts.
//!
//! This crate provides the fundamental types used across the rules engine:
//! - [`Side`] for the two opposing teams
//! - [`Coord`] for grid cells
//! - [`Piece`] and [`PieceId`] for piece identity and state
//! - [`Move`] for candidate moves
//! - [`Diagram`] for text board layouts

mod coord;
mod diagram;
mod mov;
mod piece;
mod side;

pub use coord::{Coord, MAX_DIMENSION};
pub use diagram::{Diagram, DiagramError, DiagramPiece};
pub use mov::Move;
pub use piece::{Piece, PieceId};
pub use side::Side;
