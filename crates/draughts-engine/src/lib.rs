//! Rules engine for draughts.
//!
//! This crate provides:
//! - [`Board`] - fixed-size grid of non-owning piece references
//! - [`Position`] - board plus the side-indexed piece collections
//! - [`movegen`] - legal move generation with mandatory capture
//! - [`Game`] - turn state machine with chain captures
//! - [`GameConfig`] - immutable setup loaded from TOML
//! - [`layout`] and [`hooks`] - collaborator traits for the host
//!
//! # Example
//!
//! ```
//! use draughts_engine::{Game, GameConfig};
//!
//! let mut game = Game::standard(GameConfig::default()).unwrap();
//! let moves = game.legal_moves();
//! println!("{} moves for {}", moves.len(), game.current_side());
//!
//! let first = moves[0];
//! let chain = game.apply(first).unwrap();
//! assert!(!chain);
//! ```

mod board;
pub mod config;
mod error;
mod game;
pub mod hooks;
pub mod layout;
pub mod movegen;
mod position;

pub use board::Board;
pub use config::{ConfigError, GameConfig};
pub use error::EngineError;
pub use game::Game;
pub use hooks::{FirstMove, MoveSelector, PieceObserver};
pub use layout::{DiagramLayout, LayoutProvider, Placement, StandardLayout};
pub use movegen::{generate_moves, refresh_moves, MoveList};
pub use position::Position;
