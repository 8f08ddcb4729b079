//! Fixed-size grid of cells.

use crate::EngineError;
use draughts_core::{Coord, PieceId, MAX_DIMENSION};

/// A `width` x `depth` grid where each cell holds at most one piece id.
///
/// The board never owns pieces. It stores non-owning ids that must agree with
/// each piece's recorded coordinate; [`Position`](crate::Position) is the only
/// writer and keeps the two in sync.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    width: u8,
    depth: u8,
    cells: Vec<Option<PieceId>>,
}

impl Board {
    /// Creates an empty board.
    ///
    /// Both dimensions must lie within `1..=15`.
    pub fn new(width: u8, depth: u8) -> Result<Self, EngineError> {
        if !(1..=MAX_DIMENSION).contains(&width) || !(1..=MAX_DIMENSION).contains(&depth) {
            return Err(EngineError::InvalidDimensions { width, depth });
        }
        Ok(Board {
            width,
            depth,
            cells: vec![None; width as usize * depth as usize],
        })
    }

    #[inline]
    pub fn width(&self) -> u8 {
        self.width
    }

    #[inline]
    pub fn depth(&self) -> u8 {
        self.depth
    }

    /// Returns true if `(x, y)` lies within `[0, width) x [0, depth)`.
    ///
    /// Every cell access goes through this check first.
    #[inline]
    pub fn is_valid(&self, x: i32, y: i32) -> bool {
        (0..self.width as i32).contains(&x) && (0..self.depth as i32).contains(&y)
    }

    #[inline]
    fn index(&self, x: i32, y: i32) -> Result<usize, EngineError> {
        if self.is_valid(x, y) {
            Ok(y as usize * self.width as usize + x as usize)
        } else {
            Err(self.out_of_bounds(x, y))
        }
    }

    fn out_of_bounds(&self, x: i32, y: i32) -> EngineError {
        EngineError::OutOfBounds {
            x,
            y,
            width: self.width,
            depth: self.depth,
        }
    }

    /// Returns the occupant of `(x, y)`.
    pub fn cell_at(&self, x: i32, y: i32) -> Result<Option<PieceId>, EngineError> {
        let idx = self.index(x, y)?;
        Ok(self.cells[idx])
    }

    /// Returns the occupant of `coord`.
    pub fn occupant(&self, coord: Coord) -> Result<Option<PieceId>, EngineError> {
        self.cell_at(coord.x as i32, coord.y as i32)
    }

    /// Returns true if `(x, y)` is on the board and holds a piece.
    #[inline]
    pub fn is_occupied(&self, x: i32, y: i32) -> bool {
        matches!(self.cell_at(x, y), Ok(Some(_)))
    }

    /// Returns true if `(x, y)` is on the board and empty.
    #[inline]
    pub fn is_free(&self, x: i32, y: i32) -> bool {
        matches!(self.cell_at(x, y), Ok(None))
    }

    /// Puts `piece` on an empty cell.
    pub fn place(&mut self, piece: PieceId, coord: Coord) -> Result<(), EngineError> {
        let idx = self.index(coord.x as i32, coord.y as i32)?;
        if self.cells[idx].is_some() {
            return Err(EngineError::CellOccupied(coord));
        }
        self.cells[idx] = Some(piece);
        Ok(())
    }

    /// Empties a cell, returning its former occupant.
    pub fn clear(&mut self, coord: Coord) -> Result<Option<PieceId>, EngineError> {
        let idx = self.index(coord.x as i32, coord.y as i32)?;
        Ok(self.cells[idx].take())
    }

    /// Iterates over occupied cells in row-major order.
    pub fn occupied(&self) -> impl Iterator<Item = (Coord, PieceId)> + '_ {
        let width = self.width as usize;
        self.cells.iter().enumerate().filter_map(move |(i, cell)| {
            cell.map(|id| (Coord::new((i % width) as u8, (i / width) as u8), id))
        })
    }
}
