//! Text board diagrams.
//!
//! A diagram lists the rows of a board from `y = 0` downward, separated by
//! `/` or newlines. Within a row, character `x` describes cell `(x, y)`:
//!
//! | char | meaning               |
//! |------|-----------------------|
//! | `.`  | empty cell            |
//! | `w`  | regular White piece   |
//! | `W`  | special White piece   |
//! | `b`  | regular Black piece   |
//! | `B`  | special Black piece   |
//!
//! White moves toward the right edge (increasing x), Black toward the left.

use crate::{Coord, Side, MAX_DIMENSION};
use std::fmt;
use thiserror::Error;

/// Errors that can occur when parsing a diagram.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DiagramError {
    #[error("empty diagram")]
    Empty,

    #[error("row {row} has {found} cells, expected {expected}")]
    RaggedRow {
        row: usize,
        found: usize,
        expected: usize,
    },

    #[error("invalid character '{ch}' in row {row}")]
    InvalidChar { ch: char, row: usize },

    #[error("diagram is {width}x{depth}, at most 15x15 is supported")]
    TooLarge { width: usize, depth: usize },
}

/// A piece placed by a diagram.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DiagramPiece {
    pub coord: Coord,
    pub side: Side,
    pub special: bool,
}

/// A parsed board layout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagram {
    width: u8,
    depth: u8,
    pieces: Vec<DiagramPiece>,
}

impl Diagram {
    /// Creates an empty diagram. Dimensions are not validated here.
    pub fn new(width: u8, depth: u8) -> Self {
        Diagram {
            width,
            depth,
            pieces: Vec::new(),
        }
    }

    /// Parses a diagram.
    pub fn parse(s: &str) -> Result<Self, DiagramError> {
        let rows: Vec<&str> = s
            .split(['/', '\n'])
            .map(str::trim)
            .filter(|row| !row.is_empty())
            .collect();

        if rows.is_empty() {
            return Err(DiagramError::Empty);
        }

        let width = rows[0].chars().count();
        let depth = rows.len();
        if width > MAX_DIMENSION as usize || depth > MAX_DIMENSION as usize {
            return Err(DiagramError::TooLarge { width, depth });
        }

        let mut diagram = Diagram::new(width as u8, depth as u8);
        for (y, row) in rows.iter().enumerate() {
            let found = row.chars().count();
            if found != width {
                return Err(DiagramError::RaggedRow {
                    row: y,
                    found,
                    expected: width,
                });
            }
            for (x, ch) in row.chars().enumerate() {
                let (side, special) = match ch {
                    '.' => continue,
                    'w' => (Side::White, false),
                    'W' => (Side::White, true),
                    'b' => (Side::Black, false),
                    'B' => (Side::Black, true),
                    _ => return Err(DiagramError::InvalidChar { ch, row: y }),
                };
                diagram.push(Coord::new(x as u8, y as u8), side, special);
            }
        }

        Ok(diagram)
    }

    /// Adds a piece. A later piece on the same cell replaces the earlier one.
    pub fn push(&mut self, coord: Coord, side: Side, special: bool) {
        self.pieces.retain(|p| p.coord != coord);
        self.pieces.push(DiagramPiece {
            coord,
            side,
            special,
        });
    }

    #[inline]
    pub fn width(&self) -> u8 {
        self.width
    }

    #[inline]
    pub fn depth(&self) -> u8 {
        self.depth
    }

    /// Returns every placed piece, in row-major order for parsed diagrams.
    pub fn pieces(&self) -> &[DiagramPiece] {
        &self.pieces
    }

    /// Returns the pieces of one side.
    pub fn pieces_of(&self, side: Side) -> impl Iterator<Item = &DiagramPiece> + '_ {
        self.pieces.iter().filter(move |p| p.side == side)
    }

    /// Returns the piece on `coord`, if any.
    pub fn piece_at(&self, coord: Coord) -> Option<&DiagramPiece> {
        self.pieces.iter().find(|p| p.coord == coord)
    }

    fn rows(&self) -> Vec<String> {
        (0..self.depth)
            .map(|y| {
                (0..self.width)
                    .map(|x| match self.piece_at(Coord::new(x, y)) {
                        None => '.',
                        Some(p) => match (p.side, p.special) {
                            (Side::White, false) => 'w',
                            (Side::White, true) => 'W',
                            (Side::Black, false) => 'b',
                            (Side::Black, true) => 'B',
                        },
                    })
                    .collect()
            })
            .collect()
    }

    /// Renders the diagram one row per line, for logs.
    pub fn render(&self) -> String {
        self.rows().join("\n")
    }
}

impl fmt::Display for Diagram {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.rows().join("/"))
    }
}
