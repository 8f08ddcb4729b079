//! Board-layout providers.
//!
//! A [`LayoutProvider`] decides where each side's pieces start. [`Game`]
//! asks it once per side during setup, White first.
//!
//! [`Game`]: crate::Game

mod standard;

pub use standard::StandardLayout;

use draughts_core::{Coord, Diagram, Side};

/// A starting piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    pub coord: Coord,
    pub special: bool,
}

impl Placement {
    /// A regular piece on `coord`.
    pub const fn regular(coord: Coord) -> Self {
        Placement {
            coord,
            special: false,
        }
    }
}

/// Supplies the initial pieces of a side.
///
/// Placements outside the board or on a cell another placement already took
/// make setup fail; the provider does not need to check them itself.
pub trait LayoutProvider {
    fn layout(&self, width: u8, depth: u8, side: Side) -> Vec<Placement>;
}

/// Starting pieces taken from a [`Diagram`].
#[derive(Debug, Clone)]
pub struct DiagramLayout {
    diagram: Diagram,
}

impl DiagramLayout {
    pub fn new(diagram: Diagram) -> Self {
        DiagramLayout { diagram }
    }

    pub fn diagram(&self) -> &Diagram {
        &self.diagram
    }
}

impl LayoutProvider for DiagramLayout {
    fn layout(&self, _width: u8, _depth: u8, side: Side) -> Vec<Placement> {
        self.diagram
            .pieces_of(side)
            .map(|p| Placement {
                coord: p.coord,
                special: p.special,
            })
            .collect()
    }
}
