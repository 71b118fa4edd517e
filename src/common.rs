//! Common types: board errors, fog-of-war cell marks and shot reports.

use core::fmt;

use crate::grid::GridError;

/// State of one opponent-board cell as seen through the fog of war.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum CellMark {
    /// Not yet probed.
    #[default]
    Unknown,
    /// Probed and confirmed ship.
    Hit,
    /// Probed (or inferred) water.
    Miss,
}

impl fmt::Display for CellMark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let c = match self {
            CellMark::Unknown => '?',
            CellMark::Hit => 'H',
            CellMark::Miss => 'M',
        };
        write!(f, "{}", c)
    }
}

/// Resolved outcome of a single shot against a real board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct ShotReport {
    /// The shot struck a ship cell.
    pub hit: bool,
    /// The struck ship has no intact cells left.
    pub sunk: bool,
}

/// Errors returned by board and targeting operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    /// Underlying grid error.
    Grid(GridError),
    /// Queried coordinate lies outside the grid.
    OutOfBounds { x: usize, y: usize },
    /// A ship could not be placed within the attempt budget.
    PlacementImpossible { ship_id: u8 },
}

impl From<GridError> for BoardError {
    fn from(err: GridError) -> Self {
        BoardError::Grid(err)
    }
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoardError::Grid(e) => write!(f, "Grid error: {}", e),
            BoardError::OutOfBounds { x, y } => {
                write!(f, "Coordinates ({}, {}) are out of bounds", x, y)
            }
            BoardError::PlacementImpossible { ship_id } => {
                write!(f, "Unable to place ship {}", ship_id)
            }
        }
    }
}
