//! Shot resolution against a placed board.
//!
//! The placement and targeting components never see each other; this
//! referee sits between them, turning a shot coordinate into the
//! hit/sunk report the targeter consumes.

use alloc::collections::BTreeSet;
use alloc::vec::Vec;

use crate::board::{Board, WATER};
use crate::common::{BoardError, ShotReport};

/// Resolves shots against a board whose fleet has been placed, tracking
/// which cells of each hull instance have been struck.
pub struct GameEngine {
    board: Board,
    hits: Vec<BTreeSet<(usize, usize)>>,
}

impl GameEngine {
    /// Wrap a placed board. One hit set is tracked per placement.
    pub fn new(board: Board) -> Self {
        let hits = board.placements().iter().map(|_| BTreeSet::new()).collect();
        GameEngine { board, hits }
    }

    /// The wrapped board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Resolve a shot at (x, y) against the real board. Repeating a shot
    /// on the same cell does not double-count.
    pub fn resolve_shot(&mut self, x: usize, y: usize) -> Result<ShotReport, BoardError> {
        if self.board.tile(x, y)? == WATER {
            return Ok(ShotReport {
                hit: false,
                sunk: false,
            });
        }
        let index = self
            .board
            .placements()
            .iter()
            .position(|p| p.cells.contains(&(x, y)));
        match index {
            Some(i) => {
                self.hits[i].insert((x, y));
                let sunk = self.hits[i].len() == self.board.placements()[i].cells.len();
                Ok(ShotReport { hit: true, sunk })
            }
            // Unreachable while the grid and the placement records agree.
            None => Ok(ShotReport {
                hit: false,
                sunk: false,
            }),
        }
    }

    /// True once every placed hull has had all of its cells struck.
    pub fn all_sunk(&self) -> bool {
        self.board
            .placements()
            .iter()
            .zip(&self.hits)
            .all(|(p, h)| h.len() == p.cells.len())
    }
}
