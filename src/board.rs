//! Fleet placement: stamps polyomino hulls onto a rows×cols grid under
//! no-overlap and no-touch constraints.

use alloc::collections::BTreeMap;
use alloc::vec::Vec;

use rand::seq::SliceRandom;
use rand::Rng;

use crate::common::BoardError;
use crate::config::{shape_for, ATTEMPT_BUDGET};
use crate::grid::Grid;
use crate::shape::Shape;

/// Water marker in the board grid. Every other value is a ship id.
pub const WATER: u8 = 0;

/// One hull instance stamped onto the board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placement {
    pub ship_id: u8,
    /// Absolute cells covered by the instance.
    pub cells: Vec<(usize, usize)>,
}

/// Cell totals derived from the current grid contents, never cached.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct BoardStats {
    pub empty_spaces: usize,
    pub occupied_spaces: usize,
}

/// A player's own board: a grid of ship ids plus the census of hulls to
/// place on it. The census is copied at construction; it is never shared
/// with the caller.
pub struct Board {
    rows: usize,
    cols: usize,
    census: BTreeMap<u8, usize>,
    grid: Grid<u8>,
    placements: Vec<Placement>,
}

impl Board {
    /// Create an all-water board for the given census (ship id → count).
    pub fn new(rows: usize, cols: usize, census: BTreeMap<u8, usize>) -> Self {
        Board {
            rows,
            cols,
            census,
            grid: Grid::new(rows, cols, WATER),
            placements: Vec::new(),
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// The census this board was constructed with.
    pub fn census(&self) -> &BTreeMap<u8, usize> {
        &self.census
    }

    /// Read-only view of the grid: `WATER` or the occupying ship id.
    pub fn grid(&self) -> &Grid<u8> {
        &self.grid
    }

    /// Hull instances stamped so far, in placement order.
    pub fn placements(&self) -> &[Placement] {
        &self.placements
    }

    /// Value at (x, y): `WATER` or the occupying ship id.
    pub fn tile(&self, x: usize, y: usize) -> Result<u8, BoardError> {
        if x >= self.cols || y >= self.rows {
            return Err(BoardError::OutOfBounds { x, y });
        }
        Ok(self.grid.get(x, y)?)
    }

    /// Empty/occupied cell counts for the current grid contents.
    pub fn stats(&self) -> BoardStats {
        let empty_spaces = self.grid.count(WATER);
        BoardStats {
            empty_spaces,
            occupied_spaces: self.rows * self.cols - empty_spaces,
        }
    }

    /// Reset the grid to all water and drop every placement. The census is
    /// untouched, so the fleet can be placed again.
    pub fn reset_board(&mut self) {
        self.grid.fill(WATER);
        self.placements.clear();
    }

    /// Place every hull in the census at random positions satisfying the
    /// bounds, no-overlap and no-touch rules.
    ///
    /// Fails with `PlacementImpossible` when an instance cannot be placed
    /// within the attempt budget. The board is not rolled back on failure;
    /// call `reset_board` (or discard the board) before retrying.
    pub fn place_ships<R: Rng>(&mut self, rng: &mut R) -> Result<(), BoardError> {
        let census: Vec<(u8, usize)> = self.census.iter().map(|(&id, &n)| (id, n)).collect();
        for (ship_id, count) in census {
            let variants = shape_for(ship_id).orientations();
            for _ in 0..count {
                self.place_one(rng, ship_id, &variants)?;
            }
        }
        Ok(())
    }

    /// Place a single hull instance, trying shuffled anchors up to the
    /// attempt budget and every orientation variant per anchor.
    fn place_one<R: Rng>(
        &mut self,
        rng: &mut R,
        ship_id: u8,
        variants: &[Shape],
    ) -> Result<(), BoardError> {
        let mut anchors: Vec<(usize, usize)> = self.grid.coords().collect();
        anchors.shuffle(rng);

        for &(x, y) in anchors.iter().take(ATTEMPT_BUDGET) {
            for variant in variants {
                if let Some(cells) = self.fit(x, y, variant) {
                    for &(cx, cy) in &cells {
                        self.grid.set(cx, cy, ship_id)?;
                    }
                    log::debug!("placed ship {} covering {} cells", ship_id, cells.len());
                    self.placements.push(Placement { ship_id, cells });
                    return Ok(());
                }
            }
        }
        log::warn!("no valid position for ship {}", ship_id);
        Err(BoardError::PlacementImpossible { ship_id })
    }

    /// Absolute cells for `shape` anchored at (x, y), or `None` when any
    /// cell would fall out of bounds, on another hull, or next to one
    /// (8-neighborhood, so diagonal contact also rejects).
    fn fit(&self, x: usize, y: usize, shape: &Shape) -> Option<Vec<(usize, usize)>> {
        let mut cells = Vec::with_capacity(shape.len());
        for &(dx, dy) in shape.offsets() {
            let cx = x as i64 + dx as i64;
            let cy = y as i64 + dy as i64;
            if cx < 0 || cy < 0 || cx >= self.cols as i64 || cy >= self.rows as i64 {
                return None;
            }
            let (cx, cy) = (cx as usize, cy as usize);
            if !self.clear_around(cx, cy) {
                return None;
            }
            cells.push((cx, cy));
        }
        Some(cells)
    }

    /// True when (x, y) and its full in-bounds 8-neighborhood are water.
    fn clear_around(&self, x: usize, y: usize) -> bool {
        for dy in -1i64..=1 {
            for dx in -1i64..=1 {
                let nx = x as i64 + dx;
                let ny = y as i64 + dy;
                if nx < 0 || ny < 0 || nx >= self.cols as i64 || ny >= self.rows as i64 {
                    continue;
                }
                if !matches!(self.grid.get(nx as usize, ny as usize), Ok(WATER)) {
                    return false;
                }
            }
        }
        true
    }
}
