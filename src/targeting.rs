//! Automated opponent targeting.
//!
//! The targeter owns no real board. It sees only the outcomes the game
//! loop feeds back through [`Targeter::register_attack`], hunts at random
//! until something is hit, then keeps firing around the wounded ship
//! until it goes down. Bookkeeping splits the grid into coordinates
//! still worth shooting, coordinates already fired at, and confirmed
//! misses.

use alloc::collections::{BTreeMap, BTreeSet, VecDeque};
use alloc::vec::Vec;

use rand::Rng;

use crate::common::{BoardError, CellMark};
use crate::grid::{neighbors4, Grid};

/// Opponent model and shot bookkeeping for one enemy board.
///
/// The census maps ship *size* to count; sinks are attributed by the
/// length of the contiguous hit run that finished them.
pub struct Targeter {
    rows: usize,
    cols: usize,
    remaining: BTreeMap<usize, usize>,
    enemy_board: Grid<CellMark>,
    available: BTreeSet<(usize, usize)>,
    fired: BTreeSet<(usize, usize)>,
    missed: BTreeSet<(usize, usize)>,
    current_hits: Vec<(usize, usize)>,
    target_queue: VecDeque<(usize, usize)>,
}

impl Targeter {
    /// Create a targeter with an all-unknown opponent model and the full
    /// grid available. The census (size → count) is copied, never shared.
    pub fn new(rows: usize, cols: usize, census: BTreeMap<usize, usize>) -> Self {
        let available = (0..rows)
            .flat_map(|y| (0..cols).map(move |x| (x, y)))
            .collect();
        Targeter {
            rows,
            cols,
            remaining: census,
            enemy_board: Grid::new(rows, cols, CellMark::Unknown),
            available,
            fired: BTreeSet::new(),
            missed: BTreeSet::new(),
            current_hits: Vec::new(),
            target_queue: VecDeque::new(),
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Next coordinate to fire at. Queued follow-ups around a located ship
    /// take priority over random search; `None` once every non-excluded
    /// coordinate has been tried.
    pub fn next_attack<R: Rng>(&mut self, rng: &mut R) -> Option<(usize, usize)> {
        // Entries are filtered against `available` when queued; skip any
        // invalidated since (a fired cell is no longer a candidate).
        while let Some(coord) = self.target_queue.pop_front() {
            if self.available.contains(&coord) {
                return Some(coord);
            }
        }
        self.random_shot(rng)
    }

    /// Record the externally resolved outcome of a shot at (x, y).
    pub fn register_attack(
        &mut self,
        x: usize,
        y: usize,
        is_hit: bool,
        is_sunk: bool,
    ) -> Result<(), BoardError> {
        if x >= self.cols || y >= self.rows {
            return Err(BoardError::OutOfBounds { x, y });
        }
        self.fired.insert((x, y));
        self.available.remove(&(x, y));
        self.enemy_board.set(
            x,
            y,
            if is_hit { CellMark::Hit } else { CellMark::Miss },
        )?;

        if !is_hit {
            self.missed.insert((x, y));
            return Ok(());
        }

        self.current_hits.push((x, y));
        if is_sunk {
            self.attribute_sink();
            self.mark_surrounding();
            self.target_queue.clear();
            self.current_hits.clear();
        } else {
            let targets = self.target_cells();
            self.target_queue.extend(targets);
        }
        Ok(())
    }

    /// Read-only view of the opponent model.
    pub fn enemy_board(&self) -> &Grid<CellMark> {
        &self.enemy_board
    }

    /// Live census of enemy ships not yet sunk, keyed by size.
    pub fn remaining_ships(&self) -> &BTreeMap<usize, usize> {
        &self.remaining
    }

    /// True once every census count has reached zero.
    pub fn all_ships_sunk(&self) -> bool {
        self.remaining.values().all(|&count| count == 0)
    }

    /// Coordinates fired at so far.
    pub fn shots_fired(&self) -> usize {
        self.fired.len()
    }

    /// Fired coordinates confirmed water.
    pub fn shots_missed(&self) -> usize {
        self.missed.len()
    }

    /// Coordinates not yet excluded by firing or sunk-ship inference.
    pub fn shots_available(&self) -> usize {
        self.available.len()
    }

    /// Follow-up candidates currently queued.
    pub fn pending_targets(&self) -> usize {
        self.target_queue.len()
    }

    /// True while (x, y) has neither been fired at nor excluded.
    pub fn is_available(&self, x: usize, y: usize) -> bool {
        self.available.contains(&(x, y))
    }

    /// True once (x, y) has been fired at.
    pub fn has_fired(&self, x: usize, y: usize) -> bool {
        self.fired.contains(&(x, y))
    }

    /// Uniformly random coordinate among those still available.
    fn random_shot<R: Rng>(&self, rng: &mut R) -> Option<(usize, usize)> {
        if self.available.is_empty() {
            return None;
        }
        let idx = rng.random_range(0..self.available.len());
        self.available.iter().nth(idx).copied()
    }

    /// Attribute a sink by the length of the finished hit run. Run lengths
    /// with no live census entry are ignored (a run may span ships when a
    /// hull is not a straight line).
    fn attribute_sink(&mut self) {
        let size = self.current_hits.len();
        if let Some(count) = self.remaining.get_mut(&size) {
            if *count > 0 {
                *count -= 1;
            }
        }
        log::debug!("sunk ship of size {}", size);
    }

    /// Exclude the orthogonal border of the sunk run: hulls cannot touch,
    /// so those cells are provably water.
    fn mark_surrounding(&mut self) {
        let mut border: Vec<(usize, usize)> = Vec::new();
        for &(x, y) in &self.current_hits {
            border.extend(neighbors4(x, y, self.cols, self.rows));
        }
        for (nx, ny) in border {
            self.available.remove(&(nx, ny));
            if matches!(self.enemy_board.get(nx, ny), Ok(CellMark::Unknown)) {
                let _ = self.enemy_board.set(nx, ny, CellMark::Miss);
            }
        }
    }

    /// In-bounds orthogonal neighbors of (x, y) still available to shoot.
    fn adjacent_cells(&self, x: usize, y: usize) -> Vec<(usize, usize)> {
        neighbors4(x, y, self.cols, self.rows)
            .filter(|coord| self.available.contains(coord))
            .collect()
    }

    /// Follow-up candidates for the current hit run.
    ///
    /// A single hit probes its orthogonal neighbors. A longer run infers
    /// orientation from the shared axis and extends past both extremes.
    /// Runs are collinear by construction for straight hulls; should one
    /// not be, fall back to probing around the latest hit rather than
    /// extrapolating.
    fn target_cells(&self) -> Vec<(usize, usize)> {
        let (&(x0, y0), &(xn, yn)) = match (self.current_hits.first(), self.current_hits.last()) {
            (Some(first), Some(last)) => (first, last),
            _ => return Vec::new(),
        };
        if self.current_hits.len() == 1 {
            return self.adjacent_cells(x0, y0);
        }

        let vertical = self.current_hits.iter().all(|&(x, _)| x == x0);
        let horizontal = self.current_hits.iter().all(|&(_, y)| y == y0);

        let candidates: [(i64, i64); 2] = if vertical {
            let min_y = self.current_hits.iter().map(|&(_, y)| y).min().unwrap_or(y0);
            let max_y = self.current_hits.iter().map(|&(_, y)| y).max().unwrap_or(y0);
            [
                (x0 as i64, min_y as i64 - 1),
                (x0 as i64, max_y as i64 + 1),
            ]
        } else if horizontal {
            let min_x = self.current_hits.iter().map(|&(x, _)| x).min().unwrap_or(x0);
            let max_x = self.current_hits.iter().map(|&(x, _)| x).max().unwrap_or(x0);
            [
                (min_x as i64 - 1, y0 as i64),
                (max_x as i64 + 1, y0 as i64),
            ]
        } else {
            return self.adjacent_cells(xn, yn);
        };

        candidates
            .into_iter()
            .filter(|&(cx, cy)| {
                cx >= 0 && cy >= 0 && cx < self.cols as i64 && cy < self.rows as i64
            })
            .map(|(cx, cy)| (cx as usize, cy as usize))
            .filter(|coord| self.available.contains(coord))
            .collect()
    }
}
