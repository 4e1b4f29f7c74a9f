//! What the engine knows about the opposing fleet: which cells no longer need
//! firing and which ship lengths are still afloat.

use alloc::vec::Vec;

use crate::bitboard::BitGrid;
use crate::common::EngineError;
use crate::coord::Coordinate;

const HALO: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

#[derive(Debug, Clone)]
pub struct FleetTracker {
    board_size: usize,
    excluded: BitGrid,
    sizes: Vec<usize>,
}

impl FleetTracker {
    pub fn new(board_size: usize, fleet: &[usize]) -> Self {
        Self {
            board_size,
            excluded: BitGrid::new(board_size),
            sizes: fleet.to_vec(),
        }
    }

    pub fn board_size(&self) -> usize {
        self.board_size
    }

    /// Add `at` to the exclusion set. Returns `true` if it was not there yet;
    /// off-board coordinates are ignored.
    pub fn mark_excluded(&mut self, at: Coordinate) -> bool {
        self.excluded.insert(at).unwrap_or(false)
    }

    pub fn is_excluded(&self, at: Coordinate) -> bool {
        self.excluded.contains(at)
    }

    pub fn excluded(&self) -> &BitGrid {
        &self.excluded
    }

    /// The up to eight cells around `at` that lie on the board.
    pub fn neighbors8(&self, at: Coordinate) -> impl Iterator<Item = Coordinate> + '_ {
        HALO.iter()
            .filter_map(move |&delta| at.offset(delta, self.board_size))
    }

    /// Exclude `at` and its whole 8-neighbourhood.
    pub fn exclude_halo(&mut self, at: Coordinate) {
        let halo: Vec<Coordinate> = self.neighbors8(at).collect();
        self.mark_excluded(at);
        for cell in halo {
            self.mark_excluded(cell);
        }
    }

    /// Lengths of ships not yet deduced sunk.
    pub fn remaining_sizes(&self) -> &[usize] {
        &self.sizes
    }

    pub fn min_remaining(&self) -> Option<usize> {
        self.sizes.iter().copied().min()
    }

    pub fn max_remaining(&self) -> Option<usize> {
        self.sizes.iter().copied().max()
    }

    pub fn all_sunk(&self) -> bool {
        self.sizes.is_empty()
    }

    /// Remove one ship of length `run_length` from the fleet.
    pub fn deduce_sunk(&mut self, run_length: usize) -> Result<(), EngineError> {
        match self.sizes.iter().position(|&len| len == run_length) {
            Some(idx) => {
                self.sizes.swap_remove(idx);
                Ok(())
            }
            None => Err(EngineError::FleetMismatch {
                run_length,
                remaining: self.sizes.clone(),
            }),
        }
    }
}
