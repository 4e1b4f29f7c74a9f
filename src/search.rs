//! Search-phase sampling pattern.
//!
//! Row `i` samples the columns `stride·k + (i mod stride)`. Within a row the
//! sampled columns are a single residue class modulo `stride`, so any
//! `stride` consecutive columns contain exactly one of them and every
//! horizontal ship of length ≥ `stride` is crossed. Column `j` is sampled in
//! exactly the rows `i ≡ j (mod stride)`, which gives the same guarantee for
//! vertical ships. The diagonal offset is what lets the stride grow past 1
//! without losing coverage.

use alloc::vec::Vec;
use rand::Rng;

use crate::bitboard::BitGrid;
use crate::common::EngineError;
use crate::coord::Coordinate;

/// Lazy walk over the sampled cells of an `n`×`n` board, row by row.
/// Clone it to restart.
#[derive(Debug, Clone)]
pub struct SearchPattern {
    n: usize,
    stride: usize,
    row: usize,
    col: usize,
}

impl SearchPattern {
    pub fn new(n: usize, stride: usize) -> Self {
        let stride = stride.max(1);
        Self {
            n,
            stride,
            row: 0,
            col: 0,
        }
    }
}

impl Iterator for SearchPattern {
    type Item = Coordinate;

    fn next(&mut self) -> Option<Coordinate> {
        while self.row < self.n {
            if self.col < self.n {
                let at = Coordinate::new(self.row, self.col);
                self.col += self.stride;
                return Some(at);
            }
            self.row += 1;
            self.col = self.row % self.stride;
        }
        None
    }
}

/// The sampled cells at `stride` that are not in `excluded`.
pub fn generate(
    n: usize,
    stride: usize,
    excluded: &BitGrid,
) -> impl Iterator<Item = Coordinate> + Clone + '_ {
    SearchPattern::new(n, stride).filter(move |&at| !excluded.contains(at))
}

/// Search cells not yet fired, drawn without replacement.
#[derive(Debug, Clone)]
pub struct SearchGrid {
    n: usize,
    stride: usize,
    cells: Vec<Coordinate>,
}

impl SearchGrid {
    pub fn new(n: usize, stride: usize, excluded: &BitGrid) -> Self {
        let stride = stride.max(1);
        Self {
            n,
            stride,
            cells: generate(n, stride, excluded).collect(),
        }
    }

    pub fn stride(&self) -> usize {
        self.stride
    }

    /// Cells still held, some of which may have been excluded since they were
    /// generated.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Remove and return a uniformly random cell that is not excluded.
    pub fn consume<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
        excluded: &BitGrid,
    ) -> Option<Coordinate> {
        self.cells.retain(|&at| !excluded.contains(at));
        if self.cells.is_empty() {
            return None;
        }
        let idx = rng.random_range(0..self.cells.len());
        Some(self.cells.swap_remove(idx))
    }

    /// Like [`SearchGrid::consume`], but running dry is an engine defect.
    pub fn try_consume<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
        excluded: &BitGrid,
        ships_remaining: usize,
    ) -> Result<Coordinate, EngineError> {
        self.consume(rng, excluded)
            .ok_or(EngineError::ExhaustedSearchSpace {
                stride: self.stride,
                ships_remaining,
            })
    }

    /// Regenerate at a wider stride. Narrower or equal strides are ignored so
    /// the stride never shrinks.
    pub fn grow_stride(&mut self, new_stride: usize, excluded: &BitGrid) {
        if new_stride <= self.stride {
            return;
        }
        log::info!("search stride {} -> {}", self.stride, new_stride);
        *self = SearchGrid::new(self.n, new_stride, excluded);
    }
}
