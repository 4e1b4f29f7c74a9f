//! Per-turn decision making: pick a cell, fire it, learn from the outcome.

use rand::Rng;

use crate::bitboard::BitGrid;
use crate::board::Target;
use crate::common::EngineError;
use crate::config::{self, GameConfig};
use crate::coord::Coordinate;
use crate::fleet::FleetTracker;
use crate::hunt::{Candidate, HuntState};
use crate::search::SearchGrid;

/// All state for one game against one hidden fleet.
///
/// Build a fresh engine for every game; nothing carries over.
#[derive(Debug, Clone)]
pub struct TargetingEngine {
    tracker: FleetTracker,
    grid: SearchGrid,
    hunt: HuntState,
    shots: usize,
    hits: usize,
    aborted: bool,
}

impl TargetingEngine {
    /// Set up a game on an `board_size`×`board_size` board against ships of
    /// the given lengths. The search stride starts at the shortest ship.
    pub fn new_game(board_size: usize, fleet: &[usize]) -> Result<Self, EngineError> {
        config::validate(board_size, fleet)?;
        let tracker = FleetTracker::new(board_size, fleet);
        let stride = tracker.min_remaining().unwrap_or(1);
        let grid = SearchGrid::new(board_size, stride, tracker.excluded());
        log::debug!(
            "new game: {}x{} board, fleet {:?}, stride {}",
            board_size,
            board_size,
            fleet,
            stride
        );
        Ok(Self {
            tracker,
            grid,
            hunt: HuntState::new(),
            shots: 0,
            hits: 0,
            aborted: false,
        })
    }

    pub fn from_config(config: &GameConfig) -> Result<Self, EngineError> {
        Self::new_game(config.board_size, &config.fleet)
    }

    pub fn board_size(&self) -> usize {
        self.tracker.board_size()
    }

    pub fn is_finished(&self) -> bool {
        self.tracker.all_sunk()
    }

    pub fn stride(&self) -> usize {
        self.grid.stride()
    }

    pub fn remaining_sizes(&self) -> &[usize] {
        self.tracker.remaining_sizes()
    }

    pub fn excluded(&self) -> &BitGrid {
        self.tracker.excluded()
    }

    pub fn hunt(&self) -> &HuntState {
        &self.hunt
    }

    pub fn shots_fired(&self) -> usize {
        self.shots
    }

    pub fn hits(&self) -> usize {
        self.hits
    }

    /// Fire one shot at `target`.
    ///
    /// Returns `Ok(true)` while ships remain and `Ok(false)` once the whole
    /// fleet is sunk. Any error aborts the game: later calls return
    /// [`EngineError::Aborted`].
    pub fn take_turn<T, R>(&mut self, target: &mut T, rng: &mut R) -> Result<bool, EngineError>
    where
        T: Target + ?Sized,
        R: Rng + ?Sized,
    {
        if self.aborted {
            return Err(EngineError::Aborted);
        }
        if self.is_finished() {
            return Ok(false);
        }
        match self.turn(target, rng) {
            Ok(()) => Ok(!self.is_finished()),
            Err(e) => {
                log::error!("turn {} failed: {}", self.shots + 1, e);
                self.aborted = true;
                Err(e)
            }
        }
    }

    fn turn<T, R>(&mut self, target: &mut T, rng: &mut R) -> Result<(), EngineError>
    where
        T: Target + ?Sized,
        R: Rng + ?Sized,
    {
        let actual = target.board_size();
        if actual != self.board_size() {
            return Err(EngineError::BoardSizeMismatch {
                expected: self.board_size(),
                actual,
            });
        }

        let candidate = self.hunt.take_candidate(rng);
        let at = match candidate {
            Some(c) => c.at,
            None => self.grid.try_consume(
                rng,
                self.tracker.excluded(),
                self.tracker.remaining_sizes().len(),
            )?,
        };

        let hit = target.fire(at)?;
        self.shots += 1;
        if hit {
            self.hits += 1;
        }
        self.tracker.mark_excluded(at);
        log::debug!(
            "shot {} at {}: {}",
            self.shots,
            at,
            if hit { "hit" } else { "miss" }
        );

        match (candidate, hit) {
            (None, false) => Ok(()),
            (None, true) => self.on_anchor_hit(at),
            (Some(c), true) => self.on_candidate_hit(c),
            (Some(_), false) => self.on_candidate_miss(),
        }
    }

    fn on_anchor_hit(&mut self, at: Coordinate) -> Result<(), EngineError> {
        self.hunt.begin(at, &self.tracker);
        self.after_hit()
    }

    fn on_candidate_hit(&mut self, candidate: Candidate) -> Result<(), EngineError> {
        self.hunt.register_hit(candidate, &self.tracker);
        self.after_hit()
    }

    fn on_candidate_miss(&mut self) -> Result<(), EngineError> {
        if self.hunt.queue_is_empty() {
            self.finalize_sink()?;
        }
        Ok(())
    }

    /// A run as long as the longest surviving ship cannot grow, and a run
    /// with nothing left to probe is taken as the whole ship.
    fn after_hit(&mut self) -> Result<(), EngineError> {
        let longest = self.tracker.max_remaining().unwrap_or(0);
        if self.hunt.run().len() >= longest || self.hunt.queue_is_empty() {
            self.finalize_sink()?;
        }
        Ok(())
    }

    fn finalize_sink(&mut self) -> Result<(), EngineError> {
        let length = self.hunt.run().len();
        self.tracker.deduce_sunk(length)?;
        for &cell in self.hunt.run() {
            self.tracker.exclude_halo(cell);
        }
        log::info!(
            "sunk ship of length {} after {} shots, {} left",
            length,
            self.shots,
            self.tracker.remaining_sizes().len()
        );
        if let Some(shortest) = self.tracker.min_remaining() {
            if shortest > self.grid.stride() {
                self.grid.grow_stride(shortest, self.tracker.excluded());
            }
        }
        self.hunt.reset();
        Ok(())
    }
}
