//! Hunting a located ship: the run of confirmed hits and the queue of cells
//! that may extend it.

use alloc::vec::Vec;
use rand::Rng;

use crate::coord::{Coordinate, Direction};
use crate::fleet::FleetTracker;

/// A cell suspected to extend the current ship, tagged with the direction
/// that reaches it from the run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Candidate {
    pub at: Coordinate,
    pub direction: Direction,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HuntPhase {
    /// No ship located.
    Idle,
    /// One hit, orientation unknown.
    SeekingDirection,
    /// Two or more hits along a known axis.
    Extending,
}

#[derive(Debug, Clone, Default)]
pub struct HuntState {
    run: Vec<Coordinate>,
    queue: Vec<Candidate>,
}

impl HuntState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> HuntPhase {
        match self.run.len() {
            0 => HuntPhase::Idle,
            1 => HuntPhase::SeekingDirection,
            _ => HuntPhase::Extending,
        }
    }

    pub fn is_idle(&self) -> bool {
        self.run.is_empty()
    }

    /// Hits confirmed on the ship being hunted, in the order they landed.
    pub fn run(&self) -> &[Coordinate] {
        &self.run
    }

    pub fn candidates(&self) -> &[Candidate] {
        &self.queue
    }

    pub fn queue_is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    /// Start hunting from a search-phase hit at `anchor`: queue every
    /// orthogonal neighbour still worth firing at.
    pub fn begin(&mut self, anchor: Coordinate, tracker: &FleetTracker) {
        self.run.clear();
        self.queue.clear();
        self.run.push(anchor);
        for dir in Direction::ALL {
            self.enqueue(anchor, dir, tracker);
        }
    }

    /// Remove and return a queued candidate. All candidates are equally
    /// likely; there is deliberately no priority between directions.
    pub fn take_candidate<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Option<Candidate> {
        if self.queue.is_empty() {
            return None;
        }
        let idx = rng.random_range(0..self.queue.len());
        Some(self.queue.swap_remove(idx))
    }

    /// Record that `candidate` was a hit.
    ///
    /// The first hit after the anchor fixes the ship's axis: every queued
    /// cell not on the far side of the anchor is dropped. The hit cell itself
    /// never stays queued, even if it was not drawn with `take_candidate`.
    pub fn register_hit(&mut self, candidate: Candidate, tracker: &FleetTracker) {
        let direction = candidate.direction;
        self.queue.retain(|c| c.at != candidate.at);
        if self.run.len() == 1 {
            let back = direction.opposite();
            // Filtered copy swapped in whole.
            let kept: Vec<Candidate> = self
                .queue
                .iter()
                .copied()
                .filter(|c| c.direction == back)
                .collect();
            self.queue = kept;
        }
        self.run.push(candidate.at);
        self.enqueue(candidate.at, direction, tracker);
    }

    pub fn reset(&mut self) {
        self.run.clear();
        self.queue.clear();
    }

    fn enqueue(&mut self, from: Coordinate, direction: Direction, tracker: &FleetTracker) {
        let Some(at) = from.step(direction, tracker.board_size()) else {
            return;
        };
        if tracker.is_excluded(at) {
            return;
        }
        self.queue.push(Candidate { at, direction });
    }
}
