//! The board the engine fires at, and an in-memory fleet layout implementing it.

use alloc::vec::Vec;
use core::fmt;
use rand::Rng;

use crate::bitboard::BitGrid;
use crate::common::BoardError;
use crate::coord::Coordinate;
use crate::ship::{Orientation, Ship};

const PLACEMENT_ATTEMPTS: usize = 100;

/// Something that can be fired at.
pub trait Target {
    /// Side length of the square board.
    fn board_size(&self) -> usize;

    /// Fire at `at`, returning whether a ship was hit. Firing twice at the
    /// same cell must fail with [`BoardError::AlreadyFired`].
    fn fire(&mut self, at: Coordinate) -> Result<bool, BoardError>;
}

/// A hidden fleet on an N×N board. Ships never touch, not even diagonally.
#[derive(Clone)]
pub struct Ocean {
    size: usize,
    ships: Vec<Ship>,
    ship_map: BitGrid,
    fired: BitGrid,
    hits: usize,
}

impl Ocean {
    /// Create an empty ocean.
    pub fn new(size: usize) -> Self {
        Ocean {
            size,
            ships: Vec::new(),
            ship_map: BitGrid::new(size),
            fired: BitGrid::new(size),
            hits: 0,
        }
    }

    /// Place a fleet of the given lengths at random, longest first.
    pub fn random<R: Rng + ?Sized>(
        size: usize,
        fleet: &[usize],
        rng: &mut R,
    ) -> Result<Self, BoardError> {
        let mut lengths = fleet.to_vec();
        lengths.sort_unstable_by(|a, b| b.cmp(a));
        'layout: for _ in 0..PLACEMENT_ATTEMPTS {
            let mut ocean = Ocean::new(size);
            for &length in &lengths {
                match ocean.random_placement(rng, length) {
                    Ok(ship) => ocean.place(ship)?,
                    Err(BoardError::UnableToPlaceShip) => continue 'layout,
                    Err(e) => return Err(e),
                }
            }
            return Ok(ocean);
        }
        Err(BoardError::UnableToPlaceShip)
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn ships(&self) -> &[Ship] {
        &self.ships
    }

    /// Occupancy mask of all ships.
    pub fn ship_map(&self) -> &BitGrid {
        &self.ship_map
    }

    pub fn shots_fired(&self) -> usize {
        self.fired.count_ones()
    }

    /// Returns `true` once every ship cell has been hit.
    pub fn all_sunk(&self) -> bool {
        self.hits == self.ship_map.count_ones()
    }

    /// Whether every cell of `ship` has been fired at.
    pub fn is_sunk(&self, ship: &Ship) -> bool {
        ship.cells().all(|c| self.fired.contains(c))
    }

    /// Add a ship, rejecting overlaps and contact with ships already placed.
    pub fn place(&mut self, ship: Ship) -> Result<(), BoardError> {
        // Re-validate against this board's size.
        let ship = Ship::new(ship.origin(), ship.orientation(), ship.length(), self.size)?;
        let mask = BitGrid::from_coords(self.size, ship.cells())?;
        if self.ship_map.intersects(&mask)? {
            return Err(BoardError::ShipOverlaps);
        }
        if self.ship_map.intersects(&self.halo(&ship)?)? {
            return Err(BoardError::ShipTouches);
        }
        self.ship_map.union_with(&mask)?;
        self.ships.push(ship);
        Ok(())
    }

    /// A random valid placement of a ship of `length`.
    pub fn random_placement<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        length: usize,
    ) -> Result<Ship, BoardError> {
        if length == 0 {
            return Err(BoardError::EmptyShip);
        }
        if length > self.size {
            return Err(BoardError::ShipOutOfBounds);
        }
        for _ in 0..PLACEMENT_ATTEMPTS {
            let orient = if rng.random() {
                Orientation::Horizontal
            } else {
                Orientation::Vertical
            };
            let (max_r, max_c) = match orient {
                Orientation::Horizontal => (self.size - 1, self.size - length),
                Orientation::Vertical => (self.size - length, self.size - 1),
            };
            let origin = Coordinate::new(rng.random_range(0..=max_r), rng.random_range(0..=max_c));
            let ship = Ship::new(origin, orient, length, self.size)?;
            let mask = BitGrid::from_coords(self.size, ship.cells())?;
            if !self.ship_map.intersects(&mask)? && !self.ship_map.intersects(&self.halo(&ship)?)? {
                return Ok(ship);
            }
        }
        Err(BoardError::UnableToPlaceShip)
    }

    /// Cells 8-adjacent to `ship`, the ship itself excluded.
    fn halo(&self, ship: &Ship) -> Result<BitGrid, BoardError> {
        let mut halo = BitGrid::new(self.size);
        for cell in ship.cells() {
            for dr in -1isize..=1 {
                for dc in -1isize..=1 {
                    if let Some(n) = cell.offset((dr, dc), self.size) {
                        if !ship.contains(n) {
                            halo.insert(n)?;
                        }
                    }
                }
            }
        }
        Ok(halo)
    }
}

impl Target for Ocean {
    fn board_size(&self) -> usize {
        self.size
    }

    fn fire(&mut self, at: Coordinate) -> Result<bool, BoardError> {
        if !at.in_bounds(self.size) {
            return Err(BoardError::OutOfBounds(at));
        }
        if !self.fired.insert(at)? {
            return Err(BoardError::AlreadyFired(at));
        }
        let hit = self.ship_map.contains(at);
        if hit {
            self.hits += 1;
        }
        Ok(hit)
    }
}

impl fmt::Debug for Ocean {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Ocean {{\n  ship_map: {:?},\n  fired: {:?},\n  ships: {:?}\n}}",
            self.ship_map, self.fired, self.ships
        )
    }
}
