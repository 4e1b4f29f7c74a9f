//! Straight ships placed on a board.

use crate::coord::Coordinate;
use crate::common::BoardError;

/// Orientation of a ship on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Orientation {
    Horizontal,
    Vertical,
}

/// A ship of `length` cells starting at `origin` and running east
/// (horizontal) or south (vertical).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Ship {
    origin: Coordinate,
    orientation: Orientation,
    length: usize,
}

impl Ship {
    /// Place a ship on an `n`×`n` board.
    pub fn new(
        origin: Coordinate,
        orientation: Orientation,
        length: usize,
        n: usize,
    ) -> Result<Self, BoardError> {
        if length == 0 {
            return Err(BoardError::EmptyShip);
        }
        let (end_row, end_col) = match orientation {
            Orientation::Horizontal => (origin.row, origin.col + length - 1),
            Orientation::Vertical => (origin.row + length - 1, origin.col),
        };
        if end_row >= n || end_col >= n {
            return Err(BoardError::ShipOutOfBounds);
        }
        Ok(Ship {
            origin,
            orientation,
            length,
        })
    }

    pub fn origin(&self) -> Coordinate {
        self.origin
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    pub fn length(&self) -> usize {
        self.length
    }

    /// Cells covered by the ship, from the origin outwards.
    pub fn cells(&self) -> impl Iterator<Item = Coordinate> + '_ {
        (0..self.length).map(move |i| match self.orientation {
            Orientation::Horizontal => Coordinate::new(self.origin.row, self.origin.col + i),
            Orientation::Vertical => Coordinate::new(self.origin.row + i, self.origin.col),
        })
    }

    pub fn contains(&self, at: Coordinate) -> bool {
        self.cells().any(|c| c == at)
    }
}
