//! Board coordinates and the four firing directions.

use core::fmt;

/// A cell on an N×N board, addressed by row then column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Coordinate {
    pub row: usize,
    pub col: usize,
}

impl Coordinate {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Whether the coordinate lies on a board of side `n`.
    #[inline]
    pub fn in_bounds(self, n: usize) -> bool {
        self.row < n && self.col < n
    }

    /// The adjacent cell in direction `dir`, or `None` past the board edge.
    pub fn step(self, dir: Direction, n: usize) -> Option<Coordinate> {
        self.offset(dir.delta(), n)
    }

    /// Shift by `(dr, dc)`, clipped to a board of side `n`.
    pub fn offset(self, (dr, dc): (isize, isize), n: usize) -> Option<Coordinate> {
        let row = self.row.checked_add_signed(dr)?;
        let col = self.col.checked_add_signed(dc)?;
        let next = Coordinate::new(row, col);
        next.in_bounds(n).then_some(next)
    }
}

impl From<(usize, usize)> for Coordinate {
    fn from((row, col): (usize, usize)) -> Self {
        Coordinate::new(row, col)
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Compass direction from one cell to an orthogonal neighbour.
/// North is towards row 0, West towards column 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    North = 0,
    South = 1,
    East = 2,
    West = 3,
}

const OPPOSITE: [Direction; 4] = [
    Direction::South,
    Direction::North,
    Direction::West,
    Direction::East,
];

const DELTA: [(isize, isize); 4] = [(-1, 0), (1, 0), (0, 1), (0, -1)];

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::South,
        Direction::East,
        Direction::West,
    ];

    #[inline]
    pub fn opposite(self) -> Direction {
        OPPOSITE[self as usize]
    }

    /// Row/column delta of a single step.
    #[inline]
    pub fn delta(self) -> (isize, isize) {
        DELTA[self as usize]
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Direction::North => "north",
            Direction::South => "south",
            Direction::East => "east",
            Direction::West => "west",
        };
        f.write_str(name)
    }
}
