//! A runtime-sized N×N bit grid.
//!
//! Cells are packed row-major into a vector of unsigned words `T`. The board
//! side is chosen when the grid is created, so one type serves every board
//! size a game may be configured with. Only `alloc` is required.

use alloc::vec;
use alloc::vec::Vec;
use core::fmt;
use num_traits::{PrimInt, Unsigned, Zero};

use crate::coord::Coordinate;

/// Errors returned by bit grid operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BitGridError {
    /// Row or column index is out of bounds [0..N).
    IndexOutOfBounds { row: usize, col: usize },
    /// Two grids of different sides were combined.
    SideMismatch { left: usize, right: usize },
}

impl fmt::Display for BitGridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BitGridError::IndexOutOfBounds { row, col } => {
                write!(f, "IndexOutOfBounds: row={}, col={}", row, col)
            }
            BitGridError::SideMismatch { left, right } => {
                write!(f, "SideMismatch: {}x{} vs {}x{}", left, left, right, right)
            }
        }
    }
}

/// An N×N grid of bits stored in words of type `T`.
#[derive(Clone, PartialEq, Eq)]
pub struct BitGrid<T = u64>
where
    T: PrimInt + Unsigned + Zero,
{
    side: usize,
    words: Vec<T>,
}

impl<T> BitGrid<T>
where
    T: PrimInt + Unsigned + Zero,
{
    #[inline]
    fn word_bits() -> usize {
        T::zero().count_zeros() as usize
    }

    /// Create an empty grid with `side × side` cells.
    pub fn new(side: usize) -> Self {
        let cells = side * side;
        let words = cells.div_ceil(Self::word_bits());
        BitGrid {
            side,
            words: vec![T::zero(); words],
        }
    }

    /// Length of one side of the grid.
    #[inline]
    pub fn side(&self) -> usize {
        self.side
    }

    /// Returns the number of set cells.
    pub fn count_ones(&self) -> usize {
        self.words.iter().map(|w| w.count_ones() as usize).sum()
    }

    /// Returns true if no cells are set.
    pub fn is_empty(&self) -> bool {
        self.words.iter().all(|w| w.is_zero())
    }

    /// Gets the bit at (row, col).
    pub fn get(&self, row: usize, col: usize) -> Result<bool, BitGridError> {
        let (w, b) = self.locate(row, col)?;
        Ok(((self.words[w] >> b) & T::one()) != T::zero())
    }

    /// Sets the bit at (row, col). Returns `true` if it was previously clear.
    pub fn set(&mut self, row: usize, col: usize) -> Result<bool, BitGridError> {
        let (w, b) = self.locate(row, col)?;
        let bit = T::one() << b;
        let was_clear = (self.words[w] & bit).is_zero();
        self.words[w] = self.words[w] | bit;
        Ok(was_clear)
    }

    /// Clears the bit at (row, col).
    pub fn clear(&mut self, row: usize, col: usize) -> Result<(), BitGridError> {
        let (w, b) = self.locate(row, col)?;
        self.words[w] = self.words[w] & !(T::one() << b);
        Ok(())
    }

    /// Whether `at` is set. Out-of-bounds coordinates are never set.
    #[inline]
    pub fn contains(&self, at: Coordinate) -> bool {
        self.get(at.row, at.col).unwrap_or(false)
    }

    /// Sets the bit at `at`, see [`BitGrid::set`].
    #[inline]
    pub fn insert(&mut self, at: Coordinate) -> Result<bool, BitGridError> {
        self.set(at.row, at.col)
    }

    /// True if any cell is set in both grids.
    pub fn intersects(&self, other: &Self) -> Result<bool, BitGridError> {
        self.check_side(other)?;
        Ok(self
            .words
            .iter()
            .zip(other.words.iter())
            .any(|(a, b)| !(*a & *b).is_zero()))
    }

    /// Sets every cell that is set in `other`.
    pub fn union_with(&mut self, other: &Self) -> Result<(), BitGridError> {
        self.check_side(other)?;
        for (a, b) in self.words.iter_mut().zip(other.words.iter()) {
            *a = *a | *b;
        }
        Ok(())
    }

    /// Creates a grid from an iterator over coordinates.
    pub fn from_coords<I>(side: usize, iter: I) -> Result<Self, BitGridError>
    where
        I: IntoIterator<Item = Coordinate>,
    {
        let mut grid = Self::new(side);
        for at in iter {
            grid.insert(at)?;
        }
        Ok(grid)
    }

    /// Iterator over the set cells in row-major order.
    #[inline]
    pub fn iter_set_bits(&self) -> SetBits<'_, T> {
        SetBits { grid: self, idx: 0 }
    }

    #[inline]
    fn locate(&self, row: usize, col: usize) -> Result<(usize, usize), BitGridError> {
        if row >= self.side || col >= self.side {
            return Err(BitGridError::IndexOutOfBounds { row, col });
        }
        let idx = row * self.side + col;
        Ok((idx / Self::word_bits(), idx % Self::word_bits()))
    }

    #[inline]
    fn check_side(&self, other: &Self) -> Result<(), BitGridError> {
        if self.side != other.side {
            Err(BitGridError::SideMismatch {
                left: self.side,
                right: other.side,
            })
        } else {
            Ok(())
        }
    }

    fn render(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for r in 0..self.side {
            for c in 0..self.side {
                let bit = if self.get(r, c).unwrap_or(false) {
                    '■'
                } else {
                    '□'
                };
                write!(f, "{} ", bit)?;
            }
            if r + 1 < self.side {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

impl<T> fmt::Debug for BitGrid<T>
where
    T: PrimInt + Unsigned + Zero,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "BitGrid<{}, {}>:",
            core::any::type_name::<T>(),
            self.side
        )?;
        self.render(f)
    }
}

impl<T> fmt::Display for BitGrid<T>
where
    T: PrimInt + Unsigned + Zero,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.render(f)
    }
}

/// Iterator over the set cells of a grid.
#[derive(Clone, Copy)]
pub struct SetBits<'a, T>
where
    T: PrimInt + Unsigned + Zero,
{
    grid: &'a BitGrid<T>,
    idx: usize,
}

impl<'a, T> Iterator for SetBits<'a, T>
where
    T: PrimInt + Unsigned + Zero,
{
    type Item = Coordinate;
    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let side = self.grid.side;
        while self.idx < side * side {
            let idx = self.idx;
            self.idx += 1;
            let at = Coordinate::new(idx / side, idx % side);
            if self.grid.contains(at) {
                return Some(at);
            }
        }
        None
    }
}
