//! Error types shared by the targeting engine and the boards it fires at.

use alloc::vec::Vec;
use core::fmt;

use crate::bitboard::BitGridError;
use crate::coord::Coordinate;

/// Errors returned by a board when it is fired at or populated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    /// Underlying bit grid error.
    BitGrid(BitGridError),
    /// Coordinate lies outside the board.
    OutOfBounds(Coordinate),
    /// The cell was already fired at.
    AlreadyFired(Coordinate),
    /// Ship placement extends past the board edge.
    ShipOutOfBounds,
    /// Ship placement overlaps another ship.
    ShipOverlaps,
    /// Ship placement touches another ship, diagonals included.
    ShipTouches,
    /// Ship of length zero.
    EmptyShip,
    /// Random placement gave up.
    UnableToPlaceShip,
}

impl From<BitGridError> for BoardError {
    fn from(err: BitGridError) -> Self {
        BoardError::BitGrid(err)
    }
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoardError::BitGrid(e) => write!(f, "BitGrid error: {}", e),
            BoardError::OutOfBounds(at) => write!(f, "Coordinate {} is off the board", at),
            BoardError::AlreadyFired(at) => write!(f, "Cell {} was already fired at", at),
            BoardError::ShipOutOfBounds => write!(f, "Ship placement is out of bounds"),
            BoardError::ShipOverlaps => write!(f, "Ship placement overlaps with another ship"),
            BoardError::ShipTouches => write!(f, "Ship placement touches another ship"),
            BoardError::EmptyShip => write!(f, "Ship length must be at least 1"),
            BoardError::UnableToPlaceShip => write!(f, "Unable to place ship"),
        }
    }
}

/// Rejected game setup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    ZeroBoard,
    EmptyFleet,
    ZeroLengthShip,
    ShipTooLong { length: usize, board_size: usize },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::ZeroBoard => write!(f, "board size must be at least 1"),
            ConfigError::EmptyFleet => write!(f, "fleet must contain at least one ship"),
            ConfigError::ZeroLengthShip => write!(f, "ship lengths must be at least 1"),
            ConfigError::ShipTooLong { length, board_size } => write!(
                f,
                "ship of length {} does not fit a {}x{} board",
                length, board_size, board_size
            ),
        }
    }
}

/// Failures of the targeting engine.
///
/// Apart from `Config` these are bookkeeping defects, not bad input. None of
/// them is retryable: the engine is deterministic given its state and random
/// draws, so the same turn would fail the same way.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// The search grid ran dry while ships remain; the stride exceeded the
    /// shortest surviving ship.
    ExhaustedSearchSpace { stride: usize, ships_remaining: usize },
    /// The board reports the cell was already fired; exclusion tracking
    /// diverged from the engine's selections.
    RefireAttempt(Coordinate),
    /// A hunt was finalized with a run length matching no surviving ship.
    FleetMismatch { run_length: usize, remaining: Vec<usize> },
    /// The board handed to `take_turn` is not the size the game was set up for.
    BoardSizeMismatch { expected: usize, actual: usize },
    /// Any other board failure.
    Board(BoardError),
    /// Invalid game setup.
    Config(ConfigError),
    /// An earlier turn failed; start a new game.
    Aborted,
}

impl From<BoardError> for EngineError {
    fn from(err: BoardError) -> Self {
        match err {
            BoardError::AlreadyFired(at) => EngineError::RefireAttempt(at),
            other => EngineError::Board(other),
        }
    }
}

impl From<ConfigError> for EngineError {
    fn from(err: ConfigError) -> Self {
        EngineError::Config(err)
    }
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EngineError::ExhaustedSearchSpace {
                stride,
                ships_remaining,
            } => write!(
                f,
                "search grid exhausted at stride {} with {} ship(s) afloat",
                stride, ships_remaining
            ),
            EngineError::RefireAttempt(at) => {
                write!(f, "engine selected {} which was already fired at", at)
            }
            EngineError::FleetMismatch {
                run_length,
                remaining,
            } => write!(
                f,
                "sunk a run of length {} but remaining fleet is {:?}",
                run_length, remaining
            ),
            EngineError::BoardSizeMismatch { expected, actual } => write!(
                f,
                "engine set up for a {}x{} board, got {}x{}",
                expected, expected, actual, actual
            ),
            EngineError::Board(e) => write!(f, "board error: {}", e),
            EngineError::Config(e) => write!(f, "invalid game config: {}", e),
            EngineError::Aborted => write!(f, "game aborted by an earlier failure"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for BitGridError {}
#[cfg(feature = "std")]
impl std::error::Error for BoardError {}
#[cfg(feature = "std")]
impl std::error::Error for ConfigError {}
#[cfg(feature = "std")]
impl std::error::Error for EngineError {}
