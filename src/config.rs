use alloc::vec::Vec;

use crate::common::ConfigError;

pub const DEFAULT_BOARD_SIZE: usize = 10;
pub const DEFAULT_FLEET: [usize; 5] = [5, 4, 3, 3, 2];

/// Board size and fleet composition for one game.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "std", serde(default))]
pub struct GameConfig {
    pub board_size: usize,
    pub fleet: Vec<usize>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            board_size: DEFAULT_BOARD_SIZE,
            fleet: DEFAULT_FLEET.to_vec(),
        }
    }
}

impl GameConfig {
    pub fn new(board_size: usize, fleet: Vec<usize>) -> Self {
        Self { board_size, fleet }
    }

    /// Check that every ship fits the board.
    pub fn validate(&self) -> Result<(), ConfigError> {
        validate(self.board_size, &self.fleet)
    }

    /// Parse and validate a JSON config such as
    /// `{"board_size": 10, "fleet": [5, 4, 3, 3, 2]}`. Missing fields fall
    /// back to the defaults.
    #[cfg(feature = "std")]
    pub fn from_json(text: &str) -> anyhow::Result<Self> {
        let config: GameConfig = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }
}

pub(crate) fn validate(board_size: usize, fleet: &[usize]) -> Result<(), ConfigError> {
    if board_size == 0 {
        return Err(ConfigError::ZeroBoard);
    }
    if fleet.is_empty() {
        return Err(ConfigError::EmptyFleet);
    }
    for &length in fleet {
        if length == 0 {
            return Err(ConfigError::ZeroLengthShip);
        }
        if length > board_size {
            return Err(ConfigError::ShipTooLong { length, board_size });
        }
    }
    Ok(())
}
