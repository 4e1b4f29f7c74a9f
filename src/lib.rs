#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

mod bitboard;
mod board;
mod common;
mod config;
mod coord;
mod engine;
mod fleet;
mod game;
#[cfg(feature = "std")]
mod logging;
mod hunt;
mod search;
mod ship;

pub use bitboard::{BitGrid, BitGridError, SetBits};
pub use board::*;
pub use common::*;
pub use config::*;
pub use coord::*;
pub use engine::*;
pub use fleet::*;
pub use game::*;
pub use hunt::{Candidate, HuntPhase, HuntState};
#[cfg(feature = "std")]
pub use logging::init_logging;
pub use search::{generate, SearchGrid, SearchPattern};
pub use ship::*;
