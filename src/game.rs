use rand::Rng;

use crate::board::Target;
use crate::common::EngineError;
use crate::engine::TargetingEngine;

/// How a game went.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct GameSummary {
    pub shots: usize,
    pub hits: usize,
    pub ships_sunk: usize,
    /// Whether the whole fleet went down before the shot limit.
    pub finished: bool,
}

/// Let `engine` fire at `target` until the fleet is sunk or `shot_limit`
/// shots have been taken.
pub fn play_out<T, R>(
    engine: &mut TargetingEngine,
    target: &mut T,
    rng: &mut R,
    shot_limit: usize,
) -> Result<GameSummary, EngineError>
where
    T: Target + ?Sized,
    R: Rng + ?Sized,
{
    let fleet_size = engine.remaining_sizes().len();
    while engine.shots_fired() < shot_limit {
        if !engine.take_turn(target, rng)? {
            break;
        }
    }
    Ok(GameSummary {
        shots: engine.shots_fired(),
        hits: engine.hits(),
        ships_sunk: fleet_size - engine.remaining_sizes().len(),
        finished: engine.is_finished(),
    })
}
