use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};
use crate::core::{Direction, GameState};
use crate::level::LevelError;

/// Outcome of replaying a claimed solution against a level.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReplayReport {
    /// Index of the first direction the engine refused. Replay stops there.
    pub first_rejected: Option<usize>,
    pub move_count: usize,
    pub completed: bool,
}

impl ReplayReport {
    /// Every move was legal, the player ended on an exit, and it took exactly `claimed_steps`.
    pub fn is_valid_solution(&self, claimed_steps: usize) -> bool {
        self.first_rejected.is_none() && self.completed && self.move_count == claimed_steps
    }
}

/// Replays `directions` from the level's starting position without free undo.
pub fn replay(game: &mut GameState, directions: &[Direction]) -> ReplayReport {
    let first_rejected = directions
        .iter()
        .position(|&direction| !game.apply_move(direction, false));

    ReplayReport {
        first_rejected,
        move_count: game.move_count(),
        completed: game.is_complete(),
    }
}

#[instrument(skip_all, fields(directions = directions.len()))]
pub fn verify_solution(level: &str, directions: &[Direction]) -> Result<ReplayReport, LevelError> {
    let mut game = GameState::initialize(level)?;
    let report = replay(&mut game, directions);
    debug!(?report, "replay finished");
    Ok(report)
}
