use crate::core::{GameChange, GameState};

pub struct GameRenderState {
    pub game: GameState,
    pub allow_free_undo: bool,
    pub error: Option<String>,
    pub last_change: Option<GameChange>,
}
