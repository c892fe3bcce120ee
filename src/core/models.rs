use serde::{Deserialize, Serialize};
use crate::core::bounded_grid::BoundedGrid;
use crate::core::{Direction, Position, TileType};

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub struct Block {
    pub id: usize,
    /// Directional restriction of the block itself, it travels with the block.
    pub tile_type: TileType,
}

#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Cell {
    pub tile_type: TileType,
    pub block: Option<Block>,
    /// A block that fell into the hole this cell used to be.
    pub block_in_hole: Option<Block>,
    /// Move counts at which the player stood on this cell, oldest first.
    pub visits: Vec<usize>,
}

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub struct Move {
    pub direction: Direction,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub block_id: Option<usize>,
}

#[derive(Clone, PartialEq, Eq, Debug)]
pub struct GameState {
    pub board: BoundedGrid<Cell>,
    pub moves: Vec<Move>,
    pub player_position: Position,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameChange {
    PlayerMove,
    PlayerAndBlockMove,
    /// The move reversed the previous block-free move and was applied as an undo.
    FreeUndo,
    Undo,
}

#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveRejected {
    #[error("the player is standing on an exit")]
    Terminal,
    #[error("cannot move out of bounds")]
    OutOfBounds,
    #[error("cannot walk into a wall")]
    Wall,
    #[error("cannot walk into a hole")]
    Hole,
    #[error("block {block_id} cannot be pushed {direction:?}")]
    BlockCannotMove { block_id: usize, direction: Direction },
    #[error("block {block_id} is obstructed")]
    BlockObstructed { block_id: usize },
    #[error("there is no move to undo")]
    NothingToUndo,
    #[error("block {block_id} is not where the undone move left it")]
    BlockMissing { block_id: usize },
}
