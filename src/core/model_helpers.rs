use crate::core::{Cell, GameState, Position, TileType};

impl GameState {
    /// The player has reached an exit. No further move is accepted until an undo.
    pub fn is_complete(&self) -> bool {
        self.board[&self.player_position].tile_type == TileType::End
    }

    pub fn height(&self) -> i32 {
        self.board.size().height()
    }

    pub fn width(&self) -> i32 {
        self.board.size().width()
    }

    pub fn cell(&self, pos: &Position) -> Option<&Cell> {
        self.board.get(pos)
    }

    pub fn move_count(&self) -> usize {
        self.moves.len()
    }

    /// Blocks still on the floor, holes they fill are not counted.
    pub fn block_count(&self) -> usize {
        self.board.iter().filter(|(_, cell)| cell.block.is_some()).count()
    }
}
