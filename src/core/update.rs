use tracing::{error, trace};
use crate::core::{Block, Direction, GameChange, GameState, Move, MoveRejected, Position, TileType};

impl GameState {
    /// Moves the player one step, pushing a block if one is in the way.
    ///
    /// Returns false and leaves the game unchanged when the move is not possible. With
    /// `allow_free_undo`, stepping straight back after a move that pushed nothing undoes that
    /// move instead of recording a new one.
    pub fn apply_move(&mut self, direction: Direction, allow_free_undo: bool) -> bool {
        match self.try_move(direction, allow_free_undo) {
            Ok(change) => {
                trace!(?direction, ?change, moves = self.moves.len(), "move applied");
                true
            }
            Err(reason) => {
                trace!(?direction, %reason, moves = self.moves.len(), "move rejected");
                false
            }
        }
    }

    pub fn try_move(&mut self, direction: Direction, allow_free_undo: bool) -> Result<GameChange, MoveRejected> {
        if self.board[&self.player_position].tile_type == TileType::End {
            return Err(MoveRejected::Terminal);
        }

        if allow_free_undo {
            if let Some(previous) = self.moves.last() {
                if previous.block_id.is_none() && previous.direction == direction.opposite() {
                    return self.try_undo().map(|_| GameChange::FreeUndo);
                }
            }
        }

        let move_count = self.moves.len();
        let visits = &mut self.board[&self.player_position].visits;
        if visits.last() != Some(&move_count) {
            visits.push(move_count);
        }

        let destination = self.player_position + direction.to_position();
        let Some(destination_cell) = self.board.get(&destination) else {
            return Err(MoveRejected::OutOfBounds);
        };
        match destination_cell.tile_type {
            TileType::Wall => return Err(MoveRejected::Wall),
            TileType::Hole => return Err(MoveRejected::Hole),
            _ => {}
        }
        let block_in_way = destination_cell.block;

        let block_id = match block_in_way {
            Some(block) => {
                self.push_block(block, destination, direction)?;
                Some(block.id)
            }
            None => None,
        };

        self.moves.push(Move { direction, block_id });
        self.player_position = destination;

        let move_count = self.moves.len();
        let visits = &mut self.board[&destination].visits;
        if visits.last() != Some(&move_count) {
            visits.push(move_count);
        }

        Ok(match block_id {
            Some(_) => GameChange::PlayerAndBlockMove,
            None => GameChange::PlayerMove,
        })
    }

    fn push_block(&mut self, block: Block, from: Position, direction: Direction) -> Result<(), MoveRejected> {
        if !block.tile_type.can_move_in_direction(direction) {
            return Err(MoveRejected::BlockCannotMove { block_id: block.id, direction });
        }

        let target = from + direction.to_position();
        let obstructed = match self.board.get(&target) {
            Some(cell) => cell.tile_type == TileType::Wall || cell.block.is_some(),
            None => true,
        };
        if obstructed {
            return Err(MoveRejected::BlockObstructed { block_id: block.id });
        }

        self.board[&from].block = None;
        let target_cell = &mut self.board[&target];
        if target_cell.tile_type == TileType::Hole {
            target_cell.tile_type = TileType::Default;
            target_cell.block_in_hole = Some(block);
        } else {
            target_cell.block = Some(block);
        }
        Ok(())
    }

    /// Reverts the most recent move. Returns false when there is nothing to undo, or when the
    /// pushed block is no longer where that move left it.
    pub fn undo(&mut self) -> bool {
        match self.try_undo() {
            Ok(_) => {
                trace!(moves = self.moves.len(), "move undone");
                true
            }
            Err(reason) => {
                trace!(%reason, moves = self.moves.len(), "undo rejected");
                false
            }
        }
    }

    pub fn try_undo(&mut self) -> Result<GameChange, MoveRejected> {
        let Some(&last) = self.moves.last() else {
            return Err(MoveRejected::NothingToUndo);
        };

        if let Some(block_id) = last.block_id {
            self.pull_block(block_id, last.direction)?;
        }

        self.moves.pop();
        let move_count = self.moves.len();
        let visits = &mut self.board[&self.player_position].visits;
        if visits.last() == Some(&(move_count + 1)) {
            visits.pop();
        }

        self.player_position -= last.direction.to_position();
        Ok(GameChange::Undo)
    }

    /// Brings a pushed block back from the cell beyond the player onto the player's cell.
    fn pull_block(&mut self, block_id: usize, direction: Direction) -> Result<(), MoveRejected> {
        let far = self.player_position + direction.to_position();
        let block = self.board.get_mut(&far).and_then(|cell| {
            if cell.block.is_some_and(|b| b.id == block_id) {
                cell.block.take()
            } else if cell.block_in_hole.is_some_and(|b| b.id == block_id) {
                cell.tile_type = TileType::Hole;
                cell.block_in_hole.take()
            } else {
                None
            }
        });

        debug_assert!(block.is_some(), "block {block_id} missing at {far:?}, game was changed outside the engine");
        let Some(block) = block else {
            error!(block_id, ?far, "undo could not find the pushed block");
            return Err(MoveRejected::BlockMissing { block_id });
        };

        self.board[&self.player_position].block = Some(block);
        Ok(())
    }
}
