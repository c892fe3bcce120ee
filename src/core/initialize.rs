use tracing::debug;
use crate::core::bounded_grid::BoundedGrid;
use crate::core::{Block, Cell, GameState, Position, TileType};
use crate::level::{LevelError, LevelGrid};

impl Cell {
    pub fn floor(tile_type: TileType) -> Cell {
        Cell {
            tile_type,
            block: None,
            block_in_hole: None,
            visits: Vec::new(),
        }
    }
}

impl GameState {
    /// Loads level text into a fresh game. Rows must be equal length and exactly one start is
    /// required.
    pub fn initialize(level: &str) -> Result<GameState, LevelError> {
        let grid = LevelGrid::parse(level)?;
        GameState::from_level_grid(&grid)
    }

    pub fn from_level_grid(grid: &LevelGrid) -> Result<GameState, LevelError> {
        let mut next_block_id = 0;
        let mut starts = Vec::new();
        let mut rows = Vec::with_capacity(grid.height());

        for (y, tiles) in grid.rows().iter().enumerate() {
            let mut row = Vec::with_capacity(tiles.len());
            for (x, tile) in tiles.iter().enumerate() {
                let tile_type = tile.tile_type();
                let cell = if tile_type == TileType::Start {
                    starts.push(Position::new(x as i32, y as i32));
                    Cell::floor(TileType::Default)
                } else if tile_type.can_move() {
                    let floor = if tile.is_on_exit() { TileType::End } else { TileType::Default };
                    let mut cell = Cell::floor(floor);
                    cell.block = Some(Block { id: next_block_id, tile_type });
                    next_block_id += 1;
                    cell
                } else {
                    Cell::floor(tile_type)
                };
                row.push(cell);
            }
            rows.push(row);
        }

        let player_position = match starts.as_slice() {
            [] => return Err(LevelError::MissingStart),
            [start] => *start,
            _ => return Err(LevelError::MultipleStarts { count: starts.len() }),
        };

        let mut board = BoundedGrid::from_rows(rows);
        board[&player_position].visits.push(0);

        debug!(
            width = grid.width(),
            height = grid.height(),
            blocks = next_block_id,
            "level loaded"
        );

        Ok(GameState {
            board,
            moves: Vec::new(),
            player_position,
        })
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn assigns_block_ids_in_scan_order() {
        let game = GameState::initialize("2E4\n0K3").unwrap();
        assert_eq!(game.player_position, Position::new(2, 0));
        assert_eq!(game.board[&Position::new(0, 0)].block, Some(Block { id: 0, tile_type: TileType::Block }));
        assert_eq!(game.board[&Position::new(1, 0)].block, Some(Block { id: 1, tile_type: TileType::NotLeft }));
        assert_eq!(game.board[&Position::new(1, 1)].block, Some(Block { id: 2, tile_type: TileType::Block }));
        assert_eq!(game.board[&Position::new(1, 1)].tile_type, TileType::End);
        assert_eq!(game.board[&Position::new(0, 0)].tile_type, TileType::Default);
        assert!(game.moves.is_empty());
    }

    #[test]
    fn start_becomes_floor_with_initial_visit() {
        let game = GameState::initialize("0403").unwrap();
        let start = &game.board[&Position::new(1, 0)];
        assert_eq!(start.tile_type, TileType::Default);
        assert_eq!(start.visits, vec![0]);
    }

    #[test]
    fn rejects_levels_without_single_start() {
        assert_eq!(GameState::initialize("0003"), Err(LevelError::MissingStart));
        assert_eq!(GameState::initialize("4\n4"), Err(LevelError::MultipleStarts { count: 2 }));
    }

    #[test]
    fn rejects_ragged_rows() {
        assert_eq!(
            GameState::initialize("403\n00"),
            Err(LevelError::RaggedRow { row: 1, expected: 3, found: 2 })
        );
    }
}
