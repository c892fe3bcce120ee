use crate::core::TileType;
use crate::level::{LevelError, LevelGrid};

/// Full validation pass for a playable level: known characters, uniform rows, exactly one
/// start and at least one exit.
pub fn validate_level(level: &str) -> Result<LevelGrid, LevelError> {
    let grid = LevelGrid::parse(level)?;

    match grid.count(TileType::Start) {
        0 => return Err(LevelError::MissingStart),
        1 => {}
        count => return Err(LevelError::MultipleStarts { count }),
    }

    let has_exit = grid
        .rows()
        .iter()
        .flatten()
        .any(|tile| tile.tile_type() == TileType::End || tile.is_on_exit());
    if !has_exit {
        return Err(LevelError::MissingEnd);
    }

    Ok(grid)
}
