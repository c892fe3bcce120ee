use crate::core::{Tile, TileType};
use crate::level::{LevelError, LevelGrid};

/// Advances a directional kind by a quarter turn counter-clockwise. Non-directional kinds are
/// unchanged.
pub fn rotate_tile(tile_type: TileType) -> TileType {
    match tile_type {
        TileType::Left => TileType::Down,
        TileType::Down => TileType::Right,
        TileType::Right => TileType::Up,
        TileType::Up => TileType::Left,
        TileType::UpLeft => TileType::DownLeft,
        TileType::DownLeft => TileType::DownRight,
        TileType::DownRight => TileType::UpRight,
        TileType::UpRight => TileType::UpLeft,
        TileType::NotLeft => TileType::NotDown,
        TileType::NotDown => TileType::NotRight,
        TileType::NotRight => TileType::NotUp,
        TileType::NotUp => TileType::NotLeft,
        TileType::LeftRight => TileType::UpDown,
        TileType::UpDown => TileType::LeftRight,
        TileType::Default
        | TileType::Wall
        | TileType::Block
        | TileType::End
        | TileType::Start
        | TileType::Hole => tile_type,
    }
}

/// Mirrors a directional kind top to bottom.
pub fn flip_tile(tile_type: TileType) -> TileType {
    match tile_type {
        TileType::Up => TileType::Down,
        TileType::Down => TileType::Up,
        TileType::UpLeft => TileType::DownLeft,
        TileType::DownLeft => TileType::UpLeft,
        TileType::UpRight => TileType::DownRight,
        TileType::DownRight => TileType::UpRight,
        TileType::NotUp => TileType::NotDown,
        TileType::NotDown => TileType::NotUp,
        TileType::Default
        | TileType::Wall
        | TileType::Block
        | TileType::End
        | TileType::Start
        | TileType::Hole
        | TileType::Left
        | TileType::Right
        | TileType::NotLeft
        | TileType::NotRight
        | TileType::LeftRight
        | TileType::UpDown => tile_type,
    }
}

fn is_wall(tile: &Tile) -> bool {
    *tile == Tile::new(TileType::Wall)
}

impl LevelGrid {
    /// Strips outer rows and columns made entirely of walls until no edge is all wall.
    ///
    /// The grid never shrinks below one row or one column, so an all-wall level ends up as a
    /// single wall tile.
    pub fn trim(&self) -> LevelGrid {
        let mut grid = self.clone();
        loop {
            let mut trimmed = false;
            let rows = grid.rows_mut();

            if rows.len() > 1 && rows[0].iter().all(is_wall) {
                rows.remove(0);
                trimmed = true;
            }
            if rows.len() > 1 && rows[rows.len() - 1].iter().all(is_wall) {
                rows.pop();
                trimmed = true;
            }
            if rows[0].len() > 1 && rows.iter().all(|row| is_wall(&row[0])) {
                rows.iter_mut().for_each(|row| {
                    row.remove(0);
                });
                trimmed = true;
            }
            if rows[0].len() > 1 && rows.iter().all(|row| row.last().is_some_and(is_wall)) {
                rows.iter_mut().for_each(|row| {
                    row.pop();
                });
                trimmed = true;
            }

            if !trimmed {
                return grid;
            }
        }
    }

    pub fn rotate_ccw(&self) -> LevelGrid {
        let width = self.width();
        let height = self.height();
        let rows = (0..width)
            .map(|r| {
                (0..height)
                    .map(|k| self.rows()[k][width - 1 - r].map_type(rotate_tile))
                    .collect()
            })
            .collect();
        LevelGrid::from_rows(rows)
    }

    pub fn rotate_cw(&self) -> LevelGrid {
        self.rotate_ccw().rotate_ccw().rotate_ccw()
    }

    /// Top to bottom mirror.
    pub fn flip_y(&self) -> LevelGrid {
        let rows = self
            .rows()
            .iter()
            .rev()
            .map(|row| row.iter().map(|tile| tile.map_type(flip_tile)).collect())
            .collect();
        LevelGrid::from_rows(rows)
    }

    /// Left to right mirror, derived from the vertical mirror and two rotations.
    pub fn flip_x(&self) -> LevelGrid {
        self.rotate_cw().flip_y().rotate_ccw()
    }

    /// The eight orientations of the trimmed level, in order: identity, 90, 180, 270, flip,
    /// flip+90, flip+180, flip+270.
    pub fn symmetries(&self) -> Vec<LevelGrid> {
        let mut current = self.trim();
        let mut symmetries = Vec::with_capacity(8);
        symmetries.push(current.clone());
        for _ in 0..3 {
            current = current.rotate_ccw();
            symmetries.push(current.clone());
        }

        current = current.flip_y();
        symmetries.push(current.clone());
        for _ in 0..3 {
            current = current.rotate_ccw();
            symmetries.push(current.clone());
        }
        symmetries
    }
}

fn map_level(level: &str, transform: impl Fn(&LevelGrid) -> LevelGrid) -> Result<String, LevelError> {
    let grid = LevelGrid::parse(level)?;
    Ok(transform(&grid).to_level_text())
}

pub fn trim(level: &str) -> Result<String, LevelError> {
    map_level(level, LevelGrid::trim)
}

pub fn rotate_ccw(level: &str) -> Result<String, LevelError> {
    map_level(level, LevelGrid::rotate_ccw)
}

pub fn rotate_cw(level: &str) -> Result<String, LevelError> {
    map_level(level, LevelGrid::rotate_cw)
}

pub fn flip_y(level: &str) -> Result<String, LevelError> {
    map_level(level, LevelGrid::flip_y)
}

pub fn flip_x(level: &str) -> Result<String, LevelError> {
    map_level(level, LevelGrid::flip_x)
}

pub fn get_all_level_symmetries(level: &str) -> Result<Vec<String>, LevelError> {
    let grid = LevelGrid::parse(level)?;
    Ok(grid.symmetries().iter().map(LevelGrid::to_level_text).collect())
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn rotate_tile_cycles_have_order_four() {
        for &tile_type in TileType::all() {
            let rotated = (0..4).fold(tile_type, |t, _| rotate_tile(t));
            assert_eq!(rotated, tile_type);
            assert_eq!(flip_tile(flip_tile(tile_type)), tile_type);
        }
    }

    #[test]
    fn rotate_tile_preserves_movement_shape() {
        use crate::core::Direction::{self, *};
        // a quarter turn counter-clockwise carries left onto down, down onto right and so on
        let turned = |d: Direction| match d {
            Left => Down,
            Down => Right,
            Right => Up,
            Up => Left,
        };
        for &tile_type in TileType::all() {
            for &dir in Direction::all() {
                assert_eq!(
                    tile_type.can_move_in_direction(dir),
                    rotate_tile(tile_type).can_move_in_direction(turned(dir)),
                    "{:?} {:?}", tile_type, dir
                );
            }
        }
    }

    #[test]
    fn flip_tile_preserves_movement_shape() {
        for &tile_type in TileType::all() {
            for &dir in crate::core::Direction::all() {
                let mirrored = match dir {
                    crate::core::Direction::Up | crate::core::Direction::Down => dir.opposite(),
                    _ => dir,
                };
                assert_eq!(
                    tile_type.can_move_in_direction(dir),
                    flip_tile(tile_type).can_move_in_direction(mirrored),
                    "{:?} {:?}", tile_type, dir
                );
            }
        }
    }
}
