use std::ops::{Add, AddAssign, Sub, SubAssign};
use serde::{Deserialize, Serialize};

/// A cell coordinate on the board. `x` is the column, `y` is the row, growing downwards.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default, Serialize, Deserialize)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub const fn new(x: i32, y: i32) -> Position {
        Position { x, y }
    }
}

impl Add for Position {
    type Output = Position;

    fn add(self, rhs: Position) -> Position {
        Position { x: self.x + rhs.x, y: self.y + rhs.y }
    }
}

impl AddAssign for Position {
    fn add_assign(&mut self, rhs: Position) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl Sub for Position {
    type Output = Position;

    fn sub(self, rhs: Position) -> Position {
        Position { x: self.x - rhs.x, y: self.y - rhs.y }
    }
}

impl SubAssign for Position {
    fn sub_assign(&mut self, rhs: Position) {
        self.x -= rhs.x;
        self.y -= rhs.y;
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum Direction {
    Left,
    Up,
    Right,
    Down,
}

const ALL_DIRECTIONS: &[Direction] = &[
    Direction::Left,
    Direction::Up,
    Direction::Right,
    Direction::Down,
];

impl Direction {
    pub fn all() -> &'static [Direction] {
        ALL_DIRECTIONS
    }

    /// Unit step for this direction. Up is towards row 0.
    pub fn to_position(self) -> Position {
        match self {
            Direction::Left => Position { x: -1, y: 0 },
            Direction::Up => Position { x: 0, y: -1 },
            Direction::Right => Position { x: 1, y: 0 },
            Direction::Down => Position { x: 0, y: 1 },
        }
    }

    pub fn opposite(self) -> Direction {
        match self {
            Direction::Left => Direction::Right,
            Direction::Up => Direction::Down,
            Direction::Right => Direction::Left,
            Direction::Down => Direction::Up,
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn opposite_directions_cancel_out() {
        for &dir in Direction::all() {
            assert_eq!(dir.to_position() + dir.opposite().to_position(), Position::default());
            assert_eq!(dir.opposite().opposite(), dir);
        }
    }

    #[test]
    fn position_arithmetic() {
        let mut pos = Position::new(3, 4);
        pos += Direction::Up.to_position();
        assert_eq!(pos, Position::new(3, 3));
        pos -= Direction::Left.to_position();
        assert_eq!(pos, Position::new(4, 3));
        assert_eq!(pos - Position::new(4, 3), Position::default());
    }
}
