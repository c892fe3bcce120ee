use serde::{Deserialize, Serialize};
use crate::core::Direction;

/// The closed vocabulary of board cell kinds.
///
/// Every table in the crate (movement capability, character codes, rotation, flipping) matches
/// exhaustively on this enum, so a new kind cannot be added without updating all of them.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum TileType {
    Default,
    Wall,
    Block,
    End,
    Start,
    Hole,
    Left,
    Up,
    Right,
    Down,
    UpLeft,
    UpRight,
    DownRight,
    DownLeft,
    NotLeft,
    NotUp,
    NotRight,
    NotDown,
    LeftRight,
    UpDown,
}

const ALL_TILE_TYPES: &[TileType] = &[
    TileType::Default,
    TileType::Wall,
    TileType::Block,
    TileType::End,
    TileType::Start,
    TileType::Hole,
    TileType::Left,
    TileType::Up,
    TileType::Right,
    TileType::Down,
    TileType::UpLeft,
    TileType::UpRight,
    TileType::DownRight,
    TileType::DownLeft,
    TileType::NotLeft,
    TileType::NotUp,
    TileType::NotRight,
    TileType::NotDown,
    TileType::LeftRight,
    TileType::UpDown,
];

impl TileType {
    pub fn all() -> &'static [TileType] {
        ALL_TILE_TYPES
    }

    pub fn can_move_left(self) -> bool {
        matches!(
            self,
            TileType::Block
                | TileType::Left
                | TileType::UpLeft
                | TileType::DownLeft
                | TileType::NotUp
                | TileType::NotRight
                | TileType::NotDown
                | TileType::LeftRight
        )
    }

    pub fn can_move_up(self) -> bool {
        matches!(
            self,
            TileType::Block
                | TileType::Up
                | TileType::UpLeft
                | TileType::UpRight
                | TileType::NotLeft
                | TileType::NotRight
                | TileType::NotDown
                | TileType::UpDown
        )
    }

    pub fn can_move_right(self) -> bool {
        matches!(
            self,
            TileType::Block
                | TileType::Right
                | TileType::UpRight
                | TileType::DownRight
                | TileType::NotLeft
                | TileType::NotUp
                | TileType::NotDown
                | TileType::LeftRight
        )
    }

    pub fn can_move_down(self) -> bool {
        matches!(
            self,
            TileType::Block
                | TileType::Down
                | TileType::DownRight
                | TileType::DownLeft
                | TileType::NotLeft
                | TileType::NotUp
                | TileType::NotRight
                | TileType::UpDown
        )
    }

    pub fn can_move_in_direction(self, direction: Direction) -> bool {
        match direction {
            Direction::Left => self.can_move_left(),
            Direction::Up => self.can_move_up(),
            Direction::Right => self.can_move_right(),
            Direction::Down => self.can_move_down(),
        }
    }

    /// True for every kind a block can carry.
    pub fn can_move(self) -> bool {
        self == TileType::Block
            || self.can_move_left()
            || self.can_move_up()
            || self.can_move_right()
            || self.can_move_down()
    }

    /// Rendering height hint for callers, the engine never reads it.
    pub fn is_raised(self) -> bool {
        matches!(self, TileType::Wall | TileType::Start) || self.can_move()
    }

    pub fn to_char(self) -> char {
        match self {
            TileType::Default => '0',
            TileType::Wall => '1',
            TileType::Block => '2',
            TileType::End => '3',
            TileType::Start => '4',
            TileType::Hole => '5',
            TileType::Left => '6',
            TileType::Up => '7',
            TileType::Right => '8',
            TileType::Down => '9',
            TileType::UpLeft => 'A',
            TileType::UpRight => 'B',
            TileType::DownRight => 'C',
            TileType::DownLeft => 'D',
            TileType::NotLeft => 'E',
            TileType::NotUp => 'F',
            TileType::NotRight => 'G',
            TileType::NotDown => 'H',
            TileType::LeftRight => 'I',
            TileType::UpDown => 'J',
        }
    }

    pub fn from_char(c: char) -> Option<TileType> {
        Some(match c {
            '0' => TileType::Default,
            '1' => TileType::Wall,
            '2' => TileType::Block,
            '3' => TileType::End,
            '4' => TileType::Start,
            '5' => TileType::Hole,
            '6' => TileType::Left,
            '7' => TileType::Up,
            '8' => TileType::Right,
            '9' => TileType::Down,
            'A' => TileType::UpLeft,
            'B' => TileType::UpRight,
            'C' => TileType::DownRight,
            'D' => TileType::DownLeft,
            'E' => TileType::NotLeft,
            'F' => TileType::NotUp,
            'G' => TileType::NotRight,
            'H' => TileType::NotDown,
            'I' => TileType::LeftRight,
            'J' => TileType::UpDown,
            _ => return None,
        })
    }

    /// Code of the exit-covered sibling, for movable kinds only.
    fn on_exit_char(self) -> Option<char> {
        Some(match self {
            TileType::Block => 'K',
            TileType::Left => 'L',
            TileType::Up => 'M',
            TileType::Right => 'N',
            TileType::Down => 'O',
            TileType::UpLeft => 'P',
            TileType::UpRight => 'Q',
            TileType::DownRight => 'R',
            TileType::DownLeft => 'S',
            TileType::NotLeft => 'T',
            TileType::NotUp => 'U',
            TileType::NotRight => 'V',
            TileType::NotDown => 'W',
            TileType::LeftRight => 'X',
            TileType::UpDown => 'Y',
            TileType::Default
            | TileType::Wall
            | TileType::End
            | TileType::Start
            | TileType::Hole => return None,
        })
    }

    fn from_on_exit_char(c: char) -> Option<TileType> {
        Some(match c {
            'K' => TileType::Block,
            'L' => TileType::Left,
            'M' => TileType::Up,
            'N' => TileType::Right,
            'O' => TileType::Down,
            'P' => TileType::UpLeft,
            'Q' => TileType::UpRight,
            'R' => TileType::DownRight,
            'S' => TileType::DownLeft,
            'T' => TileType::NotLeft,
            'U' => TileType::NotUp,
            'V' => TileType::NotRight,
            'W' => TileType::NotDown,
            'X' => TileType::LeftRight,
            'Y' => TileType::UpDown,
            _ => return None,
        })
    }
}

/// One serialized level symbol: a tile kind, plus whether a movable block is resting on an exit.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct Tile {
    tile_type: TileType,
    on_exit: bool,
}

impl Tile {
    pub fn new(tile_type: TileType) -> Tile {
        Tile { tile_type, on_exit: false }
    }

    /// A movable block sitting on an exit square. `None` for kinds that cannot move.
    pub fn on_exit(tile_type: TileType) -> Option<Tile> {
        if !tile_type.can_move() {
            return None;
        }
        Some(Tile { tile_type, on_exit: true })
    }

    pub fn tile_type(&self) -> TileType {
        self.tile_type
    }

    pub fn is_on_exit(&self) -> bool {
        self.on_exit
    }

    /// Applies a remap to the base kind and keeps the exit flag.
    pub fn map_type(self, remap: impl Fn(TileType) -> TileType) -> Tile {
        Tile { tile_type: remap(self.tile_type), on_exit: self.on_exit }
    }

    pub fn to_char(self) -> char {
        if self.on_exit {
            if let Some(c) = self.tile_type.on_exit_char() {
                return c;
            }
        }
        self.tile_type.to_char()
    }

    pub fn from_char(c: char) -> Option<Tile> {
        if let Some(tile_type) = TileType::from_char(c) {
            return Some(Tile::new(tile_type));
        }
        TileType::from_on_exit_char(c).map(|tile_type| Tile { tile_type, on_exit: true })
    }
}

/// First character of `level` outside the tile vocabulary. Row breaks are not tile codes and
/// are skipped.
pub fn find_invalid_character(level: &str) -> Option<char> {
    level
        .chars()
        .filter(|&c| c != '\n' && c != '\r')
        .find(|&c| Tile::from_char(c).is_none())
}
