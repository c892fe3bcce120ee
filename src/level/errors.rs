#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum LevelError {
    #[error("level is empty")]
    Empty,
    #[error("invalid character {ch:?} at row {row}, column {column}")]
    InvalidCharacter { ch: char, row: usize, column: usize },
    #[error("row {row} has {found} tiles, expected {expected}")]
    RaggedRow { row: usize, expected: usize, found: usize },
    #[error("level has no start")]
    MissingStart,
    #[error("level has {count} starts, expected exactly one")]
    MultipleStarts { count: usize },
    #[error("level has no exit")]
    MissingEnd,
}
