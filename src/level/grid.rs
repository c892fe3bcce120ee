use std::fmt;
use crate::core::{Tile, TileType};
use crate::level::LevelError;

/// A level parsed into rows of tile symbols. All rows share the same width.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct LevelGrid {
    rows: Vec<Vec<Tile>>,
}

fn split_rows(level: &str) -> impl Iterator<Item = &str> {
    level
        .trim_end()
        .split('\n')
        .map(|row| row.strip_suffix('\r').unwrap_or(row))
}

impl LevelGrid {
    pub fn parse(level: &str) -> Result<LevelGrid, LevelError> {
        if level.trim_end().is_empty() {
            return Err(LevelError::Empty);
        }

        let mut rows: Vec<Vec<Tile>> = Vec::new();
        for (row_index, line) in split_rows(level).enumerate() {
            let mut row = Vec::with_capacity(line.len());
            for (column, ch) in line.chars().enumerate() {
                let Some(tile) = Tile::from_char(ch) else {
                    return Err(LevelError::InvalidCharacter { ch, row: row_index, column });
                };
                row.push(tile);
            }

            if let Some(first) = rows.first() {
                if first.len() != row.len() {
                    return Err(LevelError::RaggedRow {
                        row: row_index,
                        expected: first.len(),
                        found: row.len(),
                    });
                }
            }
            rows.push(row);
        }

        Ok(LevelGrid { rows })
    }

    /// Callers must pass non-empty rows of equal width.
    pub(crate) fn from_rows(rows: Vec<Vec<Tile>>) -> LevelGrid {
        debug_assert!(rows.iter().all(|row| row.len() == rows[0].len()), "rows must be uniform width");
        LevelGrid { rows }
    }

    pub fn height(&self) -> usize {
        self.rows.len()
    }

    pub fn width(&self) -> usize {
        self.rows.first().map_or(0, |row| row.len())
    }

    pub fn rows(&self) -> &[Vec<Tile>] {
        &self.rows
    }

    pub(crate) fn rows_mut(&mut self) -> &mut Vec<Vec<Tile>> {
        &mut self.rows
    }

    pub fn get(&self, row: usize, column: usize) -> Option<Tile> {
        self.rows.get(row).and_then(|r| r.get(column)).copied()
    }

    pub fn count(&self, tile_type: TileType) -> usize {
        self.rows
            .iter()
            .flatten()
            .filter(|tile| tile.tile_type() == tile_type && !tile.is_on_exit())
            .count()
    }

    pub fn to_level_text(&self) -> String {
        let text = self
            .rows
            .iter()
            .map(|row| row.iter().map(|tile| tile.to_char()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n");
        text.trim_end().to_string()
    }
}

impl fmt::Display for LevelGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_level_text())
    }
}

/// Number of rows in the level text.
pub fn height(level: &str) -> usize {
    if level.trim_end().is_empty() {
        return 0;
    }
    split_rows(level).count()
}

/// Length of the first row of the level text. Ragged levels report the first row only.
pub fn width(level: &str) -> usize {
    split_rows(level).next().map_or(0, |row| row.chars().count())
}

/// Index of the first row whose length differs from the first row.
pub fn find_ragged_row(level: &str) -> Option<usize> {
    let expected = width(level);
    split_rows(level).position(|row| row.chars().count() != expected)
}
