use crate::core::bounds::BoundsOriginRoot;
use crate::core::Position;

/// Row-major storage for a fixed size board.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BoundedGrid<T> {
    bounds: BoundsOriginRoot,
    cells: Vec<T>,
}

impl<T> BoundedGrid<T> {
    /// Builds a grid from rows that are already known to share one width.
    pub fn from_rows(rows: Vec<Vec<T>>) -> Self {
        let height = rows.len() as i32;
        let width = rows.first().map_or(0, |row| row.len()) as i32;
        let cells: Vec<T> = rows.into_iter().flatten().collect();
        debug_assert_eq!(cells.len() as i32, width * height, "rows must be uniform width");
        BoundedGrid {
            bounds: BoundsOriginRoot::new(width, height),
            cells,
        }
    }

    pub fn size(&self) -> BoundsOriginRoot {
        self.bounds
    }

    pub fn get(&self, pos: &Position) -> Option<&T> {
        if !self.bounds.contains(pos) {
            return None;
        }
        Some(&self[pos])
    }

    pub fn get_mut(&mut self, pos: &Position) -> Option<&mut T> {
        if !self.bounds.contains(pos) {
            return None;
        }
        Some(&mut self[pos])
    }

    /// Cells in row-major order, paired with their position.
    pub fn iter(&self) -> impl Iterator<Item = (Position, &T)> {
        let width = self.bounds.extent.x.max(1);
        self.cells.iter().enumerate().map(move |(index, cell)| {
            let index = index as i32;
            (Position { x: index % width, y: index / width }, cell)
        })
    }

    pub fn rows(&self) -> impl Iterator<Item = &[T]> {
        self.cells.chunks(self.bounds.extent.x.max(1) as usize)
    }
}

impl<T> std::ops::Index<&Position> for BoundedGrid<T> {
    type Output = T;

    fn index(&self, index: &Position) -> &Self::Output {
        &self.cells[(index.y * self.bounds.extent.x + index.x) as usize]
    }
}

impl<T> std::ops::IndexMut<&Position> for BoundedGrid<T> {
    fn index_mut(&mut self, index: &Position) -> &mut Self::Output {
        &mut self.cells[(index.y * self.bounds.extent.x + index.x) as usize]
    }
}
