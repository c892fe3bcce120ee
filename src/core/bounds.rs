use crate::core::Position;

/// A bounding box with one corner fixed at 0,0 and assumed to have positive extent
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BoundsOriginRoot {
    pub extent: Position,
}

impl BoundsOriginRoot {
    pub fn new(x: i32, y: i32) -> BoundsOriginRoot {
        BoundsOriginRoot {
            extent: Position { x, y },
        }
    }

    pub fn contains(&self, pos: &Position) -> bool {
        pos.x >= 0 && pos.x < self.extent.x && pos.y >= 0 && pos.y < self.extent.y
    }

    pub fn area(&self) -> i32 {
        self.extent.x * self.extent.y
    }

    pub fn width(&self) -> i32 {
        self.extent.x
    }

    pub fn height(&self) -> i32 {
        self.extent.y
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn contains_only_inside_extent() {
        let bounds = BoundsOriginRoot::new(3, 2);
        assert!(bounds.contains(&Position::new(0, 0)));
        assert!(bounds.contains(&Position::new(2, 1)));
        assert!(!bounds.contains(&Position::new(3, 1)));
        assert!(!bounds.contains(&Position::new(2, 2)));
        assert!(!bounds.contains(&Position::new(-1, 0)));
        assert_eq!(bounds.area(), 6);
    }
}
