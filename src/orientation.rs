use crate::core::{ID_PREFIX_LEN, ORIENTATION_COUNT};
use crate::level::{LevelError, LevelGrid};

/// Value of the longest run of `radix` digits at the start of the identifier's prefix.
/// Letters are case-insensitive. An identifier with no leading digit is worth 0.
fn parse_prefix(id: &str, radix: u32) -> u64 {
    id.chars()
        .take(ID_PREFIX_LEN)
        .map_while(|c| c.to_digit(radix))
        .fold(0, |acc, digit| acc * radix as u64 + digit as u64)
}

/// Deterministically picks a value in `0..modulus` from a base-36 match id and a base-16
/// level id, so independent processes agree on an orientation without storing it.
///
/// A `modulus` of zero falls back to [`ORIENTATION_COUNT`].
pub fn choose_orientation(match_id: &str, level_id: &str, modulus: u32) -> u32 {
    let modulus = if modulus == 0 { ORIENTATION_COUNT } else { modulus };
    let sum = parse_prefix(match_id, 36) + parse_prefix(level_id, 16);
    (sum % modulus as u64) as u32
}

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Orientation {
    Identity,
    Rotate90,
    Rotate180,
    Rotate270,
    Flip,
    FlipRotate90,
    FlipRotate180,
    FlipRotate270,
}

const ALL_ORIENTATIONS: [Orientation; ORIENTATION_COUNT as usize] = [
    Orientation::Identity,
    Orientation::Rotate90,
    Orientation::Rotate180,
    Orientation::Rotate270,
    Orientation::Flip,
    Orientation::FlipRotate90,
    Orientation::FlipRotate180,
    Orientation::FlipRotate270,
];

impl Orientation {
    pub fn all() -> &'static [Orientation] {
        &ALL_ORIENTATIONS
    }

    pub fn from_index(index: u32) -> Option<Orientation> {
        ALL_ORIENTATIONS.get(index as usize).copied()
    }

    pub fn index(self) -> u32 {
        self as u32
    }

    /// Orientation shown for a level during a match.
    pub fn choose(match_id: &str, level_id: &str) -> Orientation {
        let index = choose_orientation(match_id, level_id, ORIENTATION_COUNT);
        ALL_ORIENTATIONS[index as usize]
    }

    /// Counter-clockwise quarter turns to apply, and whether they start from the flipped base.
    fn steps(self) -> (usize, bool) {
        match self {
            Orientation::Identity => (0, false),
            Orientation::Rotate90 => (1, false),
            Orientation::Rotate180 => (2, false),
            Orientation::Rotate270 => (3, false),
            Orientation::Flip => (0, true),
            Orientation::FlipRotate90 => (1, true),
            Orientation::FlipRotate180 => (2, true),
            Orientation::FlipRotate270 => (3, true),
        }
    }

    /// Applies this orientation with the same sequence of turns and flips used to build
    /// [`LevelGrid::symmetries`], minus the trimming.
    pub fn apply(self, grid: &LevelGrid) -> LevelGrid {
        let (turns, flipped) = self.steps();
        let mut current = if flipped {
            grid.rotate_ccw().rotate_ccw().rotate_ccw().flip_y()
        } else {
            grid.clone()
        };
        for _ in 0..turns {
            current = current.rotate_ccw();
        }
        current
    }

    pub fn apply_to_level(self, level: &str) -> Result<String, LevelError> {
        Ok(self.apply(&LevelGrid::parse(level)?).to_level_text())
    }
}
