mod errors;
mod grid;
mod transform;
mod validation;

pub use errors::LevelError;
pub use grid::{find_ragged_row, height, width, LevelGrid};
pub use transform::{
    flip_tile, flip_x, flip_y, get_all_level_symmetries, rotate_ccw, rotate_cw, rotate_tile, trim,
};
pub use validation::validate_level;
