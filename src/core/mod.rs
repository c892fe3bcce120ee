mod bounded_grid;
mod bounds;
mod consts;
mod initialize;
mod model_helpers;
mod models;
mod position;
mod tile_type;
mod update;

pub use bounded_grid::BoundedGrid;
pub use bounds::BoundsOriginRoot;
pub use consts::*;
pub use models::{Block, Cell, GameChange, GameState, Move, MoveRejected};
pub use position::{Direction, Position};
pub use tile_type::{find_invalid_character, Tile, TileType};
