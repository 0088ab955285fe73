pub mod config;
pub mod error;
pub mod types;

pub use config::BotConfig;
pub use error::{Result, WardenError};
pub use types::{Action, CellState, Coord, Direction, GRID_HEIGHT, GRID_WIDTH};
