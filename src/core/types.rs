//! Core type definitions used throughout the codebase

use serde::{Deserialize, Serialize};

/// Board width in cells
pub const GRID_WIDTH: i32 = 100;

/// Board height in cells
pub const GRID_HEIGHT: i32 = 100;

/// A cell coordinate on the arena board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Coord {
    pub x: i32,
    pub y: i32,
}

impl Coord {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Center of the board; the bot starts here
    pub fn board_center() -> Self {
        Self::new(GRID_WIDTH / 2, GRID_HEIGHT / 2)
    }

    /// True if the coordinate lies on the board
    pub fn in_bounds(&self) -> bool {
        self.x >= 0 && self.x < GRID_WIDTH && self.y >= 0 && self.y < GRID_HEIGHT
    }

    /// Neighbor one step away in the given direction (may be off-board)
    pub fn step(&self, dir: Direction) -> Coord {
        let (dx, dy) = dir.delta();
        Coord::new(self.x + dx, self.y + dy)
    }
}

/// Cardinal movement/shooting direction
///
/// North decreases y, South increases y (row-major board, origin top-left).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    North,
    West,
    South,
    East,
}

impl Direction {
    /// Unit displacement for one step in this direction
    pub fn delta(&self) -> (i32, i32) {
        match self {
            Self::North => (0, -1),
            Self::West => (-1, 0),
            Self::South => (0, 1),
            Self::East => (1, 0),
        }
    }

    /// The direction pointing the opposite way
    pub fn opposite(&self) -> Direction {
        match self {
            Self::North => Self::South,
            Self::West => Self::East,
            Self::South => Self::North,
            Self::East => Self::West,
        }
    }

    /// Direction matching a unit coordinate delta, if any
    pub fn from_delta(dx: i32, dy: i32) -> Option<Direction> {
        match (dx, dy) {
            (0, -1) => Some(Self::North),
            (-1, 0) => Some(Self::West),
            (0, 1) => Some(Self::South),
            (1, 0) => Some(Self::East),
            _ => None,
        }
    }
}

/// What the bot believes about a single cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CellState {
    /// Never observed
    Unknown,
    Wall,
    Hostile,
    Empty,
    EnergySource,
}

impl Default for CellState {
    fn default() -> Self {
        Self::Unknown
    }
}

impl CellState {
    /// True for states the bot can move or path through
    pub fn is_traversable(&self) -> bool {
        matches!(self, Self::Empty | Self::EnergySource)
    }

    /// Decode a host wire code (1=Wall, 2=Hostile, 3=Empty, 4=Energy)
    ///
    /// Any other code maps to `Unknown`, which the perception overlay
    /// treats as "no information" rather than overwriting a belief.
    pub fn from_code(code: u8) -> CellState {
        match code {
            1 => Self::Wall,
            2 => Self::Hostile,
            3 => Self::Empty,
            4 => Self::EnergySource,
            _ => Self::Unknown,
        }
    }
}

/// The one action the controller emits each turn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Action {
    Shoot(Direction),
    SetShield(u16),
    SetCloak(u16),
    Move(Direction),
    /// No safe neighbor exists; hold position
    Stay,
}
