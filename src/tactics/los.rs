//! Direct line-of-sight target detection
//!
//! Shots travel along cardinal rays, so only the four rays through the
//! bot's own row and column matter. Directions are checked in a fixed
//! priority order and the first ray with any visible hostile wins, even if
//! a later ray holds a closer one.

use crate::core::types::{CellState, Coord, Direction};
use crate::grid::knowledge::KnowledgeGrid;

/// Direction priority for target scanning
const SCAN_ORDER: [Direction; 4] = [
    Direction::North,
    Direction::South,
    Direction::West,
    Direction::East,
];

/// Nearest visible hostile, if any, with the ray direction toward it
///
/// A ray stops at the first believed wall or at the board edge. Unknown
/// cells do not block the ray: a hostile spotted beyond unexplored ground
/// is still a target.
pub fn find_target(grid: &KnowledgeGrid, from: Coord) -> Option<(Direction, Coord)> {
    for dir in SCAN_ORDER {
        let mut cell = from.step(dir);
        while cell.in_bounds() {
            match grid.get(cell) {
                CellState::Wall => break,
                CellState::Hostile => {
                    tracing::debug!(x = cell.x, y = cell.y, ?dir, "hostile in line of sight");
                    return Some((dir, cell));
                }
                _ => cell = cell.step(dir),
            }
        }
    }
    None
}
