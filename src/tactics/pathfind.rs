//! Shortest path to the nearest known energy source
//!
//! Breadth-first search over the knowledge grid, restricted to the bounding
//! box of the most recent scan window. Edges are unit cost, so the first
//! energy cell dequeued is a nearest one; ties break by the fixed neighbor
//! expansion order.

use std::collections::VecDeque;

use ahash::{AHashMap, AHashSet};

use crate::core::types::{CellState, Coord, Direction, GRID_HEIGHT, GRID_WIDTH};
use crate::grid::knowledge::KnowledgeGrid;

/// Neighbor expansion order: up, left, down, right
const EXPANSION_ORDER: [Direction; 4] = [
    Direction::North,
    Direction::West,
    Direction::South,
    Direction::East,
];

/// BFS from `start` to the nearest believed `EnergySource` within
/// `scan_radius` cells of `start` (the last scan window, clamped to the
/// board). Returns the full path start-to-goal inclusive, or `None` when no
/// known energy is reachable — not an error, the caller falls back to
/// exploration.
pub fn find_path_to_energy(
    grid: &KnowledgeGrid,
    start: Coord,
    scan_radius: i32,
) -> Option<Vec<Coord>> {
    let min_x = (start.x - scan_radius).max(0);
    let max_x = (start.x + scan_radius).min(GRID_WIDTH - 1);
    let min_y = (start.y - scan_radius).max(0);
    let max_y = (start.y + scan_radius).min(GRID_HEIGHT - 1);

    let mut queue: VecDeque<Coord> = VecDeque::new();
    let mut visited: AHashSet<Coord> = AHashSet::new();
    let mut came_from: AHashMap<Coord, Coord> = AHashMap::new();

    queue.push_back(start);
    visited.insert(start);

    while let Some(current) = queue.pop_front() {
        if grid.get(current) == CellState::EnergySource {
            // Reconstruct path back to start
            let mut path = vec![current];
            let mut cursor = current;
            while let Some(&prev) = came_from.get(&cursor) {
                path.push(prev);
                cursor = prev;
            }
            path.reverse();
            return Some(path);
        }

        for dir in EXPANSION_ORDER {
            let next = current.step(dir);
            if next.x < min_x || next.x > max_x || next.y < min_y || next.y > max_y {
                continue;
            }
            if !grid.get(next).is_traversable() {
                continue;
            }
            if visited.insert(next) {
                came_from.insert(next, current);
                queue.push_back(next);
            }
        }
    }

    None
}
