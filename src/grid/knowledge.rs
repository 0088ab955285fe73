//! Persistent partial map of the arena
//!
//! The bot only ever sees scan windows; everything else stays `Unknown`.
//! Knowledge accumulates for the whole match and is never reset.

use serde::{Deserialize, Serialize};

use crate::core::types::{CellState, Coord, GRID_HEIGHT, GRID_WIDTH};

/// Fixed-size board of cell beliefs, row-major
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KnowledgeGrid {
    cells: Vec<CellState>,
}

impl Default for KnowledgeGrid {
    fn default() -> Self {
        Self::new()
    }
}

impl KnowledgeGrid {
    pub fn new() -> Self {
        Self {
            cells: vec![CellState::Unknown; (GRID_WIDTH * GRID_HEIGHT) as usize],
        }
    }

    fn index(coord: Coord) -> usize {
        (coord.y * GRID_WIDTH + coord.x) as usize
    }

    /// Belief about a cell; `Unknown` for off-board coordinates
    pub fn get(&self, coord: Coord) -> CellState {
        if coord.in_bounds() {
            self.cells[Self::index(coord)]
        } else {
            CellState::Unknown
        }
    }

    /// Record a belief; off-board writes are silently dropped so callers
    /// can iterate scan windows that overhang the board edge
    pub fn set(&mut self, coord: Coord, state: CellState) {
        if coord.in_bounds() {
            self.cells[Self::index(coord)] = state;
        }
    }

    /// True if the cell is believed safe to enter
    pub fn is_traversable(&self, coord: Coord) -> bool {
        self.get(coord).is_traversable()
    }

    /// Count of cells observed at least once
    pub fn known_count(&self) -> usize {
        self.cells
            .iter()
            .filter(|c| **c != CellState::Unknown)
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_unknown() {
        let grid = KnowledgeGrid::new();
        assert_eq!(grid.get(Coord::new(0, 0)), CellState::Unknown);
        assert_eq!(grid.get(Coord::new(99, 99)), CellState::Unknown);
        assert_eq!(grid.known_count(), 0);
    }

    #[test]
    fn test_set_and_get() {
        let mut grid = KnowledgeGrid::new();
        grid.set(Coord::new(10, 20), CellState::Wall);
        assert_eq!(grid.get(Coord::new(10, 20)), CellState::Wall);
        assert_eq!(grid.get(Coord::new(20, 10)), CellState::Unknown);
        assert_eq!(grid.known_count(), 1);
    }

    #[test]
    fn test_out_of_bounds_reads_unknown() {
        let grid = KnowledgeGrid::new();
        assert_eq!(grid.get(Coord::new(-1, 50)), CellState::Unknown);
        assert_eq!(grid.get(Coord::new(50, 100)), CellState::Unknown);
    }

    #[test]
    fn test_out_of_bounds_writes_ignored() {
        let mut grid = KnowledgeGrid::new();
        grid.set(Coord::new(-1, 0), CellState::Wall);
        grid.set(Coord::new(0, 100), CellState::Wall);
        assert_eq!(grid.known_count(), 0);
    }

    #[test]
    fn test_traversability_query() {
        let mut grid = KnowledgeGrid::new();
        grid.set(Coord::new(5, 5), CellState::Empty);
        grid.set(Coord::new(5, 6), CellState::EnergySource);
        grid.set(Coord::new(5, 7), CellState::Hostile);
        assert!(grid.is_traversable(Coord::new(5, 5)));
        assert!(grid.is_traversable(Coord::new(5, 6)));
        assert!(!grid.is_traversable(Coord::new(5, 7)));
        // unseen cells block movement
        assert!(!grid.is_traversable(Coord::new(5, 8)));
    }
}
