//! Scan report ingestion
//!
//! Each turn the host delivers one square scan window centered on the bot.
//! The overlay merges it into the knowledge grid; fresh data always wins
//! over older beliefs, there is no staleness tracking.

use serde::{Deserialize, Serialize};

use crate::core::error::{Result, WardenError};
use crate::core::types::{CellState, Coord};
use crate::grid::knowledge::KnowledgeGrid;

/// One scan window as delivered by the host
///
/// `side` is the window's side length (odd; radius r gives side 2r+1).
/// `cells` is dense row-major, length `side * side`, and logically complete
/// even where the window overhangs the board edge.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanReport {
    side: u16,
    cells: Vec<CellState>,
}

impl ScanReport {
    /// Build a report from typed cells, validating the window geometry
    pub fn new(side: u16, cells: Vec<CellState>) -> Result<Self> {
        if side == 0 || side % 2 == 0 {
            return Err(WardenError::InvalidScanSide(side));
        }
        let expected = side as usize * side as usize;
        if cells.len() != expected {
            return Err(WardenError::ScanLengthMismatch {
                side,
                expected,
                actual: cells.len(),
            });
        }
        Ok(Self { side, cells })
    }

    /// Build a report from raw host wire codes
    pub fn from_codes(side: u16, codes: &[u8]) -> Result<Self> {
        let cells = codes.iter().map(|c| CellState::from_code(*c)).collect();
        Self::new(side, cells)
    }

    pub fn side(&self) -> u16 {
        self.side
    }

    /// Window radius: cells revealed on each side of the center
    pub fn radius(&self) -> i32 {
        (self.side as i32 - 1) / 2
    }
}

/// Overlay one scan report onto the knowledge grid
///
/// Walks the window in row-major order around `center` (the bot's cell).
/// The dense index advances even over off-board cells; off-board writes are
/// dropped by the grid. The bot's own cell is always recorded `Empty` —
/// self-occupancy must never block pathing. A reported `Unknown` leaves the
/// stored belief untouched.
pub fn apply_scan(grid: &mut KnowledgeGrid, center: Coord, report: &ScanReport) {
    let r = report.radius();
    let mut idx = 0;
    for y in (center.y - r)..=(center.y + r) {
        for x in (center.x - r)..=(center.x + r) {
            let coord = Coord::new(x, y);
            let reported = report.cells[idx];
            idx += 1;
            if coord == center {
                grid.set(coord, CellState::Empty);
            } else if reported != CellState::Unknown {
                grid.set(coord, reported);
            }
        }
    }
    tracing::debug!(
        x = center.x,
        y = center.y,
        side = report.side,
        "merged scan window"
    );
}
