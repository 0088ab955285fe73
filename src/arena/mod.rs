//! Simulated host arena
//!
//! A self-contained stand-in for the match host, used by the binary and
//! the integration tests. It owns the ground-truth board and applies the
//! controller's actions. Demonstration plumbing only; nothing here leaks
//! into the controller's API.

use rand::Rng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use crate::core::error::Result;
use crate::core::types::{Action, CellState, Coord, Direction, GRID_HEIGHT, GRID_WIDTH};
use crate::grid::perception::ScanReport;

/// Energy granted when the bot steps onto an energy cell
pub const ENERGY_PICKUP: u16 = 250;

/// Energy drained every turn regardless of action
pub const TURN_UPKEEP: u16 = 1;

/// Energy cost of firing one shot
pub const SHOT_COST: u16 = 10;

/// Ground-truth arena state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Arena {
    cells: Vec<CellState>,
    pub bot_pos: Coord,
    pub energy: u16,
    pub shield: u16,
    pub cloak: u16,
    pub turn: u16,
}

impl Arena {
    /// Generate a bordered arena with seeded walls, energy, and hostiles
    pub fn generate(rng: &mut ChaCha8Rng, starting_energy: u16) -> Self {
        let mut cells = vec![CellState::Empty; (GRID_WIDTH * GRID_HEIGHT) as usize];

        for y in 0..GRID_HEIGHT {
            for x in 0..GRID_WIDTH {
                let border = x == 0 || y == 0 || x == GRID_WIDTH - 1 || y == GRID_HEIGHT - 1;
                let state = if border {
                    CellState::Wall
                } else {
                    match rng.gen_range(0..100) {
                        0..=3 => CellState::Wall,
                        4..=6 => CellState::EnergySource,
                        7 => CellState::Hostile,
                        _ => CellState::Empty,
                    }
                };
                cells[(y * GRID_WIDTH + x) as usize] = state;
            }
        }

        // the bot always starts on clear ground
        let start = Coord::board_center();
        cells[(start.y * GRID_WIDTH + start.x) as usize] = CellState::Empty;

        Self {
            cells,
            bot_pos: start,
            energy: starting_energy,
            shield: 0,
            cloak: 0,
            turn: 0,
        }
    }

    pub fn get(&self, coord: Coord) -> CellState {
        if coord.in_bounds() {
            self.cells[(coord.y * GRID_WIDTH + coord.x) as usize]
        } else {
            CellState::Wall
        }
    }

    fn set(&mut self, coord: Coord, state: CellState) {
        if coord.in_bounds() {
            self.cells[(coord.y * GRID_WIDTH + coord.x) as usize] = state;
        }
    }

    /// Dense scan window around the bot; off-board cells read as walls
    pub fn scan(&self, radius: u16) -> Result<ScanReport> {
        let r = radius as i32;
        let side = 2 * radius + 1;
        let mut cells = Vec::with_capacity(side as usize * side as usize);
        for y in (self.bot_pos.y - r)..=(self.bot_pos.y + r) {
            for x in (self.bot_pos.x - r)..=(self.bot_pos.x + r) {
                cells.push(self.get(Coord::new(x, y)));
            }
        }
        ScanReport::new(side, cells)
    }

    /// Apply one controller action and charge the turn upkeep
    ///
    /// Returns false once the bot has run out of energy.
    pub fn apply(&mut self, action: Action) -> bool {
        self.turn += 1;
        match action {
            Action::Move(dir) => self.apply_move(dir),
            Action::Shoot(dir) => self.apply_shot(dir),
            Action::SetShield(level) => {
                let cost = level.saturating_sub(self.shield);
                self.energy = self.energy.saturating_sub(cost);
                self.shield = level;
            }
            Action::SetCloak(level) => {
                let cost = level.saturating_sub(self.cloak);
                self.energy = self.energy.saturating_sub(cost);
                self.cloak = level;
            }
            Action::Stay => {}
        }
        self.energy = self.energy.saturating_sub(TURN_UPKEEP);
        self.energy > 0
    }

    fn apply_move(&mut self, dir: Direction) {
        let target = self.bot_pos.step(dir);
        match self.get(target) {
            CellState::Empty => self.bot_pos = target,
            CellState::EnergySource => {
                self.bot_pos = target;
                self.energy = self.energy.saturating_add(ENERGY_PICKUP);
                self.set(target, CellState::Empty);
            }
            _ => {
                // illegal move; the host drops it
                tracing::warn!(?dir, "move into blocked cell ignored");
            }
        }
    }

    fn apply_shot(&mut self, dir: Direction) {
        self.energy = self.energy.saturating_sub(SHOT_COST);
        let mut cell = self.bot_pos.step(dir);
        while cell.in_bounds() {
            match self.get(cell) {
                CellState::Wall => break,
                CellState::Hostile => {
                    self.set(cell, CellState::Empty);
                    tracing::debug!(x = cell.x, y = cell.y, "hostile destroyed");
                    break;
                }
                _ => cell = cell.step(dir),
            }
        }
    }

    /// Count of hostiles still on the board
    pub fn hostile_count(&self) -> usize {
        self.cells
            .iter()
            .filter(|c| **c == CellState::Hostile)
            .count()
    }
}
