//! Mutable per-match bot state
//!
//! All fields the turn logic reads or writes live here explicitly; the
//! controller passes this struct to the policy each turn.

use serde::{Deserialize, Serialize};

use crate::core::types::{Coord, Direction};

/// Everything the bot knows about itself
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AgentState {
    /// Current cell; starts at board center
    pub position: Coord,
    /// Direction of the previous move, cleared when the bot held position
    pub last_move: Option<Direction>,
    /// Shield level as last requested or reported
    pub shield_level: u16,
    /// Cloak level as last requested or reported
    pub cloak_level: u16,
    /// Energy from the latest status report
    pub energy: u16,
    /// Set when a status report shows an unexpected shield change,
    /// cleared when the policy raises the shield
    pub was_hit: bool,
    /// True until the first scan radius request of the match
    pub first_turn: bool,
    /// Turn counter from the latest status report
    pub turn: u16,
    /// Side length of the last applied scan window; bounds the path search
    pub last_scan_side: u16,
}

impl Default for AgentState {
    fn default() -> Self {
        Self {
            position: Coord::board_center(),
            last_move: None,
            shield_level: 0,
            cloak_level: 0,
            energy: 0,
            was_hit: false,
            first_turn: true,
            turn: 0,
            last_scan_side: 1,
        }
    }
}

impl AgentState {
    /// Reset the per-match flags at match start
    ///
    /// Position and accumulated map knowledge persist; only the volatile
    /// status fields go back to their initial values.
    pub fn reset(&mut self) {
        self.first_turn = true;
        self.shield_level = 0;
        self.cloak_level = 0;
        self.was_hit = false;
        self.last_move = None;
    }

    /// Radius the path finder may search, from the last scan window
    pub fn path_search_radius(&self) -> i32 {
        (self.last_scan_side as i32 - 1) / 2
    }
}
