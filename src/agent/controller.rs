//! Host-facing bot controller
//!
//! The arena host drives each turn through this object in a fixed order:
//! status report, scan radius request, area report, action request. The
//! controller is strictly synchronous and owns all persistent knowledge.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::core::config::BotConfig;
use crate::core::error::Result;
use crate::core::types::Action;
use crate::grid::knowledge::KnowledgeGrid;
use crate::grid::perception::{apply_scan, ScanReport};
use crate::tactics::policy;
use crate::agent::state::AgentState;

/// Long-lived bot controller for one match
#[derive(Debug)]
pub struct Warden {
    pub grid: KnowledgeGrid,
    pub state: AgentState,
    config: BotConfig,
    rng: ChaCha8Rng,
}

impl Warden {
    /// Controller with an injected random source for reproducible runs
    pub fn new(config: BotConfig, rng: ChaCha8Rng) -> Self {
        Self {
            grid: KnowledgeGrid::new(),
            state: AgentState::default(),
            config,
            rng,
        }
    }

    /// Default-config controller seeded for reproducibility
    pub fn seeded(seed: u64) -> Self {
        Self::new(BotConfig::default(), ChaCha8Rng::seed_from_u64(seed))
    }

    /// Match-start reset of the volatile agent state
    ///
    /// Map knowledge and position persist across the call.
    pub fn init(&mut self) {
        self.state.reset();
        tracing::info!("controller initialized");
    }

    /// Per-turn status from the host
    ///
    /// A reported shield that differs from the recorded one means the bot
    /// took a hit since the last turn.
    pub fn status_report(&mut self, turn: u16, energy: u16, shield: u16, cloak: u16) {
        self.state.turn = turn;
        self.state.energy = energy;
        self.state.cloak_level = cloak;
        if self.state.shield_level != shield {
            self.state.shield_level = shield;
            self.state.was_hit = true;
            tracing::debug!(turn, shield, "shield changed, hit registered");
        }
    }

    /// Radius for the next scan: one wide bootstrap scan, then narrow
    /// refresh scans
    pub fn scan_radius(&mut self) -> u16 {
        if self.state.first_turn {
            self.state.first_turn = false;
            self.config.first_scan_radius
        } else {
            self.config.scan_radius
        }
    }

    /// Merge one scan window into the knowledge grid
    pub fn area_report(&mut self, report: &ScanReport) -> Result<()> {
        apply_scan(&mut self.grid, self.state.position, report);
        self.state.last_scan_side = report.side();
        Ok(())
    }

    /// Raw-bytes variant of [`Self::area_report`] for the host wire format
    pub fn area_report_codes(&mut self, side: u16, codes: &[u8]) -> Result<()> {
        let report = ScanReport::from_codes(side, codes)?;
        self.area_report(&report)
    }

    /// Emit exactly one action for this turn
    pub fn compute_action(&mut self) -> Action {
        let action = policy::decide(&mut self.grid, &mut self.state, &self.config, &mut self.rng);
        tracing::debug!(
            turn = self.state.turn,
            energy = self.state.energy,
            ?action,
            "turn decided"
        );
        action
    }
}
