//! Bot tuning constants with documented rationale
//!
//! All magic numbers of the decision policy are collected here with
//! explanations of their purpose and how they interact with each other.

/// Configuration for the decision policy and scanning cadence
///
/// Defaults reproduce the tuned competition behavior. Changing them shifts
/// the balance between exploration, defense, and stealth.
#[derive(Debug, Clone)]
pub struct BotConfig {
    // === SCANNING ===
    /// Scan radius requested on the very first turn
    ///
    /// A wide bootstrap scan (window side 2*15+1 = 31) seeds the knowledge
    /// grid with enough terrain to path toward energy immediately.
    pub first_scan_radius: u16,

    /// Scan radius requested on every later turn
    ///
    /// Narrow refresh scans (window side 9) are cheap and keep the local
    /// neighborhood current as the bot moves.
    pub scan_radius: u16,

    // === SHIELD ===
    /// Energy per shield step
    ///
    /// Desired shield is `(energy / shield_energy_step) * shield_per_step`,
    /// so the shield grows in discrete steps as reserves accumulate.
    pub shield_energy_step: u16,

    /// Shield points granted per step
    pub shield_per_step: u16,

    /// Lower clamp on the desired shield
    ///
    /// Keeps at least a token shield request even when energy is near zero.
    pub shield_min: u16,

    /// Upper clamp on the desired shield
    pub shield_max: u16,

    // === CLOAK ===
    /// Energy reserve required before spending on the cloak
    ///
    /// Cloaking is a luxury; below this reserve the energy is better kept
    /// for movement and shielding.
    pub cloak_energy_threshold: u16,

    /// Cloak level requested once the reserve allows it
    pub cloak_level: u16,
}

impl Default for BotConfig {
    fn default() -> Self {
        Self {
            first_scan_radius: 15,
            scan_radius: 4,
            shield_energy_step: 500,
            shield_per_step: 50,
            shield_min: 1,
            shield_max: 1000,
            cloak_energy_threshold: 1000,
            cloak_level: 4,
        }
    }
}

impl BotConfig {
    /// Desired shield for the given energy: step function clamped to
    /// `[shield_min, shield_max]`, integer division intended
    pub fn desired_shield(&self, energy: u16) -> u16 {
        let desired = (energy / self.shield_energy_step) * self.shield_per_step;
        desired.clamp(self.shield_min, self.shield_max)
    }
}
