//! Per-turn decision cascade
//!
//! Strict priority: shoot > shield > cloak > move. The first applicable
//! rule wins and ends the turn; no rule depends on another's result.
//! Choosing a move mutates the agent's position and last-move record.

use rand::Rng;

use crate::core::config::BotConfig;
use crate::core::types::{Action, CellState, Direction};
use crate::grid::knowledge::KnowledgeGrid;
use crate::tactics::{los, pathfind};
use crate::agent::state::AgentState;

/// Direction order for the adjacent-energy check and for collecting
/// random-fallback candidates
const GREEDY_ORDER: [Direction; 4] = [
    Direction::North,
    Direction::East,
    Direction::West,
    Direction::South,
];

/// Pick this turn's action
pub fn decide(
    grid: &mut KnowledgeGrid,
    state: &mut AgentState,
    config: &BotConfig,
    rng: &mut impl Rng,
) -> Action {
    // 1. Combat: a visible hostile always gets shot first. The target cell
    // is recorded empty on the assumption the shot eliminates it.
    if let Some((dir, target)) = los::find_target(grid, state.position) {
        grid.set(target, CellState::Empty);
        tracing::debug!(x = target.x, y = target.y, ?dir, "shooting target");
        return Action::Shoot(dir);
    }

    // 2. Shield: raise toward the energy-scaled optimum. Never lowered.
    let desired = config.desired_shield(state.energy);
    if state.shield_level < desired {
        state.shield_level = desired;
        state.was_hit = false;
        tracing::debug!(level = desired, "raising shield");
        return Action::SetShield(desired);
    }

    // 3. Cloak: a luxury once reserves are comfortable.
    if state.energy > config.cloak_energy_threshold && state.cloak_level < config.cloak_level {
        state.cloak_level = config.cloak_level;
        tracing::debug!(level = config.cloak_level, "engaging cloak");
        return Action::SetCloak(config.cloak_level);
    }

    // 4. Move.
    choose_move(grid, state, rng)
}

/// Movement sub-cascade: adjacent energy, then path following, then a
/// random safe neighbor, with the anti-oscillation override applied to the
/// latter two.
fn choose_move(grid: &KnowledgeGrid, state: &mut AgentState, rng: &mut impl Rng) -> Action {
    // a. Local greed: step straight onto adjacent energy. This bypasses
    // anti-oscillation; grabbing energy is always worth a reversal.
    for dir in GREEDY_ORDER {
        let next = state.position.step(dir);
        if next.in_bounds() && grid.get(next) == CellState::EnergySource {
            state.position = next;
            state.last_move = Some(dir);
            tracing::debug!(?dir, "stepping onto adjacent energy");
            return Action::Move(dir);
        }
    }

    // b. Follow the search path toward the nearest known energy.
    let mut choice: Option<Direction> = None;
    if let Some(path) =
        pathfind::find_path_to_energy(grid, state.position, state.path_search_radius())
    {
        if path.len() > 1 {
            let next = path[1];
            choice = Direction::from_delta(next.x - state.position.x, next.y - state.position.y);
        }
    }

    // c. No reachable energy: wander to a random traversable neighbor.
    if choice.is_none() {
        let options: Vec<Direction> = GREEDY_ORDER
            .iter()
            .copied()
            .filter(|dir| {
                let next = state.position.step(*dir);
                next.in_bounds() && grid.get(next).is_traversable()
            })
            .collect();
        if !options.is_empty() {
            choice = Some(options[rng.gen_range(0..options.len())]);
        }
    }

    // d. Anti-oscillation: prefer continuing straight over reversing the
    // previous move, when straight ahead is still open.
    if let (Some(last), Some(dir)) = (state.last_move, choice) {
        if dir == last.opposite() {
            let ahead = state.position.step(last);
            if ahead.in_bounds() && grid.get(ahead).is_traversable() {
                choice = Some(last);
            }
        }
    }

    match choice {
        Some(dir) => {
            state.position = state.position.step(dir);
            state.last_move = Some(dir);
            tracing::debug!(?dir, x = state.position.x, y = state.position.y, "moving");
            Action::Move(dir)
        }
        None => {
            state.last_move = None;
            tracing::debug!("no safe neighbor, holding position");
            Action::Stay
        }
    }
}
