//! End-to-end host-contract tests
//!
//! Drives the controller through the same call sequence the arena host
//! uses: status report, scan radius, area report, action.

use arena_warden::agent::Warden;
use arena_warden::arena::Arena;
use arena_warden::core::types::{Action, CellState, Coord, Direction};
use arena_warden::grid::perception::ScanReport;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Scan window of the given side, all cells empty
fn empty_window(side: u16) -> Vec<CellState> {
    vec![CellState::Empty; side as usize * side as usize]
}

/// Place a state at a window offset relative to the centered bot
fn put(cells: &mut [CellState], side: u16, dx: i32, dy: i32, state: CellState) {
    let r = (side as i32 - 1) / 2;
    let idx = (dy + r) * side as i32 + (dx + r);
    cells[idx as usize] = state;
}

/// Run one full host turn and return the action
fn turn(warden: &mut Warden, turn_no: u16, energy: u16, side: u16, cells: Vec<CellState>) -> Action {
    warden.status_report(turn_no, energy, warden.state.shield_level, warden.state.cloak_level);
    let _ = warden.scan_radius();
    warden
        .area_report(&ScanReport::new(side, cells).unwrap())
        .unwrap();
    warden.compute_action()
}

#[test]
fn first_turn_requests_wide_scan() {
    let mut warden = Warden::seeded(1);
    warden.init();
    assert_eq!(warden.scan_radius(), 15);
    assert_eq!(warden.scan_radius(), 4);
}

#[test]
fn adjacent_energy_is_taken_east() {
    let mut warden = Warden::seeded(1);
    warden.init();
    warden.state.shield_level = 1; // shield already satisfied at zero energy
    let start_x = warden.state.position.x;

    let mut cells = empty_window(9);
    put(&mut cells, 9, 1, 0, CellState::EnergySource);
    let action = turn(&mut warden, 1, 0, 9, cells);

    assert_eq!(action, Action::Move(Direction::East));
    assert_eq!(warden.state.position.x, start_x + 1);
}

#[test]
fn hostile_three_south_is_shot() {
    let mut warden = Warden::seeded(1);
    warden.init();

    let mut cells = empty_window(9);
    put(&mut cells, 9, 0, 3, CellState::Hostile);
    let action = turn(&mut warden, 1, 500, 9, cells);

    assert_eq!(action, Action::Shoot(Direction::South));
}

#[test]
fn wall_between_hostile_blocks_the_shot() {
    let mut warden = Warden::seeded(1);
    warden.init();
    warden.state.shield_level = 50;

    let mut cells = empty_window(9);
    put(&mut cells, 9, 0, 2, CellState::Wall);
    put(&mut cells, 9, 0, 3, CellState::Hostile);
    let action = turn(&mut warden, 1, 500, 9, cells);

    assert!(!matches!(action, Action::Shoot(_)));
}

#[test]
fn cloak_engaged_once_shield_is_optimal() {
    let mut warden = Warden::seeded(1);
    warden.init();
    warden.state.shield_level = 1000;

    let action = turn(&mut warden, 1, 1200, 9, empty_window(9));
    assert_eq!(action, Action::SetCloak(4));
}

#[test]
fn shield_requests_are_monotonic_across_turns() {
    let mut warden = Warden::seeded(1);
    warden.init();

    let mut last = 0u16;
    for (i, energy) in [200u16, 800, 1600, 700, 3000, 400].iter().enumerate() {
        let action = turn(&mut warden, i as u16 + 1, *energy, 9, empty_window(9));
        if let Action::SetShield(level) = action {
            assert!(level > last, "shield request decreased");
            last = level;
        }
    }
}

#[test]
fn north_hostile_shot_before_east_hostile() {
    let mut warden = Warden::seeded(1);
    warden.init();

    let mut cells = empty_window(9);
    put(&mut cells, 9, 1, 0, CellState::Hostile); // east, closer
    put(&mut cells, 9, 0, -4, CellState::Hostile); // north, farther
    let action = turn(&mut warden, 1, 500, 9, cells);

    assert_eq!(action, Action::Shoot(Direction::North));
}

#[test]
fn scan_merge_survives_between_turns() {
    let mut warden = Warden::seeded(1);
    warden.init();
    warden.state.shield_level = 1;

    // first turn reveals energy two steps east; path following moves east
    let mut cells = empty_window(9);
    put(&mut cells, 9, 2, 0, CellState::EnergySource);
    let action = turn(&mut warden, 1, 0, 9, cells);
    assert_eq!(action, Action::Move(Direction::East));

    // the next scan is centered on the new position; the same energy cell
    // is now one step east and the greedy adjacent step takes it
    let mut cells = empty_window(9);
    put(&mut cells, 9, 1, 0, CellState::EnergySource);
    let action = turn(&mut warden, 2, 0, 9, cells);
    assert_eq!(action, Action::Move(Direction::East));
}

#[test]
fn simulated_match_runs_to_completion() {
    let mut rng = ChaCha8Rng::seed_from_u64(7);
    let mut arena = Arena::generate(&mut rng, 600);
    let mut warden = Warden::seeded(7);
    warden.init();

    let mut survived = 0u16;
    for turn_no in 1..=200 {
        warden.status_report(turn_no, arena.energy, arena.shield, arena.cloak);
        let radius = warden.scan_radius();
        let report = arena.scan(radius).unwrap();
        warden.area_report(&report).unwrap();
        let action = warden.compute_action();
        survived = turn_no;
        if !arena.apply(action) {
            break;
        }
    }

    assert!(survived > 10, "bot died almost immediately");
    assert_eq!(warden.state.position, arena.bot_pos, "bot lost track of itself");
    assert!(warden.grid.known_count() >= 31 * 31, "bootstrap scan missing");
}
