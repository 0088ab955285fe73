//! Arena Warden - autonomous bot controller for a turn-based grid arena
//!
//! Each turn the host delivers a status report and a local scan of an
//! unseen 100x100 board; the controller merges the scan into a persistent
//! partial map, checks line of sight for hostiles, paths toward the
//! nearest known energy, and emits exactly one action.

pub mod agent;
pub mod arena;
pub mod core;
pub mod grid;
pub mod tactics;
