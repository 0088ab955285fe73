pub mod los;
pub mod pathfind;
pub mod policy;

pub use los::find_target;
pub use pathfind::find_path_to_energy;
pub use policy::decide;
