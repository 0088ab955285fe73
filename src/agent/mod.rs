pub mod controller;
pub mod state;

pub use controller::Warden;
pub use state::AgentState;
