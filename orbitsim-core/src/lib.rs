pub mod error;
pub mod integrator;
pub mod particle;
pub mod simulator;

pub use error::{Result, SimError};
pub use integrator::{sub_step_count, SUB_STEP};
pub use particle::Particle;
pub use simulator::Simulator;

// Test helpers module (public for integration tests)
pub mod tests;
