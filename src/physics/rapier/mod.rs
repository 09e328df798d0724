pub mod rapier_physics;

pub use rapier_physics::{PhysicsSetupPlugin, SimulationClock};
