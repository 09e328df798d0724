pub mod ball;
pub mod ramp;
pub mod respawn;

pub use ball::{spawn_ball, BallPlugin};
pub use ramp::{spawn_ramp, RampPlugin};
pub use respawn::{RespawnPlugin, RespawnStats};
