pub mod app;
pub mod core;
#[cfg(feature = "debug")]
pub mod debug;
pub mod gameplay;
pub mod interaction;
pub mod physics;
pub mod rendering;

// Curated re-exports
pub use app::game::{primary_window, GamePlugin, SimulationPlugin};
pub use crate::core::components::{Ball, BallCircleVisual, Ramp};
pub use crate::core::config::{config::GameConfig, config::WindowConfig};
pub use crate::core::screen::ScreenSpace;
pub use gameplay::respawn::RespawnStats;
pub use physics::rapier::SimulationClock;
