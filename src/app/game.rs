use bevy::prelude::*;
use bevy::transform::TransformSystem;
use bevy::window::{MonitorSelection, WindowPosition, WindowResolution};
use bevy_rapier2d::prelude::PhysicsSet;

use crate::core::config::GameConfig;
use crate::core::system::system_order::SimulationSet;
#[cfg(feature = "debug")]
use crate::debug::DebugPlugin;
use crate::gameplay::{BallPlugin, RampPlugin, RespawnPlugin};
use crate::interaction::input::InputCapturePlugin;
use crate::interaction::session::{AutoClosePlugin, QuitPlugin};
use crate::physics::rapier::PhysicsSetupPlugin;
use crate::rendering::{CameraPlugin, FrameLimiterPlugin, VisualsPlugin};

/// Everything that does not need a window or GPU: physics, entities, respawn rule,
/// input capture and quit handling. Runs under `MinimalPlugins` in tests.
///
/// `GameConfig` must be inserted before this plugin is added.
pub struct SimulationPlugin;

impl Plugin for SimulationPlugin {
    fn build(&self, app: &mut App) {
        app.configure_sets(
            PostUpdate,
            (SimulationSet::SyncFromPhysics, SimulationSet::Respawn)
                .chain()
                .after(PhysicsSet::Writeback)
                .before(TransformSystem::TransformPropagate),
        )
        .add_plugins((
            PhysicsSetupPlugin,
            BallPlugin,
            RampPlugin,
            RespawnPlugin,
            InputCapturePlugin,
            QuitPlugin,
            AutoClosePlugin,
        ));
    }
}

/// Full windowed game: simulation plus camera, drawing and the frame governor.
pub struct GamePlugin;

impl Plugin for GamePlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins((
            SimulationPlugin,
            CameraPlugin,
            VisualsPlugin,
            FrameLimiterPlugin,
            #[cfg(feature = "debug")]
            DebugPlugin,
        ));
    }
}

/// Fixed-size primary window described by the config.
pub fn primary_window(cfg: &GameConfig) -> Window {
    let position = if cfg.window.centered {
        WindowPosition::Centered(MonitorSelection::Primary)
    } else {
        WindowPosition::Automatic
    };
    Window {
        title: cfg.window.title.clone(),
        resolution: WindowResolution::new(cfg.window.width, cfg.window.height),
        resizable: false,
        position,
        ..default()
    }
}
