//! Rapier wireframe overlay and periodic simulation logging.
//! Compiled only with the `debug` feature (on by default); see `lib.rs`.

pub mod logging;

use bevy::prelude::*;
use bevy_rapier2d::render::{DebugRenderContext, RapierDebugRenderPlugin};

use crate::core::config::GameConfig;

pub const TOGGLE_WIREFRAME_KEY: KeyCode = KeyCode::F1;

pub struct DebugPlugin;

impl Plugin for DebugPlugin {
    fn build(&self, app: &mut App) {
        let enabled = app
            .world()
            .get_resource::<GameConfig>()
            .map(|c| c.debug.rapier_debug)
            .unwrap_or(false);
        app.add_plugins(RapierDebugRenderPlugin {
            enabled,
            ..default()
        })
        .add_systems(Update, (toggle_rapier_wireframe, logging::debug_logging_system));
    }
}

pub fn toggle_rapier_wireframe(
    keys: Res<ButtonInput<KeyCode>>,
    ctx: Option<ResMut<DebugRenderContext>>,
) {
    if !keys.just_pressed(TOGGLE_WIREFRAME_KEY) {
        return;
    }
    if let Some(mut c) = ctx {
        c.enabled = !c.enabled;
        info!("Rapier wireframe {}", if c.enabled { "ON" } else { "OFF" });
    }
}
