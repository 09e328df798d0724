#![allow(dead_code)]

use bevy::prelude::*;
use bevy_rapier2d::prelude::RapierContextColliders;

use balls_and_ramps::core::config::{GameConfig, Point2};
use balls_and_ramps::{Ball, SimulationPlugin};

/// Headless app running the full simulation (physics, respawn, input, quit) without a window.
pub fn headless_app(cfg: GameConfig) -> App {
    let mut app = App::new();
    app.add_plugins((
        MinimalPlugins,
        TransformPlugin,
        AssetPlugin::default(),
    ))
    .init_asset::<Mesh>()
    .insert_resource(cfg)
    .add_plugins(SimulationPlugin);
    app
}

pub fn config_with_spawn(x: f32, y: f32) -> GameConfig {
    let mut cfg = GameConfig::default();
    cfg.ball.spawn = Point2 { x, y };
    cfg
}

/// (entity, physics-space translation, cached screen position) of every ball.
pub fn balls(app: &mut App) -> Vec<(Entity, Vec2, Vec2)> {
    let world = app.world_mut();
    let mut q = world.query::<(Entity, &Transform, &Ball)>();
    q.iter(world)
        .map(|(e, tf, b)| (e, tf.translation.truncate(), b.screen_position))
        .collect()
}

pub fn single_ball(app: &mut App) -> (Entity, Vec2, Vec2) {
    let all = balls(app);
    assert_eq!(all.len(), 1, "expected exactly one ball, found {}", all.len());
    all[0]
}

pub fn collider_count(app: &mut App) -> usize {
    let world = app.world_mut();
    let mut q = world.query::<&RapierContextColliders>();
    q.iter(world).map(|c| c.colliders.len()).sum()
}
