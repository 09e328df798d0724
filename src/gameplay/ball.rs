use bevy::prelude::*;
use bevy_rapier2d::prelude::{
    Ccd, Collider, ColliderMassProperties, Friction, MassProperties, Restitution, RigidBody,
    Velocity,
};

use crate::core::components::Ball;
use crate::core::config::GameConfig;
use crate::core::screen::ScreenSpace;
use crate::core::system::system_order::SimulationSet;

/// Spawns the ball at startup and keeps its screen-space cache current.
/// Expects `GameConfig` to be inserted before the plugin is added.
pub struct BallPlugin;

impl Plugin for BallPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<ScreenSpace>()
            .add_systems(Startup, spawn_initial_ball)
            .add_systems(
                PostUpdate,
                sync_balls_from_physics.in_set(SimulationSet::SyncFromPhysics),
            );
    }
}

/// Spawn a fresh dynamic ball at the configured spawn point.
///
/// Mass properties are given explicitly (uniform disc) rather than derived from a density,
/// so the body always has exactly `cfg.ball.mass` regardless of radius.
pub fn spawn_ball(commands: &mut Commands, cfg: &GameConfig, screen: &ScreenSpace) -> Entity {
    let spawn = Vec2::from(cfg.ball.spawn);
    let ball = Ball::new(cfg.ball.radius, cfg.ball.mass, spawn, screen);
    commands
        .spawn((
            Transform::from_translation(spawn.extend(0.0)),
            GlobalTransform::from_translation(spawn.extend(0.0)),
            Visibility::default(),
            RigidBody::Dynamic,
            Collider::ball(ball.radius),
            ColliderMassProperties::MassProperties(MassProperties {
                local_center_of_mass: Vec2::ZERO,
                mass: ball.mass,
                principal_inertia: ball.disc_inertia(),
            }),
            Velocity::zero(),
            Friction::coefficient(cfg.ball.friction),
            Restitution::coefficient(cfg.ball.restitution),
            Ccd::enabled(),
            Name::new("Ball"),
            ball,
        ))
        .id()
}

fn spawn_initial_ball(mut commands: Commands, cfg: Res<GameConfig>, screen: Res<ScreenSpace>) {
    let e = spawn_ball(&mut commands, &cfg, &screen);
    info!(
        "spawned ball {e} at ({}, {}) radius={} mass={}",
        cfg.ball.spawn.x, cfg.ball.spawn.y, cfg.ball.radius, cfg.ball.mass
    );
}

pub fn sync_balls_from_physics(
    screen: Res<ScreenSpace>,
    mut q: Query<(&Transform, &mut Ball)>,
) {
    for (tf, mut ball) in &mut q {
        ball.sync_from_physics(tf.translation.truncate(), &screen);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spawn_ball_inserts_body_collider_and_cache() {
        let mut app = App::new();
        let cfg = GameConfig::default();
        let screen = ScreenSpace::new(cfg.window.width, cfg.window.height);
        let e = {
            let mut commands = app.world_mut().commands();
            spawn_ball(&mut commands, &cfg, &screen)
        };
        app.world_mut().flush();
        let world = app.world();
        assert!(world.get::<RigidBody>(e).is_some());
        assert!(world.get::<Collider>(e).is_some());
        let ball = world.get::<Ball>(e).expect("ball component");
        assert_eq!(ball.screen_position, Vec2::new(100.0, 100.0));
        let tf = world.get::<Transform>(e).unwrap();
        assert_eq!(tf.translation.truncate(), Vec2::new(100.0, 700.0));
        match world.get::<ColliderMassProperties>(e) {
            Some(ColliderMassProperties::MassProperties(mp)) => {
                assert_eq!(mp.mass, 1.0);
                assert!((mp.principal_inertia - 98.0).abs() < 1e-4);
            }
            other => panic!("expected explicit mass properties, got {other:?}"),
        }
    }

    #[test]
    fn sync_updates_screen_cache_from_transform() {
        let mut app = App::new();
        app.insert_resource(ScreenSpace::new(600.0, 800.0))
            .add_systems(Update, sync_balls_from_physics);
        let e = app
            .world_mut()
            .spawn((
                Transform::from_xyz(250.0, 300.0, 0.0),
                Ball { radius: 14.0, mass: 1.0, screen_position: Vec2::ZERO },
            ))
            .id();
        app.update();
        let ball = app.world().get::<Ball>(e).unwrap();
        assert_eq!(ball.screen_position, Vec2::new(250.0, 500.0));
    }
}
