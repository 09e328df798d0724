use bevy::prelude::*;
use bevy_rapier2d::prelude::{Collider, Friction, RigidBody};

use crate::core::components::Ramp;
use crate::core::config::GameConfig;

pub struct RampPlugin;

impl Plugin for RampPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, spawn_initial_ramp);
    }
}

/// Fixed body at the ramp anchor with a capsule collider from `point_a` to `point_b`;
/// the capsule radius is the ramp thickness.
pub fn spawn_ramp(commands: &mut Commands, cfg: &GameConfig) -> Entity {
    let r = &cfg.ramp;
    let ramp = Ramp::new(r.anchor.into(), r.length, r.thickness, r.drop);
    let (a, b) = ramp.local_endpoints();
    let anchor = ramp.point_a.extend(0.0);
    commands
        .spawn((
            Transform::from_translation(anchor),
            GlobalTransform::from_translation(anchor),
            Visibility::default(),
            RigidBody::Fixed,
            Collider::capsule(a, b, ramp.thickness),
            Friction::coefficient(r.friction),
            Name::new("Ramp"),
            ramp,
        ))
        .id()
}

fn spawn_initial_ramp(mut commands: Commands, cfg: Res<GameConfig>) {
    let e = spawn_ramp(&mut commands, &cfg);
    let r = &cfg.ramp;
    info!(
        "spawned ramp {e} anchor=({}, {}) length={} thickness={} drop={}",
        r.anchor.x, r.anchor.y, r.length, r.thickness, r.drop
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ramp_spawns_fixed_body_at_anchor() {
        let mut app = App::new();
        app.insert_resource(GameConfig::default())
            .add_plugins(RampPlugin);
        app.update();
        let world = app.world_mut();
        let mut q = world.query::<(&Ramp, &RigidBody, &Transform)>();
        let rows: Vec<_> = q.iter(world).collect();
        assert_eq!(rows.len(), 1);
        let (ramp, body, tf) = rows[0];
        assert_eq!(*body, RigidBody::Fixed);
        assert_eq!(tf.translation.truncate(), Vec2::new(50.0, 200.0));
        assert_eq!(ramp.point_b, Vec2::new(150.0, 200.0));
        assert_eq!(ramp.thickness, 5.0);
    }
}
