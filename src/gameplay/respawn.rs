use bevy::prelude::*;

use crate::core::components::Ball;
use crate::core::config::GameConfig;
use crate::core::screen::ScreenSpace;
use crate::core::system::system_order::SimulationSet;
use crate::gameplay::ball::spawn_ball;
use crate::physics::rapier::SimulationClock;

const LOG_TARGET: &str = "respawn";

#[derive(Resource, Debug, Default, Clone, Copy, PartialEq)]
pub struct RespawnStats {
    pub count: u64,
    /// Simulation step on which the most recent respawn fired.
    pub last_step: Option<u64>,
}

pub struct RespawnPlugin;

impl Plugin for RespawnPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<RespawnStats>().add_systems(
            PostUpdate,
            respawn_off_screen_balls.in_set(SimulationSet::Respawn),
        );
    }
}

/// Replace (never teleport) any ball whose cached screen position left the window.
///
/// The old entity is despawned together with its collider and visual child; Rapier drops
/// it from the simulation in the same backend sync that registers the replacement, so the
/// next step sees exactly one ball.
pub fn respawn_off_screen_balls(
    mut commands: Commands,
    q_balls: Query<(Entity, &Ball)>,
    screen: Res<ScreenSpace>,
    cfg: Res<GameConfig>,
    clock: Res<SimulationClock>,
    mut stats: ResMut<RespawnStats>,
) {
    for (entity, ball) in &q_balls {
        if !screen.is_off_screen(ball.screen_position) {
            continue;
        }
        commands.entity(entity).despawn();
        let replacement = spawn_ball(&mut commands, &cfg, &screen);
        stats.count += 1;
        stats.last_step = Some(clock.steps);
        info!(
            target: LOG_TARGET,
            "ball {entity} left screen at ({:.1}, {:.1}) on step {}; respawned as {replacement} (total {})",
            ball.screen_position.x,
            ball.screen_position.y,
            clock.steps,
            stats.count
        );
    }
}
