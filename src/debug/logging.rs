use bevy::prelude::*;
use bevy_rapier2d::prelude::Velocity;

use crate::core::components::Ball;
use crate::core::config::GameConfig;
use crate::gameplay::respawn::RespawnStats;
use crate::physics::rapier::SimulationClock;

pub fn debug_logging_system(
    time: Res<Time>,
    mut accum: Local<f32>,
    cfg: Res<GameConfig>,
    clock: Res<SimulationClock>,
    stats: Res<RespawnStats>,
    q_balls: Query<(&Ball, Option<&Velocity>)>,
) {
    let interval = cfg.debug.log_interval;
    if interval <= 0.0 {
        return;
    }
    *accum += time.delta_secs();
    if *accum < interval {
        return;
    }
    *accum = 0.0;
    for (ball, vel) in &q_balls {
        let v = vel.map(|v| v.linvel).unwrap_or(Vec2::ZERO);
        info!(
            "SIM step={} sim_t={:.2}s wall_t={:.2}s ball_screen=({:.1},{:.1}) vel=({:.1},{:.1}) respawns={}",
            clock.steps,
            clock.elapsed(),
            time.elapsed_secs(),
            ball.screen_position.x,
            ball.screen_position.y,
            v.x,
            v.y,
            stats.count
        );
    }
}
