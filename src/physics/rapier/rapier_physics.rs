use bevy::prelude::*;
use bevy_rapier2d::prelude::*;

use crate::core::config::GameConfig;
use crate::core::system::system_order::SimulationSet;

const LOG_TARGET: &str = "physics";

/// Fixed-step bookkeeping: how many physics steps have run and how long each one is.
#[derive(Resource, Debug, Clone, Copy, PartialEq)]
pub struct SimulationClock {
    pub steps: u64,
    pub dt: f32,
}
impl Default for SimulationClock {
    fn default() -> Self {
        Self { steps: 0, dt: 1.0 / 50.0 }
    }
}
impl SimulationClock {
    /// Simulated seconds since startup (not wall-clock time).
    pub fn elapsed(&self) -> f32 {
        self.steps as f32 * self.dt
    }
}

pub struct PhysicsSetupPlugin; // our wrapper to configure Rapier for the scene

impl Plugin for PhysicsSetupPlugin {
    fn build(&self, app: &mut App) {
        // One physics unit == one pixel, matching the window layout.
        app.add_plugins(RapierPhysicsPlugin::<NoUserData>::default())
            .init_resource::<SimulationClock>()
            .add_systems(Startup, configure_timestep)
            // The default Rapier context entity is guaranteed to exist once Startup has flushed.
            .add_systems(PostStartup, configure_gravity)
            .add_systems(
                PostUpdate,
                advance_clock
                    .after(PhysicsSet::Writeback)
                    .before(SimulationSet::SyncFromPhysics),
            );
    }
}

fn configure_timestep(
    mut commands: Commands,
    mut clock: ResMut<SimulationClock>,
    cfg: Res<GameConfig>,
) {
    let p = &cfg.physics;
    // Each app update advances exactly `fixed_dt`, independent of the frame period.
    commands.insert_resource(TimestepMode::Fixed {
        dt: p.fixed_dt,
        substeps: p.substeps.max(1),
    });
    clock.dt = p.fixed_dt;
    info!(target: LOG_TARGET, dt = p.fixed_dt, substeps = p.substeps, "fixed physics timestep configured");
}

fn configure_gravity(mut q_cfg: Query<&mut RapierConfiguration>, cfg: Res<GameConfig>) {
    let gravity = Vec2::from(cfg.physics.gravity);
    let Ok(mut rapier_cfg) = q_cfg.single_mut() else {
        warn!(target: LOG_TARGET, "no default Rapier context found; gravity left unchanged");
        return;
    };
    rapier_cfg.gravity = gravity;
    info!(target: LOG_TARGET, "gravity set to ({}, {})", gravity.x, gravity.y);
}

fn advance_clock(mut clock: ResMut<SimulationClock>) {
    clock.steps += 1;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clock_elapsed_is_steps_times_dt() {
        let clock = SimulationClock { steps: 50, dt: 0.02 };
        assert!((clock.elapsed() - 1.0).abs() < 1e-5);
        assert_eq!(SimulationClock::default().elapsed(), 0.0);
    }
}
