use bevy::prelude::*;
use bevy::sprite::MeshMaterial2d;
use bevy::transform::TransformSystem;

use crate::core::components::{Ball, BallCircleVisual, Ramp};
use crate::core::config::GameConfig;
use crate::core::system::system_order::SimulationSet;

/// Gizmo group for ramps so their line width follows ramp thickness without touching the
/// default group (used by the Rapier debug wireframe).
#[derive(Default, Reflect, GizmoConfigGroup)]
pub struct RampGizmos;

#[derive(Resource)]
pub struct BallVisualAssets {
    pub mesh: Handle<Mesh>,
    pub material: Handle<ColorMaterial>,
}

pub struct VisualsPlugin;

impl Plugin for VisualsPlugin {
    fn build(&self, app: &mut App) {
        app.init_gizmo_group::<RampGizmos>()
            .add_systems(
                Startup,
                (setup_clear_color, setup_ball_visual_assets, configure_ramp_gizmos),
            )
            // Right after a respawn so the replacement is drawn on its first frame.
            .add_systems(
                PostUpdate,
                attach_ball_visuals
                    .after(SimulationSet::Respawn)
                    .before(TransformSystem::TransformPropagate),
            )
            .add_systems(Update, draw_ramps);
    }
}

fn setup_clear_color(mut commands: Commands, cfg: Res<GameConfig>) {
    commands.insert_resource(ClearColor(cfg.colors.background.into()));
}

fn setup_ball_visual_assets(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<ColorMaterial>>,
    cfg: Res<GameConfig>,
) {
    let mesh = meshes.add(Circle::new(cfg.ball.radius));
    let material = materials.add(Color::from(cfg.colors.ball));
    commands.insert_resource(BallVisualAssets { mesh, material });
}

fn configure_ramp_gizmos(mut store: ResMut<GizmoConfigStore>, cfg: Res<GameConfig>) {
    let (config, _) = store.config_mut::<RampGizmos>();
    config.line.width = ramp_line_width(cfg.ramp.thickness);
}

/// The collider is a capsule of radius `thickness`, so the drawn line spans its full diameter.
pub fn ramp_line_width(thickness: f32) -> f32 {
    (thickness * 2.0).max(1.0)
}

/// Filled circle child; it follows the body transform, which the camera maps to the
/// ball's cached screen position.
fn attach_ball_visuals(
    mut commands: Commands,
    assets: Option<Res<BallVisualAssets>>,
    q_new: Query<Entity, Added<Ball>>,
) {
    let Some(assets) = assets else { return };
    for e in &q_new {
        commands.entity(e).with_children(|parent| {
            parent.spawn((
                Mesh2d(assets.mesh.clone()),
                MeshMaterial2d(assets.material.clone()),
                Transform::default(),
                BallCircleVisual,
            ));
        });
    }
}

/// Line from `point_a` to `point_b` (both coordinates of each endpoint).
fn draw_ramps(mut gizmos: Gizmos<RampGizmos>, q_ramps: Query<&Ramp>, cfg: Res<GameConfig>) {
    let color = Color::from(cfg.colors.ramp);
    for ramp in &q_ramps {
        gizmos.line_2d(ramp.point_a, ramp.point_b, color);
    }
}
