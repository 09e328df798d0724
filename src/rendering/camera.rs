use bevy::prelude::*;

pub struct CameraPlugin;

impl Plugin for CameraPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, setup_camera);
    }
}

/// World origin pinned to the bottom-left of the viewport: world space == physics space,
/// one unit per logical pixel.
pub fn bottom_left_projection() -> Projection {
    Projection::from(OrthographicProjection {
        viewport_origin: Vec2::ZERO,
        ..OrthographicProjection::default_2d()
    })
}

fn setup_camera(mut commands: Commands) {
    commands.spawn((Camera2d, bottom_left_projection()));
}
