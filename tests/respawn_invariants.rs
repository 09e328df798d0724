mod common;

use balls_and_ramps::RespawnStats;
use common::{balls, collider_count, config_with_spawn, headless_app, single_ball};

#[test]
fn off_screen_spawn_respawns_every_frame_without_leaking_bodies() {
    // x = 700 is past the right edge of a 600 px window.
    let mut app = headless_app(config_with_spawn(700.0, 700.0));
    for frame in 1..=25u64 {
        app.update();
        assert_eq!(balls(&mut app).len(), 1, "frame {frame}");
        assert_eq!(collider_count(&mut app), 2, "frame {frame}: ball + ramp only");
        assert_eq!(app.world().resource::<RespawnStats>().count, frame);
    }
}

#[test]
fn respawned_ball_restarts_at_spawn_point() {
    let mut app = headless_app(config_with_spawn(700.0, 700.0));
    app.update();
    let (_, physics, screen) = single_ball(&mut app);
    assert_eq!(physics.x, 700.0);
    assert_eq!(physics.y, 700.0);
    assert_eq!(screen.x, 700.0);
    assert_eq!(screen.y, 100.0);
}

#[test]
fn on_screen_reference_scene_keeps_two_colliders() {
    let mut app = headless_app(config_with_spawn(100.0, 700.0));
    for _ in 0..60 {
        app.update();
        assert_eq!(collider_count(&mut app), 2);
    }
}
