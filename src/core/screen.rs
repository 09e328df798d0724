//! Physics space (origin bottom-left, y up) <-> screen space (origin top-left, y down).
//!
//! The x axis is shared; y flips around the screen height. The camera is set up so Bevy
//! world space *is* physics space, which leaves screen space for the off-screen rule
//! and for anything reported to the user in pixel terms.

use bevy::prelude::*;

use crate::core::config::GameConfig;

#[derive(Resource, Debug, Clone, Copy, PartialEq)]
pub struct ScreenSpace {
    pub width: f32,
    pub height: f32,
}

impl ScreenSpace {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    #[inline]
    pub fn to_screen(&self, physics: Vec2) -> Vec2 {
        Vec2::new(physics.x, self.height - physics.y)
    }

    #[inline]
    pub fn to_physics(&self, screen: Vec2) -> Vec2 {
        Vec2::new(screen.x, self.height - screen.y)
    }

    /// Horizontal bounds are checked first, then vertical; either one failing is enough.
    /// Points exactly on an edge still count as visible.
    pub fn is_off_screen(&self, screen: Vec2) -> bool {
        if screen.x > self.width || screen.x < 0.0 {
            return true;
        }
        screen.y > self.height || screen.y < 0.0
    }
}

impl FromWorld for ScreenSpace {
    fn from_world(world: &mut World) -> Self {
        let window = world
            .get_resource::<GameConfig>()
            .map(|c| c.window.clone())
            .unwrap_or_default();
        Self::new(window.width, window.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SCREEN: ScreenSpace = ScreenSpace::new(600.0, 800.0);

    #[test]
    fn spawn_point_maps_to_top_area() {
        assert_eq!(SCREEN.to_screen(Vec2::new(100.0, 700.0)), Vec2::new(100.0, 100.0));
        assert_eq!(SCREEN.to_physics(Vec2::new(100.0, 100.0)), Vec2::new(100.0, 700.0));
    }

    #[test]
    fn round_trip_over_visible_height() {
        for i in 0..=80 {
            let p = Vec2::new(37.5, i as f32 * 10.0);
            assert_eq!(SCREEN.to_physics(SCREEN.to_screen(p)), p);
        }
    }

    #[test]
    fn off_screen_rule() {
        assert!(!SCREEN.is_off_screen(Vec2::new(300.0, 400.0)));
        assert!(!SCREEN.is_off_screen(Vec2::new(0.0, 0.0)));
        assert!(!SCREEN.is_off_screen(Vec2::new(600.0, 800.0)));
        assert!(SCREEN.is_off_screen(Vec2::new(600.5, 400.0)));
        assert!(SCREEN.is_off_screen(Vec2::new(-0.5, 400.0)));
        assert!(SCREEN.is_off_screen(Vec2::new(300.0, 800.5)));
        assert!(SCREEN.is_off_screen(Vec2::new(300.0, -0.5)));
        // fell through the floor in physics terms
        assert!(SCREEN.is_off_screen(SCREEN.to_screen(Vec2::new(100.0, -20.0))));
    }

    #[test]
    fn from_world_reads_window_config() {
        let mut world = World::new();
        let mut cfg = GameConfig::default();
        cfg.window.width = 320.0;
        cfg.window.height = 240.0;
        world.insert_resource(cfg);
        assert_eq!(ScreenSpace::from_world(&mut world), ScreenSpace::new(320.0, 240.0));

        let mut empty = World::new();
        assert_eq!(ScreenSpace::from_world(&mut empty), SCREEN);
    }
}
