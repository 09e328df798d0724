use bevy::prelude::*;

use crate::core::screen::ScreenSpace;

/// The single dynamic ball. The body's `Transform` (written back by Rapier) is the
/// authoritative position; `screen_position` is the per-frame screen-space cache.
#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct Ball {
    pub radius: f32,
    pub mass: f32,
    pub screen_position: Vec2,
}

impl Ball {
    pub fn new(radius: f32, mass: f32, spawn: Vec2, screen: &ScreenSpace) -> Self {
        Self {
            radius,
            mass,
            screen_position: screen.to_screen(spawn),
        }
    }

    pub fn sync_from_physics(&mut self, physics: Vec2, screen: &ScreenSpace) {
        self.screen_position = screen.to_screen(physics);
    }

    /// Principal moment of inertia of a uniform solid disc about its centre.
    pub fn disc_inertia(&self) -> f32 {
        0.5 * self.mass * self.radius * self.radius
    }
}

/// Tag for the filled circle mesh child drawn for a ball.
#[derive(Component)]
pub struct BallCircleVisual;

/// Static ramp: a thick segment in physics space.
#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct Ramp {
    pub point_a: Vec2,
    pub point_b: Vec2,
    pub thickness: f32,
}

impl Ramp {
    /// Anchored at `anchor`, extending `length` along +x and falling `drop` towards the far end.
    pub fn new(anchor: Vec2, length: f32, thickness: f32, drop: f32) -> Self {
        Self {
            point_a: anchor,
            point_b: anchor + Vec2::new(length, -drop),
            thickness,
        }
    }

    /// Segment endpoints relative to the anchor (body origin).
    pub fn local_endpoints(&self) -> (Vec2, Vec2) {
        (Vec2::ZERO, self.point_b - self.point_a)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ball_caches_screen_position_at_spawn() {
        let screen = ScreenSpace::new(600.0, 800.0);
        let mut ball = Ball::new(14.0, 1.0, Vec2::new(100.0, 700.0), &screen);
        assert_eq!(ball.screen_position, Vec2::new(100.0, 100.0));
        ball.sync_from_physics(Vec2::new(120.0, 219.0), &screen);
        assert_eq!(ball.screen_position, Vec2::new(120.0, 581.0));
    }

    #[test]
    fn disc_inertia_matches_half_m_r_squared() {
        let ball = Ball { radius: 14.0, mass: 1.0, screen_position: Vec2::ZERO };
        assert!((ball.disc_inertia() - 98.0).abs() < 1e-5);
        let heavy = Ball { radius: 2.0, mass: 3.0, ..ball };
        assert!((heavy.disc_inertia() - 6.0).abs() < 1e-6);
    }

    #[test]
    fn ramp_endpoints_use_both_coordinates() {
        let flat = Ramp::new(Vec2::new(50.0, 200.0), 100.0, 5.0, 0.0);
        assert_eq!(flat.point_a, Vec2::new(50.0, 200.0));
        assert_eq!(flat.point_b, Vec2::new(150.0, 200.0));
        let sloped = Ramp::new(Vec2::new(50.0, 200.0), 100.0, 5.0, 30.0);
        assert_eq!(sloped.point_b, Vec2::new(150.0, 170.0));
        assert_eq!(sloped.local_endpoints(), (Vec2::ZERO, Vec2::new(100.0, -30.0)));
    }
}
