//! Frame-rate governor: caps the main loop at `frame.fps` iterations per second by
//! sleeping at the end of each update until the next frame deadline.
//!
//! Physics does not depend on this: every update advances the fixed physics step, so a
//! slower or faster loop only changes how fast the simulation plays back, not its result.

use std::time::{Duration, Instant};

use bevy::prelude::*;

use crate::core::config::GameConfig;

#[derive(Resource, Debug, Clone)]
pub struct FrameLimiter {
    period: Option<Duration>,
    last_frame: Option<Instant>,
}

impl FrameLimiter {
    /// `fps <= 0` (or non-finite) disables the cap.
    pub fn from_fps(fps: f32) -> Self {
        let period = (fps.is_finite() && fps > 0.0).then(|| Duration::from_secs_f32(1.0 / fps));
        Self { period, last_frame: None }
    }

    pub fn period(&self) -> Option<Duration> {
        self.period
    }

    /// How long to sleep at `now` so consecutive frames are at least one period apart.
    pub fn remaining(&self, now: Instant) -> Option<Duration> {
        let period = self.period?;
        let last = self.last_frame?;
        let elapsed = now.saturating_duration_since(last);
        period.checked_sub(elapsed).filter(|d| !d.is_zero())
    }

    pub fn mark_frame(&mut self, at: Instant) {
        self.last_frame = Some(at);
    }
}

impl FromWorld for FrameLimiter {
    fn from_world(world: &mut World) -> Self {
        let fps = world
            .get_resource::<GameConfig>()
            .map(|c| c.frame.fps)
            .unwrap_or(60.0);
        Self::from_fps(fps)
    }
}

pub struct FrameLimiterPlugin;

impl Plugin for FrameLimiterPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<FrameLimiter>()
            .add_systems(Last, limit_frame_rate);
    }
}

fn limit_frame_rate(mut limiter: ResMut<FrameLimiter>) {
    if let Some(wait) = limiter.remaining(Instant::now()) {
        std::thread::sleep(wait);
    }
    limiter.mark_frame(Instant::now());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sixty_fps_period() {
        let limiter = FrameLimiter::from_fps(60.0);
        let period = limiter.period().expect("cap enabled");
        assert!((period.as_secs_f64() - 1.0 / 60.0).abs() < 1e-6);
    }

    #[test]
    fn zero_or_negative_fps_disables_cap() {
        for fps in [0.0, -5.0, f32::NAN] {
            let mut limiter = FrameLimiter::from_fps(fps);
            let now = Instant::now();
            limiter.mark_frame(now);
            assert!(limiter.period().is_none());
            assert!(limiter.remaining(now).is_none());
        }
    }

    #[test]
    fn first_frame_never_waits() {
        let limiter = FrameLimiter::from_fps(60.0);
        assert!(limiter.remaining(Instant::now()).is_none());
    }

    #[test]
    fn waits_only_for_the_unused_part_of_the_period() {
        let mut limiter = FrameLimiter::from_fps(50.0); // 20ms period
        let start = Instant::now();
        limiter.mark_frame(start);
        let wait = limiter
            .remaining(start + Duration::from_millis(5))
            .expect("should wait");
        assert!(wait > Duration::from_millis(14) && wait < Duration::from_millis(16), "{wait:?}");
        // Frame overran the budget: no sleep.
        assert!(limiter.remaining(start + Duration::from_millis(25)).is_none());
    }
}
