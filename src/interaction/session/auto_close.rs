//! Timed exit for unattended runs. The delay is `window.autoClose` from the RON config,
//! replaced by `--auto-close <secs>` when that flag is given; `0` or less never closes.

use bevy::prelude::*;

use crate::core::config::{GameConfig, WindowConfig};

/// Countdown to a clean `AppExit::Success`; only present while auto-close is armed.
#[derive(Resource, Debug)]
pub struct AutoCloseTimer {
    timer: Timer,
}

impl AutoCloseTimer {
    pub fn from_window(window: &WindowConfig) -> Option<Self> {
        let secs = window.auto_close;
        (secs.is_finite() && secs > 0.0).then(|| Self {
            timer: Timer::from_seconds(secs, TimerMode::Once),
        })
    }

    pub fn remaining_secs(&self) -> f32 {
        self.timer.remaining_secs()
    }
}

pub struct AutoClosePlugin;

impl Plugin for AutoClosePlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, arm_auto_close)
            .add_systems(Update, tick_auto_close);
    }
}

fn arm_auto_close(mut commands: Commands, cfg: Res<GameConfig>) {
    let Some(timer) = AutoCloseTimer::from_window(&cfg.window) else {
        return;
    };
    info!(seconds = cfg.window.auto_close, "auto-close armed");
    commands.insert_resource(timer);
}

fn tick_auto_close(
    time: Res<Time>,
    timer: Option<ResMut<AutoCloseTimer>>,
    mut exit: EventWriter<AppExit>,
) {
    let Some(mut t) = timer else { return };
    if t.timer.tick(time.delta()).just_finished() {
        info!("auto-close elapsed, requesting app exit");
        exit.write(AppExit::Success);
    }
}
