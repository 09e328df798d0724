// Quit handling. Window close is Bevy's job (WindowPlugin closes and exits when the last
// window goes away); this adds the Escape binding and a log line when an exit is pending.
// Exit requests are only acted on between updates, so the current frame always finishes.

use bevy::prelude::*;

use crate::core::config::GameConfig;
use crate::core::system::system_order::InputCaptureSet;

pub struct QuitPlugin;

impl Plugin for QuitPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<ButtonInput<KeyCode>>()
            .add_systems(PreUpdate, exit_on_escape.in_set(InputCaptureSet))
            .add_systems(Last, log_exit_requests);
    }
}

/// Sends an AppExit event when Escape is pressed (if enabled in config).
pub fn exit_on_escape(
    keys: Res<ButtonInput<KeyCode>>,
    cfg: Res<GameConfig>,
    mut exit: EventWriter<AppExit>,
) {
    if cfg.input.quit_on_escape && keys.just_pressed(KeyCode::Escape) {
        info!("Escape pressed, requesting app exit");
        exit.write(AppExit::Success);
    }
}

fn log_exit_requests(mut exits: EventReader<AppExit>) {
    for ev in exits.read() {
        info!("exit requested ({ev:?}); frame complete, shutting down");
    }
}
