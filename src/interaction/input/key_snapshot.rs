use bevy::input::keyboard::KeyboardInput;
use bevy::input::InputSystem;
use bevy::prelude::*;

use crate::core::system::system_order::InputCaptureSet;

/// Keys held down as of the most recent key-down/key-up event.
///
/// Refreshed only when a keyboard event arrives, so between events it may lag
/// `ButtonInput`. Nothing in the scene reads it yet.
#[derive(Resource, Debug, Default, Clone, PartialEq)]
pub struct KeySnapshot {
    pressed: Vec<KeyCode>,
}

impl KeySnapshot {
    pub fn is_pressed(&self, key: KeyCode) -> bool {
        self.pressed.contains(&key)
    }
    pub fn pressed(&self) -> &[KeyCode] {
        &self.pressed
    }
    pub fn is_empty(&self) -> bool {
        self.pressed.is_empty()
    }
}

pub struct InputCapturePlugin;

impl Plugin for InputCapturePlugin {
    fn build(&self, app: &mut App) {
        // Both are no-ops when Bevy's InputPlugin already registered them.
        app.add_event::<KeyboardInput>()
            .init_resource::<ButtonInput<KeyCode>>()
            .init_resource::<KeySnapshot>()
            .configure_sets(PreUpdate, InputCaptureSet.after(InputSystem))
            .add_systems(PreUpdate, capture_key_snapshot.in_set(InputCaptureSet));
    }
}

pub fn capture_key_snapshot(
    mut events: EventReader<KeyboardInput>,
    keys: Res<ButtonInput<KeyCode>>,
    mut snapshot: ResMut<KeySnapshot>,
) {
    if events.read().count() == 0 {
        return;
    }
    snapshot.pressed = keys.get_pressed().copied().collect();
    debug!("key snapshot refreshed: {:?}", snapshot.pressed);
}
