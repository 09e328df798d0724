//! Central system ordering labels to make the per-frame sequence explicit.
//! Stages (high-level):
//! 1. Input (PreUpdate, after Bevy's input collection)
//! 2. Rapier step + writeback (PostUpdate, handled by plugin)
//! 3. SyncFromPhysics (ball screen cache)
//! 4. Respawn (off-screen rule)
//! 5. Rendering (implicit) + frame governor (Last)
use bevy::prelude::*;

#[derive(SystemSet, Debug, Hash, PartialEq, Eq, Clone)]
pub struct InputCaptureSet; // key snapshot + quit requests

#[derive(SystemSet, Debug, Hash, PartialEq, Eq, Clone, Copy)]
pub enum SimulationSet {
    /// Read body transforms back into entity caches.
    SyncFromPhysics,
    /// Off-screen rule; may despawn/spawn the ball.
    Respawn,
}
