pub mod camera;
pub mod frame_limiter;
pub mod visuals;

pub use camera::CameraPlugin;
pub use frame_limiter::{FrameLimiter, FrameLimiterPlugin};
pub use visuals::{RampGizmos, VisualsPlugin};
