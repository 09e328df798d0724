pub mod config;

pub use config::{
    BallConfig, ColorConfig, DebugConfig, FrameConfig, GameConfig, InputConfig, PhysicsConfig,
    Point2, RampConfig, Rgb, WindowConfig,
};
