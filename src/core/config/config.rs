use bevy::prelude::*;
use serde::Deserialize;
use std::{fs, path::Path};

/// Plain (x, y) pair as written in RON; converted to `Vec2` at use sites.
#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Default)]
#[serde(default)]
pub struct Point2 {
    pub x: f32,
    pub y: f32,
}
impl Point2 {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}
impl From<Point2> for Vec2 {
    fn from(p: Point2) -> Self {
        Vec2::new(p.x, p.y)
    }
}

/// sRGB triple in 0..1.
#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Default)]
#[serde(default)]
pub struct Rgb {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}
impl Rgb {
    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }
}
impl From<Rgb> for Color {
    fn from(c: Rgb) -> Self {
        Color::srgb(c.r, c.g, c.b)
    }
}

#[derive(Debug, Deserialize, Resource, Clone, PartialEq)]
#[serde(default)]
pub struct WindowConfig {
    pub width: f32,
    pub height: f32,
    pub title: String,
    pub centered: bool,
    #[serde(rename = "autoClose")]
    pub auto_close: f32,
}
impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 600.0,
            height: 800.0,
            title: "Balls and Ramps".into(),
            centered: true,
            auto_close: 0.0,
        }
    }
}

/// Frame governor. `fps <= 0` leaves the loop uncapped.
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct FrameConfig {
    pub fps: f32,
}
impl Default for FrameConfig {
    fn default() -> Self {
        Self { fps: 60.0 }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct PhysicsConfig {
    pub gravity: Point2,
    /// Simulated seconds advanced per frame, regardless of wall-clock frame time.
    pub fixed_dt: f32,
    pub substeps: usize,
}
impl Default for PhysicsConfig {
    fn default() -> Self {
        Self {
            gravity: Point2::new(0.0, -400.0),
            fixed_dt: 1.0 / 50.0,
            substeps: 1,
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct BallConfig {
    pub radius: f32,
    pub mass: f32,
    pub spawn: Point2,
    pub friction: f32,
    pub restitution: f32,
}
impl Default for BallConfig {
    fn default() -> Self {
        Self {
            radius: 14.0,
            mass: 1.0,
            spawn: Point2::new(100.0, 700.0),
            friction: 0.5,
            restitution: 0.0,
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct RampConfig {
    pub anchor: Point2,
    pub length: f32,
    pub thickness: f32,
    /// Vertical fall from the anchor end to the far end (0 = flat).
    pub drop: f32,
    pub friction: f32,
}
impl Default for RampConfig {
    fn default() -> Self {
        Self {
            anchor: Point2::new(50.0, 200.0),
            length: 100.0,
            thickness: 5.0,
            drop: 0.0,
            friction: 0.5,
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct ColorConfig {
    pub background: Rgb,
    pub ball: Rgb,
    pub ramp: Rgb,
}
impl Default for ColorConfig {
    fn default() -> Self {
        Self {
            background: Rgb::new(1.0, 1.0, 1.0),
            ball: Rgb::new(0.0, 0.0, 1.0),
            ramp: Rgb::new(0.0, 0.0, 0.0),
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct InputConfig {
    pub quit_on_escape: bool,
}
impl Default for InputConfig {
    fn default() -> Self {
        Self { quit_on_escape: true }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq, Default)]
#[serde(default)]
pub struct DebugConfig {
    pub rapier_debug: bool,
    /// Seconds between periodic simulation log lines; 0 disables.
    pub log_interval: f32,
}

#[derive(Debug, Deserialize, Resource, Clone, PartialEq, Default)]
#[serde(default)]
pub struct GameConfig {
    pub window: WindowConfig,
    pub frame: FrameConfig,
    pub physics: PhysicsConfig,
    pub ball: BallConfig,
    pub ramp: RampConfig,
    pub colors: ColorConfig,
    pub input: InputConfig,
    pub debug: DebugConfig,
}

impl GameConfig {
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, String> {
        let data = fs::read_to_string(&path).map_err(|e| format!("read config: {e}"))?;
        ron::from_str(&data).map_err(|e| format!("parse RON: {e}"))
    }
    pub fn load_or_default(path: impl AsRef<Path>) -> (Self, Option<String>) {
        match Self::load_from_file(&path) {
            Ok(cfg) => (cfg, None),
            Err(e) => (Self::default(), Some(e)),
        }
    }
    /// Merge every readable file in order (later keys win) and deserialize the result.
    /// Returns the config, the paths actually used, and any read/parse errors encountered.
    pub fn load_layered<P, I>(paths: I) -> (Self, Vec<String>, Vec<String>)
    where
        P: AsRef<Path>,
        I: IntoIterator<Item = P>,
    {
        use ron::value::Value;
        let mut merged: Option<Value> = None;
        let mut used = Vec::new();
        let mut errors = Vec::new();
        fn merge_value(base: &mut Value, overlay: Value) {
            match (base, overlay) {
                (Value::Map(bm), Value::Map(om)) => {
                    for (k, v) in om.into_iter() {
                        if let Some((_, ev)) = bm.iter_mut().find(|(ek, _)| **ek == k) {
                            merge_value(ev, v);
                            continue;
                        }
                        bm.insert(k, v);
                    }
                }
                (b, o) => *b = o,
            }
        }
        for p in paths {
            let path_ref = p.as_ref();
            match fs::read_to_string(path_ref) {
                Ok(txt) => match ron::from_str::<Value>(&txt) {
                    Ok(val) => {
                        match &mut merged {
                            Some(cur) => merge_value(cur, val),
                            None => merged = Some(val),
                        }
                        used.push(path_ref.as_os_str().to_string_lossy().to_string());
                    }
                    Err(e) => errors.push(format!("{}: parse error: {e}", path_ref.display())),
                },
                Err(e) => errors.push(format!("{}: read error: {e}", path_ref.display())),
            }
        }
        let Some(val) = merged else {
            return (GameConfig::default(), used, errors);
        };
        match val.into_rust::<GameConfig>() {
            Ok(cfg) => (cfg, used, errors),
            Err(e) => {
                errors.push(format!(
                    "failed to deserialize merged config; using defaults: {e}"
                ));
                (GameConfig::default(), used, errors)
            }
        }
    }
    pub fn validate(&self) -> Vec<String> {
        let mut w = Vec::new();
        if self.window.width <= 0.0 || self.window.height <= 0.0 {
            w.push("window dimensions must be > 0".into());
        }
        if self.window.auto_close < 0.0 {
            w.push(format!(
                "window.autoClose {} negative -> treated as disabled (should be >= 0)",
                self.window.auto_close
            ));
        } else if self.window.auto_close > 0.0 && self.window.auto_close < 0.01 {
            w.push(format!(
                "window.autoClose {} very small; closes almost immediately",
                self.window.auto_close
            ));
        }
        if self.frame.fps < 0.0 {
            w.push(format!("frame.fps {} negative -> frame cap disabled", self.frame.fps));
        }
        if self.physics.fixed_dt <= 0.0 {
            w.push(format!(
                "physics.fixed_dt {} must be > 0; simulation will not advance",
                self.physics.fixed_dt
            ));
        } else if self.physics.fixed_dt > 0.1 {
            w.push(format!(
                "physics.fixed_dt {} very coarse; tunnelling through the ramp likely",
                self.physics.fixed_dt
            ));
        }
        if self.physics.substeps == 0 {
            w.push("physics.substeps is 0; use at least 1".into());
        }
        if Vec2::from(self.physics.gravity).length() < 1e-4 {
            w.push("physics.gravity magnitude near zero; ball will float at spawn".into());
        }
        if self.physics.gravity.y > 0.0 {
            w.push(format!(
                "physics.gravity.y is positive ({}); physics space is y-up so the ball will rise",
                self.physics.gravity.y
            ));
        }
        if self.ball.radius <= 0.0 {
            w.push("ball.radius must be > 0".into());
        }
        if self.ball.mass <= 0.0 {
            w.push("ball.mass must be > 0".into());
        }
        if self.ball.friction < 0.0 || self.ramp.friction < 0.0 {
            w.push("friction coefficients must be >= 0".into());
        }
        if !(0.0..=1.0).contains(&self.ball.restitution) {
            w.push(format!(
                "ball.restitution {} outside 0..1",
                self.ball.restitution
            ));
        }
        let spawn = self.ball.spawn;
        if spawn.x < 0.0
            || spawn.x > self.window.width
            || spawn.y < 0.0
            || spawn.y > self.window.height
        {
            w.push(format!(
                "ball.spawn ({}, {}) lies outside the {}x{} screen; the ball will respawn every frame",
                spawn.x, spawn.y, self.window.width, self.window.height
            ));
        }
        if self.ramp.length <= 0.0 {
            w.push("ramp.length must be > 0".into());
        }
        if self.ramp.thickness <= 0.0 {
            w.push("ramp.thickness must be > 0".into());
        }
        if self.debug.log_interval < 0.0 {
            w.push("debug.log_interval negative -> periodic logging disabled".into());
        }
        w
    }
}
