use std::path::{Path, PathBuf};

use anyhow::{bail, Result};
use bevy::prelude::*;
use clap::Parser;

use balls_and_ramps::{primary_window, GameConfig, GamePlugin};

/// Base config followed by an optional untracked local override.
const DEFAULT_CONFIG_LAYERS: [&str; 2] = ["assets/config/game.ron", "assets/config/game.local.ron"];

#[derive(Parser, Debug)]
#[command(about = "A ball rolling onto a ramp (Bevy + Rapier2D)", version)]
struct Args {
    /// RON config file(s), merged in order; later files override earlier keys.
    /// Without this flag the default layers are used when present.
    #[arg(long = "config", value_name = "PATH")]
    configs: Vec<PathBuf>,
    /// Exit after this many seconds (overrides window.autoClose).
    #[arg(long, value_name = "SECS")]
    auto_close: Option<f32>,
}

/// Outcome of config loading, logged once logging is up.
#[derive(Resource, Debug, Default)]
struct ConfigReport {
    used: Vec<String>,
    issues: Vec<String>,
    warnings: Vec<String>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let (mut cfg, used, issues) = if args.configs.is_empty() {
        let present = DEFAULT_CONFIG_LAYERS
            .iter()
            .map(Path::new)
            .filter(|p| p.exists());
        GameConfig::load_layered(present)
    } else {
        // Explicitly requested files must all load.
        let (cfg, used, errors) = GameConfig::load_layered(&args.configs);
        if !errors.is_empty() {
            bail!("could not load --config: {}", errors.join("; "));
        }
        (cfg, used, Vec::new())
    };
    if let Some(secs) = args.auto_close {
        cfg.window.auto_close = secs;
    }
    let report = ConfigReport {
        used,
        issues,
        warnings: cfg.validate(),
    };

    let exit = App::new()
        .insert_resource(cfg.clone())
        .insert_resource(report)
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(primary_window(&cfg)),
            ..default()
        }))
        .add_plugins(GamePlugin)
        .add_systems(Startup, log_config_report)
        .run();

    match exit {
        AppExit::Success => Ok(()),
        AppExit::Error(code) => bail!("app exited with error code {code}"),
    }
}

fn log_config_report(report: Res<ConfigReport>) {
    if report.used.is_empty() {
        warn!("no config files found; using built-in defaults");
    } else {
        info!("config loaded from: {}", report.used.join(", "));
    }
    for issue in &report.issues {
        warn!("config issue: {issue}");
    }
    for w in &report.warnings {
        warn!("config warning: {w}");
    }
}
