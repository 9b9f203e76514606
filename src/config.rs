use clap::{ArgAction, Parser};
use log::LevelFilter;
use std::path::PathBuf;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use crate::error::ConfigError;
use crate::shape::{ShapeConfig, MARGIN};
use crate::simulation::SimulationConfig;
use crate::world_gen::GenerationConfig;

/// Nested bouncing polygon trails.
#[derive(Parser, Debug, Clone, PartialEq)]
#[command(name = "mystify", version, about)]
pub struct Options {
    /// How many shapes to draw.
    #[arg(long, default_value_t = 2)]
    pub polygons: u32,

    /// Upper bound (exclusive) on a vertex's step size in pixels. Sane values are 6-16.
    #[arg(long, default_value_t = 10, allow_negative_numbers = true)]
    pub speed: i32,

    /// Vertices per shape. Sane values are 3-6.
    #[arg(long, default_value_t = 4)]
    pub vertices: usize,

    /// Trail depth of each shape. Sane values are 1-25.
    #[arg(long, default_value_t = 12)]
    pub layers: usize,

    /// Whether trails should fade to black ("true", "false", "1" or "0").
    #[arg(long, default_value = "false", action = ArgAction::Set, value_parser = parse_fade)]
    pub fade: bool,

    /// Initial window width (or the viewport width when headless).
    #[arg(long, default_value_t = 1600)]
    pub width: u32,

    /// Initial window height (or the viewport height when headless).
    #[arg(long, default_value_t = 800)]
    pub height: u32,

    /// Cover the whole screen.
    #[arg(long)]
    pub fullscreen: bool,

    /// Delay between ticks in milliseconds.
    #[arg(long, default_value_t = 20)]
    pub tick_ms: u64,

    /// Seed for the random source. Defaults to the current time.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Stop after this many ticks.
    #[arg(long)]
    pub ticks: Option<u64>,

    #[arg(long, default_value_t = LevelFilter::Info)]
    pub log_level: LevelFilter,

    /// Also write the log to this file.
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

pub fn parse_fade(value: &str) -> Result<bool, String> {
    match value.to_ascii_lowercase().as_str() {
        "true" | "1" => Ok(true),
        "false" | "0" => Ok(false),
        other => Err(format!(
            "expected one of true, false, 1, 0 but got {:?}",
            other
        )),
    }
}

/// Everything the simulation needs, checked once at startup.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Settings {
    pub generation: GenerationConfig,
    pub simulation: SimulationConfig,
    pub width: u32,
    pub height: u32,
    pub fullscreen: bool,
    pub fade: bool,
    pub ticks: Option<u64>,
}

impl Options {
    pub fn validate(&self) -> Result<Settings, ConfigError> {
        if self.polygons < 1 {
            return Err(ConfigError::TooFewPolygons(self.polygons));
        }
        let shape = ShapeConfig::new(self.vertices, self.layers, self.speed)?;
        if self.tick_ms < 1 {
            return Err(ConfigError::TickIntervalTooShort(self.tick_ms));
        }
        let min = 2 * MARGIN as u32;
        if self.width <= min || self.height <= min {
            return Err(ConfigError::ViewportTooSmall {
                width: self.width,
                height: self.height,
                min,
            });
        }
        let seed = self.seed.unwrap_or_else(time_seed);
        Ok(Settings {
            generation: GenerationConfig {
                shape,
                polygons: self.polygons,
                seed,
            },
            simulation: SimulationConfig {
                tick_interval: Duration::from_millis(self.tick_ms),
            },
            width: self.width,
            height: self.height,
            fullscreen: self.fullscreen,
            fade: self.fade,
            ticks: self.ticks,
        })
    }
}

fn time_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_nanos() as u64)
        .unwrap_or(0xcafef00dd15ea5e5)
}
