//! Feed configuration.
//!
//! Simulator cadence, random-walk shape and presentation timings, read from
//! `fxdesk.toml` and overridable through `FXDESK_*` environment variables.

use serde::{Deserialize, Serialize};
use std::io::ErrorKind;
use std::path::Path;
use std::time::Duration;
use tracing::debug;

use crate::error::ConfigError;

/// Config file the `fxdesk` binary reads unless told otherwise.
pub const DEFAULT_CONFIG_PATH: &str = "fxdesk.toml";

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Simulator and presentation settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FeedConfig {
    /// Tick timer cadence in milliseconds
    pub tick_interval_ms: u64,

    /// Per-pair probability that a tick moves the rate
    pub tick_probability: f64,

    /// Maximum walk step as a fraction of bid
    pub walk_fraction: f64,

    /// Previous-close offset from seed bid, as a fraction of bid
    pub close_offset_fraction: f64,

    /// Open gap from close, as a fraction of bid
    pub open_gap_fraction: f64,

    /// Session range margin as a fraction of bid
    pub range_fraction: f64,

    /// Scale applied to the session range margin
    pub range_scale: f64,

    /// How long a row flash stays visible, in milliseconds
    pub flash_ms: u64,

    /// Number of bids kept per sparkline
    pub sparkline_capacity: usize,

    /// Fixed RNG seed; entropy when absent
    pub seed: Option<u64>,

    /// Log level
    pub log_level: String,
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            tick_interval_ms: 200,
            tick_probability: 0.08,
            walk_fraction: 0.00012,
            close_offset_fraction: 0.002,
            open_gap_fraction: 0.001,
            range_fraction: 0.008,
            range_scale: 0.4,
            flash_ms: 600,
            sparkline_capacity: 30,
            seed: None,
            log_level: "info".to_string(),
        }
    }
}

impl FeedConfig {
    /// Parses `path` as TOML. Missing fields take their defaults.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io(e.to_string()))?;

        toml::from_str(&content).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Like [`FeedConfig::load`], but a missing file yields the defaults.
    ///
    /// # Errors
    ///
    /// An existing file that cannot be read or parsed is still an error.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        match std::fs::metadata(path) {
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(path = %path.display(), "Config file not found; using defaults");
                Ok(Self::default())
            }
            _ => Self::load(path),
        }
    }

    /// Applies `FXDESK_*` overrides. Unparseable values are ignored.
    pub fn with_env_override(mut self) -> Self {
        if let Some(ms) = env_parse("FXDESK_TICK_INTERVAL_MS") {
            self.tick_interval_ms = ms;
        }

        if let Some(p) = env_parse("FXDESK_TICK_PROBABILITY") {
            self.tick_probability = p;
        }

        if let Some(seed) = env_parse("FXDESK_SEED") {
            self.seed = Some(seed);
        }

        if let Ok(log_level) = std::env::var("FXDESK_LOG_LEVEL") {
            self.log_level = log_level;
        }

        if let Some(ms) = env_parse("FXDESK_FLASH_MS") {
            self.flash_ms = ms;
        }

        self
    }

    /// Checks every field and reports all violations at once.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut errors = Vec::new();

        if self.tick_interval_ms == 0 {
            errors.push("tick_interval_ms must be greater than 0".to_string());
        }

        if !(0.0..=1.0).contains(&self.tick_probability) {
            errors.push(format!(
                "tick_probability {} must be within [0, 1]",
                self.tick_probability
            ));
        }

        for (name, value) in [
            ("walk_fraction", self.walk_fraction),
            ("close_offset_fraction", self.close_offset_fraction),
            ("open_gap_fraction", self.open_gap_fraction),
            ("range_fraction", self.range_fraction),
            ("range_scale", self.range_scale),
        ] {
            if !value.is_finite() || value < 0.0 {
                errors.push(format!("{} must be finite and non-negative, got {}", name, value));
            }
        }

        if self.sparkline_capacity < 2 {
            errors.push(format!(
                "sparkline_capacity must be at least 2, got {}",
                self.sparkline_capacity
            ));
        }

        if !LOG_LEVELS.contains(&self.log_level.to_lowercase().as_str()) {
            errors.push(format!(
                "log_level '{}' is not one of {}",
                self.log_level,
                LOG_LEVELS.join(", ")
            ));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(ConfigError::Validation(errors))
        }
    }

    /// Tick cadence as a `Duration`.
    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }

    /// Flash lifetime as a `Duration`.
    pub fn flash_duration(&self) -> Duration {
        Duration::from_millis(self.flash_ms)
    }
}

fn env_parse<T: std::str::FromStr>(key: &str) -> Option<T> {
    std::env::var(key).ok()?.trim().parse().ok()
}
