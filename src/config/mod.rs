// SPDX-License-Identifier: MPL-2.0
//! This module handles the spinner configuration read from a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[shape]` - Arrow count, ratios and rotation direction
//! - `[animation]` - Frame rate, revolution rate, enabled and autostart flags
//!
//! Every key is optional; missing keys take the values in [`defaults`].
//! The file is only ever read, never written.
//!
//! # Examples
//!
//! ```no_run
//! use arrow_spinner::config;
//! use arrow_spinner::SpinnerEngine;
//!
//! let (config, warning) = config::load();
//! if let Some(warning) = warning {
//!     eprintln!("{warning}");
//! }
//! let engine = SpinnerEngine::from_config(&config).expect("valid settings");
//! assert!(engine.arrow_count() >= 1);
//! ```

pub mod defaults;
pub mod paths;

pub use defaults::*;

use crate::error::Result;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";

// =============================================================================
// Section Structs
// =============================================================================

/// Arrow shape settings.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct ShapeConfig {
    /// Number of arrows around the ring.
    #[serde(default = "default_arrow_count")]
    pub arrow_count: Option<u32>,

    /// Share of each arrow slot left empty, in `(0, 1)`.
    #[serde(default = "default_gap_ratio")]
    pub gap_ratio: Option<f64>,

    /// Ring thickness as a share of the drawing side.
    #[serde(default = "default_thickness_ratio")]
    pub thickness_ratio: Option<f64>,

    /// Barb overhang as a share of the drawing side.
    #[serde(default = "default_arrow_width_ratio")]
    pub arrow_width_ratio: Option<f64>,

    /// Arrow head length as a share of the sweep.
    #[serde(default = "default_arrow_length_ratio")]
    pub arrow_length_ratio: Option<f64>,

    /// Barb indent as a share of the sweep.
    #[serde(default = "default_barb_indent_ratio")]
    pub barb_indent_ratio: Option<f64>,

    /// Rotation direction.
    #[serde(default = "default_clockwise")]
    pub clockwise: Option<bool>,
}

impl Default for ShapeConfig {
    fn default() -> Self {
        Self {
            arrow_count: default_arrow_count(),
            gap_ratio: default_gap_ratio(),
            thickness_ratio: default_thickness_ratio(),
            arrow_width_ratio: default_arrow_width_ratio(),
            arrow_length_ratio: default_arrow_length_ratio(),
            barb_indent_ratio: default_barb_indent_ratio(),
            clockwise: default_clockwise(),
        }
    }
}

/// Animation clock settings.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct AnimationConfig {
    /// Ticks per second.
    #[serde(default = "default_frame_rate")]
    pub frame_rate: Option<u32>,

    /// Full turns per second.
    #[serde(default = "default_revolutions_per_second")]
    pub revolutions_per_second: Option<f64>,

    /// Colored (enabled) or grayed out (disabled).
    #[serde(default = "default_enabled")]
    pub enabled: Option<bool>,

    /// Start the clock as soon as the engine is built.
    #[serde(default = "default_autostart")]
    pub autostart: Option<bool>,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            frame_rate: default_frame_rate(),
            revolutions_per_second: default_revolutions_per_second(),
            enabled: default_enabled(),
            autostart: default_autostart(),
        }
    }
}

// =============================================================================
// Main Config Struct (Sectioned)
// =============================================================================

/// Spinner configuration with logical sections.
#[derive(Debug, Clone, Deserialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub shape: ShapeConfig,

    #[serde(default)]
    pub animation: AnimationConfig,
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_arrow_count() -> Option<u32> {
    Some(DEFAULT_ARROW_COUNT)
}

fn default_gap_ratio() -> Option<f64> {
    Some(DEFAULT_GAP_RATIO)
}

fn default_thickness_ratio() -> Option<f64> {
    Some(DEFAULT_THICKNESS_RATIO)
}

fn default_arrow_width_ratio() -> Option<f64> {
    Some(DEFAULT_ARROW_WIDTH_RATIO)
}

fn default_arrow_length_ratio() -> Option<f64> {
    Some(DEFAULT_ARROW_LENGTH_RATIO)
}

fn default_barb_indent_ratio() -> Option<f64> {
    Some(DEFAULT_BARB_INDENT_RATIO)
}

fn default_clockwise() -> Option<bool> {
    Some(DEFAULT_CLOCKWISE)
}

fn default_frame_rate() -> Option<u32> {
    Some(DEFAULT_FRAME_RATE)
}

fn default_revolutions_per_second() -> Option<f64> {
    Some(DEFAULT_REVOLUTIONS_PER_SECOND)
}

fn default_enabled() -> Option<bool> {
    Some(DEFAULT_ENABLED)
}

fn default_autostart() -> Option<bool> {
    Some(DEFAULT_AUTOSTART)
}

// =============================================================================
// Load Functions
// =============================================================================

fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::get_config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

/// Loads the configuration from the default path.
///
/// Returns a tuple of (config, optional_warning). A missing file yields the
/// defaults silently; an unreadable or malformed file yields the defaults and
/// a warning describing what went wrong.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = get_config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => return (config, None),
                Err(err) => {
                    tracing::warn!(path = %path.display(), error = %err, "falling back to default settings");
                    return (
                        Config::default(),
                        Some(format!("{}: {}", path.display(), err)),
                    );
                }
            }
        }
    }
    (Config::default(), None)
}

/// Loads configuration from a specific file.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config = toml::from_str(&content)?;
    tracing::debug!(path = %path.display(), "loaded settings");
    Ok(config)
}
