//! Game configuration
//!
//! Every tunable the session needs travels in one immutable `GameConfig`
//! handed to `Session::new`. Nothing is read from process-wide state, so
//! independent sessions (and tests) never interfere with each other.

use glam::DVec2;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;

/// RGBA color, 8 bits per channel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    #[serde(default = "opaque")]
    pub a: u8,
}

fn opaque() -> u8 {
    255
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }
}

/// Presentation-only line style (never part of the geometry)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Stroke {
    pub color: Color,
    pub thickness: f32,
}

impl Stroke {
    pub const fn new(color: Color, thickness: f32) -> Self {
        Self { color, thickness }
    }
}

/// Reasons a configuration is rejected
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("template needs at least two distinct points to define an axis")]
    TooFewPoints,
    #[error("{0} must be finite")]
    NonFinite(&'static str),
    #[error("scale factor must be positive, got {0}")]
    InvalidScale(f64),
    #[error("win threshold must not be negative, got {0}")]
    NegativeThreshold(f64),
}

/// Everything needed to build a session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Canonical boat outline, in drawing order
    pub template: Vec<DVec2>,
    /// Uniform scale applied to the template for every boat
    pub scale_factor: f64,
    /// Where the player (and preview) boat is placed
    pub player_start: DVec2,
    /// Where the target boat is placed
    pub target_position: DVec2,
    /// Per-axis tolerance for the win check
    pub win_threshold: f64,

    // === Presentation ===
    pub player_stroke: Stroke,
    pub target_stroke: Stroke,
    pub preview_stroke: Stroke,
    pub guide_stroke: Stroke,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new(
            BOAT_TEMPLATE.iter().map(|&(x, y)| DVec2::new(x, y)).collect(),
            BOAT_SCALE_FACTOR,
            DVec2::from(BOAT_STARTING_POS),
            DVec2::from(BOAT_FINAL_POS),
            WIN_THRESHOLD,
        )
    }
}

impl GameConfig {
    /// Build a config from the geometric parameters, with default strokes
    pub fn new(
        template: Vec<DVec2>,
        scale_factor: f64,
        player_start: DVec2,
        target_position: DVec2,
        win_threshold: f64,
    ) -> Self {
        Self {
            template,
            scale_factor,
            player_start,
            target_position,
            win_threshold,
            player_stroke: Stroke::new(MAIN_BOAT_COLOR, MAIN_BOAT_THICKNESS),
            target_stroke: Stroke::new(FINAL_BOAT_COLOR, FINAL_BOAT_THICKNESS),
            preview_stroke: Stroke::new(GHOST_BOAT_COLOR, GHOST_BOAT_THICKNESS),
            guide_stroke: Stroke::new(LINE_COLOR, LINE_THICKNESS),
        }
    }

    /// Parse and validate a JSON config. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Check the geometric parameters
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.template.iter().any(|p| !p.is_finite()) {
            return Err(ConfigError::NonFinite("template"));
        }
        if !self.player_start.is_finite() {
            return Err(ConfigError::NonFinite("player_start"));
        }
        if !self.target_position.is_finite() {
            return Err(ConfigError::NonFinite("target_position"));
        }
        if !self.scale_factor.is_finite() || self.scale_factor <= 0.0 {
            return Err(ConfigError::InvalidScale(self.scale_factor));
        }
        if !self.win_threshold.is_finite() {
            return Err(ConfigError::NonFinite("win_threshold"));
        }
        if self.win_threshold < 0.0 {
            return Err(ConfigError::NegativeThreshold(self.win_threshold));
        }

        // The scramble resamples until it finds a second, different point
        let first = self.template.first().ok_or(ConfigError::TooFewPoints)?;
        if !self.template.iter().any(|p| p != first) {
            return Err(ConfigError::TooFewPoints);
        }

        Ok(())
    }
}
