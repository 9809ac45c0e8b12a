//! Shared configuration for the lazy brush
//!
//! This crate is the single source of truth for the brush tuning values
//! (catch radius, enabled flag, friction, starting point). Values can be
//! loaded from JSON and overridden from the environment:
//!
//! - `LAZY_BRUSH_RADIUS` - catch radius, non-negative number
//! - `LAZY_BRUSH_ENABLED` - `true`/`false`/`1`/`0`/`on`/`off`
//! - `LAZY_BRUSH_FRICTION` - number, or `none` to clear

use serde::{Deserialize, Serialize};

#[cfg(feature = "bevy")]
use bevy::prelude::Resource;

/// Default catch radius in coordinate units
pub const DEFAULT_RADIUS: f64 = 30.0;

/// The catch circle is opt-in
pub const DEFAULT_ENABLED: bool = false;

pub const ENV_RADIUS: &str = "LAZY_BRUSH_RADIUS";
pub const ENV_ENABLED: &str = "LAZY_BRUSH_ENABLED";
pub const ENV_FRICTION: &str = "LAZY_BRUSH_FRICTION";

/// Errors from loading configuration
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {key}: {value:?}")]
    InvalidValue { key: &'static str, value: String },

    #[error("Failed to parse config: {0}")]
    Json(#[from] serde_json::Error),
}

/// Brush configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "bevy", derive(Resource))]
#[serde(default)]
pub struct BrushConfig {
    /// Catch radius
    pub radius: f64,
    /// Whether the catch circle constraint is active
    pub enabled: bool,
    /// Default friction for strokes, expected in (0, 1)
    pub friction: Option<f64>,
    /// Starting position of pointer and brush
    pub initial_point: [f64; 2],
}

impl Default for BrushConfig {
    fn default() -> Self {
        Self {
            radius: DEFAULT_RADIUS,
            enabled: DEFAULT_ENABLED,
            friction: None,
            initial_point: [0.0, 0.0],
        }
    }
}

impl BrushConfig {
    /// Create a config with the given radius and enabled flag
    pub fn new(radius: f64, enabled: bool) -> Self {
        Self {
            radius,
            enabled,
            ..Default::default()
        }
    }

    /// Parse a config from JSON, unset fields take their defaults
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serialize to pretty-printed JSON
    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Apply overrides from the process environment
    pub fn with_env_overrides(self) -> Result<Self, ConfigError> {
        self.apply_overrides(|key| std::env::var(key).ok())
    }

    /// Apply overrides from an arbitrary key lookup
    pub fn apply_overrides<F>(mut self, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(value) = lookup(ENV_RADIUS) {
            self.radius = match value.trim().parse::<f64>() {
                Ok(r) if r.is_finite() && r >= 0.0 => r,
                _ => return Err(invalid(ENV_RADIUS, value)),
            };
        }

        if let Some(value) = lookup(ENV_ENABLED) {
            self.enabled = match value.trim().to_ascii_lowercase().as_str() {
                "1" | "true" | "on" | "yes" => true,
                "0" | "false" | "off" | "no" => false,
                _ => return Err(invalid(ENV_ENABLED, value)),
            };
        }

        if let Some(value) = lookup(ENV_FRICTION) {
            let trimmed = value.trim();
            self.friction = if trimmed.eq_ignore_ascii_case("none") || trimmed.is_empty() {
                None
            } else {
                match trimmed.parse::<f64>() {
                    Ok(f) if f.is_finite() => Some(f),
                    _ => return Err(invalid(ENV_FRICTION, value)),
                }
            };
        }

        Ok(self)
    }
}

fn invalid(key: &'static str, value: String) -> ConfigError {
    ConfigError::InvalidValue { key, value }
}
