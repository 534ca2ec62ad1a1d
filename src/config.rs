//! Placement settings parsed from environment variables.

use crate::consts::{DEFAULT_CLEARANCE, PLAYGROUND_CLEARANCE};

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("unknown STANDPLAN_PRESET: {0} (expected 'standard' or 'playground')")]
    UnknownPreset(String),
    #[error("invalid {var}: '{value}' ({reason})")]
    InvalidValue { var: &'static str, value: String, reason: &'static str },
}

/// Named clearance presets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Preset {
    #[default]
    Standard,
    /// Denser layouts with a wider safety margin.
    Playground,
}

impl Preset {
    #[must_use]
    pub fn clearance(self) -> f64 {
        match self {
            Self::Standard => DEFAULT_CLEARANCE,
            Self::Playground => PLAYGROUND_CLEARANCE,
        }
    }
}

impl std::str::FromStr for Preset {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "standard" => Ok(Self::Standard),
            "playground" => Ok(Self::Playground),
            other => Err(ConfigError::UnknownPreset(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlacementConfig {
    /// Padding applied around every footprint before collision testing.
    pub clearance: f64,
    /// Box wall-mounted screens into the floor collision set.
    pub include_wall_screens: bool,
    /// Box the four truss support columns into the floor collision set.
    pub include_truss_columns: bool,
}

impl Default for PlacementConfig {
    fn default() -> Self {
        Self::for_preset(Preset::Standard)
    }
}

impl PlacementConfig {
    #[must_use]
    pub fn for_preset(preset: Preset) -> Self {
        Self { clearance: preset.clearance(), include_wall_screens: false, include_truss_columns: true }
    }

    /// Build placement config from environment variables.
    ///
    /// Optional:
    /// - `STANDPLAN_PRESET`: `standard` (default) or `playground`
    /// - `STANDPLAN_COLLISION_CLEARANCE`: overrides the preset clearance
    /// - `STANDPLAN_WALL_SCREENS_COLLIDE`: default `false`
    /// - `STANDPLAN_TRUSS_COLLIDES`: default `true`
    ///
    /// # Errors
    ///
    /// Returns `UnknownPreset` or `InvalidValue` for values that do not parse.
    pub fn from_env() -> Result<Self, ConfigError> {
        let preset = match env_var("STANDPLAN_PRESET") {
            Some(raw) => raw.trim().parse::<Preset>()?,
            None => Preset::default(),
        };
        let mut config = Self::for_preset(preset);

        if let Some(raw) = env_var("STANDPLAN_COLLISION_CLEARANCE") {
            config.clearance = parse_clearance("STANDPLAN_COLLISION_CLEARANCE", &raw)?;
        }
        if let Some(raw) = env_var("STANDPLAN_WALL_SCREENS_COLLIDE") {
            config.include_wall_screens = parse_bool("STANDPLAN_WALL_SCREENS_COLLIDE", &raw)?;
        }
        if let Some(raw) = env_var("STANDPLAN_TRUSS_COLLIDES") {
            config.include_truss_columns = parse_bool("STANDPLAN_TRUSS_COLLIDES", &raw)?;
        }
        Ok(config)
    }
}

fn env_var(key: &str) -> Option<String> {
    match std::env::var(key) {
        Ok(v) if !v.trim().is_empty() => Some(v),
        _ => None,
    }
}

/// Parse a clearance value: a finite, non-negative number.
///
/// # Errors
///
/// Returns `InvalidValue` naming `var` when `raw` is not acceptable.
pub fn parse_clearance(var: &'static str, raw: &str) -> Result<f64, ConfigError> {
    let invalid = |reason| ConfigError::InvalidValue { var, value: raw.to_string(), reason };
    let value = raw.trim().parse::<f64>().map_err(|_| invalid("not a number"))?;
    if !value.is_finite() || value < 0.0 {
        return Err(invalid("must be finite and non-negative"));
    }
    Ok(value)
}

fn parse_bool(var: &'static str, raw: &str) -> Result<bool, ConfigError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::InvalidValue { var, value: raw.to_string(), reason: "expected true or false" }),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
