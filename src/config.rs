use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, info};
use serde::Deserialize;
use thiserror::Error;

use crate::atmosphere::AtmosphereModel;
use crate::layers::STANDARD_LAYERS;
use crate::types::{GasProperties, SeaLevel, G0, GAMMA, P0, RHO0, R_AIR, T0};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Cannot read config file '{path}'")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Error deserializing atmosphere config")]
    Parse(#[from] toml::de::Error),

    #[error("Parameter '{field}' has non-physical value {value}")]
    NonPhysical { field: &'static str, value: f64 },
}

// ---------------------------------------------------------------------------
// TOML schema
// ---------------------------------------------------------------------------

/// Reference conditions loaded from TOML.
///
/// ```toml
/// [sea_level]
/// temperature = 288.15   # K
/// pressure = 101325.0    # Pa
/// density = 1.225        # kg/m^3
///
/// [gas]
/// gravity = 9.80665
/// gas_constant = 287.058
/// gamma = 1.4
/// ```
///
/// Both tables and every key are optional.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct ModelConfig {
    pub sea_level: SeaLevelConfig,
    pub gas: GasConfig,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct SeaLevelConfig {
    pub temperature: f64,
    pub pressure: f64,
    pub density: f64,
}

impl Default for SeaLevelConfig {
    fn default() -> Self {
        Self {
            temperature: T0,
            pressure: P0,
            density: RHO0,
        }
    }
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct GasConfig {
    pub gravity: f64,
    pub gas_constant: f64,
    pub gamma: f64,
}

impl Default for GasConfig {
    fn default() -> Self {
        Self {
            gravity: G0,
            gas_constant: R_AIR,
            gamma: GAMMA,
        }
    }
}

impl ModelConfig {
    pub fn from_toml(toml: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(toml)?)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        info!("Loading atmosphere config from {}", path.display());
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&text)
    }

    /// Check the physical preconditions of [`AtmosphereModel`].
    pub fn validate(&self) -> Result<(), ConfigError> {
        let checks: [(&'static str, f64, bool); 5] = [
            ("sea_level.temperature", self.sea_level.temperature, self.sea_level.temperature > 0.0),
            ("sea_level.pressure", self.sea_level.pressure, self.sea_level.pressure > 0.0),
            ("gas.gravity", self.gas.gravity, self.gas.gravity > 0.0),
            ("gas.gas_constant", self.gas.gas_constant, self.gas.gas_constant > 0.0),
            ("gas.gamma", self.gas.gamma, self.gas.gamma > 1.0),
        ];
        for (field, value, ok) in checks {
            if !ok || !value.is_finite() {
                return Err(ConfigError::NonPhysical { field, value });
            }
        }
        Ok(())
    }

    pub fn build(&self) -> Result<AtmosphereModel, ConfigError> {
        self.validate()?;
        debug!("Building atmosphere model from {:?}", self);

        let sea_level = SeaLevel {
            temperature: self.sea_level.temperature,
            pressure: self.sea_level.pressure,
            density: self.sea_level.density,
        };
        let gas = GasProperties {
            gravity: self.gas.gravity,
            gas_constant: self.gas.gas_constant,
            gamma: self.gas.gamma,
        };
        Ok(AtmosphereModel::with_layers(sea_level, gas, &STANDARD_LAYERS))
    }
}
