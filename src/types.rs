use serde::Serialize;

// ---------------------------------------------------------------------------
// Physical constants
// ---------------------------------------------------------------------------

pub const G0: f64 = 9.80665;        // standard gravity, m/s^2
pub const R_AIR: f64 = 287.058;     // specific gas constant for dry air, J/(kg·K)
pub const GAMMA: f64 = 1.4;         // ratio of specific heats for dry air

pub const T0: f64 = 288.15;         // sea-level temperature, K
pub const P0: f64 = 101_325.0;      // sea-level pressure, Pa
pub const RHO0: f64 = 1.225;        // sea-level density, kg/m^3

// ---------------------------------------------------------------------------
// Reference conditions
// ---------------------------------------------------------------------------

/// Sea-level reference state the layer chain starts from.
///
/// `density` is informational only; the layer math derives density from
/// temperature and pressure.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeaLevel {
    pub temperature: f64, // K
    pub pressure: f64,    // Pa
    pub density: f64,     // kg/m^3
}

impl Default for SeaLevel {
    fn default() -> Self {
        Self {
            temperature: T0,
            pressure: P0,
            density: RHO0,
        }
    }
}

/// Gas and gravity constants, assumed uniform over the whole column.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GasProperties {
    pub gravity: f64,      // m/s^2
    pub gas_constant: f64, // J/(kg·K)
    pub gamma: f64,        // cp/cv
}

impl Default for GasProperties {
    fn default() -> Self {
        Self {
            gravity: G0,
            gas_constant: R_AIR,
            gamma: GAMMA,
        }
    }
}

// ---------------------------------------------------------------------------
// Atmospheric snapshot
// ---------------------------------------------------------------------------

/// Atmospheric properties at a given geometric altitude.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Atmo {
    pub altitude: f64,     // m
    pub temperature: f64,  // K
    pub pressure: f64,     // Pa
    pub density: f64,      // kg/m^3
    pub sound_speed: f64,  // m/s
}
