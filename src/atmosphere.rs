use log::debug;

use crate::layers::{Boundary, LayerSpec, TempRule, STANDARD_LAYERS};
use crate::types::{Atmo, GasProperties, SeaLevel, P0, RHO0, T0};
use crate::units;

// ---------------------------------------------------------------------------
// Layered ISA model (sea level to 85 km)
// ---------------------------------------------------------------------------

/// Layer descriptor paired with the boundary state at its base.
#[derive(Debug, Clone, Copy)]
struct Layer {
    spec: LayerSpec,
    base: Boundary,
}

/// Piecewise standard atmosphere.
///
/// Each layer's base boundary is the previous layer evaluated at its own top,
/// so temperature and pressure are continuous across every transition. The
/// chain is walked once at construction; queries only select a layer and
/// evaluate its closed-form law.
///
/// Altitudes above the table's last top are clamped to it. Negative altitudes
/// extrapolate the first layer unchanged. A NaN altitude is not clamped and
/// yields NaN properties.
///
/// Preconditions (not checked at runtime): `T0 > 0`, `P0 > 0`, `R > 0`,
/// `gamma > 1`, and a non-empty table with strictly ascending tops. Use
/// [`crate::config::ModelConfig`] when parameters come from untrusted input.
#[derive(Debug, Clone)]
pub struct AtmosphereModel {
    sea_level: SeaLevel,
    gas: GasProperties,
    layers: Vec<Layer>,
}

impl Default for AtmosphereModel {
    fn default() -> Self {
        Self::new(T0, RHO0, P0)
    }
}

impl AtmosphereModel {
    /// Standard layer table with custom sea-level reference conditions.
    pub fn new(sea_level_temp: f64, sea_level_density: f64, sea_level_pressure: f64) -> Self {
        let sea_level = SeaLevel {
            temperature: sea_level_temp,
            pressure: sea_level_pressure,
            density: sea_level_density,
        };
        Self::with_layers(sea_level, GasProperties::default(), &STANDARD_LAYERS)
    }

    /// Custom reference state, gas constants and layer table.
    ///
    /// # Panics
    ///
    /// Panics if `table` is empty.
    pub fn with_layers(sea_level: SeaLevel, gas: GasProperties, table: &[LayerSpec]) -> Self {
        assert!(!table.is_empty(), "layer table must not be empty");
        debug_assert!(sea_level.temperature > 0.0 && sea_level.pressure > 0.0);
        debug_assert!(gas.gas_constant > 0.0 && gas.gamma > 1.0);
        debug_assert!(table.windows(2).all(|w| w[0].top < w[1].top));

        let mut base = Boundary {
            altitude: 0.0,
            temperature: sea_level.temperature,
            pressure: sea_level.pressure,
        };
        let mut layers = Vec::with_capacity(table.len());
        for spec in table {
            if let TempRule::TwoSegment { mid, .. } = spec.rule {
                debug_assert!(
                    base.altitude <= mid && mid < spec.top,
                    "split of layer {} must lie inside it",
                    spec.name
                );
            }
            layers.push(Layer { spec: *spec, base });
            debug!(
                "layer {:<12} base {:>8.0} m  T={:.2} K  P={:.4} Pa",
                spec.name, base.altitude, base.temperature, base.pressure
            );
            base = spec.rule.propagate(&base, spec.top, &gas);
        }

        Self { sea_level, gas, layers }
    }

    pub fn sea_level(&self) -> &SeaLevel {
        &self.sea_level
    }

    pub fn gas(&self) -> &GasProperties {
        &self.gas
    }

    /// Altitude above which every query returns the top-of-table value.
    pub fn ceiling(&self) -> f64 {
        self.layers.last().map_or(0.0, |l| l.spec.top)
    }

    /// Base boundary of every layer, sea level first.
    pub fn boundaries(&self) -> impl Iterator<Item = &Boundary> + '_ {
        self.layers.iter().map(|l| &l.base)
    }

    /// Name of the layer an altitude falls in (after clamping).
    pub fn layer_name(&self, altitude: f64) -> &'static str {
        self.select(altitude).1.spec.name
    }

    // -----------------------------------------------------------------------
    // Queries
    // -----------------------------------------------------------------------

    /// Temperature, K.
    pub fn temperature(&self, altitude: f64) -> f64 {
        self.evaluate(altitude).temperature
    }

    /// Pressure, Pa.
    pub fn pressure(&self, altitude: f64) -> f64 {
        self.evaluate(altitude).pressure
    }

    /// Density from the ideal gas law, kg/m^3.
    pub fn density(&self, altitude: f64) -> f64 {
        self.pressure(altitude) / (self.gas.gas_constant * self.temperature(altitude))
    }

    /// Adiabatic speed of sound, m/s.
    pub fn speed_of_sound(&self, altitude: f64) -> f64 {
        (self.gas.gamma * self.gas.gas_constant * self.temperature(altitude)).sqrt()
    }

    /// All properties at once, with a single layer evaluation.
    pub fn at(&self, altitude: f64) -> Atmo {
        let b = self.evaluate(altitude);
        let r = self.gas.gas_constant;
        Atmo {
            altitude,
            temperature: b.temperature,
            pressure: b.pressure,
            density: b.pressure / (r * b.temperature),
            sound_speed: (self.gas.gamma * r * b.temperature).sqrt(),
        }
    }

    pub fn kelvin_to_celsius(&self, temp_k: f64) -> f64 {
        units::kelvin_to_celsius(temp_k)
    }

    pub fn kelvin_to_fahrenheit(&self, temp_k: f64) -> f64 {
        units::kelvin_to_fahrenheit(temp_k)
    }

    // -----------------------------------------------------------------------
    // Layer walk
    // -----------------------------------------------------------------------

    /// Clamp the altitude and pick the first layer whose top exceeds it.
    fn select(&self, altitude: f64) -> (f64, &Layer) {
        let ceiling = self.ceiling();
        let h = if altitude > ceiling { ceiling } else { altitude };
        let idx = self
            .layers
            .iter()
            .position(|l| h < l.spec.top)
            .unwrap_or(self.layers.len() - 1);
        (h, &self.layers[idx])
    }

    fn evaluate(&self, altitude: f64) -> Boundary {
        let (h, layer) = self.select(altitude);
        layer.spec.rule.propagate(&layer.base, h, &self.gas)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
