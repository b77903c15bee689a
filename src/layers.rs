use crate::types::GasProperties;

// ---------------------------------------------------------------------------
// Layer descriptors
// ---------------------------------------------------------------------------

/// Temperature law inside a single layer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TempRule {
    /// Constant lapse rate, K/m.
    Linear { lapse: f64 },
    /// Temperature frozen at the layer base value.
    Isothermal,
    /// Two linear sub-segments split at `mid` (m).
    TwoSegment { mid: f64, lower: f64, upper: f64 },
}

/// One entry of the layer table. `top` is the exclusive upper bound, m.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayerSpec {
    pub name: &'static str,
    pub top: f64,
    pub rule: TempRule,
}

/// Chained (altitude, temperature, pressure) state at a layer transition.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Boundary {
    pub altitude: f64,    // m
    pub temperature: f64, // K
    pub pressure: f64,    // Pa
}

/// ISA layer table extended through the mesosphere (0-85 km).
/// Queries above the last `top` are clamped to it.
pub const STANDARD_LAYERS: [LayerSpec; 5] = [
    // Troposphere: -6.5 K/km
    LayerSpec {
        name: "troposphere",
        top: 11_000.0,
        rule: TempRule::Linear { lapse: -0.0065 },
    },
    // Tropopause: isothermal 216.65 K
    LayerSpec {
        name: "tropopause",
        top: 20_000.0,
        rule: TempRule::Isothermal,
    },
    // Stratosphere: +1.0 K/km, then +2.8 K/km above 32 km
    LayerSpec {
        name: "stratosphere",
        top: 47_000.0,
        rule: TempRule::TwoSegment {
            mid: 32_000.0,
            lower: 0.001,
            upper: 0.0028,
        },
    },
    // Stratopause: isothermal 270.65 K
    LayerSpec {
        name: "stratopause",
        top: 51_000.0,
        rule: TempRule::Isothermal,
    },
    // Mesosphere: -2.8 K/km, then -2.0 K/km above 71 km
    LayerSpec {
        name: "mesosphere",
        top: 85_000.0,
        rule: TempRule::TwoSegment {
            mid: 71_000.0,
            lower: -0.0028,
            upper: -0.0020,
        },
    },
];

impl TempRule {
    /// Carry `base` up (or down) to altitude `h` under this rule.
    ///
    /// The returned boundary is the temperature and pressure at `h`; feeding
    /// it back in at its own altitude returns it unchanged, which is what
    /// keeps the layer chain continuous.
    pub fn propagate(&self, base: &Boundary, h: f64, gas: &GasProperties) -> Boundary {
        match *self {
            TempRule::Linear { lapse } => gradient_layer(base, h, lapse, gas),
            TempRule::Isothermal => isothermal_layer(base, h, gas),
            TempRule::TwoSegment { mid, lower, upper } => {
                if h <= mid {
                    gradient_layer(base, h, lower, gas)
                } else {
                    let split = gradient_layer(base, mid, lower, gas);
                    gradient_layer(&split, h, upper, gas)
                }
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Layer helpers
// ---------------------------------------------------------------------------

/// Gradient layer: T = T_base + lapse * (h - h_base)
fn gradient_layer(base: &Boundary, h: f64, lapse: f64, gas: &GasProperties) -> Boundary {
    if lapse == 0.0 {
        return isothermal_layer(base, h, gas);
    }
    let t = base.temperature + lapse * (h - base.altitude);
    let exponent = -gas.gravity / (lapse * gas.gas_constant);
    Boundary {
        altitude: h,
        temperature: t,
        pressure: base.pressure * (t / base.temperature).powf(exponent),
    }
}

/// Isothermal layer: T = const, pressure decays exponentially
fn isothermal_layer(base: &Boundary, h: f64, gas: &GasProperties) -> Boundary {
    let scale = -gas.gravity / (gas.gas_constant * base.temperature);
    Boundary {
        altitude: h,
        temperature: base.temperature,
        pressure: base.pressure * (scale * (h - base.altitude)).exp(),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn sea_level() -> Boundary {
        Boundary {
            altitude: 0.0,
            temperature: 288.15,
            pressure: 101_325.0,
        }
    }

    #[test]
    fn table_tops_are_ascending() {
        for pair in STANDARD_LAYERS.windows(2) {
            assert!(pair[0].top < pair[1].top, "{} >= {}", pair[0].name, pair[1].name);
        }
        assert_eq!(STANDARD_LAYERS.last().map(|l| l.top), Some(85_000.0));
    }

    #[test]
    fn propagate_at_base_is_identity() {
        let gas = GasProperties::default();
        let base = sea_level();
        for layer in &STANDARD_LAYERS {
            let b = layer.rule.propagate(&base, base.altitude, &gas);
            assert_eq!(b, base, "{} moved its own base", layer.name);
        }
    }

    #[test]
    fn linear_rule_matches_troposphere_top() {
        let gas = GasProperties::default();
        let b = TempRule::Linear { lapse: -0.0065 }.propagate(&sea_level(), 11_000.0, &gas);
        assert_relative_eq!(b.temperature, 216.65, epsilon = 1e-9);
        assert_relative_eq!(b.pressure, 22_632.0, max_relative = 1e-3);
    }

    #[test]
    fn isothermal_rule_keeps_temperature() {
        let gas = GasProperties::default();
        let b = TempRule::Isothermal.propagate(&sea_level(), 5_000.0, &gas);
        assert_eq!(b.temperature, 288.15);
        assert!(b.pressure < 101_325.0);
    }

    #[test]
    fn zero_lapse_falls_back_to_isothermal() {
        let gas = GasProperties::default();
        let lin = TempRule::Linear { lapse: 0.0 }.propagate(&sea_level(), 3_000.0, &gas);
        let iso = TempRule::Isothermal.propagate(&sea_level(), 3_000.0, &gas);
        assert_eq!(lin, iso);
        assert!(lin.pressure.is_finite());
    }

    #[test]
    fn two_segment_chains_through_split() {
        let gas = GasProperties::default();
        let base = Boundary {
            altitude: 20_000.0,
            temperature: 216.65,
            pressure: 5_475.0,
        };
        let rule = TempRule::TwoSegment {
            mid: 32_000.0,
            lower: 0.001,
            upper: 0.0028,
        };

        let at_mid = rule.propagate(&base, 32_000.0, &gas);
        assert_relative_eq!(at_mid.temperature, 228.65, epsilon = 1e-9);

        let top = rule.propagate(&base, 47_000.0, &gas);
        let chained = TempRule::Linear { lapse: 0.0028 }.propagate(&at_mid, 47_000.0, &gas);
        assert_relative_eq!(top.temperature, 270.65, epsilon = 1e-9);
        assert_eq!(top, chained);
    }
}
