const KELVIN_OFFSET: f64 = 273.15;

pub fn kelvin_to_celsius(temp_k: f64) -> f64 {
    temp_k - KELVIN_OFFSET
}

/// Goes through Celsius so that 288.15 K lands on exactly 59 °F.
pub fn kelvin_to_fahrenheit(temp_k: f64) -> f64 {
    kelvin_to_celsius(temp_k) * 9.0 / 5.0 + 32.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn standard_sea_level_is_exact() {
        assert_eq!(kelvin_to_celsius(288.15), 15.0);
        assert_eq!(kelvin_to_fahrenheit(288.15), 59.0);
    }

    #[test]
    fn fixed_points() {
        assert_eq!(kelvin_to_celsius(273.15), 0.0);
        assert_eq!(kelvin_to_fahrenheit(273.15), 32.0);
        assert_relative_eq!(kelvin_to_fahrenheit(233.15), -40.0, epsilon = 1e-9);
        assert_relative_eq!(kelvin_to_celsius(216.65), -56.5, epsilon = 1e-9);
    }
}
