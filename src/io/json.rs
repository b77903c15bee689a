use std::fs::File;
use std::io::Write;
use std::path::Path;

use serde::Serialize;

use super::IoError;
use crate::atmosphere::AtmosphereModel;
use crate::types::Atmo;

/// Altitude report with temperatures in all three scales.
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub layer: &'static str,
    #[serde(flatten)]
    pub atmo: Atmo,
    pub temperature_c: f64,
    pub temperature_f: f64,
}

impl Report {
    pub fn new(model: &AtmosphereModel, altitude: f64) -> Self {
        let atmo = model.at(altitude);
        Self {
            layer: model.layer_name(altitude),
            atmo,
            temperature_c: model.kelvin_to_celsius(atmo.temperature),
            temperature_f: model.kelvin_to_fahrenheit(atmo.temperature),
        }
    }
}

/// Write a single-altitude report as pretty JSON.
pub fn write_report<W: Write>(writer: &mut W, report: &Report) -> Result<(), IoError> {
    serde_json::to_writer_pretty(&mut *writer, report)?;
    writeln!(writer)?;
    Ok(())
}

/// Write a profile as a pretty JSON array.
pub fn write_profile<W: Write>(writer: &mut W, samples: &[Atmo]) -> Result<(), IoError> {
    serde_json::to_writer_pretty(&mut *writer, samples)?;
    writeln!(writer)?;
    Ok(())
}

/// Write a profile JSON array to a file.
pub fn write_profile_file(path: &Path, samples: &[Atmo]) -> Result<(), IoError> {
    let mut file = File::create(path)?;
    write_profile(&mut file, samples)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn report_json_is_flat() {
        let isa = AtmosphereModel::default();
        let report = Report::new(&isa, 0.0);

        let mut buf = Vec::new();
        write_report(&mut buf, &report).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&buf).unwrap();

        assert_eq!(value["layer"], "troposphere");
        assert_eq!(value["temperature"], 288.15);
        assert_eq!(value["pressure"], 101_325.0);
        assert_eq!(value["temperature_c"], 15.0);
        assert_eq!(value["temperature_f"], 59.0);
    }

    #[test]
    fn profile_json_is_array() {
        let isa = AtmosphereModel::default();
        let samples = [isa.at(0.0), isa.at(11_000.0)];

        let mut buf = Vec::new();
        write_profile(&mut buf, &samples).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&buf).unwrap();

        let arr = value.as_array().unwrap();
        assert_eq!(arr.len(), 2);
        assert_eq!(arr[1]["altitude"], 11_000.0);
    }
}
