use std::fs::File;
use std::io::Write;
use std::path::Path;

use super::IoError;
use crate::types::Atmo;

/// Write an altitude profile in CSV format.
///
/// Columns: altitude, temperature, pressure, density, sound_speed
pub fn write_profile<W: Write>(writer: &mut W, samples: &[Atmo]) -> Result<(), IoError> {
    let mut wtr = ::csv::Writer::from_writer(writer);
    for s in samples {
        wtr.serialize(s)?;
    }
    wtr.flush()?;
    Ok(())
}

/// Write a profile to a CSV file at the given path.
pub fn write_profile_file(path: &Path, samples: &[Atmo]) -> Result<(), IoError> {
    let mut file = File::create(path)?;
    write_profile(&mut file, samples)
}
