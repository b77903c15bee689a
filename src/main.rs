use std::env;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Parser, ValueEnum};
use log::debug;

use isa_atmosphere::io::json::{self, Report};
use isa_atmosphere::io::csv;
use isa_atmosphere::{sample_profile, Atmo, AtmosphereModel, ModelConfig};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    Text,
    Json,
    Csv,
}

/// Standard atmosphere properties (ISA, 0-85 km) at a geometric altitude.
#[derive(Debug, Parser)]
#[command(name = "isa", version, about)]
struct Cli {
    /// Geometric altitude in meters. Prompted on stdin when omitted.
    #[arg(allow_negative_numbers = true)]
    altitude: Option<f64>,

    /// TOML file with sea-level and gas constants.
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    #[arg(long, value_enum, default_value_t = Format::Text)]
    format: Format,

    /// Sample a profile instead of a single altitude.
    #[arg(
        long,
        num_args = 3,
        value_names = ["FROM", "TO", "STEP"],
        allow_negative_numbers = true,
        conflicts_with = "altitude"
    )]
    profile: Option<Vec<f64>>,
}

fn main() -> Result<()> {
    // Default log level to "info"
    if env::var("RUST_LOG").is_err() {
        env::set_var("RUST_LOG", "info");
    }
    pretty_env_logger::init();

    let cli = Cli::parse();
    debug!("{:?}", cli);

    let model = match &cli.config {
        Some(path) => ModelConfig::load(path)?
            .build()
            .with_context(|| format!("invalid atmosphere config {}", path.display()))?,
        None => AtmosphereModel::default(),
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();

    if let Some(range) = &cli.profile {
        let &[from, to, step] = range.as_slice() else {
            bail!("--profile takes exactly FROM TO STEP");
        };
        let samples = sample_profile(&model, from, to, step)?;
        match cli.format {
            Format::Text => print_profile(&mut out, &model, &samples)?,
            Format::Json => json::write_profile(&mut out, &samples)?,
            Format::Csv => csv::write_profile(&mut out, &samples)?,
        }
        return Ok(());
    }

    let altitude = match cli.altitude {
        Some(h) => h,
        None => prompt_altitude()?,
    };

    let report = Report::new(&model, altitude);
    match cli.format {
        Format::Text => print_report(&mut out, &report)?,
        Format::Json => json::write_report(&mut out, &report)?,
        Format::Csv => csv::write_profile(&mut out, &[report.atmo])?,
    }

    Ok(())
}

fn prompt_altitude() -> Result<f64> {
    print!("Enter altitude in meters: ");
    io::stdout().flush()?;

    let mut line = String::new();
    io::stdin()
        .lock()
        .read_line(&mut line)
        .context("failed to read altitude from stdin")?;
    let text = line.trim();
    text.parse()
        .with_context(|| format!("'{}' is not a valid altitude", text))
}

fn print_report<W: Write>(w: &mut W, r: &Report) -> io::Result<()> {
    let a = &r.atmo;
    writeln!(w)?;
    writeln!(w, "  At altitude: {} m ({})", a.altitude, r.layer)?;
    writeln!(w, "  ──────────────────────────────────────────────────")?;
    writeln!(
        w,
        "  Temperature:    {:>12.2} K  ({:.2} C, {:.2} F)",
        a.temperature, r.temperature_c, r.temperature_f
    )?;
    writeln!(w, "  Pressure:       {:>12.2} Pa", a.pressure)?;
    writeln!(w, "  Density:        {:>12.6} kg/m^3", a.density)?;
    writeln!(w, "  Speed of sound: {:>12.2} m/s", a.sound_speed)?;
    writeln!(w)?;
    Ok(())
}

fn print_profile<W: Write>(w: &mut W, model: &AtmosphereModel, samples: &[Atmo]) -> io::Result<()> {
    writeln!(
        w,
        "  {:>9}  {:>8}  {:>12}  {:>12}  {:>8}  {:<12}",
        "alt (m)", "T (K)", "P (Pa)", "rho (kg/m3)", "a (m/s)", "layer"
    )?;
    writeln!(w, "  {}", "─".repeat(72))?;
    for s in samples {
        writeln!(
            w,
            "  {:>9.0}  {:>8.2}  {:>12.4}  {:>12.6e}  {:>8.2}  {:<12}",
            s.altitude,
            s.temperature,
            s.pressure,
            s.density,
            s.sound_speed,
            model.layer_name(s.altitude)
        )?;
    }
    Ok(())
}
