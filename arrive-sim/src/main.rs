#![cfg_attr(feature = "precommit-checks", deny(warnings, clippy::pedantic, clippy::dbg_macro))]

use std::fs;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

mod output;
mod run;
mod scenario;

/// Runs a single agent towards a fixed target and writes its trajectory.
#[derive(clap::Parser)]
#[clap(version, about)]
struct Options {
    /// JSON scenario file. Overrides the straight-line scenario built from the other flags.
    #[clap(long)]
    scenario:  Option<PathBuf>,
    /// Initial distance to the target, starting from rest.
    #[clap(long, default_value_t = 100.0)]
    distance:  f32,
    /// Maximum acceleration magnitude.
    #[clap(long, default_value_t = 2.0)]
    max_accel: f32,
    /// Maximum speed magnitude.
    #[clap(long, default_value_t = 50.0)]
    max_speed: f32,
    /// Tick length in seconds.
    #[clap(long, default_value_t = 1.0 / 60.0)]
    dt:        f32,
    /// Simulated duration in seconds.
    #[clap(long, default_value_t = 60.0)]
    duration:  f32,
    /// Trajectory output format.
    #[clap(long, value_enum, default_value_t = output::Format::Csv)]
    format:    output::Format,
    /// Write the trajectory to this file instead of stdout.
    #[clap(long)]
    output:    Option<PathBuf>,
}

fn main() -> Result<()> {
    let options = Options::parse();

    let scenario: scenario::Scenario = match &options.scenario {
        Some(path) => {
            let file = fs::File::open(path)
                .with_context(|| format!("open scenario {}", path.display()))?;
            serde_json::from_reader(io::BufReader::new(file))
                .with_context(|| format!("parse scenario {}", path.display()))?
        }
        None => scenario::Scenario::straight_line(
            options.distance,
            options.max_speed,
            options.max_accel,
            options.dt,
            options.duration,
        )?,
    };

    let trace = run::run(&scenario)?;

    let mut writer: Box<dyn Write> = match &options.output {
        Some(path) => Box::new(BufWriter::new(
            fs::File::create(path).with_context(|| format!("create {}", path.display()))?,
        )),
        None => Box::new(BufWriter::new(io::stdout().lock())),
    };
    output::write(&mut writer, options.format, &trace.records).context("write trajectory")?;
    writer.flush().context("flush trajectory")?;

    let summary = &trace.summary;
    eprintln!(
        "{} ticks, final distance {}, final speed {}, worst brake curve excess {}",
        trace.records.len(),
        summary.final_distance,
        summary.final_speed,
        summary.worst_curve_excess,
    );

    Ok(())
}
