use std::io::Write;

use anyhow::Result;

use crate::run::Record;

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum Format {
    /// One header line followed by one line per tick.
    Csv,
    /// A JSON array of tick objects.
    Json,
}

pub fn write(writer: &mut impl Write, format: Format, records: &[Record]) -> Result<()> {
    match format {
        Format::Csv => write_csv(writer, records),
        Format::Json => {
            serde_json::to_writer_pretty(&mut *writer, records)?;
            writeln!(writer)?;
            Ok(())
        }
    }
}

fn write_csv(writer: &mut impl Write, records: &[Record]) -> Result<()> {
    writeln!(writer, "time,x,y,z,vx,vy,vz,distance,speed,phase")?;
    for record in records {
        let Record { time, position: p, velocity: v, distance, speed, phase } = record;
        writeln!(
            writer,
            "{time},{},{},{},{},{},{},{distance},{speed},{phase}",
            p.x, p.y, p.z, v.x, v.y, v.z
        )?;
    }
    Ok(())
}
