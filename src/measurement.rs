// measurement.rs
// CSV logging for diffusion records

use std::io::{self, Write};

use crate::simulation::DiffusionRecord;

/// Append-only CSV writer for diffusion measurements. The header is written
/// lazily before the first record so an untouched log stays empty.
pub struct MeasurementLog<W: Write> {
    out: W,
    header_written: bool,
}

impl<W: Write> MeasurementLog<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            header_written: false,
        }
    }

    pub fn append(&mut self, record: &DiffusionRecord) -> io::Result<()> {
        if !self.header_written {
            writeln!(
                self.out,
                "elapsed_s,temperature_K,tracer_radius_px,diffusion_m2_s,msd_px2"
            )?;
            self.header_written = true;
        }
        writeln!(
            self.out,
            "{:.3},{:.2},{:.2},{:.6e},{:.6}",
            record.elapsed_secs,
            record.temperature,
            record.tracer_radius,
            record.diffusion_coefficient,
            record.mean_squared_displacement,
        )
    }

    pub fn header_written(&self) -> bool {
        self.header_written
    }
}
