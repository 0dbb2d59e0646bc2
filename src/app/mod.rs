// app/mod.rs
// Headless run loop: builds the simulation from the optional init file,
// steps it for the requested number of frames, and logs diffusion records

use std::io;
use std::path::Path;

use crate::config::SimConfig;
use crate::init_config::{InitConfig, INIT_CONFIG_PATH};
use crate::measurement::MeasurementLog;
use crate::simulation::Simulation;

const DEFAULT_FRAMES: usize = 600;
/// One record per second of simulated time at the reference frame rate.
const RECORD_INTERVAL: usize = 60;

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let frames = match std::env::args().nth(1) {
        Some(arg) => arg.parse::<usize>()?,
        None => DEFAULT_FRAMES,
    };

    let config = if Path::new(INIT_CONFIG_PATH).exists() {
        InitConfig::load_default()?.into_sim_config()
    } else {
        SimConfig::default()
    };

    let mut sim = Simulation::new(&config)?;
    let mut log = MeasurementLog::new(io::stdout().lock());
    for _ in 0..frames {
        sim.step()?;
        if sim.frame % RECORD_INTERVAL == 0 {
            log.append(&sim.record()?)?;
        }
    }

    let record = sim.record()?;
    eprintln!(
        "{} frames at {:.1} K: D = {:.3e} m^2/s, MSD = {:.1} px^2",
        sim.frame, sim.temperature(), record.diffusion_coefficient, record.mean_squared_displacement,
    );
    Ok(())
}
