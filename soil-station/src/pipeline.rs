use crate::{config::Config, error::StationError};
use agronomy::SoilType;
use report::{SummaryRecord, sms_line, write_readings, write_summary};
use sensor_link::SensorLink;
use std::{error::Error, fs, path::PathBuf, thread};

/// What a completed run produced.
#[derive(Debug)]
pub struct RunReport {
    pub summary: SummaryRecord,
    pub readings_path: PathBuf,
    pub summary_path: PathBuf,
    /// The line sent to the sensor board, when SMS was enabled.
    pub sms: Option<String>,
}

/// Runs one acquisition: collect a batch, derive the summary, write both
/// spreadsheets and, if enabled, ask the sensor board to send the summary by SMS.
pub fn run<L>(link: &mut L, soil_type: SoilType, config: &Config) -> Result<RunReport, StationError>
where
    L: SensorLink,
    L::Error: Error + Send + Sync + 'static,
{
    thread::sleep(config.serial.settle());

    let acquisition = config.acquisition.acquisition();
    println!(
        "Connected. Collecting {} readings...\n",
        acquisition.sample_count()
    );
    let batch = acquisition.collect(link)?;

    let dir = &config.output.directory;
    fs::create_dir_all(dir)?;

    let readings_path = write_readings(dir, soil_type, &batch)?;
    println!("\nSaved readings -> {}", readings_path.display());

    let summary = SummaryRecord::from_batch(soil_type, &batch);
    let summary_path = write_summary(dir, &summary)?;
    println!("Saved summary -> {}\n", summary_path.display());

    println!("{}", summary);

    let sms = if config.sms.enabled {
        let line = sms_line(&summary);

        println!("\nSending SMS via the sensor board...");
        link.send(&line).map_err(StationError::link)?;
        thread::sleep(config.sms.delay());
        println!("Done. SMS request sent to the sensor board.");

        Some(line)
    } else {
        None
    };

    Ok(RunReport {
        summary,
        readings_path,
        summary_path,
        sms,
    })
}
