use agronomy::SoilType;
use clap::Parser;
use sensor_link::{replay::ReplayLink, serial::SerialSensorLink};
use soil_station::{StationError, config::Config, prompt_soil_type};
use std::{io, path::PathBuf};

/// Soil Station
#[derive(Parser, Debug)]
#[command(
    version,
    about = "Sample a soil sensor board over serial and recommend crops",
    long_about = None
)]
struct Args {
    /// Soil type (sand / loamy / clay). Asked interactively when omitted.
    #[arg(short, long)]
    soil: Option<String>,

    /// Send the summary back to the sensor board as an SMS request
    #[arg(long)]
    sms: bool,

    /// Configuration file (defaults to soil-station/config.toml if present)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Serial port, overriding the configured one
    #[arg(short, long)]
    port: Option<String>,

    /// Replay a captured serial log instead of opening the port
    #[arg(long, conflicts_with = "port")]
    replay: Option<PathBuf>,
}

fn main() {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let args = Args::parse();

    if let Err(err) = station(args) {
        log::error!("{}", err);
        std::process::exit(1);
    }
}

fn station(args: Args) -> Result<(), StationError> {
    let mut config = Config::load(args.config.as_deref())?;

    if let Some(port) = args.port {
        config.serial.port = port;
    }
    if args.sms {
        config.sms.enabled = true;
    }

    let soil_type = match args.soil {
        Some(soil) => SoilType::from_input(&soil),
        None => prompt_soil_type(&mut io::stdin().lock(), &mut io::stdout())?,
    };
    log::info!("Soil type: {}", soil_type);

    match args.replay {
        Some(path) => {
            let mut link = ReplayLink::open(&path).map_err(StationError::link)?;
            soil_station::run(&mut link, soil_type, &config)?;
        }
        None => {
            println!("Opening serial port {} ...", config.serial.port);
            let mut link = SerialSensorLink::open(
                &config.serial.port,
                config.serial.baud_rate,
                config.serial.timeout(),
            )
            .map_err(StationError::link)?;
            soil_station::run(&mut link, soil_type, &config)?;
        }
    }

    Ok(())
}
