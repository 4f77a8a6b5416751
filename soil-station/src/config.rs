use serde::{Deserialize, Serialize};
use std::{
    path::{Path, PathBuf},
    time::Duration,
};

/// Configuration file looked up when no explicit path is given.
pub const DEFAULT_CONFIG_PATH: &str = "soil-station/config";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub serial: SerialConfig,
    pub acquisition: AcquisitionConfig,
    pub output: OutputConfig,
    pub sms: SmsConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SerialConfig {
    pub port: String,
    pub baud_rate: u32,
    pub timeout_ms: u64,
    pub settle_ms: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AcquisitionConfig {
    pub sample_count: usize,
    pub empty_read_backoff_ms: u64,
    pub sample_interval_ms: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    pub directory: PathBuf,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SmsConfig {
    pub enabled: bool,
    pub delay_ms: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            serial: SerialConfig {
                port: "COM5".to_string(),
                baud_rate: 9600,
                timeout_ms: 2000,
                settle_ms: 2000,
            },
            acquisition: AcquisitionConfig {
                sample_count: telemetry::BATCH_SIZE,
                empty_read_backoff_ms: 500,
                sample_interval_ms: 500,
            },
            output: OutputConfig {
                directory: PathBuf::from("."),
            },
            sms: SmsConfig {
                enabled: false,
                delay_ms: 2000,
            },
        }
    }
}

impl Config {
    /// Load configuration: built-in defaults, then the TOML file, then
    /// `SOIL_` environment variables (`SOIL_SERIAL__PORT=/dev/ttyUSB0`).
    ///
    /// An explicit `path` must exist; the default file is optional.
    pub fn load(path: Option<&Path>) -> Result<Self, config::ConfigError> {
        let _ = dotenvy::dotenv();

        let file = match path {
            Some(path) => config::File::from(path),
            None => config::File::with_name(DEFAULT_CONFIG_PATH).required(false),
        };

        let settings = config::Config::builder()
            .add_source(config::Config::try_from(&Config::default())?)
            .add_source(file)
            .add_source(
                config::Environment::with_prefix("SOIL")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings.try_deserialize()
    }
}

impl SerialConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }

    /// Time the board needs after the port opens before it sends data.
    pub fn settle(&self) -> Duration {
        Duration::from_millis(self.settle_ms)
    }
}

impl AcquisitionConfig {
    pub fn acquisition(&self) -> acquisition::Acquisition {
        acquisition::Acquisition::new(
            self.sample_count,
            Duration::from_millis(self.empty_read_backoff_ms),
            Duration::from_millis(self.sample_interval_ms),
        )
    }
}

impl SmsConfig {
    pub fn delay(&self) -> Duration {
        Duration::from_millis(self.delay_ms)
    }
}
