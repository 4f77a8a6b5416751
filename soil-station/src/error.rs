use acquisition::AcquisitionError;
use report::ReportError;
use std::{error::Error, fmt, io};
use telemetry::BatchError;

/// Errors that end a station run.
#[derive(Debug)]
pub enum StationError {
    Config(::config::ConfigError),
    /// Opening, reading or writing the sensor link failed.
    Link(Box<dyn Error + Send + Sync>),
    Batch(BatchError),
    Report(ReportError),
    Io(io::Error),
}

impl StationError {
    pub fn link<E: Error + Send + Sync + 'static>(e: E) -> Self {
        StationError::Link(Box::new(e))
    }
}

impl fmt::Display for StationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StationError::Config(e) => write!(f, "Failed to load configuration: {}", e),
            StationError::Link(e) => write!(f, "Sensor link error: {}", e),
            StationError::Batch(e) => write!(f, "Invalid batch: {}", e),
            StationError::Report(e) => write!(f, "{}", e),
            StationError::Io(e) => write!(f, "I/O error: {}", e),
        }
    }
}

impl Error for StationError {}

impl From<::config::ConfigError> for StationError {
    fn from(e: ::config::ConfigError) -> Self {
        StationError::Config(e)
    }
}

impl From<ReportError> for StationError {
    fn from(e: ReportError) -> Self {
        StationError::Report(e)
    }
}

impl From<io::Error> for StationError {
    fn from(e: io::Error) -> Self {
        StationError::Io(e)
    }
}

impl<E: Error + Send + Sync + 'static> From<AcquisitionError<E>> for StationError {
    fn from(e: AcquisitionError<E>) -> Self {
        match e {
            AcquisitionError::Link(e) => StationError::link(e),
            AcquisitionError::Batch(e) => StationError::Batch(e),
        }
    }
}
