use crate::{SensorLink, decode_line, terminated};
use std::{
    fmt,
    fs::File,
    io::{self, BufRead, BufReader},
    path::Path,
};

#[derive(Debug)]
pub enum ReplayError {
    OpenError(io::Error),
    ReadError(io::Error),
    /// The capture ended before the run had what it needed.
    Exhausted,
}

impl fmt::Display for ReplayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReplayError::OpenError(e) => write!(f, "Failed to open capture: {}", e),
            ReplayError::ReadError(e) => write!(f, "Failed to read capture: {}", e),
            ReplayError::Exhausted => write!(f, "Capture ended before enough samples were read"),
        }
    }
}

impl std::error::Error for ReplayError {}

/// Replays a captured serial log, one line per read.
///
/// Useful for bench runs without the sensor board attached. Lines sent to the
/// sensor board are only logged.
pub struct ReplayLink<R> {
    reader: R,
}

impl ReplayLink<BufReader<File>> {
    pub fn open(path: impl AsRef<Path>) -> Result<Self, ReplayError> {
        let file = File::open(path.as_ref()).map_err(ReplayError::OpenError)?;

        log::info!("Replaying serial capture {}", path.as_ref().display());

        Ok(Self::new(BufReader::new(file)))
    }
}

impl<R: BufRead> ReplayLink<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }
}

impl<R: BufRead> SensorLink for ReplayLink<R> {
    type Error = ReplayError;

    fn read_line(&mut self) -> Result<Option<String>, Self::Error> {
        let mut raw = Vec::new();

        match self.reader.read_until(b'\n', &mut raw) {
            Ok(0) => Err(ReplayError::Exhausted),
            Ok(_) => Ok(decode_line(&raw)),
            Err(e) => Err(ReplayError::ReadError(e)),
        }
    }

    fn send(&mut self, line: &str) -> Result<(), Self::Error> {
        log::info!("Replay link would send: {}", terminated(line).trim_end());
        Ok(())
    }
}
