use crate::Reading;
use chrono::NaiveDateTime;

/// Format used when a sample timestamp is rendered as text.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// An accepted sensor reading, stamped with the local time it was received.
#[derive(Debug, Clone, PartialEq)]
pub struct Sample {
    pub timestamp: NaiveDateTime,
    pub soil_moisture: f64,
    pub temperature: f64,
    pub humidity: f64,
}

impl Sample {
    pub fn new(timestamp: NaiveDateTime, reading: Reading) -> Self {
        Self {
            timestamp,
            soil_moisture: reading.soil_moisture,
            temperature: reading.temperature,
            humidity: reading.humidity,
        }
    }

    /// Parses a raw serial line into a sample.
    ///
    /// Returns `None` for anything that is not a `moisture,temperature,humidity`
    /// triple. Such lines are boot banners or debug prints from the sensor board and
    /// are dropped without further notice.
    pub fn from_line(line: &str, timestamp: NaiveDateTime) -> Option<Self> {
        line.parse::<Reading>()
            .ok()
            .map(|reading| Self::new(timestamp, reading))
    }

    pub fn timestamp_text(&self) -> String {
        self.timestamp.format(TIMESTAMP_FORMAT).to_string()
    }
}
