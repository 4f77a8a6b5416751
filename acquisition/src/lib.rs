use chrono::{Local, NaiveDateTime, Timelike};
use sensor_link::SensorLink;
use std::{fmt, thread, time::Duration};
use telemetry::{BATCH_SIZE, Batch, BatchError, Sample};

/// Source of sample timestamps.
pub type Clock = fn() -> NaiveDateTime;

/// Local wall-clock time, truncated to whole seconds.
pub fn local_now() -> NaiveDateTime {
    let now = Local::now().naive_local();
    now.with_nanosecond(0).unwrap_or(now)
}

#[derive(Debug, PartialEq)]
pub enum AcquisitionError<E> {
    /// The link failed while reading.
    Link(E),
    Batch(BatchError),
}

impl<E: fmt::Display> fmt::Display for AcquisitionError<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AcquisitionError::Link(e) => write!(f, "Sensor link error: {}", e),
            AcquisitionError::Batch(e) => write!(f, "Invalid batch: {}", e),
        }
    }
}

impl<E: std::error::Error> std::error::Error for AcquisitionError<E> {}

/// Collects a batch of samples from a sensor link.
///
/// Reads lines until `sample_count` of them parse as samples. Blank reads
/// back off for `empty_read_backoff`; lines that are not samples are skipped.
/// After each accepted sample the loop waits `sample_interval` before reading
/// again.
#[derive(Debug, Clone)]
pub struct Acquisition {
    sample_count: usize,
    empty_read_backoff: Duration,
    sample_interval: Duration,
    clock: Clock,
}

impl Default for Acquisition {
    fn default() -> Self {
        Self {
            sample_count: BATCH_SIZE,
            empty_read_backoff: Duration::from_millis(500),
            sample_interval: Duration::from_millis(500),
            clock: local_now,
        }
    }
}

impl Acquisition {
    pub fn new(sample_count: usize, empty_read_backoff: Duration, sample_interval: Duration) -> Self {
        Self {
            // A batch is never empty.
            sample_count: sample_count.max(1),
            empty_read_backoff,
            sample_interval,
            clock: local_now,
        }
    }

    pub fn with_clock(mut self, clock: Clock) -> Self {
        self.clock = clock;
        self
    }

    pub fn sample_count(&self) -> usize {
        self.sample_count
    }

    /// Blocks until the batch is complete. Link errors abort the run.
    pub fn collect<L: SensorLink>(&self, link: &mut L) -> Result<Batch, AcquisitionError<L::Error>> {
        let mut samples = Vec::with_capacity(self.sample_count);

        while samples.len() < self.sample_count {
            let Some(line) = link.read_line().map_err(AcquisitionError::Link)? else {
                thread::sleep(self.empty_read_backoff);
                continue;
            };

            let Some(sample) = Sample::from_line(&line, (self.clock)()) else {
                log::debug!("Skipping line: {}", line);
                continue;
            };

            log::info!(
                "Sample {}: Soil={}, Temp={} °C, Humidity={} %",
                samples.len() + 1,
                sample.soil_moisture,
                sample.temperature,
                sample.humidity
            );
            samples.push(sample);

            thread::sleep(self.sample_interval);
        }

        Batch::new(samples).map_err(AcquisitionError::Batch)
    }
}
