use crate::Sample;
use std::fmt;

/// Number of samples collected per run.
pub const BATCH_SIZE: usize = 5;

#[derive(Debug, PartialEq)]
pub enum BatchError {
    Empty,
}

impl fmt::Display for BatchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BatchError::Empty => write!(f, "A batch needs at least one sample"),
        }
    }
}

impl std::error::Error for BatchError {}

/// Per-channel arithmetic means of a batch.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Averages {
    pub soil_moisture: f64,
    pub temperature: f64,
    pub humidity: f64,
}

/// The ordered samples of one acquisition run. Never empty.
#[derive(Debug, Clone)]
pub struct Batch {
    samples: Vec<Sample>,
}

impl Batch {
    pub fn new(samples: Vec<Sample>) -> Result<Self, BatchError> {
        if samples.is_empty() {
            return Err(BatchError::Empty);
        }

        Ok(Self { samples })
    }

    pub fn samples(&self) -> &[Sample] {
        &self.samples
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn averages(&self) -> Averages {
        let n = self.samples.len() as f64;
        let mean = |channel: fn(&Sample) -> f64| self.samples.iter().map(channel).sum::<f64>() / n;

        Averages {
            soil_moisture: mean(|s: &Sample| s.soil_moisture),
            temperature: mean(|s: &Sample| s.temperature),
            humidity: mean(|s: &Sample| s.humidity),
        }
    }
}
