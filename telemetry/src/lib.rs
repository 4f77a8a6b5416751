pub mod batch;
pub mod reading;
pub mod sample;

pub use batch::{Averages, BATCH_SIZE, Batch, BatchError};
pub use reading::{ParseError, Reading};
pub use sample::{Sample, TIMESTAMP_FORMAT};
