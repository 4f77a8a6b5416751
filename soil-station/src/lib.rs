pub mod config;
pub mod error;
pub mod pipeline;
pub mod prompt;

pub use error::StationError;
pub use pipeline::{RunReport, run};
pub use prompt::prompt_soil_type;
