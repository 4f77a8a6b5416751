pub mod advice;
pub mod crops;
pub mod soil;

pub use advice::temperature_advice;
pub use crops::recommend_crop;
pub use soil::SoilType;

/// Raw soil moisture, in sensor units as reported by the sensor board.
pub type Moisture = f64;
/// Temperature, in degrees Celsius.
pub type Celsius = f64;
