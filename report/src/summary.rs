use agronomy::{SoilType, recommend_crop, temperature_advice};
use std::fmt;
use telemetry::{Averages, Batch};

/// The derived result of one run.
#[derive(Debug, Clone, PartialEq)]
pub struct SummaryRecord {
    pub soil_type: SoilType,
    pub averages: Averages,
    pub recommendation: &'static str,
    pub advice: &'static str,
}

impl SummaryRecord {
    pub fn new(soil_type: SoilType, averages: Averages) -> Self {
        Self {
            soil_type,
            averages,
            recommendation: recommend_crop(soil_type, averages.soil_moisture),
            advice: temperature_advice(averages.temperature, soil_type),
        }
    }

    pub fn from_batch(soil_type: SoilType, batch: &Batch) -> Self {
        Self::new(soil_type, batch.averages())
    }

    /// `(Parameter, Value)` rows, as written to the summary spreadsheet.
    pub fn rows(&self) -> Vec<(&'static str, String)> {
        vec![
            ("Soil Type", self.soil_type.label().to_string()),
            (
                "Average Soil Moisture",
                format!("{:.2}", self.averages.soil_moisture),
            ),
            (
                "Average Temperature",
                format!("{:.2} °C", self.averages.temperature),
            ),
            ("Average Humidity", format!("{:.2} %", self.averages.humidity)),
            ("Recommended Crop(s)", self.recommendation.to_string()),
            ("Temperature Advice", self.advice.to_string()),
        ]
    }
}

impl fmt::Display for SummaryRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "--- Summary ---")?;
        writeln!(f, "Avg Soil Moisture: {:.2}", self.averages.soil_moisture)?;
        writeln!(f, "Avg Temperature: {:.2} °C", self.averages.temperature)?;
        writeln!(f, "Avg Humidity: {:.2} %", self.averages.humidity)?;
        writeln!(f, "Recommended Crop(s): {}", self.recommendation)?;
        write!(f, "Temperature Advice: {}", self.advice)
    }
}
