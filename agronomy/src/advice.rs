use crate::{Celsius, SoilType};

pub const LOAMY_TOO_COLD: &str = "Increase temperature slightly (use mulch or plastic cover).";
pub const SAND_TOO_HOT: &str = "Temperature high — provide shade or light irrigation.";
pub const CLAY_TOO_COLD: &str = "Temperature low — ensure sunlight exposure.";
pub const SUITABLE: &str = "Temperature suitable for your soil and crop type.";

/// Returns the temperature advisory for a mean temperature on a given soil.
pub fn temperature_advice(temperature: Celsius, soil: SoilType) -> &'static str {
    match soil {
        SoilType::Loamy if temperature < 25.0 => LOAMY_TOO_COLD,
        SoilType::Sand if temperature > 32.0 => SAND_TOO_HOT,
        SoilType::Clay if temperature < 20.0 => CLAY_TOO_COLD,
        _ => SUITABLE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_loamy_threshold() {
        assert_eq!(temperature_advice(24.9, SoilType::Loamy), LOAMY_TOO_COLD);
        assert_eq!(temperature_advice(25.0, SoilType::Loamy), SUITABLE);
    }

    #[test]
    fn test_sand_threshold() {
        assert_eq!(temperature_advice(32.1, SoilType::Sand), SAND_TOO_HOT);
        assert_eq!(temperature_advice(32.0, SoilType::Sand), SUITABLE);
    }

    #[test]
    fn test_clay_threshold() {
        assert_eq!(temperature_advice(19.5, SoilType::Clay), CLAY_TOO_COLD);
        assert_eq!(temperature_advice(20.0, SoilType::Clay), SUITABLE);
    }

    #[test]
    fn test_thresholds_are_soil_specific() {
        // Cold sand and hot loam are not flagged.
        assert_eq!(temperature_advice(5.0, SoilType::Sand), SUITABLE);
        assert_eq!(temperature_advice(40.0, SoilType::Loamy), SUITABLE);
        assert_eq!(temperature_advice(40.0, SoilType::Clay), SUITABLE);
    }

    #[test]
    fn test_unknown_soil_is_suitable() {
        assert_eq!(temperature_advice(-5.0, SoilType::Unknown), SUITABLE);
        assert_eq!(temperature_advice(45.0, SoilType::Unknown), SUITABLE);
    }
}
