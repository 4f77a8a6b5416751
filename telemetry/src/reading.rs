use std::{fmt, str::FromStr};

/// Number of comma separated fields in a sensor line.
const FIELD_COUNT: usize = 3;

/// One `moisture,temperature,humidity` triple as printed by the sensor board.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Reading {
    pub soil_moisture: f64,
    pub temperature: f64,
    pub humidity: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ParseError {
    /// The line did not split into exactly three fields.
    FieldCount(usize),
    /// A field did not parse as a floating point number.
    InvalidNumber(String),
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::FieldCount(n) => {
                write!(f, "Expected {} fields, got {}", FIELD_COUNT, n)
            }
            ParseError::InvalidNumber(field) => write!(f, "Invalid number {:?}", field),
        }
    }
}

impl std::error::Error for ParseError {}

// `nan` and `inf` are accepted: the sensor board prints `nan` when the humidity
// sensor fails a read, and such a line still counts as a sample.
fn parse_field(field: &str) -> Result<f64, ParseError> {
    let field = field.trim();

    field
        .parse::<f64>()
        .map_err(|_| ParseError::InvalidNumber(field.to_string()))
}

impl FromStr for Reading {
    type Err = ParseError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = line.trim().split(',').collect();

        if parts.len() != FIELD_COUNT {
            return Err(ParseError::FieldCount(parts.len()));
        }

        Ok(Reading {
            soil_moisture: parse_field(parts[0])?,
            temperature: parse_field(parts[1])?,
            humidity: parse_field(parts[2])?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_line() {
        let reading: Reading = "512,27.5,61.2".parse().unwrap();
        assert_eq!(
            reading,
            Reading {
                soil_moisture: 512.0,
                temperature: 27.5,
                humidity: 61.2
            }
        );
    }

    #[test]
    fn test_parse_tolerates_padding_and_line_ending() {
        let reading: Reading = " 400 , 21.0 ,55\r\n".parse().unwrap();
        assert_eq!(reading.soil_moisture, 400.0);
        assert_eq!(reading.temperature, 21.0);
        assert_eq!(reading.humidity, 55.0);
    }

    #[test]
    fn test_parse_negative_and_exponent() {
        let reading: Reading = "-1,1e1,0.5".parse().unwrap();
        assert_eq!(reading.soil_moisture, -1.0);
        assert_eq!(reading.temperature, 10.0);
        assert_eq!(reading.humidity, 0.5);
    }

    #[test]
    fn test_wrong_field_count() {
        assert_eq!("512,27.5".parse::<Reading>(), Err(ParseError::FieldCount(2)));
        assert_eq!(
            "512,27.5,61.2,9".parse::<Reading>(),
            Err(ParseError::FieldCount(4))
        );
        assert_eq!(
            "Soil sensor ready".parse::<Reading>(),
            Err(ParseError::FieldCount(1))
        );
    }

    #[test]
    fn test_non_numeric_field() {
        assert_eq!(
            "512,abc,61.2".parse::<Reading>(),
            Err(ParseError::InvalidNumber("abc".to_string()))
        );
        assert_eq!(
            "512,,61.2".parse::<Reading>(),
            Err(ParseError::InvalidNumber("".to_string()))
        );
    }

    #[test]
    fn test_failed_sensor_read_is_still_a_reading() {
        let reading: Reading = "500,nan,nan".parse().unwrap();
        assert_eq!(reading.soil_moisture, 500.0);
        assert!(reading.temperature.is_nan());
        assert!(reading.humidity.is_nan());

        let reading: Reading = "500,inf,-inf".parse().unwrap();
        assert_eq!(reading.temperature, f64::INFINITY);
        assert_eq!(reading.humidity, f64::NEG_INFINITY);
    }

    #[test]
    fn test_error_display() {
        assert_eq!(
            ParseError::FieldCount(2).to_string(),
            "Expected 3 fields, got 2"
        );
        assert_eq!(
            ParseError::InvalidNumber("x".into()).to_string(),
            "Invalid number \"x\""
        );
    }
}
