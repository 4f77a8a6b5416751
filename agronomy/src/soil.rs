use std::fmt;

/// The soil category selected by the operator. Drives the threshold tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SoilType {
    Sand,
    Loamy,
    Clay,
    /// Anything the operator typed that is not a known category.
    Unknown,
}

impl SoilType {
    /// Normalizes free-text operator input into a soil type.
    ///
    /// Matching is case-insensitive and ignores surrounding whitespace.
    /// Unrecognized input is not an error, it maps to [`SoilType::Unknown`].
    pub fn from_input(input: &str) -> Self {
        let normalized = input.trim().to_lowercase();

        match normalized.as_str() {
            "sand" => SoilType::Sand,
            "loamy" => SoilType::Loamy,
            "clay" => SoilType::Clay,
            _ => {
                log::warn!("Unrecognized soil type {:?}", normalized);
                SoilType::Unknown
            }
        }
    }

    /// Lowercase key, used in output file names.
    pub fn as_str(&self) -> &'static str {
        match self {
            SoilType::Sand => "sand",
            SoilType::Loamy => "loamy",
            SoilType::Clay => "clay",
            SoilType::Unknown => "unknown",
        }
    }

    /// Capitalized label, used in reports and SMS text.
    pub fn label(&self) -> &'static str {
        match self {
            SoilType::Sand => "Sand",
            SoilType::Loamy => "Loamy",
            SoilType::Clay => "Clay",
            SoilType::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for SoilType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_input_known_types() {
        assert_eq!(SoilType::from_input("sand"), SoilType::Sand);
        assert_eq!(SoilType::from_input("loamy"), SoilType::Loamy);
        assert_eq!(SoilType::from_input("clay"), SoilType::Clay);
    }

    #[test]
    fn test_from_input_normalizes_case_and_whitespace() {
        assert_eq!(SoilType::from_input("  Sand\n"), SoilType::Sand);
        assert_eq!(SoilType::from_input("LOAMY"), SoilType::Loamy);
        assert_eq!(SoilType::from_input("\tClAy "), SoilType::Clay);
    }

    #[test]
    fn test_from_input_unknown() {
        assert_eq!(SoilType::from_input("sandy"), SoilType::Unknown);
        assert_eq!(SoilType::from_input("peat"), SoilType::Unknown);
        assert_eq!(SoilType::from_input(""), SoilType::Unknown);
    }

    #[test]
    fn test_keys_and_labels() {
        assert_eq!(SoilType::Loamy.as_str(), "loamy");
        assert_eq!(SoilType::Unknown.as_str(), "unknown");
        assert_eq!(SoilType::Clay.to_string(), "Clay");
        assert_eq!(SoilType::Sand.label(), "Sand");
    }
}
