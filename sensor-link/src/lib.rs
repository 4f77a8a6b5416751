pub mod mock;
pub mod replay;
pub mod serial;

/// A line-oriented, bidirectional connection to the soil sensor board.
pub trait SensorLink {
    type Error;

    /// Reads the next line from the sensor board.
    ///
    /// Returns `Ok(None)` when nothing arrived before the read timeout or the
    /// line was blank. Returned lines are trimmed.
    fn read_line(&mut self) -> Result<Option<String>, Self::Error>;

    /// Sends one line to the sensor board. A trailing newline is added if missing.
    fn send(&mut self, line: &str) -> Result<(), Self::Error>;
}

/// Decodes a raw line, replacing invalid UTF-8, and strips surrounding whitespace.
pub(crate) fn decode_line(raw: &[u8]) -> Option<String> {
    let line = String::from_utf8_lossy(raw);
    let line = line.trim();

    if line.is_empty() {
        None
    } else {
        Some(line.to_string())
    }
}

pub(crate) fn terminated(line: &str) -> String {
    if line.ends_with('\n') {
        line.to_string()
    } else {
        format!("{}\n", line)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_line() {
        assert_eq!(decode_line(b"512,27.5,61\r\n"), Some("512,27.5,61".to_string()));
        assert_eq!(decode_line(b"\r\n"), None);
        assert_eq!(decode_line(b""), None);
    }

    #[test]
    fn test_decode_line_invalid_utf8() {
        let line = decode_line(&[0xff, b'1', b',', b'2', b',', b'3']).unwrap();
        assert!(line.ends_with("1,2,3"));
    }

    #[test]
    fn test_terminated() {
        assert_eq!(terminated("SMS:hi"), "SMS:hi\n");
        assert_eq!(terminated("SMS:hi\n"), "SMS:hi\n");
    }
}
