use crate::{SensorLink, decode_line, terminated};
use std::{collections::VecDeque, fmt};

#[derive(Debug, PartialEq)]
pub enum MockSensorLinkError {
    /// Every scripted read has been consumed.
    Exhausted,
    /// The link was told to fail writes.
    WriteRejected,
}

impl fmt::Display for MockSensorLinkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MockSensorLinkError::Exhausted => write!(f, "Mock link has no more scripted reads"),
            MockSensorLinkError::WriteRejected => write!(f, "Mock link rejected the write"),
        }
    }
}

impl std::error::Error for MockSensorLinkError {}

/// A scripted link. Each entry is one `read_line` result, `None` being a
/// read timeout. Sent lines are recorded in `sent`.
#[derive(Debug, Default)]
pub struct MockSensorLink {
    reads: VecDeque<Option<String>>,
    pub sent: Vec<String>,
    pub fail_writes: bool,
}

impl MockSensorLink {
    pub fn new<I, S>(reads: I) -> Self
    where
        I: IntoIterator<Item = Option<S>>,
        S: Into<String>,
    {
        Self {
            reads: reads.into_iter().map(|r| r.map(Into::into)).collect(),
            sent: Vec::new(),
            fail_writes: false,
        }
    }

    /// A link whose reads are the given lines, without timeouts.
    pub fn from_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(lines.into_iter().map(Some))
    }

    pub fn remaining(&self) -> usize {
        self.reads.len()
    }
}

impl SensorLink for MockSensorLink {
    type Error = MockSensorLinkError;

    fn read_line(&mut self) -> Result<Option<String>, Self::Error> {
        match self.reads.pop_front() {
            Some(Some(line)) => Ok(decode_line(line.as_bytes())),
            Some(None) => Ok(None),
            None => Err(MockSensorLinkError::Exhausted),
        }
    }

    fn send(&mut self, line: &str) -> Result<(), Self::Error> {
        if self.fail_writes {
            return Err(MockSensorLinkError::WriteRejected);
        }

        self.sent.push(terminated(line));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scripted_reads() {
        let mut link = MockSensorLink::new(vec![Some("1,2,3\r\n"), None, Some("  ")]);

        assert_eq!(link.read_line(), Ok(Some("1,2,3".to_string())));
        assert_eq!(link.read_line(), Ok(None));
        assert_eq!(link.read_line(), Ok(None));
        assert_eq!(link.read_line(), Err(MockSensorLinkError::Exhausted));
    }

    #[test]
    fn test_records_sent_lines() {
        let mut link = MockSensorLink::default();
        link.send("SMS:hello").unwrap();
        assert_eq!(link.sent, vec!["SMS:hello\n".to_string()]);
    }

    #[test]
    fn test_failing_writes() {
        let mut link = MockSensorLink::default();
        link.fail_writes = true;
        assert_eq!(link.send("x"), Err(MockSensorLinkError::WriteRejected));
        assert!(link.sent.is_empty());
    }
}
