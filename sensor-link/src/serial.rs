use crate::{SensorLink, decode_line, terminated};
use serialport::SerialPort;
use std::{
    fmt,
    io::{self, BufRead, BufReader, Read, Write},
    time::Duration,
};

#[derive(Debug)]
pub enum SerialSensorLinkError {
    OpenError(serialport::Error),
    ReadError(io::Error),
    WriteError(io::Error),
}

impl fmt::Display for SerialSensorLinkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SerialSensorLinkError::OpenError(e) => write!(f, "Failed to open serial port: {}", e),
            SerialSensorLinkError::ReadError(e) => write!(f, "Failed to read serial port: {}", e),
            SerialSensorLinkError::WriteError(e) => {
                write!(f, "Failed to write serial port: {}", e)
            }
        }
    }
}

impl std::error::Error for SerialSensorLinkError {}

/// A link to the sensor board over a serial port.
pub struct SerialSensorLink<P = Box<dyn SerialPort>> {
    reader: BufReader<P>,
    /// Bytes of a line whose terminator has not arrived yet.
    pending: Vec<u8>,
}

impl SerialSensorLink {
    /// Opens the serial port with the given name, baud rate and read timeout.
    pub fn open(
        port_name: &str,
        baud_rate: u32,
        timeout: Duration,
    ) -> Result<Self, SerialSensorLinkError> {
        let port = serialport::new(port_name, baud_rate)
            .timeout(timeout)
            .open()
            .map_err(SerialSensorLinkError::OpenError)?;

        log::info!("Opened serial port {} at {} baud", port_name, baud_rate);

        Ok(Self::new(port))
    }
}

impl<P: Read + Write> SerialSensorLink<P> {
    /// Wraps an already opened port. Reads that time out must fail with
    /// `io::ErrorKind::TimedOut`, as `serialport` ports do.
    pub fn new(port: P) -> Self {
        Self {
            reader: BufReader::new(port),
            pending: Vec::new(),
        }
    }
}

impl<P: Read + Write> SensorLink for SerialSensorLink<P> {
    type Error = SerialSensorLinkError;

    fn read_line(&mut self) -> Result<Option<String>, Self::Error> {
        // `read_until` keeps whatever it consumed before a timeout in
        // `pending`, so a line split across two reads is not lost.
        match self.reader.read_until(b'\n', &mut self.pending) {
            Ok(_) => {
                let line = decode_line(&self.pending);
                self.pending.clear();
                Ok(line)
            }
            Err(e) if e.kind() == io::ErrorKind::TimedOut => Ok(None),
            Err(e) => Err(SerialSensorLinkError::ReadError(e)),
        }
    }

    fn send(&mut self, line: &str) -> Result<(), Self::Error> {
        let port = self.reader.get_mut();

        port.write_all(terminated(line).as_bytes())
            .and_then(|_| port.flush())
            .map_err(SerialSensorLinkError::WriteError)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::VecDeque;

    /// A port that hands out one scripted chunk (or error) per read.
    #[derive(Default)]
    struct ScriptedPort {
        chunks: VecDeque<io::Result<Vec<u8>>>,
        written: Vec<u8>,
    }

    impl ScriptedPort {
        fn new(chunks: Vec<io::Result<&str>>) -> Self {
            Self {
                chunks: chunks
                    .into_iter()
                    .map(|c| c.map(|s| s.as_bytes().to_vec()))
                    .collect(),
                written: Vec::new(),
            }
        }
    }

    impl Read for ScriptedPort {
        fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
            match self.chunks.pop_front() {
                Some(Ok(chunk)) => {
                    let n = chunk.len().min(buf.len());
                    buf[..n].copy_from_slice(&chunk[..n]);
                    if n < chunk.len() {
                        self.chunks.push_front(Ok(chunk[n..].to_vec()));
                    }
                    Ok(n)
                }
                Some(Err(e)) => Err(e),
                None => Ok(0),
            }
        }
    }

    impl Write for ScriptedPort {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.written.extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    fn timed_out() -> io::Error {
        io::Error::new(io::ErrorKind::TimedOut, "Operation timed out")
    }

    #[test]
    fn test_reads_whole_lines() {
        let mut link =
            SerialSensorLink::new(ScriptedPort::new(vec![Ok("512,27,61\r\n600,25,55\n")]));

        assert_eq!(link.read_line().unwrap().as_deref(), Some("512,27,61"));
        assert_eq!(link.read_line().unwrap().as_deref(), Some("600,25,55"));
    }

    #[test]
    fn test_timeout_is_an_empty_read() {
        let mut link = SerialSensorLink::new(ScriptedPort::new(vec![Err(timed_out())]));

        assert_eq!(link.read_line().unwrap(), None);
    }

    #[test]
    fn test_line_split_by_timeout_is_completed_on_next_read() {
        let mut link = SerialSensorLink::new(ScriptedPort::new(vec![
            Ok("51"),
            Err(timed_out()),
            Ok("2,27,61\n"),
        ]));

        assert_eq!(link.read_line().unwrap(), None);
        assert_eq!(link.read_line().unwrap().as_deref(), Some("512,27,61"));
    }

    #[test]
    fn test_other_read_errors_are_fatal() {
        let broken = io::Error::new(io::ErrorKind::BrokenPipe, "device unplugged");
        let mut link = SerialSensorLink::new(ScriptedPort::new(vec![Err(broken)]));

        assert!(matches!(
            link.read_line(),
            Err(SerialSensorLinkError::ReadError(e)) if e.kind() == io::ErrorKind::BrokenPipe
        ));
    }

    #[test]
    fn test_send_terminates_line() {
        let mut link = SerialSensorLink::new(ScriptedPort::default());

        link.send("SMS:Soil:Sand").unwrap();

        assert_eq!(link.reader.get_ref().written, b"SMS:Soil:Sand\n");
    }
}
