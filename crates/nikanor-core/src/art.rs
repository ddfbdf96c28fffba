//! Line-paced streaming of an ASCII art file.
//!
//! The file is read as raw bytes and copied line by line, sleeping between
//! lines to produce a reveal animation. No decoding happens; whatever the
//! file holds reaches the terminal unchanged.

use std::fmt;
use std::fs::File;
use std::io::{BufRead, BufReader, Write};
use std::path::Path;
use std::thread;
use std::time::Duration;

use anyhow::{Context, Result};

/// Default pause after each art line.
pub const DEFAULT_LINE_DELAY: Duration = Duration::from_millis(50);

/// The art source could not be opened or read.
///
/// Attached as context to source-side failures so callers can tell them
/// apart from failures writing to the output.
#[derive(Debug)]
pub struct ArtUnavailable(String);

impl fmt::Display for ArtUnavailable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Copies art files to a writer, one paced line at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArtStreamer {
    delay: Duration,
}

impl ArtStreamer {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Streams the file at `path` to `out`, returning the number of lines written.
    ///
    /// Fails if the file cannot be opened or a read fails partway (those
    /// errors carry [`ArtUnavailable`]), or if writing to `out` fails. Lines
    /// written before a failure stay written.
    pub fn stream(&self, path: &Path, out: &mut impl Write) -> Result<usize> {
        let file = File::open(path).with_context(|| {
            ArtUnavailable(format!("could not open ASCII art file: {}", path.display()))
        })?;
        let count = self
            .stream_from(BufReader::new(file), out)
            .map_err(|e| {
                if e.is::<ArtUnavailable>() {
                    e.context(ArtUnavailable(format!(
                        "could not read ASCII art file: {}",
                        path.display()
                    )))
                } else {
                    e
                }
            })?;

        tracing::debug!(path = %path.display(), lines = count, "art streamed");
        Ok(count)
    }

    /// Streams lines from any buffered reader.
    ///
    /// Line endings (`\n` or `\r\n`) are normalized to `\n`, and `out` is
    /// flushed after every line so the pacing is visible.
    pub fn stream_from(&self, mut reader: impl BufRead, out: &mut impl Write) -> Result<usize> {
        let mut buf = Vec::new();
        let mut count = 0;

        loop {
            buf.clear();
            let read = reader
                .read_until(b'\n', &mut buf)
                .with_context(|| ArtUnavailable("read line".to_string()))?;
            if read == 0 {
                break;
            }

            write_line(out, strip_line_ending(&buf)).context("write art line")?;
            count += 1;

            if !self.delay.is_zero() {
                thread::sleep(self.delay);
            }
        }

        Ok(count)
    }
}

impl Default for ArtStreamer {
    fn default() -> Self {
        Self::new(DEFAULT_LINE_DELAY)
    }
}

fn write_line(out: &mut impl Write, line: &[u8]) -> std::io::Result<()> {
    out.write_all(line)?;
    out.write_all(b"\n")?;
    out.flush()
}

fn strip_line_ending(line: &[u8]) -> &[u8] {
    let line = line.strip_suffix(b"\n").unwrap_or(line);
    line.strip_suffix(b"\r").unwrap_or(line)
}
