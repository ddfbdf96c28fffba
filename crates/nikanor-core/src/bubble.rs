//! Speech bubble geometry and frame rendering.
//!
//! The frame is fixed ASCII art around the wrapped message:
//!
//! ```text
//!                 .-----"-----.
//!                /              \
//!               |  Hello World  |
//!               \               /
//!                 `-----"-----'
//!                      \
//! ```

use std::fmt;
use std::io::{self, Write};

use serde::{Deserialize, Serialize};

use crate::text::{self, DEFAULT_MAX_WIDTH};

/// Left margin shared by the side walls of the frame.
const INDENT: &str = "              ";

/// How far the tail sits from the left edge of the frame.
///
/// The offset is `floor(width * ratio)` clamped to `[min, max]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TailPolicy {
    pub ratio: f64,
    pub min: usize,
    pub max: usize,
}

impl TailPolicy {
    pub const DEFAULT_RATIO: f64 = 0.6;
    pub const DEFAULT_MIN: usize = 0;
    pub const DEFAULT_MAX: usize = 25;

    /// Returns the tail offset for a bubble of the given content width.
    pub fn offset(&self, width: usize) -> usize {
        // `as` saturates: NaN and negatives land on 0
        let raw = (width as f64 * self.ratio).floor() as usize;
        raw.max(self.min).min(self.max)
    }
}

impl Default for TailPolicy {
    fn default() -> Self {
        Self {
            ratio: Self::DEFAULT_RATIO,
            min: Self::DEFAULT_MIN,
            max: Self::DEFAULT_MAX,
        }
    }
}

/// Layout knobs for a bubble.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BubbleOptions {
    /// Maximum width of a wrapped line, in columns.
    pub max_width: usize,
    pub tail: TailPolicy,
}

impl Default for BubbleOptions {
    fn default() -> Self {
        Self {
            max_width: DEFAULT_MAX_WIDTH,
            tail: TailPolicy::default(),
        }
    }
}

/// A wrapped message with its frame geometry, computed once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bubble {
    lines: Vec<String>,
    line_widths: Vec<usize>,
    width: usize,
    tail_offset: usize,
}

impl Bubble {
    pub fn new(message: &str, options: &BubbleOptions) -> Self {
        let lines = text::wrap_lines(message, options.max_width);
        let line_widths: Vec<usize> = lines.iter().map(|l| text::visual_width(l)).collect();
        let width = line_widths.iter().copied().max().unwrap_or(0);
        let tail_offset = options.tail.offset(width);

        tracing::debug!(
            lines = lines.len(),
            width,
            tail_offset,
            double_byte_chars = text::count_double_byte_chars(message),
            "bubble layout"
        );

        Self {
            lines,
            line_widths,
            width,
            tail_offset,
        }
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Widest wrapped line, in columns.
    pub fn width(&self) -> usize {
        self.width
    }

    pub fn tail_offset(&self) -> usize {
        self.tail_offset
    }

    /// Right padding (in spaces) needed to align line `index` with the frame.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds.
    pub fn padding(&self, index: usize) -> usize {
        self.width - self.line_widths[index]
    }

    /// Writes the framed bubble to `out`.
    pub fn render(&self, out: &mut impl Write) -> io::Result<()> {
        write!(out, "{self}")?;
        out.flush()
    }
}

impl fmt::Display for Bubble {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let dashes = "-".repeat(self.width / 2);
        let inner = " ".repeat(self.width + 1);

        writeln!(f, "{INDENT}  .{dashes}\"{dashes}.")?;
        writeln!(f, "{INDENT} /{inner}  \\")?;
        for (index, line) in self.lines.iter().enumerate() {
            let padding = " ".repeat(self.padding(index));
            writeln!(f, "{INDENT}|  {line}{padding}  |")?;
        }
        writeln!(f, "{INDENT}\\ {inner}  /")?;
        writeln!(f, "{INDENT}  `{dashes}\"{dashes}'")?;
        writeln!(f, "{INDENT} {}\\", " ".repeat(self.tail_offset))
    }
}
