use tracing::{debug, trace};

use crate::error::{DemuxError, Result};
use crate::marker::{marker_name, MARKER_ESCAPE, MARKER_SIZE, NCM, NFM, NSM};

/// A decoded stream: its lines in input order, plus the width of the last
/// non-empty frame flushed into it.
///
/// `width` is the maximum line length (in characters) of that last frame
/// only, not a maximum over the whole stream. The renderer sizes columns
/// from its own option instead; the value is kept for interface completeness.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stream {
    pub lines: Vec<String>,
    pub width: usize,
}

/// The complete output of one parse: every closed stream in order, plus a
/// trailing entry when the input ends with an unterminated stream.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParseResult {
    pub streams: Vec<Stream>,
}

impl ParseResult {
    /// Line count of the longest stream. Zero when there are no streams.
    pub fn longest_stream(&self) -> usize {
        self.streams
            .iter()
            .map(|stream| stream.lines.len())
            .max()
            .unwrap_or(0)
    }
}

/// Mutable scan state threaded through one parse call.
#[derive(Default)]
struct Accumulator {
    frame: Vec<String>,
    lines: Vec<String>,
    width: usize,
    streams: Vec<Stream>,
}

impl Accumulator {
    /// Move the current frame's lines into the open stream.
    ///
    /// A non-empty frame overwrites the stream width with its own maximum
    /// line length; an empty frame leaves the width untouched.
    fn flush_frame(&mut self) {
        if !self.frame.is_empty() {
            self.width = self
                .frame
                .iter()
                .map(|line| line.chars().count())
                .max()
                .unwrap_or(0);
        }
        self.lines.append(&mut self.frame);
    }

    /// Flush the pending frame, then close the open stream into the output.
    /// Streams close even when empty: every NSM produces an entry.
    fn close_stream(&mut self) {
        self.flush_frame();
        self.streams.push(Stream {
            lines: std::mem::take(&mut self.lines),
            width: self.width,
        });
        self.width = 0;
    }
}

/// Demultiplex an XTXT buffer into its streams.
///
/// Runs a single left-to-right pass. Every byte is consumed exactly once,
/// either as line content or as half of a two-byte marker. Malformed input
/// (an escape byte without a low byte, or an unrecognized low byte) aborts
/// the parse; no partial result is returned.
pub fn parse(input: &[u8]) -> Result<ParseResult> {
    let mut acc = Accumulator::default();
    let mut idx = 0;

    while idx < input.len() {
        if input[idx] != MARKER_ESCAPE {
            let end = input[idx..]
                .iter()
                .position(|&byte| byte == MARKER_ESCAPE)
                .map_or(input.len(), |found| idx + found);
            acc.frame
                .push(String::from_utf8_lossy(&input[idx..end]).into_owned());
            idx = end;
            continue;
        }

        let Some(&low) = input.get(idx + 1) else {
            return Err(DemuxError::TruncatedMarker { offset: idx });
        };
        trace!(offset = idx, marker = marker_name(low), "marker");

        match low {
            NSM => acc.close_stream(),
            NFM => acc.flush_frame(),
            NCM => {} // reserved
            other => {
                return Err(DemuxError::InvalidMarker {
                    byte: other,
                    offset: idx + 1,
                })
            }
        }
        idx += MARKER_SIZE;
    }

    // An unterminated final stream is flushed implicitly, but only kept if
    // it ever received any lines.
    acc.flush_frame();
    if !acc.lines.is_empty() {
        acc.streams.push(Stream {
            lines: acc.lines,
            width: acc.width,
        });
    }

    debug!(streams = acc.streams.len(), "parse complete");
    Ok(ParseResult {
        streams: acc.streams,
    })
}
