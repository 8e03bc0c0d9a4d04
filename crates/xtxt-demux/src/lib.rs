//! Marker-driven demultiplexing for the XTXT text format.
//!
//! XTXT interleaves several independent text streams into one byte sequence
//! using two-byte escape markers:
//! - `0xFF 0xFE` (NSM) closes the current stream and opens a new one
//! - `0xFF 0xFD` (NFM) closes the current frame, keeping the stream open
//! - `0xFF 0xFC` (NCM) is reserved and currently a no-op
//!
//! [`parse`] runs a single left-to-right pass over an in-memory buffer and
//! produces a [`ParseResult`]: one [`Stream`] of lines per stream boundary.
//! Any malformed marker aborts the whole parse; callers never see a
//! half-built result.
//!
//! [`count_frames`] is an unrelated collaborator that counts raw NFM
//! byte-pair occurrences in any `Read` source without interpreting them.

pub mod counter;
pub mod error;
pub mod marker;
pub mod scan;

pub use counter::count_frames;
pub use error::{DemuxError, Result};
pub use marker::{is_marker_low, marker_name, MARKER_ESCAPE, MARKER_SIZE, NCM, NFM, NSM};
pub use scan::{parse, ParseResult, Stream};
