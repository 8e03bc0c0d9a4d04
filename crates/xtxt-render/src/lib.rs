//! Aligned-column rendering of demultiplexed XTXT streams.
//!
//! Consumes a [`xtxt_demux::ParseResult`] plus a [`DisplayOptions`] and lays
//! the streams out side by side, one fixed-width column per stream, row by
//! row. Rendering is pure: same input, same rows.

pub mod layout;
pub mod options;

pub use layout::render;
pub use options::{DisplayOptions, DEFAULT_COLUMN_WIDTH};
