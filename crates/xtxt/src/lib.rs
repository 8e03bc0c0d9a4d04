//! Decoding and inspection of XTXT multiplexed text files.
//!
//! XTXT packs several independent text streams into one byte sequence with
//! two-byte `0xFF`-escaped markers. This facade re-exports the pipeline:
//!
//! - [`demux`] — marker-driven demultiplexer and the standalone frame counter
//! - [`render`] — aligned-column rendering of the demultiplexed streams

/// Re-export demultiplexer types.
pub mod demux {
    pub use xtxt_demux::*;
}

/// Re-export renderer types.
pub mod render {
    pub use xtxt_render::*;
}
