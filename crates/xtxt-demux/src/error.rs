/// Errors that can occur while demultiplexing XTXT input.
#[derive(Debug, thiserror::Error)]
pub enum DemuxError {
    /// The escape byte 0xFF is the last byte of the input, so the marker
    /// low byte is missing.
    #[error("truncated marker: escape byte 0xFF at offset {offset} ends the input")]
    TruncatedMarker { offset: usize },

    /// A byte other than a recognized marker low byte follows 0xFF.
    #[error("invalid marker byte 0x{byte:02X} at offset {offset}")]
    InvalidMarker { byte: u8, offset: usize },

    /// An I/O error occurred while reading from a byte source.
    #[error("demux I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, DemuxError>;
