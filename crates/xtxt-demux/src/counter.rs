use std::io::{ErrorKind, Read};

use crate::error::{DemuxError, Result};
use crate::marker::{MARKER_ESCAPE, NFM};

const READ_CHUNK_SIZE: usize = 1024;

/// Count occurrences of the NFM byte pair (`0xFF 0xFD`) in a byte source.
///
/// This is a raw pattern count, deliberately unaware of marker semantics:
/// it counts the pair wherever it appears, structurally valid or not, and
/// shares no state with the demultiplexer. The source is read in 1 KiB
/// chunks with a one-byte carry, so pairs spanning a chunk boundary are
/// still found.
pub fn count_frames<R: Read>(mut source: R) -> Result<u64> {
    let mut count = 0u64;
    let mut prev: Option<u8> = None;
    let mut chunk = [0u8; READ_CHUNK_SIZE];

    loop {
        let read = match source.read(&mut chunk) {
            Ok(0) => break,
            Ok(n) => n,
            Err(err) if err.kind() == ErrorKind::Interrupted => continue,
            Err(err) => return Err(DemuxError::Io(err)),
        };

        for &byte in &chunk[..read] {
            if prev == Some(MARKER_ESCAPE) && byte == NFM {
                count += 1;
            }
            prev = Some(byte);
        }
    }

    Ok(count)
}
