//! XTXT wire markers.
//!
//! Every marker is two bytes: the escape byte `0xFF` followed by a low byte
//! selecting the marker type. `0xFF` never appears as literal content, so a
//! line always ends exactly at the next escape byte.

/// Escape byte introducing every marker.
pub const MARKER_ESCAPE: u8 = 0xFF;

/// Next Stream Marker low byte: close the current stream, start a new one.
pub const NSM: u8 = 0xFE;

/// Next Frame Marker low byte: close the current frame, keep the stream open.
pub const NFM: u8 = 0xFD;

/// Next Chunk Marker low byte: reserved for sub-frame grouping, currently inert.
pub const NCM: u8 = 0xFC;

/// Wire size of every marker (escape byte + low byte).
pub const MARKER_SIZE: usize = 2;

/// Returns a human-readable name for a marker low byte, if it is one.
pub fn marker_name(low: u8) -> Option<&'static str> {
    match low {
        NSM => Some("NSM"),
        NFM => Some("NFM"),
        NCM => Some("NCM"),
        _ => None,
    }
}

/// Returns true if the byte is a recognized marker low byte.
pub fn is_marker_low(low: u8) -> bool {
    marker_name(low).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_marker_names() {
        assert_eq!(marker_name(NSM), Some("NSM"));
        assert_eq!(marker_name(NFM), Some("NFM"));
        assert_eq!(marker_name(NCM), Some("NCM"));
    }

    #[test]
    fn unknown_low_bytes_have_no_name() {
        assert_eq!(marker_name(0x00), None);
        assert_eq!(marker_name(0xFB), None);
        assert_eq!(marker_name(MARKER_ESCAPE), None);
    }

    #[test]
    fn classification_matches_names() {
        assert!(is_marker_low(NSM));
        assert!(is_marker_low(NFM));
        assert!(is_marker_low(NCM));
        assert!(!is_marker_low(0x41));
    }
}
