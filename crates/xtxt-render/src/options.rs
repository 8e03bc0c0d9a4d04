/// Default fixed cell width, in characters.
pub const DEFAULT_COLUMN_WIDTH: usize = 20;

/// Display configuration for the tabular renderer.
///
/// `column_width` is a fixed option, independent of any width the
/// demultiplexer computed for a stream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayOptions {
    /// Prefix each row with a 1-based row number.
    pub show_line_numbers: bool,
    /// Show only the stream at this 0-based index. `None` shows all streams.
    pub stream_filter: Option<usize>,
    /// Fixed cell width for every column, in characters.
    pub column_width: usize,
    /// Treat the first line as a header. Reserved: accepted but currently
    /// has no observable effect, kept for option compatibility.
    pub header_mode: bool,
    /// Show only this 1-based row. `None` shows all rows.
    pub specific_line: Option<usize>,
}

impl Default for DisplayOptions {
    fn default() -> Self {
        Self {
            show_line_numbers: true,
            stream_filter: None,
            column_width: DEFAULT_COLUMN_WIDTH,
            header_mode: false,
            specific_line: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_documented_surface() {
        let options = DisplayOptions::default();
        assert!(options.show_line_numbers);
        assert_eq!(options.stream_filter, None);
        assert_eq!(options.column_width, 20);
        assert!(!options.header_mode);
        assert_eq!(options.specific_line, None);
    }
}
