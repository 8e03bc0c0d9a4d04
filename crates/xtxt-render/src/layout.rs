use xtxt_demux::ParseResult;

use crate::options::DisplayOptions;

/// Minimum width of the line-number field.
const LINE_NUMBER_WIDTH: usize = 3;

/// Lay out the parsed streams as rows of fixed-width columns.
///
/// One output row per line index of the longest stream; each visible stream
/// contributes a cell of exactly `column_width` characters (truncated or
/// space-padded), concatenated with no separator. Streams skipped by the
/// filter contribute nothing at all, not even padding, so a filter that
/// matches no stream yields empty rows.
pub fn render(result: &ParseResult, options: &DisplayOptions) -> Vec<String> {
    let mut rows = Vec::new();

    for row in 0..result.longest_stream() {
        if let Some(line) = options.specific_line {
            if row + 1 != line {
                continue;
            }
        }

        let mut text = String::new();
        for (index, stream) in result.streams.iter().enumerate() {
            if let Some(filter) = options.stream_filter {
                if filter != index {
                    continue;
                }
            }
            match stream.lines.get(row) {
                Some(line) => push_cell(&mut text, line, options.column_width),
                None => text.extend(std::iter::repeat(' ').take(options.column_width)),
            }
        }

        if options.show_line_numbers {
            rows.push(format!("{:>LINE_NUMBER_WIDTH$} {text}", row + 1));
        } else {
            rows.push(text);
        }
    }

    rows
}

/// Append one cell: the line chomped of trailing CR/LF, truncated to `width`
/// characters if longer, right-padded with spaces if shorter.
fn push_cell(out: &mut String, line: &str, width: usize) {
    let text = line.trim_end_matches(['\r', '\n']);
    let mut written = 0;
    for ch in text.chars().take(width) {
        out.push(ch);
        written += 1;
    }
    for _ in written..width {
        out.push(' ');
    }
}

#[cfg(test)]
mod tests {
    use xtxt_demux::parse;

    use super::*;

    fn sample() -> ParseResult {
        // "ab" NFM "cd" NSM "ef" NFM "gh"
        let input = [
            b'a', b'b', 0xFF, 0xFD, b'c', b'd', 0xFF, 0xFE, b'e', b'f', 0xFF, 0xFD, b'g', b'h',
        ];
        parse(&input).unwrap()
    }

    fn options(width: usize) -> DisplayOptions {
        DisplayOptions {
            column_width: width,
            ..DisplayOptions::default()
        }
    }

    #[test]
    fn end_to_end_rows() {
        let rows = render(&sample(), &options(4));
        assert_eq!(rows, vec!["  1 ab  ef  ", "  2 cd  gh  "]);
    }

    #[test]
    fn rows_without_line_numbers() {
        let opts = DisplayOptions {
            show_line_numbers: false,
            ..options(4)
        };
        let rows = render(&sample(), &opts);
        assert_eq!(rows, vec!["ab  ef  ", "cd  gh  "]);
    }

    #[test]
    fn specific_line_isolates_one_row() {
        let opts = DisplayOptions {
            specific_line: Some(2),
            ..options(4)
        };
        let rows = render(&sample(), &opts);
        assert_eq!(rows, vec!["  2 cd  gh  "]);
    }

    #[test]
    fn stream_filter_drops_other_columns_entirely() {
        let opts = DisplayOptions {
            stream_filter: Some(1),
            ..options(4)
        };
        let rows = render(&sample(), &opts);
        assert_eq!(rows, vec!["  1 ef  ", "  2 gh  "]);
    }

    #[test]
    fn filter_with_no_match_yields_empty_rows() {
        let opts = DisplayOptions {
            stream_filter: Some(7),
            show_line_numbers: false,
            ..options(4)
        };
        let rows = render(&sample(), &opts);
        assert_eq!(rows, vec!["", ""]);
    }

    #[test]
    fn no_streams_no_rows() {
        let rows = render(&ParseResult::default(), &DisplayOptions::default());
        assert!(rows.is_empty());
    }

    #[test]
    fn long_lines_are_truncated_to_the_column_width() {
        let input = [
            b'l', b'o', b'n', b'g', b'-', b'l', b'i', b'n', b'e', 0xFF, 0xFE,
        ];
        let result = parse(&input).unwrap();
        let opts = DisplayOptions {
            show_line_numbers: false,
            ..options(4)
        };
        assert_eq!(render(&result, &opts), vec!["long"]);
    }

    #[test]
    fn short_streams_pad_with_blank_cells() {
        // Stream 0 has two lines, stream 1 only one.
        let input = [
            b'a', 0xFF, 0xFD, b'b', 0xFF, 0xFE, b'c', 0xFF, 0xFE,
        ];
        let result = parse(&input).unwrap();
        let opts = DisplayOptions {
            show_line_numbers: false,
            ..options(3)
        };
        assert_eq!(render(&result, &opts), vec!["a  c  ", "b     "]);
    }

    #[test]
    fn trailing_newlines_are_chomped_from_cells() {
        let input = [b'h', b'i', b'\n', 0xFF, 0xFE];
        let result = parse(&input).unwrap();
        let opts = DisplayOptions {
            show_line_numbers: false,
            ..options(4)
        };
        assert_eq!(render(&result, &opts), vec!["hi  "]);
    }

    #[test]
    fn header_mode_has_no_observable_effect() {
        let with = DisplayOptions {
            header_mode: true,
            ..options(4)
        };
        let without = options(4);
        assert_eq!(render(&sample(), &with), render(&sample(), &without));
    }

    #[test]
    fn rendering_is_idempotent() {
        let result = sample();
        let opts = options(4);
        assert_eq!(render(&result, &opts), render(&result, &opts));
    }
}
