use comfy_table::{presets::UTF8_FULL, ContentArrangement, Table};
use serde::Serialize;
use xtxt_demux::{MARKER_ESCAPE, MARKER_SIZE, NCM, NFM, NSM};

use crate::cmd::InfoArgs;
use crate::exit::{demux_error, io_error, CliResult, SUCCESS};
use crate::output::OutputFormat;

#[derive(Debug, Default, Serialize, PartialEq, Eq)]
struct MarkerTally {
    nsm: usize,
    nfm: usize,
    ncm: usize,
}

#[derive(Debug, Serialize)]
struct StreamInfo {
    index: usize,
    lines: usize,
    width: usize,
}

#[derive(Debug, Serialize)]
struct InfoOutput {
    file: String,
    bytes: usize,
    markers: MarkerTally,
    streams: Vec<StreamInfo>,
}

pub fn run(args: InfoArgs, format: OutputFormat) -> CliResult<i32> {
    let bytes = std::fs::read(&args.file)
        .map_err(|err| io_error(&format!("cannot read {}", args.file.display()), err))?;

    let result = xtxt_demux::parse(&bytes)
        .map_err(|err| demux_error(&format!("cannot parse {}", args.file.display()), err))?;

    let output = InfoOutput {
        file: args.file.display().to_string(),
        bytes: bytes.len(),
        markers: tally_markers(&bytes),
        streams: result
            .streams
            .iter()
            .enumerate()
            .map(|(index, stream)| StreamInfo {
                index,
                lines: stream.lines.len(),
                width: stream.width,
            })
            .collect(),
    };

    print_info(&output, format);
    Ok(SUCCESS)
}

/// Tally marker pairs in an already-validated buffer.
fn tally_markers(bytes: &[u8]) -> MarkerTally {
    let mut tally = MarkerTally::default();
    let mut idx = 0;
    while idx < bytes.len() {
        if bytes[idx] != MARKER_ESCAPE {
            idx += 1;
            continue;
        }
        match bytes.get(idx + 1) {
            Some(&NSM) => tally.nsm += 1,
            Some(&NFM) => tally.nfm += 1,
            Some(&NCM) => tally.ncm += 1,
            _ => {}
        }
        idx += MARKER_SIZE;
    }
    tally
}

fn print_info(output: &InfoOutput, format: OutputFormat) {
    match format {
        OutputFormat::Json => {
            println!(
                "{}",
                serde_json::to_string(output).unwrap_or_else(|_| "{}".to_string())
            );
        }
        OutputFormat::Table => {
            println!(
                "{}: {} bytes, {} NSM, {} NFM, {} NCM",
                output.file, output.bytes, output.markers.nsm, output.markers.nfm, output.markers.ncm
            );
            let mut table = Table::new();
            table
                .load_preset(UTF8_FULL)
                .set_content_arrangement(ContentArrangement::Dynamic)
                .set_header(vec!["STREAM", "LINES", "WIDTH"]);
            for stream in &output.streams {
                table.add_row(vec![
                    stream.index.to_string(),
                    stream.lines.to_string(),
                    stream.width.to_string(),
                ]);
            }
            println!("{table}");
        }
        OutputFormat::Pretty => {
            println!("file: {}", output.file);
            println!("bytes: {}", output.bytes);
            println!(
                "markers: nsm={} nfm={} ncm={}",
                output.markers.nsm, output.markers.nfm, output.markers.ncm
            );
            for stream in &output.streams {
                println!(
                    "stream {}: {} lines, width {}",
                    stream.index, stream.lines, stream.width
                );
            }
        }
        OutputFormat::Raw => {
            println!("{}", output.streams.len());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tallies_each_marker_kind() {
        let bytes = [
            b'a', 0xFF, 0xFD, b'b', 0xFF, 0xFC, b'c', 0xFF, 0xFE, 0xFF, 0xFD,
        ];
        let tally = tally_markers(&bytes);
        assert_eq!(
            tally,
            MarkerTally {
                nsm: 1,
                nfm: 2,
                ncm: 1
            }
        );
    }

    #[test]
    fn tally_skips_marker_low_bytes_as_content() {
        // 0xFE as plain content must not be counted.
        let bytes = [0xFE, 0xFD, 0xFC];
        assert_eq!(tally_markers(&bytes), MarkerTally::default());
    }

    #[test]
    fn info_output_serializes() {
        let output = InfoOutput {
            file: "x.xtxt".to_string(),
            bytes: 10,
            markers: MarkerTally::default(),
            streams: vec![StreamInfo {
                index: 0,
                lines: 2,
                width: 4,
            }],
        };
        let json = serde_json::to_string(&output).expect("info output should serialize");
        assert!(json.contains("\"streams\""));
        assert!(json.contains("\"width\":4"));
    }
}
