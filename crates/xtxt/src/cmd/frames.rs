use comfy_table::{presets::UTF8_FULL, ContentArrangement, Table};
use serde::Serialize;

use crate::cmd::FramesArgs;
use crate::exit::{demux_error, io_error, CliResult, SUCCESS};
use crate::output::OutputFormat;

#[derive(Serialize)]
struct FramesOutput<'a> {
    file: &'a str,
    frames: u64,
}

pub fn run(args: FramesArgs, format: OutputFormat) -> CliResult<i32> {
    let file = std::fs::File::open(&args.file)
        .map_err(|err| io_error(&format!("cannot open {}", args.file.display()), err))?;

    let frames = xtxt_demux::count_frames(file)
        .map_err(|err| demux_error(&format!("cannot scan {}", args.file.display()), err))?;

    let file_name = args.file.display().to_string();
    let output = FramesOutput {
        file: &file_name,
        frames,
    };

    match format {
        OutputFormat::Json => {
            println!(
                "{}",
                serde_json::to_string(&output).unwrap_or_else(|_| "{}".to_string())
            );
        }
        OutputFormat::Table => {
            let mut table = Table::new();
            table
                .load_preset(UTF8_FULL)
                .set_content_arrangement(ContentArrangement::Dynamic)
                .set_header(vec!["FILE", "FRAMES"])
                .add_row(vec![output.file.to_string(), frames.to_string()]);
            println!("{table}");
        }
        OutputFormat::Pretty => {
            println!("Total frames: {frames}");
        }
        OutputFormat::Raw => {
            println!("{frames}");
        }
    }

    Ok(SUCCESS)
}
