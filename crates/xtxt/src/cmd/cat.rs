use std::io::Write;

use xtxt_render::DisplayOptions;

use crate::cmd::CatArgs;
use crate::exit::{demux_error, io_error, CliResult, SUCCESS};

pub fn run(args: CatArgs) -> CliResult<i32> {
    let bytes = std::fs::read(&args.file)
        .map_err(|err| io_error(&format!("cannot read {}", args.file.display()), err))?;

    let result = xtxt_demux::parse(&bytes)
        .map_err(|err| demux_error(&format!("cannot parse {}", args.file.display()), err))?;

    let options = DisplayOptions {
        show_line_numbers: !args.no_numbers,
        stream_filter: args.stream,
        column_width: args.width,
        header_mode: args.head,
        // 0 is the "all lines" sentinel on the command line.
        specific_line: (args.line > 0).then_some(args.line),
    };

    let rows = xtxt_render::render(&result, &options);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    for row in &rows {
        writeln!(out, "{row}").map_err(|err| io_error("cannot write output", err))?;
    }
    out.flush().map_err(|err| io_error("cannot write output", err))?;

    Ok(SUCCESS)
}
