use clap::{Args, Subcommand};
use std::path::PathBuf;

use crate::exit::CliResult;
use crate::output::OutputFormat;

pub mod cat;
pub mod frames;
pub mod info;
pub mod version;

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Render the file's streams as aligned columns.
    Cat(CatArgs),
    /// Count Next-Frame-Marker occurrences in the file.
    Frames(FramesArgs),
    /// Show the file's dimensions: streams, lines, widths, marker tallies.
    Info(InfoArgs),
    /// Show version information.
    Version(VersionArgs),
}

pub fn run(command: Command, format: OutputFormat) -> CliResult<i32> {
    match command {
        Command::Cat(args) => cat::run(args),
        Command::Frames(args) => frames::run(args, format),
        Command::Info(args) => info::run(args, format),
        Command::Version(args) => version::run(args),
    }
}

#[derive(Args, Debug)]
pub struct CatArgs {
    /// XTXT file to render.
    pub file: PathBuf,
    /// Suppress the line-number prefix (on by default).
    #[arg(long)]
    pub no_numbers: bool,
    /// Display only the stream at this 0-based index.
    #[arg(long, short = 's', value_name = "INDEX")]
    pub stream: Option<usize>,
    /// Column width in characters.
    #[arg(long, short = 'w', value_name = "WIDTH", default_value_t = 20)]
    pub width: usize,
    /// Treat the first line as a header (reserved, currently no effect).
    #[arg(long = "head", short = 'H')]
    pub head: bool,
    /// Display only this 1-based line. 0 shows all lines.
    #[arg(long, short = 'l', value_name = "LINE", default_value_t = 0)]
    pub line: usize,
}

#[derive(Args, Debug)]
pub struct FramesArgs {
    /// XTXT file to scan.
    pub file: PathBuf,
}

#[derive(Args, Debug)]
pub struct InfoArgs {
    /// XTXT file to inspect.
    pub file: PathBuf,
}

#[derive(Args, Debug, Default)]
pub struct VersionArgs {
    /// Show extended build provenance.
    #[arg(long)]
    pub extended: bool,
}
