use std::io::IsTerminal;

use clap::ValueEnum;

/// Machine/human output selection for the `frames` and `info` subcommands.
/// `cat` always writes the plain rendered table.
#[derive(Clone, Debug, Copy, ValueEnum)]
pub enum OutputFormat {
    Json,
    Table,
    Pretty,
    Raw,
}

impl OutputFormat {
    pub fn default_for_stdout() -> Self {
        if std::io::stdout().is_terminal() {
            Self::Table
        } else {
            Self::Json
        }
    }
}
