use std::path::PathBuf;

use clap::Parser;

#[derive(Parser)]
#[command(about, long_about = None)]
pub struct CliArgs {
    /// Path to an env file to load before reading the environment.
    ///
    /// When not given, a `.env` file is searched for from the current directory upwards and
    /// silently skipped if missing. When given, the file must exist.
    #[arg(long)]
    pub env_file: Option<PathBuf>,

    /// Write the resolved configuration to this file instead of stdout.
    #[arg(long, short)]
    pub output: Option<PathBuf>,

    /// Pretty-print the JSON written to stdout.
    ///
    /// File output is always pretty-printed, this only affects stdout.
    #[arg(long, default_value = "false")]
    pub pretty: bool,

    /// Report which pass-through variables are set, without emitting the configuration.
    ///
    /// Only variable names are reported, never their values.
    #[arg(long, default_value = "false")]
    pub check: bool,
}
