use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug)]
#[clap(author, about, version)]
pub struct CliOptions {
    /// Path to a YAML configuration file. Built-in defaults are used when
    /// omitted.
    #[clap(long)]
    pub config: Option<PathBuf>,
}
