//! CLI argument definitions using clap

use std::path::PathBuf;

use clap::{Parser, ValueHint};
use clap_complete::Shell;

/// Reorders the [Application] section of a classpath file so runtime-critical jars load first
#[derive(Parser, Debug)]
#[command(name = "reclass")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Classpath file to rewrite in place
    #[arg(value_hint = ValueHint::FilePath)]
    pub file_path: Option<PathBuf>,

    /// Enable debug logging. Multiple -d options increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub debug: u8,

    /// If provided, outputs the completion file for given shell
    #[arg(long = "generate", value_enum)]
    pub generator: Option<Shell>,

    /// Show author and version info
    #[arg(long)]
    pub info: bool,
}
