use std::path::Path;

use tracing::{debug, instrument};

use crate::cli::args::Cli;
use crate::errors::{ReorderError, ReorderResult};
use crate::reorder_classpath_file;

pub fn execute_command(cli: &Cli) -> ReorderResult<()> {
    match cli.file_path.as_deref() {
        Some(file_path) => _reorder(file_path),
        None => {
            println!("Usage: reclass <file_path>");
            Ok(())
        }
    }
}

#[instrument]
fn _reorder(file_path: &Path) -> ReorderResult<()> {
    debug!("file_path: {:?}", file_path);
    match reorder_classpath_file(file_path) {
        // The build pipeline treats a missing classpath file as a no-op,
        // so this stays a plain message rather than a failing exit.
        Err(ReorderError::FileNotFound(_)) => {
            println!("File not found");
            Ok(())
        }
        other => other,
    }
}
