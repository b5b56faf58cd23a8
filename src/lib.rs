use std::fs;
use std::path::Path;

use tracing::{debug, instrument};

pub mod cli;
pub mod errors;
pub mod reorder;
pub mod sections;
pub mod util;

use crate::errors::ReorderResult;
use crate::reorder::reorder_document;
use crate::sections::split_sections;
use crate::util::path::ensure_file_exists;

/// Rewrites the classpath file at `path` in place, moving priority
/// entries to the front of the Application section.
///
/// The whole file is read into memory, transformed, and written back in
/// one pass. Lines keep their original terminators (`\n` or `\r\n`, and
/// a final line without one stays that way). The write only happens after
/// the transformation has succeeded, so a reorder error leaves the file
/// untouched. Concurrent invocations on the same path are not supported.
#[instrument(level = "debug")]
pub fn reorder_classpath_file(path: &Path) -> ReorderResult<()> {
    ensure_file_exists(path)?;

    let contents = fs::read_to_string(path)?;
    let lines: Vec<String> = contents
        .split_inclusive('\n')
        .map(|s| s.to_string())
        .collect();
    debug!("read {} lines from {:?}", lines.len(), path);

    let sections = split_sections(lines);
    let result = reorder_document(&sections)?;

    fs::write(path, result.concat())?;
    Ok(())
}
