use itertools::{Either, Itertools};
use tracing::{debug, instrument};

use crate::errors::{ReorderError, ReorderResult};
use crate::sections::Section;

pub const APPLICATION_PREFIX: &str = "[Application]";

/// Entries the launcher must see early on the classpath.
pub const PRIORITY_KEYWORDS: [&str; 4] = ["util-base", "core", "extensions", "lz4"];

pub fn is_application(section: &Section) -> bool {
    section.header.starts_with(APPLICATION_PREFIX)
}

fn is_priority(line: &str) -> bool {
    PRIORITY_KEYWORDS.iter().any(|kw| line.contains(kw))
}

/// Emits a section's lines with priority entries moved to the front.
///
/// For the Application section the header and the first two body lines
/// stay in place. The remaining body is split by one stable partition:
/// lines containing a priority keyword first, then everything else, both
/// halves in their original relative order. All other sections pass
/// through verbatim.
///
/// An Application section with fewer than two body lines is an error.
#[instrument(level = "debug", skip(section), fields(header = %section.header.trim_end()))]
pub fn reorder_section(section: &Section) -> ReorderResult<Vec<String>> {
    let mut lines = Vec::with_capacity(section.body.len() + 1);
    lines.push(section.header.clone());

    if !is_application(section) {
        lines.extend(section.body.iter().cloned());
        return Ok(lines);
    }

    if section.body.len() < 2 {
        return Err(ReorderError::SectionTooShort {
            header: section.header.trim_end().to_string(),
            len: section.body.len(),
        });
    }

    let (pinned, rest) = section.body.split_at(2);
    let (priority, other): (Vec<&String>, Vec<&String>) = rest.iter().partition_map(|line| {
        if is_priority(line) {
            Either::Left(line)
        } else {
            Either::Right(line)
        }
    });
    debug!(
        "moving {} of {} candidate lines to the front",
        priority.len(),
        rest.len()
    );

    lines.extend(pinned.iter().cloned());
    lines.extend(priority.into_iter().cloned());
    lines.extend(other.into_iter().cloned());
    Ok(lines)
}

/// Applies the Application-section reordering across the whole document,
/// keeping sections in their original order.
pub fn reorder_document(sections: &[Section]) -> ReorderResult<Vec<String>> {
    let mut result = Vec::new();
    for section in sections {
        result.extend(reorder_section(section)?);
    }
    Ok(result)
}
