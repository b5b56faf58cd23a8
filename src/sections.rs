use tracing::{debug, instrument};

/// A bracketed header line plus the body lines following it, up to the
/// next header or end of input. Lines keep their original terminators.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    pub header: String,
    pub body: Vec<String>,
}

impl Section {
    pub fn new(header: String) -> Self {
        Section {
            header,
            body: Vec::new(),
        }
    }
}

/// Groups lines into sections. A line opens a new section iff it starts
/// with `[`. Lines before the first header are dropped, matching the
/// behavior of the build pipeline this tool replaces.
#[instrument(level = "debug", skip(lines))]
pub fn split_sections<I>(lines: I) -> Vec<Section>
where
    I: IntoIterator<Item = String>,
{
    let mut sections: Vec<Section> = Vec::new();
    for line in lines {
        if line.starts_with('[') {
            sections.push(Section::new(line));
        } else if let Some(current) = sections.last_mut() {
            current.body.push(line);
        }
    }
    debug!("split input into {} sections", sections.len());
    sections
}
