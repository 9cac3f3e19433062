//! Splits a line sequence into titled sections.

use serde::{Deserialize, Serialize};

use super::patterns::HEADER_RE;

/// Title of the section that collects everything before the first header.
pub const IMPLICIT_SECTION: &str = "Summary";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Section {
    pub title: String,
    pub items: Vec<String>,
}

impl Section {
    fn new(title: &str) -> Self {
        Self {
            title: title.to_string(),
            items: Vec::new(),
        }
    }
}

/// What to do with a header that arrives while the open section is empty.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionPolicy {
    /// The empty section is dropped and the header takes over its place.
    #[default]
    Rename,
    /// Every header opens its own section, so empty sections are emitted.
    /// The implicit leading section is still only emitted with content.
    Keep,
}

pub fn is_header(line: &str) -> bool {
    HEADER_RE.is_match(line.trim())
}

/// Assign every line to exactly one section, in order.
pub fn segment(lines: &[String], policy: SectionPolicy) -> Vec<Section> {
    let mut sections = Vec::new();
    let mut current = Section::new(IMPLICIT_SECTION);
    let mut explicit = false;

    for line in lines {
        if is_header(line) {
            if should_close(&current, explicit, policy) {
                sections.push(current);
            } else {
                tracing::debug!(from = %current.title, to = %line.trim(), "renaming empty section");
            }
            current = Section::new(line.trim());
            explicit = true;
        } else {
            current.items.push(line.clone());
        }
    }

    if should_close(&current, explicit, policy) {
        sections.push(current);
    }

    sections
}

fn should_close(section: &Section, explicit: bool, policy: SectionPolicy) -> bool {
    !section.items.is_empty() || (explicit && policy == SectionPolicy::Keep)
}
