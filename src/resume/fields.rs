//! Per-field extraction rules. Every rule degrades to an empty value.

use crate::parser::normalize_lines;

use super::patterns::{
    BLOCK_SPLIT_RE, EMAIL_RE, Field, LINKEDIN_RE, LIST_SPLIT_RE, MIN_PHONE_DIGITS, NAME_RE,
    NAME_STRIP_RE, PERIOD_RE, PHONE_RE, URL_RE, title_matches,
};
use super::section::Section;
use super::{Contact, Experience};

/// Search the whole document text for contact details.
pub fn extract_contact(text: &str) -> Contact {
    let email = first_match(&EMAIL_RE, text);
    let phone = PHONE_RE
        .find_iter(text)
        .map(|m| m.as_str())
        .find(|candidate| candidate.chars().filter(char::is_ascii_digit).count() >= MIN_PHONE_DIGITS)
        .unwrap_or_default()
        .to_string();
    let linkedin = first_match(&LINKEDIN_RE, text);
    let portfolio = URL_RE
        .find_iter(text)
        .map(|m| m.as_str())
        .find(|url| !LINKEDIN_RE.is_match(url))
        .unwrap_or_default()
        .to_string();

    Contact {
        email,
        phone,
        linkedin,
        portfolio,
    }
}

fn first_match(re: &regex::Regex, text: &str) -> String {
    re.find(text)
        .map(|m| m.as_str().to_string())
        .unwrap_or_default()
}

/// The first line that reads like a person's name, or an empty string.
pub fn guess_name(lines: &[String]) -> String {
    lines
        .iter()
        .find(|line| NAME_RE.is_match(line) && line.split_whitespace().count() >= 2)
        .map(|line| NAME_STRIP_RE.replace_all(line, "").trim().to_string())
        .unwrap_or_default()
}

fn find_section(sections: &[Section], field: Field) -> Option<&Section> {
    sections.iter().find(|s| title_matches(field, &s.title))
}

/// Bullet-split the items of the section holding `field`, keeping at most
/// `limit` entries.
pub fn extract_list(sections: &[Section], field: Field, limit: Option<usize>) -> Vec<String> {
    let Some(section) = find_section(sections, field) else {
        tracing::debug!(?field, "no section found");
        return Vec::new();
    };

    let items = split_list_items(&section.items);
    match limit {
        Some(limit) => items.into_iter().take(limit).collect(),
        None => items,
    }
}

/// Split lines on newlines, hyphens and bullet characters.
pub fn split_list_items(items: &[String]) -> Vec<String> {
    LIST_SPLIT_RE
        .split(&items.join("\n"))
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect()
}

/// Read experience entries from the experience section.
///
/// The section is split into blocks on blank lines; the first line of a block
/// is the title, the second the company, the rest highlights.
pub fn extract_experiences(sections: &[Section], highlights_limit: usize) -> Vec<Experience> {
    let Some(section) = find_section(sections, Field::Experience) else {
        tracing::debug!("no experience section found");
        return Vec::new();
    };

    BLOCK_SPLIT_RE
        .split(&section.items.join("\n"))
        .filter_map(|block| parse_experience_block(block, highlights_limit))
        .collect()
}

pub fn parse_experience_block(block: &str, highlights_limit: usize) -> Option<Experience> {
    let lines = normalize_lines(block);
    let title = lines.first()?.clone();

    Some(Experience {
        period: first_match(&PERIOD_RE, block),
        title,
        company: lines.get(1).cloned().unwrap_or_default(),
        highlights: lines.into_iter().skip(2).take(highlights_limit).collect(),
    })
}
