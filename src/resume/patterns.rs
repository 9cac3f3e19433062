//! Pattern tables for section headers, field titles and contact details.
//!
//! Every literal the extractor matches against lives here so the coverage of
//! each rule can be enumerated in one place.

use once_cell::sync::Lazy;
use regex::Regex;

/// Lines starting with one of these (case-insensitively, followed by a word
/// boundary) open a new section.
pub const SECTION_HEADERS: &[&str] = &[
    "Experience",
    "Work Experience",
    "Kinh nghiệm",
    "Projects",
    "Dự án",
    "Skills",
    "Kỹ năng",
    "Education",
    "Học vấn",
    "Certificates",
    "Chứng chỉ",
];

/// Record fields that are read from a section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Summary,
    Skills,
    Education,
    Certificates,
    Experience,
}

/// How a field finds its section: the section title must start with one of
/// `titles`, or merely contain one when `anchored` is false.
pub struct FieldTitles {
    pub field: Field,
    pub titles: &'static [&'static str],
    pub anchored: bool,
}

pub const FIELD_TITLES: &[FieldTitles] = &[
    FieldTitles {
        field: Field::Summary,
        titles: &["Summary", "Tóm tắt"],
        anchored: true,
    },
    FieldTitles {
        field: Field::Skills,
        titles: &["Skills", "Kỹ năng"],
        anchored: true,
    },
    FieldTitles {
        field: Field::Education,
        titles: &["Education", "Học vấn"],
        anchored: true,
    },
    FieldTitles {
        field: Field::Certificates,
        titles: &["Certificates", "Chứng chỉ"],
        anchored: true,
    },
    FieldTitles {
        field: Field::Experience,
        titles: &["Experience", "Kinh nghiệm"],
        anchored: false,
    },
];

fn alternation(words: &[&str]) -> String {
    words
        .iter()
        .map(|w| regex::escape(w))
        .collect::<Vec<_>>()
        .join("|")
}

pub static HEADER_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(r"(?i)^(?:{})\b", alternation(SECTION_HEADERS)))
        .expect("section header pattern is valid")
});

static FIELD_TITLE_RES: Lazy<Vec<(Field, Regex)>> = Lazy::new(|| {
    FIELD_TITLES
        .iter()
        .map(|entry| {
            let anchor = if entry.anchored { "^" } else { "" };
            let pattern = format!(r"(?i){}(?:{})", anchor, alternation(entry.titles));
            let re = Regex::new(&pattern).expect("field title pattern is valid");
            (entry.field, re)
        })
        .collect()
});

/// Whether a section titled `title` holds the given field.
pub fn title_matches(field: Field, title: &str) -> bool {
    FIELD_TITLE_RES
        .iter()
        .find(|(f, _)| *f == field)
        .is_some_and(|(_, re)| re.is_match(title))
}

pub static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[\w.+-]+@[\w.-]+\.[A-Za-z]{2,}").expect("email pattern is valid"));

/// Phone candidates; callers still require [`MIN_PHONE_DIGITS`] digits.
/// ASCII digits and spaces only, so a line break never glues two numbers
/// together.
pub static PHONE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\+?[0-9][0-9 \-()]{7,}[0-9]").expect("phone pattern is valid"));

pub const MIN_PHONE_DIGITS: usize = 9;

pub static LINKEDIN_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)https?://www\.linkedin\.com/[\w\-/.]+").expect("linkedin pattern is valid")
});

pub static URL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)https?://[^\s]+\b").expect("url pattern is valid"));

/// A name line has a run of at least three letters or spaces.
pub static NAME_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[\p{L}\s]{3,}").expect("name pattern is valid"));

/// Characters removed from the chosen name line.
pub static NAME_STRIP_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^\p{L}\s.\-]").expect("name strip pattern is valid"));

/// Separators between list items: newline, hyphen, bullet, middle dot.
pub static LIST_SPLIT_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\n|-|\u{2022}|\u{00B7}").expect("list split pattern is valid"));

pub static BLOCK_SPLIT_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\n{2,}").expect("block split pattern is valid"));

pub static PERIOD_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\d{4}\s?[–-]\s?(?:Present|\d{4})").expect("period pattern is valid")
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_header_is_recognized() {
        for header in SECTION_HEADERS {
            assert!(HEADER_RE.is_match(header), "{header} should be a header");
            assert!(HEADER_RE.is_match(&header.to_uppercase()));
        }
    }

    #[test]
    fn test_header_must_start_line_and_end_word() {
        assert!(HEADER_RE.is_match("Skills & Tools"));
        assert!(HEADER_RE.is_match("EXPERIENCE"));
        assert!(!HEADER_RE.is_match("My Skills"));
        assert!(!HEADER_RE.is_match("Skillset"));
        assert!(!HEADER_RE.is_match("Summary"));
    }

    #[test]
    fn test_field_titles() {
        assert!(title_matches(Field::Summary, "Summary"));
        assert!(title_matches(Field::Summary, "Tóm tắt"));
        assert!(title_matches(Field::Skills, "skills"));
        assert!(title_matches(Field::Skills, "Kỹ năng chuyên môn"));
        assert!(title_matches(Field::Education, "Học vấn"));
        assert!(title_matches(Field::Certificates, "Certificates"));
        assert!(title_matches(Field::Experience, "Work Experience"));
        assert!(title_matches(Field::Experience, "Kinh nghiệm làm việc"));
        assert!(!title_matches(Field::Skills, "Soft Skills"));
        assert!(!title_matches(Field::Education, "Projects"));
    }

    #[test]
    fn test_period_shapes() {
        assert_eq!(PERIOD_RE.find("2020-Present").unwrap().as_str(), "2020-Present");
        assert_eq!(PERIOD_RE.find("from 2006 – 2013").unwrap().as_str(), "2006 – 2013");
        assert_eq!(PERIOD_RE.find("2019 - present").unwrap().as_str(), "2019 - present");
        assert!(PERIOD_RE.find("since 2020").is_none());
    }
}
