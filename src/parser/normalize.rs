//! Turns raw extracted text into an ordered sequence of clean lines.

/// Split `text` into trimmed, non-empty lines.
///
/// `\r\n` and lone `\r` are treated as line breaks, so text from any platform
/// yields the same sequence. Blank input yields an empty vector.
pub fn normalize_lines(text: &str) -> Vec<String> {
    text.replace("\r\n", "\n")
        .replace('\r', "\n")
        .split('\n')
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mixed_line_endings() {
        let lines = normalize_lines("Jane Doe\r\nSkills\rC++\nReact");
        assert_eq!(lines, vec!["Jane Doe", "Skills", "C++", "React"]);
    }

    #[test]
    fn test_blank_and_whitespace_lines_dropped() {
        let lines = normalize_lines("  first  \n\n \t \n\r\n  second\n");
        assert_eq!(lines, vec!["first", "second"]);
    }

    #[test]
    fn test_blank_input() {
        assert!(normalize_lines("").is_empty());
        assert!(normalize_lines(" \n\r\n\t").is_empty());
    }

    #[test]
    fn test_idempotent() {
        let raw = " Experience \r\n\r\nSenior Engineer\r  Acme Corp \n";
        let once = normalize_lines(raw);
        let twice = normalize_lines(&once.join("\n"));
        assert_eq!(once, twice);
        assert_eq!(normalize_lines(raw), once);
    }

    #[test]
    fn test_no_empty_entries() {
        let raw = "a\n \n\u{3000}\nb\r\r\n c ";
        for line in normalize_lines(raw) {
            assert!(!line.trim().is_empty());
        }
    }
}
