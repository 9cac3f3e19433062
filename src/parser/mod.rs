mod normalize;
mod pdf;
mod text;

use std::path::Path;

use crate::error::ExtractError;

pub use normalize::normalize_lines;

/// Source types the extraction pipeline can read.
pub const SUPPORTED_EXTENSIONS: &[&str] = &["pdf", "txt"];

/// Read a source document and return its raw text.
///
/// The text is returned as extracted; callers run it through
/// [`normalize_lines`] before segmenting.
pub fn extract_source_text(path: &Path) -> Result<String, ExtractError> {
    if !path.is_file() {
        return Err(ExtractError::SourceNotFound(path.to_path_buf()));
    }

    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_lowercase();

    match extension.as_str() {
        "pdf" => pdf::extract_text(path),
        "txt" => text::extract_text(path),
        _ => Err(ExtractError::UnsupportedFormat {
            path: path.to_path_buf(),
            extension,
        }),
    }
}

/// Whether `path` has an extension [`extract_source_text`] understands.
pub fn is_supported_source(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| SUPPORTED_EXTENSIONS.contains(&e.to_lowercase().as_str()))
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_missing_source() {
        let dir = tempdir().unwrap();
        let err = extract_source_text(&dir.path().join("resume.pdf")).unwrap_err();
        assert!(matches!(err, ExtractError::SourceNotFound(_)));
    }

    #[test]
    fn test_unsupported_extension() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("resume.odt");
        fs::write(&path, "Jane Doe").unwrap();

        let err = extract_source_text(&path).unwrap_err();
        assert!(matches!(err, ExtractError::UnsupportedFormat { ref extension, .. } if extension == "odt"));
    }

    #[test]
    fn test_text_source_is_case_insensitive() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("RESUME.TXT");
        fs::write(&path, "Jane Doe\nSkills\nC++").unwrap();

        assert!(is_supported_source(&path));
        assert_eq!(extract_source_text(&path).unwrap(), "Jane Doe\nSkills\nC++");
    }

    #[test]
    fn test_is_supported_source() {
        assert!(is_supported_source(Path::new("cv.pdf")));
        assert!(!is_supported_source(Path::new("cv.docx")));
        assert!(!is_supported_source(Path::new("cv")));
    }
}
