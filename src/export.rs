use anyhow::{Context, Result};
use serde::Serialize;
use std::io::{BufWriter, Write};
use std::path::Path;
use tempfile::NamedTempFile;

use crate::resume::ResumeRecord;

/// Serialize `value` as indented JSON and replace `path` with it in one step.
///
/// The JSON goes to a temporary file in the destination directory first, so
/// a failed run leaves any previous file untouched and readers never see a
/// partial document.
pub fn write_json_atomic<T: Serialize + ?Sized>(value: &T, path: &Path) -> Result<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    std::fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create directory: {}", dir.display()))?;

    let tmp = NamedTempFile::new_in(dir)
        .with_context(|| format!("Failed to create temporary file in {}", dir.display()))?;
    {
        let mut writer = BufWriter::new(tmp.as_file());
        serde_json::to_writer_pretty(&mut writer, value).context("Failed to write JSON")?;
        writer.flush().context("Failed to write JSON")?;
    }

    tmp.persist(path)
        .with_context(|| format!("Failed to create file: {}", path.display()))?;

    Ok(())
}

/// Write a résumé record to `path`, overwriting it wholesale.
pub fn export_record(record: &ResumeRecord, path: &Path) -> Result<()> {
    write_json_atomic(record, path)?;
    tracing::info!(path = %path.display(), "wrote resume record");
    Ok(())
}

/// Load a previously written record the way the site does: anything missing
/// or malformed means there is no résumé data.
pub fn load_record(path: &Path) -> Option<ResumeRecord> {
    let content = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "resume record unavailable");
            return None;
        }
    };

    match serde_json::from_str(&content) {
        Ok(record) => Some(record),
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "resume record is not valid JSON");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_export_record_pretty_json() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("public/assets/resume.json");
        let record = ResumeRecord {
            name: "Jane Doe".into(),
            skills: vec!["C++".into()],
            ..ResumeRecord::default()
        };

        export_record(&record, &path).unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        assert!(written.contains("\n  \"name\": \"Jane Doe\""));
        assert_eq!(load_record(&path), Some(record));
    }

    #[test]
    fn test_export_overwrites_wholesale() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("resume.json");
        std::fs::write(&path, "{\"name\": \"Old\", \"extra\": [1, 2, 3]}").unwrap();

        export_record(&ResumeRecord::default(), &path).unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        assert!(!written.contains("Old"));
        assert!(!written.contains("extra"));
    }

    #[test]
    fn test_load_record_degrades() {
        let dir = tempdir().unwrap();
        assert_eq!(load_record(&dir.path().join("missing.json")), None);

        let bad = dir.path().join("bad.json");
        std::fs::write(&bad, "{ not json").unwrap();
        assert_eq!(load_record(&bad), None);
    }
}
