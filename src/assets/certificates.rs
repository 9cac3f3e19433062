use std::path::{Path, PathBuf};

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use walkdir::WalkDir;

use super::has_extension;

pub const CERTIFICATE_EXTENSIONS: &[&str] = &["pdf", "doc", "docx", "jpg", "jpeg", "png"];

static SEPARATOR_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[ _-]+").expect("separator pattern is valid"));

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CertificateKind {
    Doc,
    Pdf,
    Image,
}

impl CertificateKind {
    pub fn from_path(path: &Path) -> Self {
        let ext = path
            .extension()
            .map(|e| e.to_string_lossy().to_lowercase())
            .unwrap_or_default();
        if ext.starts_with("doc") {
            Self::Doc
        } else if ext == "pdf" {
            Self::Pdf
        } else {
            Self::Image
        }
    }
}

impl std::fmt::Display for CertificateKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            CertificateKind::Doc => "doc",
            CertificateKind::Pdf => "pdf",
            CertificateKind::Image => "image",
        };
        f.pad(label)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Certificate {
    pub name: String,
    pub path: PathBuf,
    pub kind: CertificateKind,
}

/// Display title of a certificate file: the stem with separators collapsed.
pub fn display_title(path: &Path) -> String {
    let stem = path
        .file_stem()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_default();
    SEPARATOR_RE.replace_all(&stem, " ").to_string()
}

/// List certificate files directly inside `dir`, sorted by file name.
///
/// Files whose stem equals one of `exclude` (ignoring case) are skipped. A
/// missing directory yields an empty list.
pub fn scan_certificates(dir: &Path, exclude: &[String]) -> Vec<Certificate> {
    WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .map(|e| e.into_path())
        .filter(|path| has_extension(path, CERTIFICATE_EXTENSIONS))
        .filter(|path| !is_excluded(path, exclude))
        .map(|path| Certificate {
            name: display_title(&path),
            kind: CertificateKind::from_path(&path),
            path,
        })
        .collect()
}

fn is_excluded(path: &Path, exclude: &[String]) -> bool {
    let Some(stem) = path.file_stem().map(|s| s.to_string_lossy().to_lowercase()) else {
        return false;
    };
    exclude.iter().any(|x| x.to_lowercase() == stem)
}
