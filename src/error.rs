use std::path::PathBuf;

use thiserror::Error;

/// Failures that abort an extraction run.
///
/// Anything that can be recovered by leaving a field empty is not an error;
/// these variants cover the cases where there is no document to work with.
#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("Source document not found: {}", .0.display())]
    SourceNotFound(PathBuf),

    #[error("Unsupported source type '{extension}' for {}", .path.display())]
    UnsupportedFormat { path: PathBuf, extension: String },

    #[error("Failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to extract text from PDF {}: {message}", .path.display())]
    Pdf { path: PathBuf, message: String },

    #[error("Failed to open DOCX archive {}: {source}", .path.display())]
    Archive {
        path: PathBuf,
        #[source]
        source: zip::result::ZipError,
    },
}

impl ExtractError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
