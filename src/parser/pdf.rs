use std::path::Path;

use crate::error::ExtractError;

/// Extract text from a PDF file
pub fn extract_text(path: &Path) -> Result<String, ExtractError> {
    let bytes = std::fs::read(path).map_err(|e| ExtractError::io(path, e))?;

    let text = pdf_extract::extract_text_from_mem(&bytes).map_err(|e| ExtractError::Pdf {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    tracing::debug!(bytes = bytes.len(), chars = text.len(), "extracted PDF text");

    Ok(strip_pdf_artifacts(&text))
}

/// Remove characters pdf-extract leaves behind that never belong to the text.
/// Line structure is left alone; the normalizer owns that.
fn strip_pdf_artifacts(text: &str) -> String {
    text.replace('\u{0}', "").replace('\u{FEFF}', "")
}
