use std::path::Path;

use crate::error::ExtractError;

/// Extract text from a plain text file
pub fn extract_text(path: &Path) -> Result<String, ExtractError> {
    std::fs::read_to_string(path).map_err(|e| ExtractError::io(path, e))
}
