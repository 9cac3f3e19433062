//! Static asset scanners for the portfolio site: DOCX images, certificate
//! files and product screenshots.

pub mod certificates;
pub mod gallery;
pub mod portfolio;

use std::path::Path;

/// Case-insensitive extension check against a list of lower-case extensions.
fn has_extension(path: &Path, extensions: &[&str]) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| extensions.contains(&e.to_lowercase().as_str()))
        .unwrap_or(false)
}
