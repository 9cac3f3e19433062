use std::io::{Cursor, Read};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::ExtractError;
use crate::export::write_json_atomic;

/// Embedded images inside a Word document.
static MEDIA_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^word/media/.+\.(?:png|jpg|jpeg|gif)$").expect("media pattern is valid")
});

pub const MANIFEST_NAME: &str = "manifest.json";

/// An image pulled out of the DOCX, before it is written anywhere.
#[derive(Debug)]
pub struct MediaEntry {
    pub entry_name: String,
    pub extension: String,
    pub data: Vec<u8>,
}

/// What a portfolio extraction produced.
#[derive(Debug)]
pub struct PortfolioImages {
    pub files: Vec<PathBuf>,
    pub manifest: Vec<String>,
    pub manifest_path: PathBuf,
}

/// Read every embedded image from `docx`, in archive order.
pub fn read_media(docx: &Path) -> Result<Vec<MediaEntry>, ExtractError> {
    if !docx.is_file() {
        return Err(ExtractError::SourceNotFound(docx.to_path_buf()));
    }
    let data = std::fs::read(docx).map_err(|e| ExtractError::io(docx, e))?;
    let archive_err = |source| ExtractError::Archive {
        path: docx.to_path_buf(),
        source,
    };

    let mut archive = zip::ZipArchive::new(Cursor::new(data)).map_err(archive_err)?;
    let mut media = Vec::new();

    for i in 0..archive.len() {
        let mut file = archive.by_index(i).map_err(archive_err)?;
        if file.is_dir() || !MEDIA_RE.is_match(file.name()) {
            continue;
        }

        let entry_name = file.name().to_string();
        let extension = Path::new(&entry_name)
            .extension()
            .map(|e| e.to_string_lossy().to_lowercase())
            .unwrap_or_default();

        // the declared size is untrusted; let the buffer grow with the data
        let mut bytes = Vec::new();
        file.read_to_end(&mut bytes)
            .map_err(|e| ExtractError::io(docx, e))?;

        tracing::debug!(entry = %entry_name, bytes = bytes.len(), "found embedded image");
        media.push(MediaEntry {
            entry_name,
            extension,
            data: bytes,
        });
    }

    Ok(media)
}

/// File name for the `index`-th (0-based) image.
pub fn output_name(index: usize, extension: &str) -> String {
    format!("portfolio_{:02}.{}", index + 1, extension)
}

/// Extract the images of `docx` into `out_dir` and write the manifest of
/// public URLs next to them.
pub fn extract_images(docx: &Path, out_dir: &Path, public_prefix: &str) -> Result<PortfolioImages> {
    let media = read_media(docx)?;

    std::fs::create_dir_all(out_dir)
        .with_context(|| format!("Failed to create directory: {}", out_dir.display()))?;

    let prefix = public_prefix.trim_end_matches('/');
    let mut files = Vec::with_capacity(media.len());
    let mut manifest = Vec::with_capacity(media.len());

    for (index, entry) in media.iter().enumerate() {
        let name = output_name(index, &entry.extension);
        let path = out_dir.join(&name);
        std::fs::write(&path, &entry.data)
            .with_context(|| format!("Failed to write image: {}", path.display()))?;
        tracing::debug!(from = %entry.entry_name, to = %name, "copied image");

        manifest.push(format!("{prefix}/{name}"));
        files.push(path);
    }

    let manifest_path = out_dir.join(MANIFEST_NAME);
    write_json_atomic(&manifest, &manifest_path)?;
    tracing::info!(images = files.len(), manifest = %manifest_path.display(), "wrote portfolio images");

    Ok(PortfolioImages {
        files,
        manifest,
        manifest_path,
    })
}
