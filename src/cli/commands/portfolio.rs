use anyhow::Result;
use console::{Emoji, style};
use std::path::PathBuf;

use crate::assets::portfolio::extract_images;
use crate::config::Config;

static FRAME: Emoji<'_, '_> = Emoji("🖼️  ", "");
static CHECK: Emoji<'_, '_> = Emoji("✅ ", "[OK] ");
static WARN: Emoji<'_, '_> = Emoji("⚠️  ", "[!] ");

pub fn run(config: &Config, docx: Option<PathBuf>, output: Option<PathBuf>) -> Result<()> {
    let docx = docx.unwrap_or_else(|| config.portfolio.source.clone());
    let output = output.unwrap_or_else(|| config.portfolio.output_dir.clone());

    super::banner("Portfolio Images");

    if !docx.is_file() {
        tracing::warn!(path = %docx.display(), "portfolio document not found");
        println!(
            "{}DOCX not found: {}",
            WARN,
            style(docx.display()).yellow()
        );
        return Ok(());
    }

    println!("{}Source: {}", FRAME, style(docx.display()).cyan());

    let result = extract_images(&docx, &output, &config.portfolio.public_prefix)?;

    if result.files.is_empty() {
        println!("{}{}", WARN, style("No embedded images found in DOCX.").yellow());
    }
    println!(
        "{}Wrote {} image(s) and manifest to {}",
        CHECK,
        style(result.files.len()).green().bold(),
        style(output.display()).cyan()
    );
    for url in &result.manifest {
        println!("  {} {}", style("→").dim(), style(url).dim());
    }
    println!();

    Ok(())
}
