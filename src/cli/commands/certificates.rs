use anyhow::Result;
use console::{Emoji, style};
use std::path::PathBuf;

use crate::assets::certificates::scan_certificates;
use crate::config::Config;

static SCROLL: Emoji<'_, '_> = Emoji("📜 ", "");

pub fn run(config: &Config, dir: Option<PathBuf>, json: bool) -> Result<()> {
    let dir = dir.unwrap_or_else(|| config.certificates.dir.clone());
    let certificates = scan_certificates(&dir, &config.certificate_excludes());

    if json {
        println!("{}", serde_json::to_string_pretty(&certificates)?);
        return Ok(());
    }

    super::banner("Certificates");
    println!(
        "{}Found {} in {}",
        SCROLL,
        style(certificates.len()).green().bold(),
        style(dir.display()).cyan()
    );
    println!();

    for cert in &certificates {
        println!(
            "  {} {:<6} {}",
            style("•").cyan(),
            style(cert.kind).dim(),
            cert.name
        );
    }
    if !certificates.is_empty() {
        println!();
    }

    Ok(())
}
