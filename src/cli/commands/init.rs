use anyhow::{Context, Result};
use console::{Emoji, style};
use std::fs;
use std::path::Path;

use crate::config::{Config, LOCAL_CONFIG_NAME};

static ROCKET: Emoji<'_, '_> = Emoji("🚀 ", "");
static CHECK: Emoji<'_, '_> = Emoji("✅ ", "[OK] ");
static WARN: Emoji<'_, '_> = Emoji("⚠️  ", "[!] ");

pub fn run(force: bool) -> Result<()> {
    super::banner("Initialization");

    let config_path = Path::new(LOCAL_CONFIG_NAME);

    // Check if config already exists
    if config_path.exists() && !force {
        println!(
            "{}Configuration already exists at {}",
            WARN,
            style(config_path.display()).cyan()
        );
        println!("  Use {} to overwrite", style("--force").yellow());
        return Ok(());
    }

    let config_content = toml::to_string_pretty(&Config::default())?;
    fs::write(config_path, config_content).context("Failed to write config file")?;

    println!(
        "{}Created configuration at {}",
        CHECK,
        style(config_path.display()).cyan()
    );

    println!();
    println!("{}", style("━".repeat(50)).dim());
    println!();
    println!("{}Next steps:", ROCKET);
    println!();
    println!("  Point resume.source at your résumé, then run:");
    println!("    {} folio resume", style("$").dim());
    println!("    {} folio portfolio", style("$").dim());
    println!("    {} folio doctor", style("$").dim());
    println!();

    Ok(())
}
