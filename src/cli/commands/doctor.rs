use anyhow::Result;
use console::{Emoji, style};
use std::path::Path;

use crate::assets::certificates::scan_certificates;
use crate::assets::gallery::scan_images;
use crate::config::Config;
use crate::export::load_record;
use crate::parser::is_supported_source;

static DOCTOR: Emoji<'_, '_> = Emoji("🩺 ", "");
static PASS: Emoji<'_, '_> = Emoji("✅ ", "[OK] ");
static FAIL: Emoji<'_, '_> = Emoji("❌ ", "[!!] ");
static WARN: Emoji<'_, '_> = Emoji("⚠️  ", "[!] ");
static INFO: Emoji<'_, '_> = Emoji("ℹ️  ", "[i] ");
static ARROW: Emoji<'_, '_> = Emoji("   → ", "  -> ");

#[derive(Default)]
struct Tally {
    pass: u32,
    fail: u32,
    warn: u32,
}

pub fn run(explicit_config: Option<&Path>) -> Result<()> {
    super::banner("Doctor");
    println!("{}Running diagnostics...", DOCTOR);
    println!();

    let mut tally = Tally::default();

    // ── 1. Binary version ────────────────────────────────────────────
    print_section("Binary");
    pass(&format!("folio {}", env!("CARGO_PKG_VERSION")), &mut tally);

    // ── 2. Config file ───────────────────────────────────────────────
    print_section("Configuration");
    let config = match Config::locate(explicit_config) {
        Ok(Some(path)) => match Config::load_from(&path) {
            Ok(config) => {
                pass(
                    &format!("Config loaded from {}", style(path.display()).dim()),
                    &mut tally,
                );
                config
            }
            Err(e) => {
                fail(&format!("Config parse error: {:#}", e), &mut tally);
                hint("Run: folio init --force");
                Config::default()
            }
        },
        Ok(None) => {
            info("No config file found, using built-in defaults");
            hint("Run: folio init");
            Config::default()
        }
        Err(e) => {
            fail(&format!("{:#}", e), &mut tally);
            Config::default()
        }
    };

    // ── 3. Résumé ────────────────────────────────────────────────────
    print_section("Résumé");
    let source = &config.resume.source;
    if !source.is_file() {
        fail(
            &format!("Source not found: {}", source.display()),
            &mut tally,
        );
        hint("Set resume.source in folio.toml or pass a path to `folio resume`");
    } else if !is_supported_source(source) {
        fail(
            &format!("Unsupported source type: {}", source.display()),
            &mut tally,
        );
        hint("Use a .pdf or .txt résumé");
    } else {
        pass(&format!("Source found: {}", source.display()), &mut tally);
    }

    let output = &config.resume.output;
    if output.exists() {
        match load_record(output) {
            Some(record) => pass(
                &format!(
                    "Record is valid ({} skills, {} experiences)",
                    record.skills.len(),
                    record.experiences.len()
                ),
                &mut tally,
            ),
            None => {
                warn(
                    &format!("Record is not valid JSON: {}", output.display()),
                    &mut tally,
                );
                hint("Regenerate it: folio resume");
            }
        }
    } else {
        info(&format!("No record yet at {}", output.display()));
    }

    // ── 4. Assets ────────────────────────────────────────────────────
    print_section("Assets");
    if config.portfolio.source.is_file() {
        pass(
            &format!("Portfolio DOCX found: {}", config.portfolio.source.display()),
            &mut tally,
        );
    } else {
        warn(
            &format!(
                "Portfolio DOCX not found: {}",
                config.portfolio.source.display()
            ),
            &mut tally,
        );
    }

    check_dir(
        "Certificate",
        &config.certificates.dir,
        scan_certificates(&config.certificates.dir, &config.certificate_excludes()).len(),
        &mut tally,
    );
    check_dir(
        "Product image",
        &config.gallery.dir,
        scan_images(&config.gallery.dir).len(),
        &mut tally,
    );

    // ── Summary ──────────────────────────────────────────────────────
    let total = tally.pass + tally.fail + tally.warn;
    println!();
    print!("  {} passed", style(tally.pass).green().bold());
    if tally.warn > 0 {
        print!(
            ", {} {}",
            style(tally.warn).yellow().bold(),
            if tally.warn == 1 { "warning" } else { "warnings" }
        );
    }
    if tally.fail > 0 {
        print!(
            ", {} {}",
            style(tally.fail).red().bold(),
            if tally.fail == 1 { "failure" } else { "failures" }
        );
    }
    println!(" ({} total)", total);
    println!();

    if tally.fail > 0 {
        println!(
            "  {}",
            style("Some checks failed. Fix the issues above and re-run:").red()
        );
        println!("    {} folio doctor", style("$").dim());
    } else if tally.warn > 0 {
        println!(
            "  {}",
            style("Everything essential works, but there are some warnings.").yellow()
        );
    } else {
        println!(
            "  {}",
            style("All checks passed! You're ready to go.").green().bold()
        );
    }
    println!();

    Ok(())
}

fn check_dir(label: &str, dir: &Path, found: usize, tally: &mut Tally) {
    if !dir.is_dir() {
        warn(
            &format!("{} directory not found: {}", label, dir.display()),
            tally,
        );
    } else if found == 0 {
        info(&format!("{} directory is empty: {}", label, dir.display()));
    } else {
        pass(
            &format!("{} files: {} in {}", label, found, dir.display()),
            tally,
        );
    }
}

// ── Helpers ──────────────────────────────────────────────────────────

fn print_section(name: &str) {
    println!();
    println!("  {}", style(name).bold().underlined());
}

fn pass(msg: &str, tally: &mut Tally) {
    println!("  {}{}", PASS, msg);
    tally.pass += 1;
}

fn fail(msg: &str, tally: &mut Tally) {
    println!("  {}{}", FAIL, style(msg).red());
    tally.fail += 1;
}

fn warn(msg: &str, tally: &mut Tally) {
    println!("  {}{}", WARN, style(msg).yellow());
    tally.warn += 1;
}

fn info(msg: &str) {
    println!("  {}{}", INFO, style(msg).dim());
}

fn hint(msg: &str) {
    println!("{}{}", ARROW, style(msg).dim());
}
