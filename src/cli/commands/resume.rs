use anyhow::{Context, Result};
use console::{Emoji, style};
use indicatif::HumanDuration;
use std::path::PathBuf;
use std::time::Instant;

use crate::config::Config;
use crate::export::export_record;
use crate::parser::{extract_source_text, normalize_lines};
use crate::resume::{ResumeExtractor, ResumeRecord, Section};

static PAPER: Emoji<'_, '_> = Emoji("📄 ", "");
static CHECK: Emoji<'_, '_> = Emoji("✅ ", "[OK] ");
static WARN: Emoji<'_, '_> = Emoji("⚠️  ", "[!] ");
static SPARKLE: Emoji<'_, '_> = Emoji("✨ ", "");

pub fn run(
    config: &Config,
    source: Option<PathBuf>,
    output: Option<PathBuf>,
    show_sections: bool,
    to_stdout: bool,
) -> Result<()> {
    let started = Instant::now();
    let source = source.unwrap_or_else(|| config.resume.source.clone());
    let output = output.unwrap_or_else(|| config.resume.output.clone());
    let extractor = ResumeExtractor::new(config.resume.extract_options());

    if to_stdout {
        let text = extract_source_text(&source).context("Résumé extraction aborted")?;
        let lines = normalize_lines(&text);
        let record = extractor.extract(&lines);
        println!("{}", serde_json::to_string_pretty(&record)?);
        return Ok(());
    }

    super::banner("Résumé Extraction");
    println!("{}Source: {}", PAPER, style(source.display()).cyan());
    println!();

    let spinner = super::spinner(PAPER, format!("Reading {}...", source.display()))?;
    let text = extract_source_text(&source);
    spinner.finish_and_clear();
    let text = text.context("Résumé extraction aborted; no output written")?;

    let lines = normalize_lines(&text);
    let sections = extractor.sections(&lines);
    println!(
        "{}Read {} lines in {} sections",
        CHECK,
        style(lines.len()).green().bold(),
        style(sections.len()).green().bold()
    );

    if show_sections {
        print_sections(&sections);
    }

    let record = extractor.extract_from_sections(&lines, &sections);
    print_record_summary(&record);

    export_record(&record, &output)?;
    println!();
    println!("{}Wrote {}", CHECK, style(output.display()).cyan());
    println!();
    println!(
        "{}Done in {}",
        SPARKLE,
        style(HumanDuration(started.elapsed())).green().bold()
    );

    Ok(())
}

fn print_sections(sections: &[Section]) {
    println!();
    for section in sections {
        println!(
            "  {} {} {}",
            style("■").cyan(),
            style(&section.title).bold(),
            style(format!("({} lines)", section.items.len())).dim()
        );
        for item in &section.items {
            println!("      {}", style(item).dim());
        }
    }
}

fn print_record_summary(record: &ResumeRecord) {
    println!();
    let name = if record.name.is_empty() {
        style("(not found)".to_string()).yellow()
    } else {
        style(record.name.clone()).green()
    };
    println!("  {} Name: {}", style("•").cyan(), name);

    let contact = &record.contact;
    for (label, value) in [
        ("Email", &contact.email),
        ("Phone", &contact.phone),
        ("LinkedIn", &contact.linkedin),
        ("Portfolio", &contact.portfolio),
    ] {
        if !value.is_empty() {
            println!("  {} {}: {}", style("•").cyan(), label, style(value).cyan());
        }
    }

    for (label, count) in [
        ("Summary", record.summary.len()),
        ("Skills", record.skills.len()),
        ("Education", record.education.len()),
        ("Certificates", record.certificates.len()),
        ("Experiences", record.experiences.len()),
    ] {
        let count_style = if count == 0 {
            style(count).yellow()
        } else {
            style(count).green().bold()
        };
        println!("  {} {}: {}", style("•").cyan(), label, count_style);
    }

    if record.skills.is_empty() && record.experiences.is_empty() {
        println!();
        println!(
            "{}{}",
            WARN,
            style("No Skills or Experience section found; check the headers with --sections").yellow()
        );
    }
}
