use anyhow::Result;
use console::{Emoji, style};
use std::path::PathBuf;

use crate::config::Config;
use crate::export::load_record;
use crate::skills::{Classification, classify};

static TOOLBOX: Emoji<'_, '_> = Emoji("🧰 ", "");
static WARN: Emoji<'_, '_> = Emoji("⚠️  ", "[!] ");

pub fn run(config: &Config, record: Option<PathBuf>, skills: Vec<String>, json: bool) -> Result<()> {
    let skills = if skills.is_empty() {
        let path = record.unwrap_or_else(|| config.resume.output.clone());
        match load_record(&path) {
            Some(record) => record.skills,
            None => {
                if json {
                    println!("{}", serde_json::to_string_pretty(&Classification::default())?);
                } else {
                    println!(
                        "{}{}",
                        WARN,
                        style(format!("No resume data available at {}", path.display())).yellow()
                    );
                }
                return Ok(());
            }
        }
    } else {
        skills
    };

    let classification = classify(&skills);

    if json {
        println!("{}", serde_json::to_string_pretty(&classification)?);
        return Ok(());
    }

    super::banner("Skills");
    println!(
        "{}{} skills, {} after merging",
        TOOLBOX,
        style(skills.len()).green().bold(),
        style(classification.normalized.len()).green().bold()
    );

    for (title, items) in classification.groups.columns() {
        if items.is_empty() {
            continue;
        }
        println!();
        println!("  {}", style(title).bold().underlined());
        for item in items {
            println!("    {} {}", style("•").cyan(), item);
        }
    }
    println!();

    Ok(())
}
